//! Solutions for the 2022 calendar

pub mod day_1;
pub mod day_4;
pub mod day_7;
pub mod day_8;
pub mod day_9;
pub mod day_10;
pub mod day_11;
pub mod day_12;
