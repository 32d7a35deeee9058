//! Small input helpers shared by the daily solutions

/// Iterate over the non-empty lines of a puzzle input, ignoring trailing
/// whitespace on each line.
pub(crate) fn lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_trailing_lines() {
        let collected: Vec<_> = lines("a\n\nb \nc\n\n").collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
    }
}
