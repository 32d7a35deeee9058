//! File-based store for puzzle inputs

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// Looks up puzzle inputs on disk.
///
/// Directory structure: `{root}/{year}/day{day:02}.txt`
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The expected path for a specific year/day
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).exists()
    }

    /// Load the input for a year/day
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        if !path.exists() {
            return Err(InputError::NotFound(path));
        }
        Ok(fs::read_to_string(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_layout() {
        let store = InputStore::new(PathBuf::from("/data"));
        assert_eq!(
            store.path(2022, 1),
            PathBuf::from("/data/2022/day01.txt")
        );
        assert_eq!(
            store.path(2022, 25),
            PathBuf::from("/data/2022/day25.txt")
        );
    }

    #[test]
    fn load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2022, 12));
        assert!(matches!(
            store.load(2022, 12),
            Err(InputError::NotFound(_))
        ));

        let dir = temp.path().join("2022");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("day12.txt"), "Sabqponm\n").unwrap();

        assert!(store.contains(2022, 12));
        assert_eq!(store.load(2022, 12).unwrap(), "Sabqponm\n");
    }
}
