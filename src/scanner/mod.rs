//! Vehicle file discovery and validation for batch runs

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Supported vehicle file extensions
const VEHICLE_EXTENSIONS: &[&str] = &["json"];

/// Check if a path is a supported vehicle file
pub fn is_vehicle_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VEHICLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Validate a vehicle file exists and is a regular file
pub fn validate_vehicle_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(Error::InvalidVehicleFile {
            path: path.display().to_string(),
            reason: "not a regular file".to_string(),
        });
    }
    Ok(())
}

/// Recursively collect vehicle files under a directory, sorted for
/// reproducible batch order.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::FileNotFound(dir.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_vehicle_file(path))
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_vehicle_file() {
        assert!(is_vehicle_file(Path::new("creta.json")));
        assert!(is_vehicle_file(Path::new("CRETA.JSON")));
        assert!(!is_vehicle_file(Path::new("creta.csv")));
        assert!(!is_vehicle_file(Path::new("creta")));
    }

    #[test]
    fn test_scan_directory_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip me").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.json"), "{}").unwrap();

        let files = scan_directory(dir.path()).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files[0].ends_with("a.json"));
        assert!(files[1].ends_with("b.json"));
        assert!(files[2].ends_with("nested/c.json"));
    }

    #[test]
    fn test_scan_missing_directory() {
        let result = scan_directory(Path::new("/does/not/exist"));
        assert!(result.is_err());
    }
}
