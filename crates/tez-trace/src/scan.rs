//! Source directory scanning.

use std::path::{Path, PathBuf};

use tez_types::ToolchainError;

/// List trace files with the given extension, sorted by filename.
///
/// A missing or unreadable directory is `TraceSourceNotFound`; an existing
/// directory with no matching files is simply empty.
pub fn trace_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ToolchainError> {
    let entries = std::fs::read_dir(dir).map_err(|_| ToolchainError::TraceSourceNotFound {
        dir: dir.display().to_string(),
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// List contract names in an archive directory (one subdirectory per
/// contract), sorted.
pub fn contract_names(dir: &Path) -> Result<Vec<String>, ToolchainError> {
    let entries = std::fs::read_dir(dir).map_err(|_| ToolchainError::TraceSourceNotFound {
        dir: dir.display().to_string(),
    })?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_trace_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.csv"), "").unwrap();
        fs::write(dir.path().join("a.csv"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = trace_files(dir.path(), "csv").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_contract_names_lists_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("token")).unwrap();
        fs::create_dir(dir.path().join("auction")).unwrap();
        fs::write(dir.path().join("addressList.json"), "{}").unwrap();

        let names = contract_names(dir.path()).unwrap();
        assert_eq!(names, vec!["auction", "token"]);
    }
}
