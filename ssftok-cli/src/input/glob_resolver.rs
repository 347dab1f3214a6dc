//! Input path resolution using glob

use anyhow::{Context, Result};
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// What an input path expands to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPlan {
    /// A single document
    File(PathBuf),
    /// Every file below `root`, recursively, sorted
    Directory {
        /// The directory given on the command line
        root: PathBuf,
        /// Files found below it
        files: Vec<PathBuf>,
    },
}

/// Resolve an input path to a single file or a recursive file listing
pub fn resolve_input(path: &Path) -> Result<InputPlan> {
    if path.is_file() {
        return Ok(InputPlan::File(path.to_path_buf()));
    }

    if !path.is_dir() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let root = path.to_str().ok_or_else(|| {
        CliError::InvalidPattern(format!("non UTF-8 path: {}", path.display()))
    })?;
    let pattern = format!("{}/**/*", Pattern::escape(root.trim_end_matches('/')));

    let mut files = Vec::new();
    let paths = glob(&pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;

    for path_result in paths {
        let file = path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

        if file.is_file() {
            files.push(file);
        }
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(InputPlan::Directory {
        root: path.to_path_buf(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();

        assert_eq!(resolve_input(&file).unwrap(), InputPlan::File(file));
    }

    #[test]
    fn test_directory_is_walked_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("deeper");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("b.txt"), "x").unwrap();
        fs::write(nested.join("a.txt"), "y").unwrap();

        match resolve_input(temp_dir.path()).unwrap() {
            InputPlan::Directory { root, files } => {
                assert_eq!(root, temp_dir.path());
                assert_eq!(files.len(), 2);
                assert!(files.contains(&nested.join("a.txt")));
                assert!(files.contains(&temp_dir.path().join("b.txt")));
            }
            other => panic!("expected directory plan, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_with_glob_characters() {
        let temp_dir = TempDir::new().unwrap();
        let odd = temp_dir.path().join("data[1]");
        fs::create_dir_all(&odd).unwrap();
        fs::write(odd.join("c.txt"), "z").unwrap();

        match resolve_input(&odd).unwrap() {
            InputPlan::Directory { files, .. } => assert_eq!(files, vec![odd.join("c.txt")]),
            other => panic!("expected directory plan, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        match resolve_input(temp_dir.path()).unwrap() {
            InputPlan::Directory { files, .. } => assert!(files.is_empty()),
            other => panic!("expected directory plan, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_path() {
        let err = resolve_input(Path::new("/nonexistent/ssftok/input")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }
}
