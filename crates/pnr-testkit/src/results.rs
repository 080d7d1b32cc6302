//! Result-file path resolution for regression runs.
//!
//! Fresh outputs land under a `results` directory in the working directory,
//! with a suffix on the basename so they never collide with the reference
//! outputs checked in next to the tests.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Marker inserted before the extension of every result filename,
/// identifying the scripted implementation variant that produced the file.
pub const RESULT_SUFFIX: &str = "-py";

/// Resolves the result path for `filename` under `<cwd>/results/`.
///
/// Creates the `results` directory if it does not exist; calling this twice in
/// a row never fails on the existing directory. The suffix is inserted
/// immediately before the final extension, so `"foo.txt"` becomes
/// `results/foo-py.txt` and an extensionless `"foo"` becomes `results/foo-py`.
///
/// Only the single `results` level is created; other filesystem errors
/// (permissions, disk full) propagate.
pub fn make_result_file(filename: &str) -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    result_file_in(&cwd, filename)
}

/// Same resolution as [`make_result_file`] against an explicit root directory.
pub fn result_file_in(root: &Path, filename: &str) -> Result<PathBuf> {
    let result_dir = root.join("results");
    match fs::create_dir(&result_dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
        Err(e) => return Err(e.into()),
    }

    let (stem, ext) = split_extension(filename);
    Ok(result_dir.join(format!("{}{}{}", stem, RESULT_SUFFIX, ext)))
}

/// Splits a filename at its last dot, returning `(stem, extension)` where the
/// extension keeps its leading dot. A name with no dot has an empty extension,
/// and leading dots (dotfiles) never count as an extension separator.
fn split_extension(filename: &str) -> (&str, &str) {
    let leading = filename.len() - filename.trim_start_matches('.').len();
    match filename[leading..].rfind('.') {
        Some(idx) => filename.split_at(leading + idx),
        None => (filename, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_suffix_inserted_before_extension() {
        let dir = TempDir::new().unwrap();
        let path = result_file_in(dir.path(), "foo.txt").unwrap();
        assert!(path.ends_with("results/foo-py.txt"), "{:?}", path);
    }

    #[test]
    fn test_no_extension_gets_bare_suffix() {
        let dir = TempDir::new().unwrap();
        let path = result_file_in(dir.path(), "foo").unwrap();
        assert!(path.ends_with("results/foo-py"), "{:?}", path);
    }

    #[test]
    fn test_multi_dot_splits_at_last_dot() {
        let dir = TempDir::new().unwrap();
        let path = result_file_in(dir.path(), "a.b.txt").unwrap();
        assert!(path.ends_with("results/a.b-py.txt"), "{:?}", path);
    }

    #[test]
    fn test_directory_creation_is_idempotent() {
        let dir = TempDir::new().unwrap();
        result_file_in(dir.path(), "first.def").unwrap();
        assert!(dir.path().join("results").is_dir());
        // Second call must tolerate the existing directory.
        result_file_in(dir.path(), "second.def").unwrap();
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("foo.txt"), ("foo", ".txt"));
        assert_eq!(split_extension("foo"), ("foo", ""));
        assert_eq!(split_extension("a.b.txt"), ("a.b", ".txt"));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
        assert_eq!(split_extension(".hidden.txt"), (".hidden", ".txt"));
    }
}
