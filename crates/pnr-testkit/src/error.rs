//! Error types for fixture operations.

use thiserror::Error;

/// Top-level error type for fixture operations.
///
/// Only environment failures surface here. Semantic mismatches — two files
/// that differ, a rectangle with inverted bounds — are expected outcomes in a
/// regression run and are reported through [`crate::diff::DiffOutcome`] or
/// accepted silently, never as an error.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the filesystem (unreadable file, directory creation,
    /// current-directory resolution).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
