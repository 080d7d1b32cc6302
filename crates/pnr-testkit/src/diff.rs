//! Line-oriented golden-file comparison.
//!
//! A short-circuiting, first-difference-only oracle: it pinpoints the first
//! divergent line (or a line-count mismatch) and stops. Two files differing is
//! an expected outcome in a regression run, so it is reported through
//! [`DiffOutcome`] and an exit-style status code rather than an error.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Outcome of comparing two text files line-by-line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffOutcome {
    /// Every line matched and both files have the same line count.
    Identical,
    /// The first divergence within the common prefix.
    LineMismatch {
        /// 1-based number of the first differing line.
        line: usize,
        /// The raw line from the first file, terminator included.
        left: String,
        /// The raw line from the second file, terminator included.
        right: String,
    },
    /// All common-prefix lines matched but the files have different lengths.
    LineCountMismatch {
        /// Total line count of the first file.
        left: usize,
        /// Total line count of the second file.
        right: usize,
    },
}

impl DiffOutcome {
    /// Exit-style status: 0 for identical files, 1 for any difference.
    pub fn status(&self) -> i32 {
        match self {
            DiffOutcome::Identical => 0,
            _ => 1,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, DiffOutcome::Identical)
    }
}

impl fmt::Display for DiffOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffOutcome::Identical => write!(f, "No differences found."),
            DiffOutcome::LineMismatch { line, left, right } => {
                writeln!(f, "Differences found at line {}.", line)?;
                writeln!(f, "{}", strip_newline(left))?;
                write!(f, "{}", strip_newline(right))
            }
            DiffOutcome::LineCountMismatch { left, right } => {
                write!(f, "Number of lines differs {} vs {}.", left, right)
            }
        }
    }
}

fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

/// Splits file content into lines, each keeping its trailing `\n`.
/// A final unterminated line is kept as-is.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.split_inclusive('\n').map(str::to_owned).collect())
}

/// Compares two text files line-by-line, stopping at the first divergence.
///
/// Lines are compared by exact string equality, terminators included, over the
/// common prefix. A mismatch short-circuits; equal prefixes of unequal length
/// report both line counts. I/O failures (missing file, permissions)
/// propagate as errors.
pub fn compare_files(left: &Path, right: &Path) -> Result<DiffOutcome> {
    let lines1 = read_lines(left)?;
    let lines2 = read_lines(right)?;

    for (i, (l1, l2)) in lines1.iter().zip(lines2.iter()).enumerate() {
        if l1 != l2 {
            return Ok(DiffOutcome::LineMismatch {
                line: i + 1,
                left: l1.clone(),
                right: l2.clone(),
            });
        }
    }

    if lines1.len() != lines2.len() {
        return Ok(DiffOutcome::LineCountMismatch {
            left: lines1.len(),
            right: lines2.len(),
        });
    }

    Ok(DiffOutcome::Identical)
}

/// Compares two files, prints the outcome to stdout, and returns the status
/// code: 0 for identical, 1 for any difference.
pub fn diff_files(left: &Path, right: &Path) -> Result<i32> {
    let outcome = compare_files(left, right)?;
    println!("{}", outcome);
    Ok(outcome.status())
}
