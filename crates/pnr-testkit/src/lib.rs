//! Test-fixture support for place-and-route toolkit regression runs.
//!
//! This crate provides the small primitives the regression suite leans on:
//! building geometry inputs in the toolkit's database units, naming fresh
//! output files so they sit next to (but never collide with) golden files,
//! comparing a fresh output against its golden file, and silencing the
//! toolkit diagnostics that are known to vary run-to-run.
//!
//! The four pieces are independent; test scripts call whichever they need.
//!
//! # Example
//!
//! ```no_run
//! use pnr_testkit::{diff_files, make_rect, make_result_file, DbuScale};
//!
//! let design = DbuScale::new(2000);
//! let die = make_rect(&design, 0.0, 0.0, 100.0, 100.0);
//! assert_eq!(die.xh, 200_000);
//!
//! let fresh = make_result_file("gcd_route.def").unwrap();
//! // ... run the toolkit, write `fresh` ...
//! let status = diff_files(std::path::Path::new("gcd_route.defok"), &fresh).unwrap();
//! assert_eq!(status, 0);
//! ```
//!
//! # Modules
//!
//! - [`diff`]: line-oriented golden-file comparison
//! - [`error`]: error type for fixture operations
//! - [`geom`]: micron-to-DBU conversion and rectangle construction
//! - [`results`]: result-file path resolution
//! - [`suppress`]: diagnostic suppression configuration

pub mod diff;
pub mod error;
pub mod geom;
pub mod results;
pub mod suppress;

// Re-export commonly used types at the crate root
pub use diff::{compare_files, diff_files, DiffOutcome};
pub use error::{Error, Result};
pub use geom::{make_rect, DbuScale, MicronToDbu, Rect};
pub use results::{make_result_file, result_file_in, RESULT_SUFFIX};
pub use suppress::{standard_suppressions, DiagnosticSink, Subsystem, SuppressionSet};
