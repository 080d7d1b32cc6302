//! End-to-end fixture flow: build geometry, name a result file, write a fresh
//! output, and compare it against its golden file.
//!
//! ```bash
//! cargo test -p pnr-testkit --test fixture_e2e
//! ```

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use pnr_testkit::{
    compare_files, diff_files, make_rect, make_result_file, result_file_in,
    standard_suppressions, DbuScale, DiagnosticSink, DiffOutcome, Rect, Subsystem,
};

/// Sink double standing in for the toolkit's diagnostics facility.
#[derive(Default)]
struct FakeDiagnostics {
    silenced: std::collections::HashSet<(Subsystem, u32)>,
}

impl DiagnosticSink for FakeDiagnostics {
    fn suppress(&mut self, subsystem: Subsystem, id: u32) {
        self.silenced.insert((subsystem, id));
    }
}

#[test]
fn test_full_golden_comparison_flow() {
    let work = TempDir::new().unwrap();

    // Quiet the run the way a test script would, before the toolkit speaks.
    let mut diagnostics = FakeDiagnostics::default();
    standard_suppressions().install(&mut diagnostics);
    assert!(diagnostics.silenced.contains(&(Subsystem::Odb, 127)));

    // Geometry input: a 100x100 µm die at 2000 DBU/µm.
    let design = DbuScale::new(2000);
    let die = make_rect(&design, 0.0, 0.0, 100.0, 100.0);
    assert_eq!(die, Rect::new(0, 0, 200_000, 200_000));

    // The toolkit would write its report to the resolved result path.
    let fresh = result_file_in(work.path(), "die_area.rpt").unwrap();
    fs::write(&fresh, format!("die {} {} {} {}\n", die.xl, die.yl, die.xh, die.yh)).unwrap();

    // Golden file from a previously accepted run.
    let golden = work.path().join("die_area.rptok");
    fs::write(&golden, "die 0 0 200000 200000\n").unwrap();

    assert_eq!(diff_files(&golden, &fresh).unwrap(), 0);
}

#[test]
fn test_regression_detected_against_golden() {
    let work = TempDir::new().unwrap();

    let fresh = result_file_in(work.path(), "pins.rpt").unwrap();
    fs::write(&fresh, "pin clk placed\npin rst placed\n").unwrap();

    let golden = work.path().join("pins.rptok");
    fs::write(&golden, "pin clk placed\npin rst unplaced\n").unwrap();

    let outcome = compare_files(&golden, &fresh).unwrap();
    assert_eq!(
        outcome,
        DiffOutcome::LineMismatch {
            line: 2,
            left: "pin rst unplaced\n".to_owned(),
            right: "pin rst placed\n".to_owned(),
        }
    );
}

/// Re-installing the suppression set is a no-op for a set-backed sink.
#[test]
fn test_double_install_is_idempotent() {
    let mut diagnostics = FakeDiagnostics::default();
    standard_suppressions().install(&mut diagnostics);
    let after_first = diagnostics.silenced.len();
    standard_suppressions().install(&mut diagnostics);
    assert_eq!(diagnostics.silenced.len(), after_first);
}

/// `make_result_file` resolves against the process working directory. This is
/// the only test in the suite that changes it.
#[test]
fn test_make_result_file_uses_cwd() {
    let work = TempDir::new().unwrap();
    std::env::set_current_dir(work.path()).unwrap();

    let path = make_result_file("gcd.def").unwrap();
    assert!(path.ends_with("results/gcd-py.def"), "{:?}", path);
    assert!(work.path().join("results").is_dir());

    // Idempotent with respect to the directory.
    make_result_file("gcd.def").unwrap();
}
