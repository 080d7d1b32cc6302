//! Suppression of known-noisy toolkit diagnostics during regression runs.
//!
//! The toolkit tags every diagnostic with a subsystem and a numeric message
//! id. A handful of informational messages (file paths being echoed back,
//! per-stage runtimes) change between runs and would make golden files flaky,
//! so the fixture layer silences them for the whole process.
//!
//! The suppression set is an explicit value: build one, or take the
//! process-wide [`standard_suppressions`], and [`install`](SuppressionSet::install)
//! it into whatever diagnostics facility the run uses. There is no
//! unsuppress; entries live for the process lifetime.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Toolkit subsystems whose diagnostics the fixture layer touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Subsystem {
    /// Power/signal integrity analysis.
    Psm,
    /// The layout database.
    Odb,
    /// Pin placement.
    Ppl,
    /// Tap-cell insertion.
    Tap,
    /// Partitioning, whose messages carry runtimes.
    Par,
}

impl Subsystem {
    /// The tag the toolkit prints in front of the message id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subsystem::Psm => "PSM",
            Subsystem::Odb => "ODB",
            Subsystem::Ppl => "PPL",
            Subsystem::Tap => "TAP",
            Subsystem::Par => "PAR",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A diagnostics facility that can silence messages by (subsystem, id).
///
/// Write-only from this crate's perspective; registering the same pair twice
/// must have no additional effect. Thread safety of the registration call is
/// the facility's concern, not guaranteed here.
pub trait DiagnosticSink {
    fn suppress(&mut self, subsystem: Subsystem, id: u32);
}

/// A set of (subsystem, message id) pairs to silence.
///
/// Order-independent and idempotent: inserting a pair twice leaves the set
/// unchanged. No removal path exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionSet {
    entries: HashSet<(Subsystem, u32)>,
}

impl SuppressionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed set of known-noisy informational messages: echoed output
    /// paths from power analysis, DEF read progress from the database, pin
    /// placement and tap-cell info, and partitioner messages with runtimes.
    pub fn standard() -> Self {
        let mut set = Self::new();
        for id in [2, 3, 5, 6, 83] {
            set.insert(Subsystem::Psm, id);
        }
        for id in [127, 134] {
            set.insert(Subsystem::Odb, id);
        }
        for id in [41, 48, 49, 60] {
            set.insert(Subsystem::Ppl, id);
        }
        for id in [100, 101] {
            set.insert(Subsystem::Tap, id);
        }
        for id in [1, 30, 109, 110] {
            set.insert(Subsystem::Par, id);
        }
        set
    }

    pub fn insert(&mut self, subsystem: Subsystem, id: u32) {
        self.entries.insert((subsystem, id));
    }

    pub fn is_suppressed(&self, subsystem: Subsystem, id: u32) -> bool {
        self.entries.contains(&(subsystem, id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subsystem, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers every entry with the diagnostics facility.
    ///
    /// Safe to call more than once against the same sink as long as the sink
    /// treats duplicate registration as a no-op.
    pub fn install<S: DiagnosticSink>(&self, sink: &mut S) {
        for (subsystem, id) in self.iter() {
            sink.suppress(subsystem, id);
        }
    }
}

/// The process-wide standard suppression set, built on first use.
pub fn standard_suppressions() -> &'static SuppressionSet {
    static SET: OnceLock<SuppressionSet> = OnceLock::new();
    SET.get_or_init(SuppressionSet::standard)
}
