//! Micron-to-DBU conversion and rectangle construction for test geometry.
//!
//! Test scripts describe geometry in microns; the layout toolkit's database
//! works in integer database units (DBU). The conversion itself belongs to the
//! design context and is injected through [`MicronToDbu`]; this module only
//! applies it and packages the result.

use serde::{Deserialize, Serialize};

/// Converts a micron measurement into the database's integer unit.
///
/// Implemented by the external design context. The mapping is assumed to be
/// deterministic, pure, and monotonic; nothing here validates that.
pub trait MicronToDbu {
    fn micron_to_dbu(&self, microns: f64) -> i64;
}

/// A fixed-point scale of the kind the toolkit's database applies internally.
///
/// Useful as a stand-in design context for fixtures that run without a loaded
/// design. Rounds to the nearest DBU, half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbuScale {
    dbu_per_micron: i64,
}

impl DbuScale {
    pub fn new(dbu_per_micron: i64) -> Self {
        Self { dbu_per_micron }
    }

    pub fn dbu_per_micron(&self) -> i64 {
        self.dbu_per_micron
    }
}

impl MicronToDbu for DbuScale {
    fn micron_to_dbu(&self, microns: f64) -> i64 {
        (microns * self.dbu_per_micron as f64).round() as i64
    }
}

/// An axis-aligned rectangle in DBU coordinates.
///
/// Bounds are stored exactly as supplied: `xl <= xh` and `yl <= yh` are the
/// caller's responsibility, and a degenerate rectangle is accepted silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub xl: i64,
    pub yl: i64,
    pub xh: i64,
    pub yh: i64,
}

impl Rect {
    pub fn new(xl: i64, yl: i64, xh: i64, yh: i64) -> Self {
        Self { xl, yl, xh, yh }
    }

    /// Width in DBU. Negative for inverted x bounds.
    pub fn dx(&self) -> i64 {
        self.xh - self.xl
    }

    /// Height in DBU. Negative for inverted y bounds.
    pub fn dy(&self) -> i64 {
        self.yh - self.yl
    }

    pub fn area(&self) -> i64 {
        self.dx() * self.dy()
    }
}

/// Builds a [`Rect`] from four micron coordinates, converting each through the
/// design context in the original order (xl, yl, xh, yh).
///
/// No reordering, clamping, or bounds validation is performed.
pub fn make_rect(design: &impl MicronToDbu, xl: f64, yl: f64, xh: f64, yh: f64) -> Rect {
    Rect::new(
        design.micron_to_dbu(xl),
        design.micron_to_dbu(yl),
        design.micron_to_dbu(xh),
        design.micron_to_dbu(yh),
    )
}
