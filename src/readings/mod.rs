//! Measurement bookkeeping.
//!
//! The [`ReadingLog`] stores raw `(voltage, current)` pairs in insertion
//! order, bounded to a fixed capacity. The [`PlotView`] is computed on demand
//! from the raw log whenever a plot is requested.

mod reading_log;
mod view;

pub use self::reading_log::{Reading, ReadingLog};
pub use self::view::{dedup_sorted, interpolate, linspace, PlotView};

/// Maximum number of readings per session.
pub const DEFAULT_CAPACITY: usize = 10;

/// Number of dense samples in the interpolated curve.
pub const DEFAULT_INTERPOLATION_SAMPLES: usize = 200;
