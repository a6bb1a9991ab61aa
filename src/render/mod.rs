//! Output rendering: the readings table and the I-V chart.

mod table;

#[cfg(feature = "plot")]
mod plot;

pub use table::{format_current, format_measurement, format_table, format_voltage};

#[cfg(feature = "plot")]
pub use plot::{render_svg, render_svg_string};

use crate::error::{LabError, Result};

/// Default chart title.
pub const PLOT_TITLE: &str = "PN Junction I-V Characteristics";

/// Default output file for rendered plots.
pub const DEFAULT_PLOT_PATH: &str = "iv_curve.svg";

/// Chart layout.
///
/// Axis bounds stay fixed regardless of the data so successive plots in a
/// session are directly comparable.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub title: String,
    /// Voltage axis bounds (volts)
    pub x_range: (f64, f64),
    /// Current axis bounds (amperes)
    pub y_range: (f64, f64),
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: PLOT_TITLE.to_string(),
            x_range: (-5.5, 5.5),
            y_range: (-0.02, 0.05),
            width: 800,
            height: 600,
        }
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let ordered = |(lo, hi): (f64, f64)| lo.is_finite() && hi.is_finite() && lo < hi;
        if !ordered(self.x_range) || !ordered(self.y_range) {
            return Err(LabError::invalid_config("plot axis bounds must be finite and increasing"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(LabError::invalid_config("plot size must be non-zero"));
        }
        Ok(())
    }
}
