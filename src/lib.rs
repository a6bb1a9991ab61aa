//! # PN Junction Lab
//!
//! An interactive simulator of PN junction diode I-V characteristics.
//!
//! The user picks a bias direction and a voltage, the lab computes the diode
//! current with a closed-form model, records the reading, and plots the
//! collected readings as an interpolated I-V curve.
//!
//! ## Architecture
//!
//! - [`components`] - Diode model and bias selector
//! - [`readings`] - Bounded reading log and the derived plot view
//! - [`session`] - Explicit session state and command dispatch
//! - [`script`] - Command language read by the console
//! - [`render`] - Readings table and I-V chart output
//! - [`console`] - Interactive front-end (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! pnlab                      # interactive
//! pnlab sweep.lab -o iv.svg  # run a command script
//! ```
//!
//! ### Library
//!
//! ```rust
//! use pn_junction_lab::{Bias, Session};
//!
//! let mut session = Session::new();
//! let reading = session.measure(Bias::Forward, 0.3).unwrap();
//! assert!(reading.current > 0.0);
//!
//! let view = session.plot_view();
//! assert_eq!(view.points.len(), 1);
//! assert!(view.curve.is_none());
//! ```
//!
//! ## Diode Model
//!
//! ```text
//!   V >= 0          I = I0 * (exp(k * V) - 1)
//!   Vbr < V < 0     I = -I0
//!   V <= Vbr        I = -10 mA
//! ```
//!
//! `k = 25 /V` exaggerates the forward knee for teaching; it is not a
//! physical silicon thermal voltage.

pub mod components;
pub mod error;
pub mod readings;
pub mod render;
pub mod script;
pub mod session;

#[cfg(feature = "cli")]
pub mod console;

// Re-export main types for convenience
pub use components::{Bias, DiodeModel};
pub use error::{LabError, Result};
pub use readings::{PlotView, Reading, ReadingLog};
pub use session::{Outcome, Session, SessionConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmLab;

/// Reverse saturation current I0 (A)
pub const SATURATION_CURRENT: f64 = 1e-6;

/// Breakdown voltage Vbr (V)
pub const BREAKDOWN_VOLTAGE: f64 = -0.7;

/// Forward-bias exponential slope coefficient k (1/V)
pub const FORWARD_SLOPE: f64 = 25.0;

/// Current at and beyond breakdown (A)
pub const BREAKDOWN_CURRENT: f64 = -1e-2;

/// Lowest selectable voltage (V)
pub const MIN_VOLTAGE: f64 = -5.0;

/// Highest selectable voltage (V)
pub const MAX_VOLTAGE: f64 = 5.0;

/// Voltage selector step (V)
pub const DEFAULT_VOLTAGE_STEP: f64 = 0.1;
