//! Device models for the lab bench.
//!
//! - [`DiodeModel`]: closed-form PN junction current as a function of voltage
//! - [`Bias`]: forward/reverse selector that signs the applied voltage

mod bias;
mod diode;

pub use bias::Bias;
pub use diode::{DiodeModel, DiodeParams};
