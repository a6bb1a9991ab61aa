//! Bias direction selector.

use std::fmt;
use std::str::FromStr;

/// Direction of the applied bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bias {
    #[default]
    Forward,
    Reverse,
}

impl Bias {
    /// Apply this bias direction to a selected voltage magnitude.
    ///
    /// The sign of `magnitude` is discarded: Forward yields `+|v|`,
    /// Reverse yields `-|v|`.
    pub fn signed_voltage(self, magnitude: f64) -> f64 {
        match self {
            Bias::Forward => magnitude.abs(),
            Bias::Reverse => -magnitude.abs(),
        }
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bias::Forward => write!(f, "Forward"),
            Bias::Reverse => write!(f, "Reverse"),
        }
    }
}

impl FromStr for Bias {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forward" | "fwd" | "f" => Ok(Bias::Forward),
            "reverse" | "rev" | "r" => Ok(Bias::Reverse),
            other => Err(format!("unknown bias '{}' (expected forward or reverse)", other)),
        }
    }
}
