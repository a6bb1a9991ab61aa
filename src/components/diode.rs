//! PN junction diode model.
//!
//! A closed-form, piecewise teaching model:
//!
//! ```text
//!   V >= 0          I = I0 * (exp(k * V) - 1)     forward bias
//!   Vbr < V < 0     I = -I0                       reverse leakage
//!   V <= Vbr        I = I_br                      breakdown
//! ```
//!
//! The step from `-I0` to `I_br` at `V == Vbr` is part of the model and is
//! not smoothed.

use crate::{BREAKDOWN_CURRENT, BREAKDOWN_VOLTAGE, FORWARD_SLOPE, SATURATION_CURRENT};

/// Parameters for the diode model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiodeParams {
    /// Reverse saturation current (I0), in amperes
    pub i0: f64,
    /// Breakdown voltage (Vbr), negative, in volts
    pub v_br: f64,
    /// Forward exponential slope coefficient (k), in 1/V
    pub k: f64,
    /// Current flowing at and beyond breakdown, in amperes
    pub i_br: f64,
}

impl Default for DiodeParams {
    fn default() -> Self {
        Self {
            i0: SATURATION_CURRENT,
            v_br: BREAKDOWN_VOLTAGE,
            k: FORWARD_SLOPE,
            i_br: BREAKDOWN_CURRENT,
        }
    }
}

/// Diode current/voltage model.
#[derive(Debug, Clone, Default)]
pub struct DiodeModel {
    pub params: DiodeParams,
}

impl DiodeModel {
    /// Create a model with the lab's default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model with custom parameters.
    pub fn with_params(params: DiodeParams) -> Self {
        Self { params }
    }

    /// Calculate the diode current at a given voltage.
    ///
    /// Total over the real line; the branches are tested in order and the
    /// first match wins, so `v == v_br` falls into breakdown.
    pub fn current(&self, v: f64) -> f64 {
        let p = &self.params;
        if v >= 0.0 {
            p.i0 * ((p.k * v).exp() - 1.0)
        } else if v > p.v_br {
            -p.i0
        } else {
            p.i_br
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_diode_zero_bias() {
        let d = DiodeModel::new();
        assert_eq!(d.current(0.0), 0.0);
        // Reverse selector at 0 V produces -0.0, still forward branch
        assert_eq!(d.current(-0.0), 0.0);
    }

    #[test]
    fn test_diode_forward_bias() {
        let d = DiodeModel::new();
        for &v in &[0.1, 0.3, 0.5, 1.2, 5.0] {
            assert_relative_eq!(d.current(v), 1e-6 * ((25.0 * v).exp() - 1.0));
        }

        let i_small = d.current(0.3);
        let i_large = d.current(0.6);
        assert!(i_large > i_small * 100.0);
    }

    #[test]
    fn test_diode_forward_bias_at_0_7_volts() {
        let d = DiodeModel::new();
        let i = d.current(0.7);
        assert_relative_eq!(i, 1e-6 * (17.5f64.exp() - 1.0));
        assert_relative_eq!(i, 39.9, max_relative = 1e-2);
    }

    #[test]
    fn test_diode_reverse_leakage() {
        let d = DiodeModel::new();
        for &v in &[-1e-9, -0.1, -0.5, -0.6999] {
            assert_eq!(d.current(v), -1e-6);
        }
    }

    #[test]
    fn test_diode_breakdown_boundary_inclusive() {
        let d = DiodeModel::new();
        assert_eq!(d.current(-0.7), -1e-2);
        assert_eq!(d.current(-0.6999), -1e-6);
        for &v in &[-0.71, -1.0, -5.0, -1e6] {
            assert_eq!(d.current(v), -1e-2);
        }
    }

    #[test]
    fn test_custom_params() {
        let d = DiodeModel::with_params(DiodeParams {
            v_br: -2.0,
            ..DiodeParams::default()
        });
        assert_eq!(d.current(-1.0), -1e-6);
        assert_eq!(d.current(-2.0), -1e-2);
    }
}
