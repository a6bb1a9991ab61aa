//! Session configuration.

use crate::error::{LabError, Result};
use crate::readings::{DEFAULT_CAPACITY, DEFAULT_INTERPOLATION_SAMPLES};
use crate::{DEFAULT_VOLTAGE_STEP, MAX_VOLTAGE, MIN_VOLTAGE};

/// Configuration for a lab session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Maximum number of readings the log accepts.
    pub capacity: usize,
    /// Dense samples in the interpolated I-V curve.
    pub interpolation_samples: usize,
    /// Lowest selectable voltage (volts).
    pub min_voltage: f64,
    /// Highest selectable voltage (volts).
    pub max_voltage: f64,
    /// Voltage selector step (volts).
    pub voltage_step: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            interpolation_samples: DEFAULT_INTERPOLATION_SAMPLES,
            min_voltage: MIN_VOLTAGE,
            max_voltage: MAX_VOLTAGE,
            voltage_step: DEFAULT_VOLTAGE_STEP,
        }
    }
}

impl SessionConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reading capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the number of interpolated curve samples.
    pub fn with_interpolation_samples(mut self, samples: usize) -> Self {
        self.interpolation_samples = samples;
        self
    }

    /// Set the selectable voltage range.
    pub fn with_voltage_range(mut self, min: f64, max: f64) -> Self {
        self.min_voltage = min;
        self.max_voltage = max;
        self
    }

    /// Set the voltage selector step.
    pub fn with_voltage_step(mut self, step: f64) -> Self {
        self.voltage_step = step;
        self
    }

    /// Check the configuration for values a session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(LabError::invalid_config("capacity must be at least 1"));
        }
        if self.interpolation_samples < 2 {
            return Err(LabError::invalid_config(
                "interpolation needs at least 2 samples",
            ));
        }
        if !(self.min_voltage.is_finite()
            && self.max_voltage.is_finite()
            && self.min_voltage < self.max_voltage)
        {
            return Err(LabError::invalid_config(format!(
                "voltage range [{}, {}] is empty or not finite",
                self.min_voltage, self.max_voltage
            )));
        }
        if !(self.voltage_step.is_finite() && self.voltage_step > 0.0) {
            return Err(LabError::invalid_config(format!(
                "voltage step {} must be positive",
                self.voltage_step
            )));
        }
        Ok(())
    }

    /// Validate a selector value and snap it to the selector step.
    pub fn select_voltage(&self, magnitude: f64) -> Result<f64> {
        if !(self.min_voltage..=self.max_voltage).contains(&magnitude) {
            return Err(LabError::VoltageOutOfRange {
                voltage: magnitude,
                min: self.min_voltage,
                max: self.max_voltage,
            });
        }
        // Scaling by the step count per volt keeps decimal steps exact (7 / 10 == 0.7)
        let per_volt = 1.0 / self.voltage_step;
        if (per_volt - per_volt.round()).abs() < 1e-9 {
            let per_volt = per_volt.round();
            Ok((magnitude * per_volt).round() / per_volt)
        } else {
            Ok((magnitude / self.voltage_step).round() * self.voltage_step)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.capacity, 10);
        assert_eq!(config.interpolation_samples, 200);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(SessionConfig::new().with_capacity(0).validate().is_err());
        assert!(SessionConfig::new()
            .with_interpolation_samples(1)
            .validate()
            .is_err());
        assert!(SessionConfig::new()
            .with_voltage_range(1.0, -1.0)
            .validate()
            .is_err());
        assert!(SessionConfig::new().with_voltage_step(0.0).validate().is_err());
    }

    #[test]
    fn test_select_voltage_snaps_to_step() {
        let config = SessionConfig::new();
        assert_eq!(config.select_voltage(0.7).unwrap(), 0.7);
        assert_eq!(config.select_voltage(0.68).unwrap(), 0.7);
        assert_eq!(config.select_voltage(-2.449).unwrap(), -2.4);
        assert_eq!(config.select_voltage(5.0).unwrap(), 5.0);
    }

    #[test]
    fn test_select_voltage_rejects_out_of_range() {
        let config = SessionConfig::new();
        assert!(matches!(
            config.select_voltage(5.1),
            Err(LabError::VoltageOutOfRange { .. })
        ));
        assert!(config.select_voltage(-7.0).is_err());
        assert!(config.select_voltage(f64::NAN).is_err());
    }
}
