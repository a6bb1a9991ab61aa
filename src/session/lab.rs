//! Lab session state and command dispatch.

use log::{debug, info};

use crate::components::{Bias, DiodeModel};
use crate::error::{LabError, Result};
use crate::readings::{PlotView, Reading, ReadingLog};
use crate::script::Command;

use super::SessionConfig;

/// Result of dispatching one command against a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A new reading was recorded.
    Measured(Reading),
    /// The command was rejected without changing state.
    Warning(String),
    /// Raw readings in insertion order.
    Table(Vec<Reading>),
    /// Plot view ready for rendering, with an optional output override.
    Plot {
        view: PlotView,
        path: Option<String>,
    },
    /// Nothing has been measured yet; nothing to show.
    Empty,
    /// The log was cleared.
    Reset,
    Help,
    Quit,
}

/// One interactive lab session.
///
/// Holds every piece of mutable state; callers own the session and pass it
/// to whatever handles user actions.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    diode: DiodeModel,
    log: ReadingLog,
}

impl Session {
    /// Create a session with default configuration.
    pub fn new() -> Self {
        let config = SessionConfig::default();
        Self {
            log: ReadingLog::with_capacity(config.capacity),
            diode: DiodeModel::new(),
            config,
        }
    }

    /// Create a session with custom configuration.
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            log: ReadingLog::with_capacity(config.capacity),
            diode: DiodeModel::new(),
            config,
        })
    }

    /// Take a measurement: derive the signed voltage, compute the current and
    /// record the reading.
    ///
    /// A full log is reported before the voltage is validated.
    pub fn measure(&mut self, bias: Bias, magnitude: f64) -> Result<Reading> {
        self.log.check_capacity()?;
        let selected = self.config.select_voltage(magnitude)?;
        let voltage = bias.signed_voltage(selected);
        let current = self.diode.current(voltage);
        let reading = self.log.append(voltage, current)?;
        debug!(
            "{} bias: {:.2} V -> {:.3e} A ({} of {})",
            bias,
            voltage,
            current,
            self.log.len(),
            self.log.capacity()
        );
        Ok(reading)
    }

    /// Derive the deduplicated, sorted and interpolated view of the log.
    pub fn plot_view(&self) -> PlotView {
        PlotView::derive(self.log.readings(), self.config.interpolation_samples)
    }

    /// Clear all readings.
    pub fn reset(&mut self) {
        info!("resetting experiment ({} readings discarded)", self.log.len());
        self.log.reset();
    }

    /// Dispatch one command.
    ///
    /// A full log yields [`Outcome::Warning`] rather than an error; other
    /// failures (out-of-range voltages) are returned as errors and leave the
    /// session unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Measure { bias, magnitude } => match self.measure(bias, magnitude) {
                Ok(reading) => Ok(Outcome::Measured(reading)),
                Err(err @ LabError::CapacityExceeded { .. }) => {
                    Ok(Outcome::Warning(err.to_string()))
                }
                Err(err) => Err(err),
            },
            Command::Table => {
                if self.log.is_empty() {
                    Ok(Outcome::Empty)
                } else {
                    Ok(Outcome::Table(self.log.readings().to_vec()))
                }
            }
            Command::Plot { path } => {
                if self.log.is_empty() {
                    Ok(Outcome::Empty)
                } else {
                    Ok(Outcome::Plot {
                        view: self.plot_view(),
                        path,
                    })
                }
            }
            Command::Reset => {
                self.reset();
                Ok(Outcome::Reset)
            }
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    pub fn readings(&self) -> &[Reading] {
        self.log.readings()
    }

    pub fn log(&self) -> &ReadingLog {
        &self.log
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn diode(&self) -> &DiodeModel {
        &self.diode
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn measure(bias: Bias, magnitude: f64) -> Command {
        Command::Measure { bias, magnitude }
    }

    #[test]
    fn test_forward_measurement_end_to_end() {
        let mut session = Session::new();
        let outcome = session.execute(measure(Bias::Forward, 0.7)).unwrap();
        match outcome {
            Outcome::Measured(r) => {
                assert_eq!(r.voltage, 0.7);
                assert_relative_eq!(r.current, 1e-6 * (17.5f64.exp() - 1.0));
                assert_relative_eq!(r.current, 39.9, max_relative = 1e-2);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(session.readings().len(), 1);
    }

    #[test]
    fn test_reverse_measurement_uses_negative_voltage() {
        let mut session = Session::new();
        let r = session.measure(Bias::Reverse, 0.3).unwrap();
        assert_eq!(r.voltage, -0.3);
        assert_eq!(r.current, -1e-6);

        let r = session.measure(Bias::Reverse, -0.7).unwrap();
        assert_eq!(r.voltage, -0.7);
        assert_eq!(r.current, -1e-2);
    }

    #[test]
    fn test_eleventh_measurement_warns() {
        let mut session = Session::new();
        for i in 0..10 {
            let outcome = session.execute(measure(Bias::Forward, i as f64 * 0.1)).unwrap();
            assert!(matches!(outcome, Outcome::Measured(_)));
        }
        let outcome = session.execute(measure(Bias::Forward, 1.0)).unwrap();
        assert_eq!(
            outcome,
            Outcome::Warning("You can only take 10 readings.".to_string())
        );
        assert_eq!(session.readings().len(), 10);

        // Still continuable: plot and reset work
        assert!(matches!(
            session.execute(Command::Plot { path: None }).unwrap(),
            Outcome::Plot { .. }
        ));
        assert_eq!(session.execute(Command::Reset).unwrap(), Outcome::Reset);
        assert!(session.readings().is_empty());
    }

    #[test]
    fn test_full_log_warns_before_range_check() {
        let mut session = Session::new();
        for i in 0..10 {
            session.measure(Bias::Forward, i as f64 * 0.1).unwrap();
        }
        assert!(matches!(
            session.measure(Bias::Forward, 9.0),
            Err(LabError::CapacityExceeded { capacity: 10 })
        ));
        assert_eq!(
            session.execute(measure(Bias::Forward, 9.0)).unwrap(),
            Outcome::Warning("You can only take 10 readings.".to_string())
        );
        assert_eq!(session.readings().len(), 10);
    }

    #[test]
    fn test_out_of_range_is_error_and_leaves_log() {
        let mut session = Session::new();
        let err = session.execute(measure(Bias::Forward, 6.0)).unwrap_err();
        assert!(matches!(err, LabError::VoltageOutOfRange { .. }));
        assert!(session.readings().is_empty());
    }

    #[test]
    fn test_table_and_plot_empty_log() {
        let mut session = Session::new();
        assert_eq!(session.execute(Command::Table).unwrap(), Outcome::Empty);
        assert_eq!(
            session.execute(Command::Plot { path: None }).unwrap(),
            Outcome::Empty
        );
    }

    #[test]
    fn test_plot_view_dedups_repeated_voltage() {
        let mut session = Session::new();
        session.measure(Bias::Forward, 0.2).unwrap();
        session.measure(Bias::Reverse, 1.0).unwrap();
        session.measure(Bias::Forward, 0.2).unwrap();
        session.measure(Bias::Reverse, 0.0).unwrap();
        session.measure(Bias::Forward, 0.0).unwrap();

        let view = session.plot_view();
        let voltages: Vec<f64> = view.points.iter().map(|r| r.voltage).collect();
        assert_eq!(voltages, vec![-1.0, 0.0, 0.2]);
        assert_eq!(view.curve.as_ref().map(Vec::len), Some(200));
        assert_eq!(session.readings().len(), 5);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        assert!(Session::with_config(SessionConfig::new().with_capacity(0)).is_err());
        let session = Session::with_config(SessionConfig::new().with_capacity(3)).unwrap();
        assert_eq!(session.log().capacity(), 3);
    }
}
