//! Command types for lab scripts.

use crate::components::Bias;

/// A user action against a lab session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Apply a bias at the selected voltage and record the current.
    Measure { bias: Bias, magnitude: f64 },
    /// Show the raw readings.
    Table,
    /// Plot the I-V graph, optionally to a specific file.
    Plot { path: Option<String> },
    /// Clear all readings.
    Reset,
    /// Show command help.
    Help,
    /// End the session.
    Quit,
}

/// A parsed command with its source line.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLine {
    pub command: Command,
    /// Source line number for error reporting
    pub line: usize,
}

/// Command reference shown by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  measure <forward|reverse> <volts>   take a reading (volts in [-5.0, 5.0], step 0.1)
  table                               show measured values
  plot [file.svg]                     plot the I-V graph
  reset                               reset the experiment
  help                                show this help
  quit                                leave the lab";
