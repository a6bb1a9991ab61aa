//! Error types for the PN junction lab.
//!
//! This module provides a unified error type [`LabError`] that covers
//! every error condition of a lab session: rejected measurements, command
//! script parsing, configuration, and rendering output.

use thiserror::Error;

/// Result type alias using [`LabError`].
pub type Result<T> = std::result::Result<T, LabError>;

/// Unified error type for all lab operations.
#[derive(Error, Debug)]
pub enum LabError {
    // ============ Measurement Errors ============
    /// The reading log is full
    #[error("You can only take {capacity} readings.")]
    CapacityExceeded { capacity: usize },

    /// Selected voltage lies outside the selector range (or is not finite)
    #[error("Voltage {voltage} V is outside the selectable range [{min:.1}, {max:.1}] V")]
    VoltageOutOfRange { voltage: f64, min: f64, max: f64 },

    // ============ Command Script Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Command word not recognised
    #[error("Unknown command '{command}' at line {line} (try 'help')")]
    UnknownCommand { command: String, line: usize },

    // ============ Configuration Errors ============
    /// Invalid session or plot configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ============ I/O Errors ============
    /// Error reading a command script
    #[error("Failed to read script file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error drawing the I-V chart
    #[error("Plot error: {message}")]
    PlotError { message: String },

    /// Error writing console output
    #[error("Output error: {message}")]
    OutputError { message: String },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl LabError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a plot error
    pub fn plot(message: impl Into<String>) -> Self {
        Self::PlotError {
            message: message.into(),
        }
    }

    /// Whether this error is a non-fatal warning rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_matches_lab_warning() {
        let err = LabError::CapacityExceeded { capacity: 10 };
        assert_eq!(err.to_string(), "You can only take 10 readings.");
        assert!(err.is_warning());
    }

    #[test]
    fn test_parse_error_is_not_warning() {
        let err = LabError::parse(3, "expected a voltage");
        assert_eq!(err.to_string(), "Parse error at line 3: expected a voltage");
        assert!(!err.is_warning());
    }
}
