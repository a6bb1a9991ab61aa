//! Bounded log of raw measurements.

use log::warn;

use crate::error::{LabError, Result};

/// A single (voltage, current) measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Signed applied voltage, in volts
    pub voltage: f64,
    /// Resulting diode current, in amperes
    pub current: f64,
}

impl Reading {
    /// Create a new reading.
    pub fn new(voltage: f64, current: f64) -> Self {
        Self { voltage, current }
    }
}

/// Ordered, capacity-bounded collection of readings.
///
/// Insertion order is preserved and repeated voltages are all kept;
/// deduplication only happens in the derived [`PlotView`](super::PlotView).
#[derive(Debug, Clone)]
pub struct ReadingLog {
    readings: Vec<Reading>,
    capacity: usize,
}

impl ReadingLog {
    /// Create an empty log with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(super::DEFAULT_CAPACITY)
    }

    /// Create an empty log holding at most `capacity` readings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a reading to the end of the log.
    ///
    /// Fails with [`LabError::CapacityExceeded`] once the log is full,
    /// leaving the log unchanged.
    pub fn append(&mut self, voltage: f64, current: f64) -> Result<Reading> {
        self.check_capacity()?;
        let reading = Reading::new(voltage, current);
        self.readings.push(reading);
        Ok(reading)
    }

    /// Fail with [`LabError::CapacityExceeded`] if no reading can be added.
    pub fn check_capacity(&self) -> Result<()> {
        if self.is_full() {
            warn!("reading log full ({} readings), rejecting measurement", self.capacity);
            return Err(LabError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Clear every reading.
    pub fn reset(&mut self) {
        self.readings.clear();
    }

    /// Raw readings in insertion order.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.readings.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of readings that can still be taken.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.readings.len())
    }
}

impl Default for ReadingLog {
    fn default() -> Self {
        Self::new()
    }
}
