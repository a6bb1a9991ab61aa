//! Derived plot view: deduplicate, sort, interpolate.
//!
//! The view is never stored. It is rebuilt from the raw log each time a plot
//! is requested:
//!
//! 1. Collapse repeated voltages, keeping the most recent current.
//! 2. Sort ascending by voltage.
//! 3. With at least two distinct voltages, sample a piecewise-linear curve at
//!    evenly spaced points spanning `[min, max]` (no extrapolation).

use log::debug;

use super::Reading;

/// Sparse points plus an optional dense interpolated curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotView {
    /// Deduplicated readings, ascending by voltage
    pub points: Vec<Reading>,
    /// Interpolated `(voltage, current)` samples, present with >= 2 points
    pub curve: Option<Vec<(f64, f64)>>,
}

impl PlotView {
    /// Derive the view from raw readings in insertion order.
    ///
    /// `samples` is the number of dense curve samples; fewer than two
    /// samples disables the curve.
    pub fn derive(readings: &[Reading], samples: usize) -> Self {
        let points = dedup_sorted(readings);
        let curve = if points.len() >= 2 && samples >= 2 {
            let lo = points[0].voltage;
            let hi = points[points.len() - 1].voltage;
            Some(
                linspace(lo, hi, samples)
                    .into_iter()
                    .map(|v| (v, interpolate(&points, v)))
                    .collect(),
            )
        } else {
            None
        };

        debug!(
            "derived plot view: {} raw -> {} distinct, curve: {}",
            readings.len(),
            points.len(),
            curve.as_ref().map_or(0, Vec::len)
        );

        Self { points, curve }
    }

    /// Whether a dense curve is available.
    pub fn has_curve(&self) -> bool {
        self.curve.is_some()
    }
}

/// Last-write-wins deduplication by voltage, sorted ascending.
///
/// `-0.0` and `0.0` compare equal and share one entry.
pub fn dedup_sorted(readings: &[Reading]) -> Vec<Reading> {
    let mut unique: Vec<Reading> = Vec::with_capacity(readings.len());
    for r in readings {
        match unique.iter_mut().find(|u| u.voltage == r.voltage) {
            Some(existing) => existing.current = r.current,
            None => unique.push(*r),
        }
    }
    unique.sort_by(|a, b| a.voltage.total_cmp(&b.voltage));
    unique
}

/// `n` evenly spaced values from `start` to `end`, both ends exact.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Piecewise-linear interpolation over points sorted by voltage.
///
/// Inputs outside `[first, last]` are clamped to the end values.
pub fn interpolate(points: &[Reading], v: f64) -> f64 {
    let (first, last) = match (points.first(), points.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return 0.0,
    };
    if v <= first.voltage {
        return first.current;
    }
    if v >= last.voltage {
        return last.current;
    }

    // First index whose voltage exceeds v; guaranteed within 1..len
    let hi = points.partition_point(|p| p.voltage <= v);
    let a = points[hi - 1];
    let b = points[hi];
    let t = (v - a.voltage) / (b.voltage - a.voltage);
    a.current + t * (b.current - a.current)
}
