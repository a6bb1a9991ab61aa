//! Text rendering of readings.

use crate::readings::Reading;

/// Voltage with two decimals, e.g. `0.70`.
pub fn format_voltage(voltage: f64) -> String {
    // Adding 0.0 folds -0.0 into 0.0
    format!("{:.2}", voltage + 0.0)
}

/// Current in scientific notation with three significant digits.
///
/// The exponent always carries a sign and at least two digits
/// (`3.98e+01`, `-1.00e-06`).
pub fn format_current(current: f64) -> String {
    let formatted = format!("{:.2e}", current);
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

/// One-line summary of a successful measurement.
pub fn format_measurement(reading: &Reading) -> String {
    format!(
        "Measured Current: {} A at {} V",
        format_current(reading.current),
        format_voltage(reading.voltage)
    )
}

/// Table of raw readings in insertion order.
pub fn format_table(readings: &[Reading]) -> String {
    const HEADERS: [&str; 3] = ["#", "Voltage (V)", "Current (A)"];

    let rows: Vec<[String; 3]> = readings
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                i.to_string(),
                format_voltage(r.voltage),
                format_current(r.current),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:>w0$}  {:>w1$}  {:>w2$}\n",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    ));
    out.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    ));
    for row in &rows {
        out.push_str(&format!(
            "{:>w0$}  {:>w1$}  {:>w2$}\n",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        ));
    }
    out
}
