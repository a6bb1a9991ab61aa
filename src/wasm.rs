//! WASM bindings for the PN junction lab.
//!
//! This module provides JavaScript-friendly bindings so a browser front-end
//! can drive a lab session: collect bias and voltage from its own widgets,
//! call [`WasmLab::measure`], and draw the plot view it reads back.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmLab } from 'pn_junction_lab';
//!
//! await init();
//!
//! const lab = new WasmLab();
//! const current = lab.measure(true, 0.7);   // Forward, 0.7 V
//!
//! lab.derive_plot();
//! const xs = lab.point_voltages();
//! const ys = lab.point_currents();
//! const curveX = lab.curve_voltages();      // empty below 2 distinct voltages
//! ```

use wasm_bindgen::prelude::*;

use crate::components::Bias;
use crate::error::LabError;
use crate::readings::PlotView;
use crate::session::{Session, SessionConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: LabError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible lab session.
#[wasm_bindgen]
pub struct WasmLab {
    session: Session,
    view: Option<PlotView>,
}

#[wasm_bindgen]
impl WasmLab {
    /// Create a session with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmLab {
        WasmLab {
            session: Session::new(),
            view: None,
        }
    }

    /// Create a session with a custom capacity and curve resolution.
    #[wasm_bindgen]
    pub fn with_config(capacity: usize, interpolation_samples: usize) -> Result<WasmLab, JsValue> {
        let config = SessionConfig::new()
            .with_capacity(capacity)
            .with_interpolation_samples(interpolation_samples);
        let session = Session::with_config(config).map_err(to_js)?;
        Ok(WasmLab {
            session,
            view: None,
        })
    }

    /// Take a measurement and return the computed current (amperes).
    ///
    /// Rejects with the capacity warning text once the log is full, or with
    /// a range error for voltages outside the selector range.
    #[wasm_bindgen]
    pub fn measure(&mut self, forward: bool, voltage: f64) -> Result<f64, JsValue> {
        let bias = if forward { Bias::Forward } else { Bias::Reverse };
        let reading = self.session.measure(bias, voltage).map_err(to_js)?;
        Ok(reading.current)
    }

    /// Clear all readings.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.reset();
        self.view = None;
    }

    /// Number of raw readings.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.session.readings().len()
    }

    /// Whether no readings have been taken.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.session.readings().is_empty()
    }

    /// Raw reading voltages in insertion order.
    #[wasm_bindgen]
    pub fn voltages(&self) -> Vec<f64> {
        self.session.readings().iter().map(|r| r.voltage).collect()
    }

    /// Raw reading currents in insertion order.
    #[wasm_bindgen]
    pub fn currents(&self) -> Vec<f64> {
        self.session.readings().iter().map(|r| r.current).collect()
    }

    /// Recompute the plot view from the current log.
    #[wasm_bindgen]
    pub fn derive_plot(&mut self) {
        self.view = Some(self.session.plot_view());
    }

    #[wasm_bindgen]
    pub fn point_voltages(&self) -> Vec<f64> {
        self.view
            .as_ref()
            .map(|v| v.points.iter().map(|r| r.voltage).collect())
            .unwrap_or_default()
    }

    #[wasm_bindgen]
    pub fn point_currents(&self) -> Vec<f64> {
        self.view
            .as_ref()
            .map(|v| v.points.iter().map(|r| r.current).collect())
            .unwrap_or_default()
    }

    #[wasm_bindgen]
    pub fn curve_voltages(&self) -> Vec<f64> {
        self.curve().map(|c| c.iter().map(|p| p.0).collect()).unwrap_or_default()
    }

    #[wasm_bindgen]
    pub fn curve_currents(&self) -> Vec<f64> {
        self.curve().map(|c| c.iter().map(|p| p.1).collect()).unwrap_or_default()
    }
}

impl WasmLab {
    fn curve(&self) -> Option<&Vec<(f64, f64)>> {
        self.view.as_ref().and_then(|v| v.curve.as_ref())
    }
}

impl Default for WasmLab {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the reading capacity of a default session.
#[wasm_bindgen]
pub fn default_capacity() -> usize {
    crate::readings::DEFAULT_CAPACITY
}
