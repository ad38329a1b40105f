//! Experiment runners exposed to the plotting front-end.

use crate::{to_js_error, WasmTireModel};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_wasm_bindgen::{from_value, to_value};
use tireheat_core::experiments::{
    run_ramp_hold, run_slip_sweep, RampHoldSettings, SlipSweepResult, SlipSweepSettings,
    TimeDomainResult,
};
use wasm_bindgen::prelude::*;

/// `undefined`/`null` selects the default scenario settings.
fn settings_or_default<S: DeserializeOwned + Default>(value: JsValue) -> Result<S, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(S::default());
    }
    from_value(value).map_err(|e| JsValue::from_str(&format!("Failed to parse settings: {}", e)))
}

impl WasmTireModel {
    fn sweep(&self, settings: &SlipSweepSettings) -> Result<SlipSweepResult> {
        run_slip_sweep(&self.params, settings).context("Slip sweep failed")
    }

    fn ramp_hold(&self, settings: &RampHoldSettings) -> Result<TimeDomainResult> {
        run_ramp_hold(&self.params, settings).context("Ramp-and-hold run failed")
    }
}

#[wasm_bindgen]
impl WasmTireModel {
    pub fn run_slip_sweep(&self, settings: JsValue) -> Result<JsValue, JsValue> {
        let settings: SlipSweepSettings = settings_or_default(settings)?;
        let result = self.sweep(&settings).map_err(to_js_error)?;
        to_value(&result).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub fn run_ramp_hold(&self, settings: JsValue) -> Result<JsValue, JsValue> {
        let settings: RampHoldSettings = settings_or_default(settings)?;
        let result = self.ramp_hold(&settings).map_err(to_js_error)?;
        to_value(&result).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
