use anyhow::{Context, Result};
use js_sys::Float64Array;
use tireheat_core::dissipation::{
    compute_cumulative_energy, compute_dissipated_power, compute_power,
    compute_power_with_speed_profile,
};
use tireheat_core::force::compute_force;
use tireheat_core::validation::{validate_dissipation, validate_force};
use tireheat_core::TireParams;
use wasm_bindgen::prelude::*;

mod experiments;

#[wasm_bindgen]
pub struct WasmTireModel {
    params: TireParams,
}

pub(crate) fn to_js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", err))
}

impl WasmTireModel {
    pub(crate) fn from_params(params: TireParams) -> Self {
        Self { params }
    }

    fn force_series(&self, slip: &[f64], load: f64) -> Result<Vec<f64>> {
        compute_force(slip, load, &self.params).context("Force computation failed")
    }

    fn power_series(
        &self,
        force: &[f64],
        slip: &[f64],
        speed: f64,
        dissipated: bool,
    ) -> Result<Vec<f64>> {
        let power = if dissipated {
            compute_dissipated_power(force, slip, speed)
        } else {
            compute_power(force, slip, speed)
        };
        power.context("Power computation failed")
    }

    fn speed_profile_power_series(
        &self,
        force: &[f64],
        slip: &[f64],
        speed: &[f64],
    ) -> Result<Vec<f64>> {
        compute_power_with_speed_profile(force, slip, speed).context("Power computation failed")
    }

    fn energy_series(&self, time: &[f64], power: &[f64]) -> Result<Vec<f64>> {
        compute_cumulative_energy(time, power).context("Energy integration failed")
    }

    fn check_force(&self, slip: &[f64], force: &[f64], load: f64) -> Result<()> {
        validate_force(slip, force, load, &self.params).context("Force validation failed")
    }

    fn check_dissipation(&self, slip: &[f64], power: &[f64]) -> Result<()> {
        validate_dissipation(slip, power).context("Dissipation validation failed")
    }
}

#[wasm_bindgen]
impl WasmTireModel {
    #[wasm_bindgen(constructor)]
    pub fn new(mu: f64, ck: f64) -> Result<WasmTireModel, JsValue> {
        console_error_panic_hook::set_once();
        let params = TireParams::new(mu, ck)
            .map_err(|e| JsValue::from_str(&format!("Invalid tire parameters: {}", e)))?;
        Ok(Self::from_params(params))
    }

    pub fn mu(&self) -> f64 {
        self.params.mu
    }

    pub fn ck(&self) -> f64 {
        self.params.ck
    }

    pub fn saturation_force(&self, load: f64) -> f64 {
        self.params.saturation_force(load)
    }

    pub fn compute_force(&self, slip: Vec<f64>, load: f64) -> Result<Float64Array, JsValue> {
        let force = self.force_series(&slip, load).map_err(to_js_error)?;
        Ok(Float64Array::from(force.as_slice()))
    }

    pub fn compute_power(
        &self,
        force: Vec<f64>,
        slip: Vec<f64>,
        speed: f64,
    ) -> Result<Float64Array, JsValue> {
        let power = self
            .power_series(&force, &slip, speed, false)
            .map_err(to_js_error)?;
        Ok(Float64Array::from(power.as_slice()))
    }

    pub fn compute_dissipated_power(
        &self,
        force: Vec<f64>,
        slip: Vec<f64>,
        speed: f64,
    ) -> Result<Float64Array, JsValue> {
        let power = self
            .power_series(&force, &slip, speed, true)
            .map_err(to_js_error)?;
        Ok(Float64Array::from(power.as_slice()))
    }

    /// Signed power for a time-varying forward speed, one sample per slip.
    pub fn compute_power_with_speed_profile(
        &self,
        force: Vec<f64>,
        slip: Vec<f64>,
        speed: Vec<f64>,
    ) -> Result<Float64Array, JsValue> {
        let power = self
            .speed_profile_power_series(&force, &slip, &speed)
            .map_err(to_js_error)?;
        Ok(Float64Array::from(power.as_slice()))
    }

    pub fn compute_cumulative_energy(
        &self,
        time: Vec<f64>,
        power: Vec<f64>,
    ) -> Result<Float64Array, JsValue> {
        let energy = self.energy_series(&time, &power).map_err(to_js_error)?;
        Ok(Float64Array::from(energy.as_slice()))
    }

    pub fn validate_force(
        &self,
        slip: Vec<f64>,
        force: Vec<f64>,
        load: f64,
    ) -> Result<(), JsValue> {
        self.check_force(&slip, &force, load).map_err(to_js_error)
    }

    pub fn validate_dissipation(&self, slip: Vec<f64>, power: Vec<f64>) -> Result<(), JsValue> {
        self.check_dissipation(&slip, &power).map_err(to_js_error)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::WasmTireModel;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn constructor_rejects_invalid_params() {
        let result = WasmTireModel::new(0.0, 50_000.0);
        let message = result
            .err()
            .and_then(|err| err.as_string())
            .unwrap_or_default();
        assert!(message.contains("Invalid tire parameters"));
    }

    #[wasm_bindgen_test]
    fn validate_force_reports_physics_violation() {
        let model = WasmTireModel::new(1.0, 50_000.0).expect("model");
        let result = model.validate_force(vec![0.0, 0.1], vec![5.0, 850.0], 900.0);
        let message = result
            .err()
            .and_then(|err| err.as_string())
            .unwrap_or_default();
        assert!(message.contains("kappa=0"));
    }
}
