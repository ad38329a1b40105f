//! Canonical scenarios built from the models in driver call order:
//! force, dissipated power, energy, then both validators.

use crate::dissipation::{compute_cumulative_energy, compute_dissipated_power};
use crate::error::{ModelError, TireError};
use crate::force::{compute_force, TireParams};
use crate::signals::{linspace, ramp_and_hold};
use crate::validation::{validate_dissipation, validate_force};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Forward speed used by both scenarios unless overridden (m/s).
pub const DEFAULT_SPEED: f64 = 20.0;

/// Slip axis and load set for a steady-state sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipSweepSettings {
    pub slip_min: f64,
    pub slip_max: f64,
    pub samples: usize,
    pub loads: Vec<f64>,
    pub speed: f64,
}

impl Default for SlipSweepSettings {
    fn default() -> Self {
        Self {
            slip_min: -0.25,
            slip_max: 0.25,
            samples: 200,
            loads: vec![600.0, 900.0, 1200.0],
            speed: DEFAULT_SPEED,
        }
    }
}

impl SlipSweepSettings {
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.slip_min.is_finite()
            || !self.slip_max.is_finite()
            || self.slip_max <= self.slip_min
        {
            return Err(ModelError::InvalidSetting {
                field: "slip_min/slip_max",
                message: "slip range must be finite with slip_max > slip_min",
            });
        }
        if self.samples < 2 {
            return Err(ModelError::InvalidSetting {
                field: "samples",
                message: "a sweep needs at least 2 samples",
            });
        }
        if self.loads.is_empty() {
            return Err(ModelError::InvalidSetting {
                field: "loads",
                message: "at least one normal load is required",
            });
        }
        if !self.speed.is_finite() {
            return Err(ModelError::InvalidSetting {
                field: "speed",
                message: "must be finite",
            });
        }
        Ok(())
    }
}

/// Time-domain scenario: slip ramps from zero to `slip_max` by
/// `ramp_end_time`, then holds until `duration`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RampHoldSettings {
    pub duration: f64,
    pub samples: usize,
    pub ramp_end_time: f64,
    pub slip_max: f64,
    pub load: f64,
    pub speed: f64,
}

impl Default for RampHoldSettings {
    fn default() -> Self {
        Self {
            duration: 3.0,
            samples: 300,
            ramp_end_time: 1.5,
            slip_max: 0.15,
            load: 900.0,
            speed: DEFAULT_SPEED,
        }
    }
}

impl RampHoldSettings {
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ModelError::InvalidSetting {
                field: "duration",
                message: "must be finite and > 0",
            });
        }
        if self.samples < 2 {
            return Err(ModelError::InvalidSetting {
                field: "samples",
                message: "a time series needs at least 2 samples",
            });
        }
        if !(self.ramp_end_time > 0.0 && self.ramp_end_time <= self.duration) {
            return Err(ModelError::InvalidSetting {
                field: "ramp_end_time",
                message: "must lie in (0, duration]",
            });
        }
        if !self.speed.is_finite() {
            return Err(ModelError::InvalidSetting {
                field: "speed",
                message: "must be finite",
            });
        }
        Ok(())
    }
}

/// Force and dissipated power over the sweep slip axis for one load.
#[derive(Debug, Clone, Serialize)]
pub struct SweepCurve {
    pub load: f64,
    pub force: Vec<f64>,
    pub power: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlipSweepResult {
    pub speed: f64,
    pub slip: Vec<f64>,
    pub curves: Vec<SweepCurve>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeDomainSummary {
    /// Largest absolute force (N).
    pub max_force: f64,
    /// Largest dissipated power (W).
    pub max_power: f64,
    /// Energy at the last sample (J).
    pub total_energy: f64,
    pub final_slip: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeDomainResult {
    pub load: f64,
    pub speed: f64,
    pub time: Vec<f64>,
    pub slip: Vec<f64>,
    pub force: Vec<f64>,
    pub power: Vec<f64>,
    pub energy: Vec<f64>,
    pub summary: TimeDomainSummary,
}

/// Sweeps slip for every configured load, validating each curve.
pub fn run_slip_sweep(
    params: &TireParams,
    settings: &SlipSweepSettings,
) -> Result<SlipSweepResult, TireError> {
    settings.validate()?;
    info!(
        loads = settings.loads.len(),
        samples = settings.samples,
        "running slip sweep"
    );

    let slip = linspace(settings.slip_min, settings.slip_max, settings.samples);
    let curves = settings
        .loads
        .iter()
        .map(|&load| sweep_curve(params, &slip, load, settings.speed))
        .collect::<Result<Vec<_>, TireError>>()?;

    Ok(SlipSweepResult {
        speed: settings.speed,
        slip,
        curves,
    })
}

fn sweep_curve(
    params: &TireParams,
    slip: &[f64],
    load: f64,
    speed: f64,
) -> Result<SweepCurve, TireError> {
    let force = compute_force(slip, load, params)?;
    let power = compute_dissipated_power(&force, slip, speed)?;
    validate_force(slip, &force, load, params)?;
    validate_dissipation(slip, &power)?;
    debug!(load, "sweep curve validated");
    Ok(SweepCurve { load, force, power })
}

/// Runs the ramp-then-hold time-domain scenario and summarises it.
pub fn run_ramp_hold(
    params: &TireParams,
    settings: &RampHoldSettings,
) -> Result<TimeDomainResult, TireError> {
    settings.validate()?;
    info!(
        load = settings.load,
        samples = settings.samples,
        "running ramp-and-hold time domain"
    );

    let time = linspace(0.0, settings.duration, settings.samples);
    let slip = ramp_and_hold(&time, settings.ramp_end_time, settings.slip_max)?;

    let force = compute_force(&slip, settings.load, params)?;
    let power = compute_dissipated_power(&force, &slip, settings.speed)?;
    let energy = compute_cumulative_energy(&time, &power)?;

    validate_force(&slip, &force, settings.load, params)?;
    validate_dissipation(&slip, &power)?;

    let summary = TimeDomainSummary {
        max_force: force.iter().fold(0.0, |m: f64, f| m.max(f.abs())),
        max_power: power.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        total_energy: energy.last().copied().unwrap_or(0.0),
        final_slip: slip.last().copied().unwrap_or(0.0),
    };
    info!(
        max_force = summary.max_force,
        total_energy = summary.total_energy,
        "time domain complete"
    );

    Ok(TimeDomainResult {
        load: settings.load,
        speed: settings.speed,
        time,
        slip,
        force,
        power,
        energy,
        summary,
    })
}
