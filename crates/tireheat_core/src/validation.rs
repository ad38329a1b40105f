//! Physical sanity checks on already computed signals.
//!
//! The models never call these; drivers run them after each model invocation
//! and treat any failure as fatal.

use crate::error::{ensure_same_len, PhysicsViolation, TireError};
use crate::force::TireParams;
use crate::traits::{sign, Scalar};
use tracing::{debug, warn};

/// Slip magnitude below which a sample counts as zero slip.
pub const ZERO_SLIP_TOLERANCE: f64 = 1e-6;
/// Largest force magnitude accepted at zero slip (N).
pub const ZERO_SLIP_FORCE_TOLERANCE: f64 = 1e-3;
/// Largest power magnitude accepted at zero slip (W).
pub const ZERO_SLIP_POWER_TOLERANCE: f64 = 1e-3;
/// Slip magnitude above which the force must be close to saturation.
pub const LARGE_SLIP_THRESHOLD: f64 = 0.2;
/// Minimum `|Fx| / (mu * Fz)` required at large slip.
pub const MIN_SATURATION_RATIO: f64 = 0.8;
/// Open slip interval in which the force must follow `Ck * kappa`.
pub const LINEAR_SLIP_RANGE: (f64, f64) = (1e-4, 5e-3);
/// Largest relative deviation from `Ck * kappa` inside the linear range.
pub const MAX_LINEAR_RELATIVE_ERROR: f64 = 0.15;

const LINEAR_DENOMINATOR_FLOOR: f64 = 1e-10;

/// Sanity checks for a force signal produced by the saturating force law.
///
/// Checks run in order and the first failure is returned:
/// zero slip gives ~zero force, large slip is near `mu * load`, small slip is
/// near `Ck * kappa`, and every force shares the sign of its slip unless the
/// whole slip signal is exactly zero.
pub fn validate_force<T: Scalar>(
    slip: &[T],
    force: &[T],
    load: T,
    params: &TireParams<T>,
) -> Result<(), TireError> {
    ensure_same_len("slip", slip.len(), "force", force.len())?;
    let slip: Vec<f64> = slip.iter().map(|&v| v.into()).collect();
    let force: Vec<f64> = force.iter().map(|&v| v.into()).collect();
    let mu: f64 = params.mu.into();
    let ck: f64 = params.ck.into();
    let load: f64 = load.into();

    let result = check_zero_slip_force(&slip, &force)
        .and_then(|_| check_saturation(&slip, &force, mu * load))
        .and_then(|_| check_linearity(&slip, &force, ck))
        .and_then(|_| check_sign(&slip, &force));

    match result {
        Ok(()) => {
            debug!(samples = slip.len(), load, "force signal passed validation");
            Ok(())
        }
        Err(violation) => {
            warn!(%violation, "force signal rejected");
            Err(violation.into())
        }
    }
}

/// Sanity check for a power signal: zero slip must give ~zero power.
pub fn validate_dissipation<T: Scalar>(slip: &[T], power: &[T]) -> Result<(), TireError> {
    ensure_same_len("slip", slip.len(), "power", power.len())?;

    let mut indices = Vec::new();
    let mut max_abs_power = 0.0_f64;
    for (i, (&kappa, &p)) in slip.iter().zip(power).enumerate() {
        let kappa: f64 = kappa.into();
        let p: f64 = p.into();
        if kappa.abs() < ZERO_SLIP_TOLERANCE && !(p.abs() < ZERO_SLIP_POWER_TOLERANCE) {
            indices.push(i);
            max_abs_power = max_abs_power.max(p.abs());
        }
    }

    if indices.is_empty() {
        debug!(samples = slip.len(), "power signal passed validation");
        return Ok(());
    }
    let violation = PhysicsViolation::NonZeroPowerAtZeroSlip {
        indices,
        max_abs_power,
    };
    warn!(%violation, "power signal rejected");
    Err(violation.into())
}

fn check_zero_slip_force(slip: &[f64], force: &[f64]) -> Result<(), PhysicsViolation> {
    let mut indices = Vec::new();
    let mut max_abs_force = 0.0_f64;
    for (i, (kappa, fx)) in slip.iter().zip(force).enumerate() {
        // Negated comparison so NaN counts as a failure.
        if kappa.abs() < ZERO_SLIP_TOLERANCE && !(fx.abs() < ZERO_SLIP_FORCE_TOLERANCE) {
            indices.push(i);
            max_abs_force = max_abs_force.max(fx.abs());
        }
    }
    if indices.is_empty() {
        Ok(())
    } else {
        Err(PhysicsViolation::ZeroSlipForceMismatch {
            indices,
            max_abs_force,
        })
    }
}

fn check_saturation(
    slip: &[f64],
    force: &[f64],
    saturation_force: f64,
) -> Result<(), PhysicsViolation> {
    let mut indices = Vec::new();
    let mut min_ratio = f64::INFINITY;
    for (i, (kappa, fx)) in slip.iter().zip(force).enumerate() {
        if kappa.abs() <= LARGE_SLIP_THRESHOLD {
            continue;
        }
        let ratio = fx.abs() / saturation_force;
        if !(ratio > MIN_SATURATION_RATIO) {
            indices.push(i);
            min_ratio = min_ratio.min(ratio);
        }
    }
    if indices.is_empty() {
        Ok(())
    } else {
        Err(PhysicsViolation::UnsaturatedAtLargeSlip {
            indices,
            saturation_force,
            min_ratio,
        })
    }
}

fn check_linearity(slip: &[f64], force: &[f64], ck: f64) -> Result<(), PhysicsViolation> {
    let (lo, hi) = LINEAR_SLIP_RANGE;
    let mut indices = Vec::new();
    let mut max_relative_error = 0.0_f64;
    for (i, (kappa, fx)) in slip.iter().zip(force).enumerate() {
        let magnitude = kappa.abs();
        if !(magnitude > lo && magnitude < hi) {
            continue;
        }
        let linear = ck * kappa;
        let error = (fx - linear).abs() / (linear.abs() + LINEAR_DENOMINATOR_FLOOR);
        if !(error < MAX_LINEAR_RELATIVE_ERROR) {
            indices.push(i);
            max_relative_error = max_relative_error.max(error);
        }
    }
    if indices.is_empty() {
        Ok(())
    } else {
        Err(PhysicsViolation::NonlinearInSmallSlipRegion {
            indices,
            max_relative_error,
        })
    }
}

/// The zero-slip escape applies to the whole signal, not per sample: a single
/// nonzero slip sample makes every sample subject to the sign comparison.
fn check_sign(slip: &[f64], force: &[f64]) -> Result<(), PhysicsViolation> {
    if slip.iter().all(|&kappa| kappa == 0.0) {
        return Ok(());
    }
    let indices: Vec<usize> = slip
        .iter()
        .zip(force)
        .enumerate()
        .filter(|(_, (kappa, fx))| sign(**fx) != sign(**kappa))
        .map(|(i, _)| i)
        .collect();
    if indices.is_empty() {
        Ok(())
    } else {
        Err(PhysicsViolation::SignMismatch { indices })
    }
}
