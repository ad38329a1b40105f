//! Slip power and cumulative dissipated energy.

use crate::error::{ensure_same_len, ModelError};
use crate::traits::{constant, Scalar};

/// Signed slip power `Fx * (kappa * V)` for a constant forward speed.
///
/// Positive when force and slip agree in sign, which the force law guarantees;
/// use [`compute_dissipated_power`] for the heat generation rate.
pub fn compute_power<T: Scalar>(force: &[T], slip: &[T], speed: T) -> Result<Vec<T>, ModelError> {
    ensure_same_len("force", force.len(), "slip", slip.len())?;
    if !speed.is_finite() {
        return Err(ModelError::NonFiniteInput {
            name: "speed",
            index: 0,
        });
    }
    Ok(force
        .iter()
        .zip(slip)
        .map(|(&fx, &kappa)| fx * (kappa * speed))
        .collect())
}

/// Non-negative heat generation rate, `|compute_power|` elementwise.
pub fn compute_dissipated_power<T: Scalar>(
    force: &[T],
    slip: &[T],
    speed: T,
) -> Result<Vec<T>, ModelError> {
    let mut power = compute_power(force, slip, speed)?;
    for p in &mut power {
        *p = p.abs();
    }
    Ok(power)
}

/// Signed slip power with a speed sample per slip sample.
///
/// Time-varying extension of [`compute_power`]; the canonical scenarios use
/// the scalar form, this one is reached through the wasm bridge.
pub fn compute_power_with_speed_profile<T: Scalar>(
    force: &[T],
    slip: &[T],
    speed: &[T],
) -> Result<Vec<T>, ModelError> {
    ensure_same_len("force", force.len(), "slip", slip.len())?;
    ensure_same_len("slip", slip.len(), "speed", speed.len())?;
    if let Some(index) = speed.iter().position(|v| !v.is_finite()) {
        return Err(ModelError::NonFiniteInput {
            name: "speed",
            index,
        });
    }
    Ok(force
        .iter()
        .zip(slip)
        .zip(speed)
        .map(|((&fx, &kappa), &v)| fx * (kappa * v))
        .collect())
}

/// Cumulative trapezoidal integral of `power` over `time`.
///
/// `energy[0] == 0` and `energy[k] = energy[k-1] + (p[k-1] + p[k]) / 2 * (t[k] - t[k-1])`.
/// Fewer than two samples carry no interval and integrate to all zeros.
/// Time is not checked for ordering: a decreasing step contributes a
/// signed (negative) interval, exactly as the difference formula gives.
pub fn compute_cumulative_energy<T: Scalar>(
    time: &[T],
    power: &[T],
) -> Result<Vec<T>, ModelError> {
    ensure_same_len("time", time.len(), "power", power.len())?;
    let n = time.len();
    let mut energy = vec![T::zero(); n];
    if n < 2 {
        return Ok(energy);
    }

    let half = constant::<T>(0.5);
    let mut accum = T::zero();
    for i in 1..n {
        let dt = time[i] - time[i - 1];
        let avg_power = (power[i - 1] + power[i]) * half;
        accum = accum + avg_power * dt;
        energy[i] = accum;
    }
    Ok(energy)
}
