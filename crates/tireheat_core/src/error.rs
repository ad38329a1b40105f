//! Error taxonomy for the tire models.
//!
//! Precondition violations (`ModelError`) are raised at the offending call.
//! Physical-invariant violations (`PhysicsViolation`) are only raised by the
//! validators, after a full signal has been computed.

use thiserror::Error;

/// Top-level error type for tireheat-core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TireError {
    #[error("Model precondition violated: {0}")]
    Model(#[from] ModelError),

    #[error("Invalid physics: {0}")]
    Physics(#[from] PhysicsViolation),
}

impl TireError {
    /// True when the error came from a validator rather than a model precondition.
    pub fn is_physics_violation(&self) -> bool {
        matches!(self, TireError::Physics(_))
    }
}

/// Errors raised synchronously when a model is called with invalid inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Invalid tire parameters: mu={mu}, ck={ck} (both must be finite and > 0)")]
    InvalidParams { mu: f64, ck: f64 },

    #[error("Normal load must be finite and > 0, got {0}")]
    NonPositiveLoad(f64),

    #[error("Saturation force mu*Fz = {0} is not finite and > 0")]
    SaturationOutOfRange(f64),

    #[error("Non-finite value in {name} at index {index}")]
    NonFiniteInput { name: &'static str, index: usize },

    #[error("Length mismatch: {left} has {left_len} samples, {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("Invalid setting {field}: {message}")]
    InvalidSetting {
        field: &'static str,
        message: &'static str,
    },
}

/// Physical sanity check failures reported by the validators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsViolation {
    #[error(
        "Fx should be ~0 when kappa=0, \
         but got |Fx| up to {max_abs_force} at indices {indices:?}"
    )]
    ZeroSlipForceMismatch { indices: Vec<usize>, max_abs_force: f64 },

    #[error(
        "Fx should saturate near ±{saturation_force} N at large |kappa|, \
         but reached only {min_ratio:.3} of it at indices {indices:?}"
    )]
    UnsaturatedAtLargeSlip {
        indices: Vec<usize>,
        saturation_force: f64,
        min_ratio: f64,
    },

    #[error(
        "Fx should be approximately linear for small |kappa|, \
         but relative error reached {max_relative_error:.2e} at indices {indices:?}"
    )]
    NonlinearInSmallSlipRegion {
        indices: Vec<usize>,
        max_relative_error: f64,
    },

    #[error("Fx should have the same sign as kappa, mismatch at indices {indices:?}")]
    SignMismatch { indices: Vec<usize> },

    #[error(
        "Pdiss should be ~0 when kappa=0, \
         but got |Pdiss| up to {max_abs_power} at indices {indices:?}"
    )]
    NonZeroPowerAtZeroSlip { indices: Vec<usize>, max_abs_power: f64 },
}

/// Checks that two index-aligned signals have the same number of samples.
pub(crate) fn ensure_same_len(
    left: &'static str,
    left_len: usize,
    right: &'static str,
    right_len: usize,
) -> Result<(), ModelError> {
    if left_len != right_len {
        return Err(ModelError::LengthMismatch {
            left,
            left_len,
            right,
            right_len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_names_both_signals() {
        let err = ensure_same_len("force", 3, "slip", 4).expect_err("expected mismatch");
        let message = format!("{err}");
        assert!(message.contains("force has 3"));
        assert!(message.contains("slip has 4"));
        assert!(ensure_same_len("force", 2, "slip", 2).is_ok());
    }

    #[test]
    fn physics_violation_is_distinguishable_from_precondition() {
        let physics: TireError = PhysicsViolation::SignMismatch { indices: vec![1] }.into();
        let model: TireError = ModelError::NonPositiveLoad(0.0).into();
        assert!(physics.is_physics_violation());
        assert!(!model.is_physics_violation());
        assert!(format!("{physics}").starts_with("Invalid physics"));
    }
}
