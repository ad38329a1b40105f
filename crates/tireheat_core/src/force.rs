//! Saturating longitudinal force law.
//!
//! `Fx = sign(kappa) * Fx_max * tanh(|Ck * kappa / Fx_max|)` with `Fx_max = mu * Fz`.
//! Linear with slope `Ck` for small slip, saturating at `±mu * Fz` for large slip.

use crate::error::ModelError;
use crate::traits::{sign, Scalar};
use serde::{Deserialize, Serialize};

/// Tire model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TireParams<T = f64> {
    /// Peak friction coefficient.
    pub mu: T,
    /// Longitudinal stiffness (N per unit slip).
    pub ck: T,
}

impl<T: Scalar> Default for TireParams<T> {
    fn default() -> Self {
        Self {
            mu: T::one(),
            ck: crate::traits::constant(50_000.0),
        }
    }
}

impl<T: Scalar> TireParams<T> {
    pub fn new(mu: T, ck: T) -> Result<Self, ModelError> {
        let params = Self { mu, ck };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        let valid = |v: T| v.is_finite() && v > T::zero();
        if !valid(self.mu) || !valid(self.ck) {
            return Err(ModelError::InvalidParams {
                mu: self.mu.into(),
                ck: self.ck.into(),
            });
        }
        Ok(())
    }

    /// Saturation level `mu * load`.
    #[inline]
    pub fn saturation_force(&self, load: T) -> T {
        self.mu * load
    }

    /// Force for a single slip sample. Assumes `load > 0`; callers wanting the
    /// checked form should go through [`compute_force`].
    #[inline]
    pub fn force_at(&self, slip: T, load: T) -> T {
        if slip == T::zero() {
            return T::zero();
        }
        let fx_max = self.saturation_force(load);
        let kappa_norm = self.ck * slip / fx_max;
        sign(slip) * fx_max * kappa_norm.abs().tanh()
    }
}

/// Computes the longitudinal force for every sample of a slip signal.
///
/// Errors if the parameters are invalid, the load is not strictly positive,
/// `mu * load` leaves the finite positive range, or a slip sample is not
/// finite. The result is index-aligned with `slip`.
pub fn compute_force<T: Scalar>(
    slip: &[T],
    load: T,
    params: &TireParams<T>,
) -> Result<Vec<T>, ModelError> {
    params.validate()?;
    if !load.is_finite() || load <= T::zero() {
        return Err(ModelError::NonPositiveLoad(load.into()));
    }
    let fx_max = params.saturation_force(load);
    if !fx_max.is_finite() || fx_max <= T::zero() {
        return Err(ModelError::SaturationOutOfRange(fx_max.into()));
    }
    if let Some(index) = slip.iter().position(|k| !k.is_finite()) {
        return Err(ModelError::NonFiniteInput {
            name: "slip",
            index,
        });
    }

    Ok(slip.iter().map(|&k| params.force_at(k, load)).collect())
}

#[cfg(test)]
mod tests {
    use super::{compute_force, TireParams};
    use crate::error::ModelError;

    fn params() -> TireParams {
        TireParams::new(1.0, 50_000.0).expect("valid params")
    }

    #[test]
    fn zero_slip_gives_exactly_zero_force() {
        let force = compute_force(&[0.0, -0.0, 0.1, 0.0], 900.0, &params()).unwrap();
        assert_eq!(force[0], 0.0);
        assert_eq!(force[1], 0.0);
        assert_eq!(force[3], 0.0);
        assert!(force[2] > 0.0);
    }

    #[test]
    fn force_sign_tracks_slip_sign() {
        let slip = [-0.3, -0.01, -1e-9, 1e-9, 0.01, 0.3];
        let force = compute_force(&slip, 900.0, &params()).unwrap();
        for (k, f) in slip.iter().zip(&force) {
            assert_eq!(k.signum(), f.signum(), "slip {k} produced force {f}");
        }
    }

    #[test]
    fn force_saturates_at_friction_limit() {
        let force = compute_force(&[-10.0, 10.0], 900.0, &params()).unwrap();
        assert!((force[0] + 900.0).abs() < 1e-6);
        assert!((force[1] - 900.0).abs() < 1e-6);
    }

    #[test]
    fn force_is_linear_for_small_slip() {
        let p = params();
        for &k in &[0.0002, 0.001, -0.002, 0.0049] {
            let f = compute_force(&[k], 900.0, &p).unwrap()[0];
            let linear = p.ck * k;
            assert!(((f - linear) / linear).abs() < 0.15, "slip {k}: {f} vs {linear}");
        }
    }

    #[test]
    fn large_slip_force_is_near_load() {
        let f = compute_force(&[0.25], 900.0, &params()).unwrap()[0];
        assert!(f > 0.8 * 900.0 && f <= 900.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let slip: Vec<f64> = (0..50).map(|i| -0.25 + 0.01 * i as f64).collect();
        let a = compute_force(&slip, 1200.0, &params()).unwrap();
        let b = compute_force(&slip, 1200.0, &params()).unwrap();
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn single_precision_follows_the_same_law() {
        let p: TireParams<f32> = TireParams::default();
        let force = compute_force(&[0.0_f32, 0.25, -10.0], 900.0, &p).unwrap();
        assert_eq!(force[0], 0.0);
        assert!(force[1] > 720.0);
        assert!((force[2] + 900.0).abs() < 1e-2);
    }

    #[test]
    fn rejects_non_positive_or_non_finite_load() {
        assert_eq!(
            compute_force(&[0.1], 0.0, &params()),
            Err(ModelError::NonPositiveLoad(0.0))
        );
        assert!(matches!(
            compute_force(&[0.1], -5.0, &params()),
            Err(ModelError::NonPositiveLoad(_))
        ));
        assert!(matches!(
            compute_force(&[0.1], f64::INFINITY, &params()),
            Err(ModelError::NonPositiveLoad(_))
        ));
    }

    #[test]
    fn rejects_saturation_force_outside_finite_range() {
        let grippy = TireParams::new(2.0, 50_000.0).unwrap();
        assert_eq!(
            compute_force(&[0.1, -0.1], 1e308, &grippy),
            Err(ModelError::SaturationOutOfRange(f64::INFINITY))
        );

        let slick = TireParams::new(1e-200, 50_000.0).unwrap();
        assert_eq!(
            compute_force(&[0.1], 1e-200, &slick),
            Err(ModelError::SaturationOutOfRange(0.0))
        );

        let p: TireParams<f32> = TireParams::new(10.0, 5e4).unwrap();
        assert!(matches!(
            compute_force(&[0.1_f32], 1e38, &p),
            Err(ModelError::SaturationOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_invalid_params_and_non_finite_slip() {
        assert!(matches!(
            TireParams::new(0.0, 50_000.0),
            Err(ModelError::InvalidParams { .. })
        ));
        let bad = TireParams { mu: 1.0, ck: f64::NAN };
        assert!(matches!(
            compute_force(&[0.1], 900.0, &bad),
            Err(ModelError::InvalidParams { .. })
        ));
        assert_eq!(
            compute_force(&[0.1, f64::NAN], 900.0, &params()),
            Err(ModelError::NonFiniteInput {
                name: "slip",
                index: 1
            })
        );
    }

    #[test]
    fn empty_signal_yields_empty_force() {
        assert!(compute_force(&[], 900.0, &params()).unwrap().is_empty());
    }
}
