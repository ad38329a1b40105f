use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the tire models.
/// Must support basic arithmetic, debug printing, and lossless widening to f64
/// so that diagnostics can be reported independently of the working precision.
pub trait Scalar: Float + FromPrimitive + Debug + Into<f64> + 'static {}

impl<T: Float + FromPrimitive + Debug + Into<f64> + 'static> Scalar for T {}

/// Lifts an f64 constant into the working precision.
#[inline]
pub(crate) fn constant<T: Scalar>(value: f64) -> T {
    T::from_f64(value).unwrap_or_else(T::nan)
}

/// Elementwise sign with `sign(0) == 0`; NaN is passed through so it never
/// compares equal to another sign.
#[inline]
pub(crate) fn sign<T: Scalar>(value: T) -> T {
    if value > T::zero() {
        T::one()
    } else if value < T::zero() {
        -T::one()
    } else if value == T::zero() {
        T::zero()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{constant, sign};

    #[test]
    fn sign_maps_zero_to_zero_for_both_zero_signs() {
        assert_eq!(sign(0.0_f64), 0.0);
        assert_eq!(sign(-0.0_f64), 0.0);
        assert_eq!(sign(3.5_f64), 1.0);
        assert_eq!(sign(-1e-300_f64), -1.0);
    }

    #[test]
    fn sign_of_nan_never_matches() {
        let s = sign(f64::NAN);
        assert!(s != 0.0 && s != 1.0 && s != -1.0);
    }

    #[test]
    fn constant_converts_into_single_precision() {
        let c: f32 = constant(0.15);
        assert!((c - 0.15_f32).abs() < f32::EPSILON);
    }
}
