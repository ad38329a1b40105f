pub mod dissipation;
pub mod error;
pub mod experiments;
pub mod force;
pub mod signals;
/// The `tireheat_core` crate provides the numerical core for tire slip heat studies.
/// Every model is a pure function over slip/force/power signals, generic over the
/// `Scalar` precision (`f32` or `f64`).
///
/// Key components:
/// - **Force**: saturating `tanh` longitudinal force law (`compute_force`, `TireParams`).
/// - **Dissipation**: signed and dissipated slip power, cumulative trapezoid energy.
/// - **Validation**: physical sanity checks run by drivers after each model call.
/// - **Experiments**: slip sweep and ramp-and-hold scenarios composed from the above.
pub mod traits;
pub mod validation;

pub use error::{ModelError, PhysicsViolation, TireError};
pub use force::TireParams;
