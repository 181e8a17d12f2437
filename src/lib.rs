//! Taylor-series (jet) integration of ordinary differential equations.
//!
//! The integrator advances `ẋ = f(x, p, t)` by building a high-order
//! truncated power series of the solution about the current time (the
//! Picard recursion fills one coefficient per evaluation of the vector
//! field on a truncated jet), then uses the series both as the predictor
//! (one polynomial evaluation per step) and as the step-size estimator
//! (from the magnitude of the last two coefficients).
//!
//! Vector fields come in two shapes: scalar, `f(&Jet<U>, &P, &Jet<T>) ->
//! Jet<U>`, and vector, `f(&mut [Jet<U>], &[Jet<U>], &P, &Jet<T>)`
//! writing the field in place. Each shape has three output modes:
//! accepted steps, dense (a [`TaylorInterpolant`] evaluable anywhere in
//! the covered span), and pre-specified sample times.
//!
//! The engine is generic over the coefficient ring through [`Coeff`]:
//! `f64`/`f32` out of the box, `num_complex::Complex` behind the
//! `complex` feature, and any user ring with a norm and division by
//! small integers.

pub mod coeff;
pub mod driver;
pub mod error;
pub mod float;
pub mod interp;
pub mod jet;
pub mod jet_ops;
pub mod picard;
pub mod registry;
pub mod stepsize;
mod traits;

pub use coeff::{Analytic, Coeff};
pub use driver::{
    integrate, integrate_dense, integrate_range, integrate_vec, integrate_vec_dense,
    integrate_vec_range, IntegParams, Solution, Status,
};
pub use error::{Error, JetError};
pub use float::Float;
pub use interp::TaylorInterpolant;
pub use jet::Jet;
pub use registry::{JetRegistry, SpecializedJet};

/// Type alias for jets over `f64`.
pub type Jet64 = Jet<f64>;
/// Type alias for jets over `f32`.
pub type Jet32 = Jet<f32>;
