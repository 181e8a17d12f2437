//! Adaptive step-size selection from the jet's trailing coefficients.
//!
//! The primary rule models the Taylor remainder as dominated by its last
//! retained term: the step is the smallest h with
//! `‖x[k]‖ · h^k ≤ ε` for k in {N−1, N}. When both trailing coefficients
//! vanish the rule degenerates to +∞ and the second (fallback) control,
//! after Jorba and Zou, estimates a finite step from the earliest
//! non-vanishing interior coefficients instead. Both rules return a
//! positive magnitude; the driver applies the integration direction and
//! the horizon clamp.

use num_traits::{Float as NumFloat, Zero};

use crate::coeff::Coeff;
use crate::float::Float;
use crate::jet::Jet;

#[inline]
fn pow_root<T: Float>(base: T, k: usize) -> T {
    base.powf(T::one() / T::from(k).unwrap())
}

/// Step size for a single jet: `min_{k ∈ {N−1, N}} (ε/‖x[k]‖)^{1/k}`,
/// skipping vanished coefficients (and k = 0, where the root is
/// undefined). Returns +∞ when no trailing coefficient qualifies.
pub fn stepsize<U: Coeff>(x: &Jet<U>, epsilon: U::Real) -> U::Real {
    let order = x.order();
    let mut h = U::Real::infinity();
    for k in [order.saturating_sub(1), order] {
        if k == 0 {
            continue;
        }
        let aux = x.coeff(k).norm_inf();
        if aux.is_zero() {
            continue;
        }
        h = h.min(pow_root(epsilon / aux, k));
    }
    h
}

/// Step size for a vector of jets: the minimum over components.
pub fn stepsize_vec<U: Coeff>(x: &[Jet<U>], epsilon: U::Real) -> U::Real {
    x.iter()
        .map(|xj| stepsize(xj, epsilon))
        .fold(U::Real::infinity(), U::Real::min)
}

/// Raw interior estimate for one jet: `max_{k = 1..N−2} (1/‖x[k]‖)^{1/k}`
/// over the non-vanishing interior coefficients, zero when none qualify.
fn interior_stepsize<U: Coeff>(x: &Jet<U>) -> U::Real {
    let order = x.order();
    let mut h = U::Real::zero();
    for k in 1..order.saturating_sub(1) {
        let aux = x.coeff(k).norm_inf();
        if aux.is_zero() {
            continue;
        }
        h = h.max(pow_root(aux.recip(), k));
    }
    h
}

#[inline]
fn constant_nonzero<U: Coeff>(x: &Jet<U>) -> bool {
    let lead = x.coeff(0).norm_inf();
    !lead.is_zero() && lead.is_finite()
}

/// Second step-size control for one jet.
///
/// A jet whose interior coefficients all vanish but whose value does not
/// is an exact polynomial with zero truncation error; the step is
/// unbounded (+∞) and the driver's horizon clamp supplies the finite
/// value. The identically-zero jet yields 0: the state is stationary and
/// the driver stops.
pub fn second_stepsize<U: Coeff>(x: &Jet<U>) -> U::Real {
    let h = interior_stepsize(x);
    if h.is_zero() && constant_nonzero(x) {
        return U::Real::infinity();
    }
    h
}

/// Second step-size control for a vector of jets: the maximum over
/// components.
///
/// The exact-polynomial promotion to +∞ applies only when every
/// component's interior estimate vanishes; a finite estimate from any
/// component wins over a constant one.
pub fn second_stepsize_vec<U: Coeff>(x: &[Jet<U>]) -> U::Real {
    let h = x
        .iter()
        .map(interior_stepsize)
        .fold(U::Real::zero(), U::Real::max);
    if h.is_zero() && x.iter().any(constant_nonzero) {
        return U::Real::infinity();
    }
    h
}
