//! Jet builder: order-by-order Picard recursion.
//!
//! Given a state jet whose coefficient 0 holds the current state, repeated
//! evaluation of the vector field on truncations of the jet fills the
//! higher coefficients one order at a time:
//!
//! `x[k+1] = f(x, p, t)[k] / (k+1)`
//!
//! Ascending order is mandatory: coefficient `k+1` of `x` depends on
//! coefficient `k` of `f(x, …)`, which in turn depends only on
//! coefficients `0..=k` of `x`. The truncations are written into
//! caller-provided scratch jets so the builder performs no allocation of
//! its own; the driver creates the scratch once per call and reuses it
//! across steps.

use crate::coeff::Coeff;
use crate::jet::Jet;

/// Fill the jet of a scalar ODE `ẋ = f(x, p, t)`.
///
/// On entry `x` holds the current state in coefficient 0; higher
/// coefficients are unspecified. On return `x[k]` is the k-th Taylor
/// coefficient of the solution for k = 0..=N. With order 0 this is a
/// no-op.
///
/// `xaux` and `taux` are scratch jets of the same order as `x` and `t`.
pub fn jet_coeffs<U, P, F>(
    f: &F,
    t: &Jet<U::Real>,
    x: &mut Jet<U>,
    xaux: &mut Jet<U>,
    taux: &mut Jet<U::Real>,
    params: &P,
) where
    U: Coeff,
    F: Fn(&Jet<U>, &P, &Jet<U::Real>) -> Jet<U>,
{
    let order = x.order();
    for ord in 0..order {
        taux.truncate_from(t, ord);
        xaux.truncate_from(x, ord);
        let dx = f(xaux, params, taux);
        x.set_coeff(ord + 1, dx.coeff(ord).div_unsigned(ord as u32 + 1));
    }
}

/// Fill the jets of a vector ODE `ẋ = f(x, p, t)` with an in-place field.
///
/// `f` must write exactly one series per component into `dx`, each of the
/// same order as its inputs. Per sub-order the field is invoked once and
/// every component's next coefficient is set from `dx`.
///
/// `dx` and `xaux` are scratch slices of the same shape as `x`; `taux`
/// matches `t`.
pub fn jet_coeffs_vec<U, P, F>(
    f: &mut F,
    t: &Jet<U::Real>,
    x: &mut [Jet<U>],
    dx: &mut [Jet<U>],
    xaux: &mut [Jet<U>],
    taux: &mut Jet<U::Real>,
    params: &P,
) where
    U: Coeff,
    F: FnMut(&mut [Jet<U>], &[Jet<U>], &P, &Jet<U::Real>),
{
    debug_assert_eq!(x.len(), dx.len());
    debug_assert_eq!(x.len(), xaux.len());
    let order = x[0].order();
    for ord in 0..order {
        taux.truncate_from(t, ord);
        for (aux, xj) in xaux.iter_mut().zip(x.iter()) {
            aux.truncate_from(xj, ord);
        }
        f(dx, xaux, params, taux);
        for (xj, dxj) in x.iter_mut().zip(dx.iter()) {
            xj.set_coeff(ord + 1, dxj.coeff(ord).div_unsigned(ord as u32 + 1));
        }
    }
}
