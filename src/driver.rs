//! Integration driver: the common step loop and the public entry points.
//!
//! One loop serves the three output modes. Per step: fill the jet
//! (generic Picard recursion, or a probed specialized builder), pick the
//! step size from the trailing coefficients (falling back to the second
//! control when they vanish), clamp to the horizon, advance the state by
//! evaluating the jet, record, and re-seed the working series. Reverse
//! time is first class: `sign` drives both the loop predicate and the
//! sign of the step, while the step-size rules always return a positive
//! magnitude.
//!
//! Working storage (state jets, field output, truncation scratch) is
//! created once per call and reused across steps; the hot loop performs
//! no allocation of its own beyond filling the output buffers.

use std::fmt::{self, Display};

use num_traits::{Float as NumFloat, One, Zero};

use crate::coeff::Coeff;
use crate::error::Error;
use crate::float::Float;
use crate::interp::TaylorInterpolant;
use crate::jet::Jet;
use crate::picard::{jet_coeffs, jet_coeffs_vec};
use crate::registry::{JetRegistry, SpecializedJet};
use crate::stepsize::{second_stepsize, second_stepsize_vec, stepsize, stepsize_vec};

/// Configuration of an integration call.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegParams<T> {
    /// Series order N (the jet carries N + 1 coefficients).
    pub order: usize,
    /// Absolute tolerance for the step-size control.
    pub abstol: T,
    /// Hard cap on accepted steps.
    pub max_steps: usize,
    /// Permit a registered specialized jet builder to replace the
    /// generic recursion.
    pub parse_eqs: bool,
}

impl<T: Float> IntegParams<T> {
    /// Parameters with the given order and tolerance; `max_steps` = 500,
    /// `parse_eqs` = true.
    pub fn new(order: usize, abstol: T) -> Self {
        IntegParams {
            order,
            abstol,
            max_steps: 500,
            parse_eqs: true,
        }
    }

    /// Replace the step cap.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Enable or disable specialized jet builders.
    pub fn with_parse_eqs(mut self, parse_eqs: bool) -> Self {
        self.parse_eqs = parse_eqs;
        self
    }

    fn validate(&self) -> Result<(), Error> {
        if self.order < 1 {
            return Err(Error::InvalidOrder);
        }
        if !(self.abstol > T::zero()) || !self.abstol.is_finite() {
            return Err(Error::InvalidTolerance);
        }
        if self.max_steps < 1 {
            return Err(Error::InvalidMaxSteps);
        }
        Ok(())
    }
}

impl Default for IntegParams<f64> {
    fn default() -> Self {
        IntegParams::new(20, 1e-10)
    }
}

impl Default for IntegParams<f32> {
    fn default() -> Self {
        IntegParams::new(12, 1e-5)
    }
}

/// Terminal state of an integration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The time horizon was reached.
    Completed,
    /// The step cap was hit before the horizon; the solution is the
    /// well-formed prefix.
    StepLimit,
    /// The step size degenerated (zero or non-finite after the fallback
    /// control); the solution is the well-formed prefix.
    Stalled,
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Completed => write!(f, "integration reached the time horizon"),
            Status::StepLimit => write!(f, "maximum number of integration steps reached"),
            Status::Stalled => write!(f, "step size degenerated; integration stopped early"),
        }
    }
}

/// Sampled solution: times, states, terminal status.
///
/// `S` is the per-sample state payload: the coefficient ring `U` for the
/// scalar entry points, `Vec<U>` for the vector ones.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<T, S> {
    /// Sample times, in integration order.
    pub t: Vec<T>,
    /// States at the sample times.
    pub x: Vec<S>,
    /// How the integration ended.
    pub status: Status,
    /// Accepted integrator steps (samples may differ in range mode).
    pub steps: usize,
}

impl<T: Float, S> Solution<T, S> {
    /// Iterate over `(t, state)` sample pairs.
    pub fn iter(&self) -> impl Iterator<Item = (T, &S)> + '_ {
        self.t.iter().copied().zip(self.x.iter())
    }
}

/// Output mode of the common loop.
#[derive(Clone, Copy)]
enum Mode<'a, T> {
    Steps,
    Dense,
    Range(&'a [T]),
}

fn validate_range<T: Float>(trange: &[T]) -> Result<(), Error> {
    if trange.is_empty() {
        return Err(Error::EmptyRange);
    }
    if trange.len() == 1 {
        return Ok(());
    }
    let ascending = trange[1] > trange[0];
    for w in trange.windows(2) {
        let ok = if ascending { w[1] > w[0] } else { w[1] < w[0] };
        if !ok {
            return Err(Error::NonMonotoneRange);
        }
    }
    Ok(())
}

// ══════════════════════════════════════════════
//  Scalar driver
// ══════════════════════════════════════════════

fn integrate_scalar_core<U, P, F>(
    f: F,
    x0: U,
    t0: U::Real,
    tmax: U::Real,
    params: &IntegParams<U::Real>,
    p: &P,
    mode: Mode<'_, U::Real>,
) -> Result<(Solution<U::Real, U>, Option<TaylorInterpolant<U::Real, Jet<U>>>), Error>
where
    U: Coeff,
    F: Fn(&Jet<U>, &P, &Jet<U::Real>) -> Jet<U>,
{
    params.validate()?;
    let order = params.order;
    let dense = matches!(mode, Mode::Dense);
    let sign = if tmax >= t0 {
        U::Real::one()
    } else {
        -U::Real::one()
    };

    // Working series, allocated once and reused across steps.
    let mut tser = Jet::variable(t0, order);
    let mut xser = Jet::constant(x0, order);
    let mut xaux = xser.zero_like();
    let mut taux = tser.zero_like();

    let cap = match mode {
        Mode::Range(tr) => tr.len(),
        _ => params.max_steps + 1,
    };
    let mut tv: Vec<U::Real> = Vec::with_capacity(cap);
    let mut xv: Vec<U> = Vec::with_capacity(cap);
    let mut polys: Vec<Jet<U>> = if dense {
        Vec::with_capacity(params.max_steps)
    } else {
        Vec::new()
    };
    tv.push(t0);
    xv.push(x0);
    let mut ri = 1usize;

    let mut t_current = t0;
    let mut nsteps = 0usize;
    let mut status = Status::Completed;

    while sign * t_current < sign * tmax {
        if nsteps >= params.max_steps {
            status = Status::StepLimit;
            eprintln!("warning: maximum number of integration steps reached");
            break;
        }
        jet_coeffs(&f, &tser, &mut xser, &mut xaux, &mut taux, p);

        let mut dt = stepsize(&xser, params.abstol);
        if !dt.is_finite() {
            dt = second_stepsize(&xser);
        }
        if dt.is_nan() || dt <= U::Real::zero() {
            status = Status::Stalled;
            break;
        }
        let remaining = sign * (tmax - t_current);
        let clamped = dt >= remaining;
        let delta = sign * if clamped { remaining } else { dt };
        let t_next = if clamped { tmax } else { t_current + delta };
        let x_next = xser.evaluate(delta);

        // Dense mode keeps the jet before the next iteration reuses its
        // backing storage.
        if dense {
            polys.push(xser.clone());
        }
        if let Mode::Range(tr) = mode {
            while ri < tr.len() && sign * tr[ri] < sign * t_next {
                tv.push(tr[ri]);
                xv.push(xser.evaluate(tr[ri] - t_current));
                ri += 1;
            }
            if clamped && ri < tr.len() && tr[ri] == tmax {
                tv.push(tmax);
                xv.push(xser.evaluate(tmax - t_current));
                ri += 1;
            }
        }

        xser.set_coeff(0, x_next);
        t_current = t_next;
        tser.set_coeff(0, t_current);
        nsteps += 1;
        if !matches!(mode, Mode::Range(_)) {
            tv.push(t_current);
            xv.push(x_next);
        }
    }

    let interp = if dense {
        Some(TaylorInterpolant::new(tv.clone(), polys))
    } else {
        None
    };
    Ok((
        Solution {
            t: tv,
            x: xv,
            status,
            steps: nsteps,
        },
        interp,
    ))
}

/// Integrate a scalar ODE `ẋ = f(x, p, t)`, returning every accepted
/// step.
///
/// ```
/// use picard::{integrate, IntegParams, Jet};
///
/// // ẋ = x, x(0) = 1 → x(1) = e
/// let params = IntegParams::new(20, 1e-12);
/// let sol = integrate(
///     |x: &Jet<f64>, _p: &(), _t: &Jet<f64>| x.clone(),
///     1.0, 0.0, 1.0, &params, &(),
/// )
/// .unwrap();
/// let xf = *sol.x.last().unwrap();
/// assert!((xf - 1.0_f64.exp()).abs() < 1e-10);
/// ```
pub fn integrate<U, P, F>(
    f: F,
    x0: U,
    t0: U::Real,
    tmax: U::Real,
    params: &IntegParams<U::Real>,
    p: &P,
) -> Result<Solution<U::Real, U>, Error>
where
    U: Coeff,
    F: Fn(&Jet<U>, &P, &Jet<U::Real>) -> Jet<U>,
{
    integrate_scalar_core(f, x0, t0, tmax, params, p, Mode::Steps).map(|(sol, _)| sol)
}

/// Integrate a scalar ODE keeping every per-step jet, so the solution can
/// be evaluated anywhere inside the covered span.
pub fn integrate_dense<U, P, F>(
    f: F,
    x0: U,
    t0: U::Real,
    tmax: U::Real,
    params: &IntegParams<U::Real>,
    p: &P,
) -> Result<(Solution<U::Real, U>, TaylorInterpolant<U::Real, Jet<U>>), Error>
where
    U: Coeff,
    F: Fn(&Jet<U>, &P, &Jet<U::Real>) -> Jet<U>,
{
    integrate_scalar_core(f, x0, t0, tmax, params, p, Mode::Dense)
        .map(|(sol, interp)| (sol, interp.expect("dense mode always builds an interpolant")))
}

/// Integrate a scalar ODE, sampling the solution at the given times.
///
/// `trange` must be strictly monotone; integration runs from
/// `trange[0]` to `trange[last]`, and each sample is the jet of the
/// step containing it evaluated at the sample time. On early termination
/// the returned solution is the prefix of samples actually reached.
pub fn integrate_range<U, P, F>(
    f: F,
    x0: U,
    trange: &[U::Real],
    params: &IntegParams<U::Real>,
    p: &P,
) -> Result<Solution<U::Real, U>, Error>
where
    U: Coeff,
    F: Fn(&Jet<U>, &P, &Jet<U::Real>) -> Jet<U>,
{
    validate_range(trange)?;
    let t0 = trange[0];
    let tmax = trange[trange.len() - 1];
    integrate_scalar_core(f, x0, t0, tmax, params, p, Mode::Range(trange)).map(|(sol, _)| sol)
}

// ══════════════════════════════════════════════
//  Vector driver
// ══════════════════════════════════════════════

#[allow(clippy::too_many_arguments)]
fn integrate_vec_core<U, P, F>(
    mut f: F,
    q0: &[U],
    t0: U::Real,
    tmax: U::Real,
    params: &IntegParams<U::Real>,
    p: &P,
    registry: Option<&JetRegistry<U, P>>,
    mode: Mode<'_, U::Real>,
) -> Result<
    (
        Solution<U::Real, Vec<U>>,
        Option<TaylorInterpolant<U::Real, Vec<Jet<U>>>>,
    ),
    Error,
>
where
    U: Coeff,
    F: FnMut(&mut [Jet<U>], &[Jet<U>], &P, &Jet<U::Real>) + 'static,
{
    params.validate()?;
    if q0.is_empty() {
        return Err(Error::EmptyState);
    }
    let order = params.order;
    let dense = matches!(mode, Mode::Dense);
    let sign = if tmax >= t0 {
        U::Real::one()
    } else {
        -U::Real::one()
    };

    // Working series, allocated once and reused across steps.
    let mut tser = Jet::variable(t0, order);
    let mut taux = tser.zero_like();
    let mut x: Vec<Jet<U>> = q0.iter().map(|&q| Jet::constant(q, order)).collect();
    let mut dx: Vec<Jet<U>> = x.iter().map(Jet::zero_like).collect();
    let mut xaux: Vec<Jet<U>> = x.iter().map(Jet::zero_like).collect();
    let mut xnow: Vec<U> = q0.to_vec();

    // Probe a registered specialized builder once, before the main loop.
    let mut spec: Option<&SpecializedJet<U, P>> = None;
    if params.parse_eqs {
        if let Some(reg) = registry {
            if let Some(builder) = reg.lookup(&f) {
                let mut xs = x.clone();
                let mut dxs = dx.clone();
                let mut xauxs = xaux.clone();
                match builder(&mut xs, &mut dxs, &mut xauxs, &tser, p) {
                    Ok(()) => spec = Some(builder),
                    Err(e) => eprintln!(
                        "warning: specialized jet builder failed in probe ({e}); \
                         using the generic builder"
                    ),
                }
            }
        }
    }

    let cap = match mode {
        Mode::Range(tr) => tr.len(),
        _ => params.max_steps + 1,
    };
    let mut tv: Vec<U::Real> = Vec::with_capacity(cap);
    let mut xv: Vec<Vec<U>> = Vec::with_capacity(cap);
    let mut polys: Vec<Vec<Jet<U>>> = if dense {
        Vec::with_capacity(params.max_steps)
    } else {
        Vec::new()
    };
    tv.push(t0);
    xv.push(q0.to_vec());
    let mut ri = 1usize;

    let mut t_current = t0;
    let mut nsteps = 0usize;
    let mut status = Status::Completed;

    while sign * t_current < sign * tmax {
        if nsteps >= params.max_steps {
            status = Status::StepLimit;
            eprintln!("warning: maximum number of integration steps reached");
            break;
        }
        if let Some(builder) = spec {
            if let Err(e) = builder(&mut x, &mut dx, &mut xaux, &tser, p) {
                eprintln!(
                    "warning: specialized jet builder failed ({e}); \
                     switching to the generic builder"
                );
                spec = None;
                jet_coeffs_vec(&mut f, &tser, &mut x, &mut dx, &mut xaux, &mut taux, p);
            }
        } else {
            jet_coeffs_vec(&mut f, &tser, &mut x, &mut dx, &mut xaux, &mut taux, p);
        }

        let mut dt = stepsize_vec(&x, params.abstol);
        if !dt.is_finite() {
            dt = second_stepsize_vec(&x);
        }
        if dt.is_nan() || dt <= U::Real::zero() {
            status = Status::Stalled;
            break;
        }
        let remaining = sign * (tmax - t_current);
        let clamped = dt >= remaining;
        let delta = sign * if clamped { remaining } else { dt };
        let t_next = if clamped { tmax } else { t_current + delta };
        for (xj_now, xj) in xnow.iter_mut().zip(x.iter()) {
            *xj_now = xj.evaluate(delta);
        }

        // Dense mode keeps the jets before the next iteration reuses
        // their backing storage.
        if dense {
            polys.push(x.clone());
        }
        if let Mode::Range(tr) = mode {
            while ri < tr.len() && sign * tr[ri] < sign * t_next {
                let dtq = tr[ri] - t_current;
                tv.push(tr[ri]);
                xv.push(x.iter().map(|xj| xj.evaluate(dtq)).collect());
                ri += 1;
            }
            if clamped && ri < tr.len() && tr[ri] == tmax {
                let dtq = tmax - t_current;
                tv.push(tmax);
                xv.push(x.iter().map(|xj| xj.evaluate(dtq)).collect());
                ri += 1;
            }
        }

        for (xj, &xj_now) in x.iter_mut().zip(xnow.iter()) {
            xj.set_coeff(0, xj_now);
        }
        for dxj in dx.iter_mut() {
            dxj.set_zero();
        }
        t_current = t_next;
        tser.set_coeff(0, t_current);
        nsteps += 1;
        if !matches!(mode, Mode::Range(_)) {
            tv.push(t_current);
            xv.push(xnow.clone());
        }
    }

    let interp = if dense {
        Some(TaylorInterpolant::new(tv.clone(), polys))
    } else {
        None
    };
    Ok((
        Solution {
            t: tv,
            x: xv,
            status,
            steps: nsteps,
        },
        interp,
    ))
}

/// Integrate a vector ODE `ẋ = f(x, p, t)` with an in-place field,
/// returning every accepted step.
///
/// `f` writes the field into its first argument, one series per state
/// component. `registry` optionally supplies specialized jet builders
/// (see [`JetRegistry`]); pass `None` to always use the generic
/// recursion.
pub fn integrate_vec<U, P, F>(
    f: F,
    q0: &[U],
    t0: U::Real,
    tmax: U::Real,
    params: &IntegParams<U::Real>,
    p: &P,
    registry: Option<&JetRegistry<U, P>>,
) -> Result<Solution<U::Real, Vec<U>>, Error>
where
    U: Coeff,
    F: FnMut(&mut [Jet<U>], &[Jet<U>], &P, &Jet<U::Real>) + 'static,
{
    integrate_vec_core(f, q0, t0, tmax, params, p, registry, Mode::Steps).map(|(sol, _)| sol)
}

/// Integrate a vector ODE keeping every per-step jet for dense
/// evaluation.
#[allow(clippy::type_complexity)]
pub fn integrate_vec_dense<U, P, F>(
    f: F,
    q0: &[U],
    t0: U::Real,
    tmax: U::Real,
    params: &IntegParams<U::Real>,
    p: &P,
    registry: Option<&JetRegistry<U, P>>,
) -> Result<
    (
        Solution<U::Real, Vec<U>>,
        TaylorInterpolant<U::Real, Vec<Jet<U>>>,
    ),
    Error,
>
where
    U: Coeff,
    F: FnMut(&mut [Jet<U>], &[Jet<U>], &P, &Jet<U::Real>) + 'static,
{
    integrate_vec_core(f, q0, t0, tmax, params, p, registry, Mode::Dense)
        .map(|(sol, interp)| (sol, interp.expect("dense mode always builds an interpolant")))
}

/// Integrate a vector ODE, sampling the solution at the given times.
///
/// See [`integrate_range`] for the sampling contract.
pub fn integrate_vec_range<U, P, F>(
    f: F,
    q0: &[U],
    trange: &[U::Real],
    params: &IntegParams<U::Real>,
    p: &P,
    registry: Option<&JetRegistry<U, P>>,
) -> Result<Solution<U::Real, Vec<U>>, Error>
where
    U: Coeff,
    F: FnMut(&mut [Jet<U>], &[Jet<U>], &P, &Jet<U::Real>) + 'static,
{
    validate_range(trange)?;
    let t0 = trange[0];
    let tmax = trange[trange.len() - 1];
    integrate_vec_core(f, q0, t0, tmax, params, p, registry, Mode::Range(trange))
        .map(|(sol, _)| sol)
}
