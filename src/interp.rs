//! Dense output: per-step jets preserved as a piecewise interpolant.
//!
//! Each accepted step contributes one segment: the deep copy of the jet
//! that produced the step, centered at the step's left knot. Evaluating
//! at a time τ selects the segment whose half-open interval (in the
//! direction of integration) contains τ and evaluates its polynomial at
//! τ minus the segment center, so the interpolant reproduces the driver's
//! own step values exactly at the knots.

use crate::coeff::Coeff;
use crate::float::Float;
use crate::jet::Jet;

/// Piecewise-polynomial solution: `n` knots and `n − 1` per-step jets.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaylorInterpolant<T, S> {
    t: Vec<T>,
    polys: Vec<S>,
}

impl<T: Float, S> TaylorInterpolant<T, S> {
    pub(crate) fn new(t: Vec<T>, polys: Vec<S>) -> Self {
        debug_assert_eq!(t.len(), polys.len() + 1);
        TaylorInterpolant { t, polys }
    }

    /// Step knots, including both endpoints.
    pub fn knots(&self) -> &[T] {
        &self.t
    }

    /// Per-step jets; segment k is centered at knot k.
    pub fn segments(&self) -> &[S] {
        &self.polys
    }

    /// Covered time span `(start, end)` in integration order.
    pub fn t_span(&self) -> Option<(T, T)> {
        if self.t.len() < 2 {
            return None;
        }
        Some((self.t[0], self.t[self.t.len() - 1]))
    }

    /// Index of the segment whose half-open interval (toward the
    /// integration direction) contains `tq`; the final knot closes the
    /// last segment. `None` outside the covered span.
    fn segment_index(&self, tq: T) -> Option<usize> {
        let t = &self.t;
        let n = t.len();
        if n < 2 {
            return None;
        }
        let last = t[n - 1];
        if t[n - 1] >= t[0] {
            if tq < t[0] || tq > last {
                return None;
            }
            if tq == last {
                return Some(n - 2);
            }
            let k = t.iter().position(|&tk| tk > tq).unwrap_or(n);
            Some(k.saturating_sub(1))
        } else {
            if tq > t[0] || tq < last {
                return None;
            }
            if tq == last {
                return Some(n - 2);
            }
            let k = t.iter().position(|&tk| tk < tq).unwrap_or(n);
            Some(k.saturating_sub(1))
        }
    }
}

impl<T: Float, U: Coeff<Real = T>> TaylorInterpolant<T, Jet<U>> {
    /// Evaluate the scalar interpolant at `tq`.
    pub fn evaluate(&self, tq: T) -> Option<U> {
        let k = self.segment_index(tq)?;
        Some(self.polys[k].evaluate(tq - self.t[k]))
    }

    /// Evaluate at many times; out-of-span points yield `None` entries.
    pub fn evaluate_many(&self, ts: &[T]) -> Vec<Option<U>> {
        ts.iter().map(|&tq| self.evaluate(tq)).collect()
    }
}

impl<T: Float, U: Coeff<Real = T>> TaylorInterpolant<T, Vec<Jet<U>>> {
    /// Evaluate the vector interpolant at `tq`.
    pub fn evaluate(&self, tq: T) -> Option<Vec<U>> {
        let k = self.segment_index(tq)?;
        let dt = tq - self.t[k];
        Some(self.polys[k].iter().map(|p| p.evaluate(dt)).collect())
    }

    /// Evaluate at many times; out-of-span points yield `None` entries.
    pub fn evaluate_many(&self, ts: &[T]) -> Vec<Option<Vec<U>>> {
        ts.iter().map(|&tq| self.evaluate(tq)).collect()
    }
}
