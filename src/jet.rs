//! Runtime-order truncated power series: `Jet<U>`.
//!
//! `coeffs[0]` is the current value, `coeffs[k]` = f^(k)(t₀) / k! (scaled
//! Taylor coefficient). The order (`coeffs.len() - 1`) is fixed when the
//! jet is created and preserved by every operation.
//!
//! Heap-backed so the order can be chosen at runtime; the integration
//! driver allocates its jets once per call and reuses them across steps.

use std::fmt::{self, Display};

use num_traits::{NumCast, One};

use crate::coeff::{Analytic, Coeff};
use crate::float::Float;
use crate::jet_ops;

/// Truncated power series with `order + 1` coefficients in a ring `U`.
///
/// Equality is structural: two jets are equal iff they have the same
/// order and every coefficient matches.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Jet<U> {
    pub(crate) coeffs: Vec<U>,
}

impl<U: Coeff> Jet<U> {
    /// Create a constant (zero higher-order coefficients).
    #[inline]
    pub fn constant(val: U, order: usize) -> Self {
        let mut coeffs = vec![val.zero_like(); order + 1];
        coeffs[0] = val;
        Jet { coeffs }
    }

    /// Create a variable: c₀ = val, c₁ = 1, rest zero.
    ///
    /// Represents the identity function `t ↦ val + (t - t₀)`; this is the
    /// shape of the time series inside the integrator.
    #[inline]
    pub fn variable(val: U, order: usize) -> Self {
        let mut coeffs = vec![val.zero_like(); order + 1];
        coeffs[0] = val;
        if order >= 1 {
            coeffs[1] = val.one_like();
        }
        Jet { coeffs }
    }

    /// Create a jet from raw coefficients. The order is `coeffs.len() - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `coeffs` is empty.
    #[inline]
    pub fn from_coeffs(coeffs: Vec<U>) -> Self {
        assert!(!coeffs.is_empty(), "a jet needs at least one coefficient");
        Jet { coeffs }
    }

    /// A zero jet of the same order and coefficient shape.
    #[inline]
    pub fn zero_like(&self) -> Self {
        Jet {
            coeffs: vec![self.coeffs[0].zero_like(); self.coeffs.len()],
        }
    }

    /// Series order (degree of the truncated polynomial).
    #[inline]
    pub fn order(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Current value (coefficient 0).
    #[inline]
    pub fn value(&self) -> U {
        self.coeffs[0]
    }

    /// Get the k-th scaled Taylor coefficient.
    #[inline]
    pub fn coeff(&self, k: usize) -> U {
        self.coeffs[k]
    }

    /// Set the k-th coefficient.
    #[inline]
    pub fn set_coeff(&mut self, k: usize, val: U) {
        self.coeffs[k] = val;
    }

    /// All coefficients.
    #[inline]
    pub fn coeffs(&self) -> &[U] {
        &self.coeffs
    }

    /// Mutable access to all coefficients.
    #[inline]
    pub fn coeffs_mut(&mut self) -> &mut [U] {
        &mut self.coeffs
    }

    /// Get the k-th derivative: `k! × coeffs[k]`.
    pub fn derivative(&self, k: usize) -> U {
        let mut factorial = U::Real::one();
        for i in 2..=k {
            factorial = factorial * NumCast::from(i).unwrap();
        }
        self.coeffs[k].scale(factorial)
    }

    /// Zero every coefficient in place, keeping the order.
    #[inline]
    pub fn set_zero(&mut self) {
        for c in &mut self.coeffs {
            *c = c.zero_like();
        }
    }

    /// Overwrite with `src` truncated at `ord`: coefficients `0..=ord` are
    /// copied, the rest zeroed.
    ///
    /// Coefficient `k` of every series operation depends only on
    /// coefficients `0..=k` of its inputs, so this fixed-storage form of a
    /// truncation is exact for reading outputs up to index `ord`.
    #[inline]
    pub fn truncate_from(&mut self, src: &Jet<U>, ord: usize) {
        debug_assert_eq!(self.coeffs.len(), src.coeffs.len());
        self.coeffs[..=ord].copy_from_slice(&src.coeffs[..=ord]);
        let z = src.coeffs[0].zero_like();
        for c in &mut self.coeffs[ord + 1..] {
            *c = z;
        }
    }

    /// Evaluate the polynomial at a real displacement `dt` from its center
    /// (Horner).
    #[inline]
    pub fn evaluate(&self, dt: U::Real) -> U {
        let n = self.order();
        let mut acc = self.coeffs[n];
        for k in (0..n).rev() {
            acc = acc.scale(dt) + self.coeffs[k];
        }
        acc
    }

    /// Series derivative, same order (the top coefficient becomes zero).
    pub fn deriv(&self) -> Self {
        let n = self.order();
        let mut c = vec![self.coeffs[0].zero_like(); n + 1];
        for k in 0..n {
            c[k] = self.coeffs[k + 1].scale(NumCast::from(k + 1).unwrap());
        }
        Jet { coeffs: c }
    }

    /// Series antiderivative with integration constant `c0`, same order
    /// (the top input coefficient is dropped).
    pub fn integ(&self, c0: U) -> Self {
        let n = self.order();
        let mut c = vec![self.coeffs[0].zero_like(); n + 1];
        c[0] = c0;
        for k in 1..=n {
            c[k] = self.coeffs[k - 1].div_unsigned(k as u32);
        }
        Jet { coeffs: c }
    }

    /// Multiply every coefficient by a real scalar.
    pub fn scale(&self, s: U::Real) -> Self {
        let mut c = vec![self.coeffs[0].zero_like(); self.coeffs.len()];
        jet_ops::jet_scale(&self.coeffs, s, &mut c);
        Jet { coeffs: c }
    }

    /// `self²` via the symmetric Cauchy product.
    pub fn sqr(&self) -> Self {
        let mut c = vec![self.coeffs[0].zero_like(); self.coeffs.len()];
        jet_ops::jet_sqr(&self.coeffs, &mut c);
        Jet { coeffs: c }
    }
}

impl<T: Float> Jet<T> {
    /// Embed a real series into another coefficient ring.
    ///
    /// Lets a vector field over `Jet<U>` mix in the (real) time series.
    pub fn lift<V: Coeff<Real = T>>(&self) -> Jet<V> {
        Jet {
            coeffs: self.coeffs.iter().map(|&c| V::from_real(c)).collect(),
        }
    }
}

// ── Elemental methods ──
// Each delegates to jet_ops with freshly allocated output/scratch; the
// integration hot loop itself never calls these (only user fields do).

impl<U: Analytic> Jet<U> {
    fn buf(&self) -> Vec<U> {
        vec![self.coeffs[0].zero_like(); self.coeffs.len()]
    }

    pub fn recip(&self) -> Self {
        let mut c = self.buf();
        jet_ops::jet_recip(&self.coeffs, &mut c);
        Jet { coeffs: c }
    }

    pub fn exp(&self) -> Self {
        let mut c = self.buf();
        jet_ops::jet_exp(&self.coeffs, &mut c);
        Jet { coeffs: c }
    }

    pub fn ln(&self) -> Self {
        let mut c = self.buf();
        jet_ops::jet_ln(&self.coeffs, &mut c);
        Jet { coeffs: c }
    }

    pub fn sqrt(&self) -> Self {
        let mut c = self.buf();
        jet_ops::jet_sqrt(&self.coeffs, &mut c);
        Jet { coeffs: c }
    }

    pub fn sin(&self) -> Self {
        self.sin_cos().0
    }

    pub fn cos(&self) -> Self {
        self.sin_cos().1
    }

    pub fn sin_cos(&self) -> (Self, Self) {
        let mut s = self.buf();
        let mut co = self.buf();
        jet_ops::jet_sin_cos(&self.coeffs, &mut s, &mut co);
        (Jet { coeffs: s }, Jet { coeffs: co })
    }

    pub fn tan(&self) -> Self {
        let mut c = self.buf();
        let mut scratch = self.buf();
        jet_ops::jet_tan(&self.coeffs, &mut c, &mut scratch);
        Jet { coeffs: c }
    }

    pub fn sinh(&self) -> Self {
        self.sinh_cosh().0
    }

    pub fn cosh(&self) -> Self {
        self.sinh_cosh().1
    }

    pub fn sinh_cosh(&self) -> (Self, Self) {
        let mut sh = self.buf();
        let mut ch = self.buf();
        jet_ops::jet_sinh_cosh(&self.coeffs, &mut sh, &mut ch);
        (Jet { coeffs: sh }, Jet { coeffs: ch })
    }

    pub fn tanh(&self) -> Self {
        let mut c = self.buf();
        let mut scratch = self.buf();
        jet_ops::jet_tanh(&self.coeffs, &mut c, &mut scratch);
        Jet { coeffs: c }
    }

    pub fn asin(&self) -> Self {
        let mut c = self.buf();
        let mut s1 = self.buf();
        let mut s2 = self.buf();
        jet_ops::jet_asin(&self.coeffs, &mut c, &mut s1, &mut s2);
        Jet { coeffs: c }
    }

    pub fn acos(&self) -> Self {
        let mut c = self.buf();
        let mut s1 = self.buf();
        let mut s2 = self.buf();
        jet_ops::jet_acos(&self.coeffs, &mut c, &mut s1, &mut s2);
        Jet { coeffs: c }
    }

    pub fn atan(&self) -> Self {
        let mut c = self.buf();
        let mut s1 = self.buf();
        let mut s2 = self.buf();
        jet_ops::jet_atan(&self.coeffs, &mut c, &mut s1, &mut s2);
        Jet { coeffs: c }
    }

    pub fn powf(&self, r: U::Real) -> Self {
        let mut c = self.buf();
        jet_ops::jet_powf(&self.coeffs, r, &mut c);
        Jet { coeffs: c }
    }

    pub fn powi(&self, n: i32) -> Self {
        let mut c = self.buf();
        let mut s1 = self.buf();
        let mut s2 = self.buf();
        jet_ops::jet_powi(&self.coeffs, n, &mut c, &mut s1, &mut s2);
        Jet { coeffs: c }
    }
}

impl<U: Coeff> Display for Jet<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coeffs[0])?;
        for (k, c) in self.coeffs.iter().enumerate().skip(1) {
            write!(f, " + {}·τ^{}", c, k)?;
        }
        Ok(())
    }
}
