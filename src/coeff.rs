//! The [`Coeff`] and [`Analytic`] traits for ring-generic jet code.
//!
//! The integration engine is written against `Coeff` only: a series
//! coefficient must support ring arithmetic, division by small positive
//! integers, scaling by a real, an infinity norm down to a real type, and
//! construction of zero/one elements of the same shape. The series
//! elementary functions (exp, ln, sin, ...) additionally need value-level
//! elementary functions on the ring, which is what [`Analytic`] provides.
//!
//! Implemented for `f32`/`f64`, and for `num_complex::Complex<F>` behind
//! the `complex` cargo feature.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use crate::float::Float;

/// Coefficient ring of a truncated power series.
///
/// `Real` is the real type the norm reduces to; it also carries time,
/// step sizes, and tolerances in the integration driver.
pub trait Coeff:
    Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Copy
    + PartialEq
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Real type of norms, times, and tolerances.
    type Real: Float;

    /// Zero element of the same shape as `self`.
    fn zero_like(&self) -> Self;

    /// One element of the same shape as `self`.
    fn one_like(&self) -> Self;

    /// Embed a real number into the ring.
    fn from_real(r: Self::Real) -> Self;

    /// Multiply by a real scalar.
    fn scale(&self, s: Self::Real) -> Self;

    /// Divide by a small positive integer (the Picard recursion divisor).
    fn div_unsigned(&self, n: u32) -> Self;

    /// Infinity norm, reduced to the real type.
    ///
    /// Also the finiteness probe: a non-finite element must produce a
    /// non-finite norm.
    fn norm_inf(&self) -> Self::Real;
}

/// Value-level elementary functions on a coefficient ring.
///
/// These seed the order-zero coefficient of the series recurrences; the
/// higher coefficients are produced by ring arithmetic alone.
pub trait Analytic: Coeff {
    fn recip(&self) -> Self;
    fn exp(&self) -> Self;
    fn ln(&self) -> Self;
    fn sqrt(&self) -> Self;
    fn sin_cos(&self) -> (Self, Self);
    fn sinh_cosh(&self) -> (Self, Self);
    fn tan(&self) -> Self;
    fn tanh(&self) -> Self;
    fn asin(&self) -> Self;
    fn acos(&self) -> Self;
    fn atan(&self) -> Self;
    fn powf(&self, r: Self::Real) -> Self;
    fn powi(&self, n: i32) -> Self;
}

macro_rules! impl_real_coeff {
    ($f:ty) => {
        impl Coeff for $f {
            type Real = $f;

            #[inline]
            fn zero_like(&self) -> $f {
                0.0
            }

            #[inline]
            fn one_like(&self) -> $f {
                1.0
            }

            #[inline]
            fn from_real(r: $f) -> $f {
                r
            }

            #[inline]
            fn scale(&self, s: $f) -> $f {
                self * s
            }

            #[inline]
            fn div_unsigned(&self, n: u32) -> $f {
                self / (n as $f)
            }

            #[inline]
            fn norm_inf(&self) -> $f {
                self.abs()
            }
        }

        impl Analytic for $f {
            #[inline]
            fn recip(&self) -> $f {
                1.0 / self
            }

            #[inline]
            fn exp(&self) -> $f {
                <$f>::exp(*self)
            }

            #[inline]
            fn ln(&self) -> $f {
                <$f>::ln(*self)
            }

            #[inline]
            fn sqrt(&self) -> $f {
                <$f>::sqrt(*self)
            }

            #[inline]
            fn sin_cos(&self) -> ($f, $f) {
                <$f>::sin_cos(*self)
            }

            #[inline]
            fn sinh_cosh(&self) -> ($f, $f) {
                (<$f>::sinh(*self), <$f>::cosh(*self))
            }

            #[inline]
            fn tan(&self) -> $f {
                <$f>::tan(*self)
            }

            #[inline]
            fn tanh(&self) -> $f {
                <$f>::tanh(*self)
            }

            #[inline]
            fn asin(&self) -> $f {
                <$f>::asin(*self)
            }

            #[inline]
            fn acos(&self) -> $f {
                <$f>::acos(*self)
            }

            #[inline]
            fn atan(&self) -> $f {
                <$f>::atan(*self)
            }

            #[inline]
            fn powf(&self, r: $f) -> $f {
                <$f>::powf(*self, r)
            }

            #[inline]
            fn powi(&self, n: i32) -> $f {
                <$f>::powi(*self, n)
            }
        }
    };
}

impl_real_coeff!(f32);
impl_real_coeff!(f64);

#[cfg(feature = "complex")]
mod complex_impls {
    use num_complex::Complex;

    use super::{Analytic, Coeff};
    use crate::float::Float;

    impl<F: Float> Coeff for Complex<F> {
        type Real = F;

        #[inline]
        fn zero_like(&self) -> Self {
            Complex::new(F::zero(), F::zero())
        }

        #[inline]
        fn one_like(&self) -> Self {
            Complex::new(F::one(), F::zero())
        }

        #[inline]
        fn from_real(r: F) -> Self {
            Complex::new(r, F::zero())
        }

        #[inline]
        fn scale(&self, s: F) -> Self {
            Complex::new(self.re * s, self.im * s)
        }

        #[inline]
        fn div_unsigned(&self, n: u32) -> Self {
            let inv = F::one() / F::from(n).unwrap();
            self.scale(inv)
        }

        #[inline]
        fn norm_inf(&self) -> F {
            self.norm()
        }
    }

    // Inherent Complex methods take precedence over the trait being
    // implemented, so method-call syntax below never recurses.
    impl<F: Float> Analytic for Complex<F> {
        #[inline]
        fn recip(&self) -> Self {
            self.inv()
        }

        #[inline]
        fn exp(&self) -> Self {
            (*self).exp()
        }

        #[inline]
        fn ln(&self) -> Self {
            (*self).ln()
        }

        #[inline]
        fn sqrt(&self) -> Self {
            (*self).sqrt()
        }

        #[inline]
        fn sin_cos(&self) -> (Self, Self) {
            ((*self).sin(), (*self).cos())
        }

        #[inline]
        fn sinh_cosh(&self) -> (Self, Self) {
            ((*self).sinh(), (*self).cosh())
        }

        #[inline]
        fn tan(&self) -> Self {
            (*self).tan()
        }

        #[inline]
        fn tanh(&self) -> Self {
            (*self).tanh()
        }

        #[inline]
        fn asin(&self) -> Self {
            (*self).asin()
        }

        #[inline]
        fn acos(&self) -> Self {
            (*self).acos()
        }

        #[inline]
        fn atan(&self) -> Self {
            (*self).atan()
        }

        #[inline]
        fn powf(&self, r: F) -> Self {
            (*self).powf(r)
        }

        #[inline]
        fn powi(&self, n: i32) -> Self {
            (*self).powi(n)
        }
    }
}
