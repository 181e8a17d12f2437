//! `std::ops` implementations for `Jet<U>`.
//!
//! `Jet` is heap-backed, so every binary operator is provided both for
//! owned operands and for references; user vector fields receive `&Jet`
//! and can combine borrows without cloning. Division requires an
//! invertible leading coefficient and is therefore bounded on
//! [`Analytic`].

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::coeff::{Analytic, Coeff};
use crate::jet::Jet;
use crate::jet_ops;

#[inline]
fn check_orders<U>(a: &Jet<U>, b: &Jet<U>) {
    assert_eq!(
        a.coeffs.len(),
        b.coeffs.len(),
        "jet order mismatch in arithmetic"
    );
}

// ══════════════════════════════════════════════
//  Jet<U> ↔ Jet<U>
// ══════════════════════════════════════════════

impl<U: Coeff> Add for &Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn add(self, rhs: Self) -> Jet<U> {
        check_orders(self, rhs);
        let mut c = self.zero_like();
        jet_ops::jet_add(self.coeffs(), rhs.coeffs(), c.coeffs_mut());
        c
    }
}

impl<U: Coeff> Sub for &Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn sub(self, rhs: Self) -> Jet<U> {
        check_orders(self, rhs);
        let mut c = self.zero_like();
        jet_ops::jet_sub(self.coeffs(), rhs.coeffs(), c.coeffs_mut());
        c
    }
}

// Mul delegates to jet_ops::jet_mul (Cauchy product) which involves addition
#[allow(clippy::suspicious_arithmetic_impl)]
impl<U: Coeff> Mul for &Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn mul(self, rhs: Self) -> Jet<U> {
        check_orders(self, rhs);
        let mut c = self.zero_like();
        jet_ops::jet_mul(self.coeffs(), rhs.coeffs(), c.coeffs_mut());
        c
    }
}

// Div delegates to jet_ops::jet_div which involves multiplication internally
#[allow(clippy::suspicious_arithmetic_impl)]
impl<U: Analytic> Div for &Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn div(self, rhs: Self) -> Jet<U> {
        check_orders(self, rhs);
        let mut c = self.zero_like();
        jet_ops::jet_div(self.coeffs(), rhs.coeffs(), c.coeffs_mut());
        c
    }
}

impl<U: Coeff> Neg for &Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn neg(self) -> Jet<U> {
        let mut c = self.zero_like();
        jet_ops::jet_neg(self.coeffs(), c.coeffs_mut());
        c
    }
}

macro_rules! forward_owned_binop {
    ($trait:ident, $method:ident, $bound:ident) => {
        impl<U: $bound> $trait for Jet<U> {
            type Output = Jet<U>;
            #[inline]
            fn $method(self, rhs: Self) -> Jet<U> {
                (&self).$method(&rhs)
            }
        }

        impl<U: $bound> $trait<&Jet<U>> for Jet<U> {
            type Output = Jet<U>;
            #[inline]
            fn $method(self, rhs: &Jet<U>) -> Jet<U> {
                (&self).$method(rhs)
            }
        }

        impl<U: $bound> $trait<Jet<U>> for &Jet<U> {
            type Output = Jet<U>;
            #[inline]
            fn $method(self, rhs: Jet<U>) -> Jet<U> {
                self.$method(&rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add, Coeff);
forward_owned_binop!(Sub, sub, Coeff);
forward_owned_binop!(Mul, mul, Coeff);
forward_owned_binop!(Div, div, Analytic);

impl<U: Coeff> Neg for Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn neg(self) -> Jet<U> {
        -&self
    }
}

impl<U: Coeff> AddAssign<&Jet<U>> for Jet<U> {
    #[inline]
    fn add_assign(&mut self, rhs: &Jet<U>) {
        check_orders(self, rhs);
        for (c, r) in self.coeffs.iter_mut().zip(rhs.coeffs()) {
            *c = *c + *r;
        }
    }
}

impl<U: Coeff> AddAssign for Jet<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Jet<U>) {
        *self += &rhs;
    }
}

impl<U: Coeff> SubAssign<&Jet<U>> for Jet<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: &Jet<U>) {
        check_orders(self, rhs);
        for (c, r) in self.coeffs.iter_mut().zip(rhs.coeffs()) {
            *c = *c - *r;
        }
    }
}

impl<U: Coeff> SubAssign for Jet<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Jet<U>) {
        *self -= &rhs;
    }
}

impl<U: Coeff> MulAssign<&Jet<U>> for Jet<U> {
    #[inline]
    fn mul_assign(&mut self, rhs: &Jet<U>) {
        *self = &*self * rhs;
    }
}

impl<U: Coeff> MulAssign for Jet<U> {
    #[inline]
    fn mul_assign(&mut self, rhs: Jet<U>) {
        *self *= &rhs;
    }
}

impl<U: Analytic> DivAssign<&Jet<U>> for Jet<U> {
    #[inline]
    fn div_assign(&mut self, rhs: &Jet<U>) {
        *self = &*self / rhs;
    }
}

impl<U: Analytic> DivAssign for Jet<U> {
    #[inline]
    fn div_assign(&mut self, rhs: Jet<U>) {
        *self /= &rhs;
    }
}

// ══════════════════════════════════════════════
//  Jet<U> ↔ ring element
// ══════════════════════════════════════════════

impl<U: Coeff> Add<U> for Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn add(mut self, rhs: U) -> Jet<U> {
        self.coeffs[0] = self.coeffs[0] + rhs;
        self
    }
}

impl<U: Coeff> Add<U> for &Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn add(self, rhs: U) -> Jet<U> {
        self.clone() + rhs
    }
}

impl<U: Coeff> Sub<U> for Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn sub(mut self, rhs: U) -> Jet<U> {
        self.coeffs[0] = self.coeffs[0] - rhs;
        self
    }
}

impl<U: Coeff> Sub<U> for &Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn sub(self, rhs: U) -> Jet<U> {
        self.clone() - rhs
    }
}

impl<U: Coeff> Mul<U> for Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn mul(mut self, rhs: U) -> Jet<U> {
        for c in &mut self.coeffs {
            *c = *c * rhs;
        }
        self
    }
}

impl<U: Coeff> Mul<U> for &Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn mul(self, rhs: U) -> Jet<U> {
        self.clone() * rhs
    }
}

// Scalar Div multiplies by the reciprocal
#[allow(clippy::suspicious_arithmetic_impl)]
impl<U: Analytic> Div<U> for Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn div(self, rhs: U) -> Jet<U> {
        self * rhs.recip()
    }
}

impl<U: Analytic> Div<U> for &Jet<U> {
    type Output = Jet<U>;
    #[inline]
    fn div(self, rhs: U) -> Jet<U> {
        self.clone() / rhs
    }
}

// Mixed ops with primitive floats on the left.
macro_rules! impl_left_scalar_ops {
    ($f:ty) => {
        impl Add<Jet<$f>> for $f {
            type Output = Jet<$f>;
            #[inline]
            fn add(self, rhs: Jet<$f>) -> Jet<$f> {
                rhs + self
            }
        }

        impl Add<&Jet<$f>> for $f {
            type Output = Jet<$f>;
            #[inline]
            fn add(self, rhs: &Jet<$f>) -> Jet<$f> {
                rhs + self
            }
        }

        impl Sub<Jet<$f>> for $f {
            type Output = Jet<$f>;
            #[inline]
            fn sub(self, rhs: Jet<$f>) -> Jet<$f> {
                -(rhs - self)
            }
        }

        impl Sub<&Jet<$f>> for $f {
            type Output = Jet<$f>;
            #[inline]
            fn sub(self, rhs: &Jet<$f>) -> Jet<$f> {
                -(rhs - self)
            }
        }

        impl Mul<Jet<$f>> for $f {
            type Output = Jet<$f>;
            #[inline]
            fn mul(self, rhs: Jet<$f>) -> Jet<$f> {
                rhs * self
            }
        }

        impl Mul<&Jet<$f>> for $f {
            type Output = Jet<$f>;
            #[inline]
            fn mul(self, rhs: &Jet<$f>) -> Jet<$f> {
                rhs * self
            }
        }

        impl Div<Jet<$f>> for $f {
            type Output = Jet<$f>;
            #[inline]
            fn div(self, rhs: Jet<$f>) -> Jet<$f> {
                Jet::constant(self, rhs.order()) / rhs
            }
        }

        impl Div<&Jet<$f>> for $f {
            type Output = Jet<$f>;
            #[inline]
            fn div(self, rhs: &Jet<$f>) -> Jet<$f> {
                Jet::constant(self, rhs.order()) / rhs
            }
        }
    };
}

impl_left_scalar_ops!(f32);
impl_left_scalar_ops!(f64);
