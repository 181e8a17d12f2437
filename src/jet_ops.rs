//! Shared coefficient-recurrence kernels for truncated power series.
//!
//! Convention: `c[k]` is the scaled Taylor coefficient `f^(k)(t₀) / k!`.
//! All kernels operate on slices `&[U]` (inputs) and `&mut [U]` (outputs)
//! over a coefficient ring `U`; the order is determined by the slice
//! lengths. Coefficient `k` of every kernel depends only on coefficients
//! `0..=k` of its inputs, which is what lets the jet builder feed
//! zero-filled truncations through a user vector field.
//!
//! Arithmetic kernels need only the ring ([`Coeff`]); the elementary
//! functions additionally seed coefficient 0 with a value-level function
//! and therefore require [`Analytic`].

use num_traits::{NumCast, Zero};

use crate::coeff::{Analytic, Coeff};

// ══════════════════════════════════════════════
//  Arithmetic
// ══════════════════════════════════════════════

/// `c = a + b`
#[inline]
pub fn jet_add<U: Coeff>(a: &[U], b: &[U], c: &mut [U]) {
    for k in 0..c.len() {
        c[k] = a[k] + b[k];
    }
}

/// `c = a - b`
#[inline]
pub fn jet_sub<U: Coeff>(a: &[U], b: &[U], c: &mut [U]) {
    for k in 0..c.len() {
        c[k] = a[k] - b[k];
    }
}

/// `c = -a`
#[inline]
pub fn jet_neg<U: Coeff>(a: &[U], c: &mut [U]) {
    for k in 0..c.len() {
        c[k] = -a[k];
    }
}

/// `c = s * a` where `s` is a real scalar.
#[inline]
pub fn jet_scale<U: Coeff>(a: &[U], s: U::Real, c: &mut [U]) {
    for k in 0..c.len() {
        c[k] = a[k].scale(s);
    }
}

/// `c = a * b` — Cauchy product.
///
/// `c[k] = Σ_{j=0}^{k} a[j] * b[k-j]`
#[inline]
pub fn jet_mul<U: Coeff>(a: &[U], b: &[U], c: &mut [U]) {
    let n = c.len();
    for k in 0..n {
        let mut sum = a[0].zero_like();
        for j in 0..=k {
            sum = sum + a[j] * b[k - j];
        }
        c[k] = sum;
    }
}

/// `c = a²` — Cauchy product with itself, folded symmetric halves.
#[inline]
pub fn jet_sqr<U: Coeff>(a: &[U], c: &mut [U]) {
    let n = c.len();
    let two = NumCast::from(2.0).unwrap();
    for k in 0..n {
        let mut sum = a[0].zero_like();
        for j in 0..(k + 1) / 2 {
            sum = sum + a[j] * a[k - j];
        }
        sum = sum.scale(two);
        if k % 2 == 0 {
            sum = sum + a[k / 2] * a[k / 2];
        }
        c[k] = sum;
    }
}

/// `c = a / b` — recursive division.
///
/// `c[k] = (a[k] - Σ_{j=1}^{k} b[j] * c[k-j]) / b[0]`
///
/// Requires `b[0]` invertible; `c` must not alias `a` or `b`.
#[inline]
pub fn jet_div<U: Analytic>(a: &[U], b: &[U], c: &mut [U]) {
    let n = c.len();
    let inv_b0 = b[0].recip();
    for k in 0..n {
        let mut sum = a[k];
        for j in 1..=k {
            sum = sum - b[j] * c[k - j];
        }
        c[k] = sum * inv_b0;
    }
}

/// `c = 1/a` — reciprocal via the division recurrence with numerator 1.
#[inline]
pub fn jet_recip<U: Analytic>(a: &[U], c: &mut [U]) {
    let n = c.len();
    let inv_a0 = a[0].recip();
    c[0] = inv_a0;
    for k in 1..n {
        let mut sum = a[0].zero_like();
        for j in 1..=k {
            sum = sum + a[j] * c[k - j];
        }
        c[k] = -(sum * inv_a0);
    }
}

// ══════════════════════════════════════════════
//  Transcendentals (logarithmic-derivative recurrences)
// ══════════════════════════════════════════════

/// `c = exp(a)`
///
/// `c[0] = exp(a[0])`
/// `c[k] = (1/k) * Σ_{j=1}^{k} j * a[j] * c[k-j]`
#[inline]
pub fn jet_exp<U: Analytic>(a: &[U], c: &mut [U]) {
    let n = c.len();
    c[0] = a[0].exp();
    for k in 1..n {
        let mut sum = a[0].zero_like();
        for j in 1..=k {
            let jf = NumCast::from(j).unwrap();
            sum = sum + (a[j] * c[k - j]).scale(jf);
        }
        c[k] = sum.div_unsigned(k as u32);
    }
}

/// `c = ln(a)`
///
/// `c[0] = ln(a[0])`
/// `c[k] = (a[k] - (1/k) * Σ_{j=1}^{k-1} j * c[j] * a[k-j]) / a[0]`
#[inline]
pub fn jet_ln<U: Analytic>(a: &[U], c: &mut [U]) {
    let n = c.len();
    let inv_a0 = a[0].recip();
    c[0] = a[0].ln();
    for k in 1..n {
        let mut sum = a[0].zero_like();
        for j in 1..k {
            let jf = NumCast::from(j).unwrap();
            sum = sum + (c[j] * a[k - j]).scale(jf);
        }
        c[k] = (a[k] - sum.div_unsigned(k as u32)) * inv_a0;
    }
}

/// `c = sqrt(a)`
///
/// `c[0] = sqrt(a[0])`
/// `c[k] = (a[k] - Σ_{j=1}^{k-1} c[j] * c[k-j]) / (2 * c[0])`
#[inline]
pub fn jet_sqrt<U: Analytic>(a: &[U], c: &mut [U]) {
    let n = c.len();
    c[0] = a[0].sqrt();
    let two = NumCast::from(2.0).unwrap();
    let inv_2c0 = c[0].scale(two).recip();
    for k in 1..n {
        let mut sum = a[0].zero_like();
        for j in 1..k {
            sum = sum + c[j] * c[k - j];
        }
        c[k] = (a[k] - sum) * inv_2c0;
    }
}

/// `(s, co) = sin_cos(a)` — coupled recurrence.
///
/// `s[k] =  (1/k) * Σ_{j=1}^{k} j * a[j] * co[k-j]`
/// `co[k] = -(1/k) * Σ_{j=1}^{k} j * a[j] * s[k-j]`
#[inline]
pub fn jet_sin_cos<U: Analytic>(a: &[U], s: &mut [U], co: &mut [U]) {
    let n = s.len();
    let (s0, c0) = a[0].sin_cos();
    s[0] = s0;
    co[0] = c0;
    for k in 1..n {
        let mut sum_s = a[0].zero_like();
        let mut sum_c = a[0].zero_like();
        for j in 1..=k {
            let jf = NumCast::from(j).unwrap();
            sum_s = sum_s + (a[j] * co[k - j]).scale(jf);
            sum_c = sum_c + (a[j] * s[k - j]).scale(jf);
        }
        s[k] = sum_s.div_unsigned(k as u32);
        co[k] = -sum_c.div_unsigned(k as u32);
    }
}

/// `(sh, ch) = sinh_cosh(a)` — coupled recurrence, positive signs.
#[inline]
pub fn jet_sinh_cosh<U: Analytic>(a: &[U], sh: &mut [U], ch: &mut [U]) {
    let n = sh.len();
    let (sh0, ch0) = a[0].sinh_cosh();
    sh[0] = sh0;
    ch[0] = ch0;
    for k in 1..n {
        let mut sum_sh = a[0].zero_like();
        let mut sum_ch = a[0].zero_like();
        for j in 1..=k {
            let jf = NumCast::from(j).unwrap();
            sum_sh = sum_sh + (a[j] * ch[k - j]).scale(jf);
            sum_ch = sum_ch + (a[j] * sh[k - j]).scale(jf);
        }
        sh[k] = sum_sh.div_unsigned(k as u32);
        ch[k] = sum_ch.div_unsigned(k as u32);
    }
}

/// `c = tan(a)` — via `c' = a' * (1 + c²)`.
///
/// `scratch` carries the auxiliary series `s = 1 + c²`; `s[k]` only needs
/// `c[0..=k]`, so the two recurrences interleave.
#[inline]
pub fn jet_tan<U: Analytic>(a: &[U], c: &mut [U], scratch: &mut [U]) {
    let n = c.len();
    c[0] = a[0].tan();
    scratch[0] = a[0].one_like() + c[0] * c[0];
    for k in 1..n {
        let mut sum = a[0].zero_like();
        for j in 1..=k {
            let jf = NumCast::from(j).unwrap();
            sum = sum + (a[j] * scratch[k - j]).scale(jf);
        }
        c[k] = sum.div_unsigned(k as u32);
        let mut s_k = a[0].zero_like();
        for j in 0..=k {
            s_k = s_k + c[j] * c[k - j];
        }
        scratch[k] = s_k;
    }
}

/// `c = tanh(a)` — via `c' = a' * (1 - c²)`.
#[inline]
pub fn jet_tanh<U: Analytic>(a: &[U], c: &mut [U], scratch: &mut [U]) {
    let n = c.len();
    c[0] = a[0].tanh();
    scratch[0] = a[0].one_like() - c[0] * c[0];
    for k in 1..n {
        let mut sum = a[0].zero_like();
        for j in 1..=k {
            let jf = NumCast::from(j).unwrap();
            sum = sum + (a[j] * scratch[k - j]).scale(jf);
        }
        c[k] = sum.div_unsigned(k as u32);
        let mut s_k = a[0].zero_like();
        for j in 0..=k {
            s_k = s_k + c[j] * c[k - j];
        }
        scratch[k] = -s_k;
    }
}

/// Integration step shared by the arc functions: given `g = 1/w(a)` in
/// `scratch`, fills `c[k] = (1/k) * Σ_{j=1}^{k} j * a[j] * g[k-j]`.
#[inline]
fn integrate_quotient<U: Analytic>(a: &[U], g: &[U], c: &mut [U]) {
    let n = c.len();
    for k in 1..n {
        let mut sum = a[0].zero_like();
        for j in 1..=k {
            let jf = NumCast::from(j).unwrap();
            sum = sum + (a[j] * g[k - j]).scale(jf);
        }
        c[k] = sum.div_unsigned(k as u32);
    }
}

/// `c = atan(a)` — via `c' = a' / (1 + a²)`, then integrate.
#[inline]
pub fn jet_atan<U: Analytic>(a: &[U], c: &mut [U], scratch1: &mut [U], scratch2: &mut [U]) {
    let n = c.len();
    jet_sqr(a, scratch1);
    scratch2[..n].copy_from_slice(&scratch1[..n]);
    scratch2[0] = a[0].one_like() + scratch1[0];
    jet_recip(scratch2, scratch1);
    c[0] = a[0].atan();
    integrate_quotient(a, scratch1, c);
}

/// `c = asin(a)` — via `c' = a' / sqrt(1 - a²)`, then integrate.
#[inline]
pub fn jet_asin<U: Analytic>(a: &[U], c: &mut [U], scratch1: &mut [U], scratch2: &mut [U]) {
    let n = c.len();
    c[0] = a[0].asin();
    jet_sqr(a, scratch1);
    scratch2[0] = a[0].one_like() - scratch1[0];
    for k in 1..n {
        scratch2[k] = -scratch1[k];
    }
    jet_sqrt(scratch2, scratch1);
    jet_recip(scratch1, scratch2);
    integrate_quotient(a, scratch2, c);
}

/// `c = acos(a) = π/2 - asin(a)`.
#[inline]
pub fn jet_acos<U: Analytic>(a: &[U], c: &mut [U], scratch1: &mut [U], scratch2: &mut [U]) {
    jet_asin(a, c, scratch1, scratch2);
    c[0] = a[0].acos();
    for ck in c[1..].iter_mut() {
        *ck = -*ck;
    }
}

// ══════════════════════════════════════════════
//  Powers
// ══════════════════════════════════════════════

/// `c = a^r` with a caller-supplied `c[0]` seed.
///
/// `c[k] = (1/(k * a[0])) * Σ_{j=0}^{k-1} (r*(k-j) - j) * a[k-j] * c[j]`
///
/// Requires `a[0]` invertible. The seed lets integer powers of negative
/// leading coefficients avoid the complex branch of `powf`.
#[inline]
pub fn jet_pow<U: Analytic>(a: &[U], r: U::Real, c0: U, c: &mut [U]) {
    let n = c.len();
    c[0] = c0;
    let inv_a0 = a[0].recip();
    for k in 1..n {
        let kf: U::Real = NumCast::from(k).unwrap();
        let mut sum = a[0].zero_like();
        for j in 0..k {
            let jf: U::Real = NumCast::from(j).unwrap();
            let w = r * (kf - jf) - jf;
            sum = sum + (a[k - j] * c[j]).scale(w);
        }
        c[k] = sum.div_unsigned(k as u32) * inv_a0;
    }
}

/// `c = a^r` (real exponent).
#[inline]
pub fn jet_powf<U: Analytic>(a: &[U], r: U::Real, c: &mut [U]) {
    jet_pow(a, r, a[0].powf(r), c);
}

/// `c = a^n` (integer exponent).
///
/// Falls back to repeated Cauchy products when `a[0]` vanishes, where the
/// power recurrence cannot divide by the leading coefficient.
#[inline]
pub fn jet_powi<U: Analytic>(a: &[U], n: i32, c: &mut [U], s1: &mut [U], s2: &mut [U]) {
    let deg = c.len();
    if n == 0 {
        c[0] = a[0].one_like();
        for ck in c[1..deg].iter_mut() {
            *ck = a[0].zero_like();
        }
        return;
    }
    if n == 1 {
        c.copy_from_slice(a);
        return;
    }
    if n < 0 {
        jet_recip(a, s1);
        let m = -n;
        jet_pow(s1, NumCast::from(m).unwrap(), s1[0].powi(m), c);
        return;
    }
    if !a[0].norm_inf().is_zero() {
        jet_pow(a, NumCast::from(n).unwrap(), a[0].powi(n), c);
        return;
    }
    // a[0] == 0, n >= 2: exact repeated products.
    s1.copy_from_slice(a);
    for _ in 1..n {
        jet_mul(s1, a, s2);
        s1.copy_from_slice(s2);
    }
    c.copy_from_slice(s1);
}
