use approx::assert_relative_eq;
use picard::Jet;

// ══════════════════════════════════════════════
//  1. Known Taylor series
// ══════════════════════════════════════════════

#[test]
fn exp_series() {
    // exp(x) around x=0: [1, 1, 1/2, 1/6, 1/24]
    let x = Jet::variable(0.0_f64, 4);
    let result = x.exp();
    assert_relative_eq!(result.coeff(0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(2), 0.5, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(3), 1.0 / 6.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(4), 1.0 / 24.0, epsilon = 1e-12);
}

#[test]
fn sin_series() {
    // sin(x) around x=0: [0, 1, 0, -1/6, 0]
    let x = Jet::variable(0.0_f64, 4);
    let result = x.sin();
    assert_relative_eq!(result.coeff(0), 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(2), 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(3), -1.0 / 6.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(4), 0.0, epsilon = 1e-12);
}

#[test]
fn cos_series() {
    // cos(x) around x=0: [1, 0, -1/2, 0, 1/24]
    let x = Jet::variable(0.0_f64, 4);
    let result = x.cos();
    assert_relative_eq!(result.coeff(0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(1), 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(2), -0.5, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(3), 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(4), 1.0 / 24.0, epsilon = 1e-12);
}

#[test]
fn ln_1_plus_x_series() {
    // ln(1+x) around x=0: [0, 1, -1/2, 1/3, -1/4]
    let x = Jet::variable(0.0_f64, 4);
    let result = (x + 1.0).ln();
    assert_relative_eq!(result.coeff(0), 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(2), -0.5, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(3), 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(4), -0.25, epsilon = 1e-12);
}

#[test]
fn geometric_series() {
    // 1/(1-x) around x=0: [1, 1, 1, 1, 1]
    let x = Jet::variable(0.0_f64, 4);
    let result = 1.0 / (1.0 - &x);
    for k in 0..=4 {
        assert_relative_eq!(result.coeff(k), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn sqrt_of_1_plus_x() {
    // sqrt(1+x): [1, 1/2, -1/8, 1/16, -5/128]
    let x = Jet::variable(0.0_f64, 4);
    let result = (x + 1.0).sqrt();
    assert_relative_eq!(result.coeff(0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(1), 0.5, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(2), -1.0 / 8.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(3), 1.0 / 16.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(4), -5.0 / 128.0, epsilon = 1e-12);
}

#[test]
fn tan_series() {
    // tan(x) around x=0: [0, 1, 0, 1/3, 0]
    let x = Jet::variable(0.0_f64, 4);
    let result = x.tan();
    assert_relative_eq!(result.coeff(0), 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(2), 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(3), 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(4), 0.0, epsilon = 1e-12);
}

#[test]
fn tanh_series() {
    // tanh(x) around x=0: [0, 1, 0, -1/3, 0]
    let x = Jet::variable(0.0_f64, 4);
    let result = x.tanh();
    assert_relative_eq!(result.coeff(1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(3), -1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn atan_series() {
    // atan(x) around x=0: [0, 1, 0, -1/3, 0]
    let x = Jet::variable(0.0_f64, 4);
    let result = x.atan();
    assert_relative_eq!(result.coeff(1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(3), -1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn asin_series() {
    // asin(x) around x=0: [0, 1, 0, 1/6, 0]
    let x = Jet::variable(0.0_f64, 4);
    let result = x.asin();
    assert_relative_eq!(result.coeff(1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(3), 1.0 / 6.0, epsilon = 1e-12);
}

#[test]
fn sinh_cosh_series() {
    // sinh: [0, 1, 0, 1/6, 0]; cosh: [1, 0, 1/2, 0, 1/24]
    let x = Jet::variable(0.0_f64, 4);
    let (sh, ch) = x.sinh_cosh();
    assert_relative_eq!(sh.coeff(1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(sh.coeff(3), 1.0 / 6.0, epsilon = 1e-12);
    assert_relative_eq!(ch.coeff(0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(ch.coeff(2), 0.5, epsilon = 1e-12);
    assert_relative_eq!(ch.coeff(4), 1.0 / 24.0, epsilon = 1e-12);
}

// ══════════════════════════════════════════════
//  2. Arithmetic
// ══════════════════════════════════════════════

#[test]
fn cauchy_product_known_polynomials() {
    // (1 + x)(1 + x) = 1 + 2x + x²
    let a = Jet::from_coeffs(vec![1.0_f64, 1.0, 0.0]);
    let b = Jet::from_coeffs(vec![1.0_f64, 1.0, 0.0]);
    let c = &a * &b;
    assert_relative_eq!(c.coeff(0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(c.coeff(1), 2.0, epsilon = 1e-12);
    assert_relative_eq!(c.coeff(2), 1.0, epsilon = 1e-12);
}

#[test]
fn sqr_matches_mul() {
    let a = Jet::from_coeffs(vec![2.0_f64, -1.0, 0.5, 3.0]);
    let via_mul = &a * &a;
    let via_sqr = a.sqr();
    for k in 0..=3 {
        assert_relative_eq!(via_mul.coeff(k), via_sqr.coeff(k), epsilon = 1e-12);
    }
}

#[test]
fn recursive_division() {
    // (1 + 2x + x²) / (1 + x) = 1 + x
    let a = Jet::from_coeffs(vec![1.0_f64, 2.0, 1.0]);
    let b = Jet::from_coeffs(vec![1.0_f64, 1.0, 0.0]);
    let c = &a / &b;
    assert_relative_eq!(c.coeff(0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(c.coeff(1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(c.coeff(2), 0.0, epsilon = 1e-12);
}

#[test]
fn recip_matches_division() {
    let a = Jet::from_coeffs(vec![2.0_f64, 0.3, -0.7, 1.1]);
    let r = a.recip();
    let one_over = 1.0 / &a;
    for k in 0..=3 {
        assert_relative_eq!(r.coeff(k), one_over.coeff(k), epsilon = 1e-12);
    }
}

#[test]
fn assign_ops() {
    let mut a = Jet::from_coeffs(vec![1.0_f64, 2.0, 3.0]);
    let b = Jet::from_coeffs(vec![0.5_f64, -1.0, 2.0]);
    a += &b;
    assert_relative_eq!(a.coeff(0), 1.5, epsilon = 1e-12);
    assert_relative_eq!(a.coeff(1), 1.0, epsilon = 1e-12);
    a -= &b;
    assert_relative_eq!(a.coeff(1), 2.0, epsilon = 1e-12);
    a *= Jet::constant(2.0, 2);
    assert_relative_eq!(a.coeff(2), 6.0, epsilon = 1e-12);
}

// ══════════════════════════════════════════════
//  3. Powers
// ══════════════════════════════════════════════

#[test]
fn powi_binomial() {
    // (1+x)³ = 1 + 3x + 3x² + x³
    let x = Jet::variable(0.0_f64, 4);
    let result = (x + 1.0).powi(3);
    assert_relative_eq!(result.coeff(0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(1), 3.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(2), 3.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(3), 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.coeff(4), 0.0, epsilon = 1e-12);
}

#[test]
fn powi_zero_leading_coefficient() {
    // x³ of the variable itself: exact monomial
    let x = Jet::variable(0.0_f64, 4);
    let result = x.powi(3);
    for k in 0..=4 {
        let expected = if k == 3 { 1.0 } else { 0.0 };
        assert_relative_eq!(result.coeff(k), expected, epsilon = 1e-12);
    }
}

#[test]
fn powi_negative_exponent() {
    // (1+x)⁻¹ = geometric series with alternating signs
    let x = Jet::variable(0.0_f64, 4);
    let result = (x + 1.0).powi(-1);
    for k in 0..=4 {
        let expected = if k % 2 == 0 { 1.0 } else { -1.0 };
        assert_relative_eq!(result.coeff(k), expected, epsilon = 1e-12);
    }
}

#[test]
fn powf_half_matches_sqrt() {
    let a = Jet::from_coeffs(vec![4.0_f64, 1.0, -0.5, 0.25]);
    let via_powf = a.powf(0.5);
    let via_sqrt = a.sqrt();
    for k in 0..=3 {
        assert_relative_eq!(via_powf.coeff(k), via_sqrt.coeff(k), epsilon = 1e-12);
    }
}

// ══════════════════════════════════════════════
//  4. Evaluation, derivative, truncation
// ══════════════════════════════════════════════

#[test]
fn horner_evaluation() {
    // 1 + 2τ + 3τ² at τ = 0.5 → 2.75
    let p = Jet::from_coeffs(vec![1.0_f64, 2.0, 3.0]);
    assert_relative_eq!(p.evaluate(0.5), 2.75, epsilon = 1e-12);
    assert_relative_eq!(p.evaluate(0.0), 1.0, epsilon = 1e-12);
}

#[test]
fn deriv_and_integ_are_inverse() {
    let p = Jet::from_coeffs(vec![1.0_f64, 2.0, 3.0]);
    let d = p.deriv();
    assert_relative_eq!(d.coeff(0), 2.0, epsilon = 1e-12);
    assert_relative_eq!(d.coeff(1), 6.0, epsilon = 1e-12);
    assert_relative_eq!(d.coeff(2), 0.0, epsilon = 1e-12);
    let back = d.integ(1.0);
    for k in 0..=2 {
        assert_relative_eq!(back.coeff(k), p.coeff(k), epsilon = 1e-12);
    }
}

#[test]
fn derivative_extraction() {
    // exp(x) at 0: every derivative is 1
    let x = Jet::variable(0.0_f64, 4);
    let result = x.exp();
    for k in 0..=4 {
        assert_relative_eq!(result.derivative(k), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn truncate_from_zeroes_the_tail() {
    let src = Jet::from_coeffs(vec![1.0_f64, 2.0, 3.0, 4.0]);
    let mut dst = src.zero_like();
    dst.truncate_from(&src, 1);
    assert_relative_eq!(dst.coeff(0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(dst.coeff(1), 2.0, epsilon = 1e-12);
    assert_relative_eq!(dst.coeff(2), 0.0, epsilon = 1e-12);
    assert_relative_eq!(dst.coeff(3), 0.0, epsilon = 1e-12);
}

#[test]
fn variable_shape() {
    let t = Jet::variable(2.5_f64, 3);
    assert_relative_eq!(t.coeff(0), 2.5, epsilon = 1e-12);
    assert_relative_eq!(t.coeff(1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(t.coeff(2), 0.0, epsilon = 1e-12);
    assert_eq!(t.order(), 3);
}

#[test]
fn order_one_is_first_derivative() {
    // order 1: value + first derivative, like a dual number
    let x0 = 1.5_f64;
    let x = Jet::variable(x0, 1);
    let result = x.exp();
    assert_relative_eq!(result.coeff(0), x0.exp(), epsilon = 1e-12);
    assert_relative_eq!(result.coeff(1), x0.exp(), epsilon = 1e-12);
}

#[test]
fn constant_propagation() {
    let c: Jet<f64> = Jet::constant(5.0, 3);
    let result = c.exp();
    assert_relative_eq!(result.coeff(0), 5.0_f64.exp(), epsilon = 1e-12);
    for k in 1..=3 {
        assert_relative_eq!(result.coeff(k), 0.0, epsilon = 1e-12);
    }
}
