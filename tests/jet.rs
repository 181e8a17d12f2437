use approx::assert_relative_eq;
use picard::picard::{jet_coeffs, jet_coeffs_vec};
use picard::stepsize::{second_stepsize, stepsize};
use picard::Jet;

// ══════════════════════════════════════════════
//  1. Picard recursion, scalar
// ══════════════════════════════════════════════

#[test]
fn logistic_blowup_coefficients() {
    // ẋ = x², x(0) = x₀ → x(t) = x₀/(1 − x₀t); coefficient k is x₀^{k+1}
    let order = 6;
    let x0 = 3.0_f64;
    let t = Jet::variable(0.0, order);
    let mut x = Jet::constant(x0, order);
    let mut xaux = x.zero_like();
    let mut taux = t.zero_like();
    let f = |x: &Jet<f64>, _p: &(), _t: &Jet<f64>| x * x;
    jet_coeffs(&f, &t, &mut x, &mut xaux, &mut taux, &());
    for k in 0..=order {
        assert_relative_eq!(x.coeff(k), x0.powi(k as i32 + 1), max_relative = 1e-14);
    }
}

#[test]
fn time_dependent_field() {
    // ẋ = t around t₀ = 2: x(t₀+τ) = x₀ + 2τ + τ²/2
    let order = 5;
    let t = Jet::variable(2.0_f64, order);
    let mut x = Jet::constant(0.5, order);
    let mut xaux = x.zero_like();
    let mut taux = t.zero_like();
    let f = |_x: &Jet<f64>, _p: &(), t: &Jet<f64>| t.clone();
    jet_coeffs(&f, &t, &mut x, &mut xaux, &mut taux, &());
    assert_relative_eq!(x.coeff(0), 0.5, epsilon = 1e-14);
    assert_relative_eq!(x.coeff(1), 2.0, epsilon = 1e-14);
    assert_relative_eq!(x.coeff(2), 0.5, epsilon = 1e-14);
    for k in 3..=order {
        assert_relative_eq!(x.coeff(k), 0.0, epsilon = 1e-14);
    }
}

#[test]
fn order_zero_is_a_noop() {
    let t = Jet::variable(0.0_f64, 0);
    let mut x = Jet::constant(7.0, 0);
    let mut xaux = x.zero_like();
    let mut taux = t.zero_like();
    let f = |x: &Jet<f64>, _p: &(), _t: &Jet<f64>| x * x;
    jet_coeffs(&f, &t, &mut x, &mut xaux, &mut taux, &());
    assert_eq!(x.order(), 0);
    assert_relative_eq!(x.coeff(0), 7.0, epsilon = 1e-14);
}

#[test]
fn exponential_growth_coefficients() {
    // ẋ = x, x(0) = 1 → coefficients 1/k!
    let order = 8;
    let t = Jet::variable(0.0_f64, order);
    let mut x = Jet::constant(1.0, order);
    let mut xaux = x.zero_like();
    let mut taux = t.zero_like();
    let f = |x: &Jet<f64>, _p: &(), _t: &Jet<f64>| x.clone();
    jet_coeffs(&f, &t, &mut x, &mut xaux, &mut taux, &());
    let mut factorial = 1.0_f64;
    for k in 0..=order {
        if k > 0 {
            factorial *= k as f64;
        }
        assert_relative_eq!(x.coeff(k), 1.0 / factorial, max_relative = 1e-13);
    }
}

// ══════════════════════════════════════════════
//  2. Picard recursion, vector
// ══════════════════════════════════════════════

#[test]
fn harmonic_oscillator_coefficients() {
    // ẋ = y, ẏ = -x, (x, y)(0) = (1, 0) → x = cos t, y = -sin t
    let order = 4;
    let t = Jet::variable(0.0_f64, order);
    let mut taux = t.zero_like();
    let mut x = vec![Jet::constant(1.0, order), Jet::constant(0.0, order)];
    let mut dx = vec![x[0].zero_like(), x[1].zero_like()];
    let mut xaux = vec![x[0].zero_like(), x[1].zero_like()];
    let mut f = |dx: &mut [Jet<f64>], x: &[Jet<f64>], _p: &(), _t: &Jet<f64>| {
        dx[0] = x[1].clone();
        dx[1] = -&x[0];
    };
    jet_coeffs_vec(&mut f, &t, &mut x, &mut dx, &mut xaux, &mut taux, &());
    // cos: [1, 0, -1/2, 0, 1/24]
    let cos_coeffs = [1.0, 0.0, -0.5, 0.0, 1.0 / 24.0];
    // -sin: [0, -1, 0, 1/6, 0]
    let msin_coeffs = [0.0, -1.0, 0.0, 1.0 / 6.0, 0.0];
    for k in 0..=order {
        assert_relative_eq!(x[0].coeff(k), cos_coeffs[k], epsilon = 1e-14);
        assert_relative_eq!(x[1].coeff(k), msin_coeffs[k], epsilon = 1e-14);
    }
}

#[test]
fn vector_field_sees_truncated_time() {
    // ẋ = t, ẏ = 1: checks the taux truncation feeds the field correctly
    let order = 4;
    let t0 = 1.0_f64;
    let t = Jet::variable(t0, order);
    let mut taux = t.zero_like();
    let mut x = vec![Jet::constant(0.0, order), Jet::constant(0.0, order)];
    let mut dx = vec![x[0].zero_like(), x[1].zero_like()];
    let mut xaux = vec![x[0].zero_like(), x[1].zero_like()];
    let mut f = |dx: &mut [Jet<f64>], x: &[Jet<f64>], _p: &(), t: &Jet<f64>| {
        dx[0] = t.clone();
        dx[1] = Jet::constant(1.0, x[0].order());
    };
    jet_coeffs_vec(&mut f, &t, &mut x, &mut dx, &mut xaux, &mut taux, &());
    // x(t₀+τ) = t₀τ + τ²/2; y(t₀+τ) = τ
    assert_relative_eq!(x[0].coeff(1), t0, epsilon = 1e-14);
    assert_relative_eq!(x[0].coeff(2), 0.5, epsilon = 1e-14);
    assert_relative_eq!(x[0].coeff(3), 0.0, epsilon = 1e-14);
    assert_relative_eq!(x[1].coeff(1), 1.0, epsilon = 1e-14);
    assert_relative_eq!(x[1].coeff(2), 0.0, epsilon = 1e-14);
}

// ══════════════════════════════════════════════
//  3. Step-size rules
// ══════════════════════════════════════════════

#[test]
fn primary_rule_uses_trailing_coefficients() {
    // order 5, only the trailing coefficients nonzero
    let mut coeffs = vec![0.0_f64; 6];
    coeffs[4] = 1e-4;
    coeffs[5] = 1e-4;
    let x = Jet::from_coeffs(coeffs);
    let h = stepsize(&x, 1e-16);
    // min((1e-12)^{1/4}, (1e-12)^{1/5}) = 1e-3
    assert_relative_eq!(h, 1e-3, max_relative = 1e-10);
}

#[test]
fn primary_rule_skips_vanished_coefficients() {
    let mut coeffs = vec![0.0_f64; 6];
    coeffs[4] = 1e-4;
    let x = Jet::from_coeffs(coeffs);
    let h = stepsize(&x, 1e-16);
    assert_relative_eq!(h, 1e-3, max_relative = 1e-10);
}

#[test]
fn primary_rule_degenerates_to_infinity() {
    let x = Jet::from_coeffs(vec![1.0_f64, 0.5, 0.0, 0.0, 0.0, 0.0]);
    assert!(stepsize(&x, 1e-16).is_infinite());
}

#[test]
fn second_rule_reads_interior_coefficients() {
    // interior coefficient 0.5 at k = 1 → (1/0.5)^{1/1} = 2
    let x = Jet::from_coeffs(vec![1.0_f64, 0.5, 0.0, 0.0, 0.0, 0.0]);
    assert_relative_eq!(second_stepsize(&x), 2.0, max_relative = 1e-12);
}

#[test]
fn second_rule_constant_jet_is_unbounded() {
    // exact constant polynomial: zero truncation error, horizon clamp
    // supplies the step
    let x = Jet::from_coeffs(vec![1.0_f64, 0.0, 0.0, 0.0, 0.0]);
    assert!(second_stepsize(&x).is_infinite());
}

#[test]
fn second_rule_zero_jet_is_stationary() {
    let x = Jet::from_coeffs(vec![0.0_f64; 5]);
    assert_relative_eq!(second_stepsize(&x), 0.0, epsilon = 0.0);
}
