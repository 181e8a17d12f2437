#![cfg(feature = "complex")]

use approx::assert_abs_diff_eq;
use num_complex::Complex;
use picard::{integrate, IntegParams, Jet, Status};

#[test]
fn rotation_in_the_complex_plane() {
    // ẋ = i·x, x(0) = 1 → x(t) = e^{it}
    let i = Complex::new(0.0_f64, 1.0);
    let f = move |x: &Jet<Complex<f64>>, _p: &(), _t: &Jet<f64>| x * i;
    let params = IntegParams::new(24, 1e-18);
    let sol = integrate(f, Complex::new(1.0, 0.0), 0.0, 1.0, &params, &()).unwrap();
    assert_eq!(sol.status, Status::Completed);
    let xf = *sol.x.last().unwrap();
    assert_abs_diff_eq!(xf.re, 1.0_f64.cos(), epsilon = 1e-12);
    assert_abs_diff_eq!(xf.im, 1.0_f64.sin(), epsilon = 1e-12);
    // the flow is a rotation: |x| = 1 at every recorded step
    for x in &sol.x {
        assert_abs_diff_eq!(x.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn complex_series_exp() {
    // exp of a complex variable: coefficients exp(z₀)/k!
    let z0 = Complex::new(0.3_f64, 0.7);
    let z = Jet::variable(z0, 5);
    let result = z.exp();
    let e = z0.exp();
    let mut factorial = 1.0_f64;
    for k in 0..=5 {
        if k > 0 {
            factorial *= k as f64;
        }
        assert_abs_diff_eq!(result.coeff(k).re, e.re / factorial, epsilon = 1e-12);
        assert_abs_diff_eq!(result.coeff(k).im, e.im / factorial, epsilon = 1e-12);
    }
}
