#![cfg(feature = "serde")]

use picard::{integrate, IntegParams, Jet};

#[test]
fn jet_json_roundtrip() {
    let jet = Jet::from_coeffs(vec![1.0_f64, 2.0, 3.0]);
    let json = serde_json::to_string(&jet).unwrap();
    let back: Jet<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(jet, back);
}

#[test]
fn solution_serializes_with_status() {
    let params = IntegParams::new(12, 1e-10);
    let sol = integrate(
        |x: &Jet<f64>, _p: &(), _t: &Jet<f64>| x.clone(),
        1.0,
        0.0,
        0.5,
        &params,
        &(),
    )
    .unwrap();
    let json = serde_json::to_string(&sol).unwrap();
    assert!(json.contains("\"status\""));
    assert!(json.contains("Completed"));
}
