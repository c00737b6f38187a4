#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use thermocast::internals::math::linalg::PivotPolicy;
use thermocast::internals::math::polynomial::{eval, fit};
use thermocast::internals::primitives::errors::ForecastError;

#[test]
fn test_exact_quadratic_recovery() {
    // y = 2x^2 - 3x + 1 sampled at x = 0..9 recovers [1, -3, 2].
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi * xi - 3.0 * xi + 1.0).collect();

    let coeffs = fit(&x, &y, 2, PivotPolicy::clamp()).unwrap();

    assert_eq!(coeffs.len(), 3);
    assert!((coeffs[0] - 1.0).abs() < 1e-6);
    assert!((coeffs[1] + 3.0).abs() < 1e-6);
    assert!((coeffs[2] - 2.0).abs() < 1e-6);
}

#[test]
fn test_exact_linear_recovery() {
    // y = 4x - 7
    let x: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| 4.0 * xi - 7.0).collect();

    let coeffs = fit(&x, &y, 1, PivotPolicy::clamp()).unwrap();

    assert_relative_eq!(coeffs[0], -7.0, epsilon = 1e-9);
    assert_relative_eq!(coeffs[1], 4.0, epsilon = 1e-9);
}

#[test]
fn test_degree_zero_fits_mean() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![10.0, 12.0, 14.0, 16.0];

    let coeffs = fit(&x, &y, 0, PivotPolicy::clamp()).unwrap();

    assert_eq!(coeffs.len(), 1);
    assert_relative_eq!(coeffs[0], 13.0, epsilon = 1e-9);
}

#[test]
fn test_noisy_quadratic_least_squares() {
    // Symmetric noise around y = x^2 keeps the least-squares fit near the
    // true curve.
    let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| xi * xi + if i % 2 == 0 { 0.1 } else { -0.1 })
        .collect();

    let coeffs = fit(&x, &y, 2, PivotPolicy::clamp()).unwrap();

    assert!((coeffs[2] - 1.0).abs() < 0.05);
}

#[test]
fn test_insufficient_samples_fails_explicitly() {
    // Degree 2 needs at least 3 points; the fitter must reject this rather
    // than let the solver clamp its way to degenerate coefficients.
    let x = vec![0.0, 1.0];
    let y = vec![1.0, 2.0];

    let result = fit(&x, &y, 2, PivotPolicy::clamp());

    assert_eq!(
        result.unwrap_err(),
        ForecastError::InsufficientSamples { got: 2, need: 3 }
    );
}

#[test]
fn test_mismatched_inputs() {
    let result = fit(&[0.0, 1.0, 2.0], &[1.0, 2.0], 1, PivotPolicy::<f64>::clamp());

    assert_eq!(
        result.unwrap_err(),
        ForecastError::MismatchedInputs { x_len: 3, y_len: 2 }
    );
}

#[test]
fn test_eval_constant_and_empty() {
    assert_relative_eq!(eval(&[5.0], 123.0), 5.0);
    assert_relative_eq!(eval::<f64>(&[], 3.0), 0.0);
}

#[test]
fn test_eval_matches_power_series() {
    // f(x) = 1 - 3x + 2x^2 at a few positions.
    let coeffs = vec![1.0, -3.0, 2.0];

    assert_relative_eq!(eval(&coeffs, 0.0), 1.0);
    assert_relative_eq!(eval(&coeffs, 1.0), 0.0);
    assert_relative_eq!(eval(&coeffs, 3.0), 10.0);
    assert_relative_eq!(eval(&coeffs, -2.0), 15.0);
}

#[test]
fn test_eval_extrapolates_beyond_fit_window() {
    let x: Vec<f64> = (0..5).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| 0.5 * xi * xi + 1.0).collect();

    let coeffs = fit(&x, &y, 2, PivotPolicy::clamp()).unwrap();

    assert_relative_eq!(eval(&coeffs, 10.0), 51.0, epsilon = 1e-6);
}
