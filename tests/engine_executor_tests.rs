#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use thermocast::internals::engine::executor::{run, ForecastConfig};
use thermocast::internals::engine::output::hour_label;
use thermocast::internals::math::linalg::PivotPolicy;
use thermocast::internals::primitives::errors::ForecastError;
use thermocast::internals::primitives::sample::SamplePoint;

/// Hourly series starting at the unix epoch (00:00 UTC).
fn hourly_series(temps: &[f64]) -> Vec<SamplePoint<f64>> {
    temps
        .iter()
        .enumerate()
        .map(|(i, &t)| SamplePoint::new((i as i64) * 3600, t))
        .collect()
}

fn config(window_size: usize, horizon: usize, degree: usize) -> ForecastConfig<f64> {
    ForecastConfig {
        window_size,
        horizon,
        degree,
        pivot_policy: PivotPolicy::clamp(),
    }
}

#[test]
fn test_forecast_length_invariants() {
    let series = hourly_series(&[20.0, 21.0, 23.0, 26.0, 30.0, 35.0, 40.0, 44.0]);

    let result = run(&series, &config(6, 4, 2)).unwrap();

    assert_eq!(result.observed.len(), 6);
    assert_eq!(result.predicted.len(), 4);
    assert_eq!(result.labels.len(), 10);
    assert_eq!(result.coefficients.len(), 3);
}

#[test]
fn test_window_clamps_to_series_length() {
    let series = hourly_series(&[20.0, 21.0, 23.0, 26.0]);

    let result = run(&series, &config(12, 3, 2)).unwrap();

    assert_eq!(result.observed.len(), 4);
    assert_eq!(result.labels.len(), 7);
}

#[test]
fn test_window_takes_most_recent_points() {
    let series = hourly_series(&[1.0, 2.0, 3.0, 10.0, 11.0, 12.0]);

    let result = run(&series, &config(3, 1, 1)).unwrap();

    assert_eq!(result.observed, vec![10.0, 11.0, 12.0]);
}

#[test]
fn test_exact_quadratic_series_recovers_coefficients() {
    // y(i) = 20 + 0.5i + 0.5i^2 over positions 0..5.
    let series = hourly_series(&[20.0, 21.0, 23.0, 26.0, 30.0, 35.0]);

    let result = run(&series, &config(6, 3, 2)).unwrap();

    assert!((result.coefficients[0] - 20.0).abs() < 1e-6);
    assert!((result.coefficients[1] - 0.5).abs() < 1e-6);
    assert!((result.coefficients[2] - 0.5).abs() < 1e-6);

    // f(6) = 41, f(7) = 48, f(8) = 56.
    assert_relative_eq!(result.predicted[0], 41.0, epsilon = 1e-6);
    assert_relative_eq!(result.predicted[1], 48.0, epsilon = 1e-6);
    assert_relative_eq!(result.predicted[2], 56.0, epsilon = 1e-6);
}

#[test]
fn test_predictions_rounded_to_one_decimal() {
    // A fit whose extrapolated values are not already tenths.
    let series = hourly_series(&[20.0, 21.3, 22.9, 24.1, 26.2, 27.8]);

    let result = run(&series, &config(6, 4, 2)).unwrap();

    for p in &result.predicted {
        assert!(p.is_finite());
        assert!(((p * 10.0).round() - p * 10.0).abs() < 1e-9);
    }
}

#[test]
fn test_coefficients_keep_full_precision() {
    let series = hourly_series(&[20.0, 21.3, 22.9, 24.1, 26.2, 27.8]);

    let result = run(&series, &config(6, 1, 2)).unwrap();

    // At least one coefficient should not sit on a tenth boundary.
    let any_unrounded = result
        .coefficients
        .iter()
        .any(|c| ((c * 10.0).round() - c * 10.0).abs() > 1e-9);
    assert!(any_unrounded);
}

#[test]
fn test_labels_follow_window_and_horizon_timestamps() {
    // Epoch-anchored hours: 12am, 1am, .. observed; predictions continue
    // from the last window timestamp.
    let series = hourly_series(&[20.0, 21.0, 23.0, 26.0]);

    let result = run(&series, &config(4, 2, 1)).unwrap();

    assert_eq!(result.labels[0], "12am");
    assert_eq!(result.labels[1], "1am");
    assert_eq!(result.labels[2], "2am");
    assert_eq!(result.labels[3], "3am");
    assert_eq!(result.labels[4], "4am");
    assert_eq!(result.labels[5], "5am");
}

#[test]
fn test_hour_label_wraparound() {
    assert_eq!(hour_label(0), "12am");
    assert_eq!(hour_label(12 * 3600), "12pm");
    assert_eq!(hour_label(15 * 3600), "3pm");
    assert_eq!(hour_label(23 * 3600), "11pm");
    assert_eq!(hour_label(24 * 3600), "12am");
}

#[test]
fn test_short_series_fails_even_after_window_clamp() {
    let series = hourly_series(&[20.0, 21.0]);

    let result = run(&series, &config(12, 3, 2));

    assert_eq!(
        result.unwrap_err(),
        ForecastError::InsufficientSamples { got: 2, need: 3 }
    );
}

#[test]
fn test_empty_series_fails() {
    let result = run::<f64>(&[], &config(12, 3, 2));

    assert_eq!(result.unwrap_err(), ForecastError::EmptySeries);
}

#[test]
fn test_non_chronological_series_rejected() {
    let mut series = hourly_series(&[20.0, 21.0, 23.0, 26.0]);
    series.swap(1, 2);

    let result = run(&series, &config(4, 2, 1));

    assert!(matches!(
        result.unwrap_err(),
        ForecastError::NonChronological { .. }
    ));
}

#[test]
fn test_nan_temperature_rejected() {
    let mut series = hourly_series(&[20.0, 21.0, 23.0, 26.0]);
    series[2].temperature = f64::NAN;

    let result = run(&series, &config(4, 2, 1));

    assert!(matches!(
        result.unwrap_err(),
        ForecastError::InvalidNumericValue(_)
    ));
}

#[test]
fn test_default_config_values() {
    let config = ForecastConfig::<f64>::default();

    assert_eq!(config.window_size, 12);
    assert_eq!(config.horizon, 6);
    assert_eq!(config.degree, 2);
    assert_eq!(config.pivot_policy, PivotPolicy::clamp());
}
