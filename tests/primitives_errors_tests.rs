#![cfg(feature = "dev")]

use thermocast::internals::primitives::errors::ForecastError;

#[test]
fn test_forecast_error_display() {
    // EmptySeries
    let err = ForecastError::EmptySeries;
    assert_eq!(format!("{}", err), "No temperature samples available");

    // InsufficientSamples
    let err = ForecastError::InsufficientSamples { got: 2, need: 3 };
    assert_eq!(
        format!("{}", err),
        "Insufficient samples: got 2, need at least 3"
    );

    // DimensionMismatch
    let err = ForecastError::DimensionMismatch { n: 3, a_len: 8 };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch: matrix has 8 elements, expected 3x3 for rhs of length 3"
    );

    // SingularMatrix
    let err = ForecastError::SingularMatrix { column: 1 };
    assert_eq!(
        format!("{}", err),
        "Singular matrix: pivot below epsilon in column 1"
    );

    // MismatchedInputs
    let err = ForecastError::MismatchedInputs { x_len: 10, y_len: 5 };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: x has 10 points, y has 5"
    );

    // InvalidNumericValue
    let err = ForecastError::InvalidNumericValue("temperature[2]=NaN".to_string());
    assert_eq!(
        format!("{}", err),
        "Invalid numeric value: temperature[2]=NaN"
    );

    // NonChronological
    let err = ForecastError::NonChronological { index: 4 };
    assert_eq!(format!("{}", err), "Series timestamps decrease at index 4");

    // InvalidWindowSize
    let err = ForecastError::InvalidWindowSize(0);
    assert_eq!(
        format!("{}", err),
        "Invalid window_size: 0 (must be at least 1)"
    );

    // InvalidHorizon
    let err = ForecastError::InvalidHorizon(0);
    assert_eq!(format!("{}", err), "Invalid horizon: 0 (must be at least 1)");

    // InvalidDegree
    let err = ForecastError::InvalidDegree { got: 9, max: 8 };
    assert_eq!(format!("{}", err), "Invalid degree: 9 (must be at most 8)");

    // InvalidEpsilon
    let err = ForecastError::InvalidEpsilon(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid epsilon: -1 (must be finite and > 0)"
    );

    // InvalidHours
    let err = ForecastError::InvalidHours(0);
    assert_eq!(format!("{}", err), "Invalid hours: 0 (must be at least 1)");

    // MissingAnchor
    let err = ForecastError::MissingAnchor;
    assert_eq!(
        format!("{}", err),
        "Anchor timestamp required to synthesize an hourly series"
    );

    // DuplicateParameter
    let err = ForecastError::DuplicateParameter("horizon");
    assert_eq!(
        format!("{}", err),
        "Parameter 'horizon' was set more than once"
    );
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&ForecastError::EmptySeries);
}

#[test]
fn test_errors_are_comparable_and_cloneable() {
    let err = ForecastError::InsufficientSamples { got: 1, need: 3 };
    assert_eq!(err.clone(), err);
    assert_ne!(err, ForecastError::EmptySeries);
}
