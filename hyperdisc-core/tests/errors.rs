//! Tests for the stable error codes exposed by the core API.

use hyperdisc_core::{NetworkError, NetworkErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    NetworkError::InvalidNodeCount { got: 1 },
    NetworkErrorCode::InvalidNodeCount
)]
#[case(
    NetworkError::InvalidExponent { got: 1.0 },
    NetworkErrorCode::InvalidExponent
)]
#[case(
    NetworkError::InvalidMeanDegree { got: 0.0 },
    NetworkErrorCode::InvalidMeanDegree
)]
#[case(
    NetworkError::InvalidCurvature { got: -1.0 },
    NetworkErrorCode::InvalidCurvature
)]
#[case(
    NetworkError::InvalidTemperature { got: -0.5 },
    NetworkErrorCode::InvalidTemperature
)]
#[case(
    NetworkError::DegenerateRadius { radius: f64::INFINITY },
    NetworkErrorCode::DegenerateRadius
)]
#[case(
    NetworkError::NonFiniteDistance { i: 0, j: 1 },
    NetworkErrorCode::NonFiniteDistance
)]
fn returns_expected_error_code(#[case] error: NetworkError, #[case] expected: NetworkErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[test]
fn codes_are_machine_readable() {
    assert_eq!(
        NetworkErrorCode::InvalidExponent.as_str(),
        "NETWORK_INVALID_EXPONENT"
    );
    assert_eq!(
        NetworkErrorCode::NonFiniteDistance.to_string(),
        "NETWORK_NON_FINITE_DISTANCE"
    );
}

#[test]
fn messages_carry_the_offending_values() {
    let err = NetworkError::InvalidNodeCount { got: 1 };
    assert_eq!(err.to_string(), "node count must be at least 2 (got 1)");
}
