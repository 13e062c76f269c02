// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use infojoint::{Ensemble, ProbabilityError, ValidationConfig};
use rstest::rstest;

#[test]
fn valid_ensemble_is_accepted() {
    let e = Ensemble::new(vec![0.2, 0.8]).unwrap();
    assert_eq!(e.len(), 2);
    assert_eq!(e[1], 0.8);
    assert_eq!(e.to_vec(), vec![0.2, 0.8]);
}

#[test]
fn sum_over_tolerance_is_rejected() {
    let err = Ensemble::named("A", vec![0.5, 0.6], &ValidationConfig::default()).unwrap_err();
    match err {
        ProbabilityError::EnsembleNotNormalized { ensemble, sum } => {
            assert_eq!(ensemble, "A");
            assert!((sum - 1.1).abs() < 1e-12);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[case(vec![0.5, 0.5005], true)]
#[case(vec![0.5, 0.4995], true)]
#[case(vec![0.5, 0.502], false)]
#[case(vec![0.3, 0.3, 0.3], false)]
fn tolerance_boundary(#[case] values: Vec<f64>, #[case] accepted: bool) {
    assert_eq!(Ensemble::new(values).is_ok(), accepted);
}

#[test]
fn custom_tolerance_widens_acceptance() {
    let config = ValidationConfig::new(0.2);
    assert!(Ensemble::with_config(vec![0.5, 0.6], &config).is_ok());
}

#[test]
fn negative_entry_reports_one_based_index() {
    let err = Ensemble::named("B", vec![0.6, -0.1, 0.5], &ValidationConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ProbabilityError::NegativeProbability {
            ensemble: "B".to_string(),
            index: 2,
            value: -0.1,
        }
    );
    assert_eq!(err.to_string(), "B[2] must not be negative: -0.1");
}

#[test]
fn non_finite_entry_is_rejected() {
    assert!(matches!(
        Ensemble::new(vec![f64::NAN, 1.0]),
        Err(ProbabilityError::InvalidNumber { index: 1, .. })
    ));
    assert!(matches!(
        Ensemble::new(vec![f64::INFINITY]),
        Err(ProbabilityError::InvalidNumber { .. })
    ));
}

#[test]
fn not_normalized_message_shows_sum() {
    let err = Ensemble::named("A", vec![0.5, 0.6], &ValidationConfig::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "probabilities of ensemble A must sum to 1.0 (got 1.1000)"
    );
}

#[test]
fn sum_is_accumulated_in_index_order() {
    let values = vec![
        0.07, 0.03, 0.11, 0.05, 0.09, 0.02, 0.13, 0.06, 0.04, 0.08, 0.1, 0.12, 0.1,
    ];
    let sequential = values.iter().fold(0.0_f64, |acc, &p| acc + p);
    let e = Ensemble::new(values).unwrap();
    assert_eq!(e.sum().to_bits(), sequential.to_bits());
}
