// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infojoint::{Ensemble, ProbabilityInput, ProbabilityMatrix, calculate};
use rstest::rstest;

use crate::test_helpers::{
    assert_matrix_close, random_column_stochastic, random_ensemble, random_joint,
    random_row_stochastic,
};

#[rstest]
#[case(1, 1, 1)]
#[case(2, 4, 2)]
#[case(3, 3, 3)]
#[case(5, 2, 4)]
#[case(10, 10, 5)]
fn marginals_and_joint_sum_to_one(#[case] rows: usize, #[case] cols: usize, #[case] seed: u64) {
    let result = calculate(&ProbabilityInput::Joint(random_joint(rows, cols, seed))).unwrap();
    assert_abs_diff_eq!(result.ensemble_a().sum(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.ensemble_b().sum(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.joint().total(), 1.0, epsilon = 1e-12);
}

#[rstest]
#[case(2, 3, 11)]
#[case(4, 4, 12)]
#[case(6, 2, 13)]
fn entropy_bounds_hold(#[case] rows: usize, #[case] cols: usize, #[case] seed: u64) {
    let result = calculate(&ProbabilityInput::Joint(random_joint(rows, cols, seed))).unwrap();
    let eps = 1e-12;
    assert!(result.entropy_a() >= 0.0);
    assert!(result.entropy_b() >= 0.0);
    assert!(result.joint_entropy() >= 0.0);
    assert!(result.joint_entropy() + eps >= result.entropy_a().max(result.entropy_b()));
    assert!(result.mutual_information() >= -eps);
    assert!(result.entropy_a() <= (rows as f64).log2() + eps);
    assert!(result.entropy_b() <= (cols as f64).log2() + eps);
    // Chain rule H(A,B) = H(A) + H(B|A) = H(B) + H(A|B).
    assert_abs_diff_eq!(
        result.joint_entropy(),
        result.entropy_a() + result.conditional_entropy_b_given_a(),
        epsilon = 1e-10
    );
    assert_abs_diff_eq!(
        result.joint_entropy(),
        result.entropy_b() + result.conditional_entropy_a_given_b(),
        epsilon = 1e-10
    );
}

#[rstest]
#[case(2, 2, 21)]
#[case(3, 5, 22)]
#[case(7, 4, 23)]
fn independent_variables_have_zero_mutual_information(
    #[case] rows: usize,
    #[case] cols: usize,
    #[case] seed: u64,
) {
    let a = random_ensemble(rows, seed);
    let b = random_ensemble(cols, seed + 100);
    let nested = (0..rows)
        .map(|i| (0..cols).map(|j| a[i] * b[j]).collect())
        .collect();
    let joint = ProbabilityMatrix::from_rows(nested).unwrap();
    let result = calculate(&ProbabilityInput::Joint(joint)).unwrap();
    assert_abs_diff_eq!(result.mutual_information(), 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(result.conditional_entropy_a_given_b(), result.entropy_a(), epsilon = 1e-10);
}

#[rstest]
#[case(2, 4, 31)]
#[case(3, 3, 32)]
#[case(5, 6, 33)]
fn conditional_given_b_round_trips(#[case] rows: usize, #[case] cols: usize, #[case] seed: u64) {
    let conditional = random_column_stochastic(rows, cols, seed);
    let ensemble_b = random_ensemble(cols, seed + 1);
    let result = calculate(&ProbabilityInput::ConditionalGivenB {
        conditional: conditional.clone(),
        ensemble_b,
    })
    .unwrap();
    assert_matrix_close(result.conditional_a_given_b(), &conditional, 1e-12);
}

#[rstest]
#[case(2, 4, 41)]
#[case(3, 3, 42)]
#[case(6, 5, 43)]
fn conditional_given_a_round_trips(#[case] rows: usize, #[case] cols: usize, #[case] seed: u64) {
    let conditional = random_row_stochastic(rows, cols, seed);
    let ensemble_a = random_ensemble(rows, seed + 1);
    let result = calculate(&ProbabilityInput::ConditionalGivenA {
        conditional: conditional.clone(),
        ensemble_a,
    })
    .unwrap();
    assert_matrix_close(result.conditional_b_given_a(), &conditional, 1e-12);
}

#[test]
fn all_three_forms_agree() {
    let joint = random_joint(3, 4, 51);
    let from_joint = calculate(&ProbabilityInput::Joint(joint.clone())).unwrap();

    let from_b = calculate(&ProbabilityInput::ConditionalGivenB {
        conditional: from_joint.conditional_a_given_b().clone(),
        ensemble_b: Ensemble::new(from_joint.ensemble_b().to_vec()).unwrap(),
    })
    .unwrap();
    let from_a = calculate(&ProbabilityInput::ConditionalGivenA {
        conditional: from_joint.conditional_b_given_a().clone(),
        ensemble_a: Ensemble::new(from_joint.ensemble_a().to_vec()).unwrap(),
    })
    .unwrap();

    for other in [&from_b, &from_a] {
        assert_matrix_close(other.joint(), &joint, 1e-12);
        assert_abs_diff_eq!(other.joint_entropy(), from_joint.joint_entropy(), epsilon = 1e-10);
        assert_abs_diff_eq!(
            other.mutual_information(),
            from_joint.mutual_information(),
            epsilon = 1e-10
        );
    }
}
