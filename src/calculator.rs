// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::config::ValidationConfig;
use crate::distribution::{Ensemble, ProbabilityMatrix};
use crate::error::{ProbabilityError, ProbabilityResult};
use crate::measures::{ConditionalEntropy, GlobalValue, JointEntropy, MarginalEntropy, MutualInformation};

/// The three equivalent ways of describing the relationship between A and B.
///
/// Each variant carries exactly the ensemble it needs, so e.g. a P(A|B) matrix can
/// never be paired with the marginal of A.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbabilityInput {
    /// Joint probabilities P(A,B).
    Joint(ProbabilityMatrix),
    /// Conditional P(A|B) together with the marginal of B.
    ConditionalGivenB {
        conditional: ProbabilityMatrix,
        ensemble_b: Ensemble,
    },
    /// Conditional P(B|A) together with the marginal of A.
    ConditionalGivenA {
        conditional: ProbabilityMatrix,
        ensemble_a: Ensemble,
    },
}

impl ProbabilityInput {
    pub fn case(&self) -> InputCase {
        match self {
            Self::Joint(_) => InputCase::Joint,
            Self::ConditionalGivenB { .. } => InputCase::ConditionalGivenB,
            Self::ConditionalGivenA { .. } => InputCase::ConditionalGivenA,
        }
    }

    /// The matrix supplied by the caller, whatever its interpretation.
    pub fn matrix(&self) -> &ProbabilityMatrix {
        match self {
            Self::Joint(m) => m,
            Self::ConditionalGivenB { conditional, .. } => conditional,
            Self::ConditionalGivenA { conditional, .. } => conditional,
        }
    }
}

/// Tag of a [`ProbabilityInput`] variant, used where the data is not assembled yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCase {
    Joint,
    ConditionalGivenB,
    ConditionalGivenA,
}

impl fmt::Display for InputCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Joint => "joint",
            Self::ConditionalGivenB => "a_given_b",
            Self::ConditionalGivenA => "b_given_a",
        };
        f.write_str(s)
    }
}

impl FromStr for InputCase {
    type Err = ProbabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "joint" | "p(a,b)" => Ok(Self::Joint),
            "a_given_b" | "p(a|b)" => Ok(Self::ConditionalGivenB),
            "b_given_a" | "p(b|a)" => Ok(Self::ConditionalGivenA),
            other => Err(ProbabilityError::UnknownCase(other.to_string())),
        }
    }
}

/// Snapshot of one calculation: marginals, joint, both conditionals and all scalars (bits).
///
/// Owns all of its data; nothing aliases the caller's input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationResult {
    ensemble_a: Ensemble,
    ensemble_b: Ensemble,
    joint: ProbabilityMatrix,
    conditional_a_given_b: ProbabilityMatrix,
    conditional_b_given_a: ProbabilityMatrix,
    entropy_a: f64,
    entropy_b: f64,
    joint_entropy: f64,
    conditional_entropy_b_given_a: f64,
    conditional_entropy_a_given_b: f64,
    mutual_information: f64,
}

impl CalculationResult {
    /// P(a_i), the row marginal.
    pub fn ensemble_a(&self) -> &Ensemble {
        &self.ensemble_a
    }

    /// P(b_j), the column marginal.
    pub fn ensemble_b(&self) -> &Ensemble {
        &self.ensemble_b
    }

    pub fn joint(&self) -> &ProbabilityMatrix {
        &self.joint
    }

    /// P(a_i | b_j); columns sum to 1 where P(b_j) > 0.
    pub fn conditional_a_given_b(&self) -> &ProbabilityMatrix {
        &self.conditional_a_given_b
    }

    /// P(b_j | a_i); rows sum to 1 where P(a_i) > 0.
    pub fn conditional_b_given_a(&self) -> &ProbabilityMatrix {
        &self.conditional_b_given_a
    }

    pub fn entropy_a(&self) -> f64 {
        self.entropy_a
    }

    pub fn entropy_b(&self) -> f64 {
        self.entropy_b
    }

    pub fn joint_entropy(&self) -> f64 {
        self.joint_entropy
    }

    pub fn conditional_entropy_b_given_a(&self) -> f64 {
        self.conditional_entropy_b_given_a
    }

    pub fn conditional_entropy_a_given_b(&self) -> f64 {
        self.conditional_entropy_a_given_b
    }

    pub fn mutual_information(&self) -> f64 {
        self.mutual_information
    }
}

/// Turns any [`ProbabilityInput`] into a complete [`CalculationResult`].
///
/// Stateless apart from its [`ValidationConfig`]; calling it twice with the same input
/// yields bit-identical results.
#[derive(Debug, Clone, Default)]
pub struct ProbabilityCalculator {
    config: ValidationConfig,
}

impl ProbabilityCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Normalize the input to a joint matrix, derive marginals and conditionals,
    /// then compute H(A), H(B), H(A,B), H(B|A), H(A|B) and I(A;B).
    pub fn calculate(&self, input: &ProbabilityInput) -> ProbabilityResult<CalculationResult> {
        let matrix = input.matrix();
        debug!(
            case = %input.case(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            "calculating information measures"
        );

        let (joint, ensemble_a, ensemble_b) = match input {
            ProbabilityInput::Joint(joint) => {
                let joint = joint.clone();
                let ensemble_a = joint.row_marginal();
                let ensemble_b = joint.column_marginal();
                (joint, ensemble_a, ensemble_b)
            }
            ProbabilityInput::ConditionalGivenB {
                conditional,
                ensemble_b,
            } => {
                self.check_ensemble(ensemble_b, "B")?;
                let joint = conditional.scale_columns(ensemble_b)?;
                let ensemble_a = joint.row_marginal();
                (joint, ensemble_a, ensemble_b.clone())
            }
            ProbabilityInput::ConditionalGivenA {
                conditional,
                ensemble_a,
            } => {
                self.check_ensemble(ensemble_a, "A")?;
                let joint = conditional.scale_rows(ensemble_a)?;
                let ensemble_b = joint.column_marginal();
                (joint, ensemble_a.clone(), ensemble_b)
            }
        };

        log_zero_marginals("A", &ensemble_a);
        log_zero_marginals("B", &ensemble_b);

        let conditional_a_given_b = joint.condition_on_columns(&ensemble_b)?;
        let conditional_b_given_a = joint.condition_on_rows(&ensemble_a)?;

        let entropy_a = MarginalEntropy::new(&ensemble_a).global_value();
        let entropy_b = MarginalEntropy::new(&ensemble_b).global_value();
        let joint_entropy = JointEntropy::new(&joint).global_value();
        let conditional_entropy_b_given_a =
            ConditionalEntropy::given_rows(&joint, &ensemble_a)?.global_value();
        let conditional_entropy_a_given_b =
            ConditionalEntropy::given_columns(&joint, &ensemble_b)?.global_value();
        let mutual_information = MutualInformation::new(
            MarginalEntropy::new(&ensemble_a),
            MarginalEntropy::new(&ensemble_b),
            JointEntropy::new(&joint),
        )
        .global_value();

        debug!(
            h_a = entropy_a,
            h_b = entropy_b,
            h_ab = joint_entropy,
            mi = mutual_information,
            "calculation finished"
        );

        Ok(CalculationResult {
            ensemble_a,
            ensemble_b,
            joint,
            conditional_a_given_b,
            conditional_b_given_a,
            entropy_a,
            entropy_b,
            joint_entropy,
            conditional_entropy_b_given_a,
            conditional_entropy_a_given_b,
            mutual_information,
        })
    }

    /// Re-validate an ensemble under this calculator's tolerance.
    ///
    /// `Ensemble` values built with a looser config than ours are rejected here.
    fn check_ensemble(&self, ensemble: &Ensemble, name: &str) -> ProbabilityResult<()> {
        Ensemble::named(name, ensemble.as_array().clone(), &self.config).map(|_| ())
    }
}

fn log_zero_marginals(name: &str, ensemble: &Ensemble) {
    for (idx, &p) in ensemble.iter().enumerate() {
        if p <= 0.0 {
            trace!(ensemble = name, index = idx + 1, "zero marginal, conditional set to 0");
        }
    }
}

/// Run [`ProbabilityCalculator::calculate`] with the default configuration.
pub fn calculate(input: &ProbabilityInput) -> ProbabilityResult<CalculationResult> {
    ProbabilityCalculator::new().calculate(input)
}
