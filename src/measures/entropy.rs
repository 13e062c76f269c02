// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::distribution::{Ensemble, ProbabilityMatrix};
use crate::error::{ProbabilityError, ProbabilityResult};
use crate::measures::traits::GlobalValue;

/// Shannon entropy in bits: H = -Σ p log₂ p.
///
/// Terms with p ≤ 0 contribute nothing (0·log₂0 = 0) and are never passed to the logarithm.
pub fn entropy_bits<'a>(probs: impl IntoIterator<Item = &'a f64>) -> f64 {
    let mut h = 0.0_f64;
    for &p in probs {
        if p > 0.0 {
            h -= p * p.log2();
        }
    }
    h
}

/// Entropy H(X) of a single ensemble.
pub struct MarginalEntropy<'a> {
    ensemble: &'a Ensemble,
}

impl<'a> MarginalEntropy<'a> {
    pub fn new(ensemble: &'a Ensemble) -> Self {
        Self { ensemble }
    }
}

impl GlobalValue for MarginalEntropy<'_> {
    fn global_value(&self) -> f64 {
        entropy_bits(self.ensemble.iter())
    }
}

/// Joint entropy H(A,B) over every cell of the joint matrix, row by row.
pub struct JointEntropy<'a> {
    joint: &'a ProbabilityMatrix,
}

impl<'a> JointEntropy<'a> {
    pub fn new(joint: &'a ProbabilityMatrix) -> Self {
        Self { joint }
    }
}

impl GlobalValue for JointEntropy<'_> {
    fn global_value(&self) -> f64 {
        entropy_bits(self.joint.as_array().iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conditioning {
    /// Condition on A (rows): H(B|A).
    Rows,
    /// Condition on B (columns): H(A|B).
    Columns,
}

/// Conditional entropy computed directly from the joint matrix and the conditioning marginal.
///
/// H(B|A) = -Σ_i Σ_j p(a_i,b_j) log₂(p(a_i,b_j) / p(a_i)), where rows with p(a_i) = 0 and
/// cells with p(a_i,b_j) ≤ 0 are skipped. H(A|B) is the same sum taken over columns.
pub struct ConditionalEntropy<'a> {
    joint: &'a ProbabilityMatrix,
    marginal: &'a Ensemble,
    conditioning: Conditioning,
}

impl<'a> ConditionalEntropy<'a> {
    /// H(B|A), conditioning on the row marginal `ensemble_a`.
    pub fn given_rows(joint: &'a ProbabilityMatrix, ensemble_a: &'a Ensemble) -> ProbabilityResult<Self> {
        if ensemble_a.len() != joint.rows() {
            return Err(ProbabilityError::dimension_mismatch("A", joint.rows(), ensemble_a.len()));
        }
        Ok(Self {
            joint,
            marginal: ensemble_a,
            conditioning: Conditioning::Rows,
        })
    }

    /// H(A|B), conditioning on the column marginal `ensemble_b`.
    pub fn given_columns(joint: &'a ProbabilityMatrix, ensemble_b: &'a Ensemble) -> ProbabilityResult<Self> {
        if ensemble_b.len() != joint.cols() {
            return Err(ProbabilityError::dimension_mismatch("B", joint.cols(), ensemble_b.len()));
        }
        Ok(Self {
            joint,
            marginal: ensemble_b,
            conditioning: Conditioning::Columns,
        })
    }
}

impl GlobalValue for ConditionalEntropy<'_> {
    fn global_value(&self) -> f64 {
        let (outer, inner) = match self.conditioning {
            Conditioning::Rows => (self.joint.rows(), self.joint.cols()),
            Conditioning::Columns => (self.joint.cols(), self.joint.rows()),
        };
        let mut h = 0.0_f64;
        for k in 0..outer {
            let m = self.marginal[k];
            if m <= 0.0 {
                continue;
            }
            for l in 0..inner {
                let p = match self.conditioning {
                    Conditioning::Rows => self.joint.get(k, l),
                    Conditioning::Columns => self.joint.get(l, k),
                };
                if p > 0.0 {
                    h -= p * (p / m).log2();
                }
            }
        }
        h
    }
}
