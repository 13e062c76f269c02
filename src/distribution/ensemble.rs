// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::config::ValidationConfig;
use crate::error::{ProbabilityError, ProbabilityResult};

/// Discrete probability distribution over the outcomes of one random variable.
///
/// Caller-supplied ensembles are validated on construction: every entry is finite
/// and non-negative and the entries sum to 1.0 within [`ValidationConfig::sum_tolerance`].
/// Marginals derived from a joint matrix skip validation since they are not input.
/// Deserialized ensembles go through [`Ensemble::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Array1<f64>", into = "Array1<f64>"))]
pub struct Ensemble {
    probs: Array1<f64>,
}

impl Ensemble {
    /// Validate `values` with the default tolerance.
    pub fn new(values: impl Into<Array1<f64>>) -> ProbabilityResult<Self> {
        Self::named("ensemble", values, &ValidationConfig::default())
    }

    /// Validate `values` with a custom configuration.
    pub fn with_config(
        values: impl Into<Array1<f64>>,
        config: &ValidationConfig,
    ) -> ProbabilityResult<Self> {
        Self::named("ensemble", values, config)
    }

    /// Validate `values`, labelling any error with `name` (e.g. "A" or "B").
    pub fn named(
        name: &str,
        values: impl Into<Array1<f64>>,
        config: &ValidationConfig,
    ) -> ProbabilityResult<Self> {
        let probs = values.into();
        for (idx, &p) in probs.iter().enumerate() {
            if !p.is_finite() {
                return Err(ProbabilityError::invalid_number(name, idx, p.to_string()));
            }
            if p < 0.0 {
                return Err(ProbabilityError::negative(name, idx, p));
            }
        }
        let sum: f64 = probs.iter().sum();
        if (sum - 1.0).abs() > config.sum_tolerance {
            return Err(ProbabilityError::EnsembleNotNormalized {
                ensemble: name.to_string(),
                sum,
            });
        }
        Ok(Self { probs })
    }

    /// Wrap a derived marginal without validation.
    pub(crate) fn from_marginal(probs: Array1<f64>) -> Self {
        Self { probs }
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Sum of the entries, added in index order.
    pub fn sum(&self) -> f64 {
        self.probs.iter().sum()
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.probs.view()
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.probs
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.probs.to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.probs.iter()
    }
}

impl std::ops::Index<usize> for Ensemble {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        &self.probs[idx]
    }
}

impl TryFrom<Array1<f64>> for Ensemble {
    type Error = ProbabilityError;

    fn try_from(values: Array1<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Ensemble> for Array1<f64> {
    fn from(ensemble: Ensemble) -> Self {
        ensemble.probs
    }
}
