// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation errors raised before a calculation is attempted.
//!
//! Every variant identifies the offending cell or ensemble entry so that a
//! presentation layer can show it to the user unchanged. Indices reported in
//! messages are 1-based, matching how rows `a1..` and columns `b1..` are labelled.

use thiserror::Error;

/// Error type for probability input validation and parsing.
///
/// Any error aborts the whole computation; there is no partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbabilityError {
    /// A required matrix cell was not supplied.
    #[error("missing value in cell [{row},{col}]")]
    MissingCell { row: usize, col: usize },

    /// A required ensemble entry was not supplied.
    #[error("missing value for {ensemble}[{index}]")]
    MissingValue { ensemble: String, index: usize },

    /// A matrix cell could not be parsed as a real number.
    #[error("invalid number in cell [{row},{col}]: {text:?}")]
    InvalidCell { row: usize, col: usize, text: String },

    /// An ensemble entry could not be parsed as a finite real number.
    #[error("invalid number for {ensemble}[{index}]: {text:?}")]
    InvalidNumber {
        ensemble: String,
        index: usize,
        text: String,
    },

    /// An ensemble entry is negative.
    #[error("{ensemble}[{index}] must not be negative: {value}")]
    NegativeProbability {
        ensemble: String,
        index: usize,
        value: f64,
    },

    /// Ensemble entries do not sum to 1.0 within the configured tolerance.
    #[error("probabilities of ensemble {ensemble} must sum to 1.0 (got {sum:.4})")]
    EnsembleNotNormalized { ensemble: String, sum: f64 },

    /// Ensemble length disagrees with the matrix axis it is paired with.
    #[error("ensemble {ensemble} must contain {expected} values (got {found})")]
    DimensionMismatch {
        ensemble: String,
        expected: usize,
        found: usize,
    },

    /// Matrix rows have differing lengths.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Matrix has no rows or no columns.
    #[error("probability matrix must have at least one row and one column")]
    EmptyMatrix,

    /// The selected input case requires an ensemble that was not supplied.
    #[error("ensemble {ensemble} is required for this input case")]
    MissingEnsemble { ensemble: String },

    /// Input case name not recognised.
    #[error("unknown input case: {0:?}")]
    UnknownCase(String),
}

impl ProbabilityError {
    /// Create a NegativeProbability error for a 0-based ensemble index.
    #[inline]
    pub fn negative(ensemble: &str, idx: usize, value: f64) -> Self {
        Self::NegativeProbability {
            ensemble: ensemble.to_string(),
            index: idx + 1,
            value,
        }
    }

    /// Create an InvalidNumber error for a 0-based ensemble index.
    #[inline]
    pub fn invalid_number(ensemble: &str, idx: usize, text: impl Into<String>) -> Self {
        Self::InvalidNumber {
            ensemble: ensemble.to_string(),
            index: idx + 1,
            text: text.into(),
        }
    }

    /// Create a DimensionMismatch error.
    #[inline]
    pub fn dimension_mismatch(ensemble: &str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            ensemble: ensemble.to_string(),
            expected,
            found,
        }
    }
}

/// Result alias used throughout the crate.
pub type ProbabilityResult<T> = Result<T, ProbabilityError>;
