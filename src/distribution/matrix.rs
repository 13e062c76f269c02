// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView2};

use crate::distribution::ensemble::Ensemble;
use crate::error::{ProbabilityError, ProbabilityResult};

/// Rows × cols grid of probabilities. Rows index outcomes a_i of A, columns index b_j of B.
///
/// Used for the joint P(A,B) as well as both conditionals P(A|B) and P(B|A).
/// Shape is checked once on construction (non-empty, rectangular); entries are not
/// validated, non-positive values are simply skipped by the logarithmic sums.
/// Deserialization goes through [`ProbabilityMatrix::from_array`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Array2<f64>", into = "Array2<f64>"))]
pub struct ProbabilityMatrix {
    probs: Array2<f64>,
}

impl ProbabilityMatrix {
    pub fn from_array(probs: Array2<f64>) -> ProbabilityResult<Self> {
        if probs.nrows() == 0 || probs.ncols() == 0 {
            return Err(ProbabilityError::EmptyMatrix);
        }
        Ok(Self { probs })
    }

    /// Build from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> ProbabilityResult<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows == 0 || ncols == 0 {
            return Err(ProbabilityError::EmptyMatrix);
        }
        let mut flat = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(ProbabilityError::RaggedMatrix {
                    row: i + 1,
                    expected: ncols,
                    found: row.len(),
                });
            }
            flat.extend(row);
        }
        let probs = Array2::from_shape_vec((nrows, ncols), flat)
            .map_err(|_| ProbabilityError::EmptyMatrix)?;
        Ok(Self { probs })
    }

    pub fn rows(&self) -> usize {
        self.probs.nrows()
    }

    pub fn cols(&self) -> usize {
        self.probs.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.probs[[row, col]]
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.probs.view()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.probs
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.probs.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Sum of all entries.
    pub fn total(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Row sums: P(a_i) = Σ_j P(a_i, b_j).
    pub fn row_marginal(&self) -> Ensemble {
        let mut out = Array1::zeros(self.rows());
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                out[i] += self.probs[[i, j]];
            }
        }
        Ensemble::from_marginal(out)
    }

    /// Column sums: P(b_j) = Σ_i P(a_i, b_j).
    pub fn column_marginal(&self) -> Ensemble {
        let mut out = Array1::zeros(self.cols());
        for j in 0..self.cols() {
            for i in 0..self.rows() {
                out[j] += self.probs[[i, j]];
            }
        }
        Ensemble::from_marginal(out)
    }

    /// Multiply column j by `ensemble_b[j]`, turning P(A|B) into P(A,B).
    pub fn scale_columns(&self, ensemble_b: &Ensemble) -> ProbabilityResult<Self> {
        self.expect_len("B", ensemble_b, self.cols())?;
        let probs = Array2::from_shape_fn(self.probs.raw_dim(), |(i, j)| {
            self.probs[[i, j]] * ensemble_b[j]
        });
        Ok(Self { probs })
    }

    /// Multiply row i by `ensemble_a[i]`, turning P(B|A) into P(A,B).
    pub fn scale_rows(&self, ensemble_a: &Ensemble) -> ProbabilityResult<Self> {
        self.expect_len("A", ensemble_a, self.rows())?;
        let probs = Array2::from_shape_fn(self.probs.raw_dim(), |(i, j)| {
            self.probs[[i, j]] * ensemble_a[i]
        });
        Ok(Self { probs })
    }

    /// P(A|B): divide column j by `ensemble_b[j]`.
    ///
    /// Columns whose marginal is not positive are filled with 0 instead of NaN.
    pub fn condition_on_columns(&self, ensemble_b: &Ensemble) -> ProbabilityResult<Self> {
        self.expect_len("B", ensemble_b, self.cols())?;
        let probs = Array2::from_shape_fn(self.probs.raw_dim(), |(i, j)| {
            if ensemble_b[j] > 0.0 {
                self.probs[[i, j]] / ensemble_b[j]
            } else {
                0.0
            }
        });
        Ok(Self { probs })
    }

    /// P(B|A): divide row i by `ensemble_a[i]`, zero rows where the marginal is not positive.
    pub fn condition_on_rows(&self, ensemble_a: &Ensemble) -> ProbabilityResult<Self> {
        self.expect_len("A", ensemble_a, self.rows())?;
        let probs = Array2::from_shape_fn(self.probs.raw_dim(), |(i, j)| {
            if ensemble_a[i] > 0.0 {
                self.probs[[i, j]] / ensemble_a[i]
            } else {
                0.0
            }
        });
        Ok(Self { probs })
    }

    fn expect_len(&self, name: &str, ensemble: &Ensemble, expected: usize) -> ProbabilityResult<()> {
        if ensemble.len() != expected {
            return Err(ProbabilityError::dimension_mismatch(name, expected, ensemble.len()));
        }
        Ok(())
    }
}

impl TryFrom<Array2<f64>> for ProbabilityMatrix {
    type Error = ProbabilityError;

    fn try_from(probs: Array2<f64>) -> Result<Self, Self::Error> {
        Self::from_array(probs)
    }
}

impl From<ProbabilityMatrix> for Array2<f64> {
    fn from(matrix: ProbabilityMatrix) -> Self {
        matrix.probs
    }
}
