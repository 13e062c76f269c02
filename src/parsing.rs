// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turning user-entered text cells into validated inputs.
//!
//! Both '.' and ',' are accepted as decimal separators. A cell given as `None`
//! was never filled in; an empty or blank string counts as missing too.

use crate::calculator::{InputCase, ProbabilityInput};
use crate::config::ValidationConfig;
use crate::distribution::{Ensemble, ProbabilityMatrix};
use crate::error::{ProbabilityError, ProbabilityResult};

/// Parse one number, or `None` if the text is blank. `Err(())` means unparsable.
fn parse_number(text: &str) -> Option<Result<f64, ()>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    Some(match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(()),
    })
}

/// Parse a single matrix cell at 0-based (`row`, `col`).
pub fn parse_cell(text: Option<&str>, row: usize, col: usize) -> ProbabilityResult<f64> {
    let missing = ProbabilityError::MissingCell {
        row: row + 1,
        col: col + 1,
    };
    let text = text.ok_or_else(|| missing.clone())?;
    match parse_number(text) {
        None => Err(missing),
        Some(Ok(v)) => Ok(v),
        Some(Err(())) => Err(ProbabilityError::InvalidCell {
            row: row + 1,
            col: col + 1,
            text: text.to_string(),
        }),
    }
}

/// Parse a grid of text cells into a [`ProbabilityMatrix`].
///
/// Fails on the first missing or invalid cell, scanning row by row.
pub fn parse_matrix<S: AsRef<str>>(cells: &[Vec<Option<S>>]) -> ProbabilityResult<ProbabilityMatrix> {
    let mut rows = Vec::with_capacity(cells.len());
    for (i, row) in cells.iter().enumerate() {
        let mut values = Vec::with_capacity(row.len());
        for (j, cell) in row.iter().enumerate() {
            let text: Option<&str> = cell.as_ref().map(|s| s.as_ref());
            values.push(parse_cell(text, i, j)?);
        }
        rows.push(values);
    }
    ProbabilityMatrix::from_rows(rows)
}

/// Parse the entries of ensemble `name` and validate them as a distribution.
///
/// Checks, in order: the number of entries, each entry in index order (missing,
/// unparsable, negative), then the sum against `config.sum_tolerance`.
pub fn parse_ensemble<S: AsRef<str>>(
    name: &str,
    cells: &[Option<S>],
    expected_len: usize,
    config: &ValidationConfig,
) -> ProbabilityResult<Ensemble> {
    if cells.len() != expected_len {
        return Err(ProbabilityError::dimension_mismatch(name, expected_len, cells.len()));
    }
    let mut values = Vec::with_capacity(expected_len);
    for (idx, cell) in cells.iter().enumerate() {
        let missing = || ProbabilityError::MissingValue {
            ensemble: name.to_string(),
            index: idx + 1,
        };
        let text: &str = cell.as_ref().map(|s| s.as_ref()).ok_or_else(missing)?;
        match parse_number(text) {
            None => return Err(missing()),
            Some(Err(())) => return Err(ProbabilityError::invalid_number(name, idx, text)),
            Some(Ok(v)) if v < 0.0 => return Err(ProbabilityError::negative(name, idx, v)),
            Some(Ok(v)) => values.push(v),
        }
    }
    Ensemble::named(name, values, config)
}

/// Assemble a [`ProbabilityInput`] for `case` from raw text.
///
/// `ensemble_cells` must be present for the conditional cases: the marginal of B
/// (one entry per column) for [`InputCase::ConditionalGivenB`], the marginal of A
/// (one entry per row) for [`InputCase::ConditionalGivenA`]. It is ignored for joint input.
pub fn parse_input<S: AsRef<str>>(
    case: InputCase,
    matrix_cells: &[Vec<Option<S>>],
    ensemble_cells: Option<&[Option<S>]>,
    config: &ValidationConfig,
) -> ProbabilityResult<ProbabilityInput> {
    let matrix = parse_matrix(matrix_cells)?;
    let required = |name: &str| ProbabilityError::MissingEnsemble {
        ensemble: name.to_string(),
    };
    match case {
        InputCase::Joint => Ok(ProbabilityInput::Joint(matrix)),
        InputCase::ConditionalGivenB => {
            let cells = ensemble_cells.ok_or_else(|| required("B"))?;
            let ensemble_b = parse_ensemble("B", cells, matrix.cols(), config)?;
            Ok(ProbabilityInput::ConditionalGivenB {
                conditional: matrix,
                ensemble_b,
            })
        }
        InputCase::ConditionalGivenA => {
            let cells = ensemble_cells.ok_or_else(|| required("A"))?;
            let ensemble_a = parse_ensemble("A", cells, matrix.rows(), config)?;
            Ok(ProbabilityInput::ConditionalGivenA {
                conditional: matrix,
                ensemble_a,
            })
        }
    }
}
