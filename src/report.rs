// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text rendering of a [`CalculationResult`].
//!
//! Matrices and ensembles are printed with 4 decimals, entropy scalars with 15 so the
//! output can be compared digit for digit against reference tables.

use std::fmt::{self, Write};

use crate::calculator::CalculationResult;
use crate::distribution::{Ensemble, ProbabilityMatrix};

/// Decimals used for matrix cells and ensemble entries.
pub const MATRIX_PRECISION: usize = 4;
/// Decimals used for entropy and information scalars.
pub const SCALAR_PRECISION: usize = 15;

/// Comma-separated ensemble entries, e.g. `0.2000, 0.8000`.
pub fn format_ensemble(ensemble: &Ensemble) -> String {
    ensemble
        .iter()
        .map(|p| format!("{:.*}", MATRIX_PRECISION, p))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Grid with a `b1..bn` header line and `a1..am` row labels.
pub fn format_matrix(matrix: &ProbabilityMatrix) -> String {
    let width = MATRIX_PRECISION + 4;
    let mut out = String::new();
    let _ = write!(out, "{:<4}", "");
    for j in 0..matrix.cols() {
        let _ = write!(out, "{:>width$}", format!("b{}", j + 1));
    }
    out.push('\n');
    for i in 0..matrix.rows() {
        let _ = write!(out, "{:<4}", format!("a{}", i + 1));
        for j in 0..matrix.cols() {
            let _ = write!(out, "{:>width$.prec$}", matrix.get(i, j), prec = MATRIX_PRECISION);
        }
        out.push('\n');
    }
    out
}

fn scalar_line(f: &mut fmt::Formatter<'_>, label: &str, value: f64) -> fmt::Result {
    writeln!(f, "{label} = {value:.prec$} bits", prec = SCALAR_PRECISION)
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ensemble A: {}", format_ensemble(self.ensemble_a()))?;
        writeln!(f, "Ensemble B: {}", format_ensemble(self.ensemble_b()))?;
        scalar_line(f, "H(A)", self.entropy_a())?;
        scalar_line(f, "H(B)", self.entropy_b())?;
        scalar_line(f, "H(B|A)", self.conditional_entropy_b_given_a())?;
        scalar_line(f, "H(A|B)", self.conditional_entropy_a_given_b())?;
        scalar_line(f, "H(A,B)", self.joint_entropy())?;
        scalar_line(f, "I(A;B)", self.mutual_information())?;
        writeln!(f)?;
        writeln!(f, "Joint probabilities P(a_i, b_j):")?;
        f.write_str(&format_matrix(self.joint()))?;
        writeln!(f)?;
        writeln!(f, "Conditional probabilities P(a_i | b_j):")?;
        f.write_str(&format_matrix(self.conditional_a_given_b()))?;
        writeln!(f)?;
        writeln!(f, "Conditional probabilities P(b_j | a_i):")?;
        f.write_str(&format_matrix(self.conditional_b_given_a()))
    }
}
