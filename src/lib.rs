// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infojoint
//!
//! Entropy, conditional entropy and mutual information of two discrete random
//! variables A and B, computed from their probability relationship.
//!
//! ## Quick Start
//!
//! ```rust
//! use infojoint::{ProbabilityCalculator, ProbabilityInput, ProbabilityMatrix};
//!
//! let joint = ProbabilityMatrix::from_rows(vec![
//!     vec![0.1, 0.06, 0.02, 0.02],
//!     vec![0.16, 0.08, 0.4, 0.16],
//! ])
//! .unwrap();
//! let result = ProbabilityCalculator::new()
//!     .calculate(&ProbabilityInput::Joint(joint))
//!     .unwrap();
//! assert!((result.entropy_a() - 0.7219).abs() < 1e-4);
//! ```
//!
//! ## Input forms
//!
//! | Variant | Matrix | Ensemble |
//! |---------|--------|----------|
//! | `Joint` | P(A,B) | none |
//! | `ConditionalGivenB` | P(A\|B) | P(B) |
//! | `ConditionalGivenA` | P(B\|A) | P(A) |
//!
//! Every form is normalized to the joint matrix first. Marginals, both conditional
//! matrices and all scalars are then derived from it, so the [`CalculationResult`]
//! is always complete.
//!
//! ## Conventions
//!
//! - Logarithms are base 2; results are in bits.
//! - 0·log₂0 = 0: zero-probability terms are skipped.
//! - A conditional probability given an event of probability 0 is reported as 0.
//! - I(A;B) = H(A) + H(B) − H(A,B), composed in exactly that order.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for ensembles, matrices, results and config.

pub mod calculator;
pub mod config;
pub mod distribution;
pub mod error;
pub mod measures;
pub mod parsing;
pub mod report;

pub use calculator::{CalculationResult, InputCase, ProbabilityCalculator, ProbabilityInput, calculate};
pub use config::ValidationConfig;
pub use distribution::{Ensemble, ProbabilityMatrix};
pub use error::{ProbabilityError, ProbabilityResult};
pub use measures::GlobalValue;
