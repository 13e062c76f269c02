// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Probability containers: validated ensembles and joint/conditional matrices.

pub mod ensemble;
pub mod matrix;

pub use ensemble::Ensemble;
pub use matrix::ProbabilityMatrix;
