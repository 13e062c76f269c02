// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Entropy-family measures over ensembles and joint matrices (base-2 logarithm).

pub mod entropy;
pub mod mutual_information;
pub mod traits;

pub use entropy::{ConditionalEntropy, JointEntropy, MarginalEntropy, entropy_bits};
pub use mutual_information::MutualInformation;
pub use traits::GlobalValue;
