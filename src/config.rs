// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Default allowed deviation of an ensemble sum from 1.0.
pub const DEFAULT_SUM_TOLERANCE: f64 = 0.001;

/// Validation settings applied to caller-supplied ensembles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationConfig {
    /// Maximum |Σp − 1| accepted for an ensemble.
    pub sum_tolerance: f64,
}

impl ValidationConfig {
    pub fn new(sum_tolerance: f64) -> Self {
        Self { sum_tolerance }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            sum_tolerance: DEFAULT_SUM_TOLERANCE,
        }
    }
}
