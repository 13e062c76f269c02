// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub trait GlobalValue {
    /// Compute and return the global value of the measure, in bits.
    fn global_value(&self) -> f64;
}

