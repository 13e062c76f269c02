// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::measures::traits::GlobalValue;

/// Mutual information using the entropy-summation formula.
///
/// I(A;B) = H(A) + H(B) - H(A,B). The composition is kept in this order so results match
/// the reference values bit for bit; H(A) - H(A|B) can differ in the last few bits.
pub struct MutualInformation<M, J> {
    marginals: [M; 2],
    joint: J,
}

impl<M, J> MutualInformation<M, J> {
    pub fn new(marginal_a: M, marginal_b: M, joint: J) -> Self {
        Self {
            marginals: [marginal_a, marginal_b],
            joint,
        }
    }
}

impl<M: GlobalValue, J: GlobalValue> GlobalValue for MutualInformation<M, J> {
    fn global_value(&self) -> f64 {
        let [a, b] = &self.marginals;
        let h_a = a.global_value();
        let h_b = b.global_value();
        let h_joint = self.joint.global_value();
        h_a + h_b - h_joint
    }
}
