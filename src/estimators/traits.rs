// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

pub trait GlobalValue {
    /// Compute and return the global value of the measure, in bits.
    fn global_value(&self) -> f64;
}

/// Measures that decompose into one contribution per observed outcome.
pub trait OutcomeValues: GlobalValue {
    /// Contribution of each observed outcome, in the order the outcomes are stored.
    fn outcome_values(&self) -> Array1<f64>;

    /// Derive the global value as the sum of the outcome contributions.
    fn global_from_outcomes(&self) -> f64 {
        self.outcome_values().sum()
    }
}
