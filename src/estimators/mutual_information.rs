// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::approaches::histogram::{Joint, Specific, SpecificProbabilities};
use crate::estimators::traits::{GlobalValue, OutcomeValues};

/// Pointwise term `p(x,y) log2(p(x,y) / (p(x) p(y)))`.
///
/// Unobserved combinations have `p(x,y) = 0` and contribute nothing.
#[inline]
pub fn mi_term(p_x: f64, p_y: f64, p_xy: f64) -> f64 {
    if p_xy > 0.0 {
        p_xy * (p_xy / (p_x * p_y)).log2()
    } else {
        0.0
    }
}

/// Specific information of one outcome `x`, weighted by `p(x)`.
///
/// Summing this over every `x` gives the mutual information.
pub fn specific_information(outcome: &SpecificProbabilities) -> f64 {
    outcome
        .p_y
        .iter()
        .zip(&outcome.p_xy)
        .map(|(&p_y, &p_xy)| mi_term(outcome.p_x, p_y, p_xy))
        .sum()
}

impl OutcomeValues for Joint {
    fn outcome_values(&self) -> Array1<f64> {
        self.cells
            .iter()
            .map(|c| mi_term(c.p_x, c.p_y, c.p_xy))
            .collect()
    }
}

impl GlobalValue for Joint {
    /// Mutual information `I(X; Y)` in bits.
    fn global_value(&self) -> f64 {
        self.cells.iter().map(|c| mi_term(c.p_x, c.p_y, c.p_xy)).sum()
    }
}

impl OutcomeValues for Specific {
    fn outcome_values(&self) -> Array1<f64> {
        self.outcomes.iter().map(specific_information).collect()
    }
}

impl GlobalValue for Specific {
    /// Sum of the specific information over all outcomes, i.e. `I(X; Y)`.
    fn global_value(&self) -> f64 {
        self.global_from_outcomes()
    }
}
