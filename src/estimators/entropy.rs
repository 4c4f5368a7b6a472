// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::approaches::histogram::Marginal;
use crate::estimators::traits::{GlobalValue, OutcomeValues};

/// Shannon entropy in bits, `-Σ p log2 p`, skipping zero probabilities.
pub fn entropy_bits<I>(probabilities: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    probabilities
        .into_iter()
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.log2())
        .sum()
}

impl OutcomeValues for Marginal {
    fn outcome_values(&self) -> Array1<f64> {
        self.probabilities
            .iter()
            .map(|&(_, p)| if p > 0.0 { -p * p.log2() } else { 0.0 })
            .collect()
    }
}

impl GlobalValue for Marginal {
    /// Entropy of the marginal distribution.
    fn global_value(&self) -> f64 {
        entropy_bits(self.probabilities.iter().map(|&(_, p)| p))
    }
}
