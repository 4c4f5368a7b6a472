// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::estimators::approaches::histogram::OuterShiftPolicy;

/// Equal-width binning for every dimension: `bin_counts[d]` intervals over `[mins[d], maxs[d])`.
///
/// The outermost bins extend to infinity, so values outside the range still land
/// in the first or last bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqualIntervalBinning {
    pub bin_counts: Vec<usize>,
    pub mins: Vec<f64>,
    pub maxs: Vec<f64>,
}

impl EqualIntervalBinning {
    /// Same bin count and range along all `dims` dimensions.
    pub fn uniform(dims: usize, bins: usize, min: f64, max: f64) -> Self {
        Self {
            bin_counts: vec![bins; dims],
            mins: vec![min; dims],
            maxs: vec![max; dims],
        }
    }
}

/// Construction parameters of an [`InfoEngine`](crate::estimators::engine::InfoEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dimensionality of all variables combined.
    pub dims: usize,
    /// Shifted binnings on each side of the base binning; `0` disables shifting.
    #[serde(default)]
    pub shift_half_width: usize,
    #[serde(default)]
    pub outer_shift_policy: OuterShiftPolicy,
    /// Applied right after construction when present.
    #[serde(default)]
    pub binning: Option<EqualIntervalBinning>,
}

impl EngineConfig {
    pub fn new(dims: usize, shift_half_width: usize) -> Self {
        Self {
            dims,
            shift_half_width,
            outer_shift_policy: OuterShiftPolicy::default(),
            binning: None,
        }
    }

    pub fn with_policy(mut self, policy: OuterShiftPolicy) -> Self {
        self.outer_shift_policy = policy;
        self
    }

    pub fn with_binning(mut self, binning: EqualIntervalBinning) -> Self {
        self.binning = Some(binning);
        self
    }

    /// Total number of shifted binnings, `2 * shift_half_width + 1`.
    pub fn num_shifts(&self) -> usize {
        2 * self.shift_half_width + 1
    }
}
