// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Partial information decomposition of two sources about a target.
//!
//! Redundancy follows Williams & Beer: for every target outcome `t` take the smaller
//! of the two sources' specific information about `t`, then sum over `t`. Unique
//! and synergistic parts follow from the mutual informations:
//!
//! - `U1 = I(S1; T) - R`
//! - `U2 = I(S2; T) - R`
//! - `S  = I(S1, S2; T) - I(S1; T) - I(S2; T) + R`
//!
//! so `I(S1, S2; T) = U1 + U2 + R + S` holds by construction.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::estimators::approaches::histogram::Specific;
use crate::estimators::mutual_information::specific_information;

/// Williams–Beer redundancy `Σ_t min(I_spec(S1 → t), I_spec(S2 → t))`.
///
/// Both arguments must be grouped by the same target variable. A target outcome
/// missing from one side carries no specific information there.
pub fn redundancy(source_1: &Specific, source_2: &Specific) -> f64 {
    let by_target: HashMap<&[u32], f64> = source_2
        .outcomes
        .iter()
        .map(|o| (o.x.as_slice(), specific_information(o)))
        .collect();

    source_1
        .outcomes
        .iter()
        .map(|o| {
            let si_1 = specific_information(o);
            let si_2 = by_target.get(o.x.as_slice()).copied().unwrap_or(0.0);
            si_1.min(si_2)
        })
        .sum()
}

/// The five terms of a two-source decomposition, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pid {
    /// `I(S1, S2; T)`.
    pub total: f64,
    pub unique_1: f64,
    pub unique_2: f64,
    pub redundancy: f64,
    pub synergy: f64,
}

impl Pid {
    /// Assemble the decomposition from the three mutual informations and the redundancy.
    pub fn from_parts(total: f64, mi_1: f64, mi_2: f64, redundancy: f64) -> Self {
        Self {
            total,
            unique_1: mi_1 - redundancy,
            unique_2: mi_2 - redundancy,
            redundancy,
            synergy: total - mi_1 - mi_2 + redundancy,
        }
    }

    /// `unique_1 + unique_2 + redundancy + synergy`; equals `total` up to rounding.
    pub fn sum_of_parts(&self) -> f64 {
        self.unique_1 + self.unique_2 + self.redundancy + self.synergy
    }

    /// `[total, unique_1, unique_2, redundancy, synergy]`.
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.total,
            self.unique_1,
            self.unique_2,
            self.redundancy,
            self.synergy,
        ]
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total={:.6} unique_1={:.6} unique_2={:.6} redundancy={:.6} synergy={:.6}",
            self.total, self.unique_1, self.unique_2, self.redundancy, self.synergy
        )
    }
}
