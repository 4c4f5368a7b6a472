// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use crate::estimators::approaches::histogram::OuterShiftPolicy;

/// Binning configuration of an engine, as reported by `config_summary`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSummary {
    pub dims: usize,
    pub num_shifts: usize,
    pub outer_shift_policy: OuterShiftPolicy,
    /// Bins per dimension, `None` where binning is not set.
    pub bin_counts: Vec<Option<usize>>,
    /// `[dim][shift]` boundaries; empty for unconfigured dimensions.
    pub boundaries: Vec<Vec<Vec<f64>>>,
}

impl fmt::Display for ConfigSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dimensions: {}", self.dims)?;
        writeln!(f, "shifted binnings: {}", self.num_shifts)?;
        writeln!(f, "outer shift policy: {:?}", self.outer_shift_policy)?;
        for (dim, shifts) in self.boundaries.iter().enumerate() {
            match self.bin_counts[dim] {
                Some(bins) => writeln!(f, "dimension {dim}: {bins} bins")?,
                None => writeln!(f, "dimension {dim}: not configured")?,
            }
            for (shift, bounds) in shifts.iter().enumerate() {
                writeln!(f, "  shift {shift}: {bounds:?}")?;
            }
        }
        Ok(())
    }
}

/// Current fill state of an engine, as reported by `snapshot`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Points accepted since the current accumulation phase started.
    pub points_added: u64,
    /// Populated cells summed over shifts while accumulating, aggregated cells afterwards.
    pub populated_bins: usize,
    pub aggregated: bool,
    /// Total averaged count, once aggregated.
    pub aggregated_mass: Option<f64>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "points added: {}", self.points_added)?;
        writeln!(f, "populated bins: {}", self.populated_bins)?;
        writeln!(f, "aggregated across shifts: {}", if self.aggregated { "yes" } else { "no" })?;
        if let Some(mass) = self.aggregated_mass {
            writeln!(f, "aggregated mass: {mass}")?;
        }
        Ok(())
    }
}
