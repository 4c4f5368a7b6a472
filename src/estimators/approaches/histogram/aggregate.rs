// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use tracing::debug;

use super::sparse_histogram::{BinCoordinate, ShiftedHistograms};

/// Averaged-shift histogram: one (possibly fractional) count per populated cell.
///
/// Entries are sorted by coordinate so that every derived quantity is computed in a
/// deterministic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedTable {
    entries: Vec<(BinCoordinate, f64)>,
    mass: f64,
}

impl AggregatedTable {
    /// Collapse the per-shift histograms into their cell-wise mean.
    ///
    /// A cell missing from a shift contributes zero to that cell's mean. With a
    /// single shift the raw counts are kept as they are. Consumes the per-shift
    /// storage.
    pub fn from_shifts(histograms: ShiftedHistograms) -> Self {
        let num_shifts = histograms.num_shifts();
        let shifts = histograms.into_shifts();

        let mut entries: Vec<(BinCoordinate, f64)> = if num_shifts == 1 {
            shifts
                .into_iter()
                .flat_map(|h| h.into_counts())
                .map(|(coords, count)| (coords, count as f64))
                .collect()
        } else {
            let mut sums: HashMap<BinCoordinate, u64> = HashMap::new();
            for hist in shifts {
                for (coords, count) in hist.into_counts() {
                    *sums.entry(coords).or_insert(0) += count;
                }
            }
            let n = num_shifts as f64;
            sums.into_iter()
                .map(|(coords, sum)| (coords, sum as f64 / n))
                .collect()
        };
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mass: f64 = entries.iter().map(|(_, c)| c).sum();
        debug!(cells = entries.len(), mass, shifts = num_shifts, "aggregated shifted histograms");
        Self { entries, mass }
    }

    /// Build a table from explicit `(coordinate, count)` cells.
    ///
    /// Duplicate coordinates are merged by summing their counts.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (Vec<u32>, f64)>,
    {
        let mut merged: HashMap<BinCoordinate, f64> = HashMap::new();
        for (coords, count) in cells {
            *merged.entry(coords.into_boxed_slice()).or_insert(0.0) += count;
        }
        let mut entries: Vec<(BinCoordinate, f64)> = merged.into_iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        let mass: f64 = entries.iter().map(|(_, c)| c).sum();
        Self { entries, mass }
    }

    /// Total (averaged) count over all cells; the normaliser for probabilities.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, coords: &[u32]) -> f64 {
        self.entries
            .binary_search_by(|(c, _)| (**c).cmp(coords))
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u32], f64)> {
        self.entries.iter().map(|(c, v)| (&**c, *v))
    }
}
