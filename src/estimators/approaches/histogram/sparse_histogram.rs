// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use tracing::trace;

use super::bin_spec::BinSpec;

/// Bin index per dimension (0-based) identifying one histogram cell.
pub type BinCoordinate = Box<[u32]>;

/// Sparse histogram for a single shift: only populated cells are stored.
#[derive(Debug, Clone, Default)]
pub struct SparseHistogram {
    counts: HashMap<BinCoordinate, u64>,
    total: u64,
}

impl SparseHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the cell at `coords`, creating it on first sight.
    ///
    /// Returns `true` when a new cell was created.
    pub fn add_or_insert(&mut self, coords: &[u32]) -> bool {
        self.total += 1;
        if let Some(count) = self.counts.get_mut(coords) {
            *count += 1;
            return false;
        }
        self.counts.insert(coords.into(), 1);
        true
    }

    /// Count stored at `coords`, zero for unpopulated cells.
    pub fn count(&self, coords: &[u32]) -> u64 {
        self.counts.get(coords).copied().unwrap_or(0)
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of observations recorded in this histogram.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u32], u64)> {
        self.counts.iter().map(|(k, &v)| (&**k, v))
    }

    pub fn into_counts(self) -> HashMap<BinCoordinate, u64> {
        self.counts
    }
}

/// One sparse histogram per shifted binning, filled point by point.
#[derive(Debug, Clone)]
pub struct ShiftedHistograms {
    shifts: Vec<SparseHistogram>,
    points: u64,
    scratch: Vec<u32>,
}

impl ShiftedHistograms {
    pub fn new(num_shifts: usize) -> Self {
        Self {
            shifts: vec![SparseHistogram::new(); num_shifts],
            points: 0,
            scratch: Vec::new(),
        }
    }

    /// Bin `point` under every shift of `spec`.
    ///
    /// Shifts that cannot classify the point in all dimensions skip it. Returns the
    /// number of shifts that recorded the point.
    pub fn insert(&mut self, spec: &BinSpec, point: &[f64]) -> usize {
        self.points += 1;
        let mut recorded = 0;
        for (shift, hist) in self.shifts.iter_mut().enumerate() {
            if spec.locate(point, shift, &mut self.scratch) {
                hist.add_or_insert(&self.scratch);
                recorded += 1;
            } else {
                trace!(shift, "point falls outside every bin of this shift");
            }
        }
        recorded
    }

    /// Points offered to [`insert`](Self::insert), classified or not.
    pub fn points(&self) -> u64 {
        self.points
    }

    /// Populated cells summed over all shifts.
    pub fn populated_bins(&self) -> usize {
        self.shifts.iter().map(SparseHistogram::len).sum()
    }

    pub fn num_shifts(&self) -> usize {
        self.shifts.len()
    }

    pub fn shifts(&self) -> &[SparseHistogram] {
        &self.shifts
    }

    pub fn into_shifts(self) -> Vec<SparseHistogram> {
        self.shifts
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.iter().all(SparseHistogram::is_empty)
    }
}
