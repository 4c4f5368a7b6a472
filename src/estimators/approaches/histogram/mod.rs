// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Averaged-shift histogram estimation: binning, sparse per-shift counting,
// shift aggregation and the probability structures derived from it.

pub mod aggregate;
pub mod bin_spec;
pub mod probability;
pub mod sparse_histogram;

pub use aggregate::AggregatedTable;
pub use bin_spec::{BinSpec, OuterShiftPolicy};
pub use probability::{Joint, JointProbability, Marginal, Specific, SpecificProbabilities};
pub use sparse_histogram::{BinCoordinate, ShiftedHistograms, SparseHistogram};
