// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infotheory
//!
//! Entropy, mutual information and partial information decomposition (PID) of
//! multivariate continuous data, estimated with averaged-shift histograms.
//!
//! ## Quick Start
//!
//! ```rust
//! use infotheory::estimators::InfoEngine;
//!
//! // two 1D variables, three shifted binnings per dimension
//! let mut engine = InfoEngine::new(2, 1).unwrap();
//! engine
//!     .set_equal_interval_binning(&[10, 10], &[0.0, 0.0], &[1.0, 1.0])
//!     .unwrap();
//!
//! for i in 0..100 {
//!     let x = i as f64 / 100.0;
//!     engine.add_data_point(&[x, x]).unwrap();
//! }
//!
//! let h = engine.entropy(&[0, -1]).unwrap();
//! let mi = engine.mutual_info(&[0, 1]).unwrap();
//! assert!(mi > 0.0 && mi <= h + 1e-9);
//! ```
//!
//! ## Estimation
//!
//! Every dimension is split into bins by interior boundaries; the outer bins are
//! unbounded. To reduce the bias of a single discretisation, the boundaries are
//! replicated into `2 * h + 1` shifted binnings and every point is counted once per
//! shift. Before the first query the per-shift sparse histograms are averaged
//! cell-wise into one table, from which all probabilities are exact frequency
//! ratios.
//!
//! ## Measures
//!
//! | Measure | Method | Roles |
//! |---------|--------|-------|
//! | Entropy | `entropy` | `0` |
//! | Mutual information | `mutual_info` | `0`, `1` |
//! | Redundant information | `redundant_info` | `0` target, `1`, `2` sources |
//! | Unique information | `unique_info` | `0` target, `1`, `2` sources |
//! | Synergy | `synergy` | `0` target, `1`, `2` sources |
//! | Full decomposition | `pid` | `0` target, `1`, `2` sources |
//!
//! Redundancy is the Williams–Beer minimum of specific information. All values are
//! in bits.
//!
//! ## Architecture
//!
//! 1. **Binning** (`approaches::histogram::bin_spec`): boundaries per dimension and shift
//! 2. **Counting** (`approaches::histogram::sparse_histogram`): one sparse table per shift
//! 3. **Aggregation** (`approaches::histogram::aggregate`): cell-wise mean over shifts
//! 4. **Probabilities** (`approaches::histogram::probability`): marginal, joint, specific
//! 5. **Measures** (`entropy`, `mutual_information`, `pid`) and the `InfoEngine` facade

pub mod error;
pub mod estimators;

pub use error::{Error, Result};
