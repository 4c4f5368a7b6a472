// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors raised while configuring the engine, ingesting data or querying it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("dimensionality must be at least 1")]
    InvalidDimensionality,

    #[error("{what} has length {got}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("dimension index {dim} is out of range for {dims}-dimensional data")]
    DimensionOutOfRange { dim: usize, dims: usize },

    #[error("binning cannot change after data has been added")]
    BinningLocked,

    #[error("binning has not been specified for dimension {dim}")]
    BinningNotSet { dim: usize },

    #[error("dimension {dim} needs at least one bin")]
    ZeroBins { dim: usize },

    #[error("invalid range for dimension {dim}: min {min} must be below max {max}")]
    InvalidRange { dim: usize, min: f64, max: f64 },

    #[error("boundary {index} of dimension {dim} does not exceed its predecessor")]
    NonIncreasingBoundaries { dim: usize, index: usize },

    #[error("boundary {index} of dimension {dim} is not finite")]
    NonFiniteBoundary { dim: usize, index: usize },

    #[error("dimension {dim} has a single boundary, so there is no gap to derive shifts from")]
    NoAdjacentGap { dim: usize },

    #[error("role id {id} at dimension {dim} is not one of -1, 0, 1, 2")]
    InvalidRole { dim: usize, id: i32 },

    #[error("no observation has been binned yet")]
    NoData,
}

pub type Result<T> = std::result::Result<T, Error>;
