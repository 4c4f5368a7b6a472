// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exact frequency ratios derived from an [`AggregatedTable`].
//!
//! Variables are given as lists of dimension indices; a variable's outcome is the
//! sub-coordinate ("pattern") of a cell on those dimensions. No smoothing or
//! pseudo-counts are applied, so only observed patterns appear in the results.

use std::collections::{BTreeMap, HashMap};

use super::aggregate::AggregatedTable;
use crate::error::{Error, Result};

/// Marginal distribution p(x) over the observed patterns of one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Marginal {
    /// `(pattern, p(x))`, sorted by pattern.
    pub probabilities: Vec<(Vec<u32>, f64)>,
}

/// One observed `(x, y)` combination with its marginals.
#[derive(Debug, Clone, PartialEq)]
pub struct JointProbability {
    pub x: Vec<u32>,
    pub y: Vec<u32>,
    pub p_x: f64,
    pub p_y: f64,
    pub p_xy: f64,
}

/// Joint distribution of two variables over their observed combinations.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    /// Sorted by `(x, y)`.
    pub cells: Vec<JointProbability>,
}

/// Probabilities needed for the specific information of a single outcome `x`.
///
/// `p_y` and `p_xy` run in parallel over every `y` that co-occurs with `x`; `p_y`
/// is the unconditional p(y).
#[derive(Debug, Clone, PartialEq)]
pub struct SpecificProbabilities {
    pub x: Vec<u32>,
    pub p_x: f64,
    pub p_y: Vec<f64>,
    pub p_xy: Vec<f64>,
}

/// Specific probabilities for every observed outcome of `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Specific {
    /// Sorted by the `x` pattern.
    pub outcomes: Vec<SpecificProbabilities>,
}

fn project(coords: &[u32], dims: &[usize]) -> Vec<u32> {
    dims.iter().map(|&d| coords[d]).collect()
}

fn checked_mass(table: &AggregatedTable) -> Result<f64> {
    let mass = table.mass();
    if table.is_empty() || mass <= 0.0 {
        return Err(Error::NoData);
    }
    Ok(mass)
}

/// Summed counts per pattern on `dims`.
fn pattern_counts(table: &AggregatedTable, dims: &[usize]) -> HashMap<Vec<u32>, f64> {
    let mut counts = HashMap::new();
    for (coords, count) in table.iter() {
        *counts.entry(project(coords, dims)).or_insert(0.0) += count;
    }
    counts
}

/// p(x) for every observed pattern of the variable on `x_dims`.
pub fn marginal(table: &AggregatedTable, x_dims: &[usize]) -> Result<Marginal> {
    let mass = checked_mass(table)?;
    let mut probabilities: Vec<(Vec<u32>, f64)> = pattern_counts(table, x_dims)
        .into_iter()
        .map(|(pattern, count)| (pattern, count / mass))
        .collect();
    probabilities.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    Ok(Marginal { probabilities })
}

/// `(p(x), p(y), p(x,y))` for every observed combination of `x_dims` and `y_dims`.
///
/// With no `y` dimensions every cell has `p(y) = 1`.
pub fn joint(table: &AggregatedTable, x_dims: &[usize], y_dims: &[usize]) -> Result<Joint> {
    let mass = checked_mass(table)?;
    let x_counts = pattern_counts(table, x_dims);
    let y_counts = pattern_counts(table, y_dims);

    let mut xy_counts: BTreeMap<(Vec<u32>, Vec<u32>), f64> = BTreeMap::new();
    for (coords, count) in table.iter() {
        *xy_counts
            .entry((project(coords, x_dims), project(coords, y_dims)))
            .or_insert(0.0) += count;
    }

    let cells = xy_counts
        .into_iter()
        .map(|((x, y), count)| {
            let p_x = x_counts[&x] / mass;
            let p_y = y_counts[&y] / mass;
            JointProbability {
                x,
                y,
                p_x,
                p_y,
                p_xy: count / mass,
            }
        })
        .collect();
    Ok(Joint { cells })
}

/// Group the joint distribution of `x_dims` and `y_dims` by outcome of `x`.
pub fn specific(table: &AggregatedTable, x_dims: &[usize], y_dims: &[usize]) -> Result<Specific> {
    let joint = joint(table, x_dims, y_dims)?;

    let mut outcomes: Vec<SpecificProbabilities> = Vec::new();
    // cells are sorted by x first, so equal x patterns are adjacent
    for cell in joint.cells {
        match outcomes.last_mut() {
            Some(last) if last.x == cell.x => {
                last.p_y.push(cell.p_y);
                last.p_xy.push(cell.p_xy);
            }
            _ => outcomes.push(SpecificProbabilities {
                x: cell.x,
                p_x: cell.p_x,
                p_y: vec![cell.p_y],
                p_xy: vec![cell.p_xy],
            }),
        }
    }
    Ok(Specific { outcomes })
}
