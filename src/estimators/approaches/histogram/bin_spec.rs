// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// How the outermost boundary of a dimension moves between shifted binnings.
///
/// Every interior boundary is shifted by a fraction of half the gap to its right
/// neighbour. The last boundary has no right neighbour, so its offset needs a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OuterShiftPolicy {
    /// Reuse the half-gap of the interval to the left of the last boundary.
    #[default]
    ReuseAdjacentGap,
    /// Keep the last boundary at its base position in every shift.
    Unshifted,
}

/// Per-dimension bin boundaries, replicated across `2 * half_width + 1` shifts.
///
/// Shift `half_width` is the unshifted binning; shifts below it move boundaries
/// left, shifts above it move them right.
#[derive(Debug, Clone)]
pub struct BinSpec {
    half_width: usize,
    policy: OuterShiftPolicy,
    /// `[dim][shift]` boundary lists, `None` until the dimension is configured.
    boundaries: Vec<Option<Vec<Vec<f64>>>>,
}

impl BinSpec {
    pub fn new(dims: usize, half_width: usize, policy: OuterShiftPolicy) -> Self {
        Self {
            half_width,
            policy,
            boundaries: vec![None; dims],
        }
    }

    pub fn dims(&self) -> usize {
        self.boundaries.len()
    }

    pub fn half_width(&self) -> usize {
        self.half_width
    }

    pub fn num_shifts(&self) -> usize {
        2 * self.half_width + 1
    }

    pub fn policy(&self) -> OuterShiftPolicy {
        self.policy
    }

    /// Number of bins along `dim`, or `None` if the dimension has no binning yet.
    pub fn bin_count(&self, dim: usize) -> Option<usize> {
        self.base_boundaries(dim).map(|b| b.len() + 1)
    }

    /// Boundaries of `dim` under the given shift.
    pub fn boundaries(&self, dim: usize, shift: usize) -> Option<&[f64]> {
        self.boundaries
            .get(dim)?
            .as_ref()?
            .get(shift)
            .map(Vec::as_slice)
    }

    /// Boundaries of `dim` as configured, without any shift applied.
    pub fn base_boundaries(&self, dim: usize) -> Option<&[f64]> {
        self.boundaries(dim, self.half_width)
    }

    pub fn is_configured(&self, dim: usize) -> bool {
        matches!(self.boundaries.get(dim), Some(Some(_)))
    }

    /// First dimension that still lacks a binning.
    pub fn first_unconfigured(&self) -> Option<usize> {
        self.boundaries.iter().position(Option::is_none)
    }

    /// Set explicit interior boundaries for `dim`.
    ///
    /// `bounds` has `bins - 1` strictly increasing entries; the outer bins extend to
    /// negative and positive infinity.
    pub fn set_boundaries(&mut self, dim: usize, bounds: &[f64]) -> Result<()> {
        self.check_dim(dim)?;
        validate_boundaries(dim, bounds)?;

        let n = bounds.len();
        let mut half_gaps: Vec<f64> = bounds.windows(2).map(|w| (w[1] - w[0]) / 2.0).collect();
        if n > 0 {
            let last = match self.policy {
                OuterShiftPolicy::Unshifted => 0.0,
                OuterShiftPolicy::ReuseAdjacentGap => match half_gaps.last() {
                    Some(&gap) => gap,
                    None if self.half_width == 0 => 0.0,
                    None => return Err(Error::NoAdjacentGap { dim }),
                },
            };
            half_gaps.push(last);
        }

        self.install(dim, bounds, &half_gaps);
        Ok(())
    }

    /// Split `[min, max)` into `bins` equal intervals along `dim`.
    ///
    /// All boundaries are one bin width apart, so every boundary (including a lone
    /// one) shifts by fractions of half that width.
    pub fn set_equal_interval(&mut self, dim: usize, bins: usize, min: f64, max: f64) -> Result<()> {
        self.check_dim(dim)?;
        if bins == 0 {
            return Err(Error::ZeroBins { dim });
        }
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(Error::InvalidRange { dim, min, max });
        }

        let width = (max - min) / bins as f64;
        let bounds: Vec<f64> = (1..bins).map(|i| min + i as f64 * width).collect();
        validate_boundaries(dim, &bounds)?;

        let mut half_gaps = vec![width / 2.0; bounds.len()];
        if self.policy == OuterShiftPolicy::Unshifted {
            if let Some(last) = half_gaps.last_mut() {
                *last = 0.0;
            }
        }

        self.install(dim, &bounds, &half_gaps);
        Ok(())
    }

    /// Write the bin coordinate of `point` under `shift` into `coords`.
    ///
    /// Returns `false` when some dimension cannot be classified, in which case the
    /// content of `coords` is unspecified.
    pub fn locate(&self, point: &[f64], shift: usize, coords: &mut Vec<u32>) -> bool {
        coords.clear();
        for (dim, &value) in point.iter().enumerate() {
            let Some(bounds) = self.boundaries(dim, shift) else {
                return false;
            };
            match locate_bin(bounds, value) {
                Some(bin) => coords.push(bin),
                None => return false,
            }
        }
        true
    }

    fn check_dim(&self, dim: usize) -> Result<()> {
        if dim >= self.dims() {
            return Err(Error::DimensionOutOfRange {
                dim,
                dims: self.dims(),
            });
        }
        Ok(())
    }

    fn install(&mut self, dim: usize, bounds: &[f64], half_gaps: &[f64]) {
        let h = self.half_width as f64;
        let shifted: Vec<Vec<f64>> = (0..self.num_shifts())
            .map(|shift| {
                let k = shift as f64 - h;
                bounds
                    .iter()
                    .zip(half_gaps)
                    .map(|(&b, &gap)| b + k * gap / (h + 1.0))
                    .collect()
            })
            .collect();

        debug!(
            dim,
            bins = bounds.len() + 1,
            shifts = shifted.len(),
            "configured binning"
        );
        self.boundaries[dim] = Some(shifted);
    }
}

fn validate_boundaries(dim: usize, bounds: &[f64]) -> Result<()> {
    if let Some(index) = bounds.iter().position(|b| !b.is_finite()) {
        return Err(Error::NonFiniteBoundary { dim, index });
    }
    if let Some(i) = bounds.windows(2).position(|w| w[1] <= w[0]) {
        return Err(Error::NonIncreasingBoundaries { dim, index: i + 1 });
    }
    Ok(())
}

/// Locate `value` among `bounds` by linear probe.
///
/// Bin 0 is `(-inf, bounds[0])`, bin `b` is `[bounds[b-1], bounds[b])` and the last bin
/// is `[bounds[last], inf)`. Shifted boundaries need not be monotone, so a value may
/// match no interval at all; NaN never matches.
pub fn locate_bin(bounds: &[f64], value: f64) -> Option<u32> {
    let Some(&first) = bounds.first() else {
        return (!value.is_nan()).then_some(0);
    };
    if value < first {
        return Some(0);
    }
    for b in 1..bounds.len() {
        if bounds[b - 1] <= value && value < bounds[b] {
            return Some(b as u32);
        }
    }
    if value >= bounds[bounds.len() - 1] {
        return Some(bounds.len() as u32);
    }
    None
}
