// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView2;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::estimators::approaches::histogram::{
    probability, AggregatedTable, BinSpec, Joint, Marginal, OuterShiftPolicy, ShiftedHistograms,
    Specific,
};
use crate::estimators::config::{EngineConfig, EqualIntervalBinning};
use crate::estimators::diagnostics::{ConfigSummary, Snapshot};
use crate::estimators::pid::{self, Pid};
use crate::estimators::roles::{Role, RoleVector};
use crate::estimators::traits::GlobalValue;

/// Phase of an [`InfoEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Points are binned into one sparse histogram per shift.
    Accumulating,
    /// The shifts have been collapsed into one averaged table; queries read it.
    Aggregated,
}

#[derive(Debug, Clone)]
enum Table {
    Accumulating(ShiftedHistograms),
    Aggregated(AggregatedTable),
}

/// Averaged-shift histogram estimator of entropy, mutual information and PID.
///
/// Usage follows three phases: configure the binning of every dimension, add data
/// points, then query. The first query (or an explicit [`finalize`](Self::finalize))
/// collapses the per-shift histograms into one averaged table. Adding a point after
/// that discards the table and starts a new accumulation phase.
///
/// Queries take a role vector with one id per dimension: `0` target, `1` first
/// source, `2` second source, `-1` ignored. Two-variable queries (`mutual_info`)
/// relate role `0` to role `1`; `entropy` reads role `0`.
///
/// ```rust
/// use infotheory::estimators::engine::InfoEngine;
///
/// let mut engine = InfoEngine::new(3, 0).unwrap();
/// engine
///     .set_equal_interval_binning(&[2, 2, 2], &[0.0; 3], &[1.0; 3])
///     .unwrap();
/// engine
///     .add_data(&[[0.0, 0.0, 0.0], [0.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 0.0]])
///     .unwrap();
///
/// let pid = engine.pid(&[1, 2, 0]).unwrap();
/// assert!((pid.synergy - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct InfoEngine {
    spec: BinSpec,
    table: Table,
    points_added: u64,
}

impl InfoEngine {
    /// Engine for `dims`-dimensional data averaged over `2 * shift_half_width + 1`
    /// shifted binnings.
    pub fn new(dims: usize, shift_half_width: usize) -> Result<Self> {
        Self::with_policy(dims, shift_half_width, OuterShiftPolicy::default())
    }

    pub fn with_policy(dims: usize, shift_half_width: usize, policy: OuterShiftPolicy) -> Result<Self> {
        if dims == 0 {
            return Err(Error::InvalidDimensionality);
        }
        let spec = BinSpec::new(dims, shift_half_width, policy);
        let table = Table::Accumulating(ShiftedHistograms::new(spec.num_shifts()));
        Ok(Self {
            spec,
            table,
            points_added: 0,
        })
    }

    /// Build an engine and apply the configured binning, if any.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let mut engine =
            Self::with_policy(config.dims, config.shift_half_width, config.outer_shift_policy)?;
        if let Some(binning) = &config.binning {
            engine.apply_binning(binning)?;
        }
        Ok(engine)
    }

    pub fn dims(&self) -> usize {
        self.spec.dims()
    }

    pub fn num_shifts(&self) -> usize {
        self.spec.num_shifts()
    }

    pub fn bin_spec(&self) -> &BinSpec {
        &self.spec
    }

    pub fn state(&self) -> State {
        match self.table {
            Table::Accumulating(_) => State::Accumulating,
            Table::Aggregated(_) => State::Aggregated,
        }
    }

    /// Points accepted in the current accumulation phase.
    pub fn points_added(&self) -> u64 {
        self.points_added
    }

    /*******************
     * Binning
     *******************/

    /// Equal-width bins on every dimension.
    ///
    /// Boundary `i` of dimension `d` sits at `mins[d] + i * (maxs[d] - mins[d]) / bin_counts[d]`.
    /// Nothing changes if any dimension is rejected.
    pub fn set_equal_interval_binning(
        &mut self,
        bin_counts: &[usize],
        mins: &[f64],
        maxs: &[f64],
    ) -> Result<()> {
        self.check_unlocked()?;
        self.check_len("bin counts", bin_counts.len())?;
        self.check_len("mins", mins.len())?;
        self.check_len("maxs", maxs.len())?;

        let mut spec = self.spec.clone();
        for dim in 0..self.dims() {
            spec.set_equal_interval(dim, bin_counts[dim], mins[dim], maxs[dim])?;
        }
        self.spec = spec;
        Ok(())
    }

    pub fn apply_binning(&mut self, binning: &EqualIntervalBinning) -> Result<()> {
        self.set_equal_interval_binning(&binning.bin_counts, &binning.mins, &binning.maxs)
    }

    /// Explicit interior boundaries for dimension `dim` (0-based).
    ///
    /// `boundaries` holds `bins - 1` strictly increasing values; the first bin is
    /// `(-inf, boundaries[0])` and the last `[boundaries[last], inf)`.
    pub fn set_bin_boundaries(&mut self, boundaries: &[f64], dim: usize) -> Result<()> {
        self.check_unlocked()?;
        self.spec.set_boundaries(dim, boundaries)
    }

    /// Explicit interior boundaries for every dimension at once.
    pub fn set_all_bin_boundaries<B: AsRef<[f64]>>(&mut self, boundaries: &[B]) -> Result<()> {
        self.check_unlocked()?;
        self.check_len("boundaries", boundaries.len())?;

        let mut spec = self.spec.clone();
        for (dim, bounds) in boundaries.iter().enumerate() {
            spec.set_boundaries(dim, bounds.as_ref())?;
        }
        self.spec = spec;
        Ok(())
    }

    /*******************
     * Data
     *******************/

    /// Bin one point under every shift.
    ///
    /// Returns `Ok(false)` when the point has the wrong dimensionality; such points
    /// are skipped with a warning and leave the engine untouched. Errors when some
    /// dimension has no binning yet.
    pub fn add_data_point(&mut self, point: &[f64]) -> Result<bool> {
        if let Some(dim) = self.spec.first_unconfigured() {
            return Err(Error::BinningNotSet { dim });
        }
        if point.len() != self.dims() {
            warn!(
                expected = self.dims(),
                got = point.len(),
                "skipping data point with wrong dimensionality"
            );
            return Ok(false);
        }

        if let Table::Aggregated(_) = self.table {
            warn!(
                discarded_points = self.points_added,
                "data added after aggregation; previous data is discarded and a new accumulation phase starts"
            );
            self.table = Table::Accumulating(ShiftedHistograms::new(self.num_shifts()));
            self.points_added = 0;
        }

        if let Table::Accumulating(histograms) = &mut self.table {
            histograms.insert(&self.spec, point);
        }
        self.points_added += 1;
        Ok(true)
    }

    /// Add a batch of points; returns how many were accepted.
    pub fn add_data<P: AsRef<[f64]>>(&mut self, points: &[P]) -> Result<usize> {
        let mut accepted = 0;
        for point in points {
            if self.add_data_point(point.as_ref())? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Add every row of `data` as one point; returns how many were accepted.
    pub fn add_array(&mut self, data: ArrayView2<'_, f64>) -> Result<usize> {
        let mut accepted = 0;
        for row in data.rows() {
            let added = match row.as_slice() {
                Some(point) => self.add_data_point(point)?,
                None => self.add_data_point(&row.to_vec())?,
            };
            if added {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Collapse the shifted histograms into the averaged table, if not done yet.
    ///
    /// The per-shift storage is released. Queries call this implicitly.
    pub fn finalize(&mut self) -> &AggregatedTable {
        if let Table::Accumulating(histograms) = &mut self.table {
            let histograms = std::mem::replace(histograms, ShiftedHistograms::new(0));
            debug!(
                points = histograms.points(),
                populated_bins = histograms.populated_bins(),
                "collapsing shifted histograms"
            );
            self.table = Table::Aggregated(AggregatedTable::from_shifts(histograms));
        }
        match &self.table {
            Table::Aggregated(table) => table,
            Table::Accumulating(_) => unreachable!("table was aggregated above"),
        }
    }

    /// The averaged table, if the engine has been finalized.
    pub fn aggregated(&self) -> Option<&AggregatedTable> {
        match &self.table {
            Table::Aggregated(table) => Some(table),
            Table::Accumulating(_) => None,
        }
    }

    /// Drop all data and any aggregation; the binning is kept and may be changed again.
    pub fn clear_data(&mut self) {
        self.table = Table::Accumulating(ShiftedHistograms::new(self.num_shifts()));
        self.points_added = 0;
    }

    /*******************
     * Probabilities
     *******************/

    /// p(x) over the role-`0` dimensions.
    pub fn marginal_probabilities(&mut self, roles: &[i32]) -> Result<Marginal> {
        let roles = self.parse_roles(roles)?;
        let x = roles.dims_with(Role::Target);
        probability::marginal(self.finalize(), &x)
    }

    /// `(p(x), p(y), p(x,y))` with `x` on role `0` and `y` on role `1`.
    pub fn joint_probabilities(&mut self, roles: &[i32]) -> Result<Joint> {
        let roles = self.parse_roles(roles)?;
        let (x, y) = (roles.dims_with(Role::Target), roles.dims_with(Role::Source1));
        probability::joint(self.finalize(), &x, &y)
    }

    /// Specific probabilities per outcome of role `0`, against role `1`.
    pub fn specific_probabilities(&mut self, roles: &[i32]) -> Result<Specific> {
        let roles = self.parse_roles(roles)?;
        let (x, y) = (roles.dims_with(Role::Target), roles.dims_with(Role::Source1));
        probability::specific(self.finalize(), &x, &y)
    }

    /*******************
     * Information measures
     *******************/

    /// Entropy in bits of the variable formed by the role-`0` dimensions.
    pub fn entropy(&mut self, roles: &[i32]) -> Result<f64> {
        Ok(self.marginal_probabilities(roles)?.global_value())
    }

    /// Mutual information in bits between the role-`0` and role-`1` variables.
    pub fn mutual_info(&mut self, roles: &[i32]) -> Result<f64> {
        Ok(self.joint_probabilities(roles)?.global_value())
    }

    /// Information about role `0` shared by sources `1` and `2`.
    pub fn redundant_info(&mut self, roles: &[i32]) -> Result<f64> {
        let roles = self.parse_roles(roles)?;
        Decomposition::new(&roles).redundancy(self.finalize())
    }

    /// Information about role `0` carried by source `1` but not by source `2`.
    pub fn unique_info(&mut self, roles: &[i32]) -> Result<f64> {
        let roles = self.parse_roles(roles)?;
        let parts = Decomposition::new(&roles);
        let table = self.finalize();
        Ok(parts.mi_1(table)? - parts.redundancy(table)?)
    }

    /// Information about role `0` available only from sources `1` and `2` together.
    pub fn synergy(&mut self, roles: &[i32]) -> Result<f64> {
        Ok(self.pid(roles)?.synergy)
    }

    /// Full two-source decomposition of the information about role `0`.
    pub fn pid(&mut self, roles: &[i32]) -> Result<Pid> {
        let roles = self.parse_roles(roles)?;
        let parts = Decomposition::new(&roles);
        let table = self.finalize();
        Ok(Pid::from_parts(
            parts.total(table)?,
            parts.mi_1(table)?,
            parts.mi_2(table)?,
            parts.redundancy(table)?,
        ))
    }

    /*******************
     * Diagnostics
     *******************/

    pub fn config_summary(&self) -> ConfigSummary {
        let dims = self.dims();
        ConfigSummary {
            dims,
            num_shifts: self.num_shifts(),
            outer_shift_policy: self.spec.policy(),
            bin_counts: (0..dims).map(|d| self.spec.bin_count(d)).collect(),
            boundaries: (0..dims)
                .map(|d| {
                    (0..self.num_shifts())
                        .filter_map(|s| self.spec.boundaries(d, s).map(<[f64]>::to_vec))
                        .collect()
                })
                .collect(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let (populated_bins, aggregated_mass) = match &self.table {
            Table::Accumulating(histograms) => (histograms.populated_bins(), None),
            Table::Aggregated(table) => (table.len(), Some(table.mass())),
        };
        Snapshot {
            points_added: self.points_added,
            populated_bins,
            aggregated: aggregated_mass.is_some(),
            aggregated_mass,
        }
    }

    fn parse_roles(&self, roles: &[i32]) -> Result<RoleVector> {
        RoleVector::parse(roles, self.dims())
    }

    fn check_len(&self, what: &'static str, got: usize) -> Result<()> {
        if got != self.dims() {
            return Err(Error::LengthMismatch {
                what,
                expected: self.dims(),
                got,
            });
        }
        Ok(())
    }

    fn check_unlocked(&self) -> Result<()> {
        let has_data = match &self.table {
            Table::Accumulating(histograms) => histograms.points() > 0,
            Table::Aggregated(table) => !table.is_empty(),
        };
        if has_data {
            return Err(Error::BinningLocked);
        }
        Ok(())
    }
}

/// Dimension groups of a target/two-source query.
struct Decomposition {
    target: Vec<usize>,
    source_1: Vec<usize>,
    source_2: Vec<usize>,
    sources: Vec<usize>,
}

impl Decomposition {
    fn new(roles: &RoleVector) -> Self {
        Self {
            target: roles.dims_with(Role::Target),
            source_1: roles.dims_with(Role::Source1),
            source_2: roles.dims_with(Role::Source2),
            sources: roles.dims_with_any(&[Role::Source1, Role::Source2]),
        }
    }

    fn total(&self, table: &AggregatedTable) -> Result<f64> {
        Ok(probability::joint(table, &self.target, &self.sources)?.global_value())
    }

    fn mi_1(&self, table: &AggregatedTable) -> Result<f64> {
        Ok(probability::joint(table, &self.target, &self.source_1)?.global_value())
    }

    fn mi_2(&self, table: &AggregatedTable) -> Result<f64> {
        Ok(probability::joint(table, &self.target, &self.source_2)?.global_value())
    }

    fn redundancy(&self, table: &AggregatedTable) -> Result<f64> {
        let specific_1 = probability::specific(table, &self.target, &self.source_1)?;
        let specific_2 = probability::specific(table, &self.target, &self.source_2)?;
        Ok(pid::redundancy(&specific_1, &specific_2))
    }
}
