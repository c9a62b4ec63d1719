//! Sweep evaluator - reruns the cost model across parameter grids.
//!
//! Every sweep goes through [`sweep`], which clones the base scenario per grid
//! point, applies the axis overrides and calls [`cost_model::compute`]. The
//! three chart series are thin wrappers that choose axes and reduce each
//! result to the value the chart needs.

use serde::{Serialize, Serializer};

use crate::config::{ModelConstants, SweepSettings};
use crate::cost_model;
use crate::model::{ScenarioResult, ScenarioState, VehiclePairRecord};

use super::{SweepAxis, SweepField, SweepGrid, point_state};

/// Evaluate `eval` at every point of the grid spanned by `axes`.
///
/// Axis `i` is dimension `i` of the returned grid. The base state is never
/// modified.
pub fn sweep<T, F>(base: &ScenarioState, axes: &[SweepAxis], eval: F) -> SweepGrid<T>
where
    T: Send,
    F: Fn(&ScenarioState) -> T + Sync,
{
    let shape: Vec<usize> = axes.iter().map(SweepAxis::len).collect();
    let at = |indices: &[usize]| eval(&point_state(base, axes, indices));

    #[cfg(feature = "parallel")]
    {
        SweepGrid::par_from_fn(shape, at)
    }
    #[cfg(not(feature = "parallel"))]
    {
        SweepGrid::from_fn(shape, at)
    }
}

/// Run the cost model at every grid point
pub fn sweep_results(
    pair: &VehiclePairRecord,
    base: &ScenarioState,
    axes: &[SweepAxis],
    constants: &ModelConstants,
) -> SweepGrid<ScenarioResult> {
    sweep(base, axes, |state| cost_model::compute(pair, state, constants))
}

/// Payback capped for display, or `None` when there is no payback.
///
/// `None` is a gap marker and is never replaced by the cap or by zero.
pub fn capped_payback(result: &ScenarioResult, cap: f64) -> Option<f64> {
    result.payback.capped(cap).years()
}

/// Payback against home charging share
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareCurve {
    /// Home charging share at each point (%)
    pub shares: Vec<f64>,
    /// Capped payback years, `None` where there is no payback
    pub payback: Vec<Option<f64>>,
}

/// Payback over home charging share (rows) and annual distance (columns)
#[derive(Debug, Clone, PartialEq)]
pub struct PaybackMap {
    pub shares: Vec<f64>,
    pub km: Vec<f64>,
    /// Shape `[shares.len(), km.len()]`
    pub payback: SweepGrid<Option<f64>>,
}

impl PaybackMap {
    pub fn get(&self, share_idx: usize, km_idx: usize) -> Option<f64> {
        self.payback.get(&[share_idx, km_idx]).copied().flatten()
    }

    /// Payback row for one home share value
    pub fn row(&self, share_idx: usize) -> Option<&[Option<f64>]> {
        self.payback.row(share_idx)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<f64>]> {
        (0..self.shares.len()).filter_map(|i| self.row(i))
    }
}

impl Serialize for PaybackMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Nested<'a> {
            shares: &'a [f64],
            km: &'a [f64],
            payback: Vec<&'a [Option<f64>]>,
        }

        Nested {
            shares: &self.shares,
            km: &self.km,
            payback: self.rows().collect(),
        }
        .serialize(serializer)
    }
}

/// Cumulative net position by year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub years: Vec<u32>,
    /// `-upfront + annual_savings * year`
    pub net: Vec<f64>,
}

impl Projection {
    /// First whole year in which the net position is no longer negative
    pub fn break_even_year(&self) -> Option<u32> {
        self.years
            .iter()
            .zip(&self.net)
            .find(|&(_, &net)| net >= 0.0)
            .map(|(&year, _)| year)
    }
}

/// Payback as home charging share varies, all else held at `base`
pub fn share_sweep(
    pair: &VehiclePairRecord,
    base: &ScenarioState,
    constants: &ModelConstants,
    settings: &SweepSettings,
) -> ShareCurve {
    let cap = settings.clamped().payback_cap;
    let axis = SweepAxis::from_range(SweepField::HomeShare, &settings.curve_share);
    tracing::debug!(points = axis.len(), "Running share sweep");

    let grid = sweep(base, std::slice::from_ref(&axis), |state| {
        capped_payback(&cost_model::compute(pair, state, constants), cap)
    });

    ShareCurve {
        shares: axis.values,
        payback: grid.data().to_vec(),
    }
}

/// Payback over home charging share and annual distance
pub fn grid_sweep(
    pair: &VehiclePairRecord,
    base: &ScenarioState,
    constants: &ModelConstants,
    settings: &SweepSettings,
) -> PaybackMap {
    let cap = settings.clamped().payback_cap;
    let axes = [
        SweepAxis::from_range(SweepField::HomeShare, &settings.grid_share),
        SweepAxis::from_range(SweepField::AnnualKm, &settings.grid_km),
    ];
    tracing::debug!(
        rows = axes[0].len(),
        cols = axes[1].len(),
        "Running grid sweep"
    );

    let payback = sweep(base, &axes, |state| {
        capped_payback(&cost_model::compute(pair, state, constants), cap)
    });

    let [shares, km] = axes;
    PaybackMap {
        shares: shares.values,
        km: km.values,
        payback,
    }
}

/// Cumulative net position for years `0..=horizon_years`.
///
/// Produced whether or not there is a payback, so an ongoing loss is visible.
/// The horizon is limited to [`SweepSettings::MAX_HORIZON_YEARS`].
pub fn projection(result: &ScenarioResult, horizon_years: u32) -> Projection {
    let horizon_years = horizon_years.min(SweepSettings::MAX_HORIZON_YEARS);
    let years: Vec<u32> = (0..=horizon_years).collect();
    let net = years.iter().map(|&y| result.net_position_at(y)).collect();
    Projection { years, net }
}

/// Headline result plus all three chart series for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioAnalysis {
    pub result: ScenarioResult,
    pub curve: ShareCurve,
    pub map: PaybackMap,
    pub projection: Projection,
}

/// Compute the headline result and every sweep for one scenario
pub fn analyze(
    pair: &VehiclePairRecord,
    state: &ScenarioState,
    constants: &ModelConstants,
    settings: &SweepSettings,
) -> ScenarioAnalysis {
    let result = cost_model::compute(pair, state, constants);
    ScenarioAnalysis {
        result,
        curve: share_sweep(pair, state, constants, settings),
        map: grid_sweep(pair, state, constants, settings),
        projection: projection(&result, settings.horizon_years),
    }
}
