//! Tests for the chart series
//!
//! These tests verify:
//! - Axis shapes of the payback curve and payback map
//! - Capping and gap handling for undefined paybacks
//! - Cross-consistency between sweeps sharing the cost model
//! - The cumulative projection, including the no-payback case

use super::{assert_close, reference_pair};
use crate::analysis::{
    SweepAxis, SweepField, analyze, capped_payback, grid_sweep, projection, share_sweep, sweep,
    sweep_results,
};
use crate::config::{AxisRange, ModelConstants, SweepSettings};
use crate::cost_model::compute;
use crate::model::{ScenarioState, VehiclePairRecord};

fn base_state() -> ScenarioState {
    ScenarioState::default().with_pair("reference")
}

/// Share sweep covers 0..=100 in steps of 5
#[test]
fn test_share_sweep_axis() {
    let curve = share_sweep(
        &reference_pair(),
        &base_state(),
        &ModelConstants::default(),
        &SweepSettings::default(),
    );

    assert_eq!(curve.shares.len(), 21);
    assert_eq!(curve.payback.len(), 21);
    assert_eq!(curve.shares[16], 80.0);

    // The 80% point is the reference scenario
    assert_close(curve.payback[16].unwrap(), 10_000.0 / 948.75);
}

/// Payback map is 21 share rows by 11 distance columns
#[test]
fn test_grid_sweep_shape() {
    let map = grid_sweep(
        &reference_pair(),
        &base_state(),
        &ModelConstants::default(),
        &SweepSettings::default(),
    );

    assert_eq!(map.shares.len(), 21);
    assert_eq!(map.km.len(), 11);
    assert_eq!(map.payback.shape(), &[21, 11]);
    assert_eq!(map.km.first(), Some(&10_000.0));
    assert_eq!(map.km.last(), Some(&20_000.0));
    assert_eq!(map.rows().count(), 21);
}

/// More driving pays back sooner when savings are positive
#[test]
fn test_grid_sweep_more_km_pays_back_sooner() {
    let settings = SweepSettings {
        payback_cap: 100.0,
        ..Default::default()
    };
    let map = grid_sweep(
        &reference_pair(),
        &base_state(),
        &ModelConstants::default(),
        &settings,
    );

    let row = map.row(20).unwrap();
    for pair in row.windows(2) {
        assert!(pair[1].unwrap() < pair[0].unwrap(), "{row:?}");
    }
}

/// Paybacks above the cap are reported as the cap
#[test]
fn test_payback_is_capped() {
    // Expensive EV: payback well above 15 years everywhere
    let pair = VehiclePairRecord::new("pricey", "Pricey", 15.0, 6.0, 60_000.0);
    let settings = SweepSettings::default();

    let curve = share_sweep(&pair, &base_state(), &ModelConstants::default(), &settings);
    assert!(curve.payback.iter().all(|p| *p == Some(15.0)), "{curve:?}");

    let map = grid_sweep(&pair, &base_state(), &ModelConstants::default(), &settings);
    assert!(map.payback.data().iter().all(|p| *p == Some(15.0)));
}

/// The cap is configuration, not a constant of the sweep
#[test]
fn test_payback_cap_is_configurable() {
    let pair = VehiclePairRecord::new("pricey", "Pricey", 15.0, 6.0, 60_000.0);
    let settings = SweepSettings {
        payback_cap: 40.0,
        ..Default::default()
    };
    let curve = share_sweep(&pair, &base_state(), &ModelConstants::default(), &settings);
    assert!(curve.payback.iter().flatten().all(|&p| p > 15.0 && p <= 40.0));
}

/// A negative cap falls back to the default instead of flattening every payback
#[test]
fn test_unusable_payback_cap_falls_back() {
    let pair = VehiclePairRecord::new("pricey", "Pricey", 15.0, 6.0, 60_000.0);
    let settings = SweepSettings {
        payback_cap: -5.0,
        ..Default::default()
    };
    let curve = share_sweep(&pair, &base_state(), &ModelConstants::default(), &settings);
    assert!(curve.payback.iter().all(|p| *p == Some(15.0)), "{curve:?}");
}

/// Undefined paybacks stay gaps, never the cap or zero
#[test]
fn test_undefined_payback_is_a_gap() {
    // Cheap petrol: only heavy home charging at cheap power saves money
    let state = ScenarioState {
        petrol: 0.9,
        maint: 0.0,
        home_price: 10.0,
        public_price: 80.0,
        ..base_state()
    };
    let curve = share_sweep(
        &reference_pair(),
        &state,
        &ModelConstants::default(),
        &SweepSettings::default(),
    );

    assert_eq!(curve.payback[0], None);
    assert!(curve.payback[20].is_some());

    let map = grid_sweep(
        &reference_pair(),
        &state,
        &ModelConstants::default(),
        &SweepSettings::default(),
    );
    assert!(map.row(0).unwrap().iter().all(Option::is_none));
    assert!(map.row(20).unwrap().iter().all(Option::is_some));
}

/// Grid row at 0% home share matches the curve at 0% for the base distance
#[test]
fn test_grid_and_curve_agree() {
    let pair = reference_pair();
    let settings = SweepSettings {
        payback_cap: 1_000.0,
        ..Default::default()
    };
    let base = base_state();
    let curve = share_sweep(&pair, &base, &ModelConstants::default(), &settings);
    let map = grid_sweep(&pair, &base, &ModelConstants::default(), &settings);

    let km_idx = map
        .km
        .iter()
        .position(|&km| km == f64::from(base.annual_km))
        .expect("base distance on the grid");

    for (share_idx, share) in map.shares.iter().enumerate() {
        let curve_idx = curve.shares.iter().position(|s| s == share).unwrap();
        assert_eq!(
            map.get(share_idx, km_idx),
            curve.payback[curve_idx],
            "share {share}"
        );
    }
    assert_eq!(map.get(0, km_idx), curve.payback[0]);
}

/// Sweeps never mutate their base state
#[test]
fn test_sweep_leaves_base_untouched() {
    let base = base_state();
    let snapshot = base.clone();
    let axes = [
        SweepAxis::new(SweepField::Petrol, vec![0.5, 4.0]),
        SweepAxis::new(SweepField::Maint, vec![0.0, 1_000.0]),
    ];
    let grid = sweep_results(&reference_pair(), &base, &axes, &ModelConstants::default());

    assert_eq!(base, snapshot);
    assert_eq!(grid.shape(), &[2, 2]);
    let cheap = grid.get(&[0, 0]).unwrap();
    let dear = grid.get(&[1, 1]).unwrap();
    assert!(dear.annual_savings > cheap.annual_savings);
}

/// A generic sweep point equals a direct computation at that point
#[test]
fn test_generic_sweep_matches_direct_compute() {
    let pair = reference_pair();
    let base = base_state();
    let axes = [SweepAxis::from_range(
        SweepField::HomePrice,
        &AxisRange::new(10.0, 50.0, 10.0),
    )];
    let grid = sweep(&base, &axes, |state| state.home_price);
    assert_eq!(grid.data(), &[10.0, 20.0, 30.0, 40.0, 50.0]);

    let results = sweep_results(&pair, &base, &axes, &ModelConstants::default());
    let direct = compute(
        &pair,
        &ScenarioState {
            home_price: 40.0,
            ..base.clone()
        },
        &ModelConstants::default(),
    );
    assert_eq!(results.get(&[3]), Some(&direct));
}

/// Projection runs from year 0 to the horizon
#[test]
fn test_projection_series() {
    let result = compute(&reference_pair(), &base_state(), &ModelConstants::default());
    let series = projection(&result, 15);

    assert_eq!(series.years, (0..=15).collect::<Vec<_>>());
    assert_eq!(series.net.len(), 16);
    assert_close(series.net[0], -10_000.0);
    assert_close(series.net[15], -10_000.0 + 15.0 * 948.75);
    assert_eq!(series.break_even_year(), Some(11));
}

/// Projection is still produced when there is no payback
#[test]
fn test_projection_without_payback() {
    let state = ScenarioState {
        petrol: 0.9,
        maint: 0.0,
        ..base_state()
    };
    let result = compute(&reference_pair(), &state, &ModelConstants::default());
    assert!(!result.payback.is_defined());

    let series = projection(&result, 15);
    assert_eq!(series.net.len(), 16);
    assert!(series.net.windows(2).all(|w| w[1] < w[0]));
    assert_eq!(series.break_even_year(), None);
}

/// Oversized horizons are limited rather than allocated
#[test]
fn test_projection_horizon_is_limited() {
    let result = compute(&reference_pair(), &base_state(), &ModelConstants::default());
    let series = projection(&result, u32::MAX);
    assert_eq!(series.years.last(), Some(&SweepSettings::MAX_HORIZON_YEARS));
    assert_eq!(series.net.len(), SweepSettings::MAX_HORIZON_YEARS as usize + 1);
}

/// Capping keeps defined values and passes gaps through
#[test]
fn test_capped_payback() {
    let result = compute(&reference_pair(), &base_state(), &ModelConstants::default());
    assert_eq!(capped_payback(&result, 5.0), Some(5.0));
    assert_close(capped_payback(&result, 15.0).unwrap(), 10_000.0 / 948.75);
}

/// Full analysis bundles the headline result with every series
#[test]
fn test_analyze_bundle() {
    let pair = reference_pair();
    let base = base_state();
    let settings = SweepSettings::default();
    let analysis = analyze(&pair, &base, &ModelConstants::default(), &settings);

    assert_eq!(
        analysis.result,
        compute(&pair, &base, &ModelConstants::default())
    );
    assert_eq!(analysis.curve.payback.len(), 21);
    assert_eq!(analysis.map.payback.len(), 21 * 11);
    assert_eq!(analysis.projection.years.len(), 16);

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["map"]["payback"].as_array().unwrap().len(), 21);
    assert_eq!(json["map"]["payback"][0].as_array().unwrap().len(), 11);
    assert!(json["result"]["payback"].is_number());
}
