//! Integration tests for the payback engine
//!
//! Tests are organized by topic:
//! - `cost_model` - The running-cost formula and payback rules
//! - `codec` - Share-link decoding, encoding and round trips
//! - `sweeps` - Payback curve, payback map and projection series
//! - `properties` - Property-based checks across random scenarios

mod sweeps;

use crate::model::VehiclePairRecord;

pub(crate) const EPS: f64 = 1e-9;

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPS,
        "expected {expected}, got {actual}"
    );
}

/// 15 kWh/100km EV against a 6 L/100km comparator, $10,000 premium
pub(crate) fn reference_pair() -> VehiclePairRecord {
    VehiclePairRecord::new("reference", "Reference EV vs Reference ICE", 15.0, 6.0, 10_000.0)
}
