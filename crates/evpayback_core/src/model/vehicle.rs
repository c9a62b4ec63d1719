//! Vehicle comparison records
//!
//! A record pairs one electric vehicle with a combustion or hybrid comparator,
//! using certified label consumption figures.

use serde::{Deserialize, Serialize};

use super::ids::PairId;

/// One EV-versus-comparator entry from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePairRecord {
    pub id: PairId,
    /// Human readable label, e.g. "BYD Atto 3 vs Toyota Corolla Cross Hybrid"
    pub label: String,
    /// EV label consumption (kWh per 100 km, battery side)
    pub ev_kwh_per_100km: f64,
    /// Comparator label consumption (L per 100 km)
    pub ice_l_per_100km: f64,
    /// Upfront price premium of the EV over the comparator.
    /// Zero or negative when the EV is cheaper to buy.
    pub upfront_premium_aud: f64,
}

impl VehiclePairRecord {
    pub fn new(
        id: impl Into<PairId>,
        label: impl Into<String>,
        ev_kwh_per_100km: f64,
        ice_l_per_100km: f64,
        upfront_premium_aud: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ev_kwh_per_100km,
            ice_l_per_100km,
            upfront_premium_aud,
        }
    }

    /// Reason this record cannot be used by the cost model, if any.
    pub fn validation_error(&self) -> Option<&'static str> {
        if !self.ev_kwh_per_100km.is_finite() || self.ev_kwh_per_100km < 0.0 {
            return Some("EV consumption must be a non-negative number");
        }
        if !self.ice_l_per_100km.is_finite() || self.ice_l_per_100km < 0.0 {
            return Some("comparator consumption must be a non-negative number");
        }
        if !self.upfront_premium_aud.is_finite() {
            return Some("upfront premium must be a finite number");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_premium_is_valid() {
        let pair = VehiclePairRecord::new("cheap_ev", "Cheap EV", 14.0, 6.5, -2_000.0);
        assert_eq!(pair.validation_error(), None);
    }

    #[test]
    fn test_negative_consumption_is_rejected() {
        let pair = VehiclePairRecord::new("bad", "Bad", -1.0, 6.5, 5_000.0);
        assert!(pair.validation_error().is_some());

        let pair = VehiclePairRecord::new("bad", "Bad", 15.0, f64::NAN, 5_000.0);
        assert!(pair.validation_error().is_some());
    }
}
