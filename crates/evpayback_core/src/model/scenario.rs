//! Scenario parameters
//!
//! `ScenarioState` is the validated set of assumptions for one cost
//! computation. Every numeric field is kept inside its `FieldRange`; use
//! [`ScenarioState::clamped`] after building one from untrusted input.

use serde::{Deserialize, Serialize};

use super::ids::PairId;

/// Pair shown when no pair is requested or the requested one is unknown
pub const DEFAULT_PAIR_ID: &str = "atto3_vs_corolla_cross_hybrid";

/// Inclusive bounds for one numeric scenario field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp into the range. NaN maps to the lower bound.
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Clamp an integer-valued field
    pub fn clamp_u32(self, value: u32) -> u32 {
        value.clamp(self.min as u32, self.max as u32)
    }

    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Declared bounds for every numeric field of [`ScenarioState`]
pub struct Bounds;

impl Bounds {
    /// km per year
    pub const ANNUAL_KM: FieldRange = FieldRange::new(5_000.0, 50_000.0);
    /// percent of charging done at home
    pub const HOME_SHARE: FieldRange = FieldRange::new(0.0, 100.0);
    /// c/kWh
    pub const HOME_PRICE: FieldRange = FieldRange::new(0.0, 200.0);
    /// c/kWh
    pub const PUBLIC_PRICE: FieldRange = FieldRange::new(0.0, 300.0);
    /// $/L
    pub const PETROL: FieldRange = FieldRange::new(0.5, 4.0);
    /// percent lost between grid and battery
    pub const LOSSES: FieldRange = FieldRange::new(0.0, 30.0);
    /// $/year the EV saves on servicing
    pub const MAINT: FieldRange = FieldRange::new(0.0, 1_000.0);
}

/// Validated inputs for one cost computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioState {
    pub pair_id: PairId,
    /// Annual distance (km)
    pub annual_km: u32,
    /// Home charging share (%)
    pub home_share: u32,
    /// Home electricity price (c/kWh)
    pub home_price: f64,
    /// Public fast charging price (c/kWh)
    pub public_price: f64,
    /// Fuel price ($/L)
    pub petrol: f64,
    /// Charging losses (%)
    pub losses: f64,
    /// Annual servicing saving of the EV ($/year)
    pub maint: f64,
    /// Apply the real-world consumption adjustment
    pub real_world: bool,
}

impl Default for ScenarioState {
    fn default() -> Self {
        Self {
            pair_id: PairId::from(DEFAULT_PAIR_ID),
            annual_km: 15_000,
            home_share: 80,
            home_price: 30.0,
            public_price: 55.0,
            petrol: 1.85,
            losses: 10.0,
            maint: 150.0,
            real_world: false,
        }
    }
}

impl ScenarioState {
    /// Clamp every numeric field into its declared range.
    ///
    /// Total and idempotent: `s.clamped().clamped() == s.clamped()`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            annual_km: Bounds::ANNUAL_KM.clamp_u32(self.annual_km),
            home_share: Bounds::HOME_SHARE.clamp_u32(self.home_share),
            home_price: Bounds::HOME_PRICE.clamp(self.home_price),
            public_price: Bounds::PUBLIC_PRICE.clamp(self.public_price),
            petrol: Bounds::PETROL.clamp(self.petrol),
            losses: Bounds::LOSSES.clamp(self.losses),
            maint: Bounds::MAINT.clamp(self.maint),
            ..self
        }
    }

    /// True if every numeric field lies within its declared range
    pub fn is_within_bounds(&self) -> bool {
        Bounds::ANNUAL_KM.contains(f64::from(self.annual_km))
            && Bounds::HOME_SHARE.contains(f64::from(self.home_share))
            && Bounds::HOME_PRICE.contains(self.home_price)
            && Bounds::PUBLIC_PRICE.contains(self.public_price)
            && Bounds::PETROL.contains(self.petrol)
            && Bounds::LOSSES.contains(self.losses)
            && Bounds::MAINT.contains(self.maint)
    }

    /// Copy of this state pointing at a different pair
    #[must_use]
    pub fn with_pair(self, pair_id: impl Into<PairId>) -> Self {
        Self {
            pair_id: pair_id.into(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_within_bounds() {
        assert!(ScenarioState::default().is_within_bounds());
    }

    #[test]
    fn test_clamped_pulls_every_field_into_range() {
        let state = ScenarioState {
            pair_id: PairId::from("x"),
            annual_km: 1_000,
            home_share: 250,
            home_price: -5.0,
            public_price: 900.0,
            petrol: 0.1,
            losses: f64::NAN,
            maint: 5_000.0,
            real_world: true,
        }
        .clamped();

        assert_eq!(state.annual_km, 5_000);
        assert_eq!(state.home_share, 100);
        assert_eq!(state.home_price, 0.0);
        assert_eq!(state.public_price, 300.0);
        assert_eq!(state.petrol, 0.5);
        assert_eq!(state.losses, 0.0);
        assert_eq!(state.maint, 1_000.0);
        assert!(state.real_world);
        assert!(state.is_within_bounds());
    }

    #[test]
    fn test_field_range_clamp() {
        let range = FieldRange::new(0.5, 4.0);
        assert_eq!(range.clamp(2.0), 2.0);
        assert_eq!(range.clamp(f64::INFINITY), 4.0);
        assert_eq!(range.clamp(f64::NEG_INFINITY), 0.5);
        assert_eq!(range.clamp(f64::NAN), 0.5);
    }
}
