//! Fixed model and sweep configuration
//!
//! These values never change at runtime. They are grouped into plain structs
//! and passed explicitly to the cost model and the sweep engine so both stay
//! pure and can be tested with alternative constants.
//!
//! ```ignore
//! use evpayback_core::config::{ModelConstants, SweepSettings};
//!
//! let constants = ModelConstants::default();
//! let settings = SweepSettings {
//!     payback_cap: 40.0,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

fn default_ev_real_world_factor() -> f64 {
    1.10
}

fn default_ice_real_world_factor() -> f64 {
    1.15
}

/// Constants of the cost model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConstants {
    /// Multiplier on EV label consumption when the real-world adjustment is on
    #[serde(default = "default_ev_real_world_factor")]
    pub ev_real_world_factor: f64,
    /// Multiplier on comparator label consumption when the real-world adjustment is on
    #[serde(default = "default_ice_real_world_factor")]
    pub ice_real_world_factor: f64,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            ev_real_world_factor: default_ev_real_world_factor(),
            ice_real_world_factor: default_ice_real_world_factor(),
        }
    }
}

/// Inclusive, evenly stepped axis such as `0..=100` in steps of 5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl AxisRange {
    pub const fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Upper bound on [`step_count`](Self::step_count)
    pub const MAX_POINTS: usize = 10_001;

    /// Number of points on the axis, including both ends when `end` is on the step grid.
    ///
    /// Non-finite bounds, a non-positive step or a reversed range give a single
    /// point at `start`. Very dense axes are truncated to [`MAX_POINTS`](Self::MAX_POINTS).
    pub fn step_count(&self) -> usize {
        let valid = self.start.is_finite()
            && self.end.is_finite()
            && self.step.is_finite()
            && self.step > 0.0
            && self.end >= self.start;
        if !valid {
            return 1;
        }
        // Small tolerance so 0..=100 step 5 yields 21 points despite float error
        let steps = ((self.end - self.start) / self.step + 1e-9).floor();
        if steps >= (Self::MAX_POINTS - 1) as f64 {
            return Self::MAX_POINTS;
        }
        (steps as usize).saturating_add(1)
    }

    /// Generate the axis values, computed from the index to avoid drift
    pub fn values(&self) -> Vec<f64> {
        (0..self.step_count())
            .map(|i| self.start + self.step * i as f64)
            .collect()
    }
}

fn default_payback_cap() -> f64 {
    15.0
}

fn default_share_axis() -> AxisRange {
    AxisRange::new(0.0, 100.0, 5.0)
}

fn default_grid_km_axis() -> AxisRange {
    AxisRange::new(10_000.0, 20_000.0, 1_000.0)
}

fn default_horizon_years() -> u32 {
    15
}

/// Axis definitions and display ceiling for the three sweeps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSettings {
    /// Defined paybacks above this many years are reported as the cap.
    /// Undefined paybacks are never capped.
    #[serde(default = "default_payback_cap")]
    pub payback_cap: f64,
    /// Home share axis of the payback curve (%)
    #[serde(default = "default_share_axis")]
    pub curve_share: AxisRange,
    /// Home share axis (rows) of the payback map (%)
    #[serde(default = "default_share_axis")]
    pub grid_share: AxisRange,
    /// Annual distance axis (columns) of the payback map (km)
    #[serde(default = "default_grid_km_axis")]
    pub grid_km: AxisRange,
    /// Last year of the cumulative projection (year 0 is always included)
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            payback_cap: default_payback_cap(),
            curve_share: default_share_axis(),
            grid_share: default_share_axis(),
            grid_km: default_grid_km_axis(),
            horizon_years: default_horizon_years(),
        }
    }
}

impl SweepSettings {
    /// Longest cumulative projection
    pub const MAX_HORIZON_YEARS: u32 = 100;

    /// Copy with a usable cap and horizon.
    ///
    /// A cap that is not a finite positive number falls back to the default;
    /// the horizon is limited to [`MAX_HORIZON_YEARS`](Self::MAX_HORIZON_YEARS).
    #[must_use]
    pub fn clamped(self) -> Self {
        let payback_cap = if self.payback_cap.is_finite() && self.payback_cap > 0.0 {
            self.payback_cap
        } else {
            default_payback_cap()
        };
        Self {
            payback_cap,
            horizon_years: self.horizon_years.min(Self::MAX_HORIZON_YEARS),
            ..self
        }
    }
}
