//! Cost model results
//!
//! Contains the output of a single cost computation. Results are plain values:
//! they are rebuilt on every call and never persisted.

use serde::{Deserialize, Serialize};

/// Time for running-cost savings to repay the upfront premium.
///
/// `Never` means the EV does not save money to run under the given
/// assumptions. It is a legitimate result, distinct from zero years and from a
/// very long payback. Serializes as a number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Payback {
    Years(f64),
    Never,
}

impl Payback {
    pub fn years(self) -> Option<f64> {
        match self {
            Payback::Years(years) => Some(years),
            Payback::Never => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Payback::Years(_))
    }

    /// Cap a defined payback for display; `Never` passes through untouched.
    #[must_use]
    pub fn capped(self, cap: f64) -> Self {
        match self {
            Payback::Years(years) => Payback::Years(years.min(cap)),
            Payback::Never => Payback::Never,
        }
    }
}

impl From<Option<f64>> for Payback {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Payback::Never, Payback::Years)
    }
}

impl From<Payback> for Option<f64> {
    fn from(value: Payback) -> Self {
        value.years()
    }
}

/// Output of one cost computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// EV running cost per 100 km ($)
    pub ev_cost_100: f64,
    /// Comparator running cost per 100 km ($)
    pub ice_cost_100: f64,
    /// Comparator minus EV cost per 100 km; negative when the EV costs more
    pub savings_100: f64,
    /// Energy cost difference per year ($)
    pub annual_energy_savings: f64,
    /// Energy plus servicing difference per year ($)
    pub annual_savings: f64,
    /// Upfront premium of the EV ($)
    pub upfront: f64,
    pub payback: Payback,
    /// Energy drawn from the grid per 100 km, after charging losses (kWh)
    pub grid_kwh_100: f64,
    /// Charging-mix weighted electricity price ($/kWh)
    pub weighted_elec: f64,
}

impl ScenarioResult {
    /// Net position after `year` years: premium paid up front, savings accrued since.
    pub fn net_position_at(&self, year: u32) -> f64 {
        -self.upfront + self.annual_savings * f64::from(year)
    }
}
