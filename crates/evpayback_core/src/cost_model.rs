//! Running-cost model
//!
//! A closed-form comparison of energy and servicing costs between an EV and
//! its comparator. [`compute`] is pure: the same pair, state and constants
//! always give a bit-identical [`ScenarioResult`].

use crate::config::ModelConstants;
use crate::model::{Payback, ScenarioResult, ScenarioState, VehiclePairRecord};

/// Convert a price in cents to dollars
#[inline]
fn cents_to_dollars(cents: f64) -> f64 {
    cents / 100.0
}

/// Compute running costs and payback for one pair under one scenario.
///
/// Payback is only defined when the annual total saving is strictly
/// positive. A zero or negative premium does not short-circuit this: with no
/// running-cost saving the result is [`Payback::Never`].
pub fn compute(
    pair: &VehiclePairRecord,
    state: &ScenarioState,
    constants: &ModelConstants,
) -> ScenarioResult {
    let mut ev_kwh = pair.ev_kwh_per_100km;
    let mut ice_l = pair.ice_l_per_100km;
    if state.real_world {
        ev_kwh *= constants.ev_real_world_factor;
        ice_l *= constants.ice_real_world_factor;
    }

    let grid_kwh_100 = ev_kwh * (1.0 + state.losses / 100.0);

    let home_share = f64::from(state.home_share) / 100.0;
    let public_share = 1.0 - home_share;
    let weighted_elec = home_share * cents_to_dollars(state.home_price)
        + public_share * cents_to_dollars(state.public_price);

    let ev_cost_100 = grid_kwh_100 * weighted_elec;
    let ice_cost_100 = ice_l * state.petrol;
    let savings_100 = ice_cost_100 - ev_cost_100;

    let annual_energy_savings = savings_100 * (f64::from(state.annual_km) / 100.0);
    let annual_savings = annual_energy_savings + state.maint;

    let upfront = pair.upfront_premium_aud;
    let payback = if annual_savings > 0.0 {
        Payback::Years(upfront / annual_savings)
    } else {
        Payback::Never
    };

    ScenarioResult {
        ev_cost_100,
        ice_cost_100,
        savings_100,
        annual_energy_savings,
        annual_savings,
        upfront,
        payback,
        grid_kwh_100,
        weighted_elec,
    }
}
