//! EV payback calculation library
//!
//! This crate compares the running costs of an electric vehicle against a
//! combustion or hybrid comparator and works out how long the EV's upfront
//! premium takes to repay. It provides:
//! - A read-only catalog of vehicle pairs
//! - Scenario parameters with mandatory clamping
//! - A permissive share-link codec (flat key/value and query strings)
//! - The closed-form cost model
//! - Parameter sweeps for charts (payback curve, payback map, projection)
//!
//! ```ignore
//! use evpayback_core::{VehiclePairCatalog, codec, cost_model, analysis};
//! use evpayback_core::config::{ModelConstants, SweepSettings};
//! use evpayback_core::model::ScenarioState;
//!
//! let catalog = VehiclePairCatalog::from_json_str(&pairs_json)?;
//! let state = codec::decode_query("?km=12000&home=60", &ScenarioState::default());
//! let pair = catalog.resolve(&state.pair_id);
//!
//! let result = cost_model::compute(pair, &state, &ModelConstants::default());
//! let settings = SweepSettings::default();
//! let curve = analysis::share_sweep(pair, &state, &ModelConstants::default(), &settings);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod catalog;
pub mod codec;
pub mod cost_model;
pub mod error;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use catalog::VehiclePairCatalog;
pub use config::{ModelConstants, SweepSettings};
pub use error::{CatalogError, LookupError};
pub use model::{Payback, ScenarioResult, ScenarioState, VehiclePairRecord};
