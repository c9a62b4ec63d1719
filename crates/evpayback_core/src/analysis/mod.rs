//! Parameter sweep sensitivity analysis module.
//!
//! Every sweep reruns the one cost model over a grid built from axis
//! definitions. Each [`SweepAxis`] names the [`SweepField`] it varies and the
//! values it takes; N axes span an N-dimensional [`SweepGrid`].
//!
//! ```ignore
//! use evpayback_core::analysis::{SweepAxis, SweepField, sweep_results};
//!
//! let axes = [
//!     SweepAxis::new(SweepField::Petrol, vec![1.5, 2.0, 2.5]),
//!     SweepAxis::new(SweepField::HomePrice, vec![20.0, 30.0, 40.0]),
//! ];
//! let grid = sweep_results(&pair, &state, &axes, &ModelConstants::default());
//! let annual = grid.get(&[2, 0]).map(|r| r.annual_savings);
//! ```
//!
//! # Chart series
//!
//! - [`share_sweep`] - payback against home charging share
//! - [`grid_sweep`] - payback over home charging share and annual distance
//! - [`projection`] - cumulative net position by year
//!
//! Payback values are capped for display. A missing payback stays `None` in
//! every series so charts can render it as a gap.

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
