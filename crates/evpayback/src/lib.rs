//! EV payback calculator front end
//!
//! Loads the vehicle pair catalog, decodes a scenario from a share-link query
//! or `key=value` overrides and reports the result using `evpayback_core`:
//! - Headline KPIs and a plain-language summary
//! - Payback curve, payback map and cumulative projection as tables or JSON
//! - Share links and a catalog listing
//!
//! With the `web` feature the same evaluation is exported to JavaScript.

// ============================================================================
// Front-end modules
// ============================================================================

pub mod app;
pub mod report;
pub mod settings;
pub mod util;

#[cfg(feature = "native")]
pub mod logging;

#[cfg(feature = "web")]
pub mod web;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use report::OutputFormat;
pub use settings::Settings;

#[cfg(feature = "native")]
pub use logging::init_logging;

/// Route `tracing` output to the browser console
#[cfg(feature = "web")]
pub fn init_logging_web() {
    tracing_wasm::set_as_global_default();
}
