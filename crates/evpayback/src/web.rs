//! Web entry point for evpayback.
//!
//! A static page fetches `pairs.json`, passes it here together with
//! `window.location.search`, and draws the returned series itself.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use evpayback_core::VehiclePairCatalog;
use evpayback_core::analysis::{ScenarioAnalysis, analyze};
use evpayback_core::codec;
use evpayback_core::config::{ModelConstants, SweepSettings};
use evpayback_core::model::{ScenarioState, VehiclePairRecord};

use crate::report::{Kpi, kpis, summary};

#[derive(Serialize)]
struct WebEvaluation<'a> {
    pair: &'a VehiclePairRecord,
    state: &'a ScenarioState,
    kpis: [Kpi; 3],
    summary: String,
    /// Canonical query string for the share link
    query: String,
    #[serde(flatten)]
    analysis: ScenarioAnalysis,
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Decode `query`, evaluate it against the catalog and return a JSON bundle
/// with the headline result, KPI text, summary and all chart series.
#[wasm_bindgen]
pub fn evaluate_json(catalog_json: &str, query: &str) -> Result<String, JsValue> {
    let catalog = VehiclePairCatalog::from_json_str(catalog_json)
        .map_err(|e| to_js_error(format!("Failed to load pairs.json: {e}")))?;

    let defaults = ScenarioState::default().with_pair(catalog.default_id().clone());
    let decoded = codec::decode_query(query, &defaults);
    let resolved = catalog.resolve_pair_id(&decoded.pair_id).clone();
    let state = decoded.with_pair(resolved);
    let pair = catalog.resolve(&state.pair_id);

    let settings = SweepSettings::default();
    let analysis = analyze(pair, &state, &ModelConstants::default(), &settings);
    tracing::debug!(pair = %pair.id, "Evaluated scenario");

    let evaluation = WebEvaluation {
        pair,
        state: &state,
        kpis: kpis(&analysis.result, settings.payback_cap),
        summary: summary(&state, &analysis.result, settings.payback_cap),
        query: codec::encode_query(&state),
        analysis,
    };
    serde_json::to_string(&evaluation).map_err(to_js_error)
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    crate::init_logging_web();

    tracing::info!("EV payback calculator web version starting");
    Ok(())
}
