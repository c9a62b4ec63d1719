use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

use evpayback_core::VehiclePairCatalog;
use evpayback_core::analysis::{grid_sweep, projection, share_sweep};
use evpayback_core::codec::{self, Params};
use evpayback_core::config::{ModelConstants, SweepSettings};
use evpayback_core::cost_model;
use evpayback_core::model::{ScenarioState, VehiclePairRecord};

use crate::report::{self, Evaluation, OutputFormat};
use crate::settings::Settings;

/// Loaded catalog and settings, ready to evaluate scenarios
pub struct App {
    settings: Settings,
    catalog: VehiclePairCatalog,
    constants: ModelConstants,
}

impl App {
    pub fn new(settings: Settings, catalog: VehiclePairCatalog) -> Self {
        let catalog = match &settings.default_pair {
            Some(id) => match catalog.clone().with_default(id.as_str()) {
                Ok(with_default) => with_default,
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring configured default pair");
                    catalog
                }
            },
            None => catalog,
        };

        Self {
            settings,
            catalog,
            constants: ModelConstants::default(),
        }
    }

    /// Load settings and the catalog from the data directory.
    ///
    /// A missing or invalid catalog is fatal; settings problems fall back to defaults.
    pub fn with_data_dir(data_dir: &Path, catalog_override: Option<PathBuf>) -> Result<Self> {
        let settings = Settings::load_or_default(data_dir);
        let catalog_path = catalog_override.unwrap_or_else(|| settings.catalog_path(data_dir));

        let json = std::fs::read_to_string(&catalog_path)
            .wrap_err_with(|| format!("Failed to load {}", catalog_path.display()))?;
        let catalog = VehiclePairCatalog::from_json_str(&json)
            .wrap_err_with(|| format!("Invalid catalog {}", catalog_path.display()))?;

        tracing::info!(
            path = %catalog_path.display(),
            pairs = catalog.len(),
            "Catalog loaded"
        );

        Ok(Self::new(settings, catalog))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &VehiclePairCatalog {
        &self.catalog
    }

    fn sweep_settings(&self) -> SweepSettings {
        self.settings.sweep_settings()
    }

    /// Decode a scenario from a query string plus `key=value` overrides.
    ///
    /// Overrides replace query values; among overrides the last one wins.
    /// Unknown pair ids are replaced by the catalog's fallback pair.
    pub fn scenario(&self, query: Option<&str>, overrides: &[(String, String)]) -> ScenarioState {
        let mut params: Params = query.map(codec::parse_query).unwrap_or_default();
        for (key, value) in overrides {
            params.insert(key.clone(), value.clone());
        }

        let defaults = ScenarioState::default().with_pair(self.catalog.default_id().clone());
        let state = codec::decode(&params, &defaults);

        let resolved = self.catalog.resolve_pair_id(&state.pair_id).clone();
        if resolved != state.pair_id {
            tracing::warn!(requested = %state.pair_id, using = %resolved, "Unknown vehicle pair");
        }
        state.with_pair(resolved)
    }

    fn pair(&self, state: &ScenarioState) -> &VehiclePairRecord {
        self.catalog.resolve(&state.pair_id)
    }

    pub fn evaluate(
        &self,
        state: &ScenarioState,
        format: OutputFormat,
        out: &mut impl Write,
    ) -> Result<()> {
        let pair = self.pair(state);
        let result = cost_model::compute(pair, state, &self.constants);
        tracing::debug!(
            pair = %pair.id,
            annual_savings = result.annual_savings,
            "Evaluated scenario"
        );

        let cap = self.sweep_settings().payback_cap;
        let evaluation = Evaluation::new(pair, state, result, cap);
        match format {
            OutputFormat::Text => report::write_evaluation(out, &evaluation)?,
            OutputFormat::Json => report::write_json(out, &evaluation)?,
        }
        Ok(())
    }

    pub fn curve(
        &self,
        state: &ScenarioState,
        format: OutputFormat,
        out: &mut impl Write,
    ) -> Result<()> {
        let settings = self.sweep_settings();
        let curve = share_sweep(self.pair(state), state, &self.constants, &settings);
        match format {
            OutputFormat::Text => report::write_curve(out, &curve)?,
            OutputFormat::Json => report::write_json(out, &curve)?,
        }
        Ok(())
    }

    pub fn map(
        &self,
        state: &ScenarioState,
        format: OutputFormat,
        out: &mut impl Write,
    ) -> Result<()> {
        let settings = self.sweep_settings();
        let map = grid_sweep(self.pair(state), state, &self.constants, &settings);
        match format {
            OutputFormat::Text => report::write_map(out, &map)?,
            OutputFormat::Json => report::write_json(out, &map)?,
        }
        Ok(())
    }

    pub fn projection(
        &self,
        state: &ScenarioState,
        format: OutputFormat,
        out: &mut impl Write,
    ) -> Result<()> {
        let result = cost_model::compute(self.pair(state), state, &self.constants);
        let series = projection(&result, self.sweep_settings().horizon_years);
        match format {
            OutputFormat::Text => report::write_projection(out, &series)?,
            OutputFormat::Json => report::write_json(out, &series)?,
        }
        Ok(())
    }

    /// Share link for the scenario, based on the configured page URL
    pub fn link(
        &self,
        state: &ScenarioState,
        format: OutputFormat,
        out: &mut impl Write,
    ) -> Result<()> {
        let url = codec::share_url(&self.settings.share_base_url, state);
        match format {
            OutputFormat::Text => writeln!(out, "{url}")?,
            OutputFormat::Json => {
                report::write_json(out, &serde_json::json!({ "url": url }))?;
            }
        }
        Ok(())
    }

    pub fn pairs(&self, format: OutputFormat, out: &mut impl Write) -> Result<()> {
        match format {
            OutputFormat::Text => report::write_pairs(out, &self.catalog)?,
            OutputFormat::Json => report::write_json(out, &self.catalog.pairs())?,
        }
        Ok(())
    }
}
