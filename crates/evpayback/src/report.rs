//! Report rendering for the command line and JSON output.
//!
//! Text output mirrors the calculator page: three KPI tiles, a summary
//! sentence and one table per chart. JSON output serializes the same data
//! with `serde_json` so it can feed another plotting tool.

use std::io::{self, Write};

use serde::Serialize;

use evpayback_core::VehiclePairCatalog;
use evpayback_core::analysis::{PaybackMap, Projection, ShareCurve};
use evpayback_core::model::{ScenarioResult, ScenarioState, VehiclePairRecord};

use crate::util::format::{format_currency, format_currency_short, format_km, format_years};

/// Output format for every command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One headline figure with its explanatory note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: String,
    pub note: &'static str,
}

/// Payback, annual saving and saving per 100 km
pub fn kpis(result: &ScenarioResult, payback_cap: f64) -> [Kpi; 3] {
    let payback_note = if result.annual_savings <= 0.0 {
        "No running-cost payback under these assumptions."
    } else {
        "Upfront premium repaid through energy + servicing savings."
    };

    [
        Kpi {
            label: "Payback time",
            value: format_years(result.payback.years(), payback_cap),
            note: payback_note,
        },
        Kpi {
            label: "Annual savings",
            value: format_currency_short(result.annual_savings),
            note: "Annual running-cost difference (energy + servicing).",
        },
        Kpi {
            label: "Savings per 100 km",
            value: format_currency(result.savings_100),
            note: "Difference in running cost per 100 km.",
        },
    ]
}

/// One-sentence plain-language summary of a scenario
pub fn summary(state: &ScenarioState, result: &ScenarioResult, payback_cap: f64) -> String {
    let km = format_km(state.annual_km);
    let home = state.home_share;

    if result.annual_savings <= 0.0 {
        format!(
            "With {km} km/year and {home}% home charging, the EV is estimated to cost more \
             to run than the comparator under these assumptions (no payback)."
        )
    } else {
        format!(
            "With {km} km/year and {home}% home charging, the EV is estimated to save about \
             {} per year and pay back the upfront premium in {} years.",
            format_currency_short(result.annual_savings),
            format_years(result.payback.years(), payback_cap),
        )
    }
}

/// Everything shown for a single evaluated scenario
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation<'a> {
    pub pair: &'a VehiclePairRecord,
    pub state: &'a ScenarioState,
    pub result: ScenarioResult,
    pub kpis: [Kpi; 3],
    pub summary: String,
}

impl<'a> Evaluation<'a> {
    pub fn new(
        pair: &'a VehiclePairRecord,
        state: &'a ScenarioState,
        result: ScenarioResult,
        payback_cap: f64,
    ) -> Self {
        Self {
            pair,
            state,
            result,
            kpis: kpis(&result, payback_cap),
            summary: summary(state, &result, payback_cap),
        }
    }
}

/// Write any serializable value as pretty JSON followed by a newline
pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn write_evaluation(out: &mut impl Write, evaluation: &Evaluation<'_>) -> io::Result<()> {
    writeln!(out, "{}", evaluation.pair.label)?;
    writeln!(out)?;
    for kpi in &evaluation.kpis {
        writeln!(out, "{:<20} {:>10}   {}", kpi.label, kpi.value, kpi.note)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", evaluation.summary)
}

/// Gap cells (no payback) are shown as `-`
fn payback_cell(payback: Option<f64>) -> String {
    payback.map_or_else(|| "-".to_string(), |years| format!("{years:.1}"))
}

pub fn write_curve(out: &mut impl Write, curve: &ShareCurve) -> io::Result<()> {
    writeln!(out, "{:>10}  {:>8}", "home %", "years")?;
    for (share, payback) in curve.shares.iter().zip(&curve.payback) {
        writeln!(out, "{share:>10.0}  {:>8}", payback_cell(*payback))?;
    }
    Ok(())
}

/// Rows are home share, columns annual distance in thousands of km
pub fn write_map(out: &mut impl Write, map: &PaybackMap) -> io::Result<()> {
    write!(out, "{:>7}", "home %")?;
    for km in &map.km {
        write!(out, " {:>6}", format!("{:.0}k", km / 1_000.0))?;
    }
    writeln!(out)?;

    for (share, row) in map.shares.iter().zip(map.rows()) {
        write!(out, "{share:>7.0}")?;
        for payback in row {
            write!(out, " {:>6}", payback_cell(*payback))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_projection(out: &mut impl Write, projection: &Projection) -> io::Result<()> {
    writeln!(out, "{:>4}  {:>14}", "year", "net position")?;
    for (year, net) in projection.years.iter().zip(&projection.net) {
        writeln!(out, "{year:>4}  {:>14}", format_currency_short(*net))?;
    }
    match projection.break_even_year() {
        Some(year) => writeln!(out, "Break-even in year {year}."),
        None => writeln!(out, "No break-even within {} years.", projection.years.len() - 1),
    }
}

/// Catalog listing; the fallback pair is marked with `*`
pub fn write_pairs(out: &mut impl Write, catalog: &VehiclePairCatalog) -> io::Result<()> {
    for pair in catalog.pairs() {
        let marker = if &pair.id == catalog.default_id() { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {:<36} {:>5.1} kWh  {:>4.1} L  {:>9}  {}",
            pair.id.as_str(),
            pair.ev_kwh_per_100km,
            pair.ice_l_per_100km,
            format_currency_short(pair.upfront_premium_aud),
            pair.label,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use evpayback_core::analysis::{grid_sweep, projection, share_sweep};
    use evpayback_core::config::{ModelConstants, SweepSettings};
    use evpayback_core::cost_model::compute;

    fn reference_pair() -> VehiclePairRecord {
        VehiclePairRecord::new("reference", "Reference EV vs Reference ICE", 15.0, 6.0, 10_000.0)
    }

    fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_with_payback() {
        let state = ScenarioState::default();
        let result = compute(&reference_pair(), &state, &ModelConstants::default());
        assert_eq!(
            summary(&state, &result, 15.0),
            "With 15,000 km/year and 80% home charging, the EV is estimated to save about \
             $949 per year and pay back the upfront premium in 11 years."
        );
    }

    #[test]
    fn test_summary_without_payback() {
        let state = ScenarioState {
            petrol: 0.9,
            maint: 0.0,
            ..Default::default()
        };
        let result = compute(&reference_pair(), &state, &ModelConstants::default());
        let text = summary(&state, &result, 15.0);
        assert!(text.ends_with("(no payback)."), "{text}");
    }

    #[test]
    fn test_kpis() {
        let state = ScenarioState::default();
        let result = compute(&reference_pair(), &state, &ModelConstants::default());
        let [payback, annual, per100] = kpis(&result, 15.0);

        assert_eq!(payback.value, "11");
        assert_eq!(
            payback.note,
            "Upfront premium repaid through energy + servicing savings."
        );
        assert_eq!(annual.value, "$949");
        assert!(per100.value.starts_with("$5.3"), "{}", per100.value);
    }

    #[test]
    fn test_kpis_without_payback() {
        let state = ScenarioState {
            petrol: 0.9,
            maint: 0.0,
            ..Default::default()
        };
        let result = compute(&reference_pair(), &state, &ModelConstants::default());
        let [payback, annual, _] = kpis(&result, 15.0);

        assert_eq!(payback.value, "N/A");
        assert_eq!(
            payback.note,
            "No running-cost payback under these assumptions."
        );
        assert!(annual.value.starts_with("-$"));
    }

    #[test]
    fn test_write_curve_marks_gaps() {
        let state = ScenarioState {
            petrol: 0.9,
            maint: 0.0,
            home_price: 10.0,
            public_price: 80.0,
            ..Default::default()
        };
        let curve = share_sweep(
            &reference_pair(),
            &state,
            &ModelConstants::default(),
            &SweepSettings::default(),
        );
        let text = render(|out| write_curve(out, &curve));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 22);
        assert!(lines[1].trim_end().ends_with('-'), "{}", lines[1]);
        assert!(!lines[21].trim_end().ends_with('-'), "{}", lines[21]);
    }

    #[test]
    fn test_write_map_shape() {
        let map = grid_sweep(
            &reference_pair(),
            &ScenarioState::default(),
            &ModelConstants::default(),
            &SweepSettings::default(),
        );
        let text = render(|out| write_map(out, &map));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 22);
        assert!(lines[0].contains("10k") && lines[0].contains("20k"));
        assert_eq!(lines[1].split_whitespace().count(), 12);
    }

    #[test]
    fn test_write_projection_break_even() {
        let result = compute(
            &reference_pair(),
            &ScenarioState::default(),
            &ModelConstants::default(),
        );
        let text = render(|out| write_projection(out, &projection(&result, 15)));

        assert!(text.contains("-$10,000"));
        assert!(text.ends_with("Break-even in year 11.\n"), "{text}");
    }

    #[test]
    fn test_evaluation_json() {
        let pair = reference_pair();
        let state = ScenarioState::default();
        let result = compute(&pair, &state, &ModelConstants::default());
        let evaluation = Evaluation::new(&pair, &state, result, 15.0);

        let text = render(|out| write_json(out, &evaluation));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["pair"]["id"], "reference");
        assert_eq!(json["kpis"][0]["value"], "11");
        assert_eq!(json["state"]["annual_km"], 15_000);
        assert!(json["summary"].as_str().unwrap().starts_with("With 15,000"));
    }
}
