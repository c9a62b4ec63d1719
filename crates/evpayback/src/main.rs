#[cfg(feature = "native")]
use clap::{Parser, Subcommand};
#[cfg(feature = "native")]
use evpayback::{App, OutputFormat, init_logging};
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "evpayback")]
#[command(about = "Compare EV and petrol running costs and estimate payback")]
struct Args {
    /// Path to the data directory (default: ~/.evpayback/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Vehicle pair catalog (default: pairs.json in the data directory)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Scenario as a share-link query string or full URL
    #[arg(short, long, global = true)]
    query: Option<String>,

    /// Override one scenario parameter, e.g. `--set km=20000` (repeatable)
    #[arg(short, long = "set", value_parser = parse_key_val, global = true)]
    set: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[cfg(feature = "native")]
#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Headline KPIs and summary (default)
    Evaluate,
    /// Payback against home charging share
    Curve,
    /// Payback over home charging share and annual distance
    Map,
    /// Cumulative net position by year
    Projection,
    /// Share link for the scenario
    Link,
    /// List the vehicle pairs in the catalog
    Pairs,
}

#[cfg(feature = "native")]
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{s}`"))
}

#[cfg(feature = "native")]
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".evpayback")
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let app = App::with_data_dir(&data_dir, args.catalog)?;
    let state = app.scenario(args.query.as_deref(), &args.set);
    let command = args.command.unwrap_or(Command::Evaluate);
    tracing::info!(?command, pair = %state.pair_id, "Running command");

    let mut out = std::io::stdout().lock();
    match command {
        Command::Evaluate => app.evaluate(&state, args.format, &mut out),
        Command::Curve => app.curve(&state, args.format, &mut out),
        Command::Map => app.map(&state, args.format, &mut out),
        Command::Projection => app.projection(&state, args.format, &mut out),
        Command::Link => app.link(&state, args.format, &mut out),
        Command::Pairs => app.pairs(args.format, &mut out),
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in web.rs
    // This main() exists only to satisfy the binary target requirement
    panic!("This binary requires the 'native' feature. Build the library with --features web.");
}
