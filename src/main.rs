use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use novanest::{
    config::validate_rate, summarize, Error, FacilityRepository, FacilityStore, ServerConfig,
};
use serde::Serialize;

/// Inspect the NovaNest sample facility from the terminal
#[derive(Parser, Debug)]
#[command(name = "novanest", version, about)]
struct Cli {
    /// Tariff (per kWh) for the cost estimate; defaults to NOVANEST_RATE_PER_KWH or 0.12
    #[arg(long, global = true)]
    rate: Option<f64>,

    /// Log level for diagnostics on stderr
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Facility-wide totals and estimated cost
    Summary,
    /// All residents
    Residents,
    /// One resident by id
    Resident { id: String },
    /// All devices
    Devices,
    /// All alerts
    Alerts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let config = ServerConfig::from_env().context("Invalid configuration")?;
    let rate = match cli.rate {
        Some(rate) => validate_rate(rate)?,
        None => config.rate_per_kwh,
    };

    let store = FacilityStore::with_sample_data();

    match cli.command {
        Command::Summary => print_json(&summarize(&store, rate)),
        Command::Residents => print_json(&store.residents()),
        Command::Resident { id } => {
            let parsed: u32 = id.parse().map_err(|_| Error::InvalidResidentId(id.clone()))?;
            let resident = store.resident(parsed).ok_or(Error::ResidentNotFound(parsed))?;
            print_json(&resident)
        }
        Command::Devices => print_json(&store.devices()),
        Command::Alerts => print_json(&store.alerts()),
    }
}

fn setup_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
