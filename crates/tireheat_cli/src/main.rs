//! Tire slip heat experiments CLI.
//!
//! Runs the slip sweep and the ramp-and-hold time-domain scenario, prints a
//! summary, and optionally writes the computed series as JSON for plotting.
//! Any model or validation failure aborts the run with a non-zero exit code.

mod config;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use config::DriverConfig;
use tireheat_core::experiments::{run_ramp_hold, run_slip_sweep};

const RULE: &str = "============================================================";

/// Tire energy dissipation experiments.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// TOML file with [tire], [sweep] and [time_domain] sections.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for JSON series output.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Sweep slip for several normal loads.
    Sweep,
    /// Ramp-then-hold slip profile over time.
    TimeDomain,
    /// Run every experiment.
    All,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => DriverConfig::from_file(path)?,
        None => DriverConfig::default(),
    };
    info!(mu = config.tire.mu, ck = config.tire.ck, "configuration loaded");

    let command = cli.command.unwrap_or(Commands::All);

    println!("{RULE}");
    println!("Tire Energy Dissipation Experiments");
    println!("{RULE}");
    println!();

    if matches!(command, Commands::Sweep | Commands::All) {
        run_sweep(&config, cli.output_dir.as_deref())?;
        println!();
    }
    if matches!(command, Commands::TimeDomain | Commands::All) {
        run_time_domain(&config, cli.output_dir.as_deref())?;
        println!();
    }

    println!("{RULE}");
    println!("All experiments completed successfully!");
    println!("{RULE}");
    Ok(())
}

fn run_sweep(config: &DriverConfig, output_dir: Option<&Path>) -> Result<()> {
    println!("Running Experiment A: Sweep kappa for multiple Fz values");
    let result =
        run_slip_sweep(&config.tire, &config.sweep).context("Slip sweep experiment failed")?;
    println!("{}", report::format_sweep_summary(&result));
    if let Some(dir) = output_dir {
        let path = report::write_json(dir, report::SWEEP_FILE, &result)?;
        println!("  Saved series: {}", path.display());
    }
    Ok(())
}

fn run_time_domain(config: &DriverConfig, output_dir: Option<&Path>) -> Result<()> {
    println!("Running Experiment B: Time-domain example");
    let result = run_ramp_hold(&config.tire, &config.time_domain)
        .context("Time-domain experiment failed")?;
    if let Some(dir) = output_dir {
        let path = report::write_json(dir, report::TIME_DOMAIN_FILE, &result)?;
        println!("  Saved series: {}", path.display());
    }
    println!();
    println!("{}", report::format_time_domain_summary(&result.summary));
    Ok(())
}
