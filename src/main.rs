//! Binary entry point for biosurvey.
//!
//! Replays journal files into the survey tracker and prints per-body
//! valuation reports.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr/print_stdout in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use biosurvey::config::BiosurveyConfig;
use biosurvey::models::ScanEvent;
use biosurvey::{Body, ObservationLedger, Observation, SpeciesCatalog, SystemTracker, report};

/// Biosurvey - exobiology survey ledger and valuation engine.
#[derive(Parser)]
#[command(name = "biosurvey")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Replay a journal file and print per-body survey reports.
    Replay {
        /// Journal file, one JSON event per line.
        journal: PathBuf,

        /// Write the tracker snapshot to this path afterwards.
        #[arg(long)]
        state: Option<PathBuf>,

        /// List every body, including worthless ones.
        #[arg(long)]
        all: bool,
    },
    /// List the built-in species catalog.
    Catalog {
        /// Restrict the listing to one genus.
        #[arg(long)]
        genus: Option<String>,
    },
    /// Value a single body record (a Scan-shaped JSON file).
    Value {
        /// Body record file.
        body: PathBuf,

        /// Also estimate a worth range for this many unidentified
        /// biological signals.
        #[arg(long, default_value_t = 0)]
        signals: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref().map_or_else(
        BiosurveyConfig::load_default,
        |path| match BiosurveyConfig::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default configuration");
                BiosurveyConfig::default()
            },
        },
    );

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "biosurvey=debug"
    } else {
        "biosurvey=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands, config: &BiosurveyConfig) -> anyhow::Result<()> {
    match command {
        Commands::Replay {
            journal,
            state,
            all,
        } => run_replay(&journal, state.as_deref(), all, config),
        Commands::Catalog { genus } => run_catalog(genus.as_deref()),
        Commands::Value { body, signals } => run_value(&body, signals),
    }
}

fn run_replay(
    journal: &std::path::Path,
    state: Option<&std::path::Path>,
    all: bool,
    config: &BiosurveyConfig,
) -> anyhow::Result<()> {
    let contents = fs::read_to_string(journal)
        .with_context(|| format!("reading journal {}", journal.display()))?;

    let mut tracker = SystemTracker::new();
    let mut consumed = 0usize;
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: serde_json::Value = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(line = number + 1, error = %e, "skipping unparseable journal line");
                continue;
            },
        };
        match tracker.apply_record(&record) {
            Ok(true) => consumed += 1,
            Ok(false) => {},
            Err(e) => {
                tracing::warn!(line = number + 1, error = %e, "skipping malformed journal record");
            },
        }
    }
    tracing::debug!(consumed, "journal replay finished");

    if tracker.current_system().is_empty() {
        println!("(no system jump recorded)");
    } else {
        println!("{}", tracker.current_system());
    }

    let threshold = if all {
        f64::NEG_INFINITY
    } else {
        config.min_listed_value
    };
    for summary in tracker.summaries(threshold) {
        let marker = if summary.mapped { " " } else { "!" };
        println!("{marker} {:24} {}", summary.name.trim(), summary.value_range);
        for entry in &summary.entries {
            let emphasis = if entry.emphasized { " *" } else { "" };
            println!("      {}{emphasis}", entry.text);
        }
    }

    if let Some(path) = state {
        tracker
            .save_state(path)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
    }
    Ok(())
}

fn run_catalog(genus: Option<&str>) -> anyhow::Result<()> {
    for species in SpeciesCatalog::builtin().rows() {
        if genus.is_some_and(|g| g != species.genus) {
            continue;
        }
        println!("{:32} {:5.1} M", species.display_name(), species.net_worth);
    }
    Ok(())
}

fn run_value(body_path: &std::path::Path, signals: u32) -> anyhow::Result<()> {
    let contents = fs::read_to_string(body_path)
        .with_context(|| format!("reading body record {}", body_path.display()))?;
    let scan: ScanEvent = serde_json::from_str(&contents)
        .with_context(|| format!("parsing body record {}", body_path.display()))?;
    let body = Body::from(scan);
    let catalog = SpeciesCatalog::builtin();

    println!("{}", body.display_name());
    println!("  discovery value: {:.3} M", report::discovery_value(&body));
    println!("  mapped before:   {}", body.is_mapped());

    let mut ledger = ObservationLedger::new();
    if signals > 0 {
        ledger.emplace(Observation::raw(signals));
    }
    println!(
        "  worth estimate:  {}",
        report::value_range_string(catalog, &body, &ledger)
    );
    Ok(())
}
