//! Snake-draft team balancer CLI
//!
//! Reads the roster CSVs, ranks participants by the chosen metric and prints
//! the resulting teams.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use snake_draft::loader::{load_roster, DataFiles};
use snake_draft::{report, run, Config, Metric};

/// How much diagnostic logging goes to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Verbosity {
    /// Nothing
    Quiet,

    /// Problems with the input, e.g. a missing messages or spends file
    Warn,

    /// Also what was loaded and what the run is doing
    Info,

    /// Also per-stage sizes and timings
    Debug,
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Warn => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "snake-draft", version)]
#[command(about = "Balance a roster into teams with a snake draft", long_about = None)]
struct Cli {
    /// Number of teams to create
    #[arg(long, default_value_t = 3, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    teams: usize,

    /// Metric participants are ranked by
    #[arg(long, value_enum, default_value_t = Metric::EventsPerformance)]
    metric: Metric,

    /// Directory holding the input CSV files
    #[arg(long, value_name = "PATH", default_value = "data")]
    data_dir: PathBuf,

    /// Players CSV (default is `<data-dir>/level_a_players.csv`)
    #[arg(long, value_name = "PATH")]
    players: Option<PathBuf>,

    /// Messages CSV (default is `<data-dir>/level_b_messages.csv`)
    #[arg(long, value_name = "PATH")]
    messages: Option<PathBuf>,

    /// Spends CSV (default is `<data-dir>/level_b_spend.csv`)
    #[arg(long, value_name = "PATH")]
    spends: Option<PathBuf>,

    /// Diagnostic logging; `RUST_LOG` overrides it
    #[arg(long, value_enum, default_value_t = Verbosity::Warn)]
    verbosity: Verbosity,
}

impl Cli {
    fn data_files(&self) -> DataFiles {
        let mut files = DataFiles::in_dir(&self.data_dir);
        if let Some(players) = &self.players {
            files.players = players.clone();
        }
        if let Some(messages) = &self.messages {
            files.messages = messages.clone();
        }
        if let Some(spends) = &self.spends {
            files.spends = spends.clone();
        }
        files
    }

    fn config(&self) -> Config {
        Config {
            teams: self.teams,
            metric: self.metric,
        }
    }
}

fn init_logging(verbosity: Verbosity) {
    let level = LevelFilter::from(verbosity);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(level >= LevelFilter::Debug)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = cli.config();
    println!(
        "Starting player assignment to {} teams using {} sort...",
        config.teams, config.metric
    );

    let roster = load_roster(&cli.data_files(), config.metric).context("unable to load the roster")?;
    let outcome = run(&config, &roster)?;

    let mut out = String::new();
    report::generate(&outcome, config.metric, &mut out).context("unable to render the report")?;
    print!("{out}");

    Ok(())
}
