use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hjh_core::Placement;
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::{Config, OutputFormat};
use error::print_error_and_exit;

#[derive(Parser)]
#[command(name = "hjh")]
#[command(about = "HJH - helix splitting for helix-junction-helix libraries")]
#[command(version)]
#[command(long_about = "
Splits a double-stranded helix around a junction of a given length and prints
the resulting fragments, one record per split, in 5'->3' column order.

Examples:
  hjh place --side1 GATCCAGT --side2 ACTGGATC -j 2
  hjh place --side1 GATCCAGT --side2 ACTGGATC -j 2 -p along-helix --format json
  hjh place --side1 GATCCAGTCA --side2 TGACTGGATC -j 3 --offset -1
  hjh config --example
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of threads to use
    #[arg(short, long, global = true)]
    pub threads: Option<usize>,

    /// Verbose output (-v shows every record, -vv every split point)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a helix under one or more placements
    Place {
        /// First strand, 5'->3'
        #[arg(long, required = true)]
        side1: String,

        /// Second strand, 5'->3' (antiparallel to side1)
        #[arg(long, required = true)]
        side2: String,

        /// Length of the junction the helix must accommodate
        #[arg(short, long)]
        junction_length: Option<usize>,

        /// Placement to run; repeat for several (default from config)
        #[arg(short, long = "placement")]
        placements: Vec<Placement>,

        /// Explicit total helix length instead of the strand length
        #[arg(long)]
        total_length: Option<usize>,

        /// Single split with the junction shifted from the center
        #[arg(long, allow_hyphen_values = true, conflicts_with = "placements")]
        offset: Option<i64>,

        /// Middle helix first strand, for double-double
        #[arg(long)]
        middle_side1: Option<String>,

        /// Middle helix second strand, for double-double
        #[arg(long)]
        middle_side2: Option<String>,

        /// Output format
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Show the active configuration
    Config {
        /// Show an example configuration instead
        #[arg(long)]
        example: bool,

        /// Write to a file instead of stdout
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Set global thread count if specified
    if let Some(threads) = cli.threads.or(config.general.threads) {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to set thread count")?;
    }

    // Execute the requested command
    let result = match cli.command {
        Commands::Place {
            side1,
            side2,
            junction_length,
            placements,
            total_length,
            offset,
            middle_side1,
            middle_side2,
            format,
        } => commands::place::execute(
            &config,
            commands::place::PlaceArgs {
                side1,
                side2,
                junction_length,
                total_length,
                offset,
                placements,
                middle_side1,
                middle_side2,
                format,
            },
        ),

        Commands::Config { example, write } => commands::config::execute(example, write, &config),
    };

    if let Err(e) = result {
        print_error_and_exit(&e);
    }

    Ok(())
}
