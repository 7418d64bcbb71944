//! # causa CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use causa_cli::config::CliConfig;
use causa_cli::quiz::{run_quiz, QuizArgs};
use causa_cli::regions::{run_regions, RegionsArgs};
use causa_cli::search::{run_categories, run_search, CategoriesArgs, SearchArgs};
use causa_cli::show::{run_show, ShowArgs};

/// Causa: search a catalog of causes and resources, and find the ones that
/// match your interests.
#[derive(Parser, Debug)]
#[command(name = "causa", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file (YAML or JSON list of entries). Overrides the config.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Quiz steps file (YAML or JSON list of steps). Overrides the config.
    #[arg(long, global = true)]
    steps: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the catalog by text, category, and kind.
    Search(SearchArgs),

    /// List the catalog's category tabs.
    Categories(CategoriesArgs),

    /// Show one entry in detail.
    Show(ShowArgs),

    /// List world regions, or one region's issues and initiatives.
    Regions(RegionsArgs),

    /// Replay quiz answers and rank the catalog against them.
    Quiz(QuizArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("causa CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = CliConfig::resolve(
        cli.config.as_deref(),
        cli.catalog.as_deref(),
        cli.steps.as_deref(),
    )
    .and_then(|config| match &cli.command {
        Commands::Search(args) => run_search(args, &config),
        Commands::Categories(args) => run_categories(args, &config),
        Commands::Show(args) => run_show(args, &config),
        Commands::Regions(args) => run_regions(args, &config),
        Commands::Quiz(args) => run_quiz(args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
