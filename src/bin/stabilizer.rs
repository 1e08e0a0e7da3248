//! stabilizer CLI - value iteration on a fixed grid world
//!
//! This CLI provides:
//! - Solving the grid world and printing values and policy
//! - Sweeping the discount factor
//! - Locating the discount at which a cell's action flips
//! - Describing the domain

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "stabilizer")]
#[command(version, about = "Value iteration for a 6x5 grid world", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run value iteration and print the result
    Solve(stabilizer::cli::commands::solve::SolveArgs),

    /// Solve for a range of discount factors
    Sweep(stabilizer::cli::commands::sweep::SweepArgs),

    /// Bisect for the discount at which a cell's action flips
    Threshold(stabilizer::cli::commands::threshold::ThresholdArgs),

    /// Show the grid world layout
    Layout(stabilizer::cli::commands::layout::LayoutArgs),
}

/// Filter used when `RUST_LOG` is unset.
fn default_log_directive(verbose: bool) -> &'static str {
    if verbose {
        "stabilizer=debug"
    } else {
        "stabilizer=info"
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(verbose)));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Commands::Solve(args) if args.verbose);
    init_logging(verbose)?;

    match cli.command {
        Commands::Solve(args) => stabilizer::cli::commands::solve::execute(args),
        Commands::Sweep(args) => stabilizer::cli::commands::sweep::execute(args),
        Commands::Threshold(args) => stabilizer::cli::commands::threshold::execute(args),
        Commands::Layout(args) => stabilizer::cli::commands::layout::execute(args),
    }
}
