//! Americano CLI - Command-line interface
//!
//! Commands:
//! - schedule: Generate a schedule for a roster
//! - leaderboard: Rank players from a tournament document
//! - simulate: Play a whole schedule with random scores
//! - serve: Start the HTTP API

mod leaderboard_cmd;
mod output;
mod schedule_cmd;
mod server;
mod simulate_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "americano")]
#[command(about = "Americano doubles tournament scheduler")]
#[command(version)]
struct Cli {
    /// Random seed for reproducible simulations
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a schedule for a roster
    Schedule(schedule_cmd::ScheduleArgs),
    /// Rank players from a tournament document
    Leaderboard(leaderboard_cmd::LeaderboardArgs),
    /// Generate a schedule, fill it with random scores, and rank players
    Simulate(simulate_cmd::SimulateArgs),
    /// Start the HTTP API
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Schedule(args) => schedule_cmd::run(args),
        Commands::Leaderboard(args) => leaderboard_cmd::run(args),
        Commands::Simulate(args) => simulate_cmd::run(args, cli.seed),
        Commands::Serve(args) => server::run(args),
    }
}

/// Initialize logging; RUST_LOG overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
