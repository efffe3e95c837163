//! oxo CLI - console tic-tac-toe with an unbeatable computer player
//!
//! This CLI provides:
//! - An interactive game against another human or the computer
//! - Position analysis with per-move minimax values
//! - An exhaustive check that the search policy never loses

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Console tic-tac-toe with an unbeatable computer player", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against another human or the computer
    Play(oxo::cli::commands::play::PlayArgs),

    /// Show minimax values and the best move for a position
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Exhaustively check that the search never loses
    Verify(oxo::cli::commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Verify(args) => oxo::cli::commands::verify::execute(args),
    }
}
