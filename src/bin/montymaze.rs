//! montymaze CLI - Voice-commanded maze and Monty Hall game
//!
//! This CLI provides a unified interface for:
//! - Analyzing voice commands against the grammar
//! - Playing interactive game sessions
//! - Running batch Monty Hall simulations

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "montymaze")]
#[command(version, about = "Voice-commanded maze and Monty Hall game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a command against the grammar and show its derivation
    Analyze(montymaze::cli::commands::analyze::AnalyzeArgs),

    /// Play the game interactively
    Play(montymaze::cli::commands::play::PlayArgs),

    /// Run batch Monty Hall simulations
    Simulate(montymaze::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    montymaze::automaton::validate_table()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => montymaze::cli::commands::analyze::execute(args),
        Commands::Play(args) => montymaze::cli::commands::play::execute(args),
        Commands::Simulate(args) => montymaze::cli::commands::simulate::execute(args),
    }
}
