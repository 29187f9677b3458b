//! Simulate command - Batch Monty Hall episodes under a fixed strategy

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::cli::output::{create_simulation_progress, print_kv, print_section};
use crate::simulation::{self, SimulationConfig, Strategy};

#[derive(Parser, Debug)]
#[command(about = "Run batch Monty Hall simulations")]
pub struct SimulateArgs {
    /// Number of episodes to play
    #[arg(long, short = 'e', default_value_t = 10_000)]
    pub episodes: u64,

    /// Strategy at the switch offer
    #[arg(long, short = 's', value_enum, default_value_t = Strategy::Switch)]
    pub strategy: Strategy,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct SimulationExport {
    strategy: Strategy,
    episodes: u64,
    seed: Option<u64>,
    wins: u64,
    losses: u64,
    win_percentage: f64,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let config = SimulationConfig {
        episodes: args.episodes,
        strategy: args.strategy,
        seed: args.seed,
    };

    print_section("Simulación Monty Hall");
    print_kv("Estrategia", config.strategy.command());
    print_kv("Episodios", &args.episodes.to_string());
    if let Some(seed) = args.seed {
        print_kv("Semilla", &seed.to_string());
    }
    println!();

    let pb = create_simulation_progress(args.episodes);
    let stats = simulation::run(&config, |done| pb.set_position(done))?;
    pb.finish_with_message("done");

    print_section("Resultados");
    print_kv("Victorias", &stats.wins.to_string());
    print_kv("Derrotas", &stats.losses.to_string());
    print_kv(
        "Porcentaje de victoria",
        &format!("{:.2}%", stats.win_percentage()),
    );

    if let Some(path) = &args.export {
        let export = SimulationExport {
            strategy: args.strategy,
            episodes: args.episodes,
            seed: args.seed,
            wins: stats.wins,
            losses: stats.losses,
            win_percentage: stats.win_percentage(),
        };
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &export)?;
        println!("\n✓ Resultados exportados a: {}", path.display());
    }

    Ok(())
}
