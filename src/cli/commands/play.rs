//! Play command - Interactive voice-command game session

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::cli::output::{print_kv, print_section};
use crate::error::Error;
use crate::session::GameSession;

#[derive(Parser, Debug)]
#[command(about = "Play the maze and Monty Hall game interactively")]
pub struct PlayArgs {
    /// Random seed for a reproducible prize-door sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show the decision tree after every accepted command
    #[arg(long)]
    pub show_tree: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::new(),
    };

    print_section("Laberinto y Monty Hall");
    println!("Comandos: izquierda, derecha, arriba, abajo, puerta a/b/c,");
    println!("cambiar, mantener, cerrar, reiniciar, otra vez, nueva partida.");
    println!("Línea vacía o Ctrl-D para salir.\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let raw = line.trim();
        if raw.is_empty() {
            break;
        }

        match session.submit(raw) {
            Ok(report) => {
                println!("{}", report.message);
                let configuration: Vec<&str> = report
                    .configuration
                    .iter()
                    .map(|state| state.as_str())
                    .collect();
                print_kv("Estados activos", &configuration.join(", "));
                print_kv(
                    "Marcador",
                    &format!(
                        "{} victorias / {} derrotas",
                        report.stats.wins, report.stats.losses
                    ),
                );
                if args.show_tree {
                    let tree = session.automaton().decision_tree();
                    print!("{}", tree.render_with(|node| node.state.as_str().to_string()));
                }
            }
            Err(Error::EmptyInput) => break,
            Err(err) => println!("✗ {err}"),
        }
        println!();
    }

    let stats = session.stats();
    if stats.finished_games() > 0 {
        print_section("Resumen de la sesión");
        print_kv("Partidas", &stats.finished_games().to_string());
        print_kv("Victorias", &stats.wins.to_string());
        print_kv("Derrotas", &stats.losses.to_string());
        print_kv(
            "Porcentaje de victoria",
            &format!("{:.1}%", stats.win_percentage()),
        );
    }

    Ok(())
}
