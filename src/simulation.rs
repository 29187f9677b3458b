//! Batch episode simulation
//!
//! Replays the Monty Hall portion of the game many times through the same
//! command pipeline an interactive player uses, so the 1/3 versus 2/3 law
//! can be checked empirically against the live engine.

use std::fmt;

use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::automaton::{Door, SessionStats};
use crate::error::Result;
use crate::session::GameSession;

/// Decorrelates the door-picking stream from the engine's prize stream.
const DOOR_STREAM_SALT: u64 = 0xD6E8_FEB8_6659_FD93;

/// Player policy after the switch offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Switch,
    Stay,
}

impl Strategy {
    /// Voice command the strategy speaks at the decision point.
    pub fn command(self) -> &'static str {
        match self {
            Strategy::Switch => "cambiar",
            Strategy::Stay => "mantener",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Switch => f.write_str("switch"),
            Strategy::Stay => f.write_str("stay"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub episodes: u64,
    pub strategy: Strategy,
    pub seed: Option<u64>,
}

/// Run `episodes` full games and tally outcomes. `on_episode` is invoked with
/// the number of completed episodes after each one.
pub fn run(config: &SimulationConfig, mut on_episode: impl FnMut(u64)) -> Result<SessionStats> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut session = GameSession::with_seed(seed);
    let mut door_rng = StdRng::seed_from_u64(seed ^ DOOR_STREAM_SALT);
    for episode in 0..config.episodes {
        session.submit("derecha")?;
        let door = Door::random(&mut door_rng);
        session.submit(&format!("puerta {}", door.as_str().to_ascii_lowercase()))?;
        session.submit(config.strategy.command())?;
        on_episode(episode + 1);
        if episode + 1 < config.episodes {
            session.submit("otra vez")?;
        }
    }
    Ok(session.stats())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_tally() {
        let config = SimulationConfig {
            episodes: 25,
            strategy: Strategy::Switch,
            seed: Some(99),
        };
        let first = run(&config, |_| {}).unwrap();
        let second = run(&config, |_| {}).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.finished_games(), 25);
    }

    #[test]
    fn progress_callback_counts_every_episode() {
        let config = SimulationConfig {
            episodes: 10,
            strategy: Strategy::Stay,
            seed: Some(4),
        };
        let mut seen = 0;
        run(&config, |done| seen = done).unwrap();
        assert_eq!(seen, 10);
    }
}
