//! Game session orchestration
//!
//! [`GameSession`] drives a raw voice command through the whole pipeline:
//! normalization, grammar validation, categorization, state legality, and
//! dispatch against the automaton. Every attempt, accepted or rejected, is
//! appended to a bounded history.

use std::collections::VecDeque;

use serde::Serialize;

use crate::automaton::{
    Automaton, Door, GameOutcome, InputSymbol, SessionStats, StateLabel,
};
use crate::error::{Error, Result};
use crate::export::SymbolNode;
use crate::grammar::{self, GrammarRule, ParseOutcome};
use crate::session::command::{Command, ControlCommand, MontyAction, normalize};

/// Oldest entries are evicted past this bound.
pub const MAX_HISTORY: usize = 50;

/// One processed command attempt, accepted or rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub raw: String,
    pub normalized: String,
    pub accepted: bool,
    pub reason: Option<String>,
    pub configuration: Vec<StateLabel>,
}

/// Everything a caller needs to display the result of an accepted command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub raw: String,
    pub normalized: String,
    pub tokens: Vec<String>,
    pub valid: bool,
    pub derivation: SymbolNode,
    pub trace: Vec<GrammarRule>,
    pub derivation_steps: Vec<String>,
    pub configuration: Vec<StateLabel>,
    pub prize_door: Door,
    pub selected_door: Option<Door>,
    pub stats: SessionStats,
    pub message: String,
}

/// A full interactive session: automaton plus bounded command history.
#[derive(Debug)]
pub struct GameSession {
    automaton: Automaton,
    history: VecDeque<HistoryEntry>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_automaton(Automaton::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_automaton(Automaton::with_seed(seed))
    }

    fn from_automaton(mut automaton: Automaton) -> Self {
        automaton
            .begin()
            .expect("comenzar is always legal from the initial configuration");
        GameSession {
            automaton,
            history: VecDeque::new(),
        }
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn stats(&self) -> SessionStats {
        self.automaton.stats()
    }

    pub fn configuration(&self) -> &[StateLabel] {
        self.automaton.configuration()
    }

    /// Run the grammar alone, without touching game state.
    pub fn analyze(&self, raw: &str) -> ParseOutcome {
        grammar::parse_command(&normalize(raw))
    }

    /// Process one raw voice command end to end.
    pub fn submit(&mut self, raw: &str) -> Result<CommandReport> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            self.record(raw, &normalized, Err("entrada vacía"));
            return Err(Error::EmptyInput);
        }

        let outcome = grammar::parse_command(&normalized);
        if !outcome.valid {
            let reason = outcome
                .reason
                .clone()
                .unwrap_or_else(|| grammar::SYNTAX_ERROR.to_string());
            self.record(raw, &normalized, Err(&reason));
            return Err(Error::GrammarRejected {
                command: normalized,
                reason,
            });
        }

        let command = match Command::from_tokens(&outcome.tokens) {
            Some(command) => command,
            None => {
                // Grammar and category tables cover the same phrases; a valid
                // parse without a category means they drifted apart.
                let reason = grammar::SYNTAX_ERROR.to_string();
                self.record(raw, &normalized, Err(&reason));
                return Err(Error::GrammarRejected {
                    command: normalized,
                    reason,
                });
            }
        };

        if let Some(input) = command.primary_input() {
            if !self.automaton.can_process(input) {
                self.record(raw, &normalized, Err("no permitido en el estado actual"));
                return Err(Error::IllegalInCurrentState {
                    command: normalized,
                    configuration: self.automaton.configuration().to_vec(),
                });
            }
        }

        let message = match self.dispatch(&command) {
            Ok(message) => message,
            Err(err) => {
                self.record(raw, &normalized, Err(&err.to_string()));
                return Err(err);
            }
        };

        self.record(raw, &normalized, Ok(()));
        Ok(CommandReport {
            raw: raw.to_string(),
            normalized,
            tokens: outcome.tokens.clone(),
            valid: true,
            derivation: SymbolNode::from_tree(&outcome.tree),
            trace: outcome.trace.iter().map(|rule| **rule).collect(),
            derivation_steps: outcome.derivation_steps(),
            configuration: self.automaton.configuration().to_vec(),
            prize_door: self.automaton.prize_door(),
            selected_door: self.automaton.selected_door(),
            stats: self.automaton.stats(),
            message,
        })
    }

    fn dispatch(&mut self, command: &Command) -> Result<String> {
        match command {
            Command::Movement(direction) => {
                self.automaton.process(direction.symbol())?;
                Ok(format!("movimiento hacia {direction}"))
            }
            Command::Door(door) => {
                self.automaton.select_door(*door);
                self.automaton.process(InputSymbol::SeleccionarPuerta)?;
                Ok(format!("puerta {} seleccionada", door.as_str()))
            }
            Command::Action(MontyAction::Mantener) => {
                let outcome = self.automaton.resolve_door_choice(InputSymbol::Mantener)?;
                Ok(Self::outcome_message(outcome, "mantuviste tu puerta"))
            }
            Command::Action(MontyAction::Cambiar) => {
                // The grammar has no confirmation phrase, so switching
                // confirms immediately.
                self.automaton.process(InputSymbol::Cambiar)?;
                let outcome = self.automaton.resolve_door_choice(InputSymbol::Confirmar)?;
                Ok(Self::outcome_message(outcome, "cambiaste de puerta"))
            }
            Command::Control(ControlCommand::Cerrar) => {
                self.automaton.process(InputSymbol::Continuar)?;
                Ok("juego terminado".to_string())
            }
            Command::Control(ControlCommand::Reiniciar | ControlCommand::OtraVez) => {
                self.automaton.reset_episode();
                self.automaton
                    .begin()
                    .expect("comenzar is always legal after an episode reset");
                Ok("nuevo episodio, estadísticas conservadas".to_string())
            }
            Command::Control(ControlCommand::NuevaPartida) => {
                self.automaton.reset_session();
                self.automaton
                    .begin()
                    .expect("comenzar is always legal after a session reset");
                self.history.clear();
                Ok("nueva partida, estadísticas reiniciadas".to_string())
            }
        }
    }

    fn outcome_message(outcome: GameOutcome, action: &str) -> String {
        if outcome.is_win() {
            format!("{action} y ganaste el premio")
        } else {
            format!("{action} y perdiste")
        }
    }

    fn record(&mut self, raw: &str, normalized: &str, result: std::result::Result<(), &str>) {
        if self.history.len() == MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(HistoryEntry {
            raw: raw.to_string(),
            normalized: normalized.to_string(),
            accepted: result.is_ok(),
            reason: result.err().map(str::to_string),
            configuration: self.automaton.configuration().to_vec(),
        });
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_awaits_movement() {
        let session = GameSession::with_seed(7);
        assert_eq!(session.configuration(), &[StateLabel::EsperandoMovimiento]);
    }

    #[test]
    fn rejected_commands_still_enter_history() {
        let mut session = GameSession::with_seed(7);
        assert!(session.submit("volar").is_err());
        let entries: Vec<_> = session.history().collect();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].accepted);
        assert_eq!(entries[0].normalized, "volar");
    }

    #[test]
    fn full_stay_episode_updates_stats() {
        let mut session = GameSession::with_seed(7);
        session.submit("derecha").unwrap();
        session.submit("puerta a").unwrap();
        let report = session.submit("mantener").unwrap();
        assert_eq!(report.stats.finished_games(), 1);
        assert!(session.automaton().is_in_final_state());
    }

    #[test]
    fn nueva_partida_clears_history_and_stats() {
        let mut session = GameSession::with_seed(7);
        session.submit("derecha").unwrap();
        session.submit("puerta b").unwrap();
        session.submit("mantener").unwrap();
        session.submit("nueva partida").unwrap();
        assert_eq!(session.stats().finished_games(), 0);
        // Only the clearing command itself survives.
        assert_eq!(session.history().count(), 1);
        assert_eq!(session.configuration(), &[StateLabel::EsperandoMovimiento]);
    }
}
