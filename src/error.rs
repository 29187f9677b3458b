//! Error types for the montymaze crate

use thiserror::Error;

use crate::automaton::{InputSymbol, StateLabel};

/// Main error type for the montymaze crate.
///
/// Every variant is recoverable: the orchestrator records rejections in the
/// session history and callers render them as feedback. Nothing here aborts
/// the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("empty command")]
    EmptyInput,

    #[error("command '{command}' rejected by the grammar: {reason}")]
    GrammarRejected { command: String, reason: String },

    #[error("command '{command}' is not permitted in the current state {configuration:?}")]
    IllegalInCurrentState {
        command: String,
        configuration: Vec<StateLabel>,
    },

    #[error("no transition for input '{input}' from any of {configuration:?}")]
    NoMatchingTransition {
        input: InputSymbol,
        configuration: Vec<StateLabel>,
    },

    #[error("cannot resolve the door decision: no door has been selected")]
    NoDoorSelected,

    #[error("transition table is corrupt: non-final state '{state}' has no outgoing transition")]
    CorruptTransitionTable { state: StateLabel },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
