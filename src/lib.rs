//! Voice-commanded maze and Monty Hall game engine
//!
//! This crate provides:
//! - An LL(1) recursive-descent recognizer for a small Spanish command
//!   grammar, with derivation trees, rule traces, and leftmost derivations
//! - A non-deterministic finite automaton driving the maze and Monty Hall
//!   game, with a full decision tree of explored and unexplored branches
//! - A session orchestrator that normalizes, validates, and dispatches raw
//!   voice commands, keeping a bounded history and win/loss statistics
//! - Batch simulation for checking the switch-versus-stay law empirically

pub mod automaton;
pub mod cli;
pub mod error;
pub mod export;
pub mod grammar;
pub mod session;
pub mod simulation;
pub mod tree;

pub use automaton::{
    Automaton, Door, GameOutcome, InputSymbol, SessionStats, StateKind, StateLabel,
};
pub use error::{Error, Result};
pub use grammar::{GRAMMAR, GrammarRule, NonTerminal, ParseOutcome};
pub use session::{Command, CommandReport, GameSession, HistoryEntry, MAX_HISTORY, normalize};
pub use tree::{NodeId, Tree};
