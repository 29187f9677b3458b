//! Command orchestration for one game session
//!
//! Couples grammar validation with automaton advancement: a submitted string
//! is normalized, parsed, checked for legality in the current automaton
//! state, dispatched, and recorded in a bounded command history. Sessions
//! are independent values; concurrent sessions are simply separate
//! instances owned by whatever serves them.

pub mod command;
pub mod game;

pub use command::{Command, ControlCommand, Direction, MontyAction, normalize};
pub use game::{CommandReport, GameSession, HistoryEntry, MAX_HISTORY};
