//! Non-deterministic finite automaton driving the maze / Monty Hall game
//!
//! The automaton runs over a small alphabet of game inputs and keeps a *set*
//! of concurrently active states. Two transitions are genuinely
//! non-deterministic (`mantener` and `confirmar` both map to win and loss);
//! resolving them appends both possibility branches to the decision tree and
//! then collapses the configuration to the branch matching the hidden prize
//! door.

pub mod engine;
pub mod states;
pub mod transitions;

pub use engine::{Automaton, DecisionNode, SessionStats, TransitionRecord};
pub use states::{Door, GameOutcome, InputSymbol, StateKind, StateLabel};
pub use transitions::{TRANSITIONS, successors, validate_table};
