//! Voice-command grammar: tokenizer, rule table, and recursive-descent parser
//!
//! The grammar is small, fixed, and LL(1) by construction (the two-word
//! commands need a second token of lookahead). It recognizes the Spanish voice
//! commands of the maze / Monty Hall game:
//!
//! ```text
//! S          → comando | ε
//! comando    → movimiento | monty | juego
//! movimiento → "izquierda" | "derecha" | "arriba" | "abajo"
//! monty      → puerta | accion | control
//! puerta     → puerta_a | puerta_b | puerta_c
//! puerta_a   → "puerta" "a"        (likewise b, c)
//! accion     → "cambiar" | "mantener"
//! control    → "cerrar" | "reiniciar" | "otra" "vez"
//! juego      → nueva
//! nueva      → "nueva" "partida"
//! ```

pub mod derivation;
pub mod parser;
pub mod rules;
pub mod tokenizer;

pub use derivation::derivation_steps;
pub use parser::{EPSILON, ParseOutcome, SYNTAX_ERROR, parse, parse_command};
pub use rules::{GRAMMAR, GrammarRule, NonTerminal};
pub use tokenizer::tokenize;
