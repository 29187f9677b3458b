//! Static production rule table for the voice-command grammar

use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-terminal symbols of the grammar.
///
/// Serialized and displayed with their Spanish grammar names, which are part
/// of the recognized language, not of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonTerminal {
    #[serde(rename = "S")]
    S,
    Comando,
    Movimiento,
    Monty,
    Juego,
    Puerta,
    PuertaA,
    PuertaB,
    PuertaC,
    Accion,
    Control,
    Nueva,
}

impl NonTerminal {
    pub const ALL: &'static [NonTerminal] = &[
        NonTerminal::S,
        NonTerminal::Comando,
        NonTerminal::Movimiento,
        NonTerminal::Monty,
        NonTerminal::Juego,
        NonTerminal::Puerta,
        NonTerminal::PuertaA,
        NonTerminal::PuertaB,
        NonTerminal::PuertaC,
        NonTerminal::Accion,
        NonTerminal::Control,
        NonTerminal::Nueva,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NonTerminal::S => "S",
            NonTerminal::Comando => "comando",
            NonTerminal::Movimiento => "movimiento",
            NonTerminal::Monty => "monty",
            NonTerminal::Juego => "juego",
            NonTerminal::Puerta => "puerta",
            NonTerminal::PuertaA => "puerta_a",
            NonTerminal::PuertaB => "puerta_b",
            NonTerminal::PuertaC => "puerta_c",
            NonTerminal::Accion => "accion",
            NonTerminal::Control => "control",
            NonTerminal::Nueva => "nueva",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One production rule: which non-terminal expands, the input shape that
/// selects the production, and the human-readable production text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrammarRule {
    pub lhs: NonTerminal,
    pub matched_input: &'static str,
    pub production: &'static str,
}

/// The empty-string symbol.
pub const EPSILON_INPUT: &str = "ε";

/// Movement terminal words, in grammar order.
pub const MOVEMENT_WORDS: &[&str] = &["izquierda", "derecha", "arriba", "abajo"];

/// Door letter terminals.
pub const DOOR_LETTERS: &[&str] = &["a", "b", "c"];

/// The complete, statically enumerated rule table.
pub const GRAMMAR: &[GrammarRule] = &[
    // Start symbol
    rule(NonTerminal::S, "comando", "S → comando"),
    rule(NonTerminal::S, EPSILON_INPUT, "S → ε"),
    // Top-level command categories
    rule(NonTerminal::Comando, "movimiento", "comando → movimiento"),
    rule(NonTerminal::Comando, "monty", "comando → monty"),
    rule(NonTerminal::Comando, "juego", "comando → juego"),
    // Maze movement
    rule(NonTerminal::Movimiento, "izquierda", "movimiento → \"izquierda\""),
    rule(NonTerminal::Movimiento, "derecha", "movimiento → \"derecha\""),
    rule(NonTerminal::Movimiento, "arriba", "movimiento → \"arriba\""),
    rule(NonTerminal::Movimiento, "abajo", "movimiento → \"abajo\""),
    // Monty Hall commands
    rule(NonTerminal::Monty, "puerta", "monty → puerta"),
    rule(NonTerminal::Monty, "accion", "monty → accion"),
    rule(NonTerminal::Monty, "control", "monty → control"),
    // Door selection (two-token lookahead)
    rule(NonTerminal::Puerta, "puerta_a", "puerta → puerta_a"),
    rule(NonTerminal::Puerta, "puerta_b", "puerta → puerta_b"),
    rule(NonTerminal::Puerta, "puerta_c", "puerta → puerta_c"),
    rule(NonTerminal::PuertaA, "puerta a", "puerta_a → \"puerta\" \"a\""),
    rule(NonTerminal::PuertaB, "puerta b", "puerta_b → \"puerta\" \"b\""),
    rule(NonTerminal::PuertaC, "puerta c", "puerta_c → \"puerta\" \"c\""),
    // Monty Hall actions
    rule(NonTerminal::Accion, "cambiar", "accion → \"cambiar\""),
    rule(NonTerminal::Accion, "mantener", "accion → \"mantener\""),
    // Game control
    rule(NonTerminal::Control, "cerrar", "control → \"cerrar\""),
    rule(NonTerminal::Control, "reiniciar", "control → \"reiniciar\""),
    rule(NonTerminal::Control, "otra vez", "control → \"otra\" \"vez\""),
    // New game
    rule(NonTerminal::Juego, "nueva", "juego → nueva"),
    rule(NonTerminal::Nueva, "nueva partida", "nueva → \"nueva\" \"partida\""),
];

const fn rule(
    lhs: NonTerminal,
    matched_input: &'static str,
    production: &'static str,
) -> GrammarRule {
    GrammarRule {
        lhs,
        matched_input,
        production,
    }
}

/// Look up the table entry for a production choice.
pub fn find_rule(lhs: NonTerminal, matched_input: &str) -> Option<&'static GrammarRule> {
    GRAMMAR
        .iter()
        .find(|r| r.lhs == lhs && r.matched_input == matched_input)
}
