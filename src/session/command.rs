//! Normalization and the tagged command model
//!
//! Recognized commands form a small closed set, so dispatch is an exhaustive
//! match over a sum type rather than a string-keyed handler table: adding a
//! category forces every match site to be revisited.

use std::fmt;

use serde::Serialize;

use crate::automaton::{Door, InputSymbol};

/// Whole-phrase synonyms applied after punctuation stripping. `salir` maps
/// onto `cerrar`, which the grammar knows.
const SYNONYMS: &[(&str, &str)] = &[("salir", "cerrar")];

/// Normalize a raw voice command: trim, lowercase, strip surrounding
/// punctuation (trailing-period ASR variants), collapse whitespace, and map
/// known synonyms to their canonical phrase.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped = lowered.trim_matches(|c: char| !c.is_alphanumeric());
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    for (variant, canonical) in SYNONYMS {
        if collapsed == *variant {
            return (*canonical).to_string();
        }
    }
    collapsed
}

/// Maze movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Izquierda,
    Derecha,
    Arriba,
    Abajo,
}

impl Direction {
    pub fn symbol(self) -> InputSymbol {
        match self {
            Direction::Izquierda => InputSymbol::Izquierda,
            Direction::Derecha => InputSymbol::Derecha,
            Direction::Arriba => InputSymbol::Arriba,
            Direction::Abajo => InputSymbol::Abajo,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.symbol().as_str()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monty Hall decision actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MontyAction {
    Cambiar,
    Mantener,
}

/// Game control commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlCommand {
    /// Close the finished episode (`cerrar`).
    Cerrar,
    /// Episode reset, statistics retained (`reiniciar`).
    Reiniciar,
    /// Episode reset, statistics retained (`otra vez`).
    OtraVez,
    /// Session reset, statistics cleared (`nueva partida`).
    NuevaPartida,
}

/// A recognized command, categorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Movement(Direction),
    Door(Door),
    Action(MontyAction),
    Control(ControlCommand),
}

impl Command {
    /// Map a grammatically valid token sequence to its command category.
    pub fn from_tokens(tokens: &[String]) -> Option<Command> {
        let words: Vec<&str> = tokens.iter().map(String::as_str).collect();
        match words.as_slice() {
            ["izquierda"] => Some(Command::Movement(Direction::Izquierda)),
            ["derecha"] => Some(Command::Movement(Direction::Derecha)),
            ["arriba"] => Some(Command::Movement(Direction::Arriba)),
            ["abajo"] => Some(Command::Movement(Direction::Abajo)),
            ["puerta", letter] => Door::from_letter(letter).map(Command::Door),
            ["cambiar"] => Some(Command::Action(MontyAction::Cambiar)),
            ["mantener"] => Some(Command::Action(MontyAction::Mantener)),
            ["cerrar"] => Some(Command::Control(ControlCommand::Cerrar)),
            ["reiniciar"] => Some(Command::Control(ControlCommand::Reiniciar)),
            ["otra", "vez"] => Some(Command::Control(ControlCommand::OtraVez)),
            ["nueva", "partida"] => Some(Command::Control(ControlCommand::NuevaPartida)),
            _ => None,
        }
    }

    /// The automaton input whose availability decides state legality.
    /// Resets return None: they are legal in every state.
    pub fn primary_input(&self) -> Option<InputSymbol> {
        match self {
            Command::Movement(direction) => Some(direction.symbol()),
            Command::Door(_) => Some(InputSymbol::SeleccionarPuerta),
            Command::Action(MontyAction::Cambiar) => Some(InputSymbol::Cambiar),
            Command::Action(MontyAction::Mantener) => Some(InputSymbol::Mantener),
            Command::Control(ControlCommand::Cerrar) => Some(InputSymbol::Continuar),
            Command::Control(
                ControlCommand::Reiniciar | ControlCommand::OtraVez | ControlCommand::NuevaPartida,
            ) => None,
        }
    }
}
