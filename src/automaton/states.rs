//! State labels, input alphabet, doors, and outcomes

use std::fmt;

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

/// The fixed set of automaton state labels.
///
/// Display and serde names are the Spanish labels the game's grammar and
/// history expose; they are data, shared verbatim with external renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateLabel {
    Inicio,
    EsperandoMovimiento,
    FrentePuertas,
    PuertaSeleccionada,
    OpcionCambiar,
    Ganar,
    Perder,
    JuegoTerminado,
}

/// Kind of a state label, fixed per label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKind {
    Inicial,
    Normal,
    Decision,
    Final,
}

/// Result attached to a resolved final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    #[serde(rename = "éxito")]
    Exito,
    #[serde(rename = "fracaso")]
    Fracaso,
}

impl GameOutcome {
    pub fn is_win(self) -> bool {
        matches!(self, GameOutcome::Exito)
    }
}

impl StateLabel {
    pub const ALL: &'static [StateLabel] = &[
        StateLabel::Inicio,
        StateLabel::EsperandoMovimiento,
        StateLabel::FrentePuertas,
        StateLabel::PuertaSeleccionada,
        StateLabel::OpcionCambiar,
        StateLabel::Ganar,
        StateLabel::Perder,
        StateLabel::JuegoTerminado,
    ];

    pub fn kind(self) -> StateKind {
        match self {
            StateLabel::Inicio => StateKind::Inicial,
            StateLabel::EsperandoMovimiento | StateLabel::FrentePuertas => StateKind::Normal,
            StateLabel::PuertaSeleccionada | StateLabel::OpcionCambiar => StateKind::Decision,
            StateLabel::Ganar | StateLabel::Perder | StateLabel::JuegoTerminado => StateKind::Final,
        }
    }

    /// Result carried by win/loss states; other labels, including the
    /// terminal `juego_terminado`, carry none.
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            StateLabel::Ganar => Some(GameOutcome::Exito),
            StateLabel::Perder => Some(GameOutcome::Fracaso),
            _ => None,
        }
    }

    pub fn is_final(self) -> bool {
        self.kind() == StateKind::Final
    }

    pub fn description(self) -> &'static str {
        match self {
            StateLabel::Inicio => "estado inicial del juego",
            StateLabel::EsperandoMovimiento => "esperando que el jugador se mueva",
            StateLabel::FrentePuertas => "jugador frente a las puertas",
            StateLabel::PuertaSeleccionada => "jugador ha seleccionado una puerta",
            StateLabel::OpcionCambiar => "jugador puede cambiar o mantener su elección",
            StateLabel::Ganar => "jugador ha ganado el premio",
            StateLabel::Perder => "jugador no ha ganado el premio",
            StateLabel::JuegoTerminado => "el juego ha terminado",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StateLabel::Inicio => "inicio",
            StateLabel::EsperandoMovimiento => "esperando_movimiento",
            StateLabel::FrentePuertas => "frente_puertas",
            StateLabel::PuertaSeleccionada => "puerta_seleccionada",
            StateLabel::OpcionCambiar => "opcion_cambiar",
            StateLabel::Ganar => "ganar",
            StateLabel::Perder => "perder",
            StateLabel::JuegoTerminado => "juego_terminado",
        }
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input alphabet of the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSymbol {
    Comenzar,
    Derecha,
    Izquierda,
    Arriba,
    Abajo,
    SeleccionarPuerta,
    Cambiar,
    Mantener,
    Confirmar,
    Continuar,
    Reiniciar,
}

impl InputSymbol {
    pub fn as_str(self) -> &'static str {
        match self {
            InputSymbol::Comenzar => "comenzar",
            InputSymbol::Derecha => "derecha",
            InputSymbol::Izquierda => "izquierda",
            InputSymbol::Arriba => "arriba",
            InputSymbol::Abajo => "abajo",
            InputSymbol::SeleccionarPuerta => "seleccionar_puerta",
            InputSymbol::Cambiar => "cambiar",
            InputSymbol::Mantener => "mantener",
            InputSymbol::Confirmar => "confirmar",
            InputSymbol::Continuar => "continuar",
            InputSymbol::Reiniciar => "reiniciar",
        }
    }
}

impl fmt::Display for InputSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three doors of the Monty Hall sub-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Door {
    A,
    B,
    C,
}

impl Door {
    pub const ALL: &'static [Door] = &[Door::A, Door::B, Door::C];

    /// Draw a door uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Door {
        *Door::ALL
            .choose(rng)
            .expect("the door list is never empty")
    }

    pub fn from_letter(letter: &str) -> Option<Door> {
        match letter {
            "a" | "A" => Some(Door::A),
            "b" | "B" => Some(Door::B),
            "c" | "C" => Some(Door::C),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Door::A => "A",
            Door::B => "B",
            Door::C => "C",
        }
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn kinds_partition_the_label_set() {
        assert_eq!(StateLabel::Inicio.kind(), StateKind::Inicial);
        assert_eq!(StateLabel::PuertaSeleccionada.kind(), StateKind::Decision);
        assert!(StateLabel::Ganar.is_final());
        assert!(StateLabel::JuegoTerminado.is_final());
        assert!(!StateLabel::EsperandoMovimiento.is_final());
    }

    #[test]
    fn only_win_and_loss_carry_outcomes() {
        assert_eq!(StateLabel::Ganar.outcome(), Some(GameOutcome::Exito));
        assert_eq!(StateLabel::Perder.outcome(), Some(GameOutcome::Fracaso));
        assert_eq!(StateLabel::JuegoTerminado.outcome(), None);
    }

    #[test]
    fn door_sampling_is_reproducible_per_seed() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10).map(|_| Door::random(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(draw(7), draw(7));
    }

    #[test]
    fn serde_uses_spanish_labels() {
        let json = serde_json::to_string(&StateLabel::EsperandoMovimiento).unwrap();
        assert_eq!(json, "\"esperando_movimiento\"");
        let json = serde_json::to_string(&InputSymbol::SeleccionarPuerta).unwrap();
        assert_eq!(json, "\"seleccionar_puerta\"");
    }
}
