//! Static transition table of the game automaton
//!
//! The canonical successor order is table-declaration order: the engine's
//! "follow the first successor" rule and the export edge order both read the
//! table top to bottom, never a map's iteration order.

use crate::error::{Error, Result};

use super::states::{InputSymbol, StateLabel};

use InputSymbol::*;
use StateLabel::*;

/// `label × symbol → set of labels`, hand-authored. Entries with more than
/// one successor are the non-deterministic decision points of the game.
pub const TRANSITIONS: &[(StateLabel, InputSymbol, &[StateLabel])] = &[
    (Inicio, Comenzar, &[EsperandoMovimiento]),
    (EsperandoMovimiento, Derecha, &[FrentePuertas]),
    (EsperandoMovimiento, Izquierda, &[FrentePuertas]),
    (EsperandoMovimiento, Arriba, &[FrentePuertas]),
    (EsperandoMovimiento, Abajo, &[FrentePuertas]),
    (FrentePuertas, SeleccionarPuerta, &[PuertaSeleccionada]),
    (PuertaSeleccionada, Cambiar, &[OpcionCambiar]),
    (PuertaSeleccionada, Mantener, &[Ganar, Perder]),
    (OpcionCambiar, Confirmar, &[Ganar, Perder]),
    (Ganar, Continuar, &[JuegoTerminado]),
    (Perder, Continuar, &[JuegoTerminado]),
    (JuegoTerminado, Reiniciar, &[Inicio]),
];

/// Successor set for a `(state, input)` pair, or None when the table has no
/// entry. The returned slice preserves declaration order.
pub fn successors(state: StateLabel, input: InputSymbol) -> Option<&'static [StateLabel]> {
    TRANSITIONS
        .iter()
        .find(|(from, symbol, _)| *from == state && *symbol == input)
        .map(|(_, _, to)| *to)
}

/// Startup consistency check: every non-final label must have at least one
/// outgoing transition. A violation is an internal fault, not a game event.
pub fn validate_table() -> Result<()> {
    for &state in StateLabel::ALL {
        if state.is_final() {
            continue;
        }
        let has_exit = TRANSITIONS.iter().any(|(from, _, _)| *from == state);
        if !has_exit {
            return Err(Error::CorruptTransitionTable { state });
        }
    }
    Ok(())
}
