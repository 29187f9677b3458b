//! Integration tests for the game automaton

use montymaze::automaton::{
    Automaton, Door, GameOutcome, InputSymbol, StateLabel, successors, validate_table,
};

#[test]
fn table_is_consistent_at_startup() {
    validate_table().unwrap();
}

#[test]
fn full_episode_walks_the_canonical_path() {
    let mut automaton = Automaton::with_seed(5);
    automaton.begin().unwrap();
    assert_eq!(
        automaton.configuration(),
        &[StateLabel::EsperandoMovimiento]
    );

    automaton.process(InputSymbol::Derecha).unwrap();
    assert_eq!(automaton.configuration(), &[StateLabel::FrentePuertas]);

    automaton.select_door(Door::A);
    automaton.process(InputSymbol::SeleccionarPuerta).unwrap();
    assert_eq!(automaton.configuration(), &[StateLabel::PuertaSeleccionada]);

    let prize = automaton.prize_door();
    let outcome = automaton
        .resolve_door_choice(InputSymbol::Mantener)
        .unwrap();
    assert_eq!(outcome.is_win(), prize == Door::A);
    assert_eq!(automaton.configuration().len(), 1);
    assert!(automaton.is_in_final_state());
    assert_eq!(automaton.stats().finished_games(), 1);

    let history = automaton.history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].input, InputSymbol::Comenzar);
    assert_eq!(history[0].step, 1);
    let last = &history[3];
    assert_eq!(last.from, vec![StateLabel::PuertaSeleccionada]);
    assert_eq!(last.to.len(), 1);
    assert_eq!(last.selected_door, Some(Door::A));
}

#[test]
fn resolving_keeps_both_branches_in_the_tree() {
    let mut automaton = Automaton::with_seed(11);
    automaton.begin().unwrap();
    automaton.process(InputSymbol::Arriba).unwrap();
    automaton.select_door(Door::B);
    automaton.process(InputSymbol::SeleccionarPuerta).unwrap();
    automaton
        .resolve_door_choice(InputSymbol::Mantener)
        .unwrap();

    let tree = automaton.decision_tree();
    let current = automaton.current_node();
    let parent = tree.parent(current).unwrap();
    let siblings = tree.children(parent);
    assert_eq!(siblings.len(), 2);
    assert_eq!(tree.payload(siblings[0]).state, StateLabel::Ganar);
    assert_eq!(tree.payload(siblings[1]).state, StateLabel::Perder);
    // Exactly one branch carries the realized success.
    let outcomes: Vec<_> = siblings
        .iter()
        .map(|&id| tree.payload(id).outcome.unwrap())
        .collect();
    assert!(outcomes.contains(&GameOutcome::Exito));
    assert!(outcomes.contains(&GameOutcome::Fracaso));
}

#[test]
fn switching_inverts_the_staying_outcome() {
    let mut automaton = Automaton::with_seed(17);
    automaton.begin().unwrap();
    automaton.process(InputSymbol::Izquierda).unwrap();

    // Pick a door that is not the prize, so switching must win.
    let prize = automaton.prize_door();
    let losing_pick = Door::ALL
        .iter()
        .copied()
        .find(|&door| door != prize)
        .unwrap();
    automaton.select_door(losing_pick);
    automaton.process(InputSymbol::SeleccionarPuerta).unwrap();

    automaton.process(InputSymbol::Cambiar).unwrap();
    assert_eq!(automaton.configuration(), &[StateLabel::OpcionCambiar]);
    let outcome = automaton
        .resolve_door_choice(InputSymbol::Confirmar)
        .unwrap();
    assert!(outcome.is_win());
}

#[test]
fn rejected_input_leaves_everything_unchanged() {
    let mut automaton = Automaton::with_seed(3);
    let err = automaton.process(InputSymbol::Derecha).unwrap_err();
    assert_eq!(
        err,
        montymaze::Error::NoMatchingTransition {
            input: InputSymbol::Derecha,
            configuration: vec![StateLabel::Inicio],
        }
    );
    assert_eq!(automaton.configuration(), &[StateLabel::Inicio]);
    assert!(automaton.history().is_empty());
}

#[test]
fn resolving_without_a_door_choice_fails() {
    let mut automaton = Automaton::with_seed(3);
    automaton.begin().unwrap();
    automaton.process(InputSymbol::Abajo).unwrap();
    automaton.process(InputSymbol::SeleccionarPuerta).unwrap();
    let err = automaton
        .resolve_door_choice(InputSymbol::Mantener)
        .unwrap_err();
    assert_eq!(err, montymaze::Error::NoDoorSelected);
}

#[test]
fn finished_game_only_accepts_continuation() {
    let mut automaton = Automaton::with_seed(7);
    automaton.begin().unwrap();
    automaton.process(InputSymbol::Derecha).unwrap();
    automaton.select_door(Door::C);
    automaton.process(InputSymbol::SeleccionarPuerta).unwrap();
    automaton
        .resolve_door_choice(InputSymbol::Mantener)
        .unwrap();

    assert!(!automaton.can_process(InputSymbol::Derecha));
    assert!(automaton.can_process(InputSymbol::Continuar));
    automaton.process(InputSymbol::Continuar).unwrap();
    assert_eq!(automaton.configuration(), &[StateLabel::JuegoTerminado]);
    assert!(automaton.can_process(InputSymbol::Reiniciar));
}

#[test]
fn same_seed_reproduces_the_prize_sequence() {
    let mut first = Automaton::with_seed(1234);
    let mut second = Automaton::with_seed(1234);
    for _ in 0..10 {
        assert_eq!(first.prize_door(), second.prize_door());
        first.reset_episode();
        second.reset_episode();
    }
}

#[test]
fn episode_reset_retains_stats_and_session_reset_clears_them() {
    let mut automaton = Automaton::with_seed(2);
    automaton.begin().unwrap();
    automaton.process(InputSymbol::Derecha).unwrap();
    automaton.select_door(Door::A);
    automaton.process(InputSymbol::SeleccionarPuerta).unwrap();
    automaton
        .resolve_door_choice(InputSymbol::Mantener)
        .unwrap();
    assert_eq!(automaton.stats().finished_games(), 1);

    automaton.reset_episode();
    assert_eq!(automaton.configuration(), &[StateLabel::Inicio]);
    assert!(automaton.history().is_empty());
    assert_eq!(automaton.decision_tree().len(), 1);
    assert_eq!(automaton.stats().finished_games(), 1);

    automaton.reset_session();
    assert_eq!(automaton.stats().finished_games(), 0);
}

#[test]
fn successor_order_follows_table_declaration() {
    assert_eq!(
        successors(StateLabel::PuertaSeleccionada, InputSymbol::Mantener),
        Some(&[StateLabel::Ganar, StateLabel::Perder][..])
    );
}
