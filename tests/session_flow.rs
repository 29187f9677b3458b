//! Integration tests for the full command pipeline

use montymaze::{Error, GameSession, MAX_HISTORY, StateLabel};

#[test]
fn empty_and_punctuation_only_input_is_rejected_first() {
    let mut session = GameSession::with_seed(1);
    assert_eq!(session.submit("").unwrap_err(), Error::EmptyInput);
    assert_eq!(session.submit("   ").unwrap_err(), Error::EmptyInput);
    assert_eq!(session.submit("...").unwrap_err(), Error::EmptyInput);
}

#[test]
fn ungrammatical_commands_are_rejected_with_a_reason() {
    let mut session = GameSession::with_seed(1);
    match session.submit("puerta d").unwrap_err() {
        Error::GrammarRejected { command, .. } => assert_eq!(command, "puerta d"),
        other => panic!("expected GrammarRejected, got {other:?}"),
    }
}

#[test]
fn grammatical_but_untimely_commands_are_rejected_by_state() {
    let mut session = GameSession::with_seed(1);
    match session.submit("cambiar").unwrap_err() {
        Error::IllegalInCurrentState { configuration, .. } => {
            assert_eq!(configuration, vec![StateLabel::EsperandoMovimiento]);
        }
        other => panic!("expected IllegalInCurrentState, got {other:?}"),
    }
    // The rejection did not consume the turn.
    assert!(session.submit("derecha").is_ok());
}

#[test]
fn accepted_commands_produce_a_full_report() {
    let mut session = GameSession::with_seed(8);
    let report = session.submit("Derecha.").unwrap();
    assert_eq!(report.normalized, "derecha");
    assert!(report.valid);
    assert!(!report.trace.is_empty());
    assert_eq!(report.derivation_steps.first().map(String::as_str), Some("S"));
    assert_eq!(report.configuration, vec![StateLabel::FrentePuertas]);
}

#[test]
fn salir_closes_a_finished_game() {
    let mut session = GameSession::with_seed(8);
    session.submit("derecha").unwrap();
    session.submit("puerta a").unwrap();
    session.submit("mantener").unwrap();
    session.submit("salir").unwrap();
    assert_eq!(session.configuration(), &[StateLabel::JuegoTerminado]);
}

#[test]
fn reiniciar_keeps_stats_and_nueva_partida_clears_them() {
    let mut session = GameSession::with_seed(8);
    session.submit("derecha").unwrap();
    session.submit("puerta b").unwrap();
    session.submit("cambiar").unwrap();
    assert_eq!(session.stats().finished_games(), 1);

    session.submit("reiniciar").unwrap();
    assert_eq!(session.stats().finished_games(), 1);
    assert_eq!(session.configuration(), &[StateLabel::EsperandoMovimiento]);

    session.submit("nueva partida").unwrap();
    assert_eq!(session.stats().finished_games(), 0);
}

#[test]
fn otra_vez_starts_a_new_episode() {
    let mut session = GameSession::with_seed(8);
    session.submit("derecha").unwrap();
    session.submit("puerta c").unwrap();
    session.submit("mantener").unwrap();
    session.submit("otra vez").unwrap();
    assert_eq!(session.configuration(), &[StateLabel::EsperandoMovimiento]);
    assert!(session.submit("izquierda").is_ok());
}

#[test]
fn history_is_bounded() {
    let mut session = GameSession::with_seed(8);
    for _ in 0..(MAX_HISTORY + 10) {
        let _ = session.submit("volar");
    }
    assert_eq!(session.history().count(), MAX_HISTORY);
    // Every surviving entry is the rejected command, oldest evicted first.
    assert!(session.history().all(|entry| !entry.accepted));
}

#[test]
fn analyze_never_touches_game_state() {
    let session = GameSession::with_seed(8);
    let outcome = session.analyze("puerta a");
    assert!(outcome.valid);
    assert_eq!(session.configuration(), &[StateLabel::EsperandoMovimiento]);
    assert_eq!(session.history().count(), 0);
}
