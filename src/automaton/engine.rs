//! Automaton engine: configuration, history, decision tree, statistics

use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::tree::{NodeId, Tree};

use super::states::{Door, GameOutcome, InputSymbol, StateLabel};
use super::transitions::successors;

/// Monotonic win/loss counters for one session. Never decremented; cleared
/// only by a full session reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub wins: u64,
    pub losses: u64,
}

impl SessionStats {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Exito => self.wins += 1,
            GameOutcome::Fracaso => self.losses += 1,
        }
    }

    pub fn finished_games(&self) -> u64 {
        self.wins + self.losses
    }

    /// Win percentage over finished games; 0 when none have finished.
    pub fn win_percentage(&self) -> f64 {
        if self.finished_games() == 0 {
            0.0
        } else {
            self.wins as f64 / self.finished_games() as f64 * 100.0
        }
    }
}

/// Payload of one node in the automaton's branching decision history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionNode {
    pub state: StateLabel,
    /// Input that produced this node; None for the root.
    pub input: Option<InputSymbol>,
    pub outcome: Option<GameOutcome>,
    pub prize_door: Option<Door>,
    pub selected_door: Option<Door>,
}

/// One processed input in the transition history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionRecord {
    /// Monotonic per-episode step counter (deterministic timestamp stand-in).
    pub step: u64,
    pub from: Vec<StateLabel>,
    pub input: InputSymbol,
    pub to: Vec<StateLabel>,
    pub prize_door: Door,
    pub selected_door: Option<Door>,
}

/// Non-deterministic finite automaton for one game session.
///
/// Holds the ordered set of active state labels, the transition history, the
/// hidden prize door, the selected door, session statistics, and the full
/// decision tree of every branch taken or merely possible. One RNG per
/// instance; seeding it makes the outcome sequence reproducible.
#[derive(Debug)]
pub struct Automaton {
    configuration: Vec<StateLabel>,
    history: Vec<TransitionRecord>,
    prize_door: Door,
    selected_door: Option<Door>,
    stats: SessionStats,
    tree: Tree<DecisionNode>,
    current: NodeId,
    rng: StdRng,
    step: u64,
}

impl Automaton {
    /// Create an automaton with OS-entropy randomness.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create an automaton with a fixed seed for reproducible outcomes.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let prize_door = Door::random(&mut rng);
        let tree = Tree::new(DecisionNode {
            state: StateLabel::Inicio,
            input: None,
            outcome: None,
            prize_door: None,
            selected_door: None,
        });
        let current = tree.root();
        Automaton {
            configuration: vec![StateLabel::Inicio],
            history: Vec::new(),
            prize_door,
            selected_door: None,
            stats: SessionStats::default(),
            tree,
            current,
            rng,
            step: 0,
        }
    }

    /// Fire `comenzar`, moving a freshly constructed or reset automaton into
    /// `esperando_movimiento`.
    pub fn begin(&mut self) -> Result<()> {
        self.process(InputSymbol::Comenzar)
    }

    pub fn configuration(&self) -> &[StateLabel] {
        &self.configuration
    }

    pub fn prize_door(&self) -> Door {
        self.prize_door
    }

    pub fn selected_door(&self) -> Option<Door> {
        self.selected_door
    }

    /// Record the player's door choice ahead of `seleccionar_puerta`.
    pub fn select_door(&mut self, door: Door) {
        self.selected_door = Some(door);
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    pub fn decision_tree(&self) -> &Tree<DecisionNode> {
        &self.tree
    }

    /// Node of the canonical path the engine currently stands on.
    pub fn current_node(&self) -> NodeId {
        self.current
    }

    /// True iff the table has a transition for `input` from any active label.
    pub fn can_process(&self, input: InputSymbol) -> bool {
        !self.gather(input).is_empty()
    }

    /// True iff any active label has kind `final`.
    pub fn is_in_final_state(&self) -> bool {
        self.configuration.iter().any(|s| s.is_final())
    }

    /// Advance the automaton on `input`.
    ///
    /// Unions the successor sets of every active label (declaration order),
    /// records a history entry, appends one decision node per successor under
    /// the current node, follows the first new child, and replaces the
    /// configuration. Ambiguous successor sets (both win and loss) are routed
    /// through [`Automaton::resolve_door_choice`].
    ///
    /// # Errors
    ///
    /// `Error::NoMatchingTransition` when no active label accepts `input`;
    /// the configuration is unchanged and no history entry is recorded.
    pub fn process(&mut self, input: InputSymbol) -> Result<()> {
        let next = self.gather(input);
        if next.is_empty() {
            return Err(Error::NoMatchingTransition {
                input,
                configuration: self.configuration.clone(),
            });
        }

        if next.contains(&StateLabel::Ganar) && next.contains(&StateLabel::Perder) {
            self.resolve_door_choice(input)?;
            return Ok(());
        }

        self.push_record(input, &next);

        let parent = self.current;
        let mut first_child = None;
        for &label in &next {
            let node = self.tree.new_child(
                parent,
                DecisionNode {
                    state: label,
                    input: Some(input),
                    outcome: label.outcome(),
                    prize_door: Some(self.prize_door),
                    selected_door: self.selected_door,
                },
            );
            if let Some(outcome) = label.outcome() {
                self.stats.record(outcome);
            }
            first_child.get_or_insert(node);
        }

        // The engine follows a single canonical path: the first successor in
        // table order. Sibling branches stay in the tree for inspection.
        self.current = first_child.expect("successor set is non-empty");
        self.configuration = next;
        Ok(())
    }

    /// Resolve a non-deterministic win/loss transition against the hidden
    /// prize door.
    ///
    /// Appends both a `ganar` and a `perder` child under the current node,
    /// each tagged with its truth-computed result, increments exactly one
    /// statistic, follows the realized branch, and collapses the
    /// configuration to the realized singleton. `mantener` wins iff the
    /// selected door is the prize door; `confirmar` (after `cambiar`) wins
    /// iff it is not, since the host has already opened a losing door.
    ///
    /// # Errors
    ///
    /// `Error::NoMatchingTransition` when `input` has no ambiguous entry from
    /// the active configuration; `Error::NoDoorSelected` when no door choice
    /// was made.
    pub fn resolve_door_choice(&mut self, input: InputSymbol) -> Result<GameOutcome> {
        let next = self.gather(input);
        if !(next.contains(&StateLabel::Ganar) && next.contains(&StateLabel::Perder)) {
            return Err(Error::NoMatchingTransition {
                input,
                configuration: self.configuration.clone(),
            });
        }
        let selected = self.selected_door.ok_or(Error::NoDoorSelected)?;

        let staying_wins = selected == self.prize_door;
        let wins = if input == InputSymbol::Mantener {
            staying_wins
        } else {
            !staying_wins
        };
        let realized = if wins {
            StateLabel::Ganar
        } else {
            StateLabel::Perder
        };

        self.push_record(input, &[realized]);

        let parent = self.current;
        let win_node = self.tree.new_child(
            parent,
            DecisionNode {
                state: StateLabel::Ganar,
                input: Some(input),
                outcome: Some(if wins {
                    GameOutcome::Exito
                } else {
                    GameOutcome::Fracaso
                }),
                prize_door: Some(self.prize_door),
                selected_door: Some(selected),
            },
        );
        let loss_node = self.tree.new_child(
            parent,
            DecisionNode {
                state: StateLabel::Perder,
                input: Some(input),
                outcome: Some(if wins {
                    GameOutcome::Fracaso
                } else {
                    GameOutcome::Exito
                }),
                prize_door: Some(self.prize_door),
                selected_door: Some(selected),
            },
        );

        let outcome = if wins {
            self.current = win_node;
            GameOutcome::Exito
        } else {
            self.current = loss_node;
            GameOutcome::Fracaso
        };
        self.stats.record(outcome);
        self.configuration = vec![realized];
        Ok(outcome)
    }

    /// Start a fresh episode: new prize door, new decision tree, empty
    /// history, configuration back to `{inicio}`. Statistics are retained.
    pub fn reset_episode(&mut self) {
        self.prize_door = Door::random(&mut self.rng);
        self.selected_door = None;
        self.history.clear();
        self.step = 0;
        self.tree = Tree::new(DecisionNode {
            state: StateLabel::Inicio,
            input: None,
            outcome: None,
            prize_door: None,
            selected_door: None,
        });
        self.current = self.tree.root();
        self.configuration = vec![StateLabel::Inicio];
    }

    /// Episode reset plus cleared statistics.
    pub fn reset_session(&mut self) {
        self.reset_episode();
        self.stats = SessionStats::default();
    }

    fn gather(&self, input: InputSymbol) -> Vec<StateLabel> {
        let mut next = Vec::new();
        for &state in &self.configuration {
            if let Some(succ) = successors(state, input) {
                for &label in succ {
                    if !next.contains(&label) {
                        next.push(label);
                    }
                }
            }
        }
        next
    }

    fn push_record(&mut self, input: InputSymbol, to: &[StateLabel]) {
        self.step += 1;
        self.history.push(TransitionRecord {
            step: self.step,
            from: self.configuration.clone(),
            input,
            to: to.to_vec(),
            prize_door: self.prize_door,
            selected_door: self.selected_door,
        });
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}
