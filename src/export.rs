//! Serializable views of trees and the automaton graph
//!
//! The engine keeps arena-backed trees for cheap mutation; front ends want
//! nested JSON. This module flattens both the derivation tree and the
//! decision tree into recursive value types, and snapshots the full
//! transition graph with per-state rendering styles.

use serde::Serialize;

use crate::automaton::{
    Automaton, DecisionNode, Door, GameOutcome, InputSymbol, SessionStats, StateKind, StateLabel,
    TRANSITIONS,
};
use crate::tree::{NodeId, Tree};

/// Color and shape a renderer should use for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    pub color: &'static str,
    pub shape: &'static str,
}

/// Style applied to syntax-error nodes in derivation trees.
pub const ERROR_STYLE: NodeStyle = NodeStyle {
    color: "#FF5722",
    shape: "box",
};

/// Rendering style for a state, keyed by its role in the game.
pub fn style_for(label: StateLabel) -> NodeStyle {
    match label {
        StateLabel::Inicio => NodeStyle {
            color: "#4CAF50",
            shape: "circle",
        },
        StateLabel::EsperandoMovimiento | StateLabel::FrentePuertas => NodeStyle {
            color: "#2196F3",
            shape: "box",
        },
        StateLabel::PuertaSeleccionada | StateLabel::OpcionCambiar => NodeStyle {
            color: "#FF9800",
            shape: "diamond",
        },
        StateLabel::Ganar => NodeStyle {
            color: "#4CAF50",
            shape: "star",
        },
        StateLabel::Perder => NodeStyle {
            color: "#F44336",
            shape: "triangle",
        },
        StateLabel::JuegoTerminado => NodeStyle {
            color: "#9C27B0",
            shape: "hexagon",
        },
    }
}

/// A derivation tree node, nested for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolNode {
    pub symbol: String,
    pub children: Vec<SymbolNode>,
}

impl SymbolNode {
    pub fn from_tree(tree: &Tree<String>) -> SymbolNode {
        Self::build(tree, tree.root())
    }

    fn build(tree: &Tree<String>, id: NodeId) -> SymbolNode {
        SymbolNode {
            symbol: tree.payload(id).clone(),
            children: tree
                .children(id)
                .iter()
                .map(|&child| Self::build(tree, child))
                .collect(),
        }
    }
}

/// A decision tree node, nested for serialization. `current` marks the
/// branch the episode actually followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionTreeNode {
    pub state: StateLabel,
    pub input: Option<InputSymbol>,
    pub outcome: Option<GameOutcome>,
    pub prize_door: Option<Door>,
    pub selected_door: Option<Door>,
    pub style: NodeStyle,
    pub current: bool,
    pub children: Vec<DecisionTreeNode>,
}

/// Flatten the episode's decision tree, unexplored branches included.
pub fn decision_tree(automaton: &Automaton) -> DecisionTreeNode {
    let tree = automaton.decision_tree();
    build_decision(tree, tree.root(), automaton.current_node())
}

fn build_decision(
    tree: &Tree<DecisionNode>,
    id: NodeId,
    current: NodeId,
) -> DecisionTreeNode {
    let node = tree.payload(id);
    DecisionTreeNode {
        state: node.state,
        input: node.input,
        outcome: node.outcome,
        prize_door: node.prize_door,
        selected_door: node.selected_door,
        style: style_for(node.state),
        current: id == current,
        children: tree
            .children(id)
            .iter()
            .map(|&child| build_decision(tree, child, current))
            .collect(),
    }
}

/// One state in the exported automaton graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateInfo {
    pub label: StateLabel,
    pub kind: StateKind,
    pub description: &'static str,
    pub style: NodeStyle,
    pub active: bool,
}

/// One edge in the exported automaton graph. Non-deterministic edges carry
/// every successor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionEdge {
    pub from: StateLabel,
    pub input: InputSymbol,
    pub to: Vec<StateLabel>,
}

/// The full transition graph plus the live configuration and running stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutomatonGraph {
    pub states: Vec<StateInfo>,
    pub edges: Vec<TransitionEdge>,
    pub configuration: Vec<StateLabel>,
    pub stats: SessionStats,
}

pub fn automaton_graph(automaton: &Automaton) -> AutomatonGraph {
    let configuration = automaton.configuration();
    AutomatonGraph {
        states: StateLabel::ALL
            .iter()
            .map(|&label| StateInfo {
                label,
                kind: label.kind(),
                description: label.description(),
                style: style_for(label),
                active: configuration.contains(&label),
            })
            .collect(),
        edges: TRANSITIONS
            .iter()
            .map(|&(from, input, to)| TransitionEdge {
                from,
                input,
                to: to.to_vec(),
            })
            .collect(),
        configuration: configuration.to_vec(),
        stats: automaton.stats(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_and_loss_states_carry_their_palette() {
        assert_eq!(style_for(StateLabel::Ganar).shape, "star");
        assert_eq!(style_for(StateLabel::Perder).color, "#F44336");
        assert_eq!(
            style_for(StateLabel::Inicio).color,
            style_for(StateLabel::Ganar).color
        );
    }

    #[test]
    fn graph_lists_every_state_and_edge() {
        let automaton = Automaton::with_seed(3);
        let graph = automaton_graph(&automaton);
        assert_eq!(graph.states.len(), StateLabel::ALL.len());
        assert_eq!(graph.edges.len(), TRANSITIONS.len());
    }

    #[test]
    fn decision_tree_marks_the_followed_branch() {
        use crate::automaton::{Door, InputSymbol};

        let mut automaton = Automaton::with_seed(9);
        automaton.begin().unwrap();
        automaton.process(InputSymbol::Derecha).unwrap();
        automaton.select_door(Door::B);
        automaton.process(InputSymbol::SeleccionarPuerta).unwrap();
        automaton
            .resolve_door_choice(InputSymbol::Mantener)
            .unwrap();

        let root = decision_tree(&automaton);
        assert_eq!(root.state, StateLabel::Inicio);
        assert!(!root.current);

        fn count_current(node: &DecisionTreeNode) -> usize {
            usize::from(node.current)
                + node.children.iter().map(count_current).sum::<usize>()
        }
        assert_eq!(count_current(&root), 1);
    }

    #[test]
    fn symbol_tree_flattens_depth_first() {
        let outcome = crate::grammar::parse_command("puerta a");
        let node = SymbolNode::from_tree(&outcome.tree);
        assert_eq!(node.symbol, "S");
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].symbol, "comando");
    }
}
