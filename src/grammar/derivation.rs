//! Leftmost-derivation reconstruction from a derivation tree

use crate::tree::{NodeId, Tree};

use super::parser::EPSILON;

/// Reconstruct the step-by-step leftmost derivation encoded by a tree.
///
/// Starting from the root symbol, each expanded node replaces the first
/// occurrence of its symbol in the current sentential form with its
/// children's symbols, in pre-order. Terminal leaves and ε contribute no
/// step of their own.
pub fn derivation_steps(tree: &Tree<String>) -> Vec<String> {
    let mut current = tree.payload(tree.root()).clone();
    let mut steps = vec![current.clone()];
    expand(tree, tree.root(), &mut current, &mut steps);
    steps
}

fn expand(tree: &Tree<String>, id: NodeId, current: &mut String, steps: &mut Vec<String>) {
    let children = tree.children(id);
    if children.is_empty() {
        return;
    }
    let symbol = tree.payload(id);
    if symbol == EPSILON {
        return;
    }

    let rhs = children
        .iter()
        .map(|&c| tree.payload(c).as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let next = current.replacen(symbol.as_str(), &rhs, 1);
    if next != *current {
        *current = next;
        steps.push(current.clone());
    }

    for &child in children {
        if !tree.children(child).is_empty() {
            expand(tree, child, current, steps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parser::parse_command;

    #[test]
    fn door_command_derives_step_by_step() {
        let outcome = parse_command("puerta a");
        assert_eq!(
            outcome.derivation_steps(),
            vec!["S", "comando", "monty", "puerta", "puerta_a", "puerta a"]
        );
    }

    #[test]
    fn empty_command_derives_epsilon() {
        let outcome = parse_command("");
        assert_eq!(outcome.derivation_steps(), vec!["S", "ε"]);
    }

    #[test]
    fn two_word_control_ends_with_both_terminals() {
        let outcome = parse_command("otra vez");
        let steps = outcome.derivation_steps();
        assert_eq!(steps.first().map(String::as_str), Some("S"));
        assert_eq!(steps.last().map(String::as_str), Some("otra vez"));
    }
}
