//! Recursive-descent recognizer for the voice-command grammar
//!
//! One routine per non-terminal. Each routine inspects unconsumed lookahead
//! to select a production, records the chosen rule in the trace before
//! descending (pre-order), and either consumes exactly the tokens its
//! production requires or fails without consuming anything. No routine
//! backtracks, so a failure at any depth leaves the token position where the
//! caller left it.
//!
//! Parsing itself never fails as an operation: every outcome, including
//! malformed input, is represented in the returned tree and validity flag.

use crate::tree::{NodeId, Tree};

use super::rules::{
    DOOR_LETTERS, EPSILON_INPUT, GrammarRule, MOVEMENT_WORDS, NonTerminal, find_rule,
};
use super::tokenizer::tokenize;

/// Symbol of the ε leaf produced for empty input.
pub const EPSILON: &str = "ε";

/// Root symbol of the error-marker tree built for unrecognized input.
pub const SYNTAX_ERROR: &str = "error de sintaxis";

/// Result of parsing one command.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The token sequence that was parsed.
    pub tokens: Vec<String>,
    /// Derivation tree; on failure an error-marker tree that still shows the
    /// partial derivation where one exists.
    pub tree: Tree<String>,
    /// Rules applied, in the order productions were chosen (pre-order).
    pub trace: Vec<&'static GrammarRule>,
    /// True iff `S` succeeded and every token was consumed.
    pub valid: bool,
    /// Human-readable failure description when `valid` is false.
    pub reason: Option<String>,
}

impl ParseOutcome {
    /// Leftmost-derivation string sequence reconstructed from the tree.
    pub fn derivation_steps(&self) -> Vec<String> {
        super::derivation::derivation_steps(&self.tree)
    }

    /// Terminal leaves of the tree in left-to-right order, excluding ε.
    /// Only meaningful for valid parses (error trees carry marker nodes).
    pub fn terminal_leaves(&self) -> Vec<&str> {
        self.tree
            .pre_order()
            .filter(|&id| self.tree.children(id).is_empty())
            .map(|id| self.tree.payload(id).as_str())
            .filter(|symbol| *symbol != EPSILON)
            .collect()
    }
}

/// Tokenize and parse a raw command string.
pub fn parse_command(raw: &str) -> ParseOutcome {
    parse(tokenize(raw))
}

/// Parse an already tokenized command.
pub fn parse(tokens: Vec<String>) -> ParseOutcome {
    let mut descent = Descent::new(&tokens);
    let matched = descent.parse_s();
    let Descent {
        pos, trace, tree, ..
    } = descent;

    if !matched {
        // Hard failure: no derivation exists; synthesize an explicit error
        // root with one explanatory child.
        let mut err_tree = Tree::new(SYNTAX_ERROR.to_string());
        let root = err_tree.root();
        err_tree.new_child(
            root,
            "se encontró un token inesperado o falta una producción válida".to_string(),
        );
        return ParseOutcome {
            tokens,
            tree: err_tree,
            trace,
            valid: false,
            reason: Some("no production matches the command".to_string()),
        };
    }

    if pos < tokens.len() {
        // Leftover tokens: keep the partial derivation visible and name the
        // first unexpected token.
        let unexpected = tokens[pos].clone();
        let mut tree = tree;
        tree.reroot(SYNTAX_ERROR.to_string());
        let root = tree.root();
        tree.new_child(root, format!("token inesperado: {unexpected}"));
        return ParseOutcome {
            tokens,
            tree,
            trace,
            valid: false,
            reason: Some(format!("unexpected trailing token '{unexpected}'")),
        };
    }

    ParseOutcome {
        tokens,
        tree,
        trace,
        valid: true,
        reason: None,
    }
}

struct Descent<'a> {
    tokens: &'a [String],
    pos: usize,
    trace: Vec<&'static GrammarRule>,
    tree: Tree<String>,
}

impl<'a> Descent<'a> {
    fn new(tokens: &'a [String]) -> Self {
        Descent {
            tokens,
            pos: 0,
            trace: Vec::new(),
            tree: Tree::new(NonTerminal::S.as_str().to_string()),
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn peek_ahead(&self, offset: usize) -> Option<&'a str> {
        self.tokens.get(self.pos + offset).map(String::as_str)
    }

    /// Consume the next token iff it equals `expected` and attach it as a
    /// terminal leaf under `parent`.
    fn consume_leaf(&mut self, parent: NodeId, expected: &str) -> Option<()> {
        if self.peek() != Some(expected) {
            return None;
        }
        self.pos += 1;
        let leaf = self.tree.new_node(expected.to_string());
        self.tree.attach(parent, leaf);
        Some(())
    }

    fn record(&mut self, lhs: NonTerminal, matched_input: &str) {
        let rule = find_rule(lhs, matched_input)
            .expect("every production choice exists in the static grammar table");
        self.trace.push(rule);
    }

    fn non_terminal_node(&mut self, nt: NonTerminal) -> NodeId {
        self.tree.new_node(nt.as_str().to_string())
    }

    /// `S → comando | ε`
    fn parse_s(&mut self) -> bool {
        let root = self.tree.root();
        if self.peek().is_some() {
            self.record(NonTerminal::S, "comando");
            match self.parse_comando() {
                Some(child) => {
                    self.tree.attach(root, child);
                    true
                }
                None => false,
            }
        } else {
            self.record(NonTerminal::S, EPSILON_INPUT);
            let eps = self.tree.new_node(EPSILON.to_string());
            self.tree.attach(root, eps);
            true
        }
    }

    /// `comando → movimiento | monty | juego`
    fn parse_comando(&mut self) -> Option<NodeId> {
        let token = self.peek()?;
        let child = if MOVEMENT_WORDS.contains(&token) {
            self.record(NonTerminal::Comando, "movimiento");
            self.parse_movimiento()?
        } else if matches!(
            token,
            "puerta" | "cambiar" | "mantener" | "cerrar" | "reiniciar" | "otra"
        ) {
            self.record(NonTerminal::Comando, "monty");
            self.parse_monty()?
        } else if token == "nueva" {
            self.record(NonTerminal::Comando, "juego");
            self.parse_juego()?
        } else {
            return None;
        };

        let node = self.non_terminal_node(NonTerminal::Comando);
        self.tree.attach(node, child);
        Some(node)
    }

    /// `movimiento → "izquierda" | "derecha" | "arriba" | "abajo"`
    fn parse_movimiento(&mut self) -> Option<NodeId> {
        let token = self.peek()?;
        if !MOVEMENT_WORDS.contains(&token) {
            return None;
        }
        self.record(NonTerminal::Movimiento, token);
        let node = self.non_terminal_node(NonTerminal::Movimiento);
        self.consume_leaf(node, token)?;
        Some(node)
    }

    /// `monty → puerta | accion | control`
    fn parse_monty(&mut self) -> Option<NodeId> {
        let token = self.peek()?;
        let child = match token {
            "puerta" => {
                self.record(NonTerminal::Monty, "puerta");
                self.parse_puerta()?
            }
            "cambiar" | "mantener" => {
                self.record(NonTerminal::Monty, "accion");
                self.parse_accion()?
            }
            "cerrar" | "reiniciar" | "otra" => {
                self.record(NonTerminal::Monty, "control");
                self.parse_control()?
            }
            _ => return None,
        };

        let node = self.non_terminal_node(NonTerminal::Monty);
        self.tree.attach(node, child);
        Some(node)
    }

    /// `puerta → puerta_a | puerta_b | puerta_c` (two-token lookahead)
    fn parse_puerta(&mut self) -> Option<NodeId> {
        if self.peek() != Some("puerta") {
            return None;
        }
        let letter = self.peek_ahead(1)?;
        if !DOOR_LETTERS.contains(&letter) {
            return None;
        }
        let nt = match letter {
            "a" => NonTerminal::PuertaA,
            "b" => NonTerminal::PuertaB,
            _ => NonTerminal::PuertaC,
        };
        self.record(NonTerminal::Puerta, nt.as_str());
        let child = self.parse_puerta_letter(nt, letter)?;
        let node = self.non_terminal_node(NonTerminal::Puerta);
        self.tree.attach(node, child);
        Some(node)
    }

    /// `puerta_<x> → "puerta" "<x>"`
    fn parse_puerta_letter(&mut self, nt: NonTerminal, letter: &str) -> Option<NodeId> {
        self.record(nt, &format!("puerta {letter}"));
        let node = self.non_terminal_node(nt);
        self.consume_leaf(node, "puerta")?;
        self.consume_leaf(node, letter)?;
        Some(node)
    }

    /// `accion → "cambiar" | "mantener"`
    fn parse_accion(&mut self) -> Option<NodeId> {
        let token = self.peek()?;
        if !matches!(token, "cambiar" | "mantener") {
            return None;
        }
        self.record(NonTerminal::Accion, token);
        let node = self.non_terminal_node(NonTerminal::Accion);
        self.consume_leaf(node, token)?;
        Some(node)
    }

    /// `control → "cerrar" | "reiniciar" | "otra" "vez"` (two-token lookahead
    /// for the last production)
    fn parse_control(&mut self) -> Option<NodeId> {
        let token = self.peek()?;
        match token {
            "cerrar" | "reiniciar" => {
                self.record(NonTerminal::Control, token);
                let node = self.non_terminal_node(NonTerminal::Control);
                self.consume_leaf(node, token)?;
                Some(node)
            }
            "otra" if self.peek_ahead(1) == Some("vez") => {
                self.record(NonTerminal::Control, "otra vez");
                let node = self.non_terminal_node(NonTerminal::Control);
                self.consume_leaf(node, "otra")?;
                self.consume_leaf(node, "vez")?;
                Some(node)
            }
            _ => None,
        }
    }

    /// `juego → nueva`
    fn parse_juego(&mut self) -> Option<NodeId> {
        if self.peek() != Some("nueva") || self.peek_ahead(1) != Some("partida") {
            return None;
        }
        self.record(NonTerminal::Juego, "nueva");
        let child = self.parse_nueva()?;
        let node = self.non_terminal_node(NonTerminal::Juego);
        self.tree.attach(node, child);
        Some(node)
    }

    /// `nueva → "nueva" "partida"`
    fn parse_nueva(&mut self) -> Option<NodeId> {
        self.record(NonTerminal::Nueva, "nueva partida");
        let node = self.non_terminal_node(NonTerminal::Nueva);
        self.consume_leaf(node, "nueva")?;
        self.consume_leaf(node, "partida")?;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_movement_parses() {
        let outcome = parse_command("derecha");
        assert!(outcome.valid);
        assert_eq!(outcome.terminal_leaves(), vec!["derecha"]);
        assert_eq!(outcome.tree.payload(outcome.tree.root()), "S");
    }

    #[test]
    fn failed_parse_consumes_nothing_and_reports_marker_tree() {
        let outcome = parse_command("puerta d");
        assert!(!outcome.valid);
        assert_eq!(outcome.tree.payload(outcome.tree.root()), SYNTAX_ERROR);
        // The trace still shows the pre-order choices made before failing.
        let productions: Vec<_> = outcome.trace.iter().map(|r| r.production).collect();
        assert_eq!(productions, vec!["S → comando", "comando → monty"]);
    }

    #[test]
    fn leftover_tokens_wrap_partial_tree() {
        let outcome = parse_command("derecha arriba");
        assert!(!outcome.valid);
        let root = outcome.tree.root();
        assert_eq!(outcome.tree.payload(root), SYNTAX_ERROR);
        let children = outcome.tree.children(root);
        assert_eq!(children.len(), 2);
        assert_eq!(outcome.tree.payload(children[0]), "S");
        assert_eq!(
            outcome.tree.payload(children[1]),
            "token inesperado: arriba"
        );
    }

    #[test]
    fn empty_input_is_a_valid_epsilon_parse() {
        let outcome = parse(Vec::new());
        assert!(outcome.valid);
        let root = outcome.tree.root();
        let children = outcome.tree.children(root);
        assert_eq!(children.len(), 1);
        assert_eq!(outcome.tree.payload(children[0]), EPSILON);
        assert_eq!(outcome.trace.len(), 1);
        assert_eq!(outcome.trace[0].production, "S → ε");
    }

    #[test]
    fn two_token_commands_need_their_second_word() {
        assert!(parse_command("otra vez").valid);
        assert!(!parse_command("otra").valid);
        assert!(parse_command("nueva partida").valid);
        assert!(!parse_command("nueva").valid);
    }
}
