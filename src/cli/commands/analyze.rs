//! Analyze command - Run a voice command through the grammar alone

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::cli::output::{print_kv, print_section, print_subsection};
use crate::grammar::{self, GrammarRule};
use crate::session::normalize;

#[derive(Parser, Debug)]
#[command(about = "Validate a command against the grammar and show its derivation")]
pub struct AnalyzeArgs {
    /// The voice command to analyze, e.g. "puerta a"
    pub command: String,

    /// Emit the full analysis as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct AnalysisExport {
    raw: String,
    normalized: String,
    tokens: Vec<String>,
    valid: bool,
    reason: Option<String>,
    derivation_tree: crate::export::SymbolNode,
    rule_trace: Vec<GrammarRule>,
    derivation_steps: Vec<String>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let normalized = normalize(&args.command);
    let outcome = grammar::parse_command(&normalized);

    if args.json {
        let export = AnalysisExport {
            raw: args.command.clone(),
            normalized,
            tokens: outcome.tokens.clone(),
            valid: outcome.valid,
            reason: outcome.reason.clone(),
            derivation_tree: crate::export::SymbolNode::from_tree(&outcome.tree),
            rule_trace: outcome.trace.iter().map(|rule| **rule).collect(),
            derivation_steps: outcome.derivation_steps(),
        };
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    print_section("Análisis gramatical");
    print_kv("Comando", &args.command);
    print_kv("Normalizado", &normalized);
    print_kv("Tokens", &format!("{:?}", outcome.tokens));
    print_kv(
        "Resultado",
        if outcome.valid {
            "válido"
        } else {
            grammar::SYNTAX_ERROR
        },
    );
    if let Some(reason) = &outcome.reason {
        print_kv("Motivo", reason);
    }

    print_subsection("Árbol de derivación");
    print!("{}", outcome.tree.render_with(|symbol| symbol.clone()));

    if !outcome.trace.is_empty() {
        print_subsection("Reglas aplicadas");
        for (index, rule) in outcome.trace.iter().enumerate() {
            println!("  {:2}. {}", index + 1, rule.production);
        }
    }

    print_subsection("Derivación por la izquierda");
    for step in outcome.derivation_steps() {
        println!("  ⇒ {step}");
    }

    Ok(())
}
