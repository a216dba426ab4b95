mod demo;

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cmdtree_core::{SenderKind, to_pretty_json};
use serde_json::json;

use crate::demo::{CliSender, build_tree};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "cmdtree",
    version,
    about = "cmdtree — dispatch and tab-complete command lines against the built-in demo tree"
)]
struct Cli {
    /// Output mode: "pretty" for terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// Sender kind used for gating.
    #[arg(long, global = true, value_enum, default_value_t = SenderArg::Interactive)]
    sender: SenderArg,

    /// Permission granted to the sender (repeatable).
    #[arg(long = "perm", global = true)]
    perms: Vec<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Dispatch a command line and print the messages the sender receives.
    Run {
        /// The line as typed after the command label, e.g. "join castle".
        line: String,
    },

    /// Print completion candidates for a (possibly partial) command line.
    /// A trailing space asks for candidates at the next position.
    Complete { line: String },

    /// Dump the demo tree's shape as pretty-printed JSON.
    Tree,
}

/// Sender kind flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SenderArg {
    /// A live user session (a player).
    Interactive,
    /// An automated origin (a console).
    NonInteractive,
}

impl From<SenderArg> for SenderKind {
    fn from(s: SenderArg) -> Self {
        match s {
            SenderArg::Interactive => SenderKind::Interactive,
            SenderArg::NonInteractive => SenderKind::NonInteractive,
        }
    }
}

// ── Output format ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Pretty,
    Json,
}

impl Format {
    /// Resolve an explicit flag, falling back to TTY detection.
    fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Tokenization ────────────────────────────────────────────────────────

/// Whitespace-split tokens for dispatch.
fn run_tokens(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Whitespace-split tokens for completion: a trailing space (or an empty
/// line) adds an empty token so candidates for the next position appear.
fn complete_tokens(line: &str) -> Vec<String> {
    let mut tokens = run_tokens(line);
    if line.is_empty() || line.ends_with(char::is_whitespace) {
        tokens.push(String::new());
    }
    tokens
}

// ── Main ────────────────────────────────────────────────────────────────

const LABEL: &str = "arena";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    let tree = build_tree()?;
    let sender = CliSender::new(cli.sender.into(), cli.perms);

    match cli.cmd {
        Cmd::Run { line } => {
            tree.dispatch(&sender, LABEL, &run_tokens(&line));
            let messages = sender.into_sent();
            match format {
                Format::Pretty => {
                    for message in &messages {
                        println!("{message}");
                    }
                }
                Format::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "label": LABEL,
                            "messages": messages,
                        }))?
                    );
                }
            }
        }

        Cmd::Complete { line } => {
            let candidates = tree.complete(&sender, LABEL, &complete_tokens(&line));
            match format {
                Format::Pretty => {
                    for candidate in &candidates {
                        println!("{candidate}");
                    }
                }
                Format::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "label": LABEL,
                            "candidates": candidates,
                        }))?
                    );
                }
            }
        }

        Cmd::Tree => {
            println!("{}", to_pretty_json(tree.node()));
        }
    }

    Ok(())
}
