//! Command-line front end: run programs and an interactive loop.
//!
//! Usage: kanren-cps [-c <config.toml>] [-i] [source_files...]
//!
//! Every printed symbol goes on its own line, followed by `ok` or
//! `not ok` for each query. Set `RUST_LOG=debug` to trace queries.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use tracing_subscriber::EnvFilter;

use kanren_cps::config::EngineConfig;
use kanren_cps::error::ParseError;
use kanren_cps::prelude::*;
use kanren_cps::syntax::parse;

const PROMPT: &str = "?- ";
const CONTINUATION: &str = ".. ";

#[derive(Parser, Debug)]
#[command(name = "kanren-cps", version, about = "Continuation-passing logic engine")]
struct Cli {
    /// Source files to evaluate, in order
    files: Vec<PathBuf>,

    /// Engine configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start the interactive loop after loading the source files
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let mut interpreter = Interpreter::with_config(config);

    for path in &cli.files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        for form in parse(&source).with_context(|| format!("in {}", path.display()))? {
            report(interpreter.eval(&form, &mut StdoutPrinter))
                .with_context(|| format!("in {}: {}", path.display(), form))?;
        }
    }

    if cli.files.is_empty() || cli.interactive {
        repl(&mut interpreter)?;
    }
    Ok(())
}

/// Print the result token of a query outcome.
fn report(outcome: std::result::Result<Outcome, kanren_cps::error::BuildError>) -> Result<()> {
    match outcome? {
        Outcome::Query(report) => println!("{}", report.result),
        Outcome::Defined(_) => {}
    }
    Ok(())
}

fn repl(interpreter: &mut Interpreter) -> Result<()> {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), DefaultHistory> =
        Editor::with_config(config).context("cannot start line editor")?;

    let mut buffer = String::new();
    loop {
        let prompt = if buffer.is_empty() { PROMPT } else { CONTINUATION };
        match rl.readline(prompt) {
            Ok(line) => {
                buffer.push_str(&line);
                buffer.push('\n');
                match parse(&buffer) {
                    // keep reading until every list is closed
                    Err(ParseError::Unclosed { .. }) => continue,
                    Err(e) => eprintln!("parse error: {}", e),
                    Ok(forms) => {
                        for form in forms {
                            if let Err(e) = report(interpreter.eval(&form, &mut StdoutPrinter)) {
                                eprintln!("{}", e);
                            }
                        }
                    }
                }
                buffer.clear();
            }
            Err(ReadlineError::Interrupted) => buffer.clear(),
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("cannot read input"),
        }
    }
    Ok(())
}
