//! dfa-trace CLI - validate words against predefined automata.
//!
//! Automata come from the built-in catalog and, optionally, a JSON
//! definition file. Every run prints the full trace as JSON.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dfa_trace::catalog::CatalogFile;
use dfa_trace::registry::{EntrySummary, Registry};
use dfa_trace::{Automaton, AutomatonProperties};
use serde::Serialize;
use stillwater::validation::Validation;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Validate words against deterministic finite automata.
#[derive(Parser, Debug)]
#[command(
    name = "dfa-trace",
    author,
    version,
    about = "Validate words against predefined DFAs and print the state trace",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// JSON file with extra automaton definitions.
    #[arg(long, global = true, env = "DFA_TRACE_DEFINITIONS")]
    definitions: Option<PathBuf>,

    /// Do not register the built-in automata.
    #[arg(long, global = true)]
    no_catalog: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate one word and print its trace.
    Run {
        /// Registered automaton name.
        name: String,

        /// Word to validate (may be empty).
        #[arg(default_value = "")]
        input: String,

        /// Pretty-print the JSON trace.
        #[arg(long)]
        pretty: bool,
    },

    /// List registered automata (default command).
    List,

    /// Show the full definition of one automaton.
    Describe {
        /// Registered automaton name.
        name: String,
    },

    /// Check every definition in a file and report all violations.
    Audit {
        /// Path to a JSON definition file.
        path: PathBuf,
    },

    /// Read `<name> <word>` lines from stdin and print a trace for each.
    Repl,
}

/// Output of `describe`: the registry summary plus the full transition table.
#[derive(Serialize)]
struct Description {
    #[serde(flatten)]
    summary: EntrySummary,
    properties: AutomatonProperties,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let command = cli.command.unwrap_or(Commands::List);

    // Auditing reads its own file and needs no registry.
    if let Commands::Audit { path } = &command {
        return audit(path);
    }

    let registry = load_registry(cli.definitions.as_deref(), cli.no_catalog)?;

    match command {
        Commands::Run {
            name,
            input,
            pretty,
        } => {
            let trace = registry.run(&name, &input)?;
            let json = if pretty {
                serde_json::to_string_pretty(&trace)?
            } else {
                serde_json::to_string(&trace)?
            };
            println!("{json}");
        }
        Commands::List => {
            let summaries: Vec<_> = registry.iter().map(|entry| entry.summary()).collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        Commands::Describe { name } => {
            let entry = registry.get(&name)?;
            let description = Description {
                summary: entry.summary(),
                properties: entry.automaton().properties(),
            };
            println!("{}", serde_json::to_string_pretty(&description)?);
        }
        Commands::Repl => repl(&registry)?,
        Commands::Audit { path } => audit(&path)?,
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise the verbosity flags pick the level.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_registry(definitions: Option<&Path>, no_catalog: bool) -> Result<Registry> {
    let mut registry = if no_catalog {
        Registry::new()
    } else {
        Registry::with_catalog()
    };

    if let Some(path) = definitions {
        let skipped = registry
            .load_file(path)
            .with_context(|| format!("Failed to load definitions from {}", path.display()))?;
        for failure in &skipped {
            warn!(error = %failure, "definition_skipped");
        }
    }

    if registry.is_empty() {
        bail!("No automata registered. Pass --definitions or drop --no-catalog");
    }

    info!(automata = registry.len(), "registry_ready");
    Ok(registry)
}

fn audit(path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file: CatalogFile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let mut failed = 0;
    for named in &file.automata {
        match Automaton::audit(&named.definition) {
            Validation::Success(_) => println!("{}: ok", named.name),
            Validation::Failure(errors) => {
                failed += 1;
                println!("{}: {} violation(s)", named.name, errors.len());
                for error in errors.iter() {
                    println!("  - {error}");
                }
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} definition(s) failed validation", file.automata.len());
    }
    Ok(())
}

fn repl(registry: &Registry) -> Result<()> {
    let names: Vec<_> = registry.names().collect();
    println!("Automata: {}", names.join(", "));
    println!("Enter `<name> <word>` to validate a word, or `exit` to quit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!(">> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        let (name, word) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match registry.run(name, word.trim()) {
            Ok(trace) => println!("{}", serde_json::to_string(&trace)?),
            Err(error) => println!("error: {error}"),
        }
    }

    Ok(())
}
