//! listc
//!
//! Command-line front end: scans and checks a typed list file and prints the
//! token table and the syntax error log.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use listlang::report::{self, Analysis, Streams};
use listlang::ScannerConfig;

/// Typed list checker
#[derive(Parser, Debug)]
#[command(name = "listc")]
#[command(version = "0.1.0")]
#[command(about = "Tokenizer and syntax checker for `ID = [ elem, ... ];` lists")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file; standard input when omitted or `-`
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Read whole string literals instead of emitting a quote marker
    #[arg(long, global = true)]
    strings: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Print the token table
    Tokens {
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Print the syntax error log
    Check {
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Print both (default)
    Analyze {
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(valid) => process::exit(if valid { 0 } else { 1 }),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}

/// Returns whether the parser accepted the input
fn run(cli: &Cli) -> Result<bool> {
    let (streams, input) = match &cli.command {
        Some(Commands::Tokens { input }) => (Streams::Tokens, input.as_ref()),
        Some(Commands::Check { input }) => (Streams::Errors, input.as_ref()),
        Some(Commands::Analyze { input }) => (Streams::Both, input.as_ref()),
        None => (Streams::Both, None),
    };
    let source = read_source(input.or(cli.input.as_ref()))?;
    let config = ScannerConfig { read_string_literals: cli.strings };
    let analysis = report::analyze(&source, &config);
    info!(
        "{} tokens ({} lexical errors), {} syntax errors",
        analysis.tokens.len(),
        analysis.lexical_error_count(),
        analysis.errors.len()
    );

    match cli.format {
        Format::Json => println!("{}", report::to_json(&analysis, streams)?),
        Format::Text => print_text(streams, &analysis),
    }

    Ok(analysis.is_valid())
}

fn print_text(streams: Streams, analysis: &Analysis) {
    if streams.tokens() {
        print!("{}", report::render_token_table(&analysis.tokens));
    }
    if streams == Streams::Both {
        println!();
    }
    if streams.errors() {
        println!("{}", report::render_errors(&analysis.errors));
    }
}

fn read_source(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading standard input")?;
            Ok(buf)
        }
    }
}
