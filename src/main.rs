//! uLisp scanner driver.
//!
//! Reads uLisp source from a file or standard input and prints one line per
//! token until the input is exhausted.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ulisp::{Error, SExprScanner};

/// Print the tokens of a uLisp program
#[derive(Parser, Debug)]
#[command(name = "ulisp")]
#[command(version = ulisp::VERSION)]
#[command(about = "Scan uLisp source and print its tokens", long_about = None)]
struct Cli {
    /// Source file to scan (default: standard input)
    path: Option<PathBuf>,

    /// Emit one JSON object per token instead of the lexeme rendering
    #[arg(long)]
    json: bool,

    /// Report lexical errors and continue with the next line
    #[arg(short, long)]
    keep_going: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let clean = match &cli.path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run(SExprScanner::from_reader(BufReader::new(file)), &cli, &mut out)?
        }
        None => run(SExprScanner::from_reader(io::stdin().lock()), &cli, &mut out)?,
    };

    out.flush()?;
    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Logs go to stderr so stdout carries nothing but tokens.
fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}

/// Prints every token; returns `false` if any lexical error was reported.
fn run<R: BufRead>(mut scanner: SExprScanner<R>, cli: &Cli, out: &mut impl Write) -> Result<bool> {
    let mut clean = true;

    loop {
        match scanner.next_token() {
            Ok(Some(token)) => {
                if cli.json {
                    serde_json::to_writer(&mut *out, &token)?;
                    writeln!(out)?;
                } else {
                    writeln!(out, "{}", token)?;
                }
            }
            Ok(None) => break,
            Err(Error::Io(msg)) => anyhow::bail!("failed to read input: {}", msg),
            Err(err) => {
                clean = false;
                out.flush()?;
                eprintln!("{}", err);
                if !cli.keep_going {
                    break;
                }
                tracing::warn!(line = scanner.line(), "resuming at next line");
                scanner.skip_line();
            }
        }
    }

    Ok(clean)
}
