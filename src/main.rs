//! Compare the top-level contents of two directories by name.
//!
//! Prints `< name` for names only in LEFT, `> name` for names only in RIGHT,
//! and, with `--show-common`, `= name` for names in both.

mod core;
mod error;
mod report;

use std::future::Future;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::task::JoinHandle;

use crate::core::compare::DirComparison;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    args_override_self = true,
    about = "Find differences in directory contents on one level by name"
)]
struct Cli {
    /// Left (reference) directory.
    left: PathBuf,

    /// Right (difference) directory, compared against the contents of LEFT.
    right: PathBuf,

    /// Also show names that are in both directories.
    #[arg(short = 'c', long = "show-common", overrides_with = "no_show_common")]
    show_common: bool,

    /// Do not show names that are in both directories (default).
    #[arg(long = "no-show-common", overrides_with = "show_common", hide = true)]
    no_show_common: bool,
}

impl Cli {
    /// The last of `--show-common` / `--no-show-common` wins; clap resets
    /// whichever one was overridden.
    fn show_common(&self) -> bool {
        self.show_common && !self.no_show_common
    }
}

// ───────────────────────────────────────── run ──────────────

/// List, compare and print.  Nothing reaches stdout unless both listings
/// succeeded.
fn run(cli: &Cli) -> Result<()> {
    let t0 = Instant::now();
    let comparison = DirComparison::between(&cli.left, &cli.right, cli.show_common())?;
    tracing::debug!(
        "comparison: {:.2?}, {} lines, identical={}",
        t0.elapsed(),
        comparison.len(),
        comparison.is_identical(),
    );
    if comparison.is_empty() {
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::write_report(&mut out, &comparison).context("failed to write to stdout")?;
    Ok(())
}

/// Resolves on the first Ctrl-C.  If the handler cannot be installed the
/// future never resolves and the comparison simply runs to completion.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Completed,
    Failed,
    Interrupted,
}

impl Outcome {
    fn exit_code(self) -> u8 {
        match self {
            Outcome::Completed => 0,
            Outcome::Failed | Outcome::Interrupted => 1,
        }
    }
}

/// Race the comparison against `interrupt`.  Errors from the work are
/// reported on stderr here; an interrupt reports nothing.
async fn outcome<F>(work: JoinHandle<Result<()>>, interrupt: F) -> Outcome
where
    F: Future<Output = ()>,
{
    tokio::select! {
        joined = work => match joined {
            Ok(Ok(())) => Outcome::Completed,
            Ok(Err(err)) => {
                eprintln!("{err:#}");
                Outcome::Failed
            }
            Err(err) => {
                eprintln!("comparison task failed: {err}");
                Outcome::Failed
            }
        },
        _ = interrupt => Outcome::Interrupted,
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> ExitCode {
    // Initialise tracing (silent unless RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let work = tokio::task::spawn_blocking(move || run(&cli));

    match outcome(work, interrupted()).await {
        Outcome::Interrupted => {
            tracing::debug!("interrupted by user");
            // The blocking task may still be inside a directory read; don't
            // wait for it on runtime shutdown.
            std::process::exit(i32::from(Outcome::Interrupted.exit_code()));
        }
        done => ExitCode::from(done.exit_code()),
    }
}
