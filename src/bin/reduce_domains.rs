//! reduce-domains: read domains from stdin, print the reduced set to stdout.
//!
//! Usage:
//!   cat domains.txt | reduce-domains > reduced.txt
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`.

use std::io::{self, BufWriter};

use clap::Parser;
use domain_reducer::Reducer;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Reduce a domain list read from stdin to its broadest entries")]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut reducer = Reducer::new();
    reducer.read_from(io::stdin().lock())?;

    let stats = reducer.stats();
    tracing::debug!(
        added = stats.added,
        redundant = stats.redundant,
        superseded = stats.superseded,
        retained = reducer.len(),
        "Reduction complete"
    );

    reducer.write_to(BufWriter::new(io::stdout().lock()))?;
    Ok(())
}
