//! build-domains: merge domain list files into one reduced, sorted list.
//!
//! Usage:
//!   build-domains -i geosite-ads.txt extra.txt -o domains.conf
//!
//! Input lines may carry `full:` / `domain:` prefixes and `@attr` markers;
//! `regexp:` and `keyword:` entries and `#` comments are skipped.

use std::path::PathBuf;

use clap::Parser;
use domain_reducer::{build_list, write_list, write_report, MatchMode, ReduceOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Merge domain lists into one reduced, sorted list")]
struct Args {
    /// Input list files
    #[arg(short, long, num_args = 1.., required = true)]
    input: Vec<PathBuf>,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Only treat a domain as covered when the match ends on a label boundary
    #[arg(long)]
    label_aligned: bool,

    /// Write a JSON build report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let match_mode = if args.label_aligned {
        MatchMode::LabelAligned
    } else {
        MatchMode::Literal
    };
    let options = ReduceOptions::new().with_match_mode(match_mode);

    let (domains, report) = build_list(&args.input, options)?;
    write_list(&args.output, &domains)?;

    tracing::info!(
        output = %args.output.display(),
        retained = report.retained,
        "Wrote domain list"
    );

    if let Some(path) = &args.report {
        write_report(path, &report)?;
        tracing::info!(report = %path.display(), "Wrote build report");
    }

    Ok(())
}
