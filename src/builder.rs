//! Merge several domain list files into one reduced, sorted list.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::matcher::MatchMode;
use crate::parser::read_list_file;
use crate::reducer::Reducer;
use crate::sort::sort_domains;
use crate::types::{ReduceOptions, ReduceStats};

/// Summary of a build run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Input files, in the order given
    pub inputs: Vec<PathBuf>,
    /// Domain entries read across all inputs
    pub read: usize,
    /// Entries left after exact deduplication
    pub unique: usize,
    /// Domains in the output
    pub retained: usize,
    pub match_mode: MatchMode,
    pub stats: ReduceStats,
}

/// Read, deduplicate, reduce and sort the given list files.
pub fn build_list<P: AsRef<Path>>(
    inputs: &[P],
    options: ReduceOptions,
) -> Result<(Vec<String>, BuildReport)> {
    let mut all_domains = Vec::new();
    for path in inputs {
        let domains = read_list_file(path)?;
        info!(path = %path.as_ref().display(), count = domains.len(), "read list");
        all_domains.extend(domains);
    }
    let read = all_domains.len();

    all_domains.sort();
    all_domains.dedup();
    let unique = all_domains.len();

    let match_mode = options.match_mode;
    let mut reducer = Reducer::with_options(options);
    reducer.extend(&all_domains);
    let stats = reducer.stats();

    let domains = sort_domains(reducer.into_domains().collect());

    let report = BuildReport {
        inputs: inputs.iter().map(|p| p.as_ref().to_path_buf()).collect(),
        read,
        unique,
        retained: domains.len(),
        match_mode,
        stats,
    };
    info!(read, unique, retained = report.retained, "reduced domain list");

    Ok((domains, report))
}

/// Write domains one per line.
pub fn write_list(path: impl AsRef<Path>, domains: &[String]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for domain in domains {
        writeln!(writer, "{}", domain)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a build report as pretty JSON.
pub fn write_report(path: impl AsRef<Path>, report: &BuildReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
