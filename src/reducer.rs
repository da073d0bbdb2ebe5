//! Domain reducer.
//!
//! Keeps a retained set of domains bucketed by suffix key (the last two
//! labels). Within a bucket no domain is an ancestor-or-equal of another:
//! a new domain is dropped when a retained ancestor exists, and it replaces
//! every retained domain it is an ancestor of.
//!
//! ## Example
//!
//! ```
//! use domain_reducer::process;
//!
//! let out: Vec<String> = process(["a.example.com", "example.com", "example.org"]).collect();
//! assert_eq!(out, vec!["example.com", "example.org"]);
//! ```

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::vec;

use tracing::{debug, trace};

use crate::domain::suffix_key;
use crate::error::Result;
use crate::matcher::ReversedEntry;
use crate::types::{LineOutcome, ReduceOptions, ReduceStats};

/// Domains sharing one suffix key, in insertion order.
#[derive(Debug, Clone)]
struct Bucket {
    key: String,
    entries: Vec<ReversedEntry>,
}

/// Incremental domain reducer owning the retained set.
#[derive(Debug, Clone, Default)]
pub struct Reducer {
    options: ReduceOptions,
    /// Buckets in creation order
    buckets: Vec<Bucket>,
    /// Suffix key -> position in `buckets`
    index: HashMap<String, usize>,
    stats: ReduceStats,
}

impl Reducer {
    /// Create a reducer with default options (literal prefix matching).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reducer with explicit options.
    pub fn with_options(options: ReduceOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Feed one input line.
    ///
    /// The line is trimmed first. Empty and single-label lines are skipped
    /// without affecting the retained set or the stats.
    pub fn insert(&mut self, line: &str) -> LineOutcome {
        let domain = line.trim();
        if domain.is_empty() {
            return LineOutcome::Skipped;
        }
        let Some(key) = suffix_key(domain) else {
            return LineOutcome::Skipped;
        };

        let entry = ReversedEntry::new(domain);
        let outcome = match self.index.get(key) {
            Some(&pos) => Self::insert_into(&mut self.buckets[pos], entry, &self.options),
            None => {
                self.index.insert(key.to_string(), self.buckets.len());
                self.buckets.push(Bucket {
                    key: key.to_string(),
                    entries: vec![entry],
                });
                LineOutcome::Added
            }
        };

        self.stats.record(outcome);
        outcome
    }

    fn insert_into(
        bucket: &mut Bucket,
        entry: ReversedEntry,
        options: &ReduceOptions,
    ) -> LineOutcome {
        let mode = options.match_mode;

        if let Some(ancestor) = bucket.entries.iter().find(|e| e.covers(&entry, mode)) {
            trace!(domain = %entry.domain, ancestor = %ancestor.domain, "redundant");
            return LineOutcome::Redundant;
        }

        // No retained entry covers the new one, so any entry it covers is
        // strictly narrower. Rebuild instead of removing while scanning.
        let before = bucket.entries.len();
        bucket.entries.retain(|e| !entry.covers(e, mode));
        let removed = before - bucket.entries.len();

        if removed > 0 {
            debug!(
                domain = %entry.domain,
                bucket = %bucket.key,
                removed,
                "superseded narrower domains"
            );
        }

        bucket.entries.push(entry);

        if removed > 0 {
            LineOutcome::Superseded { removed }
        } else {
            LineOutcome::Added
        }
    }

    /// Feed every line of a reader. I/O errors are propagated.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            self.insert(&line?);
        }
        Ok(())
    }

    /// Write retained domains, one per line, in emission order.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for domain in self.iter() {
            writeln!(writer, "{}", domain)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Retained domains: buckets in creation order, entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets
            .iter()
            .flat_map(|b| b.entries.iter().map(|e| e.domain.as_str()))
    }

    /// Consume the reducer, yielding retained domains in emission order.
    pub fn into_domains(self) -> IntoDomains {
        IntoDomains {
            buckets: self.buckets.into_iter(),
            current: Vec::new().into_iter(),
        }
    }

    /// Number of retained domains
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.entries.len()).sum()
    }

    /// Check if nothing is retained
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of distinct suffix keys seen among accepted domains
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn stats(&self) -> ReduceStats {
        self.stats
    }

    pub fn options(&self) -> &ReduceOptions {
        &self.options
    }
}

impl<S: AsRef<str>> Extend<S> for Reducer {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for line in iter {
            self.insert(line.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Reducer {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut reducer = Reducer::new();
        reducer.extend(iter);
        reducer
    }
}

impl IntoIterator for Reducer {
    type Item = String;
    type IntoIter = IntoDomains;

    fn into_iter(self) -> Self::IntoIter {
        self.into_domains()
    }
}

/// Owning iterator over retained domains.
#[derive(Debug)]
pub struct IntoDomains {
    buckets: vec::IntoIter<Bucket>,
    current: vec::IntoIter<ReversedEntry>,
}

impl Iterator for IntoDomains {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(entry) = self.current.next() {
                return Some(entry.domain);
            }
            self.current = self.buckets.next()?.entries.into_iter();
        }
    }
}

/// Lazy reduction pass returned by [`process`].
///
/// Input is consumed on the first call to `next`. The sequence is finite and
/// cannot be restarted.
#[derive(Debug)]
pub struct Process<I> {
    state: ProcessState<I>,
}

#[derive(Debug)]
enum ProcessState<I> {
    Pending(I, ReduceOptions),
    Draining(IntoDomains),
    Done,
}

impl<I, S> Iterator for Process<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match std::mem::replace(&mut self.state, ProcessState::Done) {
                ProcessState::Pending(lines, options) => {
                    let mut reducer = Reducer::with_options(options);
                    reducer.extend(lines);
                    self.state = ProcessState::Draining(reducer.into_domains());
                }
                ProcessState::Draining(mut domains) => {
                    let next = domains.next();
                    if next.is_some() {
                        self.state = ProcessState::Draining(domains);
                    }
                    return next;
                }
                ProcessState::Done => return None,
            }
        }
    }
}

/// Reduce input lines with default options.
pub fn process<I, S>(lines: I) -> Process<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    process_with(lines, ReduceOptions::default())
}

/// Reduce input lines with explicit options.
pub fn process_with<I, S>(lines: I, options: ReduceOptions) -> Process<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Process {
        state: ProcessState::Pending(lines.into_iter(), options),
    }
}
