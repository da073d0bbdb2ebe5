use serde::{Deserialize, Serialize};

use crate::matcher::MatchMode;

/// What happened to a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty or single-label line, ignored
    Skipped,
    /// An ancestor (or the same domain) is already retained
    Redundant,
    /// Retained, nothing else was affected
    Added,
    /// Retained, replacing narrower domains that were retained before
    Superseded { removed: usize },
}

impl LineOutcome {
    /// Whether the domain ended up in the retained set
    pub fn is_retained(&self) -> bool {
        matches!(self, LineOutcome::Added | LineOutcome::Superseded { .. })
    }
}

/// Counters over accepted lines. Skipped lines are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceStats {
    /// Domains appended to a bucket
    pub added: usize,
    /// Domains dropped because an ancestor was retained
    pub redundant: usize,
    /// Retained domains later removed by a broader one
    pub superseded: usize,
}

impl ReduceStats {
    pub(crate) fn record(&mut self, outcome: LineOutcome) {
        match outcome {
            LineOutcome::Skipped => {}
            LineOutcome::Redundant => self.redundant += 1,
            LineOutcome::Added => self.added += 1,
            LineOutcome::Superseded { removed } => {
                self.added += 1;
                self.superseded += removed;
            }
        }
    }

    /// Domains currently retained
    pub fn retained(&self) -> usize {
        self.added - self.superseded
    }
}

/// Reducer options.
#[derive(Debug, Clone, Default)]
pub struct ReduceOptions {
    /// Ancestor comparison rule
    pub match_mode: MatchMode,
}

impl ReduceOptions {
    /// Create new reducer options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ancestor comparison rule.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }
}
