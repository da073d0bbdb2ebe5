use serde::{Deserialize, Serialize};

use crate::domain::reversed_domain;

/// How ancestor checks compare reversed domains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Raw string prefix on the reversed dotted form.
    ///
    /// `a.example.com` (`com.example.a`) is treated as an ancestor of
    /// `ab.example.com` (`com.example.ab`) even though the labels differ.
    #[default]
    Literal,
    /// Prefix must end on a label boundary: end of string or a dot.
    LabelAligned,
}

impl MatchMode {
    /// Check a reversed candidate against a reversed domain.
    pub fn is_prefix(self, reversed_ancestor: &str, reversed_domain: &str) -> bool {
        match reversed_domain.strip_prefix(reversed_ancestor) {
            None => false,
            Some(rest) => match self {
                MatchMode::Literal => true,
                MatchMode::LabelAligned => rest.is_empty() || rest.starts_with('.'),
            },
        }
    }
}

/// Returns true iff `domain` equals `candidate_ancestor` or sits under it,
/// using the literal prefix rule.
pub fn is_ancestor_or_equal(candidate_ancestor: &str, domain: &str) -> bool {
    is_ancestor_or_equal_with(MatchMode::Literal, candidate_ancestor, domain)
}

/// Same as [`is_ancestor_or_equal`] with an explicit [`MatchMode`].
pub fn is_ancestor_or_equal_with(mode: MatchMode, candidate_ancestor: &str, domain: &str) -> bool {
    mode.is_prefix(
        &reversed_domain(candidate_ancestor),
        &reversed_domain(domain),
    )
}

/// A domain together with its precomputed reversed form.
///
/// Bucket entries are compared many times, so the reversal is done once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReversedEntry {
    pub domain: String,
    pub reversed: String,
}

impl ReversedEntry {
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let reversed = reversed_domain(&domain);
        Self { domain, reversed }
    }

    /// `self` is ancestor-or-equal of `other`.
    pub fn covers(&self, other: &ReversedEntry, mode: MatchMode) -> bool {
        mode.is_prefix(&self.reversed, &other.reversed)
    }
}
