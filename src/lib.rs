//! Domain Reducer - shrink domain lists to their broadest entries
//!
//! Given a list of domains, keeps only the ancestors: when one domain is a
//! subdomain of another retained domain, the subdomain is dropped.
//!
//! - Domains are bucketed by suffix key (last two labels); only domains in
//!   the same bucket are compared
//! - Ancestor checks are prefix tests on the reversed dotted form
//!   (`mail.example.com` -> `com.example.mail`)
//! - Blank and single-label lines are ignored
//!
//! # Example
//!
//! ```rust
//! use domain_reducer::{process, Reducer, LineOutcome};
//!
//! let input = "
//! a.example.com
//! example.com
//! b.example.org
//! com
//! ";
//!
//! let reduced: Vec<String> = process(input.lines()).collect();
//! assert_eq!(reduced, vec!["example.com", "b.example.org"]);
//!
//! // Incremental use
//! let mut reducer = Reducer::new();
//! assert_eq!(reducer.insert("example.com"), LineOutcome::Added);
//! assert_eq!(reducer.insert("www.example.com"), LineOutcome::Redundant);
//! ```
//!
//! # Match Modes
//!
//! | Mode | `a.example.com` covers `ab.example.com` |
//! |------|------|
//! | `Literal` (default) | yes, raw string prefix |
//! | `LabelAligned` | no, prefix must end at a dot |

pub mod builder;
pub mod domain;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod reducer;
pub mod sort;
pub mod types;

// Re-export commonly used items
pub use builder::{build_list, write_list, write_report, BuildReport};
pub use domain::{label_count, reverse_labels, reversed_domain, suffix_key, MIN_LABELS};
pub use error::{ReduceError, Result};
pub use matcher::{is_ancestor_or_equal, is_ancestor_or_equal_with, MatchMode};
pub use parser::{parse_line, parse_list, read_list_file};
pub use reducer::{process, process_with, IntoDomains, Process, Reducer};
pub use sort::{compare_domains, sort_domains};
pub use types::{LineOutcome, ReduceOptions, ReduceStats};
