use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReduceError, Result};

/// Regex pattern for list-file directives
/// Format: kind:value, e.g. `full:www.example.com`, `regexp:^ad\d+\.`
static DIRECTIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(full|domain|regexp|keyword):\s*(.*)$")
        .expect("DIRECTIVE_PATTERN: hardcoded regex is invalid")
});

/// Extract the domain from one list-file line.
///
/// Returns `None` for blank lines, comments, and entries that are not plain
/// domains (`regexp:` and `keyword:`). `full:` and `domain:` prefixes are
/// stripped, as are trailing `@attribute` markers.
pub fn parse_line(line: &str) -> Option<&str> {
    // Remove comments and trim whitespace
    let line = match line.find('#') {
        Some(comment_pos) => &line[..comment_pos],
        None => line,
    };
    let line = line.trim();

    if line.is_empty() {
        return None;
    }

    let value = match DIRECTIVE_PATTERN.captures(line) {
        Some(captures) => {
            let kind = captures.get(1)?.as_str();
            let value = captures.get(2)?.as_str();
            if kind.eq_ignore_ascii_case("regexp") || kind.eq_ignore_ascii_case("keyword") {
                debug!(kind, value, "skipping non-domain entry");
                return None;
            }
            value
        }
        None => line,
    };

    // Drop attributes: "example.com @cn" / "example.com@cn"
    let value = match value.find('@') {
        Some(pos) => &value[..pos],
        None => value,
    };

    value.split_whitespace().next()
}

/// Parse every line of a domain list.
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines().filter_map(parse_line).map(String::from).collect()
}

/// Read and parse a domain list file.
pub fn read_list_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ReduceError::ReadList {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse_list(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_directive_pattern_regex_compiles() {
        assert!(DIRECTIVE_PATTERN.is_match("full:example.com"));
    }

    #[test]
    fn test_plain_domain() {
        assert_eq!(parse_line("example.com"), Some("example.com"));
        assert_eq!(parse_line("  www.example.com \t"), Some("www.example.com"));
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# ad servers"), None);
        assert_eq!(parse_line("example.com # trailing"), Some("example.com"));
    }

    #[test]
    fn test_full_and_domain_prefixes() {
        assert_eq!(parse_line("full:www.example.com"), Some("www.example.com"));
        assert_eq!(parse_line("domain:example.com"), Some("example.com"));
        assert_eq!(parse_line("FULL: api.example.com"), Some("api.example.com"));
    }

    #[test]
    fn test_regexp_and_keyword_skipped() {
        assert_eq!(parse_line(r"regexp:^ad\d+\.example\.com$"), None);
        assert_eq!(parse_line("keyword:tracker"), None);
    }

    #[test]
    fn test_attributes_dropped() {
        assert_eq!(parse_line("domain:example.cn @cn"), Some("example.cn"));
        assert_eq!(parse_line("example.cn@ads"), Some("example.cn"));
        assert_eq!(parse_line("@cn"), None);
    }

    #[test]
    fn test_single_label_kept_for_reducer() {
        // Label filtering is the reducer's job
        assert_eq!(parse_line("localhost"), Some("localhost"));
    }

    #[test]
    fn test_parse_list() {
        let text = r#"
# Google
full:www.google.com
google.com
regexp:^.+\.google\.com$

keyword:ads
domain:youtube.com @global
"#;
        let domains = parse_list(text);
        assert_eq!(domains, vec!["www.google.com", "google.com", "youtube.com"]);
    }

    #[test]
    fn test_read_list_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "example.com").unwrap();
        writeln!(file, "full:a.example.org").unwrap();
        file.flush().unwrap();

        let domains = read_list_file(file.path()).unwrap();
        assert_eq!(domains, vec!["example.com", "a.example.org"]);
    }

    #[test]
    fn test_read_list_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match read_list_file(&path) {
            Err(ReduceError::ReadList { path: p, .. }) => assert!(p.ends_with("missing.txt")),
            other => panic!("expected ReadList error, got {:?}", other),
        }
    }
}
