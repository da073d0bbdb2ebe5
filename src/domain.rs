//! Label operations on dotted domain names.
//!
//! Labels are read right to left: the top-level label comes first once a
//! domain is reversed, which lets ancestor checks become prefix checks.

/// Minimum number of labels a domain needs before it can be reduced.
pub const MIN_LABELS: usize = 2;

/// Split a domain on `.` and reverse the labels.
///
/// `a.b.example.com` becomes `["com", "example", "b", "a"]`. A domain without
/// dots yields a single label.
pub fn reverse_labels(domain: &str) -> Vec<&str> {
    domain.split('.').rev().collect()
}

/// Dot-joined reversed form, e.g. `mail.example.com` -> `com.example.mail`.
pub fn reversed_domain(domain: &str) -> String {
    reverse_labels(domain).join(".")
}

/// Number of dot-separated labels in a domain.
pub fn label_count(domain: &str) -> usize {
    domain.split('.').count()
}

/// Bucketing key: the last two labels joined by a dot.
///
/// Returns `None` for domains with fewer than [`MIN_LABELS`] labels.
pub fn suffix_key(domain: &str) -> Option<&str> {
    let mut dots = domain.rmatch_indices('.');
    let _last = dots.next()?;
    match dots.next() {
        Some((pos, _)) => Some(&domain[pos + 1..]),
        None => Some(domain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_labels() {
        assert_eq!(
            reverse_labels("a.b.example.com"),
            vec!["com", "example", "b", "a"]
        );
        assert_eq!(reverse_labels("example.com"), vec!["com", "example"]);
        assert_eq!(reverse_labels("localhost"), vec!["localhost"]);
    }

    #[test]
    fn test_reversed_domain() {
        assert_eq!(reversed_domain("mail.example.com"), "com.example.mail");
        assert_eq!(reversed_domain("com"), "com");
    }

    #[test]
    fn test_label_count() {
        assert_eq!(label_count("com"), 1);
        assert_eq!(label_count("example.com"), 2);
        assert_eq!(label_count("x.y.example.co.uk"), 5);
    }

    #[test]
    fn test_suffix_key() {
        assert_eq!(suffix_key("example.com"), Some("example.com"));
        assert_eq!(suffix_key("a.b.example.com"), Some("example.com"));
        assert_eq!(suffix_key("www.example.co.uk"), Some("co.uk"));
        assert_eq!(suffix_key("com"), None);
    }

    #[test]
    fn test_suffix_key_empty_labels() {
        // Only dot-splitting, no syntax validation
        assert_eq!(suffix_key("."), Some("."));
        assert_eq!(suffix_key("a..com"), Some(".com"));
    }
}
