//! Presentation ordering for reduced domain lists.
//!
//! Groups domains by suffix key, puts the registrable domain itself first,
//! then orders by well-known TLD and first-label priority, depth and finally
//! the full name.

use std::cmp::Ordering;

use crate::domain::{label_count, suffix_key, MIN_LABELS};

/// Sort key: (suffix key, is not root, TLD priority, first-label priority, depth, domain)
type DomainKey<'a> = (&'a str, bool, u8, u8, usize, &'a str);

fn domain_key(domain: &str) -> DomainKey<'_> {
    let depth = label_count(domain);
    let root = suffix_key(domain).unwrap_or(domain);
    let tld = domain.rsplit('.').next().unwrap_or("");
    let first = domain.split('.').next().unwrap_or("");

    (
        root,
        depth != MIN_LABELS,
        tld_priority(tld),
        label_priority(first),
        depth,
        domain,
    )
}

fn tld_priority(tld: &str) -> u8 {
    match tld {
        "com" => 0,
        "net" => 1,
        "org" => 2,
        "cn" | "jp" => 3,
        "io" => 4,
        "dev" => 5,
        "test" | "local" => 6,
        _ => 10,
    }
}

fn label_priority(label: &str) -> u8 {
    match label {
        "www" => 0,
        "api" => 1,
        "cdn" => 2,
        "static" => 3,
        "img" => 4,
        "mail" => 5,
        "auth" => 6,
        "prod" => 7,
        "staging" => 8,
        "test" => 9,
        "dev" => 10,
        _ => 20,
    }
}

/// Compare two domains by presentation order.
pub fn compare_domains(a: &str, b: &str) -> Ordering {
    domain_key(a).cmp(&domain_key(b))
}

/// Sort domains for presentation.
pub fn sort_domains(mut domains: Vec<String>) -> Vec<String> {
    domains.sort_by(|a, b| compare_domains(a, b));
    domains
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(domains: &[&str]) -> Vec<String> {
        sort_domains(domains.iter().map(|d| d.to_string()).collect())
    }

    #[test]
    fn test_root_before_subdomains() {
        assert_eq!(
            sorted(&["zzz.example.com", "example.com"]),
            vec!["example.com", "zzz.example.com"]
        );
    }

    #[test]
    fn test_grouped_by_suffix_key() {
        assert_eq!(
            sorted(&["b.example.org", "a.example.com", "example.net"]),
            vec!["a.example.com", "example.net", "b.example.org"]
        );
    }

    #[test]
    fn test_well_known_labels_first() {
        assert_eq!(
            sorted(&[
                "zeta.example.com",
                "mail.example.com",
                "api.example.com",
                "www.example.com"
            ]),
            vec![
                "www.example.com",
                "api.example.com",
                "mail.example.com",
                "zeta.example.com"
            ]
        );
    }

    #[test]
    fn test_depth_then_name() {
        assert_eq!(
            sorted(&["b.a.example.com", "c.example.com", "a.example.com"]),
            vec!["a.example.com", "c.example.com", "b.a.example.com"]
        );
    }

    #[test]
    fn test_tld_priority() {
        assert_eq!(tld_priority("com"), 0);
        assert_eq!(tld_priority("jp"), 3);
        assert_eq!(tld_priority("local"), 6);
        assert_eq!(tld_priority("xyz"), 10);
    }

    #[test]
    fn test_single_label_sorts_by_itself() {
        assert_eq!(compare_domains("localhost", "localhost"), Ordering::Equal);
        assert_eq!(sorted(&["b.com", "com"]), vec!["b.com", "com"]);
    }
}
