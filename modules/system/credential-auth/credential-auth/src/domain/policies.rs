//! Policy list helpers.

use std::collections::BTreeSet;

use credential_auth_sdk::Alias;

/// Sort lexicographically and drop duplicates.
#[must_use]
pub fn normalize(mut policies: Vec<String>) -> Vec<String> {
    policies.sort();
    policies.dedup();
    policies
}

/// Order-independent, duplicate-insensitive comparison.
#[must_use]
pub fn equivalent(a: &[String], b: &[String]) -> bool {
    let a: BTreeSet<&str> = a.iter().map(String::as_str).collect();
    let b: BTreeSet<&str> = b.iter().map(String::as_str).collect();
    a == b
}

/// One alias per non-empty group name, in the given order.
#[must_use]
pub fn group_aliases(groups: &[String]) -> Vec<Alias> {
    groups
        .iter()
        .filter(|name| !name.is_empty())
        .map(|name| Alias::new(name.as_str()))
        .collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn normalize_sorts_and_dedups() {
        assert_eq!(
            normalize(strings(&["ops", "admin", "ops", "dev"])),
            strings(&["admin", "dev", "ops"])
        );
    }

    #[test]
    fn equivalent_ignores_order_and_duplicates() {
        assert!(equivalent(&strings(&["b", "a", "a"]), &strings(&["a", "b"])));
        assert!(equivalent(&[], &[]));
    }

    #[test]
    fn equivalent_detects_single_element_drift() {
        assert!(!equivalent(&strings(&["a", "b"]), &strings(&["a", "b", "c"])));
        assert!(!equivalent(&strings(&["a", "b"]), &strings(&["a", "c"])));
        assert!(!equivalent(&strings(&["a"]), &[]));
    }

    #[test]
    fn group_aliases_skip_empty_names() {
        let aliases = group_aliases(&strings(&["", "eng", "ops"]));
        assert_eq!(aliases, vec![Alias::new("eng"), Alias::new("ops")]);
    }
}
