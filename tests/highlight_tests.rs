//! Highlight resolution against real console paths.

mod common;

use common::init_logging;
use console_nav::{
    resolve, segment, CurrentLocation, HighlightConfig, HighlightResolver, NavigationTree,
};

const SAMPLES: &[&str] = &[
    "",
    "/",
    "/accounts",
    "accounts",
    "/Accounts",
    "/api",
    "/transaction",
    "/accounts/acc_1",
    "ÄÖÜ",
];

#[test]
fn test_exact_match_always_active() {
    init_logging();
    for s in SAMPLES {
        assert!(resolve(s, s), "resolve({:?}, {:?}) should be true", s, s);
    }
}

#[test]
fn test_empty_segment_never_active() {
    for s in SAMPLES.iter().filter(|s| !s.is_empty()) {
        assert!(!resolve(s, ""), "resolve({:?}, \"\") should be false", s);
    }
}

#[test]
fn test_case_insensitive() {
    let pairs = [
        ("/Accounts", "/accounts"),
        ("/WALLETS", "wallets"),
        ("/users", "Users"),
    ];
    for (target, segment) in pairs {
        assert_eq!(
            resolve(target, segment),
            resolve(&target.to_lowercase(), &segment.to_lowercase())
        );
    }
    assert!(resolve("/Accounts", "/accounts"));
}

#[test]
fn test_deterministic() {
    let resolver = HighlightResolver::new();
    for target in SAMPLES {
        for current in SAMPLES {
            assert_eq!(
                resolver.resolve(target, current),
                resolver.resolve(target, current)
            );
        }
    }
}

#[test]
fn test_documented_scenarios() {
    assert!(resolve("/accounts", "accounts"));
    assert!(!resolve("/wallets", "accounts"));
    assert!(!resolve("/users", ""));
}

#[test]
fn test_segment_extraction_drives_highlight() {
    let location = CurrentLocation::new("/accounts/acc_1/wallets");
    assert_eq!(segment(location.pathname(), 1), "accounts");
    assert!(resolve("/accounts", location.segment(1)));
    assert!(!resolve("/wallets", location.segment(1)));
    assert!(resolve("/wallets", location.segment(3)));
}

#[test]
fn test_console_entries_highlight_only_themselves() {
    let tree = NavigationTree::console();
    for entry in tree.entries() {
        let location = CurrentLocation::new(entry.target_path());
        let active: Vec<_> = tree
            .entries()
            .filter(|other| resolve(other.target_path(), location.segment(1)))
            .map(|other| other.label())
            .collect();
        assert_eq!(active, vec![entry.label()], "visiting {}", entry.target_path());
    }
}

#[test]
fn test_strict_config_disables_edits() {
    let strict = HighlightResolver::with_config(HighlightConfig::default().max_edits(0));
    assert!(!strict.resolve("/transaction", "transactiom"));
    assert!(resolve("/transaction", "transactiom"));
}
