//! Active-entry highlighting for the side navigation.
//!
//! A navigation entry stays highlighted while the user browses anything under
//! it: the `/accounts` entry is active on `/accounts` and on `/accounts/123`.
//! The caller picks one segment of the current pathname (see
//! [`segment`](crate::location::segment)) and asks the resolver whether an
//! entry's target path matches it.
//!
//! Matching is approximate:
//!
//! - exact equality always matches; case is ignored unless
//!   [`HighlightConfig::case_sensitive`] is set
//! - an empty segment never matches a non-root target
//! - the target's last segment may be a prefix of the current segment
//! - tokens of at least [`HighlightConfig::min_fuzzy_len`] characters may
//!   differ by up to [`HighlightConfig::max_edits`] edits, so `/transaction`
//!   stays active on `/transactions`
//!
//! # Examples
//!
//! ```
//! use console_nav::highlight::resolve;
//!
//! assert!(resolve("/accounts", "accounts"));
//! assert!(resolve("/transaction", "transactions"));
//! assert!(!resolve("/wallets", "accounts"));
//! assert!(!resolve("/users", ""));
//! ```

use crate::trace_log;

/// Tolerance settings for [`HighlightResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightConfig {
    /// Maximum Levenshtein distance between target and segment tokens.
    pub max_edits: usize,
    /// Both tokens must be at least this long before edits are tolerated.
    pub min_fuzzy_len: usize,
    /// Whether a target token may match as a prefix of the segment.
    pub allow_prefix: bool,
    /// Compare tokens byte for byte instead of ignoring ASCII case.
    pub case_sensitive: bool,
}

impl HighlightConfig {
    const DEFAULT_MAX_EDITS: usize = 1;
    const DEFAULT_MIN_FUZZY_LEN: usize = 4;

    /// Configuration that only accepts equal tokens, case included.
    ///
    /// Used for identifiers such as account ids, where `ACC_1` and `acc_1`
    /// are different records.
    pub const fn exact() -> Self {
        Self {
            max_edits: 0,
            min_fuzzy_len: usize::MAX,
            allow_prefix: false,
            case_sensitive: true,
        }
    }

    /// Set the maximum edit distance.
    pub fn max_edits(mut self, max_edits: usize) -> Self {
        self.max_edits = max_edits;
        self
    }

    /// Set the minimum token length for edit-distance matching.
    pub fn min_fuzzy_len(mut self, len: usize) -> Self {
        self.min_fuzzy_len = len;
        self
    }

    /// Enable or disable prefix matching.
    pub fn allow_prefix(mut self, allow: bool) -> Self {
        self.allow_prefix = allow;
        self
    }

    /// Enable or disable case-sensitive comparison.
    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.case_sensitive = sensitive;
        self
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            max_edits: Self::DEFAULT_MAX_EDITS,
            min_fuzzy_len: Self::DEFAULT_MIN_FUZZY_LEN,
            allow_prefix: true,
            case_sensitive: false,
        }
    }
}

/// Decides whether a navigation entry is the active one.
///
/// Stateless apart from its configuration; calling [`resolve`](Self::resolve)
/// twice with the same inputs always gives the same answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightResolver {
    config: HighlightConfig,
}

impl HighlightResolver {
    /// Resolver with the default fuzzy tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with a custom tolerance.
    pub const fn with_config(config: HighlightConfig) -> Self {
        Self { config }
    }

    /// Resolver that only matches equal tokens (ignoring surrounding slashes).
    pub const fn exact() -> Self {
        Self::with_config(HighlightConfig::exact())
    }

    /// The tolerance in use.
    pub const fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Return `true` if `target_path` should be highlighted for `current_segment`.
    pub fn resolve(&self, target_path: &str, current_segment: &str) -> bool {
        let equal = if self.config.case_sensitive {
            target_path == current_segment
        } else {
            target_path.eq_ignore_ascii_case(current_segment)
        };
        if equal {
            return true;
        }

        let segment = token(current_segment);
        if segment.is_empty() {
            return false;
        }

        let target = token(target_path);
        if target.is_empty() {
            return false;
        }

        let (target, segment) = if self.config.case_sensitive {
            (target.to_string(), segment.to_string())
        } else {
            (target.to_lowercase(), segment.to_lowercase())
        };

        let active = target == segment
            || (self.config.allow_prefix && segment.starts_with(&target))
            || self.within_edits(&target, &segment);

        trace_log!(
            "highlight '{}' against segment '{}': {}",
            target_path,
            current_segment,
            active
        );
        active
    }

    fn within_edits(&self, target: &str, segment: &str) -> bool {
        if self.config.max_edits == 0 {
            return false;
        }
        let min_len = target.chars().count().min(segment.chars().count());
        if min_len < self.config.min_fuzzy_len {
            return false;
        }
        strsim::levenshtein(target, segment) <= self.config.max_edits
    }
}

/// Resolve with the default tolerance.
///
/// Shorthand for `HighlightResolver::new().resolve(target_path, current_segment)`.
pub fn resolve(target_path: &str, current_segment: &str) -> bool {
    HighlightResolver::new().resolve(target_path, current_segment)
}

/// Meaningful token of a path: its last non-empty segment.
fn token(path: &str) -> &str {
    path.trim_matches('/').rsplit('/').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token() {
        assert_eq!(token("/accounts"), "accounts");
        assert_eq!(token("/accounts/acc_1"), "acc_1");
        assert_eq!(token("accounts/"), "accounts");
        assert_eq!(token("/"), "");
        assert_eq!(token(""), "");
    }

    #[test]
    fn test_exact_equality_always_matches() {
        for s in ["", "/", "/accounts", "accounts", "/a", "X"] {
            assert!(resolve(s, s), "'{}' should match itself", s);
            assert!(HighlightResolver::exact().resolve(s, s));
        }
    }

    #[test]
    fn test_empty_segment_never_matches() {
        for s in ["/", "/users", "/accounts", "x"] {
            assert!(!resolve(s, ""), "'{}' should not match empty", s);
        }
        assert!(!resolve("/users", "/"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            resolve("/Accounts", "/accounts"),
            resolve("/accounts", "/accounts")
        );
        assert!(resolve("/ACCOUNTS", "accounts"));
    }

    #[test]
    fn test_scenarios() {
        assert!(resolve("/accounts", "accounts"));
        assert!(!resolve("/wallets", "accounts"));
        assert!(!resolve("/users", ""));
    }

    #[test]
    fn test_near_misses() {
        assert!(resolve("/transaction", "transactions"));
        assert!(resolve("/accounts", "account"));
        assert!(resolve("/account", "accounts"));
        // short tokens do not tolerate edits
        assert!(!resolve("/api", "app"));
        assert!(!resolve("/api", "admins"));
        assert!(!resolve("/admins", "api"));
    }

    #[test]
    fn test_exact_resolver_rejects_near_misses() {
        let exact = HighlightResolver::exact();
        assert!(exact.resolve("/accounts/acc_1", "acc_1"));
        assert!(!exact.resolve("/accounts/acc_1", "acc_2"));
        assert!(!exact.resolve("/accounts/acc_1", "acc_10"));
    }

    #[test]
    fn test_exact_resolver_is_case_sensitive() {
        let exact = HighlightResolver::exact();
        assert!(!exact.resolve("/accounts/ACC_1", "acc_1"));
        assert!(!exact.resolve("ACC_1", "acc_1"));
        assert!(exact.resolve("ACC_1", "ACC_1"));

        let folded = HighlightResolver::with_config(HighlightConfig::exact().case_sensitive(false));
        assert!(folded.resolve("/accounts/ACC_1", "acc_1"));
    }

    #[test]
    fn test_custom_config() {
        let strict = HighlightResolver::with_config(HighlightConfig::default().max_edits(0));
        assert!(!strict.resolve("/transaction", "transactiom"));
        assert!(strict.resolve("/transaction", "transactions"));

        let no_prefix =
            HighlightResolver::with_config(HighlightConfig::default().allow_prefix(false));
        assert!(!no_prefix.resolve("/user", "users-archive"));
    }

    #[test]
    fn test_deterministic() {
        let resolver = HighlightResolver::new();
        let first = resolver.resolve("/consumptions", "consumption");
        for _ in 0..10 {
            assert_eq!(resolver.resolve("/consumptions", "consumption"), first);
        }
    }
}
