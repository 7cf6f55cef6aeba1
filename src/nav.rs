//! Navigation tree definitions.
//!
//! A [`NavigationTree`] is a list of [`NavSection`]s, each holding static
//! [`NavigationEntry`] values. [`NavigationTree::console`] builds the menu
//! the admin console ships with.
//!
//! # Examples
//!
//! ```
//! use console_nav::nav::{NavigationEntry, NavigationTree};
//!
//! let tree = NavigationTree::builder()
//!     .section("MANAGE", vec![NavigationEntry::new("Merchant", "/accounts", "Accounts")])
//!     .untitled(vec![NavigationEntry::new("Setting", "/settings", "Settings")])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(tree.sections().len(), 2);
//! assert!(tree.find("/settings").is_some());
//! ```

use crate::error::{ConsoleError, ConsoleResult};
use std::collections::HashSet;

/// Target path of the accounts entry; recent accounts are listed under it.
pub const ACCOUNTS_PATH: &str = "/accounts";

/// A labeled link in the side menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationEntry {
    icon: String,
    target_path: String,
    label: String,
}

impl NavigationEntry {
    pub fn new(
        icon: impl Into<String>,
        target_path: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            target_path: target_path.into(),
            label: label.into(),
        }
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A recently visited account, shown under the accounts entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecentAccount {
    name: String,
    identifier: String,
}

impl RecentAccount {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Detail page of this account, e.g. `/accounts/acc_01`.
    pub fn target_path(&self) -> String {
        format!("{}/{}", ACCOUNTS_PATH, self.identifier)
    }
}

/// A group of entries, optionally under a header like `MANAGE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    title: Option<String>,
    entries: Vec<NavigationEntry>,
}

impl NavSection {
    pub fn new(title: Option<String>, entries: Vec<NavigationEntry>) -> Self {
        Self { title, entries }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }
}

/// The full side menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTree {
    sections: Vec<NavSection>,
}

impl NavigationTree {
    /// Start building a custom tree.
    pub fn builder() -> NavigationTreeBuilder {
        NavigationTreeBuilder::default()
    }

    /// The admin console menu.
    pub fn console() -> Self {
        let manage = vec![
            NavigationEntry::new("Merchant", ACCOUNTS_PATH, "Accounts"),
            NavigationEntry::new("Token", "/tokens", "Tokens"),
            NavigationEntry::new("Key", "/api", "Api Keys"),
            NavigationEntry::new("People", "/admins", "Admins"),
            NavigationEntry::new("Setting", "/configuration", "Configurations"),
        ];
        let overview = vec![
            NavigationEntry::new("Wallet", "/wallets", "Wallets"),
            NavigationEntry::new("Transaction", "/transaction", "Transactions"),
            NavigationEntry::new("Request", "/requests", "Requests"),
            NavigationEntry::new("Consumption", "/consumptions", "Consumptions"),
            NavigationEntry::new("People", "/users", "Users"),
            NavigationEntry::new("Setting", "/activity", "Activity Logs"),
        ];

        Self {
            sections: vec![
                NavSection::new(Some("MANAGE".to_string()), manage),
                NavSection::new(Some("OVERVIEW".to_string()), overview),
            ],
        }
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// All entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// Find the entry with this target path.
    pub fn find(&self, target_path: &str) -> Option<&NavigationEntry> {
        self.entries().find(|e| e.target_path == target_path)
    }
}

impl Default for NavigationTree {
    fn default() -> Self {
        Self::console()
    }
}

/// Builder for [`NavigationTree`]; rejects duplicate target paths.
#[derive(Debug, Default)]
pub struct NavigationTreeBuilder {
    sections: Vec<NavSection>,
}

impl NavigationTreeBuilder {
    /// Add a section with a header.
    pub fn section(mut self, title: impl Into<String>, entries: Vec<NavigationEntry>) -> Self {
        self.sections.push(NavSection::new(Some(title.into()), entries));
        self
    }

    /// Add a section without a header.
    pub fn untitled(mut self, entries: Vec<NavigationEntry>) -> Self {
        self.sections.push(NavSection::new(None, entries));
        self
    }

    pub fn build(self) -> ConsoleResult<NavigationTree> {
        let mut seen = HashSet::new();
        for entry in self.sections.iter().flat_map(|s| s.entries.iter()) {
            if !seen.insert(entry.target_path.as_str()) {
                return Err(ConsoleError::DuplicateEntry {
                    path: entry.target_path.clone(),
                });
            }
        }
        Ok(NavigationTree {
            sections: self.sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_tree() {
        let tree = NavigationTree::console();
        let titles: Vec<_> = tree.sections().iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec![Some("MANAGE"), Some("OVERVIEW")]);
        assert_eq!(tree.entries().count(), 11);
        assert_eq!(tree.find("/api").map(|e| e.label()), Some("Api Keys"));
        assert_eq!(tree.find(ACCOUNTS_PATH).map(|e| e.icon()), Some("Merchant"));
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let result = NavigationTree::builder()
            .section("A", vec![NavigationEntry::new("Wallet", "/wallets", "Wallets")])
            .section("B", vec![NavigationEntry::new("Wallet", "/wallets", "Again")])
            .build();

        assert_eq!(
            result,
            Err(ConsoleError::DuplicateEntry {
                path: "/wallets".to_string()
            })
        );
    }

    #[test]
    fn test_recent_account_target() {
        let account = RecentAccount::new("Acme", "acc_01");
        assert_eq!(account.target_path(), "/accounts/acc_01");
    }
}
