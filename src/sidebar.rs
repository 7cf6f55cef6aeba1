//! Side navigation model.
//!
//! [`SideNavigation`] turns a [`NavigationTree`], the recent accounts and the
//! current location into the ordered list of [`NavItem`]s the panel draws.
//! Highlighting is decided here; drawing lives in [`widgets`](crate::widgets).
//!
//! Top-level entries are compared against segment 1 of the pathname with the
//! fuzzy resolver. Recent accounts are compared against segment 2 with the
//! exact resolver, and only while the accounts entry itself is active, so
//! `/accounts/acc_1` highlights both *Accounts* and the recent account
//! `acc_1` while `/wallets/acc_1` highlights only *Wallets*.
//!
//! ```
//! use console_nav::{CurrentLocation, NavigationTree, RecentAccount, SideNavigation};
//!
//! let nav = SideNavigation::new(NavigationTree::console())
//!     .recent_accounts(vec![RecentAccount::new("Acme", "acc_1")]);
//!
//! let location = CurrentLocation::new("/accounts/acc_1");
//! let active: Vec<_> = nav
//!     .items(&location)
//!     .into_iter()
//!     .filter(|item| item.active)
//!     .map(|item| item.label)
//!     .collect();
//!
//! assert_eq!(active, vec!["Accounts", "Acme"]);
//! ```

use crate::highlight::HighlightResolver;
use crate::location::CurrentLocation;
use crate::nav::{NavigationEntry, NavigationTree, RecentAccount, ACCOUNTS_PATH};
use crate::provider::{CurrentUser, LoadingStatus, RecentAccountsProvider, Resource};
use crate::{debug_log, trace_log};

#[cfg(feature = "cache")]
use crate::cache::HighlightCache;

/// Segment compared against top-level entries.
pub const TOP_LEVEL_SEGMENT: usize = 1;
/// Segment compared against recent-account entries.
pub const RECENT_ACCOUNT_SEGMENT: usize = 2;

/// What a [`NavItem`] represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItemKind {
    /// Section header such as `MANAGE`; never active.
    Header,
    /// A static entry from the navigation tree.
    Entry { icon: String },
    /// A recent account listed under the accounts entry.
    Recent { identifier: String },
}

/// One row of the side navigation, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub kind: NavItemKind,
    pub label: String,
    /// Link target; empty for headers.
    pub target_path: String,
    pub active: bool,
}

impl NavItem {
    fn header(title: &str) -> Self {
        Self {
            kind: NavItemKind::Header,
            label: title.to_string(),
            target_path: String::new(),
            active: false,
        }
    }

    fn entry(entry: &NavigationEntry, active: bool) -> Self {
        Self {
            kind: NavItemKind::Entry {
                icon: entry.icon().to_string(),
            },
            label: entry.label().to_string(),
            target_path: entry.target_path().to_string(),
            active,
        }
    }

    fn recent(account: &RecentAccount, active: bool) -> Self {
        Self {
            kind: NavItemKind::Recent {
                identifier: account.identifier().to_string(),
            },
            label: account.name().to_string(),
            target_path: account.target_path(),
            active,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self.kind, NavItemKind::Header)
    }
}

/// State of the profile area at the top of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileHeader {
    /// Placeholder while the current user loads (or failed to).
    Skeleton,
    Profile(CurrentUser),
}

impl ProfileHeader {
    pub fn from_status(status: LoadingStatus, user: Option<CurrentUser>) -> Self {
        match (status, user) {
            (LoadingStatus::Success, Some(user)) => ProfileHeader::Profile(user),
            _ => ProfileHeader::Skeleton,
        }
    }

    pub fn from_resource(resource: Resource<CurrentUser>) -> Self {
        Self::from_status(resource.status, resource.data)
    }
}

/// Side navigation for the console.
#[derive(Debug, Clone)]
pub struct SideNavigation {
    tree: NavigationTree,
    recent_accounts: Vec<RecentAccount>,
    resolver: HighlightResolver,
    recent_resolver: HighlightResolver,
    #[cfg(feature = "cache")]
    cache: HighlightCache,
}

impl SideNavigation {
    pub fn new(tree: NavigationTree) -> Self {
        Self {
            tree,
            recent_accounts: Vec::new(),
            resolver: HighlightResolver::new(),
            recent_resolver: HighlightResolver::exact(),
            #[cfg(feature = "cache")]
            cache: HighlightCache::new(),
        }
    }

    /// Set the recent accounts listed under the accounts entry.
    pub fn recent_accounts(mut self, accounts: Vec<RecentAccount>) -> Self {
        self.set_recent_accounts(accounts);
        self
    }

    /// Resolver used for top-level entries.
    pub fn resolver(mut self, resolver: HighlightResolver) -> Self {
        self.resolver = resolver;
        self.invalidate();
        self
    }

    /// Resolver used for recent accounts.
    pub fn recent_resolver(mut self, resolver: HighlightResolver) -> Self {
        self.recent_resolver = resolver;
        self.invalidate();
        self
    }

    /// Replace the recent accounts. Clears cached items when the list changes.
    pub fn set_recent_accounts(&mut self, accounts: Vec<RecentAccount>) {
        if accounts != self.recent_accounts {
            self.recent_accounts = accounts;
            self.invalidate();
        }
    }

    /// Reload the recent accounts from a provider.
    pub fn refresh_recent_accounts(&mut self, provider: &impl RecentAccountsProvider) {
        self.set_recent_accounts(provider.recent_accounts());
    }

    pub fn tree(&self) -> &NavigationTree {
        &self.tree
    }

    pub fn recent(&self) -> &[RecentAccount] {
        &self.recent_accounts
    }

    /// Build the ordered items for `location`.
    pub fn items(&self, location: &CurrentLocation) -> Vec<NavItem> {
        let top = location.segment(TOP_LEVEL_SEGMENT);
        let nested = location.segment(RECENT_ACCOUNT_SEGMENT);
        let mut items = Vec::new();

        for section in self.tree.sections() {
            if let Some(title) = section.title() {
                items.push(NavItem::header(title));
            }

            for entry in section.entries() {
                let active = self.resolver.resolve(entry.target_path(), top);
                items.push(NavItem::entry(entry, active));

                if entry.target_path() == ACCOUNTS_PATH {
                    // recent accounts only light up under the accounts section
                    let in_accounts = active;
                    for account in &self.recent_accounts {
                        let active = in_accounts
                            && self.recent_resolver.resolve(account.identifier(), nested);
                        trace_log!(
                            "recent account '{}' active={} for '{}'",
                            account.identifier(),
                            active,
                            location.pathname()
                        );
                        items.push(NavItem::recent(account, active));
                    }
                }
            }
        }

        debug_log!(
            "{} navigation items built for '{}'",
            items.len(),
            location.pathname()
        );
        items
    }

    /// Build items, reusing the result for pathnames seen before.
    #[cfg(feature = "cache")]
    pub fn items_cached(&mut self, location: &CurrentLocation) -> Vec<NavItem> {
        if let Some(items) = self.cache.get(location.pathname()) {
            return items;
        }
        let items = self.items(location);
        self.cache.insert(location.pathname().to_string(), items.clone());
        items
    }

    /// Statistics for [`items_cached`](Self::items_cached).
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &crate::cache::CacheStats {
        self.cache.stats()
    }

    /// The first highlighted top-level entry, if any.
    pub fn active_entry(&self, location: &CurrentLocation) -> Option<&NavigationEntry> {
        let top = location.segment(TOP_LEVEL_SEGMENT);
        self.tree
            .entries()
            .find(|entry| self.resolver.resolve(entry.target_path(), top))
    }

    fn invalidate(&mut self) {
        #[cfg(feature = "cache")]
        self.cache.clear();
    }
}

impl Default for SideNavigation {
    fn default() -> Self {
        Self::new(NavigationTree::console())
    }
}
