//! Side navigation and admin detail views for a GPUI admin console.
//!
//! The interesting part is deciding which side menu entry is highlighted.
//! [`HighlightResolver`] compares an entry's target path with one segment of
//! the current pathname, tolerating prefixes and small typos so that parent
//! entries stay active on nested pages:
//!
//! ```
//! use console_nav::{CurrentLocation, HighlightResolver};
//!
//! let location = CurrentLocation::new("/accounts/acc_1");
//! let resolver = HighlightResolver::new();
//!
//! assert!(resolver.resolve("/accounts", location.segment(1)));
//! assert!(!resolver.resolve("/wallets", location.segment(1)));
//! ```
//!
//! Around it:
//!
//! - [`SideNavigation`] builds the ordered, highlighted menu items
//! - [`AdminDetailPage`] builds the admin detail view from an [`AdminProvider`]
//! - [`ConsoleRoutes`] maps pathnames to console pages
//! - [`widgets`] draws both views with GPUI
//!
//! # Features
//!
//! - `cache` (default): LRU cache of built menu items per pathname
//! - `log` (default) / `tracing`: logging backend

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod admin;
#[cfg(feature = "cache")]
pub mod cache;
pub mod error;
pub mod highlight;
pub mod location;
pub mod logging;
pub mod nav;
pub mod provider;
pub mod routes;
pub mod sidebar;
pub mod widgets;

pub use admin::{AdminDetailPage, AdminDetailView, DetailRow};
#[cfg(feature = "cache")]
pub use cache::{CacheStats, HighlightCache};
pub use error::{ConsoleError, ConsoleResult};
pub use highlight::{resolve, HighlightConfig, HighlightResolver};
pub use location::{
    current_location, go_back, has_location, init_location, navigate, normalize_path, segment,
    CurrentLocation, LocationChange, LocationHistory, NavigationDirection,
};
pub use nav::{NavSection, NavigationEntry, NavigationTree, RecentAccount};
pub use provider::{
    AdminProvider, AdminRecord, CurrentUser, CurrentUserProvider, InMemoryAdmins, LoadingStatus,
    RecentAccountsProvider, Resource, StaticRecentAccounts,
};
pub use routes::{ConsolePage, ConsoleRoute, ConsoleRoutes};
pub use sidebar::{NavItem, NavItemKind, ProfileHeader, SideNavigation};
pub use widgets::{admin_detail_view, ConsoleTheme, SideNavigationPanel, SidebarView};
