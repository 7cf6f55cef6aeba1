//! Current location and navigation history.
//!
//! [`CurrentLocation`] is the value views receive on every render; nothing in
//! this crate reads a location from ambient state. [`LocationHistory`] is a
//! small back/forward stack an application can keep as a GPUI global and pass
//! its [`current`](LocationHistory::current) location down to the views.

use crate::debug_log;
use gpui::{App, BorrowAppContext, Global};
use std::borrow::Cow;

/// Normalize a path: leading slash, no trailing slash, empty becomes `/`.
///
/// Returns the input unchanged (borrowed) when it is already normalized.
///
/// # Examples
///
/// ```
/// use console_nav::normalize_path;
///
/// assert_eq!(normalize_path("accounts/"), "/accounts");
/// assert_eq!(normalize_path(""), "/");
/// assert_eq!(normalize_path("/admins/adm_1"), "/admins/adm_1");
/// ```
pub fn normalize_path(path: &'_ str) -> Cow<'_, str> {
    if path.is_empty() {
        return Cow::Borrowed("/");
    }
    if path == "/" {
        return Cow::Borrowed(path);
    }
    if path.starts_with('/') && !path.ends_with('/') {
        return Cow::Borrowed(path);
    }

    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{trimmed}"))
    }
}

/// Segment `index` of `pathname` when split on `/`.
///
/// Splitting keeps the empty segment before the leading slash, so index 1 is
/// the first real segment. Out-of-range indices give `""`.
///
/// ```
/// use console_nav::location::segment;
///
/// assert_eq!(segment("/accounts/acc_1", 1), "accounts");
/// assert_eq!(segment("/accounts/acc_1", 2), "acc_1");
/// assert_eq!(segment("/accounts", 2), "");
/// ```
pub fn segment(pathname: &str, index: usize) -> &str {
    pathname.split('/').nth(index).unwrap_or("")
}

/// The location the console is currently showing.
///
/// A query string or fragment in the input is kept apart from the pathname,
/// so `/activity?page=2` has pathname `/activity` and search `page=2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrentLocation {
    pathname: String,
    search: Option<String>,
}

impl CurrentLocation {
    /// Create a location, normalizing the pathname.
    pub fn new(url: impl AsRef<str>) -> Self {
        let url = url.as_ref();
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        let (path, search) = match url.split_once('?') {
            Some((path, query)) if !query.is_empty() => (path, Some(query.to_string())),
            Some((path, _)) => (path, None),
            None => (url, None),
        };

        Self {
            pathname: normalize_path(path).into_owned(),
            search,
        }
    }

    /// The root location `/`.
    pub fn root() -> Self {
        Self {
            pathname: "/".to_string(),
            search: None,
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Query string without the leading `?`.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// See [`segment`].
    pub fn segment(&self, index: usize) -> &str {
        segment(&self.pathname, index)
    }
}

impl Default for CurrentLocation {
    fn default() -> Self {
        Self::root()
    }
}

/// Direction of a location change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Forward,
    Back,
    Replace,
}

/// Emitted by every [`LocationHistory`] transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationChange {
    pub from: String,
    pub to: String,
    pub direction: NavigationDirection,
}

/// Back/forward stack of visited locations.
#[derive(Debug, Clone)]
pub struct LocationHistory {
    entries: Vec<CurrentLocation>,
    current: usize,
}

impl LocationHistory {
    /// Create a history positioned at `/`.
    pub fn new() -> Self {
        Self::starting_at(CurrentLocation::root())
    }

    /// Create a history positioned at `location`.
    pub fn starting_at(location: CurrentLocation) -> Self {
        Self {
            entries: vec![location],
            current: 0,
        }
    }

    /// The location currently shown.
    pub fn current(&self) -> &CurrentLocation {
        &self.entries[self.current]
    }

    /// Navigate to `pathname`, dropping any forward entries.
    pub fn push(&mut self, pathname: impl AsRef<str>) -> LocationChange {
        let from = self.current().pathname().to_string();
        let location = CurrentLocation::new(pathname);

        self.entries.truncate(self.current + 1);
        self.entries.push(location);
        self.current += 1;

        self.change(from, NavigationDirection::Forward)
    }

    /// Replace the current location without growing the history.
    pub fn replace(&mut self, pathname: impl AsRef<str>) -> LocationChange {
        let from = self.current().pathname().to_string();
        self.entries[self.current] = CurrentLocation::new(pathname);
        self.change(from, NavigationDirection::Replace)
    }

    /// Step back. Returns `None` at the start of the history.
    pub fn back(&mut self) -> Option<LocationChange> {
        if !self.can_go_back() {
            return None;
        }
        let from = self.current().pathname().to_string();
        self.current -= 1;
        Some(self.change(from, NavigationDirection::Back))
    }

    /// Step forward. Returns `None` at the end of the history.
    pub fn forward(&mut self) -> Option<LocationChange> {
        if !self.can_go_forward() {
            return None;
        }
        let from = self.current().pathname().to_string();
        self.current += 1;
        Some(self.change(from, NavigationDirection::Forward))
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    /// Number of entries, including forward ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history holds at least one location.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn change(&self, from: String, direction: NavigationDirection) -> LocationChange {
        let to = self.current().pathname().to_string();
        debug_log!("location {:?}: '{}' -> '{}'", direction, from, to);
        LocationChange {
            from,
            to,
            direction,
        }
    }
}

impl Default for LocationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Global for LocationHistory {}

/// Install a [`LocationHistory`] starting at `pathname` as a GPUI global.
pub fn init_location(cx: &mut App, pathname: impl AsRef<str>) {
    cx.set_global(LocationHistory::starting_at(CurrentLocation::new(pathname)));
}

/// Push `pathname` onto the global history and refresh all windows.
///
/// Installs a fresh history first if [`init_location`] was never called.
pub fn navigate(cx: &mut App, pathname: impl AsRef<str>) {
    if !cx.has_global::<LocationHistory>() {
        cx.set_global(LocationHistory::new());
    }
    cx.update_global::<LocationHistory, _>(|history, _cx| {
        history.push(pathname);
    });
    cx.refresh_windows();
}

/// Step back in the global history. Returns `false` when there is nothing to go back to.
pub fn go_back(cx: &mut App) -> bool {
    if !cx.has_global::<LocationHistory>() {
        return false;
    }
    let moved = cx.update_global::<LocationHistory, _>(|history, _cx| history.back().is_some());
    if moved {
        cx.refresh_windows();
    }
    moved
}

/// Whether a [`LocationHistory`] is installed.
pub fn has_location(cx: &App) -> bool {
    cx.has_global::<LocationHistory>()
}

/// The current global location, or `/` when no history is installed.
pub fn current_location(cx: &App) -> CurrentLocation {
    cx.try_global::<LocationHistory>()
        .map(|history| history.current().clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[test]
    fn test_segment() {
        assert_eq!(segment("/", 1), "");
        assert_eq!(segment("/accounts", 0), "");
        assert_eq!(segment("/accounts", 1), "accounts");
        assert_eq!(segment("/accounts/123/wallets", 3), "wallets");
        assert_eq!(segment("/accounts/123/wallets", 9), "");
    }

    #[test]
    fn test_location_normalizes() {
        assert_eq!(CurrentLocation::new("accounts/").pathname(), "/accounts");
        assert_eq!(CurrentLocation::new("//").pathname(), "/");
        assert_eq!(CurrentLocation::new("/admins/adm_1").segment(2), "adm_1");
    }

    #[test]
    fn test_location_splits_query() {
        let location = CurrentLocation::new("/activity/?page=2#top");
        assert_eq!(location.pathname(), "/activity");
        assert_eq!(location.search(), Some("page=2"));
        assert_eq!(CurrentLocation::new("/users?").search(), None);
        assert_eq!(CurrentLocation::new("/users#x").pathname(), "/users");
    }

    #[test]
    fn test_history_navigation() {
        let mut history = LocationHistory::new();
        assert_eq!(history.current().pathname(), "/");
        assert!(!history.can_go_back());

        history.push("/accounts");
        let change = history.push("/accounts/acc_1");
        assert_eq!(change.from, "/accounts");
        assert_eq!(change.to, "/accounts/acc_1");
        assert_eq!(change.direction, NavigationDirection::Forward);

        let back = history.back().unwrap();
        assert_eq!(back.to, "/accounts");
        assert_eq!(back.direction, NavigationDirection::Back);
        assert!(history.can_go_forward());

        history.forward();
        assert_eq!(history.current().pathname(), "/accounts/acc_1");
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = LocationHistory::new();
        history.push("/wallets");
        history.push("/users");
        history.back();
        history.push("/tokens");

        assert_eq!(history.len(), 3);
        assert!(!history.can_go_forward());
        assert_eq!(history.current().pathname(), "/tokens");
    }

    #[test]
    fn test_replace() {
        let mut history = LocationHistory::new();
        history.push("/users");
        let change = history.replace("/admins");

        assert_eq!(change.direction, NavigationDirection::Replace);
        assert_eq!(history.current().pathname(), "/admins");
        assert_eq!(history.len(), 2);
    }

    #[gpui::test]
    async fn test_global_navigation(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert_eq!(current_location(cx).pathname(), "/");

            init_location(cx, "/accounts");
            navigate(cx, "/accounts/acc_1");
            assert_eq!(current_location(cx).segment(2), "acc_1");

            assert!(go_back(cx));
            assert_eq!(current_location(cx).pathname(), "/accounts");
            assert!(!go_back(cx));
        });
    }
}
