//! Read-only data providers consumed by the views.
//!
//! Fetching lives outside this crate. Applications implement these traits on
//! top of their own stores; the in-memory implementations here back tests and
//! demos.

use crate::error::ConsoleResult;
use crate::nav::RecentAccount;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Progress of an asynchronous load, as reported by a provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingStatus {
    #[default]
    Initial,
    Pending,
    Success,
    Failed,
}

impl LoadingStatus {
    pub fn is_success(self) -> bool {
        matches!(self, LoadingStatus::Success)
    }
}

/// A record together with its loading status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource<T> {
    pub status: LoadingStatus,
    pub data: Option<T>,
}

impl<T> Resource<T> {
    /// A successfully loaded record.
    pub fn loaded(data: T) -> Self {
        Self {
            status: LoadingStatus::Success,
            data: Some(data),
        }
    }

    /// A record still in flight.
    pub fn pending() -> Self {
        Self {
            status: LoadingStatus::Pending,
            data: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            status: LoadingStatus::Failed,
            data: None,
        }
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            status: LoadingStatus::Initial,
            data: None,
        }
    }
}

/// The signed-in console user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub username: Option<String>,
}

impl CurrentUser {
    /// Name to show in the profile header: username, else email.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.email)
    }
}

/// An administrator account, as shown on the admin detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRecord {
    pub id: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub trait CurrentUserProvider {
    fn current_user(&self) -> Resource<CurrentUser>;
}

pub trait AdminProvider {
    /// Look up an admin. `Ok(None)` means no such admin.
    fn admin(&self, id: &str) -> ConsoleResult<Option<AdminRecord>>;
}

pub trait RecentAccountsProvider {
    /// Recently visited accounts, most recent first.
    fn recent_accounts(&self) -> Vec<RecentAccount>;
}

impl CurrentUserProvider for Resource<CurrentUser> {
    fn current_user(&self) -> Resource<CurrentUser> {
        self.clone()
    }
}

/// Admin records held in memory, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAdmins {
    admins: HashMap<String, AdminRecord>,
}

impl InMemoryAdmins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a record.
    pub fn insert(&mut self, admin: AdminRecord) {
        self.admins.insert(admin.id.clone(), admin);
    }

    pub fn with(mut self, admin: AdminRecord) -> Self {
        self.insert(admin);
        self
    }
}

impl AdminProvider for InMemoryAdmins {
    fn admin(&self, id: &str) -> ConsoleResult<Option<AdminRecord>> {
        Ok(self.admins.get(id).cloned())
    }
}

/// A fixed list of recent accounts.
#[derive(Debug, Clone, Default)]
pub struct StaticRecentAccounts(pub Vec<RecentAccount>);

impl RecentAccountsProvider for StaticRecentAccounts {
    fn recent_accounts(&self) -> Vec<RecentAccount> {
        self.0.clone()
    }
}
