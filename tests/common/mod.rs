//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use console_nav::*;

/// Route log output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// An admin with both timestamps set.
pub fn admin(id: &str, email: Option<&str>) -> AdminRecord {
    AdminRecord {
        id: id.to_string(),
        email: email.map(String::from),
        created_at: timestamp(2018, 6, 14, 9, 5, 30),
        updated_at: timestamp(2018, 7, 1, 18, 45, 0),
    }
}

pub fn recent(pairs: &[(&str, &str)]) -> Vec<RecentAccount> {
    pairs
        .iter()
        .map(|(name, id)| RecentAccount::new(*name, *id))
        .collect()
}

/// Labels of the highlighted items for `path`.
pub fn active_labels(nav: &SideNavigation, path: &str) -> Vec<String> {
    nav.items(&CurrentLocation::new(path))
        .into_iter()
        .filter(|item| item.active)
        .map(|item| item.label)
        .collect()
}

/// Provider that always fails.
pub struct FailingAdmins;

impl AdminProvider for FailingAdmins {
    fn admin(&self, _id: &str) -> ConsoleResult<Option<AdminRecord>> {
        Err(ConsoleError::ProviderFailed {
            message: "connection refused".to_string(),
        })
    }
}
