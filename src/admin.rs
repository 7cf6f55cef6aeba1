//! Admin detail page.
//!
//! Loads one admin through an [`AdminProvider`] and lays the record out as a
//! [`AdminDetailView`]: a top bar titled with the admin id, breadcrumbs, a
//! back link and a list of labeled rows. A missing admin yields no view at all;
//! the page stays blank rather than showing an error.

use crate::error::{ConsoleError, ConsoleResult};
use crate::provider::{AdminProvider, AdminRecord};
use crate::routes::{ConsolePage, ConsoleRoutes, ADMIN_ID};
use crate::{debug_log, warn_log};
use chrono::{DateTime, Utc};

/// Timestamp format on detail pages: day/month/year, 12-hour clock.
pub const DETAIL_DATE_FORMAT: &str = "%d/%m/%Y %I:%M:%S";

/// Where the page's back link points.
pub const ADMIN_BACK_PATH: &str = "/admins";

/// Shown for absent optional values.
pub const EMPTY_VALUE: &str = "-";

/// Format a timestamp for a detail row.
pub fn format_detail_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(DETAIL_DATE_FORMAT).to_string()
}

/// A labeled value in the details section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    /// Whether the row offers a copy-to-clipboard action.
    pub copyable: bool,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            copyable: false,
        }
    }

    fn copyable(mut self) -> Self {
        self.copyable = true;
        self
    }
}

/// Everything the admin detail page draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminDetailView {
    pub title: String,
    pub breadcrumbs: Vec<String>,
    pub back_path: String,
    /// Heading of the details section.
    pub section: &'static str,
    pub rows: Vec<DetailRow>,
}

impl AdminDetailView {
    pub fn new(admin: &AdminRecord) -> Self {
        let rows = vec![
            DetailRow::new("Id", admin.id.clone()).copyable(),
            DetailRow::new("Email", admin.email.as_deref().unwrap_or(EMPTY_VALUE)),
            DetailRow::new("Created Date", format_detail_date(&admin.created_at)),
            DetailRow::new("Last Update", format_detail_date(&admin.updated_at)),
        ];

        Self {
            title: admin.id.clone(),
            breadcrumbs: vec!["Admin".to_string(), admin.id.clone()],
            back_path: ADMIN_BACK_PATH.to_string(),
            section: "DETAILS",
            rows,
        }
    }

    /// Value of the row labeled `label`.
    pub fn row(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

/// Entry points for building the admin detail page.
pub struct AdminDetailPage;

impl AdminDetailPage {
    /// Load the view for `admin_id`. `Ok(None)` when the admin does not exist.
    pub fn load(
        provider: &impl AdminProvider,
        admin_id: &str,
    ) -> ConsoleResult<Option<AdminDetailView>> {
        let admin = provider.admin(admin_id).map_err(|err| {
            warn_log!("admin provider failed for '{}': {}", admin_id, err);
            err
        })?;

        match admin {
            Some(admin) => {
                debug_log!("admin detail loaded for '{}'", admin_id);
                Ok(Some(AdminDetailView::new(&admin)))
            }
            None => {
                debug_log!("no admin '{}', rendering nothing", admin_id);
                Ok(None)
            }
        }
    }

    /// Like [`load`](Self::load), but a missing admin is an error.
    pub fn require(
        provider: &impl AdminProvider,
        admin_id: &str,
    ) -> ConsoleResult<AdminDetailView> {
        Self::load(provider, admin_id)?.ok_or_else(|| ConsoleError::AdminNotFound {
            id: admin_id.to_string(),
        })
    }

    /// Resolve `admin_id` from `pathname` and load the view.
    ///
    /// Fails with [`ConsoleError::RouteNotFound`] when the pathname is not an
    /// admin detail page.
    pub fn from_path(
        routes: &ConsoleRoutes,
        provider: &impl AdminProvider,
        pathname: &str,
    ) -> ConsoleResult<Option<AdminDetailView>> {
        let route = routes.at(pathname)?;
        let admin_id = match (route.page, route.param(ADMIN_ID)) {
            (ConsolePage::AdminDetail, Some(id)) => id,
            _ => {
                return Err(ConsoleError::RouteNotFound {
                    path: pathname.to_string(),
                })
            }
        };
        Self::load(provider, admin_id)
    }
}
