//! Console page routing table.
//!
//! Maps a pathname to the console page it shows, extracting identifiers
//! such as `admin_id` along the way. Patterns use the
//! [`matchit`](https://docs.rs/matchit) syntax (`/admins/{admin_id}`).
//!
//! # Examples
//!
//! ```
//! use console_nav::routes::{ConsolePage, ConsoleRoutes};
//!
//! let routes = ConsoleRoutes::console().unwrap();
//! let route = routes.at("/admins/adm_01").unwrap();
//!
//! assert_eq!(route.page, ConsolePage::AdminDetail);
//! assert_eq!(route.param("admin_id"), Some("adm_01"));
//! ```

use crate::error::{ConsoleError, ConsoleResult};
use crate::location::normalize_path;
use crate::{debug_log, trace_log};
use std::collections::HashMap;

/// Parameter name of the admin detail page.
pub const ADMIN_ID: &str = "admin_id";
/// Parameter name of the account detail page.
pub const ACCOUNT_ID: &str = "account_id";

/// Pages of the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsolePage {
    Accounts,
    AccountDetail,
    Tokens,
    ApiKeys,
    Admins,
    AdminDetail,
    Configuration,
    Wallets,
    Transactions,
    Requests,
    Consumptions,
    Users,
    ActivityLogs,
}

/// A matched page together with its path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleRoute {
    pub page: ConsolePage,
    pub params: HashMap<String, String>,
}

impl ConsoleRoute {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Route table from path patterns to [`ConsolePage`]s.
pub struct ConsoleRoutes {
    router: matchit::Router<ConsolePage>,
    patterns: Vec<String>,
}

impl ConsoleRoutes {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            router: matchit::Router::new(),
            patterns: Vec::new(),
        }
    }

    /// The pages of the admin console.
    pub fn console() -> ConsoleResult<Self> {
        Self::new()
            .route("/accounts", ConsolePage::Accounts)?
            .route("/accounts/{account_id}", ConsolePage::AccountDetail)?
            .route("/tokens", ConsolePage::Tokens)?
            .route("/api", ConsolePage::ApiKeys)?
            .route("/admins", ConsolePage::Admins)?
            .route("/admins/{admin_id}", ConsolePage::AdminDetail)?
            .route("/configuration", ConsolePage::Configuration)?
            .route("/wallets", ConsolePage::Wallets)?
            .route("/transaction", ConsolePage::Transactions)?
            .route("/requests", ConsolePage::Requests)?
            .route("/consumptions", ConsolePage::Consumptions)?
            .route("/users", ConsolePage::Users)?
            .route("/activity", ConsolePage::ActivityLogs)
    }

    /// Register `pattern` for `page`.
    pub fn route(mut self, pattern: &str, page: ConsolePage) -> ConsoleResult<Self> {
        self.router
            .insert(pattern, page)
            .map_err(|err| ConsoleError::InvalidRoute {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })?;
        trace_log!("registered console route '{}' -> {:?}", pattern, page);
        self.patterns.push(pattern.to_string());
        Ok(self)
    }

    /// Registered patterns, in registration order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Find the page for `pathname`.
    pub fn at(&self, pathname: &str) -> ConsoleResult<ConsoleRoute> {
        let path = normalize_path(pathname);
        let matched = self
            .router
            .at(&path)
            .map_err(|_| ConsoleError::RouteNotFound {
                path: path.to_string(),
            })?;

        let params = matched
            .params
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        debug_log!("'{}' resolved to {:?}", path, matched.value);
        Ok(ConsoleRoute {
            page: *matched.value,
            params,
        })
    }
}

impl Default for ConsoleRoutes {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleRoutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleRoutes")
            .field("patterns", &self.patterns)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_routes() {
        let routes = ConsoleRoutes::console().unwrap();
        assert_eq!(routes.patterns().len(), 13);
        assert_eq!(routes.at("/wallets").unwrap().page, ConsolePage::Wallets);
        assert_eq!(routes.at("wallets/").unwrap().page, ConsolePage::Wallets);

        let account = routes.at("/accounts/acc_1").unwrap();
        assert_eq!(account.page, ConsolePage::AccountDetail);
        assert_eq!(account.param(ACCOUNT_ID), Some("acc_1"));
    }

    #[test]
    fn test_unknown_path() {
        let routes = ConsoleRoutes::console().unwrap();
        assert_eq!(
            routes.at("/nowhere"),
            Err(ConsoleError::RouteNotFound {
                path: "/nowhere".to_string()
            })
        );
    }

    #[test]
    fn test_conflicting_route() {
        let result = ConsoleRoutes::new()
            .route("/admins/{admin_id}", ConsolePage::AdminDetail)
            .and_then(|r| r.route("/admins/{id}", ConsolePage::AdminDetail));

        assert!(matches!(result, Err(ConsoleError::InvalidRoute { .. })));
    }
}
