//! Error handling for the console views.
//!
//! Highlight resolution itself is total and never fails. The types here cover
//! the surrounding pieces: looking up console routes, validating navigation
//! trees and reading records from data providers.
//!
//! # Examples
//!
//! ```
//! use console_nav::error::ConsoleError;
//!
//! let err = ConsoleError::RouteNotFound { path: "/nope".into() };
//! assert_eq!(err.to_string(), "Route not found: /nope");
//! assert!(err.is_not_found());
//! ```

use std::fmt;

/// Convenience alias used throughout the crate.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Errors raised by route lookup, navigation tree construction and providers.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// No console page is registered for the path
    RouteNotFound { path: String },

    /// A route pattern was rejected by the route table
    InvalidRoute { pattern: String, message: String },

    /// The admin provider has no record for this id
    AdminNotFound { id: String },

    /// Two navigation entries share the same target path
    DuplicateEntry { path: String },

    /// A data provider failed to produce its records
    ProviderFailed { message: String },
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::RouteNotFound { path } => {
                write!(f, "Route not found: {}", path)
            }
            ConsoleError::InvalidRoute { pattern, message } => {
                write!(f, "Invalid route '{}': {}", pattern, message)
            }
            ConsoleError::AdminNotFound { id } => {
                write!(f, "Admin not found: {}", id)
            }
            ConsoleError::DuplicateEntry { path } => {
                write!(f, "Duplicate navigation entry: {}", path)
            }
            ConsoleError::ProviderFailed { message } => {
                write!(f, "Provider failed: {}", message)
            }
        }
    }
}

impl std::error::Error for ConsoleError {}

impl ConsoleError {
    /// Check if the error means "nothing there" rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConsoleError::RouteNotFound { .. } | ConsoleError::AdminNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = ConsoleError::AdminNotFound {
            id: "adm_01".to_string(),
        };
        assert_eq!(error.to_string(), "Admin not found: adm_01");

        let error = ConsoleError::InvalidRoute {
            pattern: "/admins/{".to_string(),
            message: "unclosed".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid route '/admins/{': unclosed");
    }

    #[test]
    fn test_is_not_found() {
        assert!(ConsoleError::RouteNotFound {
            path: "/x".to_string()
        }
        .is_not_found());
        assert!(!ConsoleError::ProviderFailed {
            message: "timeout".to_string()
        }
        .is_not_found());
    }
}
