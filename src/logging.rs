//! Logging macros.
//!
//! Each macro forwards to the [`log`](https://docs.rs/log) or
//! [`tracing`](https://docs.rs/tracing) crate, whichever feature is enabled.
//! Enable at most one of the two.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! ```ignore
//! use console_nav::{debug_log, trace_log, warn_log};
//!
//! trace_log!("segment {} of '{}' is '{}'", index, pathname, segment);
//! debug_log!("{} navigation items built for '{}'", items.len(), pathname);
//! warn_log!("admin provider failed: {}", err);
//! ```

/// Emit a **trace**-level message. Used on per-entry highlight decisions.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level message.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit a **warn**-level message.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}
