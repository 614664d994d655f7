//! Application constants
//!
//! Fixed contracts of the notice store and defaults for the demo presenter.

/// Dismiss token that targets every notification
pub const DISMISS_ALL: &str = "all";

/// Duration used when a creation spec omits one (no auto-expiry)
pub const DEFAULT_DURATION_MS: u64 = 0;

/// Name of the presenter config directory under the home directory
pub const CONFIG_DIR_NAME: &str = ".notice-board";

/// Presenter config file name
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Default log file written by the demo presenter
pub const DEFAULT_LOG_FILE: &str = "notice-board.log";

/// Duration given to toasts created from the demo presenter
pub const DEFAULT_DEMO_DURATION_MS: u64 = 4000;

/// Application name
pub const APP_NAME: &str = "Notice Board";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
