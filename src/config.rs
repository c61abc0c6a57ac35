//! Build-time Configuration
//!
//! Backend location and client-side constants.

use log::LevelFilter;

/// Backend used when `CHALLAN_API_BASE` is not set at build time
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Base URL of the REST backend, without a trailing slash
pub fn api_base() -> &'static str {
    option_env!("CHALLAN_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

/// Log level installed at startup
pub fn log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Records kept by the in-memory logger
pub const LOG_CAPACITY: usize = rolling_logger::DEFAULT_CAPACITY;

/// How long a toast stays on screen
pub const NOTICE_LIFETIME_MS: u32 = 4_000;

/// Days between issue date and due date for a new challan
pub const DEFAULT_DUE_DAYS: i64 = 30;

// Browser storage keys
pub const KEY_ACCESS: &str = "accessToken";
pub const KEY_REFRESH: &str = "refreshToken";
pub const KEY_NAME: &str = "displayName";
pub const KEY_ROLE: &str = "role";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
        assert!(api_base().starts_with("http"));
    }
}
