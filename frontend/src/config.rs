//! Application configuration.
//!
//! The browser build has no environment at runtime, so the backend URL is
//! baked in at compile time from `NEWMECLASS_BACKEND_URL`.

use std::time::Duration;

use newmeclass::config::{DEFAULT_BACKEND_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use newmeclass::Config;

/// Backend API base URL.
pub const BACKEND_URL: &str = match option_env!("NEWMECLASS_BACKEND_URL") {
    Some(url) => url,
    None => DEFAULT_BACKEND_URL,
};

/// Site name shown in the header and page titles.
pub const APP_NAME: &str = "NEWMECLASS";

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Toasts kept on screen at once.
pub const MAX_TOASTS: usize = 3;

/// Client configuration for the browser build.
///
/// Falls back to the default URL if the baked-in one is malformed.
pub fn client_config() -> Config {
    Config::new(BACKEND_URL)
        .unwrap_or_default()
        .with_timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
}
