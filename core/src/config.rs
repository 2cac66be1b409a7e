//! Client configuration.
//!
//! Constants shared by the browser and host builds, plus a [`Config`]
//! value for the parts that differ per deployment. The browser bakes the
//! backend URL in at compile time; host tools read it from the
//! environment (a `.env` file is honoured).

use std::time::Duration;

use crate::error::ConfigError;

/// Backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "NEWMECLASS_BACKEND_URL";

/// Environment variable holding the request timeout in seconds.
pub const REQUEST_TIMEOUT_ENV: &str = "NEWMECLASS_REQUEST_TIMEOUT_SECS";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Hero carousel auto-advance interval.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(6);

/// Delay before the home page popup appears.
pub const POPUP_DELAY: Duration = Duration::from_millis(1500);

/// Local storage key holding the day the popup was last dismissed.
pub const POPUP_DISMISSED_KEY: &str = "popup_dismissed_date";

/// Maximum payment proof size (5 MiB).
pub const MAX_PROOF_SIZE: u64 = 5 * 1024 * 1024;

/// Media types accepted for payment proofs.
pub const ALLOWED_PROOF_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

/// Price shown when settings cannot be loaded (IDR).
pub const DEFAULT_PAYMENT_AMOUNT: f64 = 50_000.0;

/// Where the premium lock's upgrade button leads.
pub const PRICING_ROUTE: &str = "/pricing";

/// Local storage key for the admin bearer token.
pub const ADMIN_TOKEN_KEY: &str = "admin_token";

/// Local storage key for the user bearer token.
pub const USER_TOKEN_KEY: &str = "user_token";

/// Runtime configuration for a backend client.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL without trailing slash, e.g. `https://api.newmeclass.com`.
    pub backend_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Build a config for `backend_url`, validating it.
    pub fn new(backend_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            backend_url: normalize_url(backend_url)?,
            ..Self::default()
        })
    }

    /// Read configuration from the process environment.
    ///
    /// Missing variables fall back to defaults; present but malformed ones
    /// are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load `path` as a `.env` file, then read the environment.
    #[cfg(feature = "native")]
    pub fn from_env_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        dotenvy::from_path(path).map_err(|e| ConfigError::EnvFile(e.to_string()))?;
        Self::from_env()
    }

    /// Same as [`Config::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(BACKEND_URL_ENV) {
            config.backend_url = normalize_url(&url)?;
        }

        if let Some(raw) = lookup(REQUEST_TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: REQUEST_TIMEOUT_ENV,
                value: raw.clone(),
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: REQUEST_TIMEOUT_ENV,
                    value: raw,
                });
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Override the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Absolute URL for an API path such as `/api/settings`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    /// Resolve a backend-relative asset path (`/uploads/...`) for display.
    /// Absolute URLs pass through untouched.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            self.url(path)
        }
    }
}

fn normalize_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_trailing_slash_removed() {
        let config = Config::from_lookup(lookup(&[(BACKEND_URL_ENV, "https://api.example.com/")]))
            .unwrap();
        assert_eq!(config.url("/api/settings"), "https://api.example.com/api/settings");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[(BACKEND_URL_ENV, "ftp://x")])),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(REQUEST_TIMEOUT_ENV, "soon")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(REQUEST_TIMEOUT_ENV, "0")])),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_asset_url() {
        let config = Config::new("https://api.example.com").unwrap();
        assert_eq!(
            config.asset_url("/uploads/payments/a.png"),
            "https://api.example.com/uploads/payments/a.png"
        );
        assert_eq!(config.asset_url("https://cdn.x/a.png"), "https://cdn.x/a.png");
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_from_env_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NEWMECLASS_REQUEST_TIMEOUT_SECS=30").unwrap();

        let config = Config::from_env_file(file.path()).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_from_env_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_env_file(&dir.path().join("absent.env"));
        assert!(matches!(result, Err(ConfigError::EnvFile(_))));
    }
}
