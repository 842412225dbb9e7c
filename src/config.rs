//! Runtime configuration.
//!
//! Everything has a default; environment variables override it:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `FUTURAMA_API_URL` | `https://futuramaapi.com` |
//! | `FUTURAMA_TIMEOUT_SECS` | `15` |
//! | `FUTURAMA_LOG` | unset (logging off) |

use std::path::PathBuf;
use std::time::Duration;

use crate::api::PageQuery;

pub const DEFAULT_BASE_URL: &str = "https://futuramaapi.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const ENV_API_URL: &str = "FUTURAMA_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "FUTURAMA_TIMEOUT_SECS";
pub const ENV_LOG: &str = "FUTURAMA_LOG";

/// Configuration for the character screen.
///
/// # Example
///
/// ```ignore
/// use futurama::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_base_url("http://localhost:8080")
///     .with_request_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API origin, without the `/api/characters` path
    pub base_url: String,
    /// Query sent with every fetch
    pub query: PageQuery,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Log file prefix; `None` disables logging
    pub log_path: Option<PathBuf>,
    /// Rejected environment values, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query: PageQuery::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_path: None,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API origin. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Build the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup.
    ///
    /// Empty values count as unset. An unparsable timeout keeps the default
    /// and records a warning in [`AppConfig::warnings`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config = config.with_base_url(url.trim());
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config = config.with_request_timeout(Duration::from_secs(secs));
                }
                _ => config.warnings.push(format!(
                    "Ignoring invalid {}={:?}, using {}s",
                    ENV_TIMEOUT_SECS, raw, DEFAULT_TIMEOUT_SECS
                )),
            }
        }

        if let Some(path) = get(ENV_LOG) {
            config = config.with_log_path(path);
        }

        config
    }

    /// Log the rejected environment values. Call after
    /// [`init_tracing`](crate::logging::init_tracing).
    pub fn report_warnings(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }
}
