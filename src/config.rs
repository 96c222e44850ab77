use once_cell::sync::OnceCell;
use std::env;
use std::time::Duration;

use crate::endpoint::resolve_endpoint;

/// Origin of the development proxy fronting the backend when no explicit base
/// URL is configured (the local Flask default).
pub const DEV_PROXY_ORIGIN: &str = "http://127.0.0.1:5000";

/// Default bound on a single request. Generous because a scaled-to-zero
/// backend can need most of it to cold start.
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// Upload cap enforced before a request is built; the backend rejects larger
/// bodies anyway.
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("PESTWATCH_API_URL").unwrap_or_default(),
            timeout: Duration::from_millis(
                env::var("PESTWATCH_TIMEOUT_MS")
                    .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
                    .parse()
                    .expect("PESTWATCH_TIMEOUT_MS must be a valid number"),
            ),
        }
    }

    /// Process-wide settings, read from the environment exactly once and
    /// never reassigned afterwards.
    pub fn global() -> &'static Config {
        CONFIG.get_or_init(Config::from_env)
    }

    /// Concrete URL for a logical backend path. A resolution that stays
    /// relative (no network-scheme base configured) is rooted at the
    /// development proxy origin so the client remains usable unconfigured.
    pub fn endpoint(&self, path: &str) -> String {
        let resolved = resolve_endpoint(&self.api_url, path);
        if resolved.starts_with('/') {
            format!("{DEV_PROXY_ORIGIN}{resolved}")
        } else {
            resolved
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
