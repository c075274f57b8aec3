//! Connection settings for the portal client.

use std::time::Duration;

/// Production base URL of the eCourts services portal.
pub const DEFAULT_BASE_URL: &str = "https://services.ecourts.gov.in/ecourtindia_v6";

/// Browser user agent sent with every request. The portal serves its AJAX
/// fragments only to clients that look like a browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to build a [`crate::Client`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base URL without a trailing slash. Endpoint paths are appended to it.
    pub base_url: String,
    /// Timeout applied to every request, covering connect through body read.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl PortalConfig {
    /// Reads overrides from `ECOURTS_BASE_URL`, `ECOURTS_TIMEOUT_SECS` and
    /// `ECOURTS_USER_AGENT`. Missing or unparseable values keep the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = env_string("ECOURTS_BASE_URL").unwrap_or(defaults.base_url);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(env_u64(
                "ECOURTS_TIMEOUT_SECS",
                defaults.timeout.as_secs(),
            )),
            user_agent: env_string("ECOURTS_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Points the configuration at a different host. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.trim().parse::<u64>().ok())
        .filter(|val| *val > 0)
        .unwrap_or(default)
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
