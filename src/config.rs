//! Runtime configuration for the console core: where the records API lives,
//! how long requests may take, and which credential pair the local admin
//! login accepts. Values usually arrive through CLI flags or `ROLLCALL_*`
//! environment variables; embedders can also build an [`AppConfig`] directly.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Default API base when no deployment-specific URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/student-management/api";

/// Default request timeout in seconds. Generous because free-tier backend
/// hosts can take a while to cold-start.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Console configuration shared by the HTTP client and the auth flows.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout: Duration,
    pub admin: AdminCredentials,
}

impl AppConfig {
    /// Builds a config with the given base URL, falling back to
    /// [`DEFAULT_API_BASE_URL`] when the value is empty or whitespace.
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_admin(mut self, admin: AdminCredentials) -> Self {
        self.admin = admin;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            admin: AdminCredentials::default(),
        }
    }
}

/// Credential pair accepted by the local admin login. The stock deployment
/// ships a demo pair; override it per deployment instead of editing code.
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub password: SecretString,
}

impl AdminCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Checks a submitted pair against the configured one.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new("admin", SecretString::from("admin123".to_string()))
    }
}

/// Trims a configured base URL and strips the trailing slash; `None` for
/// empty input so callers can fall back to a default.
#[must_use]
pub fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
