//! Client configuration.

/// Default service location for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9090";

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "VIDEOCLUB_API_URL";

/// Where the catalog service lives.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Build a config with an explicit base URL. Trailing slashes are
    /// stripped so path joining stays uniform.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `VIDEOCLUB_API_URL`, falling back to the
    /// local development default.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| {
            tracing::debug!("{BASE_URL_ENV} not set; using {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        });
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/auth`
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/api/auth{path}", self.base_url)
    }

    /// `{base}/api/movies`
    pub fn catalog_url(&self, path: &str) -> String {
        format!("{}/api/movies{path}", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
