//! Configuration for the GEO MCP server.
//!
//! The configuration file is a small JSON object:
//!
//! ```json
//! {
//!     "base_url": "https://eutils.ncbi.nlm.nih.gov/entrez/eutils",
//!     "email": "your_email@example.com",
//!     "api_key": "YOUR_API_KEY"
//! }
//! ```
//!
//! All fields are optional. NCBI requires a contact email for every request,
//! so queries fail with [`ClientError::MissingCredential`](crate::error::ClientError)
//! until one is configured.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult, INIT_HINT};

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Public E-Utilities root.
    pub const BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// ESearch endpoint, relative to the base URL.
    pub const ESEARCH: &str = "esearch.fcgi";

    /// ESummary endpoint, relative to the base URL.
    pub const ESUMMARY: &str = "esummary.fcgi";

    /// Default `retmax` for searches.
    pub const DEFAULT_MAX_RESULTS: u32 = 20;

    /// Largest `retmax` accepted from tool input.
    pub const MAX_RESULTS_LIMIT: u32 = 10_000;

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Environment variable names.
pub mod env {
    /// Overrides the configuration file location.
    pub const CONFIG_PATH: &str = "CONFIG_PATH";

    /// Contact email, overrides the file value.
    pub const EMAIL: &str = "NCBI_EMAIL";

    /// API key, overrides the file value.
    pub const API_KEY: &str = "NCBI_API_KEY";
}

/// File name used when `CONFIG_PATH` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// On-disk shape of the configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,
}

/// Client configuration.
#[derive(Clone)]
pub struct Config {
    /// E-Utilities root, without trailing slash.
    pub base_url: String,

    /// Contact email sent with every request.
    pub email: Option<String>,

    /// NCBI API key (optional, raises the request quota).
    pub api_key: Option<String>,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration against the public E-Utilities root.
    ///
    /// Blank values count as absent.
    #[must_use]
    pub fn new(email: Option<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: api::BASE_URL.to_string(),
            email: non_blank(email),
            api_key: non_blank(api_key),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            email: Some("test@example.com".to_string()),
            api_key: None,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Replace email and API key with values from the command line or environment.
    #[must_use]
    pub fn with_overrides(mut self, email: Option<String>, api_key: Option<String>) -> Self {
        if let Some(email) = non_blank(email) {
            self.email = Some(email);
        }
        if let Some(key) = non_blank(api_key) {
            self.api_key = Some(key);
        }
        self
    }

    /// Check if a contact email is configured.
    #[must_use]
    pub const fn has_email(&self) -> bool {
        self.email.is_some()
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn from_file(file: ConfigFile) -> ConfigResult<Self> {
        let base_url = match non_blank(file.base_url) {
            Some(url) => {
                let url = url.trim();
                url::Url::parse(url).map_err(|source| ConfigError::InvalidBaseUrl {
                    url: url.to_string(),
                    source,
                })?;
                url.trim_end_matches('/').to_string()
            }
            None => api::BASE_URL.to_string(),
        };

        Ok(Self { base_url, ..Self::new(file.email, file.api_key) })
    }
}

impl Default for Config {
    /// Public root, no email, no API key.
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("has_api_key", &self.has_api_key())
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Directory containing the running executable.
///
/// Falls back to the current directory when it cannot be determined.
#[must_use]
pub fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve a configuration path; relative paths are taken from `install_dir`.
#[must_use]
pub fn resolve_config_path(raw: &str, install_dir: &Path) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() { path.to_path_buf() } else { install_dir.join(path) }
}

/// Parse configuration JSON read from `path`.
///
/// The top-level value must be a JSON object.
pub fn parse_config(content: &str, path: &Path) -> ConfigResult<Config> {
    let parse_error = |source: serde_json::Error| ConfigError::Parse { path: path.to_path_buf(), source };

    let value: serde_json::Value = serde_json::from_str(content).map_err(parse_error)?;
    if !value.is_object() {
        return Err(parse_error(serde::de::Error::custom(
            "config file must contain a JSON object",
        )));
    }

    let file: ConfigFile = serde_json::from_value(value).map_err(parse_error)?;
    Config::from_file(file)
}

/// Load the configuration file at `path`.
///
/// Failures are logged together with the init hint and returned to the caller.
pub fn load_config_from(path: &Path) -> ConfigResult<Config> {
    let result = read_config(path);
    if let Err(ref e) = result {
        tracing::error!(path = %path.display(), error = %e, "{INIT_HINT}");
    }
    result
}

fn read_config(path: &Path) -> ConfigResult<Config> {
    if !path.exists() {
        return Err(ConfigError::NotFound { path: path.to_path_buf() });
    }

    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

    let config = parse_config(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        base_url = %config.base_url,
        has_email = config.has_email(),
        has_api_key = config.has_api_key(),
        "Loaded configuration"
    );
    Ok(config)
}

/// Load the configuration from `raw` (default `config.json`) relative to the install directory.
pub fn load_config_with(raw: Option<&str>) -> ConfigResult<Config> {
    let raw = raw.unwrap_or(DEFAULT_CONFIG_FILE);
    load_config_from(&resolve_config_path(raw, &install_dir()))
}

/// Load the configuration from the location named by `CONFIG_PATH`.
pub fn load_config() -> ConfigResult<Config> {
    let raw = std::env::var(env::CONFIG_PATH).ok();
    load_config_with(raw.as_deref())
}

/// Load the configuration, substituting [`Config::default`] on any error.
///
/// The default has no email, so queries made with it fail with
/// `MissingCredential`. Use [`load_config`] to see the original error.
#[must_use]
pub fn get_effective_config() -> Config {
    let raw = std::env::var(env::CONFIG_PATH).ok();
    get_effective_config_with(raw.as_deref())
}

/// Like [`load_config_with`], substituting [`Config::default`] on any error.
#[must_use]
pub fn get_effective_config_with(raw: Option<&str>) -> Config {
    load_config_with(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Using default configuration");
        Config::default()
    })
}
