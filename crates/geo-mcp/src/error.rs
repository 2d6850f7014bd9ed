//! Error types for the GEO MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;

/// Hint shown whenever the configuration is missing or unusable.
pub const INIT_HINT: &str = "Please run `geo-mcp --init` to create a config file.";

/// Errors from loading the JSON configuration file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The resolved configuration file does not exist
    #[error("Config file not found: {}", path.display())]
    NotFound {
        /// Resolved path that was probed
        path: PathBuf,
    },

    /// The file exists but could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        /// Resolved path of the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid JSON configuration object
    #[error("Error loading config from {}: {source}", path.display())]
    Parse {
        /// Resolved path of the file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// `base_url` is not an absolute URL
    #[error("Invalid base_url '{url}': {source}")]
    InvalidBaseUrl {
        /// Offending value
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },
}

impl ConfigError {
    /// Path of the configuration file involved, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } | Self::Parse { path, .. } => {
                Some(path.as_path())
            }
            Self::InvalidBaseUrl { .. } => None,
        }
    }

    /// Error message followed by the init hint.
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("{self}. {INIT_HINT}")
    }
}

/// Errors from the E-Utilities query layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// No contact email configured; raised before any request is sent
    #[error("Email is required for NCBI E-Utils. Please run `geo-mcp --init` to configure.")]
    MissingCredential,

    /// Non-2xx response from the remote service
    #[error("E-Utilities request failed ({status}): {message}")]
    RemoteRequest {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Create a remote request error.
    #[must_use]
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteRequest { status, message: message.into() }
    }

    /// HTTP status of a failed remote request.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRequest { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the caller has to fix its configuration.
    #[must_use]
    pub const fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::MissingCredential) => {
                format!("No contact email configured for NCBI E-Utilities. {INIT_HINT}")
            }
            Self::Client(ClientError::RemoteRequest { status, .. }) => {
                format!("NCBI E-Utilities returned HTTP {status}. Check the search term and try again.")
            }
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
