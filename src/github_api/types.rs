use serde::Deserialize;
use std::fmt;

/// GitHub App token exchange error type
///
/// Represents all possible errors that can occur while authenticating as a
/// GitHub App and exchanging the assertion for an installation token.
#[derive(Debug)]
pub enum GithubAppError {
    /// Configuration error (missing or unusable environment value)
    Config(String),
    /// JWT assertion could not be built (key parse or signing failure)
    Jwt(String),
    /// API request failed (network or response I/O error)
    Api(ApiError),
}

impl fmt::Display for GithubAppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GithubAppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GithubAppError::Jwt(msg) => write!(f, "JWT assertion failed: {}", msg),
            GithubAppError::Api(err) => write!(f, "API error: {}", err),
        }
    }
}

impl std::error::Error for GithubAppError {}

impl From<ApiError> for GithubAppError {
    fn from(err: ApiError) -> Self {
        GithubAppError::Api(err)
    }
}

impl From<jsonwebtoken::errors::Error> for GithubAppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        GithubAppError::Jwt(err.to_string())
    }
}

/// API-specific errors
#[derive(Debug)]
pub enum ApiError {
    /// Network error (connection, DNS, timeout)
    Network(String),
    /// Failed to read the response body
    Body(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Body(msg) => write!(f, "Body read error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timeout".to_string())
        } else if err.is_connect() {
            ApiError::Network(format!("Connection failed: {}", err))
        } else if err.is_body() || err.is_decode() {
            ApiError::Body(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Response from the installation access-tokens endpoint
///
/// Every field defaults when absent: error bodies from the API carry no
/// `token` field, and the exchange must not fail on response shape — the
/// token simply comes back empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessTokenResponse {
    /// The installation access token
    #[serde(default)]
    pub token: String,
    /// When the token expires (ISO 8601 format)
    #[serde(default)]
    pub expires_at: String,
    /// Permissions granted to the token
    #[serde(default)]
    pub permissions: TokenPermissions,
    /// Repository selection mode for the installation
    #[serde(default)]
    pub repository_selections: String,
}

/// Permissions granted on an installation access token
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenPermissions {
    #[serde(default)]
    pub contents: String,
    #[serde(default)]
    pub metadata: String,
}
