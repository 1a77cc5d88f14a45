use crate::github_api::types::{AccessTokenResponse, ApiError, GithubAppError};

/// Production GitHub API base URL
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// HTTP client for the GitHub API
///
/// Handles the single call this program makes: exchanging a signed App JWT
/// for an installation access token.
#[derive(Debug, Clone)]
pub struct GithubClient {
    /// Base URL for the GitHub API
    base_url: String,
    /// HTTP client for making requests
    client: reqwest::Client,
}

impl GithubClient {
    /// Create a client targeting the production GitHub API
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE_URL)
    }

    /// Create a client targeting an alternate base URL
    ///
    /// Used by tests to point at a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        tracing::debug!("Creating GithubClient with base URL: {}", base_url);

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Exchange a signed App JWT for an installation access token
    ///
    /// Issues `POST /app/installations/{installation_id}/access_tokens` with
    /// the JWT as a bearer credential and an empty body. Network and
    /// body-read failures are fatal; the response body itself is parsed
    /// leniently — GitHub's error bodies carry no `token` field, and the
    /// status code is not inspected, so such responses yield an empty token
    /// rather than an error.
    ///
    /// No deadline is set on the request; a hung endpoint hangs the call.
    ///
    /// # Arguments
    ///
    /// * `installation_id` - The numeric installation identifier
    /// * `app_jwt` - A signed App assertion from [`create_app_jwt`]
    ///
    /// [`create_app_jwt`]: crate::github_api::jwt::create_app_jwt
    pub async fn create_installation_token(
        &self,
        installation_id: &str,
        app_jwt: &str,
    ) -> Result<AccessTokenResponse, GithubAppError> {
        let url = format!(
            "{}/app/installations/{}/access_tokens",
            self.base_url, installation_id
        );

        tracing::info!(
            "Requesting installation access token: installation_id={}",
            installation_id
        );
        tracing::debug!("Sending token exchange request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", format!("Bearer {}", app_jwt))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send token exchange request: {}", e);
                ApiError::from(e)
            })?;

        let status = response.status();
        tracing::debug!("Received response with status: {}", status);

        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read token exchange response body: {}", e);
            ApiError::from(e)
        })?;

        let token_response: AccessTokenResponse =
            serde_json::from_slice(&body).unwrap_or_default();

        if token_response.token.is_empty() {
            tracing::warn!(
                "Token exchange response carried no token (status {})",
                status
            );
        } else {
            tracing::debug!(
                "Installation token received: expires_at={}, length={}",
                token_response.expires_at,
                token_response.token.len()
            );
        }

        Ok(token_response)
    }

    /// Get the base URL for this client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}
