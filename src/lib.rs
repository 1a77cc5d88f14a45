//! GitHub App installation token exchange
//!
//! This crate authenticates as a GitHub App and obtains an installation
//! access token:
//! - Configuration loading from the process environment (installation ID,
//!   App ID, PEM-encoded RSA private key)
//! - Short-lived RS256-signed JWT assertion proving control of the App's
//!   private key
//! - One authenticated POST to the GitHub API exchanging the assertion for
//!   an installation-scoped access token
//!
//! # Example
//!
//! ```no_run
//! use github_app_token::{create_app_jwt, Config, GithubClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let jwt = create_app_jwt(&config.app_id, &config.private_key)?;
//!
//! let client = GithubClient::new();
//! let response = client
//!     .create_installation_token(&config.installation_id, &jwt)
//!     .await?;
//!
//! println!("{}", response.token);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod github_api;

// Re-export commonly used types and functions
pub use config::Config;
pub use github_api::{
    client::GithubClient,
    jwt::{create_app_jwt, sign_claims, AppClaims},
    types::{AccessTokenResponse, ApiError, GithubAppError, TokenPermissions},
};
