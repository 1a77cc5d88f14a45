/// GitHub API integration module
///
/// This module implements the GitHub App authentication flow: JWT assertion
/// signing and the installation access-token exchange.
///
/// ## Token Flow
///
/// 1. The App's identifier and RSA private key come from configuration
/// 2. A short-lived JWT is signed with the private key (RS256), claiming the
///    App as issuer with a 60-second validity window
/// 3. The JWT is sent as a bearer credential to the installation
///    access-tokens endpoint
/// 4. GitHub responds with an installation-scoped token used for API access
pub mod client;
pub mod jwt;
pub mod types;

pub use client::GithubClient;
pub use jwt::{create_app_jwt, sign_claims, AppClaims};
pub use types::{AccessTokenResponse, ApiError, GithubAppError, TokenPermissions};
