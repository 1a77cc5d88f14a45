use crate::github_api::types::GithubAppError;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Clock-skew allowance on either side of the current time, in seconds.
/// The assertion is valid for 60 seconds total, starting 30 seconds in the
/// past so a verifier with a slightly different clock still accepts it.
const CLOCK_SKEW_SECS: i64 = 30;

/// Claims carried by the App's JWT assertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppClaims {
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
    /// Issuer: the GitHub App identifier
    pub iss: String,
}

impl AppClaims {
    /// Build claims for the current wall-clock time
    pub fn new(app_id: impl Into<String>) -> Self {
        Self::at(Utc::now().timestamp(), app_id)
    }

    /// Build claims centered on `now`: issued 30s in the past, expiring 30s
    /// ahead
    pub fn at(now: i64, app_id: impl Into<String>) -> Self {
        Self {
            iat: now - CLOCK_SKEW_SECS,
            exp: now + CLOCK_SKEW_SECS,
            iss: app_id.into(),
        }
    }
}

/// Sign a JWT assertion for the given App with its RSA private key
///
/// The assertion proves control of the App's private key; it is not itself
/// an installation access token. It is consumed once by the token exchange
/// and discarded.
///
/// # Arguments
///
/// * `app_id` - The GitHub App identifier (becomes the `iss` claim)
/// * `private_key_pem` - The App's RSA private key, PEM-encoded
pub fn create_app_jwt(app_id: &str, private_key_pem: &str) -> Result<String, GithubAppError> {
    let claims = AppClaims::new(app_id);
    tracing::debug!(
        "Signing app JWT: iss={}, iat={}, exp={}",
        claims.iss,
        claims.iat,
        claims.exp
    );
    sign_claims(&claims, private_key_pem)
}

/// Sign an explicit claims object with an RSA private key (RS256)
pub fn sign_claims(claims: &AppClaims, private_key_pem: &str) -> Result<String, GithubAppError> {
    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
        .map_err(|e| GithubAppError::Jwt(format!("Failed to parse RSA private key: {}", e)))?;

    encode(&Header::new(Algorithm::RS256), claims, &key)
        .map_err(|e| GithubAppError::Jwt(format!("Failed to sign claims: {}", e)))
}
