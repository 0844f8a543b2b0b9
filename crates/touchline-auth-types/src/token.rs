//! Supabase access-token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "test-util", test))]
use serde::Serialize;
use uuid::Uuid;

use touchline_domain::role::Role;

/// Audience Supabase stamps on tokens issued to signed-in users.
pub const AUTHENTICATED_AUDIENCE: &str = "authenticated";

/// User identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub role: Role,
    pub email: Option<String>,
    pub expires_at: u64,
}

/// Errors returned by [`validate_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// Server-controlled metadata. Only the service role can write `app_metadata`,
/// so the portal role is read from here and never from `user_metadata`.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(any(feature = "test-util", test), derive(Serialize))]
pub struct AppMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

/// Subset of the Supabase JWT payload the services rely on.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `sub` | user id (UUID string) |
/// | `aud` | always `authenticated` for signed-in users |
/// | `exp` | expiration, seconds since UNIX epoch |
/// | `email` | optional |
/// | `app_metadata.role` | portal role, see [`Role`] |
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "test-util", test), derive(Serialize))]
pub struct SupabaseClaims {
    pub sub: String,
    pub aud: String,
    pub exp: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

fn decode_jwt(token: &str, secret: &str) -> Result<SupabaseClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_audience(&[AUTHENTICATED_AUDIENCE]);
    validation.set_required_spec_claims(&["exp", "sub", "aud"]);

    let data = decode::<SupabaseClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

/// Resolve the portal role. Absent or unrecognised roles fall back to
/// [`Role::Fan`], the least-privileged role.
fn resolve_role(metadata: &AppMetadata) -> Role {
    match metadata.role.as_deref() {
        None => Role::Fan,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::debug!(role = raw, "unrecognised role claim, treating as fan");
            Role::Fan
        }),
    }
}

/// Validate a bearer access token, returning the caller's identity.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let claims = decode_jwt(token, secret)?;
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;
    Ok(TokenInfo {
        user_id,
        role: resolve_role(&claims.app_metadata),
        email: claims.email,
        expires_at: claims.exp,
    })
}
