//! Per-request caller identity.
//!
//! The session is rebuilt from the bearer token on every request and passed to
//! handlers as an extractor. Nothing cached on the client is trusted.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use touchline_core::error::error_response;
use touchline_domain::role::{Permission, Role};

use crate::token::{AuthError, TokenInfo, validate_access_token};

/// HS256 secret used to verify access tokens. Provide it from the service state
/// via `FromRef`.
#[derive(Clone)]
pub struct SessionSecret(pub Arc<str>);

impl SessionSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }
}

/// Authenticated caller. Permissions are derived from `role` alone.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub role: Role,
    pub email: Option<String>,
    pub expires_at: u64,
}

/// Returned by [`Session::require`] when the role lacks a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("role {role} lacks permission {permission:?}")]
pub struct MissingPermission {
    pub role: Role,
    pub permission: Permission,
}

impl Session {
    pub fn permissions(&self) -> &'static [Permission] {
        self.role.permissions()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.role.has_permission(permission)
    }

    pub fn is_role(&self, candidate: Role) -> bool {
        self.role.is_role(candidate)
    }

    pub fn require(&self, permission: Permission) -> Result<(), MissingPermission> {
        if self.has_permission(permission) {
            Ok(())
        } else {
            Err(MissingPermission {
                role: self.role,
                permission,
            })
        }
    }
}

impl From<TokenInfo> for Session {
    fn from(info: TokenInfo) -> Self {
        Self {
            user_id: info.user_id,
            role: info.role,
            email: info.email,
            expires_at: info.expires_at,
        }
    }
}

/// Why a request carried no usable session. Always answered with 401.
#[derive(Debug, thiserror::Error)]
pub enum SessionRejection {
    #[error("missing bearer token")]
    MissingToken,
    #[error(transparent)]
    InvalidToken(#[from] AuthError),
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        error_response(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", self.to_string())
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    SessionSecret: FromRef<S>,
{
    type Rejection = SessionRejection;

    // axum-core 0.5 declares `fn -> impl Future + Send`; validate synchronously and
    // hand back a 'static future so no borrow of `parts` is captured.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = SessionSecret::from_ref(state);
        let result = match parts.headers.typed_get::<Authorization<Bearer>>() {
            None => Err(SessionRejection::MissingToken),
            Some(Authorization(bearer)) => validate_access_token(bearer.token(), &secret.0)
                .map(Session::from)
                .map_err(SessionRejection::from),
        };
        async move { result }
    }
}
