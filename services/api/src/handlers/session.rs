use axum::{Json, extract::Path, response::IntoResponse};
use serde::Serialize;
use uuid::Uuid;

use touchline_auth_types::session::Session;
use touchline_domain::role::{Permission, Role};

use crate::error::ApiError;

// ── GET /api/session ─────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_id: Uuid,
    pub role: Role,
    pub permissions: &'static [Permission],
}

pub async fn get_session(session: Session) -> impl IntoResponse {
    Json(SessionResponse {
        user_id: session.user_id,
        role: session.role,
        permissions: session.permissions(),
    })
}

// ── GET /api/roles/{role}/permissions ────────────────────────────────────────

#[derive(Serialize)]
pub struct RolePermissionsResponse {
    pub role: Role,
    pub permissions: &'static [Permission],
}

pub async fn get_role_permissions(
    Path(role): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let role: Role = role.parse().map_err(|_| ApiError::UnknownRole)?;
    Ok(Json(RolePermissionsResponse {
        role,
        permissions: role.permissions(),
    }))
}
