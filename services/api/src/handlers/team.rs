use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use touchline_auth_types::session::Session;
use touchline_domain::role::Permission;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::roster::SeedRosterUseCase;

// ── GET /api/team/seed-u17wc ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SeedRosterResponse {
    pub success: bool,
    pub inserted: u64,
}

/// Destructive: wipes the candidates table before inserting the fixed squad.
pub async fn seed_u17wc(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, ApiError> {
    session.require(Permission::ManageRoster)?;

    let usecase = SeedRosterUseCase {
        candidates: state.candidate_repo(),
    };
    let inserted = usecase.execute().await?;

    Ok(Json(SeedRosterResponse {
        success: true,
        inserted,
    }))
}
