use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
    response::IntoResponse,
};
use serde::Serialize;

use touchline_auth_types::session::Session;

use crate::error::ApiError;
use crate::handlers::form::UploadForm;
use crate::state::AppState;
use crate::usecase::profile::{UploadProfilePhotoInput, UploadProfilePhotoUseCase};

// ── POST /api/profile/upload ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UploadProfilePhotoResponse {
    pub success: bool,
    pub url: String,
    pub path: String,
}

pub async fn upload_profile_photo(
    State(state): State<AppState>,
    session: Session,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut form = UploadForm::read(multipart?).await?;

    let usecase = UploadProfilePhotoUseCase {
        objects: state.object_store(),
        photos: state.profile_photo_repo(),
        bucket: state.config.profile_bucket.clone(),
    };
    let photo = usecase
        .execute(
            &session,
            UploadProfilePhotoInput {
                player_id: form.take("playerId"),
                player_type: form.take("playerType"),
                file: form.file,
            },
        )
        .await?;

    Ok(Json(UploadProfilePhotoResponse {
        success: true,
        url: photo.public_url,
        path: photo.storage_path,
    }))
}
