use axum::{
    Json,
    extract::{Multipart, RawQuery, State, multipart::MultipartRejection},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use touchline_auth_types::session::Session;
use touchline_domain::id::MediaAssetId;
use touchline_domain::media::{MimeCategory, StorageBackend};
use touchline_domain::role::Permission;

use crate::domain::types::MediaAsset;
use crate::error::ApiError;
use crate::handlers::form::UploadForm;
use crate::state::AppState;
use crate::usecase::media::{UploadMediaInput, UploadMediaUseCase};

// ── POST /api/media/upload ───────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMediaResponse {
    pub id: MediaAssetId,
    pub url: String,
    pub path: String,
    pub backend: StorageBackend,
    #[serde(rename = "type")]
    pub mime_category: MimeCategory,
    #[serde(serialize_with = "touchline_core::serde::to_rfc3339_ms")]
    pub uploaded_at: DateTime<Utc>,
}

impl From<MediaAsset> for UploadMediaResponse {
    fn from(asset: MediaAsset) -> Self {
        Self {
            id: asset.id,
            url: asset.storage_url,
            path: asset.storage_path,
            backend: asset.backend,
            mime_category: asset.mime_category,
            uploaded_at: asset.uploaded_at,
        }
    }
}

pub async fn upload_media(
    State(state): State<AppState>,
    session: Session,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    session.require(Permission::UploadMedia)?;
    let mut form = UploadForm::read(multipart?).await?;

    let usecase = UploadMediaUseCase {
        blobs: state.blob_store(),
        objects: state.object_store(),
        assets: state.media_asset_repo(),
        bucket: state.config.media_bucket.clone(),
    };
    let asset = usecase
        .execute(UploadMediaInput {
            team_id: form.take("teamId"),
            source: form.take("source"),
            description: form.take("description"),
            tags: form.take("tags"),
            file: form.file,
            uploaded_by: session.user_id,
        })
        .await?;

    Ok(Json(UploadMediaResponse::from(asset)))
}

// ── GET /api/media/upload ────────────────────────────────────────────────────

/// Listing is not backed by storage yet; filters are accepted and ignored.
pub async fn list_media(RawQuery(query): RawQuery) -> impl IntoResponse {
    tracing::debug!(query = query.as_deref().unwrap_or(""), "media listing requested");
    Json(json!({ "media": [] }))
}
