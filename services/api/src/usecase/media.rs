use chrono::Utc;
use uuid::Uuid;

use touchline_domain::id::{MediaAssetId, TeamId};
use touchline_domain::media::{MimeCategory, SourceCategory, StorageBackend};

use crate::domain::repository::{BlobStore, MediaAssetRepository, ObjectStore};
use crate::domain::types::{MediaAsset, UploadFile, normalize_tags, sanitize_file_name};
use crate::error::ApiError;

// ── UploadMedia ──────────────────────────────────────────────────────────────

/// Raw upload form. Fields stay optional so validation order is decided here.
#[derive(Debug, Default)]
pub struct UploadMediaInput {
    pub file: Option<UploadFile>,
    pub team_id: Option<String>,
    pub source: Option<String>,
    pub description: Option<String>,
    /// JSON-encoded array of strings.
    pub tags: Option<String>,
    pub uploaded_by: Uuid,
}

/// Routes a file to exactly one storage backend and records the asset.
pub struct UploadMediaUseCase<B: BlobStore, O: ObjectStore, R: MediaAssetRepository> {
    pub blobs: B,
    pub objects: O,
    pub assets: R,
    pub bucket: String,
}

impl<B, O, R> UploadMediaUseCase<B, O, R>
where
    B: BlobStore,
    O: ObjectStore,
    R: MediaAssetRepository,
{
    pub async fn execute(&self, input: UploadMediaInput) -> Result<MediaAsset, ApiError> {
        let file = input
            .file
            .filter(|f| !f.is_empty())
            .ok_or(ApiError::MissingFile)?;

        let team_id = non_blank(input.team_id);
        let source = non_blank(input.source);
        let mut missing = Vec::new();
        if team_id.is_none() {
            missing.push("teamId");
        }
        if source.is_none() {
            missing.push("source");
        }
        let (Some(team_id), Some(source)) = (team_id, source) else {
            return Err(ApiError::MissingFields(missing));
        };

        let team_id: TeamId = team_id
            .parse()
            .map_err(|_| ApiError::InvalidField("teamId"))?;
        let source: SourceCategory = source
            .parse()
            .map_err(|_| ApiError::InvalidField("source"))?;
        let tags = parse_tags(input.tags.as_deref())?;

        let mime_category = MimeCategory::from_content_type(&file.content_type);
        let backend = mime_category.backend();
        let stamped_name = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_file_name(&file.file_name)
        );

        let team_segment = team_id.path_segment();
        let stored = match backend {
            StorageBackend::Blob => {
                let pathname = format!("teams/{team_segment}/{source}/{stamped_name}");
                self.blobs.put(&pathname, &file).await?
            }
            StorageBackend::Object => {
                let path = format!("{team_segment}/{mime_category}/{stamped_name}");
                self.objects.upload(&self.bucket, &path, &file, false).await?
            }
        };

        let asset = MediaAsset {
            id: MediaAssetId::generate(),
            team_id,
            source,
            mime_category,
            content_type: file.content_type,
            file_name: file.file_name,
            tags,
            description: input.description.unwrap_or_default().trim().to_owned(),
            backend,
            storage_url: stored.url,
            storage_path: stored.path,
            uploaded_by: input.uploaded_by,
            uploaded_at: Utc::now(),
        };
        self.assets.create(&asset).await?;

        tracing::info!(
            asset_id = %asset.id,
            team_id = %asset.team_id,
            backend = %backend,
            path = %asset.storage_path,
            "media uploaded"
        );
        Ok(asset)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_tags(raw: Option<&str>) -> Result<Vec<String>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(raw) => serde_json::from_str::<Vec<String>>(raw)
            .map(normalize_tags)
            .map_err(|_| ApiError::InvalidField("tags")),
    }
}
