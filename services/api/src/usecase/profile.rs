use chrono::Utc;

use touchline_auth_types::session::Session;
use touchline_domain::id::PlayerId;
use touchline_domain::player::PlayerType;
use touchline_domain::role::Permission;

use crate::domain::repository::{ObjectStore, ProfilePhotoRepository};
use crate::domain::types::{MAX_PROFILE_PHOTO_BYTES, ProfilePhoto, UploadFile};
use crate::error::ApiError;

// ── UploadProfilePhoto ───────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct UploadProfilePhotoInput {
    pub file: Option<UploadFile>,
    pub player_id: Option<String>,
    pub player_type: Option<String>,
}

pub struct UploadProfilePhotoUseCase<O: ObjectStore, R: ProfilePhotoRepository> {
    pub objects: O,
    pub photos: R,
    pub bucket: String,
}

impl<O: ObjectStore, R: ProfilePhotoRepository> UploadProfilePhotoUseCase<O, R> {
    pub async fn execute(
        &self,
        actor: &Session,
        input: UploadProfilePhotoInput,
    ) -> Result<ProfilePhoto, ApiError> {
        let file = input
            .file
            .filter(|f| !f.is_empty())
            .ok_or(ApiError::MissingFile)?;

        let player_id = input.player_id.filter(|v| !v.trim().is_empty());
        let player_type = input.player_type.filter(|v| !v.trim().is_empty());
        let mut missing = Vec::new();
        if player_id.is_none() {
            missing.push("playerId");
        }
        if player_type.is_none() {
            missing.push("playerType");
        }
        let (Some(player_id), Some(player_type)) = (player_id, player_type) else {
            return Err(ApiError::MissingFields(missing));
        };

        let player_id: PlayerId = player_id
            .parse()
            .map_err(|_| ApiError::InvalidField("playerId"))?;
        let player_type: PlayerType = player_type
            .parse()
            .map_err(|_| ApiError::InvalidField("playerType"))?;

        // Players manage their own photo; roster managers may set anyone's.
        if player_id.0 != actor.user_id {
            actor.require(Permission::ManageRoster)?;
        }

        if !file.content_type.trim().to_ascii_lowercase().starts_with("image/") {
            return Err(ApiError::InvalidFileType);
        }
        if file.size() > MAX_PROFILE_PHOTO_BYTES {
            return Err(ApiError::FileTooLarge);
        }

        let path = format!(
            "{player_type}/{player_id}-{}.{}",
            Utc::now().timestamp_millis(),
            photo_extension(&file)
        );
        let stored = self.objects.upload(&self.bucket, &path, &file, true).await?;

        let photo = ProfilePhoto {
            player_id,
            player_type,
            storage_path: stored.path,
            public_url: stored.url,
            updated_at: Utc::now(),
        };
        self.photos.upsert(&photo).await?;

        tracing::info!(player_id = %photo.player_id, path = %photo.storage_path, "profile photo updated");
        Ok(photo)
    }
}

/// Image file extensions a name may contribute when the subtype alone says nothing.
const IMAGE_EXTENSIONS: [&str; 10] = [
    "jpg", "jpeg", "png", "gif", "webp", "avif", "heic", "heif", "bmp", "svg",
];

/// Extension from the validated image subtype; a file-name extension is only
/// used when the subtype is unusable and the name looks like an image.
fn photo_extension(file: &UploadFile) -> String {
    let subtype = file
        .content_type
        .split(';')
        .next()
        .and_then(|essence| essence.trim().split_once('/'))
        .map(|(_, subtype)| subtype.to_ascii_lowercase());
    match subtype.as_deref() {
        Some("jpeg") | Some("pjpeg") => return "jpg".to_owned(),
        Some("svg+xml") => return "svg".to_owned(),
        Some(other) if is_plain_extension(other) => return other.to_owned(),
        _ => {}
    }

    file.file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or_else(|| "jpg".to_owned())
}

fn is_plain_extension(ext: &str) -> bool {
    (1..=5).contains(&ext.len()) && ext.chars().all(|c| c.is_ascii_alphanumeric())
}
