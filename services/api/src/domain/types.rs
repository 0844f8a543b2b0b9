use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use touchline_domain::id::{MediaAssetId, PlayerId, TeamId};
use touchline_domain::media::{MimeCategory, SourceCategory, StorageBackend};
use touchline_domain::player::{PlayerType, Position};

/// Content type assumed when a multipart part declares none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Upper bound for profile photos: 5 MiB.
pub const MAX_PROFILE_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// A file received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Where a storage backend put a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub url: String,
    pub path: String,
}

/// Media library entry created after a successful upload.
#[derive(Debug, Clone)]
pub struct MediaAsset {
    pub id: MediaAssetId,
    pub team_id: TeamId,
    pub source: SourceCategory,
    pub mime_category: MimeCategory,
    pub content_type: String,
    pub file_name: String,
    pub tags: Vec<String>,
    pub description: String,
    pub backend: StorageBackend,
    pub storage_url: String,
    pub storage_path: String,
    pub uploaded_by: Uuid,
    pub uploaded_at: DateTime<Utc>,
}

/// Current profile photo of a player. Re-uploading replaces it.
#[derive(Debug, Clone)]
pub struct ProfilePhoto {
    pub player_id: PlayerId,
    pub player_type: PlayerType,
    pub storage_path: String,
    pub public_url: String,
    pub updated_at: DateTime<Utc>,
}

/// A row of a seeded squad list.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: Uuid,
    pub squad: String,
    pub full_name: String,
    pub position: Position,
    pub shirt_number: i16,
    pub club: String,
    pub birth_year: i16,
}

/// One result of the video search call, before details are joined in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoHit {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub channel_name: String,
    pub published_at: String,
    pub thumbnail_url: Option<String>,
}

/// Per-video details from the batch lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetails {
    pub video_id: String,
    /// ISO-8601 duration as sent upstream, e.g. `PT4M13S`.
    pub duration: String,
    pub view_count: u64,
}

/// Search hit joined with its details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSummary {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub channel_name: String,
    pub published_at: String,
    pub thumbnail_url: Option<String>,
    /// `H:MM:SS` or `M:SS`.
    pub duration: String,
    pub view_count: u64,
    pub url: String,
}

/// Trim, drop empty entries and remove duplicates while keeping first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_owned());
        }
    }
    out
}

/// Reduce a client-supplied file name to `[A-Za-z0-9._-]`, dropping any
/// directory part.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.');
    if cleaned.is_empty() {
        "upload".to_owned()
    } else {
        cleaned.to_owned()
    }
}
