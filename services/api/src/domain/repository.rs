#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Candidate, MediaAsset, ProfilePhoto, StoredObject, UploadFile, VideoDetails, VideoHit,
};
use crate::error::ApiError;

/// Repository for uploaded media assets.
pub trait MediaAssetRepository: Send + Sync {
    async fn create(&self, asset: &MediaAsset) -> Result<(), ApiError>;
}

/// Repository for player profile photos.
pub trait ProfilePhotoRepository: Send + Sync {
    /// Insert or replace the photo row for `photo.player_id`.
    async fn upsert(&self, photo: &ProfilePhoto) -> Result<(), ApiError>;
}

/// Repository for squad candidates.
pub trait CandidateRepository: Send + Sync {
    /// Delete every candidate and insert `candidates` in one transaction.
    /// Returns the number of rows inserted.
    async fn replace_all(&self, candidates: &[Candidate]) -> Result<u64, ApiError>;
}

/// Blob backend, used for video.
pub trait BlobStore: Send + Sync {
    async fn put(&self, pathname: &str, file: &UploadFile) -> Result<StoredObject, ApiError>;
}

/// Object-storage backend, used for images, audio and documents.
pub trait ObjectStore: Send + Sync {
    /// Store `file` at `bucket/path`. With `upsert` an existing object is
    /// overwritten; without it a conflict is an upload failure.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        file: &UploadFile,
        upsert: bool,
    ) -> Result<StoredObject, ApiError>;
}

/// Port for the external video search API.
pub trait VideoSearchPort: Send + Sync {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<VideoHit>, ApiError>;

    /// Batch lookup by id. Ids unknown upstream are simply absent from the result.
    async fn details(&self, video_ids: &[String]) -> Result<Vec<VideoDetails>, ApiError>;
}
