use std::sync::{Arc, Mutex};

use axum::Router;
use axum_test::TestServer;
use bytes::Bytes;
use sea_orm::DatabaseConnection;

use touchline_api::config::ApiConfig;
use touchline_api::domain::repository::{
    BlobStore, MediaAssetRepository, ObjectStore, ProfilePhotoRepository,
};
use touchline_api::domain::types::{MediaAsset, ProfilePhoto, StoredObject, UploadFile};
use touchline_api::error::ApiError;
use touchline_api::router::build_router;
use touchline_api::state::AppState;
use touchline_testing::auth::TEST_JWT_SECRET;

// ── App state ────────────────────────────────────────────────────────────────

/// Config pointing every upstream at `upstream_url`. Use a closed port when the
/// test must not reach any backend.
pub fn test_config(upstream_url: &str) -> ApiConfig {
    ApiConfig {
        database_url: "postgres://unused".to_owned(),
        api_port: 0,
        supabase_url: upstream_url.to_owned(),
        supabase_service_role_key: "service-role-key".to_owned(),
        supabase_jwt_secret: TEST_JWT_SECRET.to_owned(),
        media_bucket: "media".to_owned(),
        profile_bucket: "profile-photos".to_owned(),
        blob_api_url: format!("{upstream_url}/blob"),
        blob_read_write_token: "blob-token".to_owned(),
        youtube_api_url: format!("{upstream_url}/youtube/v3"),
        youtube_api_key: "yt-key".to_owned(),
        max_upload_bytes: 1024 * 1024,
    }
}

/// State with a disconnected database. Routes that reach the database fail
/// with 500, so router tests stick to paths that stop before persistence.
pub fn test_state(upstream_url: &str) -> AppState {
    AppState::new(
        DatabaseConnection::default(),
        reqwest::Client::new(),
        test_config(upstream_url),
    )
}

pub fn test_server(upstream_url: &str) -> TestServer {
    TestServer::new(build_router(test_state(upstream_url))).unwrap()
}

/// Nothing listens here; any upstream call fails fast.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Fake upstream that records every request path and answers 500.
pub fn tripwire_router(hits: Arc<Mutex<Vec<String>>>) -> Router {
    Router::new().fallback(move |uri: axum::http::Uri| {
        let hits = Arc::clone(&hits);
        async move {
            hits.lock().unwrap().push(uri.path().to_owned());
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        }
    })
}

pub fn upload_file(name: &str, content_type: &str, size: usize) -> UploadFile {
    UploadFile {
        file_name: name.to_owned(),
        content_type: content_type.to_owned(),
        bytes: Bytes::from(vec![7u8; size]),
    }
}

// ── Recording ports ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct MockBlobStore {
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl BlobStore for MockBlobStore {
    async fn put(&self, pathname: &str, _file: &UploadFile) -> Result<StoredObject, ApiError> {
        self.calls.lock().unwrap().push(pathname.to_owned());
        Ok(StoredObject {
            url: format!("https://blob.example/{pathname}"),
            path: pathname.to_owned(),
        })
    }
}

#[derive(Default, Clone)]
pub struct MockObjectStore {
    /// `(bucket, path, upsert)` per call.
    pub calls: Arc<Mutex<Vec<(String, String, bool)>>>,
}

impl ObjectStore for MockObjectStore {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        _file: &UploadFile,
        upsert: bool,
    ) -> Result<StoredObject, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((bucket.to_owned(), path.to_owned(), upsert));
        Ok(StoredObject {
            url: format!("https://objects.example/{bucket}/{path}"),
            path: path.to_owned(),
        })
    }
}

#[derive(Default, Clone)]
pub struct MockMediaAssetRepo {
    pub created: Arc<Mutex<Vec<MediaAsset>>>,
}

impl MediaAssetRepository for MockMediaAssetRepo {
    async fn create(&self, asset: &MediaAsset) -> Result<(), ApiError> {
        self.created.lock().unwrap().push(asset.clone());
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct MockProfilePhotoRepo {
    pub rows: Arc<Mutex<Vec<ProfilePhoto>>>,
}

impl ProfilePhotoRepository for MockProfilePhotoRepo {
    async fn upsert(&self, photo: &ProfilePhoto) -> Result<(), ApiError> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|p| p.player_id != photo.player_id);
        rows.push(photo.clone());
        Ok(())
    }
}
