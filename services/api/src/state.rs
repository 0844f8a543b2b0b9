use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use touchline_auth_types::session::SessionSecret;

use crate::config::ApiConfig;
use crate::infra::db::{DbCandidateRepository, DbMediaAssetRepository, DbProfilePhotoRepository};
use crate::infra::storage::{BlobClient, SupabaseStorage};
use crate::infra::youtube::YouTubeClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub http: reqwest::Client,
    pub session_secret: SessionSecret,
    pub config: Arc<ApiConfig>,
}

impl FromRef<AppState> for SessionSecret {
    fn from_ref(state: &AppState) -> Self {
        state.session_secret.clone()
    }
}

impl AppState {
    pub fn new(db: DatabaseConnection, http: reqwest::Client, config: ApiConfig) -> Self {
        Self {
            db,
            http,
            session_secret: SessionSecret::new(config.supabase_jwt_secret.as_str()),
            config: Arc::new(config),
        }
    }

    pub fn media_asset_repo(&self) -> DbMediaAssetRepository {
        DbMediaAssetRepository {
            db: self.db.clone(),
        }
    }

    pub fn profile_photo_repo(&self) -> DbProfilePhotoRepository {
        DbProfilePhotoRepository {
            db: self.db.clone(),
        }
    }

    pub fn candidate_repo(&self) -> DbCandidateRepository {
        DbCandidateRepository {
            db: self.db.clone(),
        }
    }

    pub fn object_store(&self) -> SupabaseStorage {
        SupabaseStorage {
            http: self.http.clone(),
            base_url: self.config.supabase_url.clone(),
            service_key: self.config.supabase_service_role_key.clone(),
        }
    }

    pub fn blob_store(&self) -> BlobClient {
        BlobClient {
            http: self.http.clone(),
            base_url: self.config.blob_api_url.clone(),
            token: self.config.blob_read_write_token.clone(),
        }
    }

    pub fn youtube(&self) -> YouTubeClient {
        YouTubeClient {
            http: self.http.clone(),
            base_url: self.config.youtube_api_url.clone(),
            api_key: self.config.youtube_api_key.clone(),
        }
    }
}
