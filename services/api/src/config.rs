/// API service configuration loaded from environment variables.
/// Holds secrets; keep it out of `Debug` output.
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `API_PORT`.
    pub api_port: u16,
    /// Supabase project URL (e.g. "https://abc.supabase.co").
    pub supabase_url: String,
    /// Service-role key used against Supabase Storage.
    pub supabase_service_role_key: String,
    /// HS256 secret Supabase signs access tokens with.
    pub supabase_jwt_secret: String,
    /// Object-storage bucket for images, audio and documents (default "media").
    pub media_bucket: String,
    /// Bucket for player profile photos (default "profile-photos").
    pub profile_bucket: String,
    /// Blob API root for video uploads.
    pub blob_api_url: String,
    pub blob_read_write_token: String,
    /// YouTube Data API v3 root.
    pub youtube_api_url: String,
    pub youtube_api_key: String,
    /// Request body limit for `POST /api/media/upload` (default 500 MiB).
    pub max_upload_bytes: usize,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            supabase_url: trim_url(std::env::var("SUPABASE_URL").expect("SUPABASE_URL")),
            supabase_service_role_key: std::env::var("SUPABASE_SERVICE_ROLE_KEY")
                .expect("SUPABASE_SERVICE_ROLE_KEY"),
            supabase_jwt_secret: std::env::var("SUPABASE_JWT_SECRET")
                .expect("SUPABASE_JWT_SECRET"),
            media_bucket: std::env::var("MEDIA_BUCKET").unwrap_or_else(|_| "media".to_owned()),
            profile_bucket: std::env::var("PROFILE_BUCKET")
                .unwrap_or_else(|_| "profile-photos".to_owned()),
            blob_api_url: trim_url(
                std::env::var("BLOB_API_URL")
                    .unwrap_or_else(|_| "https://blob.vercel-storage.com".to_owned()),
            ),
            blob_read_write_token: std::env::var("BLOB_READ_WRITE_TOKEN")
                .expect("BLOB_READ_WRITE_TOKEN"),
            youtube_api_url: trim_url(
                std::env::var("YOUTUBE_API_URL")
                    .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3".to_owned()),
            ),
            youtube_api_key: std::env::var("YOUTUBE_API_KEY").expect("YOUTUBE_API_KEY"),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500 * 1024 * 1024),
        }
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_owned()
}
