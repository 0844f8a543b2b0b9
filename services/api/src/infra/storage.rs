use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::domain::repository::{BlobStore, ObjectStore};
use crate::domain::types::{StoredObject, UploadFile};
use crate::error::ApiError;

/// Error payload shape shared by both storage APIs. Either field may be set.
#[derive(Debug, Default, Deserialize)]
struct StorageErrorBody {
    message: Option<String>,
    error: Option<ErrorField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Text(String),
    Object { message: Option<String> },
}

/// Human-readable reason for a failed storage call: the upstream `message`,
/// else its `error`, else the raw body, else the status line.
fn failure_reason(status: reqwest::StatusCode, body: &str) -> String {
    let parsed: StorageErrorBody = serde_json::from_str(body).unwrap_or_default();
    let from_error = match parsed.error {
        Some(ErrorField::Text(text)) => Some(text),
        Some(ErrorField::Object { message }) => message,
        None => None,
    };
    parsed
        .message
        .or(from_error)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| Some(body.trim().to_owned()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| status.to_string())
}

// ── Supabase Storage (object backend) ────────────────────────────────────────

#[derive(Clone)]
pub struct SupabaseStorage {
    pub http: reqwest::Client,
    /// Project URL without trailing slash, e.g. `https://abc.supabase.co`.
    pub base_url: String,
    pub service_key: String,
}

impl SupabaseStorage {
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{path}", self.base_url)
    }
}

impl ObjectStore for SupabaseStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        file: &UploadFile,
        upsert: bool,
    ) -> Result<StoredObject, ApiError> {
        let endpoint = format!("{}/storage/v1/object/{bucket}/{path}", self.base_url);
        let resp = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header(CONTENT_TYPE, &file.content_type)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(file.bytes.clone())
            .send()
            .await
            .map_err(|e| ApiError::UploadFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let reason = failure_reason(status, &body);
            tracing::warn!(%bucket, %path, status = status.as_u16(), %reason, "object upload rejected");
            return Err(ApiError::UploadFailed(reason));
        }

        Ok(StoredObject {
            url: self.public_url(bucket, path),
            path: path.to_owned(),
        })
    }
}

// ── Blob store (video backend) ───────────────────────────────────────────────

/// Blob API revision whose PUT response carries `{ url, pathname }`.
pub const BLOB_API_VERSION: &str = "7";

#[derive(Debug, Deserialize)]
struct PutBlobResponse {
    url: String,
    pathname: String,
}

#[derive(Clone)]
pub struct BlobClient {
    pub http: reqwest::Client,
    /// API root, e.g. `https://blob.vercel-storage.com`.
    pub base_url: String,
    pub token: String,
}

impl BlobStore for BlobClient {
    async fn put(&self, pathname: &str, file: &UploadFile) -> Result<StoredObject, ApiError> {
        let endpoint = format!("{}/{pathname}", self.base_url);
        let resp = self
            .http
            .put(&endpoint)
            .bearer_auth(&self.token)
            .header("x-api-version", BLOB_API_VERSION)
            .header("x-content-type", &file.content_type)
            .header("x-add-random-suffix", "0")
            .body(file.bytes.clone())
            .send()
            .await
            .map_err(|e| ApiError::UploadFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let reason = failure_reason(status, &body);
            tracing::warn!(%pathname, status = status.as_u16(), %reason, "blob upload rejected");
            return Err(ApiError::UploadFailed(reason));
        }

        let blob: PutBlobResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::UploadFailed(format!("unreadable blob response: {e}")))?;
        Ok(StoredObject {
            url: blob.url,
            path: blob.pathname,
        })
    }
}
