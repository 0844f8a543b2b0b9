use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use touchline_auth_types::session::MissingPermission;
use touchline_core::error::ErrorBody;

/// API service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no file provided")]
    MissingFile,
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid field: {0}")]
    InvalidField(&'static str),
    #[error("file must be an image")]
    InvalidFileType,
    #[error("file must be 5MB or smaller")]
    FileTooLarge,
    #[error("missing search query")]
    MissingQuery,
    #[error("malformed multipart body: {0}")]
    MalformedBody(String),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("unknown role")]
    UnknownRole,
    #[error("forbidden")]
    Forbidden(#[from] MissingPermission),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("upstream request failed")]
    Upstream { status: u16, body: String },
    #[error("upstream unavailable")]
    UpstreamUnavailable(String),
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFile => "MISSING_FILE",
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::InvalidFileType => "INVALID_FILE_TYPE",
            Self::FileTooLarge => "FILE_TOO_LARGE",
            Self::MissingQuery => "MISSING_QUERY",
            Self::MalformedBody(_) => "MALFORMED_BODY",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::UnknownRole => "UNKNOWN_ROLE",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::UploadFailed(_) => "UPLOAD_FAILED",
            Self::Upstream { .. } => "UPSTREAM",
            Self::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFile
            | Self::MissingFields(_)
            | Self::InvalidField(_)
            | Self::InvalidFileType
            | Self::FileTooLarge
            | Self::MissingQuery
            | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnknownRole => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::UploadFailed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::MalformedBody(err.body_text())
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(e) => tracing::error!(error = ?e, kind = "INTERNAL", "internal error"),
            Self::UpstreamUnavailable(reason) => {
                tracing::warn!(reason = %reason, "upstream unreachable")
            }
            Self::Forbidden(missing) => tracing::debug!(%missing, "permission denied"),
            _ => {}
        }
        let body = ErrorBody::new(self.kind(), self.to_string());
        let body = match self {
            Self::Upstream { status, body: details } => body.with_upstream(status, details),
            _ => body,
        };
        body.into_response_with(status)
    }
}
