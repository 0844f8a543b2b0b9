use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON body every Touchline error response carries.
///
/// `kind` is a stable SCREAMING_CASE code, `error` the human-readable message.
/// Upstream failures also attach the upstream `status` and raw `details`.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub kind: &'a str,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<'a> ErrorBody<'a> {
    pub fn new(kind: &'a str, error: impl Into<String>) -> Self {
        Self {
            kind,
            error: error.into(),
            status: None,
            details: None,
        }
    }

    pub fn with_upstream(mut self, status: u16, details: impl Into<String>) -> Self {
        self.status = Some(status);
        self.details = Some(details.into());
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        // TraceLayer already records method/uri/status; only server faults are logged here.
        if status.is_server_error() {
            tracing::error!(kind = self.kind, error = %self.error, "request failed");
        }
        (status, Json(self)).into_response()
    }
}

/// Shorthand for `ErrorBody::new(kind, message).into_response_with(status)`.
pub fn error_response(status: StatusCode, kind: &str, message: impl Into<String>) -> Response {
    ErrorBody::new(kind, message).into_response_with(status)
}
