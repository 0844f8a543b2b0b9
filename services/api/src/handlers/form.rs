use std::collections::HashMap;

use axum::extract::Multipart;

use crate::domain::types::{DEFAULT_CONTENT_TYPE, UploadFile};
use crate::error::ApiError;

/// Multipart form split into its `file` part and plain text fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadFile>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    /// Drain the multipart stream. The first part named `file` wins; repeated
    /// text fields keep their last value.
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            if name == "file" {
                if form.file.is_some() {
                    continue;
                }
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let content_type = field
                    .content_type()
                    .filter(|ct| !ct.trim().is_empty())
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_owned();
                let bytes = field.bytes().await?;
                form.file = Some(UploadFile {
                    file_name,
                    content_type,
                    bytes,
                });
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }
        Ok(form)
    }

    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }
}
