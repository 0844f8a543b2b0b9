//! Media library classification: where an asset came from, what kind of file it
//! is, and which storage backend holds it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Library section an upload is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    Scouting,
    Training,
    Tactics,
    Match,
    Shared,
}

impl SourceCategory {
    pub const ALL: [SourceCategory; 5] = [
        SourceCategory::Scouting,
        SourceCategory::Training,
        SourceCategory::Tactics,
        SourceCategory::Match,
        SourceCategory::Shared,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scouting => "scouting",
            Self::Training => "training",
            Self::Tactics => "tactics",
            Self::Match => "match",
            Self::Shared => "shared",
        }
    }
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown source category: {0}")]
pub struct UnknownSource(pub String);

impl FromStr for SourceCategory {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceCategory::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSource(s.to_owned()))
    }
}

/// Coarse file type derived from the declared content-type prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MimeCategory {
    Video,
    Image,
    Audio,
    Document,
}

impl MimeCategory {
    /// Classify a declared content type. Matching is on the lower-cased prefix;
    /// anything that is not video, image or audio is a document.
    pub fn from_content_type(content_type: &str) -> Self {
        let content_type = content_type.trim().to_ascii_lowercase();
        if content_type.starts_with("video/") {
            Self::Video
        } else if content_type.starts_with("image/") {
            Self::Image
        } else if content_type.starts_with("audio/") {
            Self::Audio
        } else {
            Self::Document
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Document => "document",
        }
    }

    /// Storage backend that holds files of this category.
    pub fn backend(self) -> StorageBackend {
        match self {
            Self::Video => StorageBackend::Blob,
            Self::Image | Self::Audio | Self::Document => StorageBackend::Object,
        }
    }
}

impl fmt::Display for MimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two upload destinations: a blob store for video, object storage for
/// everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    Blob,
    Object,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
