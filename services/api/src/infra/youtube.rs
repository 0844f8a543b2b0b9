use reqwest::Url;
use serde::Deserialize;

use crate::domain::repository::VideoSearchPort;
use crate::domain::types::{VideoDetails, VideoHit};
use crate::error::ApiError;

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Snippet {
    title: String,
    description: String,
    channel_title: String,
    published_at: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl Thumbnails {
    /// Largest available rendition.
    fn best(self) -> Option<String> {
        self.high.or(self.medium).or(self.default).map(|t| t.url)
    }
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    #[serde(default)]
    content_details: ContentDetails,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentDetails {
    duration: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Statistics {
    /// Sent as a decimal string.
    view_count: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct YouTubeClient {
    pub http: reqwest::Client,
    /// Data API root, e.g. `https://www.googleapis.com/youtube/v3`.
    pub base_url: String,
    pub api_key: String,
}

impl YouTubeClient {
    fn endpoint(&self, resource: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let raw = format!("{}/{resource}", self.base_url.trim_end_matches('/'));
        let params = params.iter().copied().chain([("key", self.api_key.as_str())]);
        Url::parse_with_params(&raw, params)
            .map_err(|e| anyhow::anyhow!("invalid YouTube API url {raw}: {e}").into())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::UpstreamUnavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "YouTube API returned an error");
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        resp.json()
            .await
            .map_err(|e| ApiError::UpstreamUnavailable(format!("unreadable YouTube response: {e}")))
    }
}

impl VideoSearchPort for YouTubeClient {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<VideoHit>, ApiError> {
        let max_results = max_results.to_string();
        let url = self.endpoint(
            "search",
            &[
                ("part", "snippet"),
                ("type", "video"),
                ("q", query),
                ("maxResults", &max_results),
            ],
        )?;
        let resp: SearchResponse = self.get_json(url).await?;

        // Channel and playlist hits carry no videoId.
        let hits = resp
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                let snippet = item.snippet;
                Some(VideoHit {
                    video_id,
                    title: snippet.title,
                    description: snippet.description,
                    channel_name: snippet.channel_title,
                    published_at: snippet.published_at,
                    thumbnail_url: snippet.thumbnails.best(),
                })
            })
            .collect();
        Ok(hits)
    }

    async fn details(&self, video_ids: &[String]) -> Result<Vec<VideoDetails>, ApiError> {
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids = video_ids.join(",");
        let url = self.endpoint(
            "videos",
            &[("part", "contentDetails,statistics"), ("id", &ids)],
        )?;
        let resp: VideosResponse = self.get_json(url).await?;

        Ok(resp
            .items
            .into_iter()
            .map(|item| VideoDetails {
                video_id: item.id,
                duration: item.content_details.duration,
                view_count: item
                    .statistics
                    .view_count
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0),
            })
            .collect())
    }
}
