use std::collections::HashMap;

use crate::domain::duration::{UNKNOWN_DURATION, format_duration};
use crate::domain::repository::VideoSearchPort;
use crate::domain::types::{VideoDetails, VideoSummary};
use crate::error::ApiError;

pub const DEFAULT_MAX_RESULTS: u32 = 10;
/// Largest page the search API serves.
pub const MAX_RESULTS_LIMIT: u32 = 50;

// ── SearchVideos ─────────────────────────────────────────────────────────────

pub struct SearchVideosUseCase<Y: VideoSearchPort> {
    pub videos: Y,
}

impl<Y: VideoSearchPort> SearchVideosUseCase<Y> {
    /// Search, then batch-fetch details for the hits and join them by video id.
    /// Result order follows the search response.
    pub async fn execute(
        &self,
        query: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<Vec<VideoSummary>, ApiError> {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or(ApiError::MissingQuery)?;
        let max_results = max_results
            .unwrap_or(DEFAULT_MAX_RESULTS)
            .clamp(1, MAX_RESULTS_LIMIT);

        let hits = self.videos.search(query, max_results).await?;
        if hits.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = hits.iter().map(|hit| hit.video_id.clone()).collect();
        let details: HashMap<String, VideoDetails> = self
            .videos
            .details(&ids)
            .await?
            .into_iter()
            .map(|d| (d.video_id.clone(), d))
            .collect();

        let summaries = hits
            .into_iter()
            .map(|hit| {
                let (duration, view_count) = match details.get(&hit.video_id) {
                    Some(d) => (format_duration(&d.duration), d.view_count),
                    None => (UNKNOWN_DURATION.to_owned(), 0),
                };
                VideoSummary {
                    url: watch_url(&hit.video_id),
                    video_id: hit.video_id,
                    title: hit.title,
                    description: hit.description,
                    channel_name: hit.channel_name,
                    published_at: hit.published_at,
                    thumbnail_url: hit.thumbnail_url,
                    duration,
                    view_count,
                }
            })
            .collect();
        Ok(summaries)
    }
}

fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}
