use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use touchline_auth_types::session::Session;
use touchline_domain::role::Permission;

use crate::domain::types::VideoSummary;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::youtube::SearchVideosUseCase;

// ── GET /api/youtube/search ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub q: Option<String>,
    /// Kept as text so a malformed value falls back to the default instead of
    /// rejecting the request.
    pub max_results: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub channel_name: String,
    pub published_at: String,
    pub thumbnail_url: Option<String>,
    pub duration: String,
    pub view_count: u64,
    pub url: String,
}

impl From<VideoSummary> for VideoResponse {
    fn from(v: VideoSummary) -> Self {
        Self {
            video_id: v.video_id,
            title: v.title,
            description: v.description,
            channel_name: v.channel_name,
            published_at: v.published_at,
            thumbnail_url: v.thumbnail_url,
            duration: v.duration,
            view_count: v.view_count,
            url: v.url,
        }
    }
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub videos: Vec<VideoResponse>,
}

pub async fn search_videos(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    session.require(Permission::ViewMedia)?;

    let max_results = query
        .max_results
        .as_deref()
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map(|n| n.clamp(0, i64::from(u32::MAX)) as u32);

    let usecase = SearchVideosUseCase {
        videos: state.youtube(),
    };
    let videos = usecase.execute(query.q.as_deref(), max_results).await?;

    Ok(Json(SearchResponse {
        videos: videos.into_iter().map(VideoResponse::from).collect(),
    }))
}
