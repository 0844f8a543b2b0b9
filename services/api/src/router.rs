use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use touchline_core::health::healthz;
use touchline_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    health::readyz,
    media::{list_media, upload_media},
    profile::upload_profile_photo,
    session::{get_role_permissions, get_session},
    team::seed_u17wc,
    youtube::search_videos,
};
use crate::state::AppState;

/// Body limit for profile photos. Above the 5 MiB photo cap so oversize photos
/// are rejected with a field-level message instead of a bare 413.
const PROFILE_BODY_LIMIT: usize = 16 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let media_body_limit = state.config.max_upload_bytes;

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Session / roles
        .route("/api/session", get(get_session))
        .route("/api/roles/{role}/permissions", get(get_role_permissions))
        // Media
        .route(
            "/api/media/upload",
            get(list_media)
                .post(upload_media)
                .layer(DefaultBodyLimit::max(media_body_limit)),
        )
        // Profile
        .route(
            "/api/profile/upload",
            post(upload_profile_photo).layer(DefaultBodyLimit::max(PROFILE_BODY_LIMIT)),
        )
        // Team
        .route("/api/team/seed-u17wc", get(seed_u17wc))
        // YouTube
        .route("/api/youtube/search", get(search_videos))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
