use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use uuid::Uuid;

use touchline_api::error::ApiError;
use touchline_api::usecase::media::{UploadMediaInput, UploadMediaUseCase};
use touchline_domain::media::StorageBackend;
use touchline_domain::role::Role;
use touchline_testing::auth::MockAuth;
use touchline_testing::upstream::FakeUpstream;

use crate::helpers::{
    MockBlobStore, MockMediaAssetRepo, MockObjectStore, test_server, tripwire_router, upload_file,
};

fn usecase() -> UploadMediaUseCase<MockBlobStore, MockObjectStore, MockMediaAssetRepo> {
    UploadMediaUseCase {
        blobs: MockBlobStore::default(),
        objects: MockObjectStore::default(),
        assets: MockMediaAssetRepo::default(),
        bucket: "media".to_owned(),
    }
}

fn form(content_type: &str) -> UploadMediaInput {
    UploadMediaInput {
        file: Some(upload_file("clip", content_type, 16)),
        team_id: Some(Uuid::new_v4().to_string()),
        source: Some("match".to_owned()),
        uploaded_by: Uuid::new_v4(),
        ..Default::default()
    }
}

// ── UploadMediaUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_route_every_video_type_to_blob_and_nothing_else() {
    let cases = [
        ("video/mp4", StorageBackend::Blob),
        ("VIDEO/QuickTime", StorageBackend::Blob),
        ("video/webm; codecs=vp9", StorageBackend::Blob),
        ("image/png", StorageBackend::Object),
        ("audio/mpeg", StorageBackend::Object),
        ("application/pdf", StorageBackend::Object),
        ("application/octet-stream", StorageBackend::Object),
        ("text/video", StorageBackend::Object),
    ];
    for (content_type, expected) in cases {
        let uc = usecase();
        let asset = uc.execute(form(content_type)).await.unwrap();
        assert_eq!(asset.backend, expected, "{content_type}");

        let blob_calls = uc.blobs.calls.lock().unwrap().len();
        let object_calls = uc.objects.calls.lock().unwrap().len();
        assert_eq!(blob_calls + object_calls, 1, "exactly one backend for {content_type}");
    }
}

#[tokio::test]
async fn should_record_asset_with_backend_location() {
    let uc = usecase();
    let mut input = form("image/jpeg");
    input.tags = Some(r#"[" set pieces ", "", "corners"]"#.to_owned());
    let asset = uc.execute(input).await.unwrap();

    let created = uc.assets.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].id, asset.id);
    assert_eq!(created[0].tags, vec!["set pieces", "corners"]);
    assert!(created[0].storage_url.starts_with("https://objects.example/media/"));
    assert_eq!(created[0].description, "");
}

#[tokio::test]
async fn should_sanitize_file_name_in_storage_path() {
    let uc = usecase();
    let mut input = form("video/mp4");
    input.file = Some(upload_file("../Final Whistle (HD).mp4", "video/mp4", 4));
    let asset = uc.execute(input).await.unwrap();
    assert!(
        asset.storage_path.ends_with("-Final-Whistle--HD-.mp4"),
        "{}",
        asset.storage_path
    );
    assert!(!asset.storage_path.contains(".."));
}

#[tokio::test]
async fn should_reject_missing_source_without_backend_call() {
    let uc = usecase();
    let mut input = form("video/mp4");
    input.source = None;
    let result = uc.execute(input).await;

    match result {
        Err(ApiError::MissingFields(fields)) => assert_eq!(fields, vec!["source"]),
        other => panic!("expected MissingFields, got {other:?}"),
    }
    assert!(uc.blobs.calls.lock().unwrap().is_empty());
    assert!(uc.objects.calls.lock().unwrap().is_empty());
}

// ── POST /api/media/upload ───────────────────────────────────────────────────

#[tokio::test]
async fn should_return_field_message_and_skip_backends_over_http() {
    let hits = Arc::new(Mutex::new(Vec::new()));
    let upstream = FakeUpstream::spawn(tripwire_router(Arc::clone(&hits))).await;
    let server = test_server(&upstream.base_url);
    let (name, value) = MockAuth::with_role(Role::Media).header();

    let multipart = MultipartForm::new().add_text("source", "training").add_part(
        "file",
        Part::bytes(b"not really a video".to_vec())
            .file_name("drill.mp4")
            .mime_type("video/mp4"),
    );
    let resp = server
        .post("/api/media/upload")
        .add_header(name, value)
        .multipart(multipart)
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["kind"], "MISSING_FIELDS");
    assert_eq!(body["error"], "missing required fields: teamId");
    assert!(hits.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_request_without_file() {
    let server = test_server(crate::helpers::UNREACHABLE);
    let (name, value) = MockAuth::with_role(Role::Coach).header();

    let multipart = MultipartForm::new()
        .add_text("teamId", Uuid::new_v4().to_string())
        .add_text("source", "tactics");
    let resp = server
        .post("/api/media/upload")
        .add_header(name, value)
        .multipart(multipart)
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["kind"], "MISSING_FILE");
}

#[tokio::test]
async fn should_forbid_fans_from_uploading() {
    let server = test_server(crate::helpers::UNREACHABLE);
    let (name, value) = MockAuth::with_role(Role::Fan).header();

    let multipart = MultipartForm::new().add_text("teamId", Uuid::new_v4().to_string());
    let resp = server
        .post("/api/media/upload")
        .add_header(name, value)
        .multipart(multipart)
        .await;

    assert_eq!(resp.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn should_require_a_session_to_upload() {
    let server = test_server(crate::helpers::UNREACHABLE);
    let multipart = MultipartForm::new().add_text("teamId", Uuid::new_v4().to_string());
    let resp = server.post("/api/media/upload").multipart(multipart).await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_body_over_upload_limit() {
    let server = test_server(crate::helpers::UNREACHABLE);
    let (name, value) = MockAuth::with_role(Role::Media).header();

    // test_config caps media bodies at 1 MiB.
    let multipart = MultipartForm::new()
        .add_text("teamId", Uuid::new_v4().to_string())
        .add_text("source", "match")
        .add_part(
            "file",
            Part::bytes(vec![0u8; 2 * 1024 * 1024])
                .file_name("long.mp4")
                .mime_type("video/mp4"),
        );
    let resp = server
        .post("/api/media/upload")
        .add_header(name, value)
        .multipart(multipart)
        .await;

    assert_eq!(resp.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
}

// ── GET /api/media/upload ────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_empty_listing_regardless_of_filters() {
    let server = test_server(crate::helpers::UNREACHABLE);
    let resp = server
        .get("/api/media/upload")
        .add_query_param("teamId", "t1")
        .add_query_param("type", "video")
        .add_query_param("search", "corner")
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: serde_json::Value = resp.json();
    assert_eq!(body, serde_json::json!({ "media": [] }));
}
