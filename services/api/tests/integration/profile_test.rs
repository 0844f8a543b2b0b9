use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use uuid::Uuid;

use touchline_api::domain::types::MAX_PROFILE_PHOTO_BYTES;
use touchline_api::error::ApiError;
use touchline_api::usecase::profile::{UploadProfilePhotoInput, UploadProfilePhotoUseCase};
use touchline_auth_types::session::Session;
use touchline_domain::id::PlayerId;
use touchline_domain::role::Role;
use touchline_testing::auth::MockAuth;

use crate::helpers::{MockObjectStore, MockProfilePhotoRepo, UNREACHABLE, test_server, upload_file};

fn usecase() -> UploadProfilePhotoUseCase<MockObjectStore, MockProfilePhotoRepo> {
    UploadProfilePhotoUseCase {
        objects: MockObjectStore::default(),
        photos: MockProfilePhotoRepo::default(),
        bucket: "profile-photos".to_owned(),
    }
}

fn player(role: Role) -> Session {
    Session {
        user_id: Uuid::new_v4(),
        role,
        email: Some("keeper@example.com".to_owned()),
        expires_at: u64::MAX,
    }
}

fn own_photo(actor: &Session, content_type: &str, size: usize) -> UploadProfilePhotoInput {
    UploadProfilePhotoInput {
        file: Some(upload_file("portrait.png", content_type, size)),
        player_id: Some(actor.user_id.to_string()),
        player_type: Some("professional".to_owned()),
    }
}

// ── UploadProfilePhotoUseCase ────────────────────────────────────────────────

#[tokio::test]
async fn should_keep_one_row_per_player_across_uploads() {
    let uc = usecase();
    let actor = player(Role::Player);

    let first = uc
        .execute(&actor, own_photo(&actor, "image/png", 128))
        .await
        .unwrap();
    let second = uc
        .execute(&actor, own_photo(&actor, "image/png", 256))
        .await
        .unwrap();

    let rows = uc.photos.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player_id, PlayerId(actor.user_id));
    assert_eq!(rows[0].storage_path, second.storage_path);
    assert!(first.storage_path.starts_with("professional/"));

    let calls = uc.objects.calls.lock().unwrap();
    assert!(calls.iter().all(|(bucket, _, upsert)| bucket == "profile-photos" && *upsert));
}

#[tokio::test]
async fn should_reject_oversize_file_regardless_of_type() {
    let actor = player(Role::Player);
    for content_type in ["image/png", "application/pdf"] {
        let uc = usecase();
        let result = uc
            .execute(&actor, own_photo(&actor, content_type, MAX_PROFILE_PHOTO_BYTES + 1))
            .await;
        assert!(
            matches!(result, Err(ApiError::FileTooLarge | ApiError::InvalidFileType)),
            "{content_type}: {result:?}"
        );
        assert!(uc.objects.calls.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn should_let_admin_replace_any_photo() {
    let uc = usecase();
    let admin = player(Role::Admin);
    let target = Uuid::new_v4();
    let photo = uc
        .execute(
            &admin,
            UploadProfilePhotoInput {
                file: Some(upload_file("p.jpg", "image/jpeg", 64)),
                player_id: Some(target.to_string()),
                player_type: Some("amateur".to_owned()),
            },
        )
        .await
        .unwrap();
    assert_eq!(photo.player_id, PlayerId(target));
    assert!(photo.public_url.starts_with("https://objects.example/profile-photos/amateur/"));
}

#[tokio::test]
async fn should_forbid_media_officer_uploading_for_player() {
    let uc = usecase();
    let officer = player(Role::Media);
    let result = uc
        .execute(
            &officer,
            UploadProfilePhotoInput {
                file: Some(upload_file("p.jpg", "image/jpeg", 64)),
                player_id: Some(Uuid::new_v4().to_string()),
                player_type: Some("amateur".to_owned()),
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::Forbidden(_))));
}

// ── POST /api/profile/upload ─────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_non_image_over_http() {
    let server = test_server(UNREACHABLE);
    let auth = MockAuth::with_role(Role::Player);
    let (name, value) = auth.header();

    let multipart = MultipartForm::new()
        .add_text("playerId", auth.user_id.to_string())
        .add_text("playerType", "amateur")
        .add_part(
            "file",
            Part::bytes(b"%PDF-1.7".to_vec())
                .file_name("cv.pdf")
                .mime_type("application/pdf"),
        );
    let resp = server
        .post("/api/profile/upload")
        .add_header(name, value)
        .multipart(multipart)
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["kind"], "INVALID_FILE_TYPE");
    assert_eq!(body["error"], "file must be an image");
}

#[tokio::test]
async fn should_reject_photo_over_5mb_over_http() {
    let server = test_server(UNREACHABLE);
    let auth = MockAuth::with_role(Role::Player);
    let (name, value) = auth.header();

    let multipart = MultipartForm::new()
        .add_text("playerId", auth.user_id.to_string())
        .add_text("playerType", "amateur")
        .add_part(
            "file",
            Part::bytes(vec![0u8; MAX_PROFILE_PHOTO_BYTES + 1])
                .file_name("huge.png")
                .mime_type("image/png"),
        );
    let resp = server
        .post("/api/profile/upload")
        .add_header(name, value)
        .multipart(multipart)
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["kind"], "FILE_TOO_LARGE");
    assert_eq!(body["error"], "file must be 5MB or smaller");
}

#[tokio::test]
async fn should_name_missing_player_type_over_http() {
    let server = test_server(UNREACHABLE);
    let auth = MockAuth::with_role(Role::Player);
    let (name, value) = auth.header();

    let multipart = MultipartForm::new()
        .add_text("playerId", auth.user_id.to_string())
        .add_part(
            "file",
            Part::bytes(vec![1u8; 32])
                .file_name("me.png")
                .mime_type("image/png"),
        );
    let resp = server
        .post("/api/profile/upload")
        .add_header(name, value)
        .multipart(multipart)
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["error"], "missing required fields: playerType");
}
