use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use serde_json::{Value, json};

use touchline_domain::role::Role;
use touchline_testing::auth::MockAuth;

use crate::helpers::{UNREACHABLE, test_server};

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_liveness_with_request_id() {
    let server = test_server(UNREACHABLE);
    let resp = server.get("/healthz").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>(), json!({ "status": "ok" }));
    let request_id = resp.header(REQUEST_ID);
    assert!(request_id.to_str().unwrap().parse::<uuid::Uuid>().is_ok());
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let server = test_server(UNREACHABLE);
    let resp = server.get("/readyz").await;
    assert_eq!(resp.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

// ── Session ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_describe_caller_session() {
    let server = test_server(UNREACHABLE);
    let auth = MockAuth::with_role(Role::Player);
    let (name, value) = auth.header();

    let resp = server.get("/api/session").add_header(name, value).await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["userId"], auth.user_id.to_string());
    assert_eq!(body["role"], "player");
    assert_eq!(
        body["permissions"],
        json!([
            "view_dashboard",
            "view_media",
            "send_messages",
            "view_messages",
            "edit_profile",
            "view_analytics"
        ])
    );
}

#[tokio::test]
async fn should_reject_missing_bearer_token() {
    let server = test_server(UNREACHABLE);
    let resp = server.get("/api/session").await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_reject_garbage_bearer_token() {
    let server = test_server(UNREACHABLE);
    let resp = server
        .get("/api/session")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer not-a-jwt"),
        )
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

// ── Role permissions ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_permissions_for_every_role() {
    let server = test_server(UNREACHABLE);
    for role in Role::ALL {
        let resp = server
            .get(&format!("/api/roles/{}/permissions", role.as_str()))
            .await;
        assert_eq!(resp.status_code(), StatusCode::OK, "{role}");
        let body: Value = resp.json();
        assert_eq!(body["role"], role.as_str());
        assert_eq!(
            body["permissions"].as_array().unwrap().len(),
            role.permissions().len()
        );
    }
}

#[tokio::test]
async fn should_return_not_found_for_unknown_role() {
    let server = test_server(UNREACHABLE);
    let resp = server.get("/api/roles/referee/permissions").await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "UNKNOWN_ROLE");
}

// ── Seed ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_forbid_seeding_without_roster_permission() {
    let server = test_server(UNREACHABLE);
    for role in [Role::Player, Role::Media, Role::Fan] {
        let (name, value) = MockAuth::with_role(role).header();
        let resp = server
            .get("/api/team/seed-u17wc")
            .add_header(name, value)
            .await;
        assert_eq!(resp.status_code(), StatusCode::FORBIDDEN, "{role}");
    }
}

#[tokio::test]
async fn should_require_session_to_seed() {
    let server = test_server(UNREACHABLE);
    let resp = server.get("/api/team/seed-u17wc").await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_surface_database_failure_as_internal_error() {
    let server = test_server(UNREACHABLE);
    let (name, value) = MockAuth::with_role(Role::Coach).header();
    let resp = server
        .get("/api/team/seed-u17wc")
        .add_header(name, value)
        .await;

    assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INTERNAL");
    assert_eq!(body["error"], "internal server error");
}

#[tokio::test]
async fn should_keep_client_supplied_request_id() {
    let server = test_server(UNREACHABLE);
    let resp = server
        .get("/healthz")
        .add_header(
            REQUEST_ID,
            HeaderValue::from_static("trace-me-123"),
        )
        .await;
    assert_eq!(resp.header(REQUEST_ID), "trace-me-123");
}
