//! Mock auth helpers for integration tests.
//!
//! Services verify Supabase access tokens themselves. `MockAuth` signs tokens
//! with a test secret so requests can carry a real `Authorization: Bearer` header.

use axum::http::{HeaderName, HeaderValue, header};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use touchline_auth_types::token::{AUTHENTICATED_AUDIENCE, AppMetadata, SupabaseClaims};
use touchline_domain::role::Role;

/// Secret shared by `MockAuth` and the test service state.
pub const TEST_JWT_SECRET: &str = "touchline-test-jwt-secret";

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub role: Role,
}

impl MockAuth {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Random user with the given role.
    pub fn with_role(role: Role) -> Self {
        Self::new(Uuid::new_v4(), role)
    }

    /// Access token valid for one hour, signed with [`TEST_JWT_SECRET`].
    pub fn token(&self) -> String {
        let exp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock before epoch")
            .as_secs()
            + 3600;
        let claims = SupabaseClaims {
            sub: self.user_id.to_string(),
            aud: AUTHENTICATED_AUDIENCE.to_owned(),
            exp,
            email: None,
            app_metadata: AppMetadata {
                role: Some(self.role.as_str().to_owned()),
            },
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .expect("sign test token")
    }

    /// `Authorization` header pair ready for a test request builder.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.token()))
            .expect("token is valid header value");
        (header::AUTHORIZATION, value)
    }
}
