//! Auth types shared across Touchline services.
//!
//! Provides Supabase access-token validation and the `Session` extractor that
//! carries the caller's identity and role through request context.

pub mod session;
pub mod token;
