//! Test utilities for Touchline services.
//!
//! Provides `MockAuth` for minting bearer tokens and `FakeUpstream` for standing
//! in for Supabase Storage, the blob store and the YouTube API.
//! Import in `#[cfg(test)]` blocks and `tests/` only, never in production code.

pub mod auth;
pub mod upstream;
