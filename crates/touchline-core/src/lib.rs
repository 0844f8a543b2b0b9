//! HTTP plumbing shared by Touchline services: error bodies, health checks,
//! request ids, timestamp formatting and tracing setup.

pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
