//! Shared types for the Zboost onboarding platform
//!
//! Common types used across server crates including HTTP types,
//! error types, response structures, and the pricing data model.

pub mod error;
pub mod models;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
