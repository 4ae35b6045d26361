//! Common utilities and re-exports
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResult`] / [`ApiResponse`] - unified error and
//!   response types (from `shared::error`)
//! - [`logger`] - tracing setup helpers

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
