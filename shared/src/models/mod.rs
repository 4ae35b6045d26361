//! Data models
//!
//! Shared between the onboarding server and frontend (via API).
//! All prices are `i64` whole currency units; the gateway alone
//! speaks minor units.

pub mod billing;
pub mod catalog;
pub mod customer;
pub mod payment;
pub mod plan;
pub mod selection;

// Re-exports
pub use billing::*;
pub use catalog::*;
pub use customer::*;
pub use payment::*;
pub use plan::*;
pub use selection::*;
