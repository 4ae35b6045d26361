//! Zboost Onboarding Server
//!
//! Multi-step customer-onboarding and pricing wizard for a marketing
//! agency: catalog, per-session selection & pricing engine, billing
//! totals, payment-gateway handshake and confirmation emails.
//!
//! # Module structure
//!
//! ```text
//! onboard-server/src/
//! ├── core/       # Configuration, state, server
//! ├── catalog/    # Versioned catalog provider + built-in data
//! ├── selection/  # Cart state machine
//! ├── billing/    # Pure totals math
//! ├── payment/    # Gateway client + signature verification
//! ├── notify/     # Transactional email
//! ├── sessions/   # Session registry + profile store
//! ├── api/        # HTTP routes and handlers
//! └── utils/      # Logger, shared re-exports
//! ```

pub mod api;
pub mod billing;
pub mod catalog;
pub mod core;
pub mod notify;
pub mod payment;
pub mod selection;
pub mod sessions;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState, build_router};
pub use selection::{DiscountPolicy, SelectionEngine, SelectionError};
pub use sessions::{OnboardingSession, SessionManager};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
 _____  _                          _
|__  / | |__    ___    ___   ___  | |_
  / /  | '_ \  / _ \  / _ \ / __| | __|
 / /_  | |_) || (_) || (_) |\__ \ | |_
/____| |_.__/  \___/  \___/ |___/  \__|
    "#
    );
}
