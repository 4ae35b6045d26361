//! Payment API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/payment/order | POST | Create a gateway order for the session's advance |
//! | /api/payment/verify | POST | Verify the checkout callback, mark paid, notify |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payment", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/order", post(handler::create_order))
        .route("/verify", post(handler::verify))
}
