//! Catalog route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/catalog | GET | Current published catalog |

use axum::{Json, Router, extract::State, routing::get};
use shared::models::Catalog;

use crate::api::ApiResponse;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/catalog", get(current))
}

/// GET /api/catalog - the snapshot new sessions will pin
async fn current(State(state): State<ServerState>) -> Json<ApiResponse<Catalog>> {
    let catalog = state.catalog.current();
    Json(ApiResponse::success((*catalog).clone()))
}
