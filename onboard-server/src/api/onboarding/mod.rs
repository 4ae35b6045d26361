//! Onboarding API module
//!
//! Session lifecycle plus every selection-engine operation. All state
//! lives server-side; the client drives the wizard one operation at a
//! time and reads totals back whenever it likes.

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub use handler::{SessionCreated, SessionSnapshot};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/onboarding", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_session))
        .route("/{id}/business", put(handler::submit_business))
        .route("/{id}/survey", put(handler::submit_survey))
        .route("/{id}/selection/toggle", post(handler::toggle_option))
        .route(
            "/{id}/selection/language",
            post(handler::resolve_language).delete(handler::cancel_language),
        )
        .route("/{id}/selection/quantity", put(handler::set_quantity))
        .route("/{id}/selection/plan", post(handler::toggle_plan))
        .route("/{id}/selection/plan/views", put(handler::set_plan_views))
        .route("/{id}/selection/add-on", post(handler::toggle_add_on))
        .route("/{id}/selection/redeem", post(handler::apply_redeem))
        .route("/{id}/selection/discount", put(handler::set_discount))
        .route("/{id}/totals", get(handler::totals))
}
