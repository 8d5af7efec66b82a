pub mod dto;
pub mod handlers;
pub mod repo;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/weights",
            post(handlers::log_weight).get(handlers::get_weights),
        )
        .route("/project_loss", get(handlers::project_loss))
}
