pub mod dto;
pub mod handlers;
pub mod repo;

use axum::routing::post;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/meals", post(handlers::log_meal).get(handlers::get_meals))
        .route("/load_sample", post(handlers::load_sample))
}
