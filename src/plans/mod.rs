pub mod client;
pub mod dto;
pub mod handlers;

use axum::routing::post;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/generate_plan", post(handlers::generate_plan))
}
