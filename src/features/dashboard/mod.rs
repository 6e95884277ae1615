pub mod handlers;
pub mod models;
pub mod schemas;

use axum::{Router, routing::get};

use crate::utilities::app_state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::index_handler))
}
