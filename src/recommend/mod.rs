use axum::{routing::post, Router};

use crate::state::AppState;

mod dto;
pub mod engine;
pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new().route("/recommend", post(handlers::recommend))
}
