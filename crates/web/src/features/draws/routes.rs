use axum::{Router, routing::post};

use super::handlers::score_draw;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/score", post(score_draw))
}
