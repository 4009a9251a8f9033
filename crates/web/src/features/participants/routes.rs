use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{
    export_participants, get_duplicate_numbers, get_participant, get_statistics,
    list_participants, register_participant, update_payment_status,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(register_participant))
        .route("/:participant_id/status", put(update_payment_status))
        .route("/export", get(export_participants))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_participants))
        .route("/statistics", get(get_statistics))
        .route("/duplicates", get(get_duplicate_numbers))
        .route("/:participant_id", get(get_participant))
        .merge(protected)
}
