use axum::Router;

use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

pub mod draws;
pub mod participants;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    Router::new()
        .nest("/participants", participants::routes::routes(api_keys))
        .nest("/draws", draws::routes::routes())
}
