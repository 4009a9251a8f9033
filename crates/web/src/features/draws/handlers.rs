use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::draw::ScoreDrawRequest, services::scoring::ScoreReport};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/draws/score",
    request_body = ScoreDrawRequest,
    responses(
        (status = 200, description = "Winners, or the best partial matches when nobody hit all six", body = ScoreReport),
        (status = 400, description = "Drawn numbers are not six distinct numbers between 1 and 60")
    ),
    tag = "draws"
)]
pub async fn score_draw(
    State(db): State<Database>,
    Json(req): Json<ScoreDrawRequest>,
) -> Result<Response, WebError> {
    let drawn = req.to_draw()?;

    let report = services::score_draw(db.pool(), &drawn).await?;

    Ok(Json(report).into_response())
}
