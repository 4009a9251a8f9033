use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::participant::{
        DuplicateNumberEntry, NewParticipant, ParticipantResponse, RegisterParticipantRequest,
        UpdatePaymentStatusRequest,
    },
    services::scoring::PoolStatistics,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::Pricing;

use super::{export::EXPORT_FILE_NAME, services};

#[utoipa::path(
    get,
    path = "/api/participants",
    responses(
        (status = 200, description = "List all participants in registration order", body = Vec<ParticipantResponse>)
    ),
    tag = "participants"
)]
pub async fn list_participants(State(db): State<Database>) -> Result<Response, WebError> {
    let participants = services::list_participants(db.pool()).await?;

    let response: Vec<ParticipantResponse> = participants
        .into_iter()
        .map(ParticipantResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/{participant_id}",
    params(
        ("participant_id" = i64, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Participant found", body = ParticipantResponse),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn get_participant(
    State(db): State<Database>,
    Path(participant_id): Path<i64>,
) -> Result<Response, WebError> {
    let participant = services::get_participant(db.pool(), participant_id).await?;

    Ok(Json(ParticipantResponse::from(participant)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/participants",
    request_body = RegisterParticipantRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Participant registered successfully", body = ParticipantResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "participants"
)]
pub async fn register_participant(
    State(db): State<Database>,
    State(pricing): State<Pricing>,
    Json(req): Json<RegisterParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let new = NewParticipant::from_request(&req, pricing.quota_price)?;
    let participant = services::register_participant(db.pool(), &new).await?;

    Ok((
        StatusCode::CREATED,
        Json(ParticipantResponse::from(participant)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/participants/{participant_id}/status",
    params(
        ("participant_id" = i64, Path, description = "Participant ID")
    ),
    request_body = UpdatePaymentStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Payment status updated", body = ParticipantResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn update_payment_status(
    State(db): State<Database>,
    Path(participant_id): Path<i64>,
    Json(req): Json<UpdatePaymentStatusRequest>,
) -> Result<Response, WebError> {
    let updated = services::update_payment_status(db.pool(), participant_id, req.status).await?;

    Ok(Json(ParticipantResponse::from(updated)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/statistics",
    responses(
        (status = 200, description = "Participant count and total collected", body = PoolStatistics)
    ),
    tag = "participants"
)]
pub async fn get_statistics(State(db): State<Database>) -> Result<Response, WebError> {
    let statistics = services::get_statistics(db.pool()).await?;

    Ok(Json(statistics).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/duplicates",
    responses(
        (status = 200, description = "Numbers chosen by more than one participant", body = Vec<DuplicateNumberEntry>)
    ),
    tag = "participants"
)]
pub async fn get_duplicate_numbers(State(db): State<Database>) -> Result<Response, WebError> {
    let duplicates = services::get_duplicate_numbers(db.pool()).await?;

    Ok(Json(duplicates).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/export",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Participant list as CSV", body = String, content_type = "text/csv"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "participants"
)]
pub async fn export_participants(State(db): State<Database>) -> Result<Response, WebError> {
    let csv = services::export_participants(db.pool()).await?;
    let disposition = format!("attachment; filename=\"{EXPORT_FILE_NAME}\"");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}
