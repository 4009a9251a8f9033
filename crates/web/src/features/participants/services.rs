use sqlx::PgPool;
use storage::{
    dto::participant::{DuplicateNumberEntry, NewParticipant},
    error::Result,
    models::{Participant, PaymentStatus},
    repository::participant::ParticipantRepository,
    services::scoring::{self, PoolStatistics},
};

use super::export;

/// List all participants
pub async fn list_participants(pool: &PgPool) -> Result<Vec<Participant>> {
    let repo = ParticipantRepository::new(pool);
    repo.list().await
}

/// Get participant by ID
pub async fn get_participant(pool: &PgPool, participant_id: i64) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.find_by_id(participant_id).await
}

/// Register a participant that already passed validation
pub async fn register_participant(pool: &PgPool, new: &NewParticipant) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    let participant = repo.create(new).await?;

    tracing::info!(
        participant_id = participant.participant_id,
        quota_count = participant.quota_count,
        "Registered participant"
    );

    Ok(participant)
}

/// Update a participant's payment status
pub async fn update_payment_status(
    pool: &PgPool,
    participant_id: i64,
    status: PaymentStatus,
) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    let participant = repo.update_status(participant_id, status).await?;

    tracing::info!(participant_id, status = %status, "Updated payment status");

    Ok(participant)
}

/// Participant count and money collected
pub async fn get_statistics(pool: &PgPool) -> Result<PoolStatistics> {
    let participants = list_participants(pool).await?;
    Ok(scoring::compute_statistics(&participants))
}

/// Numbers picked by more than one participant
pub async fn get_duplicate_numbers(pool: &PgPool) -> Result<Vec<DuplicateNumberEntry>> {
    let participants = list_participants(pool).await?;
    let duplicates = scoring::compute_duplicate_numbers(&participants);
    Ok(DuplicateNumberEntry::from_map(duplicates))
}

/// CSV rendering of the participant list
pub async fn export_participants(pool: &PgPool) -> Result<String> {
    let participants = list_participants(pool).await?;
    Ok(export::participants_csv(&participants))
}
