use sqlx::PgPool;
use storage::{
    error::Result,
    models::DrawnNumbers,
    repository::participant::ParticipantRepository,
    services::scoring::{self, ScoreReport},
};

/// Score the current participant list against a draw
pub async fn score_draw(pool: &PgPool, drawn: &DrawnNumbers) -> Result<ScoreReport> {
    let repo = ParticipantRepository::new(pool);
    let participants = repo.list().await?;

    Ok(scoring::score_against_draw(&participants, drawn))
}
