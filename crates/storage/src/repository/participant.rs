use chrono::Utc;
use sqlx::PgPool;

use crate::dto::participant::NewParticipant;
use crate::error::{Result, StorageError};
use crate::models::{Participant, ParticipantRow, PaymentStatus};

const PARTICIPANT_COLUMNS: &str = "participant_id, name, amount_paid, chosen_numbers, \
     payment_status, quota_count, payment_date, created_at";

pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all participants in registration order.
    ///
    /// Rows whose stored numbers cannot be parsed are logged and left out so
    /// one bad row never hides the rest of the pool.
    pub async fn list(&self) -> Result<Vec<Participant>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants ORDER BY participant_id"
        ))
        .fetch_all(self.pool)
        .await?;

        let participants = rows
            .into_iter()
            .filter_map(|row| match Participant::try_from(row) {
                Ok(participant) => Some(participant),
                Err(e) => {
                    tracing::warn!("Skipping participant: {}", e);
                    None
                }
            })
            .collect();

        Ok(participants)
    }

    /// Find participant by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Participant> {
        let row = sqlx::query_as::<_, ParticipantRow>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE participant_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Participant::try_from(row)
    }

    /// Insert a validated registration. New participants always start as pending.
    pub async fn create(&self, new: &NewParticipant) -> Result<Participant> {
        let now = Utc::now().naive_utc();

        let row = sqlx::query_as::<_, ParticipantRow>(&format!(
            r#"
            INSERT INTO participants (name, amount_paid, chosen_numbers, payment_status,
                                      quota_count, payment_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(&new.name)
        .bind(new.amount_paid)
        .bind(new.chosen_numbers.to_string())
        .bind(PaymentStatus::Pending)
        .bind(new.quota_count)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Participant::try_from(row)
    }

    /// Change the payment status. Moving into `Paid` or `Confirmed` stamps the
    /// payment date, moving to `Pending` keeps it.
    ///
    /// A row whose stored numbers cannot be parsed is left unchanged.
    pub async fn update_status(&self, id: i64, status: PaymentStatus) -> Result<Participant> {
        let stamp = status.payment_stamp(Utc::now().naive_utc());
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ParticipantRow>(&format!(
            r#"
            UPDATE participants
            SET payment_status = $2,
                payment_date = COALESCE($3, payment_date)
            WHERE participant_id = $1
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .bind(stamp)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        // Dropping `tx` on a parse failure rolls the update back.
        let participant = Participant::try_from(row)?;
        tx.commit().await?;

        Ok(participant)
    }
}
