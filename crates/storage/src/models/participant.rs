use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{ChosenNumbers, PaymentStatus};
use crate::error::StorageError;

/// A participant row exactly as persisted, with the chosen numbers still in
/// their comma-separated text form.
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantRow {
    pub participant_id: i64,
    pub name: String,
    pub amount_paid: Decimal,
    pub chosen_numbers: String,
    pub payment_status: PaymentStatus,
    pub quota_count: i32,
    pub payment_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Participant {
    pub participant_id: i64,
    pub name: String,
    pub amount_paid: Decimal,
    #[schema(value_type = Vec<i32>)]
    pub chosen_numbers: ChosenNumbers,
    pub payment_status: PaymentStatus,
    pub quota_count: i32,
    pub payment_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ParticipantRow> for Participant {
    type Error = StorageError;

    fn try_from(row: ParticipantRow) -> Result<Self, Self::Error> {
        let chosen_numbers =
            row.chosen_numbers
                .parse()
                .map_err(|source| StorageError::MalformedRecord {
                    participant_id: row.participant_id,
                    source,
                })?;

        Ok(Self {
            participant_id: row.participant_id,
            name: row.name,
            amount_paid: row.amount_paid,
            chosen_numbers,
            payment_status: row.payment_status,
            quota_count: row.quota_count,
            payment_date: row.payment_date,
            created_at: row.created_at,
        })
    }
}
