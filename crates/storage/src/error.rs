use thiserror::Error;

use crate::models::NumbersError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Malformed record {participant_id}: {source}")]
    MalformedRecord {
        participant_id: i64,
        #[source]
        source: NumbersError,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;
