//! Repository tests against a live Postgres. Run with
//! `DATABASE_URL=postgres://... cargo test -p lottery-storage -- --ignored`.

use rust_decimal::Decimal;
use storage::Database;
use storage::dto::participant::{NewParticipant, RegisterParticipantRequest};
use storage::error::StorageError;
use storage::models::PaymentStatus;
use storage::repository::participant::ParticipantRepository;

async fn database() -> Database {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = Database::new(&url).await.expect("database connection");
    db.run_migrations().await.expect("migrations");
    db
}

fn registration(name: &str, numbers: Vec<i32>) -> NewParticipant {
    let req = RegisterParticipantRequest {
        name: name.to_string(),
        quota_count: 1,
        chosen_numbers: numbers,
    };
    NewParticipant::from_request(&req, Decimal::TEN).unwrap()
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_then_list_round_trips_numbers() {
    let db = database().await;
    let repo = ParticipantRepository::new(db.pool());

    let created = repo
        .create(&registration("Round Trip", vec![59, 3, 41, 15, 7, 22]))
        .await
        .unwrap();
    assert_eq!(created.payment_status, PaymentStatus::Pending);
    assert_eq!(created.chosen_numbers.to_string(), "3,7,15,22,41,59");
    assert_eq!(created.amount_paid, Decimal::TEN);

    let listed = repo.list().await.unwrap();
    let found = listed
        .iter()
        .find(|p| p.participant_id == created.participant_id)
        .unwrap();
    assert_eq!(found, &created);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_status_update_stamps_payment_date() {
    let db = database().await;
    let repo = ParticipantRepository::new(db.pool());

    let created = repo
        .create(&registration("Payer", vec![1, 2, 3, 4, 5, 6]))
        .await
        .unwrap();

    let paid = repo
        .update_status(created.participant_id, PaymentStatus::Paid)
        .await
        .unwrap();
    assert_eq!(paid.payment_status, PaymentStatus::Paid);
    assert!(paid.payment_date >= created.created_at);

    let pending = repo
        .update_status(created.participant_id, PaymentStatus::Pending)
        .await
        .unwrap();
    assert_eq!(pending.payment_status, PaymentStatus::Pending);
    assert_eq!(pending.payment_date, paid.payment_date);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_malformed_row_is_skipped_when_listing() {
    let db = database().await;
    let repo = ParticipantRepository::new(db.pool());

    let bad_id: i64 = sqlx::query_scalar(
        "INSERT INTO participants (name, amount_paid, chosen_numbers) \
         VALUES ('Legacy', 10, '[1, 2, 3, 4, 5, 6]') RETURNING participant_id",
    )
    .fetch_one(db.pool())
    .await
    .unwrap();

    let listed = repo.list().await.unwrap();
    assert!(listed.iter().all(|p| p.participant_id != bad_id));

    let err = repo.find_by_id(bad_id).await.unwrap_err();
    assert!(matches!(err, StorageError::MalformedRecord { .. }));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_status_update_on_malformed_row_is_rolled_back() {
    let db = database().await;
    let repo = ParticipantRepository::new(db.pool());

    let bad_id: i64 = sqlx::query_scalar(
        "INSERT INTO participants (name, amount_paid, chosen_numbers) \
         VALUES ('Legacy', 10, '[1, 2, 3, 4, 5, 6]') RETURNING participant_id",
    )
    .fetch_one(db.pool())
    .await
    .unwrap();

    let err = repo
        .update_status(bad_id, PaymentStatus::Paid)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::MalformedRecord { participant_id, .. } if participant_id == bad_id
    ));

    let stored: PaymentStatus =
        sqlx::query_scalar("SELECT payment_status FROM participants WHERE participant_id = $1")
            .bind(bad_id)
            .fetch_one(db.pool())
            .await
            .unwrap();
    assert_eq!(stored, PaymentStatus::Pending);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_check_constraint_surfaces_as_database_error() {
    let db = database().await;
    let repo = ParticipantRepository::new(db.pool());

    let mut blank = registration("Blank", vec![1, 2, 3, 4, 5, 6]);
    blank.name = "   ".to_string();

    let err = repo.create(&blank).await.unwrap_err();
    assert!(matches!(err, StorageError::Database(_)));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_unknown_id_is_not_found() {
    let db = database().await;
    let repo = ParticipantRepository::new(db.pool());

    let err = repo
        .update_status(i64::MAX, PaymentStatus::Confirmed)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}
