use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{ChosenNumbers, NumbersError, Participant, PaymentStatus};

/// Display view of a participant
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParticipantResponse {
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

/// Request payload for registering a participant
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_numbers_for_quotas"))]
pub struct RegisterParticipantRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(range(min = 1, max = 10, message = "Quota count must be between 1 and 10"))]
    #[serde(default = "default_quota_count")]
    pub quota_count: i32,

    pub chosen_numbers: Vec<i32>,
}

/// Request payload for changing a participant's payment status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePaymentStatusRequest {
    pub status: PaymentStatus,
}

/// A number picked by more than one participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DuplicateNumberEntry {
    pub number: i32,
    pub participants: Vec<String>,
}

/// A registration that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewParticipant {
    pub name: String,
    pub amount_paid: Decimal,
    pub chosen_numbers: ChosenNumbers,
    pub quota_count: i32,
}

fn default_quota_count() -> i32 {
    1
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("blank_name");
        error.message = Some(Cow::from("Name must not be blank"));
        return Err(error);
    }

    Ok(())
}

fn validate_numbers_for_quotas(req: &RegisterParticipantRequest) -> Result<(), ValidationError> {
    ChosenNumbers::for_quotas(&req.chosen_numbers, req.quota_count)
        .map(|_| ())
        .map_err(|e| {
            let mut error = ValidationError::new("invalid_chosen_numbers");
            error.message = Some(Cow::from(e.to_string()));
            error
        })
}

impl NewParticipant {
    /// Prices the registration at `quota_price` per quota.
    pub fn from_request(
        req: &RegisterParticipantRequest,
        quota_price: Decimal,
    ) -> Result<Self, NumbersError> {
        let chosen_numbers = ChosenNumbers::for_quotas(&req.chosen_numbers, req.quota_count)?;

        Ok(Self {
            name: req.name.trim().to_string(),
            amount_paid: (quota_price * Decimal::from(req.quota_count)).round_dp(2),
            chosen_numbers,
            quota_count: req.quota_count,
        })
    }
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            participant_id: participant.participant_id,
            name: participant.name,
            amount_paid: participant.amount_paid,
            chosen_numbers: participant.chosen_numbers,
            payment_status: participant.payment_status,
            quota_count: participant.quota_count,
            payment_date: participant.payment_date,
            created_at: participant.created_at,
        }
    }
}

impl DuplicateNumberEntry {
    pub fn from_map(duplicates: BTreeMap<i32, Vec<String>>) -> Vec<Self> {
        duplicates
            .into_iter()
            .map(|(number, participants)| Self {
                number,
                participants,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, quota_count: i32, chosen_numbers: Vec<i32>) -> RegisterParticipantRequest {
        RegisterParticipantRequest {
            name: name.to_string(),
            quota_count,
            chosen_numbers,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let req = request("Ana", 1, vec![5, 12, 23, 34, 45, 56]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_wrong_count_fails_validation() {
        let req = request("Ana", 1, vec![5, 12, 23, 34, 45]);
        assert!(req.validate().is_err());

        let req = request("Ana", 2, vec![5, 12, 23, 34, 45, 56]);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let req = request("   ", 1, vec![5, 12, 23, 34, 45, 56]);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_quota_count_out_of_range_fails_validation() {
        let req = request("Ana", 0, vec![]);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quota_count"));
    }

    #[test]
    fn test_new_participant_prices_quotas() {
        let numbers: Vec<i32> = (1..=12).collect();
        let req = request("  Bruno ", 2, numbers);
        let new = NewParticipant::from_request(&req, Decimal::new(1000, 2)).unwrap();

        assert_eq!(new.name, "Bruno");
        assert_eq!(new.amount_paid, Decimal::new(2000, 2));
        assert_eq!(new.chosen_numbers.len(), 12);
        assert_eq!(new.quota_count, 2);
    }

    #[test]
    fn test_new_participant_rejects_duplicates() {
        let req = request("Ana", 1, vec![1, 1, 2, 3, 4, 5]);
        assert_eq!(
            NewParticipant::from_request(&req, Decimal::TEN),
            Err(NumbersError::Duplicate(1))
        );
    }

    #[test]
    fn test_duplicate_entries_follow_number_order() {
        let mut map = BTreeMap::new();
        map.insert(9, vec!["B".to_string(), "C".to_string()]);
        map.insert(1, vec!["A".to_string(), "B".to_string()]);

        let entries = DuplicateNumberEntry::from_map(map);
        assert_eq!(entries[0].number, 1);
        assert_eq!(entries[1].number, 9);
    }
}
