use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payment state of a registration. Any state can move to any other.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Confirmed,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Confirmed => "Confirmed",
        }
    }

    /// The new payment date when moving into this status, if it stamps one.
    /// Moving to `Pending` keeps whatever date the record already has.
    pub fn payment_stamp(self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Self::Pending => None,
            Self::Paid | Self::Confirmed => Some(now),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_paid_and_confirmed_stamp_date() {
        assert_eq!(PaymentStatus::Paid.payment_stamp(noon()), Some(noon()));
        assert_eq!(PaymentStatus::Confirmed.payment_stamp(noon()), Some(noon()));
    }

    #[test]
    fn test_pending_keeps_date() {
        assert_eq!(PaymentStatus::Pending.payment_stamp(noon()), None);
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
    }
}
