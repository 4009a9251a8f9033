use std::borrow::Cow;

use storage::models::{ChosenNumbers, Participant};

pub const EXPORT_FILE_NAME: &str = "lottery_pool.csv";

const HEADERS: [&str; 6] = [
    "ID",
    "Name",
    "Amount Paid",
    "Chosen Numbers",
    "Payment Date",
    "Status",
];

/// Renders the participant table as CSV, one row per participant in list order.
pub fn participants_csv(participants: &[Participant]) -> String {
    let mut csv = HEADERS.join(",");
    csv.push('\n');

    for participant in participants {
        let fields = [
            participant.participant_id.to_string(),
            participant.name.clone(),
            format!("{:.2}", participant.amount_paid),
            padded_numbers(&participant.chosen_numbers),
            participant
                .payment_date
                .format("%d/%m/%Y %H:%M")
                .to_string(),
            participant.payment_status.label().to_string(),
        ];

        let row: Vec<Cow<'_, str>> = fields.iter().map(|f| escape_field(f)).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}

fn padded_numbers(numbers: &ChosenNumbers) -> String {
    numbers
        .iter()
        .map(|n| format!("{n:02}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
