//! Derived views over the registered participants: pool statistics, numbers
//! picked by more than one person, and match scoring against a draw.
//!
//! Everything here is a pure function of its inputs. Callers load a fresh
//! participant list for every request and nothing is cached between calls.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{ChosenNumbers, DRAW_SIZE, DrawnNumbers, Participant};

pub const WINNING_MATCHES: usize = DRAW_SIZE;
pub const MIN_RANKED_MATCHES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PoolStatistics {
    pub total_participants: i64,
    pub total_collected: Decimal,
    pub total_quotas: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScoredParticipant {
    pub participant_id: i64,
    pub name: String,
    pub match_count: usize,
    #[schema(value_type = Vec<i32>)]
    pub chosen_numbers: ChosenNumbers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScoreReport {
    #[schema(value_type = Vec<i32>)]
    pub drawn_numbers: DrawnNumbers,
    pub winners: Vec<ScoredParticipant>,
    /// Filled only when nobody matched all six numbers.
    pub top_scorers: Vec<ScoredParticipant>,
}

pub fn compute_statistics(participants: &[Participant]) -> PoolStatistics {
    PoolStatistics {
        total_participants: participants.len() as i64,
        total_collected: participants.iter().map(|p| p.amount_paid).sum(),
        total_quotas: participants.iter().map(|p| i64::from(p.quota_count)).sum(),
    }
}

/// Maps every number picked by two or more participants to their names, in
/// participant order.
pub fn compute_duplicate_numbers(participants: &[Participant]) -> BTreeMap<i32, Vec<String>> {
    let mut owners: BTreeMap<i32, Vec<String>> = BTreeMap::new();

    for participant in participants {
        for number in participant.chosen_numbers.iter() {
            owners
                .entry(number)
                .or_default()
                .push(participant.name.clone());
        }
    }

    owners.retain(|_, names| names.len() > 1);
    owners
}

/// Scores each participant's whole pick against the draw.
///
/// Multi-quota picks are pooled: a participant with 12 numbers is a winner
/// when all six drawn numbers are among them. `top_scorers` ranks 5, 4 and 3
/// matches in that order and keeps participant order within a tier.
pub fn score_against_draw(participants: &[Participant], drawn: &DrawnNumbers) -> ScoreReport {
    let (winners, others): (Vec<_>, Vec<_>) = participants
        .iter()
        .map(|p| ScoredParticipant {
            participant_id: p.participant_id,
            name: p.name.clone(),
            match_count: p.chosen_numbers.matches(drawn),
            chosen_numbers: p.chosen_numbers.clone(),
        })
        .partition(|scored| scored.match_count >= WINNING_MATCHES);

    let top_scorers = if winners.is_empty() {
        let mut ranked: Vec<_> = others
            .into_iter()
            .filter(|scored| scored.match_count >= MIN_RANKED_MATCHES)
            .collect();
        ranked.sort_by(|a, b| b.match_count.cmp(&a.match_count));
        ranked
    } else {
        Vec::new()
    };

    tracing::debug!(
        participants = participants.len(),
        winners = winners.len(),
        top_scorers = top_scorers.len(),
        "Scored draw"
    );

    ScoreReport {
        drawn_numbers: drawn.clone(),
        winners,
        top_scorers,
    }
}
