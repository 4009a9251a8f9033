use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{DrawnNumbers, NumbersError};

/// Request payload for scoring participants against a draw
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreDrawRequest {
    pub drawn_numbers: Vec<i32>,
}

impl ScoreDrawRequest {
    pub fn to_draw(&self) -> Result<DrawnNumbers, NumbersError> {
        DrawnNumbers::new(&self.drawn_numbers)
    }
}
