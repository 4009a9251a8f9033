use serde::Serialize;

use super::numbers::{NumbersError, strictly_unique};

pub const DRAW_SIZE: usize = 6;

/// The six numbers announced as the lottery result.
///
/// Holding a `DrawnNumbers` means the draw has exactly six distinct numbers in
/// range, so scoring never has to re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawnNumbers(Vec<i32>);

impl DrawnNumbers {
    pub fn new(numbers: &[i32]) -> Result<Self, NumbersError> {
        if numbers.len() != DRAW_SIZE {
            return Err(NumbersError::WrongCount {
                expected: DRAW_SIZE,
                actual: numbers.len(),
            });
        }

        Ok(Self(strictly_unique(numbers)?))
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<i32>> for DrawnNumbers {
    type Error = NumbersError;

    fn try_from(numbers: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(&numbers)
    }
}
