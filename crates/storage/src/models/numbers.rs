use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::DrawnNumbers;

pub const MIN_NUMBER: i32 = 1;
pub const MAX_NUMBER: i32 = 60;
pub const NUMBERS_PER_QUOTA: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumbersError {
    #[error("invalid number token '{0}'")]
    Malformed(String),

    #[error("number list is empty")]
    Empty,

    #[error("number {0} is outside the range 1..=60")]
    OutOfRange(i32),

    #[error("number {0} was chosen more than once")]
    Duplicate(i32),

    #[error("expected {expected} numbers, got {actual}")]
    WrongCount { expected: usize, actual: usize },
}

/// The set of numbers a participant picked, kept sorted and free of repeats.
///
/// The persisted form is the `Display` output, e.g. `"3,7,15,22,41,59"`, and
/// `FromStr` is its strict inverse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChosenNumbers(Vec<i32>);

impl ChosenNumbers {
    /// Builds the pick of a new registration: `6 × quota_count` distinct numbers
    /// inside the allowed range. Unlike parsing, repeats are an error here.
    pub fn for_quotas(numbers: &[i32], quota_count: i32) -> Result<Self, NumbersError> {
        let quotas = usize::try_from(quota_count).unwrap_or(0);
        let expected = NUMBERS_PER_QUOTA * quotas;
        if numbers.len() != expected {
            return Err(NumbersError::WrongCount {
                expected,
                actual: numbers.len(),
            });
        }

        Ok(Self(strictly_unique(numbers)?))
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, number: i32) -> bool {
        self.0.binary_search(&number).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }

    /// How many of the drawn numbers appear in this pick.
    pub fn matches(&self, drawn: &DrawnNumbers) -> usize {
        drawn.iter().filter(|n| self.contains(*n)).count()
    }
}

impl FromStr for ChosenNumbers {
    type Err = NumbersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(NumbersError::Empty);
        }

        let mut numbers = s
            .split(',')
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()?;

        for n in &numbers {
            check_range(*n)?;
        }

        numbers.sort_unstable();
        numbers.dedup();

        Ok(Self(numbers))
    }
}

impl fmt::Display for ChosenNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

fn parse_token(token: &str) -> Result<i32, NumbersError> {
    let digits = token.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumbersError::Malformed(token.to_string()));
    }

    digits
        .parse()
        .map_err(|_| NumbersError::Malformed(token.to_string()))
}

fn check_range(number: i32) -> Result<(), NumbersError> {
    if (MIN_NUMBER..=MAX_NUMBER).contains(&number) {
        Ok(())
    } else {
        Err(NumbersError::OutOfRange(number))
    }
}

/// Range-checks `numbers` and returns them sorted, failing on the first repeat.
pub(crate) fn strictly_unique(numbers: &[i32]) -> Result<Vec<i32>, NumbersError> {
    if numbers.is_empty() {
        return Err(NumbersError::Empty);
    }

    let mut sorted = numbers.to_vec();
    for n in &sorted {
        check_range(*n)?;
    }
    sorted.sort_unstable();

    if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(NumbersError::Duplicate(pair[0]));
    }

    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_order_and_repeats() {
        let numbers: ChosenNumbers = "41,3, 22,7,3".parse().unwrap();
        assert_eq!(numbers.as_slice(), &[3, 7, 22, 41]);
    }

    #[test]
    fn test_format_then_parse_gives_sorted_unique_set() {
        let numbers = ChosenNumbers::for_quotas(&[59, 3, 41, 15, 7, 22], 1).unwrap();
        let stored = numbers.to_string();
        assert_eq!(stored, "3,7,15,22,41,59");

        let parsed: ChosenNumbers = stored.parse().unwrap();
        assert_eq!(parsed, numbers);
        assert_eq!(parsed.to_string(), stored);
    }

    #[test]
    fn test_parse_rejects_python_list_literal() {
        let result = "[1, 2, 3, 4, 5, 6]".parse::<ChosenNumbers>();
        assert_eq!(result, Err(NumbersError::Malformed("[1".to_string())));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("1,,2".parse::<ChosenNumbers>().is_err());
        assert!("1,-2".parse::<ChosenNumbers>().is_err());
        assert!("1,abc".parse::<ChosenNumbers>().is_err());
        assert!("99999999999".parse::<ChosenNumbers>().is_err());
        assert_eq!("".parse::<ChosenNumbers>(), Err(NumbersError::Empty));
        assert_eq!("  ".parse::<ChosenNumbers>(), Err(NumbersError::Empty));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            "0,5".parse::<ChosenNumbers>(),
            Err(NumbersError::OutOfRange(0))
        );
        assert_eq!(
            "5,61".parse::<ChosenNumbers>(),
            Err(NumbersError::OutOfRange(61))
        );
    }

    #[test]
    fn test_for_quotas_requires_six_per_quota() {
        let one = [1, 2, 3, 4, 5, 6];
        assert!(ChosenNumbers::for_quotas(&one, 1).is_ok());
        assert_eq!(
            ChosenNumbers::for_quotas(&one, 2),
            Err(NumbersError::WrongCount {
                expected: 12,
                actual: 6
            })
        );

        let two: Vec<i32> = (10..22).collect();
        let numbers = ChosenNumbers::for_quotas(&two, 2).unwrap();
        assert_eq!(numbers.len(), 12);
    }

    #[test]
    fn test_for_quotas_rejects_repeats_and_range() {
        assert_eq!(
            ChosenNumbers::for_quotas(&[1, 2, 3, 4, 5, 5], 1),
            Err(NumbersError::Duplicate(5))
        );
        assert_eq!(
            ChosenNumbers::for_quotas(&[1, 2, 3, 4, 5, 61], 1),
            Err(NumbersError::OutOfRange(61))
        );
    }

    #[test]
    fn test_for_quotas_rejects_non_positive_quota() {
        assert_eq!(ChosenNumbers::for_quotas(&[], 0), Err(NumbersError::Empty));
        assert!(ChosenNumbers::for_quotas(&[1, 2, 3, 4, 5, 6], -1).is_err());
    }

    #[test]
    fn test_matches_counts_intersection() {
        let numbers: ChosenNumbers = "1,2,3,10,20,30".parse().unwrap();
        let drawn = DrawnNumbers::new(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(numbers.matches(&drawn), 3);
    }
}
