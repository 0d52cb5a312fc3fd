//! Percentage values as typed into and shown by the tip fields
//!
//! User input arrives as free text such as `"30"`, `"30%"` or `""`. This module turns that
//! text into an integer, and renders stored percentages back with their `%` suffix.

use crate::constant::{MAX_PERCENT, MIN_PERCENT};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PercentageError {
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Percentage out of range: {0}")]
    OutOfRange(i64),
}

/// An integer percentage in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u8);

impl Percentage {
    pub fn new(value: i64) -> Result<Self, PercentageError> {
        if (MIN_PERCENT..=MAX_PERCENT).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(PercentageError::OutOfRange(value))
        }
    }

    pub const fn from_const(value: u8) -> Self {
        assert!(value <= MAX_PERCENT as u8);
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The form written to the store, without the `%` suffix
    pub fn storage_value(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Serialized as the bare number
impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Accepts both the stored form (`"30"`) and the displayed form (`"30%"`)
impl FromStr for Percentage {
    type Err = PercentageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_input(s)? {
            Some(value) => Self::new(value),
            None => Err(PercentageError::InvalidNumber(s.to_string())),
        }
    }
}

/// Strip surrounding whitespace and any trailing `%`, then parse what remains
///
/// Returns `Ok(None)` when nothing is left, which callers treat as "no change".
pub fn parse_input(raw: &str) -> Result<Option<i64>, PercentageError> {
    let cleaned = raw.trim().trim_end_matches('%').trim_end();
    if cleaned.is_empty() {
        return Ok(None);
    }

    cleaned
        .parse::<i64>()
        .map(Some)
        .map_err(|_| PercentageError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_suffixed() {
        assert_eq!(parse_input("30").unwrap(), Some(30));
        assert_eq!(parse_input("30%").unwrap(), Some(30));
        assert_eq!(parse_input("30%%").unwrap(), Some(30));
        assert_eq!(parse_input(" 7% ").unwrap(), Some(7));
        assert_eq!(parse_input("-5").unwrap(), Some(-5));
    }

    #[test]
    fn test_parse_empty_is_no_change() {
        assert_eq!(parse_input("").unwrap(), None);
        assert_eq!(parse_input("%").unwrap(), None);
        assert_eq!(parse_input("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_input("abc"),
            Err(PercentageError::InvalidNumber(_))
        ));
        assert!(parse_input("12.5").is_err());
        assert!(parse_input("%30").is_err());
        assert!(parse_input("99999999999999999999").is_err());
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(Percentage::new(0).unwrap().value(), 0);
        assert_eq!(Percentage::new(100).unwrap().value(), 100);
        assert_eq!(Percentage::new(101), Err(PercentageError::OutOfRange(101)));
        assert_eq!(Percentage::new(-1), Err(PercentageError::OutOfRange(-1)));
    }

    #[test]
    fn test_display_and_storage_forms() {
        let p: Percentage = "42%".parse().unwrap();
        assert_eq!(p.to_string(), "42%");
        assert_eq!(p.storage_value(), "42");
        assert!("".parse::<Percentage>().is_err());
        assert!("150".parse::<Percentage>().is_err());
    }
}
