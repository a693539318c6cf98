use std::{fmt::Display, num::NonZeroU64, str::FromStr};

use thiserror::Error;

/// A 1-based line number. Zero can't be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ordinal(NonZeroU64);

impl Ordinal {
    /// The first line of an input
    pub const FIRST: Ordinal = Ordinal(match NonZeroU64::new(1) {
        Some(n) => n,
        None => unreachable!(),
    });

    /// Returns `None` for 0
    #[inline]
    pub fn new(n: u64) -> Option<Ordinal> {
        NonZeroU64::new(n).map(Ordinal)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl Display for Ordinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroU64> for Ordinal {
    #[inline]
    fn from(n: NonZeroU64) -> Self {
        Self(n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOrdinalError {
    #[error("line number cannot be empty")]
    Empty,
    #[error("line number cannot start with whitespace")]
    Whitespace,
    #[error("'{0}' is not a valid line number")]
    Invalid(String),
    #[error("line number is out of range")]
    OutOfRange,
    #[error("line number cannot be zero")]
    Zero,
    #[error("line number cannot be negative (counting from the end is not supported)")]
    Negative,
}

impl FromStr for Ordinal {
    type Err = ParseOrdinalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.chars().next().ok_or(ParseOrdinalError::Empty)?;
        if first.is_whitespace() {
            return Err(ParseOrdinalError::Whitespace);
        }

        let digits = s.strip_prefix('+').unwrap_or(s);

        if let Some(rest) = s.strip_prefix('-') {
            if is_digits(rest) {
                return Err(ParseOrdinalError::Negative);
            }
        }

        if !is_digits(digits) {
            return Err(ParseOrdinalError::Invalid(s.to_owned()));
        }

        // Only digits are left, so the only possible failure is an overflow
        let n: u64 = digits.parse().map_err(|_| ParseOrdinalError::OutOfRange)?;
        Ordinal::new(n).ok_or(ParseOrdinalError::Zero)
    }
}

#[inline]
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
