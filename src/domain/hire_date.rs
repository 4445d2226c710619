use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The textual format hire dates are written in (`MM/DD/YYYY`).
pub const HIRE_DATE_FORMAT: &str = "%m/%d/%Y";

/// The calendar date an employee was hired.
///
/// Hire dates are exchanged and persisted as `MM/DD/YYYY` strings, but are
/// held as calendar dates so that range queries and ordering compare dates
/// rather than text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HireDate(NaiveDate);

impl HireDate {
    /// Create a hire date from its components.
    ///
    /// Returns `None` if the components do not form a valid calendar date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

/// Whether `s` is laid out as `DD/DD/DDDD`.
///
/// chrono accepts unpadded fields, surrounding whitespace and short years for
/// `%m/%d/%Y`, so the layout is checked before the calendar is.
fn is_month_day_year(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for HireDate {
    type Err = HireDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_month_day_year(s) {
            return Err(HireDateError {
                input: s.to_string(),
                source: None,
            });
        }
        NaiveDate::parse_from_str(s, HIRE_DATE_FORMAT)
            .map(Self)
            .map_err(|source| HireDateError {
                input: s.to_string(),
                source: Some(source),
            })
    }
}

impl fmt::Display for HireDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(HIRE_DATE_FORMAT))
    }
}

impl Serialize for HireDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HireDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Error returned when a string is not a valid `MM/DD/YYYY` date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date '{input}': expected MM/DD/YYYY")]
pub struct HireDateError {
    input: String,
    #[source]
    source: Option<chrono::ParseError>,
}

impl HireDateError {
    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}
