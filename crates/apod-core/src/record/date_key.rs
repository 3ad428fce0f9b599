//! Calendar date identifying one day's record.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ApodError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date in canonical `YYYY-MM-DD` form.
///
/// `DateKey` is the unique identifier of a [`Record`](super::Record) and the
/// key of the record store. Ordering follows the calendar, which matches the
/// lexical order of the textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The first day the picture archive has an entry for.
    pub fn archive_start() -> Self {
        Self(NaiveDate::from_ymd_opt(1995, 6, 16).unwrap_or(NaiveDate::MIN))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Parses raw user input into a selection.
    ///
    /// Surrounding whitespace is ignored and an empty input means "no date
    /// selected". Dates after `today` or before [`DateKey::archive_start`]
    /// are rejected, mirroring the bounds of the date picker.
    pub fn parse_input(raw: &str, today: DateKey) -> Result<Option<DateKey>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let key: DateKey = trimmed.parse()?;
        if key > today {
            return Err(ApodError::invalid_date(
                trimmed,
                format!("date is after today ({today})"),
            ));
        }
        let archive_start = Self::archive_start();
        if key < archive_start {
            return Err(ApodError::invalid_date(
                trimmed,
                format!("archive starts at {archive_start}"),
            ));
        }
        Ok(Some(key))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = ApodError;

    fn from_str(s: &str) -> Result<Self> {
        // chrono accepts unpadded fields; the key must stay canonical
        if s.len() != 10 {
            return Err(ApodError::invalid_date(s, "expected YYYY-MM-DD"));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(DateKey)
            .map_err(|e| ApodError::invalid_date(s, e.to_string()))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_is_canonical() {
        let k = DateKey::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(k.to_string(), "2024-01-01");
    }

    #[test]
    fn test_rejects_non_canonical_forms() {
        assert!("2024-1-1".parse::<DateKey>().is_err());
        assert!("01/01/2024".parse::<DateKey>().is_err());
        assert!("2024-02-30".parse::<DateKey>().is_err());
        assert!("".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_order_follows_calendar() {
        assert!(key("2023-12-31") < key("2024-01-01"));
        assert!(key("2024-01-09") < key("2024-01-10"));
    }

    #[test]
    fn test_parse_input_empty_is_no_selection() {
        let today = key("2024-06-01");
        assert_eq!(DateKey::parse_input("", today).unwrap(), None);
        assert_eq!(DateKey::parse_input("   ", today).unwrap(), None);
    }

    #[test]
    fn test_parse_input_bounds() {
        let today = key("2024-06-01");
        assert_eq!(
            DateKey::parse_input(" 2024-06-01 ", today).unwrap(),
            Some(today)
        );
        assert_eq!(
            DateKey::parse_input("1995-06-16", today).unwrap(),
            Some(DateKey::archive_start())
        );

        let future = DateKey::parse_input("2024-06-02", today).unwrap_err();
        assert!(future.is_invalid_date());
        let too_early = DateKey::parse_input("1995-06-15", today).unwrap_err();
        assert!(too_early.is_invalid_date());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&key("2024-01-01")).unwrap();
        assert_eq!(json, "\"2024-01-01\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key("2024-01-01"));
        assert!(serde_json::from_str::<DateKey>("\"yesterday\"").is_err());
    }
}
