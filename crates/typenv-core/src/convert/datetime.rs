//! Dates, times and timestamps via chrono.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use super::Converter;
use crate::error::ConvertError;

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M:%S%.f"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// What a date/time value turned out to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DateTimeValue {
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    /// Timestamp carrying a UTC offset.
    Zoned(DateTime<FixedOffset>),
}

/// Parses dates, times and timestamps.
///
/// Without an explicit format the value is tried as RFC 3339, then
/// `HH:MM:SS[.f]`, then `YYYY-MM-DD`, then `YYYY-MM-DD[ T]HH:MM:SS[.f]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeConverter {
    format: Option<String>,
}

impl DateTimeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a single chrono `strftime` format instead of the built-in list.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    fn parse_with(value: &str, fmt: &str) -> Option<DateTimeValue> {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Some(DateTimeValue::Zoned(dt));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(DateTimeValue::DateTime(dt));
        }
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(DateTimeValue::Date(d));
        }
        NaiveTime::parse_from_str(value, fmt)
            .ok()
            .map(DateTimeValue::Time)
    }

    fn parse_default(value: &str) -> Option<DateTimeValue> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(DateTimeValue::Zoned(dt));
        }
        if let Some(t) = TIME_FORMATS
            .iter()
            .find_map(|f| NaiveTime::parse_from_str(value, f).ok())
        {
            return Some(DateTimeValue::Time(t));
        }
        if let Some(d) = DATE_FORMATS
            .iter()
            .find_map(|f| NaiveDate::parse_from_str(value, f).ok())
        {
            return Some(DateTimeValue::Date(d));
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
            .map(DateTimeValue::DateTime)
    }
}

impl Converter for DateTimeConverter {
    type Output = DateTimeValue;

    fn convert(&self, raw: &str) -> Result<DateTimeValue, ConvertError> {
        let value = raw.trim();
        let parsed = match &self.format {
            Some(fmt) => Self::parse_with(value, fmt),
            None => Self::parse_default(value),
        };
        parsed.ok_or_else(|| {
            let reason = match &self.format {
                Some(fmt) => format!("does not match format {:?}", fmt),
                None => "not a recognized date, time or timestamp".to_string(),
            };
            ConvertError::new("datetime", raw, reason)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_only() {
        let c = DateTimeConverter::new();
        assert_eq!(
            c.convert("12:30:05").unwrap(),
            DateTimeValue::Time(NaiveTime::from_hms_opt(12, 30, 5).unwrap())
        );
        assert_eq!(
            c.convert("01:02:03.456789").unwrap(),
            DateTimeValue::Time(NaiveTime::from_hms_micro_opt(1, 2, 3, 456_789).unwrap())
        );
    }

    #[test]
    fn test_date_only() {
        let c = DateTimeConverter::new();
        assert_eq!(
            c.convert(" 2000-03-01 ").unwrap(),
            DateTimeValue::Date(NaiveDate::from_ymd_opt(2000, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_naive_datetime() {
        let c = DateTimeConverter::new();
        let expected = NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(
            c.convert("2024-05-17 08:00:00").unwrap(),
            DateTimeValue::DateTime(expected)
        );
        assert_eq!(
            c.convert("2024-05-17T08:00:00").unwrap(),
            DateTimeValue::DateTime(expected)
        );
    }

    #[test]
    fn test_rfc3339_is_zoned() {
        let c = DateTimeConverter::new();
        match c.convert("2024-05-17T08:00:00+02:00").unwrap() {
            DateTimeValue::Zoned(dt) => assert_eq!(dt.offset().local_minus_utc(), 7200),
            other => panic!("expected zoned timestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_format() {
        let c = DateTimeConverter::new().format("%d/%m/%Y");
        assert_eq!(
            c.convert("01/03/2000").unwrap(),
            DateTimeValue::Date(NaiveDate::from_ymd_opt(2000, 3, 1).unwrap())
        );
        // the default formats are not consulted
        let err = c.convert("2000-03-01").unwrap_err();
        assert!(err.reason.contains("%d/%m/%Y"));
    }

    #[test]
    fn test_garbage_is_error() {
        let c = DateTimeConverter::new();
        let err = c.convert("yesterday").unwrap_err();
        assert_eq!(err.target, "datetime");
        assert!(c.convert("2024-13-01").is_err());
    }
}
