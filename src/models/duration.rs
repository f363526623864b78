//! Minute-valued durations and their `HH:MM` rendering.
//!
//! All metrics produced by the engine are whole minutes. This module turns
//! them into the signed `HH:MM` strings used by the report layer, parses
//! them back, and converts them to decimal hours for payroll hand-off.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Formats a signed number of minutes as `HH:MM`.
///
/// Hours are padded to at least two digits and never truncated; negative
/// values get a leading `-`.
///
/// # Example
///
/// ```
/// use timecard_engine::models::format_minutes;
///
/// assert_eq!(format_minutes(0), "00:00");
/// assert_eq!(format_minutes(150), "02:30");
/// assert_eq!(format_minutes(-45), "-00:45");
/// assert_eq!(format_minutes(7530), "125:30");
/// ```
pub fn format_minutes(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let magnitude = minutes.unsigned_abs();
    format!("{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60)
}

/// Parses a signed `HH:MM` duration produced by [`format_minutes`].
///
/// Unlike a time of day, the hour part is unbounded.
pub fn parse_duration(value: &str) -> EngineResult<i64> {
    let malformed = |message: &str| EngineError::MalformedTime {
        value: value.to_string(),
        message: message.to_string(),
    };

    let (negative, body) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let (hours, minutes) = body
        .split_once(':')
        .ok_or_else(|| malformed("expected HH:MM with a ':' separator"))?;

    if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("hours must be decimal digits"));
    }
    if minutes.len() != 2 || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("minute must be exactly two digits"));
    }

    let hours: i64 = hours.parse().map_err(|_| malformed("hours out of range"))?;
    let minutes: i64 = minutes.parse().map_err(|_| malformed("invalid minute"))?;
    if minutes > 59 {
        return Err(malformed("minute out of range 00-59"));
    }

    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| malformed("duration out of range"))?;
    Ok(if negative { -total } else { total })
}

/// Converts minutes to decimal hours rounded to two places.
///
/// ```
/// use timecard_engine::models::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(90), Decimal::new(150, 2));
/// assert_eq!(minutes_to_hours(20), Decimal::new(33, 2));
/// ```
pub fn minutes_to_hours(minutes: u32) -> Decimal {
    let mut hours = (Decimal::from(minutes) / Decimal::from(60)).round_dp(2);
    hours.rescale(2);
    hours
}

/// Serde adapter for minute metrics stored as `u32` and exchanged as `HH:MM`.
pub mod hhmm {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_minutes, parse_duration};

    /// Serializes minutes as an `HH:MM` string.
    pub fn serialize<S: Serializer>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_minutes(i64::from(*minutes)))
    }

    /// Deserializes a non-negative `HH:MM` string into minutes.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let minutes = parse_duration(&raw).map_err(serde::de::Error::custom)?;
        u32::try_from(minutes)
            .map_err(|_| serde::de::Error::custom(format!("negative duration '{}'", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes_zero_and_small() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(5), "00:05");
        assert_eq!(format_minutes(60), "01:00");
    }

    #[test]
    fn test_format_minutes_negative() {
        assert_eq!(format_minutes(-1), "-00:01");
        assert_eq!(format_minutes(-125), "-02:05");
    }

    #[test]
    fn test_format_minutes_large_totals_are_not_truncated() {
        assert_eq!(format_minutes(100 * 60), "100:00");
        assert_eq!(format_minutes(176 * 60 + 30), "176:30");
    }

    #[test]
    fn test_parse_duration_accepts_formatted_output() {
        assert_eq!(parse_duration("00:00").unwrap(), 0);
        assert_eq!(parse_duration("07:40").unwrap(), 460);
        assert_eq!(parse_duration("-02:05").unwrap(), -125);
        assert_eq!(parse_duration("176:30").unwrap(), 10590);
    }

    #[test]
    fn test_parse_duration_rejects_malformed() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("7.40").is_err());
        assert!(parse_duration("07:4").is_err());
        assert!(parse_duration("07:61").is_err());
        assert!(parse_duration("--07:00").is_err());
    }

    #[test]
    fn test_parse_duration_rejects_overflowing_hours() {
        match parse_duration("9223372036854775807:00") {
            Err(EngineError::MalformedTime { message, .. }) => {
                assert_eq!(message, "duration out of range");
            }
            other => panic!("Expected MalformedTime, got {:?}", other),
        }
        assert!(parse_duration("-153722867280912930:59").is_err());
        assert_eq!(
            parse_duration("153722867280912930:07").unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn test_minutes_to_hours_rounds_to_two_places() {
        assert_eq!(minutes_to_hours(0), Decimal::ZERO);
        assert_eq!(minutes_to_hours(480), Decimal::new(800, 2));
        assert_eq!(minutes_to_hours(10), Decimal::new(17, 2));
    }

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Wrapper {
        #[serde(with = "hhmm")]
        worked: u32,
    }

    #[test]
    fn test_hhmm_adapter_serializes_as_string() {
        let json = serde_json::to_string(&Wrapper { worked: 460 }).unwrap();
        assert_eq!(json, r#"{"worked":"07:40"}"#);
    }

    #[test]
    fn test_hhmm_adapter_rejects_negative_values() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"worked":"-00:10"}"#);
        assert!(result.is_err());

        let parsed: Wrapper = serde_json::from_str(r#"{"worked":"02:30"}"#).unwrap();
        assert_eq!(parsed.worked, 150);
    }
}
