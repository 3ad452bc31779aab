//! Record creation timestamps as exchanged with the backend.
//!
//! The backend stores whatever the submitting client sent, so the wire value
//! is kept verbatim next to the parsed instant. Values that cannot be parsed
//! still round-trip unchanged; they simply have no instant to sort by.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A creation timestamp attached to every listed record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub struct Timestamp {
    raw: String,
    instant: Option<DateTime<Utc>>,
}

impl Timestamp {
    /// Parse a wire timestamp, keeping the raw text.
    ///
    /// Accepts RFC 3339 date-times, naive `YYYY-MM-DDTHH:MM:SS[.fff]` values
    /// (read as UTC), and bare `YYYY-MM-DD` dates (midnight UTC).
    ///
    /// # Examples
    /// ```
    /// use selectify::domain::Timestamp;
    ///
    /// let stamp = Timestamp::parse("2024-02-01");
    /// assert!(stamp.instant().is_some());
    /// assert!(Timestamp::parse("yesterday").instant().is_none());
    /// ```
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let instant = parse_instant(&raw);
        Self { raw, instant }
    }

    /// The value exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed instant, when the raw value is a recognised format.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    /// Order two timestamps newest first.
    ///
    /// Unparseable timestamps compare as older than any parseable one and
    /// equal to each other.
    pub fn cmp_newest_first(&self, other: &Self) -> Ordering {
        match (self.instant, other.instant) {
            (Some(left), Some(right)) => right.cmp(&left),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self {
            raw: value.to_rfc3339_opts(SecondsFormat::Millis, true),
            instant: Some(value),
        }
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl From<Option<String>> for Timestamp {
    fn from(value: Option<String>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.raw
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.instant {
            Some(instant) => write!(f, "{}", instant.format("%Y-%m-%d")),
            None => f.write_str(&self.raw),
        }
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
