use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::utils::error::{Result, TimeDiffError};

/// Domain tag passed to the message lookup with every diff key.
pub const MESSAGE_DOMAIN: &str = "time";

/// Calendar units a diff can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    /// Units ordered most significant first. Message selection walks this
    /// table and stops at the first non-zero magnitude.
    pub const DESCENDING: [TimeUnit; 6] = [
        TimeUnit::Year,
        TimeUnit::Month,
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Month => "month",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = TimeDiffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "year" => Ok(TimeUnit::Year),
            "month" => Ok(TimeUnit::Month),
            "day" => Ok(TimeUnit::Day),
            "hour" => Ok(TimeUnit::Hour),
            "minute" => Ok(TimeUnit::Minute),
            "second" => Ok(TimeUnit::Second),
            other => Err(TimeDiffError::UnsupportedUnitError {
                unit: other.to_string(),
            }),
        }
    }
}

/// Field-wise calendar difference between two instants.
///
/// Magnitudes are non-negative; `invert` carries the direction and is true
/// when the `from` instant lies after the `to` instant. When every
/// magnitude is zero the direction is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDiff {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub invert: bool,
}

impl CalendarDiff {
    pub const fn magnitude(&self, unit: TimeUnit) -> u32 {
        match unit {
            TimeUnit::Year => self.years,
            TimeUnit::Month => self.months,
            TimeUnit::Day => self.days,
            TimeUnit::Hour => self.hours,
            TimeUnit::Minute => self.minutes,
            TimeUnit::Second => self.seconds,
        }
    }

    /// The most significant non-zero unit and its magnitude, or `None`
    /// when every field is zero.
    pub fn dominant(&self) -> Option<(TimeUnit, u32)> {
        TimeUnit::DESCENDING
            .into_iter()
            .map(|unit| (unit, self.magnitude(unit)))
            .find(|(_, count)| *count != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.dominant().is_none()
    }
}

/// Inputs the formatter normalizes into an instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeInput {
    DateTime(NaiveDateTime),
    Timestamp(i64),
    Text(String),
}

impl DateTimeInput {
    /// Normalizes to a `NaiveDateTime`. Instants pass through unchanged,
    /// timestamps convert at second resolution, and strings run through
    /// the supported parse formats.
    pub fn resolve(self) -> Result<NaiveDateTime> {
        match self {
            DateTimeInput::DateTime(value) => Ok(value),
            DateTimeInput::Timestamp(timestamp) => DateTime::<Utc>::from_timestamp(timestamp, 0)
                .map(|utc| utc.naive_utc())
                .ok_or(TimeDiffError::TimestampRangeError { timestamp }),
            DateTimeInput::Text(text) => parse_date_time(&text),
        }
    }
}

impl From<NaiveDateTime> for DateTimeInput {
    fn from(value: NaiveDateTime) -> Self {
        DateTimeInput::DateTime(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateTimeInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateTimeInput::DateTime(value.naive_utc())
    }
}

impl From<i64> for DateTimeInput {
    fn from(value: i64) -> Self {
        DateTimeInput::Timestamp(value)
    }
}

impl From<&str> for DateTimeInput {
    fn from(value: &str) -> Self {
        DateTimeInput::Text(value.to_string())
    }
}

impl From<String> for DateTimeInput {
    fn from(value: String) -> Self {
        DateTimeInput::Text(value)
    }
}

/// Parse formats tried for string inputs, most specific first. Only the
/// last format's error surfaces when nothing matches.
fn parse_date_time(text: &str) -> Result<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Ok(parsed);
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(parsed.and_time(NaiveTime::MIN));
    }
    let parsed = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")?;
    Ok(parsed)
}
