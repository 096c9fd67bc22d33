use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::core::differ::calendar_diff;
use crate::core::{DateTimeInput, MessageLookup, TimeUnit, MESSAGE_DOMAIN};
use crate::utils::error::{Result, TimeDiffError};

/// Formats the difference between two instants as a human-readable,
/// localized message.
///
/// Only the most significant non-zero calendar unit is reported; message
/// resolution is delegated to the `MessageLookup` collaborator.
pub struct DateTimeFormatter<L: MessageLookup> {
    lookup: L,
}

impl<L: MessageLookup> DateTimeFormatter<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Formats the diff read as `to` minus `from`: a `to` in the future of
    /// `from` yields an "in ..." message, a `to` in its past an "... ago"
    /// message, and instants less than a second apart the empty-diff
    /// message.
    pub fn format_diff(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        locale: Option<&str>,
    ) -> Result<String> {
        let diff = calendar_diff(from, to);

        match diff.dominant() {
            Some((unit, count)) => {
                tracing::debug!("selected unit '{}' with count {}", unit, count);
                self.resolve_diff_message(count, diff.invert, unit, locale)
            }
            None => {
                tracing::debug!("no unit differs, using the empty diff message");
                self.get_empty_diff_message(locale)
            }
        }
    }

    /// Convenience form of `format_diff` that accepts anything convertible
    /// to a date/time input: instants, Unix timestamps or strings.
    pub fn format_diff_from_inputs(
        &self,
        from: impl Into<DateTimeInput>,
        to: impl Into<DateTimeInput>,
        locale: Option<&str>,
    ) -> Result<String> {
        let from = from.into().resolve()?;
        let to = to.into().resolve()?;
        self.format_diff(from, to, locale)
    }

    /// Returns the diff message for an explicit count and unit name.
    ///
    /// The unit is matched case-insensitively against the six supported
    /// names. A zero count is rejected: it has no direction and belongs to
    /// the empty-diff path.
    pub fn get_diff_message(
        &self,
        count: u32,
        invert: bool,
        unit: &str,
        locale: Option<&str>,
    ) -> Result<String> {
        if count == 0 {
            return Err(TimeDiffError::ZeroCountError);
        }

        let unit = unit.parse::<TimeUnit>()?;
        self.resolve_diff_message(count, invert, unit, locale)
    }

    /// Returns the message used when no calendar unit differs.
    pub fn get_empty_diff_message(&self, locale: Option<&str>) -> Result<String> {
        let message = self
            .lookup
            .lookup("diff.empty", &HashMap::new(), MESSAGE_DOMAIN, locale)?;
        Ok(message)
    }

    /// Normalizes any supported input into an instant.
    pub fn get_date_time_object(&self, input: impl Into<DateTimeInput>) -> Result<NaiveDateTime> {
        input.into().resolve()
    }

    fn resolve_diff_message(
        &self,
        count: u32,
        invert: bool,
        unit: TimeUnit,
        locale: Option<&str>,
    ) -> Result<String> {
        let direction = if invert { "ago" } else { "in" };
        let key = format!("diff.{}.{}", direction, unit);
        let params = HashMap::from([("%count%".to_string(), serde_json::Value::from(count))]);

        let message = self.lookup.lookup(&key, &params, MESSAGE_DOMAIN, locale)?;
        Ok(message)
    }
}
