//! Date and time-of-day validation for event fields.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use omni_core::error::AppError;
use omni_core::result::AppResult;

/// Outcome of validating an event's date and time fields.
///
/// Collects one message per invalid field so a form can surface all
/// problems at once instead of stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeValidation {
    /// Field name to human-readable message, for every invalid field.
    pub errors: BTreeMap<&'static str, String>,
}

impl TimeValidation {
    /// Whether every field passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Join the per-field messages into a single line.
    pub fn message(&self) -> String {
        self.errors
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validate an event's date and start/end times.
///
/// Accepts `YYYY-MM-DD` or RFC 3339 timestamp dates (lab payloads
/// carry exam dates as timestamps) and `HH:MM` times. An end time earlier
/// than the start time is deliberately accepted; the booking flow
/// treats the ordering of the two times as the caller's business.
pub fn validate_event_times(date: &str, start_time: &str, end_time: &str) -> TimeValidation {
    let mut errors = BTreeMap::new();

    if date.trim().is_empty() {
        errors.insert("date", "Data é obrigatória".to_string());
    } else if parse_date(date).is_none() && parse_timestamp(date).is_none() {
        errors.insert("date", "Data inválida".to_string());
    }

    if start_time.trim().is_empty() {
        errors.insert("startTime", "Hora de início é obrigatória".to_string());
    } else if parse_time(start_time).is_none() {
        errors.insert("startTime", "Hora de início inválida".to_string());
    }

    if end_time.trim().is_empty() {
        errors.insert("endTime", "Hora de término é obrigatória".to_string());
    } else if parse_time(end_time).is_none() {
        errors.insert("endTime", "Hora de término inválida".to_string());
    }

    TimeValidation { errors }
}

/// Normalize a raw date input to a UTC calendar date.
///
/// Plain `YYYY-MM-DD` input is taken as-is. A full timestamp is
/// anchored to noon of its local day before converting to UTC, so a
/// midnight-truncated timestamp cannot shift the event to the
/// neighboring day.
pub fn normalize_event_date(raw: &str) -> AppResult<NaiveDate> {
    if let Some(date) = parse_date(raw) {
        return Ok(date);
    }
    let parsed = parse_timestamp(raw)
        .ok_or_else(|| AppError::validation(format!("Invalid event date: '{raw}'")))?;
    let noon = parsed
        .date_naive()
        .and_hms_opt(12, 0, 0)
        .and_then(|dt| dt.and_local_timezone(parsed.timezone()).single())
        .ok_or_else(|| AppError::validation(format!("Invalid event date: '{raw}'")))?;
    Ok(noon.with_timezone(&Utc).date_naive())
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn parse_timestamp(s: &str) -> Option<DateTime<chrono::FixedOffset>> {
    DateTime::parse_from_rfc3339(s.trim()).ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}
