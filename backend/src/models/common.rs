use serde::{Deserialize, Deserializer};
use time::{macros::format_description, Date};

/// Query params for the calendar header endpoint.
/// `anchor_date` defaults to today in the configured timezone.
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub anchor_date: Option<Date>,
    pub days: Option<u32>,
}

/// Optional year filter for the holiday listing.
#[derive(Debug, Deserialize)]
pub struct HolidayQuery {
    pub year: Option<i32>,
}

/// Reads a calendar date from its leading `YYYY-MM-DD` part.
///
/// Anything that is not a string, or whose prefix is not a valid date,
/// becomes `None` instead of failing the whole payload. A timestamp such as
/// `2026-01-13T23:30:00+07:00` reads as 2026-01-13; no timezone conversion is
/// applied, so the calendar day never shifts.
pub fn parse_calendar_date(raw: &str) -> Option<Date> {
    let prefix = raw.trim().get(..10)?;
    Date::parse(prefix, format_description!("[year]-[month]-[day]")).ok()
}

pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => parse_calendar_date(&s),
        _ => None,
    })
}

/// Reads a free-text field, treating `null` the same as a missing key.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lowercases and trims a free-text type string for keyword matching.
pub fn normalize_keyword(raw: &str) -> String {
    raw.trim().to_lowercase()
}
