use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::models::common::{lenient_date, lenient_string};

/// Request lifecycle status. Only `Pending` and `Approved` take part in
/// resolution; anything else the caller forwards is carried as `Inactive`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum RequestStatus {
    Pending,
    Approved,
    Inactive,
}

impl RequestStatus {
    pub fn is_active(self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::Approved)
    }

    pub fn is_pending(self) -> bool {
        matches!(self, RequestStatus::Pending)
    }
}

impl From<String> for RequestStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => RequestStatus::Pending,
            "approved" => RequestStatus::Approved,
            _ => RequestStatus::Inactive,
        }
    }
}

/// Ranged absence request (sick, annual leave, permission, ...).
/// Both bounds are inclusive calendar dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLeaveRecord {
    pub profile_id: Uuid,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<Date>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<Date>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub leave_type: String,
    pub status: RequestStatus,
}

impl RawLeaveRecord {
    /// Inclusive `(first, last)` days covered by the record.
    ///
    /// A missing start falls back to the end date; a missing or inverted end
    /// collapses the record onto its first day. `None` when neither date is
    /// usable.
    pub fn covered_days(&self) -> Option<(Date, Date)> {
        let first = self.start_date.or(self.end_date)?;
        let last = match self.end_date {
            Some(end) if end >= first => end,
            _ => first,
        };
        Some((first, last))
    }
}

/// Single-day request (WFH, WFA, overtime, business trip, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOtherRecord {
    pub profile_id: Uuid,
    #[serde(default, deserialize_with = "lenient_date")]
    pub request_date: Option<Date>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub request_type: String,
    pub status: RequestStatus,
}
