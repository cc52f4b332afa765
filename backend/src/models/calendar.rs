use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

use crate::models::common::lenient_date;

/// One header cell of the window.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: Date,
    pub weekday: Weekday,
    pub is_weekend: bool,
    pub holiday_name: Option<String>,
}

impl CalendarDay {
    /// Weekend or named holiday: the fallback for an eventless day is `off`.
    pub fn is_day_off(&self) -> bool {
        self.is_weekend || self.holiday_name.is_some()
    }
}

/// Holiday table entry. Entries with an unreadable date are dropped on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Holiday {
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<Date>,
    pub name: String,
}
