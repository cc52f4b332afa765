use serde::{Deserialize, Serialize};
use time::{Date, Duration};
use uuid::Uuid;

/// Canonical daily attendance state.
///
/// Declaration order is resolution precedence for event-backed kinds: an
/// earlier variant beats a later one when several events land on the same
/// employee/day. `Off` is never produced by an event, only by the calendar
/// fallback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Sick,
    AnnualLeave,
    Permission,
    BusinessTrip,
    Wfh,
    Wfa,
    Overtime,
    Pending,
    Office,
    Off,
}

impl StatusKind {
    pub const ALL: [StatusKind; 10] = [
        StatusKind::Sick,
        StatusKind::AnnualLeave,
        StatusKind::Permission,
        StatusKind::BusinessTrip,
        StatusKind::Wfh,
        StatusKind::Wfa,
        StatusKind::Overtime,
        StatusKind::Pending,
        StatusKind::Office,
        StatusKind::Off,
    ];

    /// Lower rank wins.
    pub fn precedence(self) -> u8 {
        self as u8
    }

    /// Only event-backed, decided kinds merge into multi-day cells. Fallback
    /// days (`office`, `off`) and unresolved requests render one cell per day.
    pub fn is_mergeable(self) -> bool {
        !matches!(self, StatusKind::Office | StatusKind::Pending | StatusKind::Off)
    }

    /// Leave-system kinds that outrank same-day other-request declarations.
    pub fn suppresses_other_requests(self) -> bool {
        matches!(self, StatusKind::Sick | StatusKind::AnnualLeave)
    }

    /// Presentation lookup. Not consulted anywhere in resolution.
    pub fn display(self) -> StatusDisplay {
        let (label, icon, color) = match self {
            StatusKind::Sick => ("Sick", "thermometer", "red"),
            StatusKind::AnnualLeave => ("Annual Leave", "palm-tree", "amber"),
            StatusKind::Permission => ("Permission", "file-check", "orange"),
            StatusKind::BusinessTrip => ("Business Trip", "plane", "indigo"),
            StatusKind::Wfh => ("WFH", "home", "sky"),
            StatusKind::Wfa => ("WFA", "globe", "teal"),
            StatusKind::Overtime => ("Overtime", "clock", "violet"),
            StatusKind::Pending => ("Pending", "hourglass", "slate"),
            StatusKind::Office => ("Office", "building", "emerald"),
            StatusKind::Off => ("Off", "moon", "gray"),
        };
        StatusDisplay {
            kind: self,
            label,
            icon,
            color,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusDisplay {
    pub kind: StatusKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Which record shape an event was normalized from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    Leave,
    Other,
}

/// One normalized (employee, date, kind) fact.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusEvent {
    pub employee_id: Uuid,
    pub date: Date,
    pub kind: StatusKind,
    pub source: EventSource,
}

impl StatusEvent {
    /// Sort key for resolution: kind first, then leave before other.
    pub fn priority(&self) -> (u8, EventSource) {
        (self.kind.precedence(), self.source)
    }
}

/// Resolved status for one employee on one date.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DayStatus {
    pub date: Date,
    pub kind: StatusKind,
    /// Weekend or holiday. Informational; an explicit event still wins.
    pub is_day_off: bool,
}

/// A merged cell: `span` consecutive days of the same kind from `start_date`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusRun {
    pub status_kind: StatusKind,
    pub start_date: Date,
    pub span_length: u32,
}

impl StatusRun {
    /// Last day covered by the run (inclusive).
    pub fn end_date(&self) -> Date {
        let extra = i64::from(self.span_length.saturating_sub(1));
        self.start_date
            .checked_add(Duration::days(extra))
            .unwrap_or(Date::MAX)
    }
}
