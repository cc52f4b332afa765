use std::collections::BTreeMap;

use time::Date;
use uuid::Uuid;

use crate::models::{
    common::normalize_keyword,
    request::{RawLeaveRecord, RawOtherRecord},
    status::{EventSource, StatusEvent, StatusKind},
};

/// Leave type keyword families, checked top to bottom; first match wins.
const LEAVE_KEYWORDS: &[(StatusKind, &[&str])] = &[
    (StatusKind::Sick, &["sakit", "sick"]),
    (StatusKind::AnnualLeave, &["cuti", "annual", "maternity"]),
    (StatusKind::Permission, &["izin", "permission"]),
    (StatusKind::BusinessTrip, &["dinas", "trip"]),
    (StatusKind::Wfh, &["wfh"]),
    (StatusKind::Wfa, &["wfa"]),
];

/// Other-request type keyword families, same matching rules.
const OTHER_KEYWORDS: &[(StatusKind, &[&str])] = &[
    (StatusKind::Wfh, &["wfh"]),
    (StatusKind::Wfa, &["wfa"]),
    (StatusKind::Overtime, &["overtime", "lembur"]),
    (StatusKind::BusinessTrip, &["dinas", "business_trip"]),
];

fn match_keywords(raw: &str, table: &[(StatusKind, &[&str])]) -> Option<StatusKind> {
    let needle = normalize_keyword(raw);
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| needle.contains(k)))
        .map(|(kind, _)| *kind)
}

/// Maps a free-text leave type; unknown types count as `permission`.
pub fn leave_kind(leave_type: &str) -> StatusKind {
    match_keywords(leave_type, LEAVE_KEYWORDS).unwrap_or(StatusKind::Permission)
}

/// Maps a free-text other-request type; unknown types count as `office`.
pub fn other_kind(request_type: &str) -> StatusKind {
    match_keywords(request_type, OTHER_KEYWORDS).unwrap_or(StatusKind::Office)
}

/// Inclusive date range used to skip days nobody will look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub first: Date,
    pub last: Date,
}

impl DateBounds {
    pub fn contains(&self, date: Date) -> bool {
        self.first <= date && date <= self.last
    }
}

/// Normalized events grouped by (employee, date).
///
/// Several events may share a key; collapsing them is the resolver's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSet {
    by_day: BTreeMap<(Uuid, Date), Vec<StatusEvent>>,
}

impl EventSet {
    pub fn for_day(&self, employee_id: Uuid, date: Date) -> &[StatusEvent] {
        self.by_day
            .get(&(employee_id, date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEvent> {
        self.by_day.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_day.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }

    fn push(&mut self, event: StatusEvent) {
        self.by_day
            .entry((event.employee_id, event.date))
            .or_default()
            .push(event);
    }

    fn has_suppressing_leave(&self, employee_id: Uuid, date: Date) -> bool {
        self.for_day(employee_id, date)
            .iter()
            .any(|e| e.source == EventSource::Leave && e.kind.suppresses_other_requests())
    }
}

/// Turns raw leave and other requests into per-day events.
///
/// Leave records expand to one event per covered day. Other records give one
/// event on their date, unless a sick or annual leave event already occupies
/// that employee/day, in which case the other record is dropped. Pending
/// records of either shape always produce `pending`.
///
/// `bounds` only trims work; events inside the bounds are identical to an
/// unbounded run.
pub fn normalize(
    leave_records: &[RawLeaveRecord],
    other_records: &[RawOtherRecord],
    bounds: Option<DateBounds>,
) -> EventSet {
    let mut events = EventSet::default();

    for record in leave_records.iter().filter(|r| r.status.is_active()) {
        let Some((mut first, mut last)) = record.covered_days() else {
            tracing::debug!(
                profile_id = %record.profile_id,
                "Skipping leave record without a usable date"
            );
            continue;
        };
        if let Some(b) = bounds {
            first = first.max(b.first);
            last = last.min(b.last);
        }

        let kind = if record.status.is_pending() {
            StatusKind::Pending
        } else {
            leave_kind(&record.leave_type)
        };

        let mut day = Some(first);
        while let Some(date) = day.filter(|d| *d <= last) {
            events.push(StatusEvent {
                employee_id: record.profile_id,
                date,
                kind,
                source: EventSource::Leave,
            });
            day = date.next_day();
        }
    }

    for record in other_records.iter().filter(|r| r.status.is_active()) {
        let Some(date) = record.request_date else {
            tracing::debug!(
                profile_id = %record.profile_id,
                "Skipping other request without a usable date"
            );
            continue;
        };
        if bounds.is_some_and(|b| !b.contains(date)) {
            continue;
        }
        if events.has_suppressing_leave(record.profile_id, date) {
            tracing::debug!(
                profile_id = %record.profile_id,
                %date,
                request_type = %record.request_type,
                "Dropping other request shadowed by leave"
            );
            continue;
        }

        let kind = if record.status.is_pending() {
            StatusKind::Pending
        } else {
            other_kind(&record.request_type)
        };

        events.push(StatusEvent {
            employee_id: record.profile_id,
            date,
            kind,
            source: EventSource::Other,
        });
    }

    events
}
