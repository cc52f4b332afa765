use uuid::Uuid;

use crate::{
    attendance::normalize::EventSet,
    models::{
        calendar::CalendarDay,
        status::{DayStatus, StatusEvent, StatusKind},
    },
};

/// Picks the single status for one employee on one calendar day.
///
/// The highest-precedence event wins (sick first, pending last). With no
/// event at all the day falls back to `off` on weekends and holidays and
/// `office` otherwise. Any event, overtime on a Saturday included, beats the
/// fallback.
pub fn resolve_day(events: &[StatusEvent], day: &CalendarDay) -> DayStatus {
    let kind = events
        .iter()
        .min_by_key(|e| e.priority())
        .map(|e| e.kind)
        .unwrap_or(if day.is_day_off() {
            StatusKind::Off
        } else {
            StatusKind::Office
        });

    DayStatus {
        date: day.date,
        kind,
        is_day_off: day.is_day_off(),
    }
}

/// One `DayStatus` per window day, in window order.
pub fn resolve_employee(events: &EventSet, employee_id: Uuid, days: &[CalendarDay]) -> Vec<DayStatus> {
    days.iter()
        .map(|day| resolve_day(events.for_day(employee_id, day.date), day))
        .collect()
}
