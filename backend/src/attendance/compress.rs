use crate::models::status::{DayStatus, StatusRun};

/// Run-length encodes one employee's day sequence into display cells.
///
/// Mergeable kinds extend greedily while the next day is the calendar day
/// after the previous one and carries the same kind. `office`, `off` and
/// `pending` always stay single-day cells. Spans sum to `days.len()`.
pub fn compress_runs(days: &[DayStatus]) -> Vec<StatusRun> {
    let mut runs = Vec::new();
    let mut i = 0;

    while i < days.len() {
        let head = days[i];
        let mut span = 1;

        if head.kind.is_mergeable() {
            let mut prev = head.date;
            while let Some(next) = days.get(i + span) {
                if next.kind != head.kind || prev.next_day() != Some(next.date) {
                    break;
                }
                prev = next.date;
                span += 1;
            }
        }

        runs.push(StatusRun {
            status_kind: head.kind,
            start_date: head.date,
            span_length: span as u32,
        });
        i += span;
    }

    runs
}
