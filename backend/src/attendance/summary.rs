use std::collections::BTreeMap;

use crate::models::{
    calendar::CalendarDay,
    grid::DayTotals,
    status::DayStatus,
};

/// Per-day headcount by kind across all employee rows.
///
/// Every row in `resolved` must be aligned with `days`.
pub fn daily_totals(days: &[CalendarDay], resolved: &[Vec<DayStatus>]) -> Vec<DayTotals> {
    days.iter()
        .enumerate()
        .map(|(idx, day)| {
            let mut counts = BTreeMap::new();
            for status in resolved.iter().filter_map(|row| row.get(idx)) {
                *counts.entry(status.kind).or_insert(0) += 1;
            }
            DayTotals {
                date: day.date,
                counts,
            }
        })
        .collect()
}
