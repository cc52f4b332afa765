use time::Date;

use crate::{
    attendance::{
        compress::compress_runs,
        holiday::HolidayCalendar,
        normalize::{normalize, DateBounds, EventSet},
        resolve::resolve_employee,
        summary::daily_totals,
        window::generate_window,
    },
    models::{
        employee::Employee,
        grid::{AttendanceGrid, EmployeeRow},
        request::{RawLeaveRecord, RawOtherRecord},
    },
};

/// Everything one grid pass reads. Borrowed; nothing is retained between calls.
#[derive(Debug, Clone, Copy)]
pub struct GridInput<'a> {
    pub employees: &'a [Employee],
    pub leave_records: &'a [RawLeaveRecord],
    pub other_records: &'a [RawOtherRecord],
    pub anchor_date: Date,
    pub window_days: u32,
}

/// Builds the weekly attendance grid.
///
/// Window -> normalized events -> per-day resolution -> run compression, one
/// row per employee in input order. Rows are independent of each other; an
/// employee with no records still gets a full row of `office`/`off` cells.
pub fn build_grid(input: &GridInput<'_>, holidays: &HolidayCalendar) -> AttendanceGrid {
    let days = generate_window(input.anchor_date, input.window_days, holidays);

    let bounds = match (days.first(), days.last()) {
        (Some(first), Some(last)) => Some(DateBounds {
            first: first.date,
            last: last.date,
        }),
        _ => None,
    };
    let events = match bounds {
        Some(b) => normalize(input.leave_records, input.other_records, Some(b)),
        None => EventSet::default(),
    };

    let resolved: Vec<_> = input
        .employees
        .iter()
        .map(|employee| resolve_employee(&events, employee.id, &days))
        .collect();

    let rows = input
        .employees
        .iter()
        .zip(&resolved)
        .map(|(employee, statuses)| EmployeeRow {
            employee: employee.clone(),
            runs: compress_runs(statuses),
        })
        .collect();

    let daily_totals = daily_totals(&days, &resolved);

    tracing::debug!(
        employees = input.employees.len(),
        days = days.len(),
        events = events.len(),
        "Built attendance grid"
    );

    AttendanceGrid {
        days,
        rows,
        daily_totals,
    }
}
