use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;
use validator::Validate;

use crate::models::{
    calendar::CalendarDay,
    employee::Employee,
    request::{RawLeaveRecord, RawOtherRecord},
    status::{StatusKind, StatusRun},
};

/// Body of `POST /api/attendance/grid`.
#[derive(Debug, Deserialize, Validate)]
pub struct GridRequest {
    #[validate(length(max = 1000, message = "at most 1000 employees per grid"))]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub leave_records: Vec<RawLeaveRecord>,
    #[serde(default)]
    pub other_records: Vec<RawOtherRecord>,
    pub anchor_date: Option<Date>,
    #[validate(range(min = 1, max = 366, message = "window_days must be between 1 and 366"))]
    pub window_days: Option<u32>,
}

/// One employee's row of merged cells, in day order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmployeeRow {
    pub employee: Employee,
    pub runs: Vec<StatusRun>,
}

/// Headcount per kind for one day. Zero counts are omitted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayTotals {
    pub date: Date,
    pub counts: BTreeMap<StatusKind, u32>,
}

impl DayTotals {
    pub fn count(&self, kind: StatusKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttendanceGrid {
    pub days: Vec<CalendarDay>,
    pub rows: Vec<EmployeeRow>,
    pub daily_totals: Vec<DayTotals>,
}

impl AttendanceGrid {
    pub fn row(&self, employee_id: uuid::Uuid) -> Option<&EmployeeRow> {
        self.rows.iter().find(|r| r.employee.id == employee_id)
    }
}
