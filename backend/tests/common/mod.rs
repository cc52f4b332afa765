#![allow(dead_code)]
use std::{net::SocketAddr, sync::Arc};

use attendance_backend::{
    api,
    attendance::HolidayCalendar,
    models::{
        employee::Employee,
        request::{RawLeaveRecord, RawOtherRecord, RequestStatus},
        status::StatusRun,
    },
    AppState,
};
use time::Date;
use uuid::Uuid;

pub const MAX_WINDOW_DAYS: u32 = 62;

pub fn test_state() -> AppState {
    AppState {
        holidays: Arc::new(HolidayCalendar::national()),
        timezone: chrono_tz::Asia::Jakarta,
        window_days: 7,
        max_window_days: MAX_WINDOW_DAYS,
    }
}

/// Spin up a real Axum server on a random port and return its address.
/// The app holds no state between requests, so every test gets its own.
pub async fn setup_test_app() -> SocketAddr {
    let app = api::router(test_state());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Build a reqwest client (reusable across requests in a test).
pub fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

pub fn employee(name: &str) -> Employee {
    Employee::new(Uuid::new_v4(), name, "Staff")
}

pub fn leave(
    employee: &Employee,
    start: Date,
    end: Date,
    leave_type: &str,
    status: RequestStatus,
) -> RawLeaveRecord {
    RawLeaveRecord {
        profile_id: employee.id,
        start_date: Some(start),
        end_date: Some(end),
        leave_type: leave_type.to_string(),
        status,
    }
}

pub fn other(employee: &Employee, date: Date, request_type: &str, status: RequestStatus) -> RawOtherRecord {
    RawOtherRecord {
        profile_id: employee.id,
        request_date: Some(date),
        request_type: request_type.to_string(),
        status,
    }
}

/// Expand runs back to one kind per day, for comparing against resolver output.
pub fn expand_runs(runs: &[StatusRun]) -> Vec<(Date, attendance_backend::models::status::StatusKind)> {
    let mut out = Vec::new();
    for run in runs {
        let mut date = run.start_date;
        for _ in 0..run.span_length {
            out.push((date, run.status_kind));
            date = date.next_day().unwrap();
        }
    }
    out
}
