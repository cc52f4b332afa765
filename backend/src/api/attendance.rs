use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    attendance::{build_grid, window::generate_window, GridInput},
    error::{AppError, Result},
    models::{
        calendar::CalendarDay,
        common::WindowQuery,
        grid::{AttendanceGrid, GridRequest},
        status::{StatusDisplay, StatusKind},
    },
    AppState,
};

/// Resolves and compresses the attendance grid for the posted records.
pub async fn grid(
    State(state): State<AppState>,
    Json(body): Json<GridRequest>,
) -> Result<Json<AttendanceGrid>> {
    use validator::Validate;
    body.validate()?;

    let window_days = state.window_len(body.window_days)?;
    let anchor_date = body.anchor_date.unwrap_or_else(|| state.today());
    let holidays = state.holidays.clone();

    tracing::info!(
        employees = body.employees.len(),
        leave_records = body.leave_records.len(),
        other_records = body.other_records.len(),
        %anchor_date,
        window_days,
        "Building attendance grid"
    );

    let grid = tokio::task::spawn_blocking(move || {
        let input = GridInput {
            employees: &body.employees,
            leave_records: &body.leave_records,
            other_records: &body.other_records,
            anchor_date,
            window_days,
        };
        build_grid(&input, &holidays)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(grid))
}

/// Calendar header cells for a window, without any employee data.
pub async fn window(
    State(state): State<AppState>,
    Query(q): Query<WindowQuery>,
) -> Result<Json<Vec<CalendarDay>>> {
    let days = state.window_len(q.days)?;
    let anchor = q.anchor_date.unwrap_or_else(|| state.today());

    Ok(Json(generate_window(anchor, days, &state.holidays)))
}

pub async fn status_kinds() -> Json<Vec<StatusDisplay>> {
    Json(StatusKind::ALL.iter().map(|k| k.display()).collect())
}
