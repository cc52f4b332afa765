use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    attendance::HolidayCalendar,
    error::Result,
    models::{calendar::Holiday, common::HolidayQuery},
};

pub async fn list(
    State(holidays): State<Arc<HolidayCalendar>>,
    Query(q): Query<HolidayQuery>,
) -> Result<Json<Vec<Holiday>>> {
    Ok(Json(holidays.list(q.year)))
}
