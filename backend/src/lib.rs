pub mod api;
pub mod attendance;
pub mod config;
pub mod error;
pub mod models;

use std::sync::Arc;

use chrono::Datelike;
use chrono_tz::Tz;

use crate::attendance::HolidayCalendar;

/// Shared application state available to all handlers via axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    pub holidays: Arc<HolidayCalendar>,
    pub timezone: Tz,
    pub window_days: u32,
    pub max_window_days: u32,
}

impl AppState {
    pub fn from_config(cfg: &config::Config) -> anyhow::Result<Self> {
        let extra = cfg.load_extra_holidays()?;
        if !extra.is_empty() {
            tracing::info!("Loaded {} company holidays", extra.len());
        }

        Ok(Self {
            holidays: Arc::new(HolidayCalendar::national().with_overrides(extra)),
            timezone: cfg.timezone,
            window_days: cfg.window_days,
            max_window_days: cfg.max_window_days,
        })
    }

    /// Today's calendar date in the configured timezone.
    pub fn today(&self) -> time::Date {
        let local = chrono::Utc::now().with_timezone(&self.timezone).date_naive();
        time::Month::try_from(local.month() as u8)
            .and_then(|month| time::Date::from_calendar_date(local.year(), month, local.day() as u8))
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc().date())
    }

    /// Requested window length, defaulted and checked against the configured cap.
    pub fn window_len(&self, requested: Option<u32>) -> error::Result<u32> {
        let days = requested.unwrap_or(self.window_days);
        if days == 0 || days > self.max_window_days {
            return Err(error::AppError::BadRequest(format!(
                "Window must be between 1 and {} days",
                self.max_window_days
            )));
        }
        Ok(days)
    }
}

impl axum::extract::FromRef<AppState> for Arc<HolidayCalendar> {
    fn from_ref(state: &AppState) -> Self {
        state.holidays.clone()
    }
}
