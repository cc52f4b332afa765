use time::{Date, Duration, Weekday};

use crate::{attendance::holiday::HolidayCalendar, models::calendar::CalendarDay};

const MAX_RESERVED_DAYS: u32 = 366;

/// Monday on or before `anchor` (ISO week start).
pub fn week_start(anchor: Date) -> Date {
    let back = i64::from(anchor.weekday().number_days_from_monday());
    anchor.checked_sub(Duration::days(back)).unwrap_or(anchor)
}

/// Weekly view: `length` days starting on the Monday of `anchor`'s week.
///
/// Pure: the same anchor, length and calendar always yield the same window.
pub fn generate_window(anchor: Date, length: u32, holidays: &HolidayCalendar) -> Vec<CalendarDay> {
    days_from(week_start(anchor), length, holidays)
}

/// `length` consecutive days starting exactly at `start`, no alignment.
pub fn days_from(start: Date, length: u32, holidays: &HolidayCalendar) -> Vec<CalendarDay> {
    // Reservation is capped; the loop still stops at `Date::MAX`.
    let mut days = Vec::with_capacity(length.min(MAX_RESERVED_DAYS) as usize);
    let mut current = Some(start);

    while let Some(date) = current {
        if days.len() == length as usize {
            break;
        }
        days.push(calendar_day(date, holidays));
        current = date.next_day();
    }

    days
}

pub fn calendar_day(date: Date, holidays: &HolidayCalendar) -> CalendarDay {
    let weekday = date.weekday();
    CalendarDay {
        date,
        weekday,
        is_weekend: matches!(weekday, Weekday::Saturday | Weekday::Sunday),
        holiday_name: holidays.holiday_name(date).map(str::to_string),
    }
}
