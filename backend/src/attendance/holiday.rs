use std::collections::BTreeMap;

use time::{macros::date, Date};

use crate::models::calendar::Holiday;

/// Indonesian national holidays and collective leave days observed by the
/// office.
const NATIONAL_HOLIDAYS: &[(Date, &str)] = &[
    (date!(2025 - 01 - 01), "New Year's Day"),
    (date!(2025 - 01 - 27), "Isra Mi'raj"),
    (date!(2025 - 01 - 29), "Chinese New Year"),
    (date!(2025 - 03 - 29), "Nyepi"),
    (date!(2025 - 03 - 31), "Eid al-Fitr"),
    (date!(2025 - 04 - 01), "Eid al-Fitr"),
    (date!(2025 - 04 - 18), "Good Friday"),
    (date!(2025 - 04 - 20), "Easter Sunday"),
    (date!(2025 - 05 - 01), "Labour Day"),
    (date!(2025 - 05 - 12), "Vesak Day"),
    (date!(2025 - 05 - 29), "Ascension of Jesus Christ"),
    (date!(2025 - 06 - 01), "Pancasila Day"),
    (date!(2025 - 06 - 06), "Eid al-Adha"),
    (date!(2025 - 06 - 27), "Islamic New Year"),
    (date!(2025 - 08 - 17), "Independence Day"),
    (date!(2025 - 09 - 05), "Prophet Muhammad's Birthday"),
    (date!(2025 - 12 - 25), "Christmas Day"),
    (date!(2026 - 01 - 01), "New Year's Day"),
    (date!(2026 - 01 - 16), "Isra Mi'raj"),
    (date!(2026 - 02 - 17), "Chinese New Year"),
    (date!(2026 - 03 - 19), "Nyepi"),
    (date!(2026 - 03 - 20), "Eid al-Fitr"),
    (date!(2026 - 03 - 21), "Eid al-Fitr"),
    (date!(2026 - 04 - 03), "Good Friday"),
    (date!(2026 - 04 - 05), "Easter Sunday"),
    (date!(2026 - 05 - 01), "Labour Day"),
    (date!(2026 - 05 - 14), "Ascension of Jesus Christ"),
    (date!(2026 - 05 - 27), "Eid al-Adha"),
    (date!(2026 - 05 - 31), "Vesak Day"),
    (date!(2026 - 06 - 01), "Pancasila Day"),
    (date!(2026 - 06 - 16), "Islamic New Year"),
    (date!(2026 - 08 - 17), "Independence Day"),
    (date!(2026 - 08 - 25), "Prophet Muhammad's Birthday"),
    (date!(2026 - 12 - 25), "Christmas Day"),
];

/// Fixed date -> holiday name lookup.
///
/// Keys are plain calendar dates, so lookups never depend on a timezone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    entries: BTreeMap<Date, String>,
}

impl HolidayCalendar {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in national table.
    pub fn national() -> Self {
        Self::from_entries(
            NATIONAL_HOLIDAYS
                .iter()
                .map(|(date, name)| (*date, name.to_string())),
        )
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Date, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Layers extra entries on top; an extra entry replaces the name of an
    /// existing holiday on the same date. Entries without a readable date are
    /// skipped.
    pub fn with_overrides(mut self, extra: impl IntoIterator<Item = Holiday>) -> Self {
        for holiday in extra {
            match holiday.date {
                Some(date) => {
                    self.entries.insert(date, holiday.name);
                }
                None => tracing::debug!("Skipping holiday {:?} with unreadable date", holiday.name),
            }
        }
        self
    }

    pub fn holiday_name(&self, date: Date) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    pub fn is_holiday(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    /// All entries in date order, optionally restricted to one year.
    pub fn list(&self, year: Option<i32>) -> Vec<Holiday> {
        self.entries
            .iter()
            .filter(|(date, _)| year.map_or(true, |y| date.year() == y))
            .map(|(date, name)| Holiday {
                date: Some(*date),
                name: name.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
