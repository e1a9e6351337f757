//! Calendar mapping for the programme horizon.
//!
//! Pure date arithmetic: projects {week, weekday} grid coordinates
//! onto calendar dates, rounds start dates up to Mondays, and judges
//! staff availability against the programme span. Nothing here holds
//! state; every function is a plain mapping from inputs to a value.
//!
//! # Horizon
//! The horizon is fixed: [`PROGRAMME_WEEKS`] weeks of Monday-Thursday
//! delivery, [`PROGRAMME_SPAN_DAYS`] days from week-1 Monday to the
//! programme end.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Weekday;

/// Number of delivery weeks in a programme.
pub const PROGRAMME_WEEKS: u32 = 10;

/// Days from week-1 Monday to the programme end (10 calendar weeks).
pub const PROGRAMME_SPAN_DAYS: i64 = 70;

/// One resolved grid cell: a week and weekday pinned to a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMappingEntry {
    /// Programme week, 1-based.
    pub week: u32,
    /// Delivery day.
    pub day: Weekday,
    /// Calendar date of that cell.
    pub date: NaiveDate,
}

/// The full week-by-day date table for one programme run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateMapping {
    /// Week-1 Monday the table was generated from.
    pub adjusted_start: NaiveDate,
    /// All 40 cells, week-major, weekday-minor.
    pub entries: Vec<DateMappingEntry>,
}

impl DateMapping {
    /// Looks up the date for a grid cell.
    pub fn date_for(&self, week: u32, day: Weekday) -> Option<NaiveDate> {
        self.entries
            .iter()
            .find(|e| e.week == week && e.day == day)
            .map(|e| e.date)
    }
}

/// Whether a date falls on a Monday.
#[inline]
pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == chrono::Weekday::Mon
}

/// Rounds a date up to the next Monday. Mondays pass through unchanged.
pub fn ensure_monday(date: NaiveDate) -> NaiveDate {
    let days_ahead = match date.weekday() {
        chrono::Weekday::Mon => 0,
        chrono::Weekday::Sun => 1,
        other => 8 - i64::from(other.number_from_monday()),
    };
    date + Duration::days(days_ahead)
}

/// Resolves a {week, weekday} coordinate against a week-1 Monday.
pub fn map_weekday_to_date(start_monday: NaiveDate, week: u32, weekday: Weekday) -> NaiveDate {
    let days = i64::from(week.saturating_sub(1)) * 7 + i64::from(weekday.offset());
    start_monday + Duration::days(days)
}

/// Builds the full date table, normalizing the start date first.
///
/// The table always has `PROGRAMME_WEEKS * 4` entries regardless of
/// the input date; a non-Monday start is rounded up before mapping.
pub fn generate_date_mapping(start_date: NaiveDate) -> DateMapping {
    let adjusted_start = ensure_monday(start_date);
    let mut entries = Vec::with_capacity(PROGRAMME_WEEKS as usize * Weekday::ALL.len());
    for week in 1..=PROGRAMME_WEEKS {
        for day in Weekday::ALL {
            entries.push(DateMappingEntry {
                week,
                day,
                date: map_weekday_to_date(adjusted_start, week, day),
            });
        }
    }
    DateMapping {
        adjusted_start,
        entries,
    }
}

/// Whether a staff member's availability start admits them to a
/// programme starting on `programme_start`.
///
/// An absent start date means no restriction. Otherwise the staff
/// member must become available no later than the programme end
/// (`programme_start + PROGRAMME_SPAN_DAYS`, inclusive). The staff
/// availability *end* date is intentionally not consulted here.
pub fn is_staff_available_for_programme(
    staff_available_from: Option<NaiveDate>,
    programme_start: NaiveDate,
) -> bool {
    match staff_available_from {
        None => true,
        Some(from) => from <= programme_start + Duration::days(PROGRAMME_SPAN_DAYS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ensure_monday_passthrough() {
        // 2026-02-09 is a Monday
        assert_eq!(ensure_monday(date(2026, 2, 9)), date(2026, 2, 9));
    }

    #[test]
    fn test_ensure_monday_rounds_up() {
        // Tuesday 2026-02-03 → following Monday
        assert_eq!(ensure_monday(date(2026, 2, 3)), date(2026, 2, 9));
        // Sunday advances a single day
        assert_eq!(ensure_monday(date(2026, 2, 8)), date(2026, 2, 9));
        // Saturday advances two days
        assert_eq!(ensure_monday(date(2026, 2, 7)), date(2026, 2, 9));
        // Friday
        assert_eq!(ensure_monday(date(2026, 2, 6)), date(2026, 2, 9));
    }

    #[test]
    fn test_map_weekday_to_date() {
        let start = date(2026, 2, 9);
        assert_eq!(map_weekday_to_date(start, 1, Weekday::Monday), start);
        assert_eq!(map_weekday_to_date(start, 1, Weekday::Thursday), date(2026, 2, 12));
        assert_eq!(map_weekday_to_date(start, 2, Weekday::Monday), date(2026, 2, 16));
        assert_eq!(map_weekday_to_date(start, 10, Weekday::Thursday), date(2026, 4, 16));
    }

    #[test]
    fn test_generate_date_mapping_is_deterministic() {
        // Tuesday input normalizes to the following Monday
        let mapping = generate_date_mapping(date(2026, 2, 3));
        assert_eq!(mapping.adjusted_start, date(2026, 2, 9));
        assert_eq!(mapping.entries.len(), 40);

        assert_eq!(mapping.date_for(1, Weekday::Monday), Some(date(2026, 2, 9)));
        assert_eq!(mapping.date_for(10, Weekday::Thursday), Some(date(2026, 4, 16)));
        assert_eq!(mapping.date_for(11, Weekday::Monday), None);

        // Week-major, weekday-minor ordering
        assert_eq!(mapping.entries[0].week, 1);
        assert_eq!(mapping.entries[0].day, Weekday::Monday);
        assert_eq!(mapping.entries[3].day, Weekday::Thursday);
        assert_eq!(mapping.entries[4].week, 2);
        assert_eq!(mapping.entries[39].week, 10);
        assert_eq!(mapping.entries[39].day, Weekday::Thursday);
    }

    #[test]
    fn test_mapping_from_monday_keeps_the_date() {
        let mapping = generate_date_mapping(date(2026, 2, 9));
        assert_eq!(mapping.adjusted_start, date(2026, 2, 9));
        assert_eq!(mapping.date_for(1, Weekday::Monday), Some(date(2026, 2, 9)));
    }

    #[test]
    fn test_staff_availability_span() {
        let start = date(2026, 2, 9);
        // Programme end: 2026-02-09 + 70 days = 2026-04-20

        assert!(is_staff_available_for_programme(None, start));
        assert!(is_staff_available_for_programme(Some(date(2026, 2, 2)), start));
        assert!(is_staff_available_for_programme(Some(date(2026, 2, 9)), start));
        // Boundary is inclusive
        assert!(is_staff_available_for_programme(Some(date(2026, 4, 20)), start));
        assert!(!is_staff_available_for_programme(Some(date(2026, 4, 21)), start));
    }

    #[test]
    fn test_is_monday() {
        assert!(is_monday(date(2026, 2, 9)));
        assert!(!is_monday(date(2026, 2, 3)));
    }
}
