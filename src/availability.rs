//! Staff availability filtering and grouping.
//!
//! Eligibility for a programme run is a pure function of the staff
//! member's availability-period start and the programme start date.
//! No start date means no eligible staff at all: assignment is gated
//! on date selection, so an unset date must yield an empty roster
//! rather than an unfiltered one.

use chrono::NaiveDate;

use crate::calendar::is_staff_available_for_programme;
use crate::models::{Staff, StaffRole, Weekday};

/// Day-level availability judgement for one staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    /// A full working window (8 hours or more) on that day.
    Available,
    /// Some availability, but less than a standard day.
    Limited,
    /// No availability window declared for that day.
    Conflict,
}

/// Filters a roster down to staff eligible for a programme run.
///
/// With no start date selected the result is always empty. Otherwise a
/// staff member is kept when their availability period starts no later
/// than the programme end; see
/// [`is_staff_available_for_programme`](crate::calendar::is_staff_available_for_programme)
/// for the exact bound.
pub fn filter_available(staff: &[Staff], programme_start: Option<NaiveDate>) -> Vec<&Staff> {
    match programme_start {
        None => Vec::new(),
        Some(start) => staff
            .iter()
            .filter(|s| is_staff_available_for_programme(s.available_from(), start))
            .collect(),
    }
}

/// Judges one staff member's availability on one delivery day.
///
/// No declared window is a conflict. A window of 8 hours or more is a
/// full day; anything shorter is limited.
pub fn availability_status(staff: &Staff, day: Weekday) -> AvailabilityStatus {
    match staff.window_for(day) {
        None => AvailabilityStatus::Conflict,
        Some(window) => {
            let hours = (window.end - window.start).num_hours();
            if hours >= 8 {
                AvailabilityStatus::Available
            } else {
                AvailabilityStatus::Limited
            }
        }
    }
}

/// Groups staff by role in the fixed role display order, omitting
/// roles with no members.
pub fn group_by_role<'a>(staff: &[&'a Staff]) -> Vec<(StaffRole, Vec<&'a Staff>)> {
    StaffRole::ALL
        .into_iter()
        .filter_map(|role| {
            let members: Vec<&Staff> = staff.iter().copied().filter(|s| s.role == role).collect();
            if members.is_empty() {
                None
            } else {
                Some((role, members))
            }
        })
        .collect()
}
