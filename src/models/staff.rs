//! Staff model.
//!
//! Staff are the assignable people: coaches, facilitators, and
//! coordinators. They are reference data for a planning session; the
//! engine reads availability and identity but never mutates a staff
//! record.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::programme::Weekday;

/// Staff role classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    /// Delivery coach.
    Coach,
    /// Session facilitator.
    Facilitator,
    /// Programme coordinator.
    Coordinator,
}

impl StaffRole {
    /// Roles in display order.
    pub const ALL: [StaffRole; 3] = [StaffRole::Coach, StaffRole::Facilitator, StaffRole::Coordinator];

    /// Role display name.
    pub fn name(self) -> &'static str {
        match self {
            StaffRole::Coach => "Coach",
            StaffRole::Facilitator => "Facilitator",
            StaffRole::Coordinator => "Coordinator",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A weekly working window on one delivery day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// Which weekday the window applies to.
    pub day: Weekday,
    /// Window start.
    pub start: NaiveTime,
    /// Window end.
    pub end: NaiveTime,
}

/// The date range a staff member can be scheduled within.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityPeriod {
    /// First date the staff member is available.
    pub start_date: NaiveDate,
    /// Last date of availability, open-ended when absent.
    pub end_date: Option<NaiveDate>,
}

impl AvailabilityPeriod {
    /// An open-ended period from a start date.
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: None,
        }
    }

    /// Closes the period at an end date.
    pub fn with_end(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// An assignable staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique staff identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role classification.
    pub role: StaffRole,
    /// Weekly working windows, at most one per delivery day.
    pub availability: Vec<DayAvailability>,
    /// Date range of availability. Absent means no restriction.
    pub availability_period: Option<AvailabilityPeriod>,
    /// Hubs this staff member works out of (display data).
    pub hubs: Vec<String>,
}

impl Staff {
    /// Creates a staff member with no windows, period, or hubs.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: StaffRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            availability: Vec::new(),
            availability_period: None,
            hubs: Vec::new(),
        }
    }

    /// Adds a weekly working window.
    pub fn with_window(mut self, day: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        self.availability.push(DayAvailability { day, start, end });
        self
    }

    /// Sets the availability period.
    pub fn with_period(mut self, period: AvailabilityPeriod) -> Self {
        self.availability_period = Some(period);
        self
    }

    /// Adds a hub.
    pub fn with_hub(mut self, hub: impl Into<String>) -> Self {
        self.hubs.push(hub.into());
        self
    }

    /// The working window for a weekday, if one exists.
    pub fn window_for(&self, day: Weekday) -> Option<&DayAvailability> {
        self.availability.iter().find(|w| w.day == day)
    }

    /// First available date, `None` when unrestricted.
    #[inline]
    pub fn available_from(&self) -> Option<NaiveDate> {
        self.availability_period.as_ref().map(|p| p.start_date)
    }
}
