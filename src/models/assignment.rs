//! Segment assignment record.
//!
//! The core mutable record of the engine: which staff cover one segment
//! in one week. Records are keyed by the (segment id, week, day) triple
//! and the board keeps at most one record per triple. A record with no
//! members is deleted rather than kept empty, so the absence of a
//! record always means "unassigned".

use serde::{Deserialize, Serialize};

use super::programme::Weekday;

/// Staff cover for one segment in one week/day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentAssignment {
    /// Template segment id.
    pub segment_id: String,
    /// Programme week, 1-based.
    pub week: u32,
    /// Delivery day.
    pub day: Weekday,
    /// Assigned staff ids. Set semantics: no duplicates, order carries
    /// no meaning. Never empty while the record exists.
    pub staff_ids: Vec<String>,
}

impl SegmentAssignment {
    /// Creates a record with its first member.
    pub fn new(
        segment_id: impl Into<String>,
        week: u32,
        day: Weekday,
        staff_id: impl Into<String>,
    ) -> Self {
        Self {
            segment_id: segment_id.into(),
            week,
            day,
            staff_ids: vec![staff_id.into()],
        }
    }

    /// Whether this record covers the given grid coordinate.
    #[inline]
    pub fn matches(&self, segment_id: &str, week: u32, day: Weekday) -> bool {
        self.week == week && self.day == day && self.segment_id == segment_id
    }

    /// Whether a staff member is on this record.
    pub fn contains(&self, staff_id: &str) -> bool {
        self.staff_ids.iter().any(|id| id == staff_id)
    }

    /// Adds a staff member; duplicates are refused.
    ///
    /// Returns whether the member was added.
    pub fn add(&mut self, staff_id: impl Into<String>) -> bool {
        let staff_id = staff_id.into();
        if self.contains(&staff_id) {
            return false;
        }
        self.staff_ids.push(staff_id);
        true
    }

    /// Removes a staff member.
    ///
    /// Returns whether the member was present. The caller owning the
    /// record is responsible for deleting it once `staff_ids` empties.
    pub fn remove(&mut self, staff_id: &str) -> bool {
        let before = self.staff_ids.len();
        self.staff_ids.retain(|id| id != staff_id);
        self.staff_ids.len() < before
    }

    /// Whether no members remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.staff_ids.is_empty()
    }

    /// Number of assigned staff.
    #[inline]
    pub fn staff_count(&self) -> usize {
        self.staff_ids.len()
    }
}
