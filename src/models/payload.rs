//! Persistence payload assembled at save time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::DateMappingEntry;
use crate::models::SegmentAssignment;

/// Snapshot of a schedule as handed to a persistence backend.
///
/// Built by [`Planner::build_payload`](crate::engine::Planner::build_payload)
/// after validation passes. Carries the start date exactly as the user
/// entered it; the `date_mapping` is derived from the normalized
/// (Monday) start, so the two can legitimately disagree on the first
/// delivery date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePayload {
    /// Cohort the schedule belongs to, when one was selected.
    pub cohort_id: Option<String>,
    /// Start date as entered, not normalized.
    pub start_date: NaiveDate,
    /// Every assignment record on the board.
    pub assignments: Vec<SegmentAssignment>,
    /// Resolved week-by-day date table for the run.
    pub date_mapping: Vec<DateMappingEntry>,
}
