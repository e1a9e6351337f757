//! Greedy auto-assignment.
//!
//! A single deterministic first-fit pass over one week: walk the
//! week's assignable segments in day order, give each to the first
//! staff member in roster order whose running weekly count is under
//! the cap and who is not already on that exact segment. Slots with no
//! eligible staff stay open. The pass never backtracks, never
//! rebalances, and never errors.
//!
//! # Reference
//! First-fit list scheduling; see Ernst et al., "Staff scheduling and
//! rostering: A review of applications, methods and models" (2004).

use tracing::debug;

use crate::engine::board::{AssignmentBoard, WEEKLY_ASSIGNMENT_CAP};
use crate::models::{ProgrammeWeek, Staff};

/// Fills one week's open segments from the given roster.
///
/// Running counts are seeded from the board's existing records, so the
/// pass respects assignments made by hand before it runs. Returns the
/// number of assignments made.
pub fn auto_assign(board: &mut AssignmentBoard, week_plan: &ProgrammeWeek, staff: &[&Staff]) -> usize {
    let week = week_plan.week;
    let mut counts = board.week_counts(week);
    let mut assigned = 0;

    for (day, segment) in week_plan.assignable_segments() {
        let candidate = staff.iter().find(|s| {
            counts.get(s.id.as_str()).copied().unwrap_or(0) < WEEKLY_ASSIGNMENT_CAP
                && !board
                    .assignment_for(&segment.id, week, day)
                    .is_some_and(|a| a.contains(&s.id))
        });

        if let Some(s) = candidate {
            board.add_member(&segment.id, week, day, &s.id);
            *counts.entry(s.id.clone()).or_insert(0) += 1;
            assigned += 1;
            debug!(week, day = %day, segment = %segment.id, staff = %s.id, "auto-assigned");
        } else {
            debug!(week, day = %day, segment = %segment.id, "no eligible staff, slot left open");
        }
    }

    assigned
}
