//! Week completion tracking.
//!
//! A week is complete when every assignable segment in it has at least
//! one staff member. A week with no assignable segments at all is not
//! complete; an empty week must never read as done.

use crate::engine::board::AssignmentBoard;
use crate::models::{Programme, ProgrammeWeek};

/// Coverage summary for one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekProgress {
    /// Week number, 1-based.
    pub week: u32,
    /// Assignable segments holding at least one staff member.
    pub assigned_segments: usize,
    /// Assignable segments in the week.
    pub total_segments: usize,
    /// Whether the week counts as complete.
    pub complete: bool,
}

impl WeekProgress {
    /// Measures one week's coverage against the board.
    pub fn calculate(week_plan: &ProgrammeWeek, board: &AssignmentBoard) -> Self {
        let mut total = 0;
        let mut assigned = 0;
        for (day, segment) in week_plan.assignable_segments() {
            total += 1;
            if board
                .assignment_for(&segment.id, week_plan.week, day)
                .is_some()
            {
                assigned += 1;
            }
        }
        Self {
            week: week_plan.week,
            assigned_segments: assigned,
            total_segments: total,
            complete: total > 0 && assigned == total,
        }
    }
}

/// Whether every assignable segment in the week has staff.
pub fn is_week_complete(week_plan: &ProgrammeWeek, board: &AssignmentBoard) -> bool {
    WeekProgress::calculate(week_plan, board).complete
}

/// Week numbers of every complete week, in ordinal order.
pub fn completed_weeks(programme: &Programme, board: &AssignmentBoard) -> Vec<u32> {
    programme
        .weeks
        .iter()
        .filter(|w| is_week_complete(w, board))
        .map(|w| w.week)
        .collect()
}
