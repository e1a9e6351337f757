//! Assignment board: the mutable store of staff-to-segment records.
//!
//! The board is a flat list of [`SegmentAssignment`] records keyed by
//! (segment id, week, day). It owns two invariants:
//!
//! - no record ever holds an empty staff set (removing the last member
//!   deletes the record), and
//! - no duplicate records exist for the same grid cell.
//!
//! Cap enforcement is a policy question, not a structural one: under
//! [`CapPolicy::Strict`] the board hard-rejects a toggle-on at the
//! weekly cap, under [`CapPolicy::Advisory`] it admits it and leaves
//! enforcement to the caller via [`AssignmentBoard::disabled_staff`].

use std::collections::{HashMap, HashSet};

use crate::models::{Segment, SegmentAssignment, Weekday};

/// Maximum segments one staff member may take per week.
pub const WEEKLY_ASSIGNMENT_CAP: usize = 4;

/// How the weekly cap is enforced when toggling a staff member on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapPolicy {
    /// Toggle-on at the cap is rejected by the board.
    #[default]
    Strict,
    /// Toggle-on always succeeds; the cap only surfaces through
    /// [`AssignmentBoard::disabled_staff`].
    Advisory,
}

/// Result of a toggle request. Every variant is a completed, non-error
/// outcome; the board never panics or throws on bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Staff member added to the cell.
    Assigned,
    /// Staff member removed from the cell.
    Unassigned,
    /// Rejected: weekly cap reached under [`CapPolicy::Strict`].
    AtCap,
    /// Rejected: the segment's category does not take assignments.
    NotAssignable,
    /// Rejected: no such segment in the target week and day.
    UnknownSlot,
}

/// Staff-to-segment assignment store for one planning session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentBoard {
    /// All live records. Never contains an empty-staff record.
    pub assignments: Vec<SegmentAssignment>,
}

impl AssignmentBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a board from previously saved records, dropping any
    /// empty-staff records a foreign snapshot might carry.
    pub fn from_records(records: Vec<SegmentAssignment>) -> Self {
        Self {
            assignments: records.into_iter().filter(|r| !r.is_empty()).collect(),
        }
    }

    fn position(&self, segment_id: &str, week: u32, day: Weekday) -> Option<usize> {
        self.assignments
            .iter()
            .position(|a| a.matches(segment_id, week, day))
    }

    /// Record for a grid cell, if any.
    pub fn assignment_for(
        &self,
        segment_id: &str,
        week: u32,
        day: Weekday,
    ) -> Option<&SegmentAssignment> {
        self.assignments
            .iter()
            .find(|a| a.matches(segment_id, week, day))
    }

    /// All records in one week.
    pub fn assignments_for_week(&self, week: u32) -> impl Iterator<Item = &SegmentAssignment> {
        self.assignments.iter().filter(move |a| a.week == week)
    }

    /// Records in one week that include the given staff member.
    pub fn assignments_for_staff<'a>(
        &'a self,
        week: u32,
        staff_id: &'a str,
    ) -> impl Iterator<Item = &'a SegmentAssignment> {
        self.assignments_for_week(week)
            .filter(move |a| a.contains(staff_id))
    }

    /// Number of segments the staff member holds in the week. Each
    /// record counts once regardless of how many co-assignees it has.
    pub fn staff_week_count(&self, staff_id: &str, week: u32) -> usize {
        self.assignments_for_staff(week, staff_id).count()
    }

    /// Per-staff assignment counts for one week.
    pub fn week_counts(&self, week: u32) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for record in self.assignments_for_week(week) {
            for staff_id in &record.staff_ids {
                *counts.entry(staff_id.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Staff at or over the weekly cap: the derived set a staff picker
    /// uses to disable drag sources.
    pub fn disabled_staff(&self, week: u32) -> HashSet<String> {
        self.week_counts(week)
            .into_iter()
            .filter(|(_, count)| *count >= WEEKLY_ASSIGNMENT_CAP)
            .map(|(staff_id, _)| staff_id)
            .collect()
    }

    /// Toggles a staff member on or off a segment cell.
    ///
    /// Removal always succeeds and deletes the record when the last
    /// member leaves. Adding checks the weekly cap only under
    /// [`CapPolicy::Strict`]; under [`CapPolicy::Advisory`] the add
    /// always goes through. Break segments are rejected outright.
    pub fn toggle(
        &mut self,
        segment: &Segment,
        week: u32,
        day: Weekday,
        staff_id: &str,
        policy: CapPolicy,
    ) -> ToggleOutcome {
        if !segment.is_assignable() {
            return ToggleOutcome::NotAssignable;
        }

        if let Some(pos) = self.position(&segment.id, week, day) {
            if self.assignments[pos].contains(staff_id) {
                self.assignments[pos].remove(staff_id);
                if self.assignments[pos].is_empty() {
                    self.assignments.remove(pos);
                }
                return ToggleOutcome::Unassigned;
            }
        }

        if policy == CapPolicy::Strict && self.staff_week_count(staff_id, week) >= WEEKLY_ASSIGNMENT_CAP
        {
            return ToggleOutcome::AtCap;
        }

        self.add_member(&segment.id, week, day, staff_id);
        ToggleOutcome::Assigned
    }

    /// Adds a staff member to a cell unconditionally, creating the
    /// record if needed. Callers own any cap bookkeeping.
    pub(crate) fn add_member(&mut self, segment_id: &str, week: u32, day: Weekday, staff_id: &str) {
        match self.position(segment_id, week, day) {
            Some(pos) => {
                self.assignments[pos].add(staff_id);
            }
            None => {
                self.assignments
                    .push(SegmentAssignment::new(segment_id, week, day, staff_id));
            }
        }
    }

    /// Number of live records.
    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the board holds no records at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.assignments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SegmentCategory;

    fn workshop(id: &str) -> Segment {
        Segment::new(id, "Workshop", 120, SegmentCategory::Workshop)
    }

    fn break_segment() -> Segment {
        Segment::new("mon-brk", "Break", 15, SegmentCategory::Break)
    }

    #[test]
    fn test_toggle_assigns_then_unassigns() {
        let mut board = AssignmentBoard::new();
        let seg = workshop("mon-ws1");

        let out = board.toggle(&seg, 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
        assert_eq!(out, ToggleOutcome::Assigned);
        assert!(board
            .assignment_for("mon-ws1", 1, Weekday::Monday)
            .is_some_and(|a| a.contains("staff-1")));

        let out = board.toggle(&seg, 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
        assert_eq!(out, ToggleOutcome::Unassigned);
        // Last member removed: the record itself is gone
        assert!(board.assignment_for("mon-ws1", 1, Weekday::Monday).is_none());
        assert!(board.is_empty());
    }

    #[test]
    fn test_toggle_pair_restores_prior_state() {
        let mut board = AssignmentBoard::new();
        let seg = workshop("mon-ws1");
        board.toggle(&seg, 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
        let before = board.clone();

        board.toggle(&seg, 1, Weekday::Monday, "staff-2", CapPolicy::Strict);
        board.toggle(&seg, 1, Weekday::Monday, "staff-2", CapPolicy::Strict);
        assert_eq!(board, before);
    }

    #[test]
    fn test_multiple_staff_share_a_segment() {
        let mut board = AssignmentBoard::new();
        let seg = workshop("mon-ws1");
        board.toggle(&seg, 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
        board.toggle(&seg, 1, Weekday::Monday, "staff-2", CapPolicy::Strict);

        let record = board.assignment_for("mon-ws1", 1, Weekday::Monday).unwrap();
        assert_eq!(record.staff_ids, vec!["staff-1", "staff-2"]);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_break_segments_reject_all_toggles() {
        let mut board = AssignmentBoard::new();
        let brk = break_segment();

        let out = board.toggle(&brk, 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
        assert_eq!(out, ToggleOutcome::NotAssignable);
        let out = board.toggle(&brk, 1, Weekday::Monday, "staff-1", CapPolicy::Advisory);
        assert_eq!(out, ToggleOutcome::NotAssignable);
        assert!(board.is_empty());
    }

    #[test]
    fn test_strict_cap_rejects_fifth_assignment() {
        let mut board = AssignmentBoard::new();
        for id in ["mon-ws1", "mon-ws2", "tue-ws1", "tue-ws2"] {
            let out = board.toggle(&workshop(id), 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
            assert_eq!(out, ToggleOutcome::Assigned);
        }

        let out = board.toggle(&workshop("wed-ws1"), 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
        assert_eq!(out, ToggleOutcome::AtCap);
        assert_eq!(board.staff_week_count("staff-1", 1), 4);

        // Removal still works at the cap
        let out = board.toggle(&workshop("mon-ws1"), 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
        assert_eq!(out, ToggleOutcome::Unassigned);
        assert_eq!(board.staff_week_count("staff-1", 1), 3);
    }

    #[test]
    fn test_advisory_cap_admits_fifth_assignment() {
        let mut board = AssignmentBoard::new();
        for id in ["mon-ws1", "mon-ws2", "tue-ws1", "tue-ws2"] {
            board.toggle(&workshop(id), 1, Weekday::Monday, "staff-1", CapPolicy::Advisory);
        }

        let out =
            board.toggle(&workshop("wed-ws1"), 1, Weekday::Monday, "staff-1", CapPolicy::Advisory);
        assert_eq!(out, ToggleOutcome::Assigned);
        assert_eq!(board.staff_week_count("staff-1", 1), 5);
        // The cap still surfaces through the derived set
        assert!(board.disabled_staff(1).contains("staff-1"));
    }

    #[test]
    fn test_weeks_are_isolated() {
        let mut board = AssignmentBoard::new();
        let seg = workshop("mon-ws1");
        board.toggle(&seg, 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
        board.toggle(&seg, 2, Weekday::Monday, "staff-1", CapPolicy::Strict);

        assert_eq!(board.len(), 2);
        assert_eq!(board.staff_week_count("staff-1", 1), 1);
        assert_eq!(board.staff_week_count("staff-1", 2), 1);
        assert!(board.assignment_for("mon-ws1", 3, Weekday::Monday).is_none());
    }

    #[test]
    fn test_disabled_staff_threshold() {
        let mut board = AssignmentBoard::new();
        for id in ["mon-ws1", "mon-ws2", "tue-ws1"] {
            board.toggle(&workshop(id), 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
        }
        assert!(board.disabled_staff(1).is_empty());

        board.toggle(&workshop("tue-ws2"), 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
        let disabled = board.disabled_staff(1);
        assert_eq!(disabled.len(), 1);
        assert!(disabled.contains("staff-1"));
        // Other weeks are unaffected
        assert!(board.disabled_staff(2).is_empty());
    }

    #[test]
    fn test_week_counts_multi_member_records() {
        let mut board = AssignmentBoard::new();
        let seg = workshop("mon-ws1");
        board.toggle(&seg, 1, Weekday::Monday, "staff-1", CapPolicy::Strict);
        board.toggle(&seg, 1, Weekday::Monday, "staff-2", CapPolicy::Strict);
        board.toggle(&workshop("mon-ws2"), 1, Weekday::Monday, "staff-1", CapPolicy::Strict);

        let counts = board.week_counts(1);
        assert_eq!(counts.get("staff-1"), Some(&2));
        assert_eq!(counts.get("staff-2"), Some(&1));
    }

    #[test]
    fn test_from_records_drops_empty_staff_sets() {
        let mut orphan = SegmentAssignment::new("mon-ws1", 1, Weekday::Monday, "staff-1");
        orphan.remove("staff-1");
        let board = AssignmentBoard::from_records(vec![
            orphan,
            SegmentAssignment::new("mon-ws2", 1, Weekday::Monday, "staff-2"),
        ]);
        assert_eq!(board.len(), 1);
    }
}
