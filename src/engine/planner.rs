//! Planning session coordinator.
//!
//! [`Planner`] owns everything one scheduling session needs: the
//! programme grid, the assignment board, the chosen start date, and
//! the session policies. Callers hold it directly; there is no shared
//! or ambient state behind it. All mutation goes through the named
//! operations, and every operation completes synchronously without
//! panicking on bad input.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::availability::filter_available;
use crate::calendar::{ensure_monday, generate_date_mapping, is_monday, DateMapping};
use crate::engine::auto::auto_assign;
use crate::engine::board::{AssignmentBoard, CapPolicy, ToggleOutcome};
use crate::engine::completion::{self, WeekProgress};
use crate::models::{Programme, SchedulePayload, SegmentAssignment, Staff, Weekday};
use crate::template::default_programme;
use crate::validation::{
    validate_for_save, ValidationError, ValidationErrorKind, ValidationResult,
};

/// How a non-Monday start date is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MondayPolicy {
    /// Keep the literal date and surface a warning; normalization
    /// happens only when a date mapping is generated.
    #[default]
    Warn,
    /// Snap the date to the next Monday the moment it is set.
    Normalize,
}

/// Serializable state of a planning session.
///
/// Holds the data worth restoring (grid customizations, assignments,
/// the chosen dates), not the session policies, which belong to the
/// embedding application's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerSnapshot {
    /// Start date as entered.
    pub start_date: Option<NaiveDate>,
    /// Selected cohort, if any.
    pub cohort_id: Option<String>,
    /// The programme grid, including lesson customizations.
    pub programme: Programme,
    /// All assignment records.
    pub assignments: Vec<SegmentAssignment>,
}

/// A staff-to-workshop planning session.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use programme_planner::engine::{Planner, ToggleOutcome};
/// use programme_planner::models::{Staff, StaffRole, Weekday};
///
/// let mut planner = Planner::new();
/// planner.set_start_date(NaiveDate::from_ymd_opt(2026, 2, 9).unwrap());
///
/// let roster = vec![Staff::new("staff-1", "Alice Johnson", StaffRole::Coach)];
/// assert_eq!(planner.available_staff(&roster).len(), 1);
///
/// let outcome = planner.toggle_assignment("mon-ws1", 1, Weekday::Monday, "staff-1");
/// assert_eq!(outcome, ToggleOutcome::Assigned);
/// assert!(!planner.is_week_complete(1));
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    programme: Programme,
    board: AssignmentBoard,
    start_date: Option<NaiveDate>,
    cohort_id: Option<String>,
    cap_policy: CapPolicy,
    monday_policy: MondayPolicy,
}

impl Planner {
    /// Creates a session over the default ten-week programme.
    pub fn new() -> Self {
        Self::with_programme(default_programme())
    }

    /// Creates a session over a prepared programme grid.
    pub fn with_programme(programme: Programme) -> Self {
        Self {
            programme,
            board: AssignmentBoard::new(),
            start_date: None,
            cohort_id: None,
            cap_policy: CapPolicy::default(),
            monday_policy: MondayPolicy::default(),
        }
    }

    /// Sets the cap enforcement policy.
    pub fn with_cap_policy(mut self, policy: CapPolicy) -> Self {
        self.cap_policy = policy;
        self
    }

    /// Sets the non-Monday start date policy.
    pub fn with_monday_policy(mut self, policy: MondayPolicy) -> Self {
        self.monday_policy = policy;
        self
    }

    /// Binds the session to a cohort.
    pub fn with_cohort(mut self, cohort_id: impl Into<String>) -> Self {
        self.cohort_id = Some(cohort_id.into());
        self
    }

    /// The programme grid.
    #[inline]
    pub fn programme(&self) -> &Programme {
        &self.programme
    }

    /// The assignment board.
    #[inline]
    pub fn board(&self) -> &AssignmentBoard {
        &self.board
    }

    /// The start date as stored.
    #[inline]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// The bound cohort id, if any.
    #[inline]
    pub fn cohort_id(&self) -> Option<&str> {
        self.cohort_id.as_deref()
    }

    /// The active cap policy.
    #[inline]
    pub fn cap_policy(&self) -> CapPolicy {
        self.cap_policy
    }

    /// Sets the programme start date.
    ///
    /// Under [`MondayPolicy::Normalize`] the date is snapped to the
    /// next Monday immediately; under [`MondayPolicy::Warn`] it is
    /// stored as entered and a warning is logged for non-Mondays.
    pub fn set_start_date(&mut self, date: NaiveDate) {
        match self.monday_policy {
            MondayPolicy::Normalize => {
                self.start_date = Some(ensure_monday(date));
            }
            MondayPolicy::Warn => {
                if !is_monday(date) {
                    warn!(%date, "programme start date is not a Monday");
                }
                self.start_date = Some(date);
            }
        }
    }

    /// Clears the start date, hiding all staff again.
    pub fn clear_start_date(&mut self) {
        self.start_date = None;
    }

    /// Whether the stored start date needs Monday normalization.
    pub fn monday_warning(&self) -> bool {
        self.start_date.is_some_and(|d| !is_monday(d))
    }

    /// The week-by-day date table for the current start date.
    pub fn date_mapping(&self) -> Option<DateMapping> {
        self.start_date.map(generate_date_mapping)
    }

    /// Staff eligible for this session's programme window. Empty until
    /// a start date is set.
    pub fn available_staff<'a>(&self, roster: &'a [Staff]) -> Vec<&'a Staff> {
        filter_available(roster, self.start_date)
    }

    /// Toggles a staff member on or off a grid cell.
    ///
    /// Unknown coordinates report [`ToggleOutcome::UnknownSlot`] and
    /// change nothing; all other semantics are the board's.
    pub fn toggle_assignment(
        &mut self,
        segment_id: &str,
        week: u32,
        day: Weekday,
        staff_id: &str,
    ) -> ToggleOutcome {
        match self.programme.segment(week, day, segment_id) {
            Some(segment) => self.board.toggle(segment, week, day, staff_id, self.cap_policy),
            None => ToggleOutcome::UnknownSlot,
        }
    }

    /// Runs the greedy first-fit pass over one week, drawing from the
    /// eligible portion of `roster` in its given order.
    ///
    /// Returns the number of assignments made. An unknown week makes
    /// none, and so does a session without a start date, since no
    /// staff are eligible yet.
    pub fn auto_assign_week(&mut self, week: u32, roster: &[Staff]) -> usize {
        let eligible = filter_available(roster, self.start_date);
        match self.programme.week(week) {
            Some(plan) => auto_assign(&mut self.board, plan, &eligible),
            None => 0,
        }
    }

    /// Attaches a lesson to a workshop slot. See
    /// [`Programme::attach_lesson`].
    pub fn attach_lesson(
        &mut self,
        segment_id: &str,
        week: u32,
        day: Weekday,
        lesson_id: impl Into<String>,
        lesson_name: impl Into<String>,
        workshop_title: impl Into<String>,
    ) -> bool {
        self.programme
            .attach_lesson(segment_id, week, day, lesson_id, lesson_name, workshop_title)
    }

    /// Detaches a lesson from a workshop slot. See
    /// [`Programme::detach_lesson`].
    pub fn detach_lesson(&mut self, segment_id: &str, week: u32, day: Weekday) -> bool {
        self.programme.detach_lesson(segment_id, week, day)
    }

    /// Staff at or over the weekly cap for the given week.
    pub fn disabled_staff(&self, week: u32) -> HashSet<String> {
        self.board.disabled_staff(week)
    }

    /// Whether every assignable segment in the week has staff.
    pub fn is_week_complete(&self, week: u32) -> bool {
        self.programme
            .week(week)
            .map(|plan| completion::is_week_complete(plan, &self.board))
            .unwrap_or(false)
    }

    /// Coverage summary for one week.
    pub fn week_progress(&self, week: u32) -> Option<WeekProgress> {
        self.programme
            .week(week)
            .map(|plan| WeekProgress::calculate(plan, &self.board))
    }

    /// Week numbers of every complete week.
    pub fn completed_weeks(&self) -> Vec<u32> {
        completion::completed_weeks(&self.programme, &self.board)
    }

    /// Checks the save gate for this session.
    pub fn validate_for_save(&self) -> ValidationResult {
        validate_for_save(self.start_date, &self.board)
    }

    /// Builds the submission payload, validating first.
    ///
    /// The payload keeps the start date exactly as entered; the date
    /// mapping inside it is generated from the normalized Monday.
    pub fn build_payload(&self) -> Result<SchedulePayload, Vec<ValidationError>> {
        self.validate_for_save()?;
        let start_date = self.start_date.ok_or_else(|| {
            vec![ValidationError::new(
                ValidationErrorKind::MissingStartDate,
                "Start date is required.",
            )]
        })?;

        Ok(SchedulePayload {
            cohort_id: self.cohort_id.clone(),
            start_date,
            assignments: self.board.assignments.clone(),
            date_mapping: generate_date_mapping(start_date).entries,
        })
    }

    /// Captures the restorable session state.
    pub fn snapshot(&self) -> PlannerSnapshot {
        PlannerSnapshot {
            start_date: self.start_date,
            cohort_id: self.cohort_id.clone(),
            programme: self.programme.clone(),
            assignments: self.board.assignments.clone(),
        }
    }

    /// Rebuilds a session from a snapshot. Policies reset to their
    /// defaults; chain the `with_*` builders to restore them.
    pub fn from_snapshot(snapshot: PlannerSnapshot) -> Self {
        Self {
            programme: snapshot.programme,
            board: AssignmentBoard::from_records(snapshot.assignments),
            start_date: snapshot.start_date,
            cohort_id: snapshot.cohort_id,
            cap_policy: CapPolicy::default(),
            monday_policy: MondayPolicy::default(),
        }
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}
