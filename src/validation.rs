//! Validation for planning sessions and reference data.
//!
//! Two layers:
//! - the save gate: what must hold before a schedule is submitted
//!   (start date chosen, at least one assignment), with messages
//!   worded for direct display;
//! - reference-data checks: structural integrity of the roster, the
//!   programme grid, and the assignment records against both.
//!
//! Every check collects all detected problems instead of stopping at
//! the first, and none of them mutate their inputs.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::engine::{AssignmentBoard, WEEKLY_ASSIGNMENT_CAP};
use crate::models::{Programme, Staff};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No programme start date selected.
    MissingStartDate,
    /// The board holds no assignments at all.
    NoAssignments,
    /// Two staff members share the same ID.
    DuplicateStaffId,
    /// Two segments in one day plan share the same ID.
    DuplicateSegmentId,
    /// Two assignment records cover the same grid cell.
    DuplicateAssignment,
    /// An assignment points at a segment absent from its cell.
    UnknownSegment,
    /// An assignment names a staff member not on the roster.
    UnknownStaff,
    /// An assignment names a week outside the programme.
    WeekOutOfRange,
    /// A staff member holds more than the weekly cap in one week.
    CapExceeded,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks whether a planning session may be saved.
///
/// The two gate conditions are a chosen start date and at least one
/// assignment on the board. Messages are exactly what a save dialog
/// shows the user.
pub fn validate_for_save(
    start_date: Option<NaiveDate>,
    board: &AssignmentBoard,
) -> ValidationResult {
    let mut errors = Vec::new();

    if start_date.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingStartDate,
            "Start date is required.",
        ));
    }
    if board.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoAssignments,
            "Please assign staff to at least one workshop.",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the reference data a session is built on.
///
/// Checks:
/// 1. No duplicate staff IDs across the roster
/// 2. No duplicate segment IDs within any single day plan
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_reference_data(staff: &[Staff], programme: &Programme) -> ValidationResult {
    let mut errors = Vec::new();

    let mut staff_ids = HashSet::new();
    for s in staff {
        if !staff_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStaffId,
                format!("Duplicate staff ID: {}", s.id),
            ));
        }
    }

    for week in &programme.weeks {
        for plan in &week.days {
            let mut segment_ids = HashSet::new();
            for segment in &plan.segments {
                if !segment_ids.insert(segment.id.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateSegmentId,
                        format!(
                            "Duplicate segment ID '{}' in week {} {}",
                            segment.id, week.week, plan.day
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Cross-checks assignment records against the grid and the roster.
///
/// Checks:
/// 1. Every record's week exists in the programme
/// 2. Every record's (segment, day) cell exists in that week
/// 3. Every staff ID on a record is on the roster
/// 4. No two records cover the same grid cell
/// 5. No staff member exceeds the weekly assignment cap
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_assignments(
    board: &AssignmentBoard,
    programme: &Programme,
    staff: &[Staff],
) -> ValidationResult {
    let mut errors = Vec::new();
    let staff_ids: HashSet<&str> = staff.iter().map(|s| s.id.as_str()).collect();
    let mut seen_cells = HashSet::new();

    for record in &board.assignments {
        if programme.week(record.week).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::WeekOutOfRange,
                format!(
                    "Assignment for '{}' names week {} outside the programme",
                    record.segment_id, record.week
                ),
            ));
        } else if programme
            .segment(record.week, record.day, &record.segment_id)
            .is_none()
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSegment,
                format!(
                    "Assignment references unknown segment '{}' in week {} {}",
                    record.segment_id, record.week, record.day
                ),
            ));
        }

        if !seen_cells.insert((record.segment_id.as_str(), record.week, record.day)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateAssignment,
                format!(
                    "Duplicate assignment record for '{}' in week {} {}",
                    record.segment_id, record.week, record.day
                ),
            ));
        }

        for staff_id in &record.staff_ids {
            if !staff_ids.contains(staff_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownStaff,
                    format!("Assignment references unknown staff member '{staff_id}'"),
                ));
            }
        }
    }

    for week in &programme.weeks {
        for (staff_id, count) in board.week_counts(week.week) {
            if count > WEEKLY_ASSIGNMENT_CAP {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CapExceeded,
                    format!(
                        "Staff member '{}' holds {} segments in week {} (cap is {})",
                        staff_id, count, week.week, WEEKLY_ASSIGNMENT_CAP
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SegmentAssignment, StaffRole, Weekday};
    use crate::template::default_programme;

    fn sample_staff() -> Vec<Staff> {
        vec![
            Staff::new("staff-1", "Alice Johnson", StaffRole::Coach),
            Staff::new("staff-2", "Ben Carter", StaffRole::Facilitator),
        ]
    }

    #[test]
    fn test_save_gate_passes_with_date_and_assignment() {
        let board = AssignmentBoard::from_records(vec![SegmentAssignment::new(
            "mon-ws1",
            1,
            Weekday::Monday,
            "staff-1",
        )]);
        let date = NaiveDate::from_ymd_opt(2026, 2, 9);
        assert!(validate_for_save(date, &board).is_ok());
    }

    #[test]
    fn test_save_gate_requires_start_date() {
        let board = AssignmentBoard::from_records(vec![SegmentAssignment::new(
            "mon-ws1",
            1,
            Weekday::Monday,
            "staff-1",
        )]);
        let errors = validate_for_save(None, &board).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingStartDate);
        assert_eq!(errors[0].message, "Start date is required.");
    }

    #[test]
    fn test_save_gate_requires_assignments() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 9);
        let errors = validate_for_save(date, &AssignmentBoard::new()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NoAssignments);
        assert_eq!(
            errors[0].message,
            "Please assign staff to at least one workshop."
        );
    }

    #[test]
    fn test_save_gate_collects_both_errors() {
        let errors = validate_for_save(None, &AssignmentBoard::new()).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_reference_data_valid() {
        let staff = sample_staff();
        let programme = default_programme();
        assert!(validate_reference_data(&staff, &programme).is_ok());
    }

    #[test]
    fn test_duplicate_staff_id() {
        let staff = vec![
            Staff::new("staff-1", "Alice Johnson", StaffRole::Coach),
            Staff::new("staff-1", "Ben Carter", StaffRole::Facilitator),
        ];
        let errors = validate_reference_data(&staff, &default_programme()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateStaffId));
    }

    #[test]
    fn test_duplicate_segment_id_within_day() {
        let mut programme = default_programme();
        let dup = programme
            .segment(1, Weekday::Monday, "mon-ws1")
            .unwrap()
            .clone();
        programme
            .week_mut(1)
            .unwrap()
            .day_mut(Weekday::Monday)
            .unwrap()
            .segments
            .push(dup);

        let errors = validate_reference_data(&sample_staff(), &programme).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSegmentId));
    }

    #[test]
    fn test_assignments_valid() {
        let board = AssignmentBoard::from_records(vec![
            SegmentAssignment::new("mon-ws1", 1, Weekday::Monday, "staff-1"),
            SegmentAssignment::new("tue-ws1", 3, Weekday::Tuesday, "staff-2"),
        ]);
        assert!(validate_assignments(&board, &default_programme(), &sample_staff()).is_ok());
    }

    #[test]
    fn test_week_out_of_range() {
        let board = AssignmentBoard::from_records(vec![SegmentAssignment::new(
            "mon-ws1",
            11,
            Weekday::Monday,
            "staff-1",
        )]);
        let errors =
            validate_assignments(&board, &default_programme(), &sample_staff()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::WeekOutOfRange));
    }

    #[test]
    fn test_unknown_segment_and_staff() {
        let board = AssignmentBoard::from_records(vec![SegmentAssignment::new(
            "fri-ws1",
            1,
            Weekday::Monday,
            "staff-99",
        )]);
        let errors =
            validate_assignments(&board, &default_programme(), &sample_staff()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownSegment));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownStaff));
    }

    #[test]
    fn test_segment_on_wrong_day_is_unknown() {
        // mon-ws1 exists in the programme, but not under Tuesday
        let board = AssignmentBoard::from_records(vec![SegmentAssignment::new(
            "mon-ws1",
            1,
            Weekday::Tuesday,
            "staff-1",
        )]);
        let errors =
            validate_assignments(&board, &default_programme(), &sample_staff()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownSegment));
    }

    #[test]
    fn test_duplicate_records_for_one_cell() {
        let board = AssignmentBoard {
            assignments: vec![
                SegmentAssignment::new("mon-ws1", 1, Weekday::Monday, "staff-1"),
                SegmentAssignment::new("mon-ws1", 1, Weekday::Monday, "staff-2"),
            ],
        };
        let errors =
            validate_assignments(&board, &default_programme(), &sample_staff()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateAssignment));
    }

    #[test]
    fn test_cap_breach_detected() {
        let cells = [
            ("mon-ws1", Weekday::Monday),
            ("mon-ws2", Weekday::Monday),
            ("tue-ws1", Weekday::Tuesday),
            ("tue-ws2", Weekday::Tuesday),
            ("wed-ws1", Weekday::Wednesday),
        ];
        let board = AssignmentBoard::from_records(
            cells
                .iter()
                .map(|(id, day)| SegmentAssignment::new(*id, 1, *day, "staff-1"))
                .collect(),
        );

        let errors =
            validate_assignments(&board, &default_programme(), &sample_staff()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CapExceeded));
    }
}
