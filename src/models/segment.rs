//! Segment and time slot models.
//!
//! A segment is one timetabled activity block within a delivery day:
//! a workshop, a break, or another fixed category. Segments are created
//! by the programme template and never deleted; customization only
//! rewrites their content fields (title, attached lesson).

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Title carried by a workshop slot with no lesson attached.
pub const PLACEHOLDER_TITLE: &str = "Workshop";

/// Segment category.
///
/// A closed set: assignability and customization rules branch on it
/// exhaustively, so a new category cannot silently slip past the
/// break-exclusion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentCategory {
    /// Deliverable workshop slot.
    Workshop,
    /// Rest period. Never assignable, never carries a lesson.
    Break,
    /// Physical or team activity.
    Sport,
    /// Accredited qualification unit.
    Qualification,
    /// Employability skills session.
    Employability,
}

impl SegmentCategory {
    /// Whether staff may be assigned to segments of this category.
    #[inline]
    pub fn is_assignable(self) -> bool {
        match self {
            SegmentCategory::Break => false,
            SegmentCategory::Workshop
            | SegmentCategory::Sport
            | SegmentCategory::Qualification
            | SegmentCategory::Employability => true,
        }
    }
}

/// A fixed daily time window shared by every week of the programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot identifier (e.g. "slot-morning").
    pub id: String,
    /// Wall-clock start.
    pub start: NaiveTime,
    /// Wall-clock end.
    pub end: NaiveTime,
    /// Slot length in minutes.
    pub duration_minutes: u32,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(id: impl Into<String>, start: NaiveTime, end: NaiveTime, duration_minutes: u32) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            duration_minutes,
        }
    }
}

/// One activity slot in a delivery day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Stable identifier, unique within a week. The same id names the
    /// same template slot in every week; grid coordinates always carry
    /// the week number alongside it.
    pub id: String,
    /// Display title. Placeholder workshops carry [`PLACEHOLDER_TITLE`].
    pub title: String,
    /// Planned length in minutes.
    pub duration_minutes: u32,
    /// Category; drives assignability.
    pub category: SegmentCategory,
    /// Fixed daily time window this segment occupies, if any.
    pub time_slot_id: Option<String>,
    /// Attached lesson id, when customized.
    pub lesson_id: Option<String>,
    /// Attached lesson display name, when customized.
    pub lesson_name: Option<String>,
}

impl Segment {
    /// Creates a segment with no time slot and no lesson.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration_minutes: u32,
        category: SegmentCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_minutes,
            category,
            time_slot_id: None,
            lesson_id: None,
            lesson_name: None,
        }
    }

    /// Binds the segment to a fixed daily time slot.
    pub fn with_time_slot(mut self, slot_id: impl Into<String>) -> Self {
        self.time_slot_id = Some(slot_id.into());
        self
    }

    /// Whether staff may be assigned to this segment.
    #[inline]
    pub fn is_assignable(&self) -> bool {
        self.category.is_assignable()
    }

    /// Whether a lesson is currently attached.
    #[inline]
    pub fn has_lesson(&self) -> bool {
        self.lesson_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_builder() {
        let s = Segment::new("mon-ws1", "Workshop 1", 120, SegmentCategory::Workshop)
            .with_time_slot("slot-morning");

        assert_eq!(s.id, "mon-ws1");
        assert_eq!(s.title, "Workshop 1");
        assert_eq!(s.duration_minutes, 120);
        assert_eq!(s.category, SegmentCategory::Workshop);
        assert_eq!(s.time_slot_id.as_deref(), Some("slot-morning"));
        assert!(s.lesson_id.is_none());
        assert!(s.lesson_name.is_none());
    }

    #[test]
    fn test_only_breaks_are_unassignable() {
        assert!(SegmentCategory::Workshop.is_assignable());
        assert!(SegmentCategory::Sport.is_assignable());
        assert!(SegmentCategory::Qualification.is_assignable());
        assert!(SegmentCategory::Employability.is_assignable());
        assert!(!SegmentCategory::Break.is_assignable());

        let brk = Segment::new("mon-brk", "Break", 15, SegmentCategory::Break);
        assert!(!brk.is_assignable());
    }

    #[test]
    fn test_has_lesson() {
        let mut s = Segment::new("mon-ws1", PLACEHOLDER_TITLE, 120, SegmentCategory::Workshop);
        assert!(!s.has_lesson());

        s.lesson_id = Some("lesson-001".to_string());
        assert!(s.has_lesson());
    }

    #[test]
    fn test_time_slot() {
        let start = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let slot = TimeSlot::new("slot-morning", start, end, 120);

        assert_eq!(slot.id, "slot-morning");
        assert_eq!(slot.duration_minutes, 120);
        assert!(slot.start < slot.end);
    }
}
