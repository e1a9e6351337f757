//! Planning domain models.
//!
//! Provides the core data types for representing programmes, the staff
//! who deliver them, and the assignment records that tie the two
//! together. The grid vocabulary is fixed: ten weeks, four delivery
//! days, three timetable segments per day.
//!
//! # Vocabulary
//!
//! | Type | Grid role | Owned by |
//! |------|-----------|----------|
//! | Segment | One timetable cell | ProgrammeWeek |
//! | ProgrammeWeek | One week of day plans | Programme |
//! | Staff | Assignable person | caller |
//! | SegmentAssignment | staff ↔ (segment, week, day) | AssignmentBoard |
//! | Lesson / Cohort | Curriculum catalog entries | catalog backends |

mod assignment;
mod catalog;
mod payload;
mod programme;
mod segment;
mod staff;

pub use assignment::SegmentAssignment;
pub use catalog::{Academy, Cohort, Lesson, LessonCohortMapping, Product};
pub use payload::SchedulePayload;
pub use programme::{DayPlan, Programme, ProgrammeWeek, Weekday};
pub use segment::{Segment, SegmentCategory, TimeSlot, PLACEHOLDER_TITLE};
pub use staff::{AvailabilityPeriod, DayAvailability, Staff, StaffRole};
