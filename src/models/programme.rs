//! Programme grid models.
//!
//! A programme is the full 10-week, Monday-to-Thursday curriculum
//! instance for one cohort. Weeks and days are fixed at build time;
//! the only mutation the grid ever sees is workshop customization
//! (attaching or detaching a lesson), which rewrites a segment's
//! content fields in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::segment::{Segment, SegmentCategory, PLACEHOLDER_TITLE};

/// A delivery weekday. The programme runs Monday to Thursday only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Weekday {
    /// Delivery days in week order.
    pub const ALL: [Weekday; 4] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
    ];

    /// Days past the week's Monday (Monday = 0 .. Thursday = 3).
    #[inline]
    pub fn offset(self) -> u32 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
        }
    }

    /// Full English day name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One delivery day's ordered segment sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Which weekday this plan covers.
    pub day: Weekday,
    /// Segments in delivery order.
    pub segments: Vec<Segment>,
}

impl DayPlan {
    /// Creates an empty day plan.
    pub fn new(day: Weekday) -> Self {
        Self {
            day,
            segments: Vec::new(),
        }
    }

    /// Appends a segment.
    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Finds a segment by id.
    pub fn segment(&self, segment_id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == segment_id)
    }
}

/// One ordinal programme week (1..=10) with its four day plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgrammeWeek {
    /// Week number, 1-based.
    pub week: u32,
    /// Day plans in Monday..Thursday order.
    pub days: Vec<DayPlan>,
}

impl ProgrammeWeek {
    /// Creates an empty week.
    pub fn new(week: u32) -> Self {
        Self {
            week,
            days: Vec::new(),
        }
    }

    /// Appends a day plan.
    pub fn with_day(mut self, plan: DayPlan) -> Self {
        self.days.push(plan);
        self
    }

    /// Finds the plan for a weekday.
    pub fn day(&self, day: Weekday) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Mutable plan lookup.
    pub fn day_mut(&mut self, day: Weekday) -> Option<&mut DayPlan> {
        self.days.iter_mut().find(|d| d.day == day)
    }

    /// Assignable segments across the week, day-major, within-day order.
    pub fn assignable_segments(&self) -> impl Iterator<Item = (Weekday, &Segment)> + '_ {
        self.days.iter().flat_map(|plan| {
            plan.segments
                .iter()
                .filter(|s| s.is_assignable())
                .map(move |s| (plan.day, s))
        })
    }
}

/// The full programme grid for one cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Programme {
    /// Weeks in ordinal order.
    pub weeks: Vec<ProgrammeWeek>,
}

impl Programme {
    /// Creates a programme from prepared weeks.
    pub fn new(weeks: Vec<ProgrammeWeek>) -> Self {
        Self { weeks }
    }

    /// Finds a week by its 1-based number.
    pub fn week(&self, number: u32) -> Option<&ProgrammeWeek> {
        self.weeks.iter().find(|w| w.week == number)
    }

    /// Mutable week lookup.
    pub fn week_mut(&mut self, number: u32) -> Option<&mut ProgrammeWeek> {
        self.weeks.iter_mut().find(|w| w.week == number)
    }

    /// Resolves a (week, day, segment id) grid coordinate.
    pub fn segment(&self, week: u32, day: Weekday, segment_id: &str) -> Option<&Segment> {
        self.week(week)?.day(day)?.segment(segment_id)
    }

    /// Mutable grid coordinate lookup.
    pub fn segment_mut(&mut self, week: u32, day: Weekday, segment_id: &str) -> Option<&mut Segment> {
        self.week_mut(week)?
            .day_mut(day)?
            .segments
            .iter_mut()
            .find(|s| s.id == segment_id)
    }

    /// Attaches a lesson to a workshop slot, making it content-bearing.
    ///
    /// The segment takes the given display title, records the lesson id
    /// and name, and its category becomes [`SegmentCategory::Workshop`].
    /// Unknown coordinates and Break segments are left untouched.
    ///
    /// Returns whether a segment was modified.
    pub fn attach_lesson(
        &mut self,
        segment_id: &str,
        week: u32,
        day: Weekday,
        lesson_id: impl Into<String>,
        lesson_name: impl Into<String>,
        workshop_title: impl Into<String>,
    ) -> bool {
        match self.segment_mut(week, day, segment_id) {
            Some(segment) if segment.category != SegmentCategory::Break => {
                segment.title = workshop_title.into();
                segment.lesson_id = Some(lesson_id.into());
                segment.lesson_name = Some(lesson_name.into());
                segment.category = SegmentCategory::Workshop;
                true
            }
            _ => false,
        }
    }

    /// Reverts a customized workshop to its placeholder form.
    ///
    /// Only applies to segments with a lesson attached: the title goes
    /// back to the literal [`PLACEHOLDER_TITLE`] and the lesson fields
    /// clear. Anything else, including every Break segment, is a no-op.
    ///
    /// Returns whether a segment was modified.
    pub fn detach_lesson(&mut self, segment_id: &str, week: u32, day: Weekday) -> bool {
        match self.segment_mut(week, day, segment_id) {
            Some(segment) if segment.has_lesson() => {
                segment.title = PLACEHOLDER_TITLE.to_string();
                segment.lesson_id = None;
                segment.lesson_name = None;
                true
            }
            _ => false,
        }
    }

    /// Number of weeks in the grid.
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }
}
