//! Default programme template.
//!
//! Builds the standard ten-week Monday-Thursday curriculum: every
//! delivery day carries a 120-minute morning block, a 15-minute break,
//! and a 60-minute afternoon block, pinned to the same three wall-clock
//! slots in every week. Segment ids repeat across weeks because they
//! name template slots; each week still owns an independent segment
//! copy so per-week customization never leaks between weeks.

use chrono::NaiveTime;

use crate::calendar::PROGRAMME_WEEKS;
use crate::models::{
    DayPlan, Programme, ProgrammeWeek, Segment, SegmentCategory, TimeSlot, Weekday,
};

/// Morning workshop slot, 10:00-12:00.
pub const SLOT_MORNING: &str = "slot-morning";
/// Midday break slot, 12:00-12:15.
pub const SLOT_BREAK: &str = "slot-break";
/// Afternoon workshop slot, 12:15-13:15.
pub const SLOT_AFTERNOON: &str = "slot-afternoon";

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or(NaiveTime::MIN)
}

/// The three fixed daily time slots shared by every week.
pub fn time_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::new(SLOT_MORNING, hm(10, 0), hm(12, 0), 120),
        TimeSlot::new(SLOT_BREAK, hm(12, 0), hm(12, 15), 15),
        TimeSlot::new(SLOT_AFTERNOON, hm(12, 15), hm(13, 15), 60),
    ]
}

fn standard_day(day: Weekday, morning: Segment, break_id: &str, afternoon: Segment) -> DayPlan {
    DayPlan::new(day)
        .with_segment(morning.with_time_slot(SLOT_MORNING))
        .with_segment(
            Segment::new(break_id, "Break", 15, SegmentCategory::Break).with_time_slot(SLOT_BREAK),
        )
        .with_segment(afternoon.with_time_slot(SLOT_AFTERNOON))
}

/// Template day plan for one delivery day.
pub fn day_plan(day: Weekday) -> DayPlan {
    match day {
        Weekday::Monday => standard_day(
            day,
            Segment::new("mon-ws1", "Workshop 1", 120, SegmentCategory::Workshop),
            "mon-brk",
            Segment::new("mon-ws2", "Workshop 2", 60, SegmentCategory::Workshop),
        ),
        Weekday::Tuesday => standard_day(
            day,
            Segment::new("tue-ws1", "Workshop 3", 120, SegmentCategory::Workshop),
            "tue-brk",
            Segment::new("tue-ws2", "Workshop 4", 60, SegmentCategory::Workshop),
        ),
        Weekday::Wednesday => standard_day(
            day,
            Segment::new("wed-ws1", "Qualification Unit", 120, SegmentCategory::Qualification),
            "wed-brk",
            Segment::new("wed-ws2", "Functional Skills", 60, SegmentCategory::Employability),
        ),
        Weekday::Thursday => standard_day(
            day,
            Segment::new("thu-ws1", "Employability", 120, SegmentCategory::Employability),
            "thu-brk",
            Segment::new("thu-ws2", "Team Activity", 60, SegmentCategory::Sport),
        ),
    }
}

/// Builds the default ten-week programme.
pub fn default_programme() -> Programme {
    let weeks = (1..=PROGRAMME_WEEKS)
        .map(|week| {
            Weekday::ALL
                .into_iter()
                .fold(ProgrammeWeek::new(week), |w, day| w.with_day(day_plan(day)))
        })
        .collect();
    Programme::new(weeks)
}
