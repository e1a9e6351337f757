//! Assignment engine: board state, greedy auto-fill, completion.
//!
//! The engine is the mutable heart of the crate. [`AssignmentBoard`]
//! holds the raw records and enforces the toggle and cap rules;
//! [`auto_assign`] runs the single-pass first-fit heuristic over a
//! week; the completion functions derive coverage views; [`Planner`]
//! wraps all of it, plus the calendar and customization operations,
//! into one session object.
//!
//! # Algorithm
//!
//! Auto-fill is a greedy, roster-order, first-fit pass. It is not
//! optimal and deliberately so: the cap and the list order are the
//! only constraints, and slots left open are an acceptable outcome.
//!
//! # References
//!
//! - Ernst, Jiang, Krishnamoorthy & Sier (2004), "Staff scheduling and
//!   rostering: A review of applications, methods and models"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2

mod auto;
mod board;
mod completion;
mod planner;

pub use auto::auto_assign;
pub use board::{AssignmentBoard, CapPolicy, ToggleOutcome, WEEKLY_ASSIGNMENT_CAP};
pub use completion::{completed_weeks, is_week_complete, WeekProgress};
pub use planner::{MondayPolicy, Planner, PlannerSnapshot};
