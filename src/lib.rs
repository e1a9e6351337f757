//! Staff-to-workshop assignment engine for multi-week training
//! programmes.
//!
//! Models a fixed ten-week, Monday-to-Thursday delivery grid and the
//! rules for staffing it: calendar mapping from week/day coordinates
//! to dates, per-week assignment caps, a greedy auto-fill pass, lesson
//! customization of workshop slots, and completion tracking. The crate
//! is a library consumed by a UI shell; it owns no transport, no CLI,
//! and no rendering.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Programme`, `Segment`, `Staff`,
//!   `SegmentAssignment`, the lesson catalog records, `SchedulePayload`)
//! - **`calendar`**: Monday normalization, the week-by-day date table,
//!   and programme-span availability checks
//! - **`template`**: The canonical ten-week programme grid
//! - **`availability`**: Roster filtering and per-day availability
//! - **`engine`**: The assignment board, greedy auto-fill, completion
//!   tracking, and the `Planner` session object
//! - **`validation`**: Save-gate and reference-data integrity checks
//! - **`store`**: Best-effort persistence over an external blob store
//! - **`catalog`**: Lesson catalog interface for workshop customization
//!
//! # Architecture
//!
//! All state lives in an explicit [`engine::Planner`] owned by the
//! caller; there are no module-level singletons. Every operation is
//! synchronous, total, and panic-free: malformed lookups degrade to
//! no-ops and failed persistence only costs durability.
//!
//! # References
//!
//! - Ernst, Jiang, Krishnamoorthy & Sier (2004), "Staff scheduling and
//!   rostering: A review of applications, methods and models"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod availability;
pub mod calendar;
pub mod catalog;
pub mod engine;
pub mod models;
pub mod store;
pub mod template;
pub mod validation;
