//! Catalog reference models.
//!
//! Products, academies, lessons, cohorts, and lesson-to-cohort
//! mappings come from an external catalog system. The planner consumes
//! ids and display fields only and never writes back to the catalog;
//! the one exception is user-created lessons, which round-trip through
//! the blob store.

use serde::{Deserialize, Serialize};

/// A programme product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

impl Product {
    /// Creates a product.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A delivery site belonging to one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Academy {
    /// Unique academy identifier.
    pub id: String,
    /// Owning product.
    pub product_id: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

impl Academy {
    /// Creates an academy.
    pub fn new(id: impl Into<String>, product_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            name: name.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A catalogued lesson that can be attached to a workshop slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique lesson identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short reference code, unique per catalog.
    pub code: String,
    /// Owning product.
    pub product_id: String,
    /// Owning academy; absent means available product-wide.
    pub academy_id: Option<String>,
    /// Planned length in minutes.
    pub duration_minutes: u32,
    /// Optional description.
    pub description: Option<String>,
    /// Learning objectives, if catalogued.
    pub learning_objectives: Vec<String>,
}

impl Lesson {
    /// Creates a lesson.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        code: impl Into<String>,
        product_id: impl Into<String>,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            code: code.into(),
            product_id: product_id.into(),
            academy_id: None,
            duration_minutes,
            description: None,
            learning_objectives: Vec::new(),
        }
    }

    /// Scopes the lesson to one academy.
    pub fn with_academy(mut self, academy_id: impl Into<String>) -> Self {
        self.academy_id = Some(academy_id.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a learning objective.
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.learning_objectives.push(objective.into());
        self
    }
}

/// A participant group a schedule is planned for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    /// Unique cohort identifier.
    pub id: String,
    /// Human-facing cohort code.
    pub code: String,
    /// Academy the cohort belongs to.
    pub academy_id: String,
    /// Regular session day, when fixed (display data).
    pub day_of_week: Option<String>,
    /// Regular session time, when fixed (display data).
    pub session_time: Option<String>,
    /// Maximum participant count, when capped.
    pub max_participants: Option<u32>,
}

impl Cohort {
    /// Creates a cohort.
    pub fn new(id: impl Into<String>, code: impl Into<String>, academy_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            academy_id: academy_id.into(),
            day_of_week: None,
            session_time: None,
            max_participants: None,
        }
    }

    /// Sets the regular session slot.
    pub fn with_session(mut self, day_of_week: impl Into<String>, session_time: impl Into<String>) -> Self {
        self.day_of_week = Some(day_of_week.into());
        self.session_time = Some(session_time.into());
        self
    }

    /// Caps the participant count.
    pub fn with_max_participants(mut self, max: u32) -> Self {
        self.max_participants = Some(max);
        self
    }
}

/// Lessons mapped onto one cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonCohortMapping {
    /// Unique mapping identifier.
    pub id: String,
    /// Mapped lesson ids.
    pub lesson_ids: Vec<String>,
    /// Target cohort.
    pub cohort_id: String,
    /// Product scope of the mapping.
    pub product_id: String,
    /// Academy scope of the mapping.
    pub academy_id: String,
}

impl LessonCohortMapping {
    /// Creates an empty mapping.
    pub fn new(
        id: impl Into<String>,
        cohort_id: impl Into<String>,
        product_id: impl Into<String>,
        academy_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            lesson_ids: Vec::new(),
            cohort_id: cohort_id.into(),
            product_id: product_id.into(),
            academy_id: academy_id.into(),
        }
    }

    /// Adds a lesson to the mapping.
    pub fn with_lesson(mut self, lesson_id: impl Into<String>) -> Self {
        self.lesson_ids.push(lesson_id.into());
        self
    }

    /// Number of mapped lessons.
    #[inline]
    pub fn mapped_lesson_count(&self) -> usize {
        self.lesson_ids.len()
    }
}
