//! Best-effort persistence over an external blob store.
//!
//! The store is a flat key-to-JSON map with no schema versioning, one
//! key per logical dataset. Writes are fire-and-forget: a failed write
//! is logged and the in-memory state stays authoritative, only
//! durability is lost. Reads degrade to `None` (or to the built-in
//! data set) on any failure, including a stored value that no longer
//! matches the expected shape.

use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::engine::PlannerSnapshot;
use crate::models::{Lesson, LessonCohortMapping};

/// Storage keys, one per logical dataset.
pub mod keys {
    /// Planning session snapshot.
    pub const PLANNER_STATE: &str = "planner:state";
    /// User-created lessons.
    pub const LESSONS: &str = "planner:lessons";
    /// Lesson-to-cohort mappings.
    pub const LESSON_COHORT_MAPPINGS: &str = "planner:lesson-cohort-mappings";
}

/// Blob store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend refused or failed the operation.
    #[error("blob store backend error: {0}")]
    Backend(String),
    /// The value could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// External key-to-JSON blob store.
///
/// Implementations may sit on browser storage, a file, or a remote
/// service; the engine only ever gets and sets whole values.
pub trait BlobStore {
    /// Reads the value at a key, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    /// Writes the value at a key, replacing any previous value.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// In-memory blob store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

fn persist<T: Serialize>(store: &mut dyn BlobStore, key: &str, value: &T) -> bool {
    let json = match serde_json::to_value(value) {
        Ok(json) => json,
        Err(err) => {
            warn!(key, %err, "failed to serialize value for blob store");
            return false;
        }
    };
    match store.set(key, json) {
        Ok(()) => true,
        Err(err) => {
            warn!(key, %err, "blob store write failed, in-memory state unaffected");
            false
        }
    }
}

fn fetch<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> Option<T> {
    let value = match store.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, %err, "blob store read failed");
            return None;
        }
    };
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            warn!(key, %err, "stored value does not match the expected shape");
            None
        }
    }
}

/// Saves a session snapshot. Returns whether the write stuck.
pub fn save_planner(store: &mut dyn BlobStore, snapshot: &PlannerSnapshot) -> bool {
    persist(store, keys::PLANNER_STATE, snapshot)
}

/// Loads the saved session snapshot, if any.
pub fn load_planner(store: &dyn BlobStore) -> Option<PlannerSnapshot> {
    fetch(store, keys::PLANNER_STATE)
}

/// Saves user-created lessons.
pub fn save_lessons(store: &mut dyn BlobStore, lessons: &[Lesson]) -> bool {
    persist(store, keys::LESSONS, &lessons)
}

/// Loads the combined lesson catalog: built-in lessons first, then
/// stored user lessons whose ids are not already taken by a built-in.
pub fn load_lessons(store: &dyn BlobStore, builtin: &[Lesson]) -> Vec<Lesson> {
    let stored: Vec<Lesson> = fetch(store, keys::LESSONS).unwrap_or_default();
    let builtin_ids: HashSet<&str> = builtin.iter().map(|l| l.id.as_str()).collect();

    let mut lessons = builtin.to_vec();
    lessons.extend(
        stored
            .into_iter()
            .filter(|l| !builtin_ids.contains(l.id.as_str())),
    );
    lessons
}

/// Saves lesson-to-cohort mappings.
pub fn save_mappings(store: &mut dyn BlobStore, mappings: &[LessonCohortMapping]) -> bool {
    persist(store, keys::LESSON_COHORT_MAPPINGS, &mappings)
}

/// Loads lesson-to-cohort mappings, empty when none are stored.
pub fn load_mappings(store: &dyn BlobStore) -> Vec<LessonCohortMapping> {
    fetch(store, keys::LESSON_COHORT_MAPPINGS).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Planner;
    use crate::models::Weekday;
    use chrono::NaiveDate;
    use serde_json::json;

    /// Store whose operations always fail, for exercising the
    /// degrade-to-no-op paths.
    struct BrokenStore;

    impl BlobStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
            Err(StoreError::Backend("read refused".to_string()))
        }

        fn set(&mut self, _key: &str, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::Backend("write refused".to_string()))
        }
    }

    fn lesson(id: &str) -> Lesson {
        Lesson::new(id, format!("Lesson {id}"), format!("code-{id}"), "product-1", 60)
    }

    #[test]
    fn test_planner_snapshot_round_trip() {
        let mut planner = Planner::new();
        planner.set_start_date(NaiveDate::from_ymd_opt(2026, 2, 9).unwrap());
        planner.toggle_assignment("mon-ws1", 1, Weekday::Monday, "staff-1");

        let mut store = MemoryStore::new();
        assert!(save_planner(&mut store, &planner.snapshot()));

        let restored = load_planner(&store).unwrap();
        assert_eq!(restored, planner.snapshot());
    }

    #[test]
    fn test_load_absent_key_is_none() {
        let store = MemoryStore::new();
        assert!(load_planner(&store).is_none());
        assert!(load_mappings(&store).is_empty());
    }

    #[test]
    fn test_malformed_stored_value_is_ignored() {
        let mut store = MemoryStore::new();
        store
            .set(keys::PLANNER_STATE, json!({"week": "not a snapshot"}))
            .unwrap();
        assert!(load_planner(&store).is_none());
    }

    #[test]
    fn test_broken_store_degrades_to_no_op() {
        let mut store = BrokenStore;
        let planner = Planner::new();

        assert!(!save_planner(&mut store, &planner.snapshot()));
        assert!(load_planner(&store).is_none());
        assert!(load_lessons(&store, &[lesson("builtin-1")]).len() == 1);
    }

    #[test]
    fn test_lessons_merge_prefers_builtin() {
        let mut store = MemoryStore::new();
        // Stored set: one clashing id, one genuinely user-created
        let clashing = Lesson::new("builtin-1", "Stale copy", "code-x", "product-1", 90);
        save_lessons(&mut store, &[clashing, lesson("user-1")]);

        let builtin = vec![lesson("builtin-1")];
        let combined = load_lessons(&store, &builtin);

        assert_eq!(combined.len(), 2);
        assert_eq!(combined[0].id, "builtin-1");
        assert_eq!(combined[0].title, "Lesson builtin-1");
        assert_eq!(combined[1].id, "user-1");
    }

    #[test]
    fn test_mappings_round_trip() {
        let mut store = MemoryStore::new();
        let mapping = LessonCohortMapping::new("map-1", "cohort-1", "product-1", "academy-1")
            .with_lesson("lesson-001");
        save_mappings(&mut store, &[mapping.clone()]);

        assert_eq!(load_mappings(&store), vec![mapping]);
    }
}
