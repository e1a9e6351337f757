//! Lesson catalog interface.
//!
//! The curriculum lives outside the engine; planning only needs to
//! browse products, academies, and lessons, and to resolve a lesson
//! by id or code when attaching it to a workshop slot. [`StaticCatalog`]
//! is the in-memory implementation used for fixed data sets and tests.

use crate::models::{Academy, Lesson, Product};

/// External curriculum catalog.
pub trait LessonCatalog {
    /// All products.
    fn products(&self) -> Vec<Product>;
    /// Delivery academies under one product.
    fn academies_for_product(&self, product_id: &str) -> Vec<Academy>;
    /// Lessons for a product, optionally narrowed to one academy.
    fn lessons_for(&self, product_id: &str, academy_id: Option<&str>) -> Vec<Lesson>;
}

/// Catalog backed by fixed in-memory data.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    academies: Vec<Academy>,
    lessons: Vec<Lesson>,
}

impl StaticCatalog {
    /// Creates a catalog over prepared data.
    pub fn new(products: Vec<Product>, academies: Vec<Academy>, lessons: Vec<Lesson>) -> Self {
        Self {
            products,
            academies,
            lessons,
        }
    }

    /// Looks a lesson up by id.
    pub fn lesson_by_id(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    /// Looks a lesson up by its display code.
    pub fn lesson_by_code(&self, code: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.code == code)
    }

    /// Whether a lesson code is already taken, optionally ignoring one
    /// lesson (the one being edited).
    pub fn lesson_code_exists(&self, code: &str, exclude_id: Option<&str>) -> bool {
        self.lessons
            .iter()
            .any(|l| l.code == code && exclude_id.map_or(true, |ex| l.id != ex))
    }
}

impl LessonCatalog for StaticCatalog {
    fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn academies_for_product(&self, product_id: &str) -> Vec<Academy> {
        self.academies
            .iter()
            .filter(|a| a.product_id == product_id)
            .cloned()
            .collect()
    }

    fn lessons_for(&self, product_id: &str, academy_id: Option<&str>) -> Vec<Lesson> {
        self.lessons
            .iter()
            .filter(|l| {
                l.product_id == product_id
                    && academy_id.map_or(true, |a| l.academy_id.as_deref() == Some(a))
            })
            .cloned()
            .collect()
    }
}
