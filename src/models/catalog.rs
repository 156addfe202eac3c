//! Course catalog.
//!
//! An explicit, immutable lookup table from course code to [`Course`].
//! Built once and passed by reference to the calculator and scheduler.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Course;
use crate::error::{Error, Result};

/// The set of courses a school offers, keyed by course code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    courses: BTreeMap<String, Course>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting duplicate codes.
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Result<Self> {
        let mut catalog = Self::new();
        for course in courses {
            catalog.insert(course)?;
        }
        Ok(catalog)
    }

    /// Adds a course. Fails if the code is already present.
    pub fn insert(&mut self, course: Course) -> Result<()> {
        if self.courses.contains_key(&course.code) {
            return Err(Error::DuplicateCourse(course.code));
        }
        self.courses.insert(course.code.clone(), course);
        Ok(())
    }

    /// Adds a course (builder form).
    pub fn with_course(mut self, course: Course) -> Result<Self> {
        self.insert(course)?;
        Ok(self)
    }

    /// Looks up a course by code.
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Whether the catalog contains a code.
    pub fn contains(&self, code: &str) -> bool {
        self.courses.contains_key(code)
    }

    /// Iterates courses in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
