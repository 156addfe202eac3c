//! Resource model.
//!
//! Two kinds of resources host a section simultaneously: a classroom and
//! a teacher. Both are derived entities, created once per scheduling run
//! and sized to the calculated minimums.

use serde::{Deserialize, Serialize};

use super::{Course, RoomCategory, SubjectArea};

/// A physical classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Room category.
    pub category: RoomCategory,
    /// Seats (at least the maximum class size).
    pub capacity: u32,
}

/// A teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Subject areas the teacher is certified for (normally one).
    pub subject_areas: Vec<SubjectArea>,
    /// Whether the teacher may teach AP sections.
    pub ap_qualified: bool,
    /// Teaching periods per day (one period is reserved for planning).
    pub max_periods_per_day: u32,
}

impl Classroom {
    /// Creates a classroom.
    pub fn new(id: impl Into<String>, category: RoomCategory) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category,
            capacity: 25,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether a section of `course` may meet in this room.
    ///
    /// General-purpose courses fit anywhere; specialized courses need a
    /// room of their exact category.
    pub fn can_host(&self, course: &Course) -> bool {
        course.room_category.is_general() || self.category == course.room_category
    }
}

impl Teacher {
    /// Creates a regular-only teacher for one subject area.
    pub fn new(id: impl Into<String>, subject: SubjectArea) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subject_areas: vec![subject],
            ap_qualified: false,
            max_periods_per_day: 5,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds another certified subject area.
    pub fn with_subject(mut self, subject: SubjectArea) -> Self {
        if !self.subject_areas.contains(&subject) {
            self.subject_areas.push(subject);
        }
        self
    }

    /// Marks the teacher AP-qualified.
    pub fn ap_qualified(mut self) -> Self {
        self.ap_qualified = true;
        self
    }

    /// Sets the daily teaching period limit.
    pub fn with_max_periods(mut self, periods: u32) -> Self {
        self.max_periods_per_day = periods;
        self
    }

    /// Whether the teacher is certified for a subject area.
    pub fn teaches_subject(&self, subject: SubjectArea) -> bool {
        self.subject_areas.contains(&subject)
    }

    /// Whether the teacher may teach a section of `course`.
    pub fn can_teach(&self, course: &Course) -> bool {
        self.teaches_subject(course.subject_area) && (!course.is_ap() || self.ap_qualified)
    }

    /// Sections the teacher may carry across both semesters.
    pub fn yearly_capacity(&self) -> u32 {
        self.max_periods_per_day * 2
    }
}
