//! Resource pool construction.
//!
//! Pools are sized exactly to the calculated minimums; no slack is added.

use log::info;
use std::collections::BTreeMap;

use crate::capacity::{Requirements, TeacherRequirement};
use crate::config::SchoolConfig;
use crate::models::{Classroom, RoomCategory, SubjectArea, Teacher};

/// Classrooms and teachers available to one scheduling run.
///
/// Order is resource identity order: classrooms grouped by category
/// declaration order, teachers grouped by subject area with AP-qualified
/// teachers first. The placer always picks the first free resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePool {
    /// Classrooms.
    pub classrooms: Vec<Classroom>,
    /// Teachers.
    pub teachers: Vec<Teacher>,
}

impl ResourcePool {
    /// Creates a pool from explicit resources.
    pub fn new(classrooms: Vec<Classroom>, teachers: Vec<Teacher>) -> Self {
        Self {
            classrooms,
            teachers,
        }
    }

    /// Instantiates exactly the minimum rooms and teachers.
    ///
    /// # Example
    /// ```
    /// use std::collections::BTreeMap;
    /// use u_timetable::capacity::teachers_for_sections;
    /// use u_timetable::config::SchoolConfig;
    /// use u_timetable::models::{RoomCategory, SubjectArea};
    /// use u_timetable::scheduler::ResourcePool;
    ///
    /// let rooms = BTreeMap::from([(RoomCategory::General, 2), (RoomCategory::ChemistryLab, 1)]);
    /// let teachers = BTreeMap::from([(SubjectArea::Mathematics, teachers_for_sections(3, 6, 5))]);
    ///
    /// let pool = ResourcePool::build(&rooms, &teachers, &SchoolConfig::new());
    /// let ids: Vec<&str> = pool.teachers.iter().map(|t| t.id.as_str()).collect();
    /// assert_eq!(ids, ["MATH_AP_1", "MATH_REG_1"]);
    /// assert_eq!(pool.classrooms[2].id, "CHEM_LAB_1");
    /// ```
    pub fn build(
        min_classrooms: &BTreeMap<RoomCategory, u32>,
        min_teachers: &BTreeMap<SubjectArea, TeacherRequirement>,
        config: &SchoolConfig,
    ) -> Self {
        let mut classrooms = Vec::new();
        for (&category, &count) in min_classrooms {
            for i in 1..=count {
                classrooms.push(
                    Classroom::new(format!("{}_{i}", category.id_prefix()), category)
                        .with_name(format!("{} {i}", category.display_name()))
                        .with_capacity(config.max_class_size),
                );
            }
        }

        let cap = config.teaching_cap();
        let mut teachers = Vec::new();
        for (&subject, need) in min_teachers {
            let abbr = subject.abbreviation();
            for i in 1..=need.ap_qualified {
                teachers.push(
                    Teacher::new(format!("{abbr}_AP_{i}"), subject)
                        .with_name(format!("{} AP Teacher {i}", subject.display_name()))
                        .ap_qualified()
                        .with_max_periods(cap),
                );
            }
            for i in 1..=need.regular_only {
                teachers.push(
                    Teacher::new(format!("{abbr}_REG_{i}"), subject)
                        .with_name(format!("{} Teacher {i}", subject.display_name()))
                        .with_max_periods(cap),
                );
            }
        }

        info!(
            "Built resource pool: {} classrooms, {} teachers",
            classrooms.len(),
            teachers.len()
        );
        Self {
            classrooms,
            teachers,
        }
    }

    /// Builds the pool from a calculator result.
    pub fn from_requirements(requirements: &Requirements, config: &SchoolConfig) -> Self {
        Self::build(&requirements.min_classrooms, &requirements.min_teachers, config)
    }

    /// Classrooms of one category.
    pub fn classrooms_of(&self, category: RoomCategory) -> impl Iterator<Item = &Classroom> {
        self.classrooms.iter().filter(move |c| c.category == category)
    }

    /// Teachers certified for one subject area.
    pub fn teachers_of(&self, subject: SubjectArea) -> impl Iterator<Item = &Teacher> {
        self.teachers.iter().filter(move |t| t.teaches_subject(subject))
    }
}
