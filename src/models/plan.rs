//! Graduation path plans.
//!
//! A graduation path is a four-year course sequence. Each year lists the
//! course codes taken in each semester; a code present in both lists is
//! a year-long enrollment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier of a graduation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GraduationPath {
    /// Minimum requirements, no AP courses.
    Minimum,
    /// Pre-medical track.
    PreMed,
    /// Engineering / computer science track.
    Engineering,
}

impl GraduationPath {
    /// All paths in canonical order.
    pub const ALL: [GraduationPath; 3] = [
        GraduationPath::Minimum,
        GraduationPath::PreMed,
        GraduationPath::Engineering,
    ];

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GraduationPath::Minimum => "Minimum Requirements",
            GraduationPath::PreMed => "Pre-Medical Track",
            GraduationPath::Engineering => "Engineering Track",
        }
    }
}

/// One of the two halves of the academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Semester {
    /// Fall semester.
    First,
    /// Spring semester.
    Second,
}

impl Semester {
    /// Both semesters in order.
    pub const BOTH: [Semester; 2] = [Semester::First, Semester::Second];

    /// 1 or 2.
    #[inline]
    pub fn number(&self) -> u8 {
        match self {
            Semester::First => 1,
            Semester::Second => 2,
        }
    }

    /// Zero-based index for availability tables.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Semester::First => 0,
            Semester::Second => 1,
        }
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "semester {}", self.number())
    }
}

/// Courses planned for one year of a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPlan {
    /// 1 = freshman (grade 9) through 4 = senior (grade 12).
    pub year: u8,
    /// Course codes taken in semester 1.
    pub semester1: Vec<String>,
    /// Course codes taken in semester 2.
    pub semester2: Vec<String>,
}

impl YearPlan {
    /// Creates a year plan from two semester lists.
    pub fn new<S: Into<String>>(
        year: u8,
        semester1: impl IntoIterator<Item = S>,
        semester2: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            year,
            semester1: semester1.into_iter().map(Into::into).collect(),
            semester2: semester2.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a year plan where both semesters take the same courses.
    pub fn year_long<S: Into<String>>(year: u8, courses: impl IntoIterator<Item = S>) -> Self {
        let codes: Vec<String> = courses.into_iter().map(Into::into).collect();
        Self {
            year,
            semester1: codes.clone(),
            semester2: codes,
        }
    }

    /// Distinct course codes across both semesters, in code order.
    pub fn all_courses(&self) -> BTreeSet<&str> {
        self.semester1
            .iter()
            .chain(self.semester2.iter())
            .map(String::as_str)
            .collect()
    }

    /// Codes listed in both semesters.
    pub fn year_long_courses(&self) -> BTreeSet<&str> {
        let second: BTreeSet<&str> = self.semester2.iter().map(String::as_str).collect();
        self.semester1
            .iter()
            .map(String::as_str)
            .filter(|c| second.contains(c))
            .collect()
    }

    /// Course codes listed for a semester.
    pub fn courses_in(&self, semester: Semester) -> &[String] {
        match semester {
            Semester::First => &self.semester1,
            Semester::Second => &self.semester2,
        }
    }
}

/// A complete four-year plan for a graduation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraduationPathPlan {
    /// Path identifier.
    pub path: GraduationPath,
    /// Free-form description.
    pub description: String,
    /// Year plans, grade 9 first.
    pub years: Vec<YearPlan>,
}

impl GraduationPathPlan {
    /// Creates an empty plan for a path.
    pub fn new(path: GraduationPath) -> Self {
        Self {
            path,
            description: String::new(),
            years: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a year plan.
    pub fn with_year(mut self, year: YearPlan) -> Self {
        self.years.push(year);
        self
    }

    /// Distinct course codes across all four years.
    pub fn all_courses(&self) -> BTreeSet<&str> {
        self.years.iter().flat_map(|y| y.all_courses()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_plan_dedup() {
        let y = YearPlan::new(4, ["ENG12", "GOVT", "REL4"], ["ENG12", "ECON", "REL4"]);
        let all: Vec<&str> = y.all_courses().into_iter().collect();
        assert_eq!(all, vec!["ECON", "ENG12", "GOVT", "REL4"]);

        let year_long: Vec<&str> = y.year_long_courses().into_iter().collect();
        assert_eq!(year_long, vec!["ENG12", "REL4"]);
    }

    #[test]
    fn test_semester_helpers() {
        assert_eq!(Semester::First.number(), 1);
        assert_eq!(Semester::Second.index(), 1);
        assert_eq!(Semester::Second.to_string(), "semester 2");
        let y = YearPlan::year_long(1, ["ENG9", "ALG1"]);
        assert_eq!(y.courses_in(Semester::Second), y.courses_in(Semester::First));
    }

    #[test]
    fn test_path_all_courses() {
        let plan = GraduationPathPlan::new(GraduationPath::Minimum)
            .with_year(YearPlan::year_long(1, ["ENG9", "ALG1"]))
            .with_year(YearPlan::year_long(2, ["ENG10", "ALG1"]));
        assert_eq!(plan.all_courses().len(), 3);
    }
}
