//! Demand and capacity calculation.
//!
//! # Algorithm
//!
//! 1. For every path and year, add the path's enrollment to the demand of
//!    each distinct course code in that year.
//! 2. Sections per (course, year) = ceil(demand / max class size).
//! 3. All four grades run concurrently, so rooms and teachers are sized
//!    against each course's section total summed over years.
//! 4. Rooms per category = ceil(sections / periods per day).
//! 5. Teachers per subject: AP-qualified staff first, their spare
//!    capacity absorbs regular sections, the remainder needs
//!    regular-only staff.
//!
//! The computation is a pure function of its inputs. All maps are ordered
//! so results are reproducible.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::config::SchoolConfig;
use crate::error::Result;
use crate::models::{Catalog, GraduationPathPlan, RoomCategory, Semester, SubjectArea};

/// Section counts per course code, then per year (1-4).
pub type SectionDemand = BTreeMap<String, BTreeMap<u8, u32>>;

/// Teacher headcount for one subject area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRequirement {
    /// Teachers qualified for AP sections (they also teach regular ones).
    pub ap_qualified: u32,
    /// Teachers limited to regular sections.
    pub regular_only: u32,
    /// `ap_qualified + regular_only`.
    pub total: u32,
}

/// All calculated resource requirements for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    /// Sections per course per year.
    pub sections_needed: SectionDemand,
    /// Sections per course summed over years.
    pub course_sections: BTreeMap<String, u32>,
    /// Sections per year summed over courses.
    pub sections_per_year: BTreeMap<u8, u32>,
    /// Minimum classrooms per room category.
    pub min_classrooms: BTreeMap<RoomCategory, u32>,
    /// Minimum teachers per subject area.
    pub min_teachers: BTreeMap<SubjectArea, TeacherRequirement>,
    /// Semesters in which any plan lists each course.
    pub home_semesters: BTreeMap<String, BTreeSet<Semester>>,
    /// Codes referenced by plans but missing from the catalog.
    pub unknown_courses: Vec<String>,
    /// Known codes whose plan listing disagrees with their catalog duration.
    pub duration_mismatches: Vec<String>,
}

impl Requirements {
    /// Total classrooms across categories.
    pub fn total_classrooms(&self) -> u32 {
        self.min_classrooms.values().sum()
    }

    /// Total teachers across subject areas.
    pub fn total_teachers(&self) -> u32 {
        self.min_teachers.values().map(|t| t.total).sum()
    }

    /// Total sections across all courses and years.
    pub fn total_sections(&self) -> u32 {
        self.course_sections.values().sum()
    }
}

/// Ceiling division for non-negative integers.
#[inline]
pub fn ceil_div(numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    numerator.div_ceil(denominator)
}

/// Minimum rooms for `sections` concurrent sections of one category.
///
/// ```
/// use u_timetable::capacity::rooms_for_sections;
///
/// assert_eq!(rooms_for_sections(13, 6), 3);
/// assert_eq!(rooms_for_sections(12, 6), 2);
/// ```
pub fn rooms_for_sections(sections: u32, periods_per_day: u32) -> u32 {
    ceil_div(sections, periods_per_day)
}

/// Minimum teachers for one subject area.
///
/// `cap` is the number of sections one teacher may carry (periods per day
/// minus the planning period). AP-qualified teachers are sized first; the
/// capacity they have left after their AP sections absorbs regular
/// sections before any regular-only teacher is added.
///
/// ```
/// use u_timetable::capacity::teachers_for_sections;
///
/// let req = teachers_for_sections(12, 10, 5);
/// assert_eq!((req.ap_qualified, req.regular_only, req.total), (3, 2, 5));
/// ```
pub fn teachers_for_sections(ap_sections: u32, regular_sections: u32, cap: u32) -> TeacherRequirement {
    if cap == 0 {
        return TeacherRequirement::default();
    }
    let ap_qualified = ceil_div(ap_sections, cap);
    let ap_leftover = ap_qualified * cap - ap_sections;
    let remaining_regular = regular_sections.saturating_sub(ap_leftover);
    let regular_only = ceil_div(remaining_regular, cap);

    TeacherRequirement {
        ap_qualified,
        regular_only,
        total: ap_qualified + regular_only,
    }
}

/// Derives section counts and minimum resource pools from enrollment.
///
/// # Example
///
/// ```
/// use u_timetable::capacity::CapacityCalculator;
/// use u_timetable::config::SchoolConfig;
/// use u_timetable::models::{Catalog, Course, GraduationPath, GraduationPathPlan, SubjectArea, YearPlan};
///
/// let catalog = Catalog::from_courses(vec![Course::new("ENG9", SubjectArea::English)]).unwrap();
/// let paths = vec![GraduationPathPlan::new(GraduationPath::Minimum)
///     .with_year(YearPlan::year_long(1, ["ENG9"]))];
/// let config = SchoolConfig::new().with_enrollment(GraduationPath::Minimum, 60);
///
/// let calc = CapacityCalculator::new(&catalog, &paths, &config).unwrap();
/// assert_eq!(calc.sections_needed()["ENG9"][&1], 3);
/// ```
#[derive(Debug, Clone)]
pub struct CapacityCalculator<'a> {
    catalog: &'a Catalog,
    paths: &'a [GraduationPathPlan],
    config: &'a SchoolConfig,
}

impl<'a> CapacityCalculator<'a> {
    /// Creates a calculator, rejecting invalid configurations.
    pub fn new(
        catalog: &'a Catalog,
        paths: &'a [GraduationPathPlan],
        config: &'a SchoolConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            paths,
            config,
        })
    }

    /// The configuration this calculator runs with.
    pub fn config(&self) -> &SchoolConfig {
        self.config
    }

    /// Student demand per course per year. Unknown codes are skipped.
    fn course_demand(&self) -> BTreeMap<&'a str, BTreeMap<u8, u32>> {
        let mut demand: BTreeMap<&'a str, BTreeMap<u8, u32>> = BTreeMap::new();

        for plan in self.paths {
            let students = self.config.enrollment_for(plan.path);
            if students == 0 {
                continue;
            }
            for year in &plan.years {
                for code in year.all_courses() {
                    if !self.catalog.contains(code) {
                        continue;
                    }
                    *demand.entry(code).or_default().entry(year.year).or_insert(0) += students;
                }
            }
        }

        demand
    }

    /// Sections needed per course per year.
    ///
    /// A (course, year) pair with zero demand is absent from the result.
    pub fn sections_needed(&self) -> SectionDemand {
        let max_class_size = self.config.max_class_size;
        self.course_demand()
            .into_iter()
            .map(|(code, years)| {
                let sections = years
                    .into_iter()
                    .filter(|&(_, students)| students > 0)
                    .map(|(year, students)| (year, ceil_div(students, max_class_size)))
                    .collect();
                (code.to_string(), sections)
            })
            .collect()
    }

    /// Course codes the plans reference but the catalog lacks.
    pub fn unknown_courses(&self) -> Vec<String> {
        let unknown: BTreeSet<&str> = self
            .paths
            .iter()
            .flat_map(|plan| plan.all_courses())
            .filter(|code| !self.catalog.contains(code))
            .collect();

        for code in &unknown {
            warn!("Plan references course {code} which is not in the catalog; skipping");
        }
        unknown.into_iter().map(String::from).collect()
    }

    /// Known course codes some plan lists against their catalog duration.
    ///
    /// A one-semester course listed in both semesters of a year, or a
    /// year-long course listed in only one, is still scheduled by its
    /// catalog duration; the mismatch is reported so the plan can be fixed.
    pub fn duration_mismatches(&self) -> Vec<String> {
        let mut mismatched: BTreeSet<&str> = BTreeSet::new();
        for plan in self.paths {
            for year in &plan.years {
                let both = year.year_long_courses();
                for code in year.all_courses() {
                    let Some(course) = self.catalog.get(code) else {
                        continue;
                    };
                    if course.is_year_long() != both.contains(code) {
                        mismatched.insert(code);
                    }
                }
            }
        }

        for code in &mismatched {
            warn!("Plan listing of {code} disagrees with its catalog duration");
        }
        mismatched.into_iter().map(String::from).collect()
    }

    /// Minimum classrooms per room category.
    pub fn minimum_classrooms(&self) -> BTreeMap<RoomCategory, u32> {
        self.classrooms_for(&self.sections_needed())
    }

    fn classrooms_for(&self, sections: &SectionDemand) -> BTreeMap<RoomCategory, u32> {
        let mut by_category: BTreeMap<RoomCategory, u32> = BTreeMap::new();
        for (code, years) in sections {
            let Some(course) = self.catalog.get(code) else {
                continue;
            };
            *by_category.entry(course.room_category).or_insert(0) += years.values().sum::<u32>();
        }

        by_category
            .into_iter()
            .filter(|&(_, total)| total > 0)
            .map(|(category, total)| {
                (category, rooms_for_sections(total, self.config.periods_per_day))
            })
            .collect()
    }

    /// Minimum teachers per subject area.
    pub fn minimum_teachers(&self) -> BTreeMap<SubjectArea, TeacherRequirement> {
        self.teachers_for(&self.sections_needed())
    }

    fn teachers_for(&self, sections: &SectionDemand) -> BTreeMap<SubjectArea, TeacherRequirement> {
        // (ap, regular) section totals per subject
        let mut by_subject: BTreeMap<SubjectArea, (u32, u32)> = BTreeMap::new();
        for (code, years) in sections {
            let Some(course) = self.catalog.get(code) else {
                continue;
            };
            let total: u32 = years.values().sum();
            let entry = by_subject.entry(course.subject_area).or_insert((0, 0));
            if course.is_ap() {
                entry.0 += total;
            } else {
                entry.1 += total;
            }
        }

        let cap = self.config.teaching_cap();
        by_subject
            .into_iter()
            .filter(|&(_, (ap, regular))| ap + regular > 0)
            .map(|(subject, (ap, regular))| (subject, teachers_for_sections(ap, regular, cap)))
            .collect()
    }

    /// Semesters in which any enrolled path lists each known course.
    pub fn home_semesters(&self) -> BTreeMap<String, BTreeSet<Semester>> {
        let mut homes: BTreeMap<String, BTreeSet<Semester>> = BTreeMap::new();
        for plan in self.paths {
            if self.config.enrollment_for(plan.path) == 0 {
                continue;
            }
            for year in &plan.years {
                for semester in Semester::BOTH {
                    for code in year.courses_in(semester) {
                        if self.catalog.contains(code) {
                            homes.entry(code.clone()).or_default().insert(semester);
                        }
                    }
                }
            }
        }
        homes
    }

    /// Computes every requirement in one pass.
    pub fn requirements(&self) -> Requirements {
        let sections_needed = self.sections_needed();

        let course_sections: BTreeMap<String, u32> = sections_needed
            .iter()
            .map(|(code, years)| (code.clone(), years.values().sum()))
            .collect();

        let mut sections_per_year: BTreeMap<u8, u32> = BTreeMap::new();
        for years in sections_needed.values() {
            for (&year, &count) in years {
                *sections_per_year.entry(year).or_insert(0) += count;
            }
        }

        let requirements = Requirements {
            min_classrooms: self.classrooms_for(&sections_needed),
            min_teachers: self.teachers_for(&sections_needed),
            home_semesters: self.home_semesters(),
            unknown_courses: self.unknown_courses(),
            duration_mismatches: self.duration_mismatches(),
            course_sections,
            sections_per_year,
            sections_needed,
        };

        debug!(
            "Requirements: {} sections, {} classrooms, {} teachers",
            requirements.total_sections(),
            requirements.total_classrooms(),
            requirements.total_teachers()
        );
        requirements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{Course, GraduationPath, YearPlan};
    use proptest::prelude::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_courses(vec![
            Course::new("ENG9", SubjectArea::English),
            Course::new("ENG10", SubjectArea::English),
            Course::new("ENG11-AP", SubjectArea::English).ap(),
            Course::new("BIO", SubjectArea::LaboratoryScience).with_room(RoomCategory::BiologyLab),
            Course::new("PE9", SubjectArea::PhysicalEducation).with_room(RoomCategory::Gymnasium),
            Course::new("GOVT", SubjectArea::HistorySocialScience).one_semester(),
            Course::new("ECON", SubjectArea::HistorySocialScience).one_semester(),
        ])
        .unwrap()
    }

    fn sample_paths() -> Vec<GraduationPathPlan> {
        vec![
            GraduationPathPlan::new(GraduationPath::Minimum)
                .with_year(YearPlan::year_long(1, ["ENG9", "BIO", "PE9"]))
                .with_year(YearPlan::new(2, ["ENG10", "GOVT", "REL2"], ["ENG10", "ECON", "REL2"])),
            GraduationPathPlan::new(GraduationPath::PreMed)
                .with_year(YearPlan::year_long(1, ["ENG9", "BIO", "PE9"]))
                .with_year(YearPlan::year_long(3, ["ENG11-AP"])),
        ]
    }

    fn config(minimum: u32, premed: u32) -> SchoolConfig {
        SchoolConfig::new()
            .with_enrollment(GraduationPath::Minimum, minimum)
            .with_enrollment(GraduationPath::PreMed, premed)
    }

    #[test]
    fn test_sections_needed() {
        let catalog = sample_catalog();
        let paths = sample_paths();
        let cfg = config(30, 20);
        let calc = CapacityCalculator::new(&catalog, &paths, &cfg).unwrap();

        let sections = calc.sections_needed();
        // ENG9: 30 + 20 = 50 students in year 1 → 2 sections
        assert_eq!(sections["ENG9"][&1], 2);
        // ENG10: 30 students in year 2 → 2 sections
        assert_eq!(sections["ENG10"][&2], 2);
        // ENG11-AP: 20 students → 1 section
        assert_eq!(sections["ENG11-AP"][&3], 1);
        // GOVT appears once in the year even though only one semester lists it
        assert_eq!(sections["GOVT"][&2], 2);
        // Unknown code skipped
        assert!(!sections.contains_key("REL2"));
    }

    #[test]
    fn test_zero_enrollment_absent() {
        let catalog = sample_catalog();
        let paths = sample_paths();
        let cfg = config(0, 20);
        let calc = CapacityCalculator::new(&catalog, &paths, &cfg).unwrap();

        let sections = calc.sections_needed();
        assert!(!sections.contains_key("ENG10"));
        assert!(!sections.contains_key("GOVT"));
        assert_eq!(sections["ENG9"][&1], 1);
    }

    #[test]
    fn test_duplicate_codes_in_year_counted_once() {
        let catalog = sample_catalog();
        let paths = vec![GraduationPathPlan::new(GraduationPath::Minimum)
            .with_year(YearPlan::new(1, ["ENG9", "ENG9"], ["ENG9"]))];
        let cfg = config(25, 0);
        let calc = CapacityCalculator::new(&catalog, &paths, &cfg).unwrap();
        assert_eq!(calc.sections_needed()["ENG9"][&1], 1);
    }

    #[test]
    fn test_minimum_classrooms() {
        let catalog = sample_catalog();
        let paths = sample_paths();
        let cfg = config(30, 20);
        let calc = CapacityCalculator::new(&catalog, &paths, &cfg).unwrap();

        let rooms = calc.minimum_classrooms();
        // General: ENG9 2 + ENG10 2 + ENG11-AP 1 + GOVT 2 + ECON 2 = 9 → ceil(9/6) = 2
        assert_eq!(rooms[&RoomCategory::General], 2);
        assert_eq!(rooms[&RoomCategory::BiologyLab], 1);
        assert_eq!(rooms[&RoomCategory::Gymnasium], 1);
        assert!(!rooms.contains_key(&RoomCategory::ChemistryLab));
    }

    #[test]
    fn test_minimum_teachers() {
        let catalog = sample_catalog();
        let paths = sample_paths();
        let cfg = config(30, 20);
        let calc = CapacityCalculator::new(&catalog, &paths, &cfg).unwrap();

        let teachers = calc.minimum_teachers();
        // English: AP 1 → 1 AP teacher, leftover 4 absorbs 4 regular; regular total 4 → 0 regular-only
        let eng = teachers[&SubjectArea::English];
        assert_eq!(eng, TeacherRequirement { ap_qualified: 1, regular_only: 0, total: 1 });
        // History: 4 regular sections → 1 regular-only
        let hist = teachers[&SubjectArea::HistorySocialScience];
        assert_eq!((hist.ap_qualified, hist.regular_only), (0, 1));
        assert!(!teachers.contains_key(&SubjectArea::Mathematics));
    }

    #[test]
    fn test_teacher_formula_examples() {
        // AP 12, regular 10, cap 5 → 3 AP (leftover 3), 7 remaining → 2 regular
        assert_eq!(
            teachers_for_sections(12, 10, 5),
            TeacherRequirement { ap_qualified: 3, regular_only: 2, total: 5 }
        );
        // No AP sections → straight regular formula
        assert_eq!(
            teachers_for_sections(0, 11, 5),
            TeacherRequirement { ap_qualified: 0, regular_only: 3, total: 3 }
        );
        // AP exactly divisible → zero leftover
        assert_eq!(
            teachers_for_sections(10, 3, 5),
            TeacherRequirement { ap_qualified: 2, regular_only: 1, total: 3 }
        );
        // Leftover fully absorbs regular demand
        assert_eq!(
            teachers_for_sections(3, 2, 5),
            TeacherRequirement { ap_qualified: 1, regular_only: 0, total: 1 }
        );
        assert_eq!(teachers_for_sections(0, 0, 5).total, 0);
    }

    #[test]
    fn test_room_formula_examples() {
        assert_eq!(rooms_for_sections(13, 6), 3);
        assert_eq!(rooms_for_sections(12, 6), 2);
        assert_eq!(rooms_for_sections(0, 6), 0);
    }

    #[test]
    fn test_requirements_bundle() {
        let catalog = sample_catalog();
        let paths = sample_paths();
        let cfg = config(30, 20);
        let calc = CapacityCalculator::new(&catalog, &paths, &cfg).unwrap();

        let req = calc.requirements();
        assert_eq!(req.unknown_courses, vec!["REL2".to_string()]);
        assert_eq!(req.course_sections["ENG9"], 2);
        // Year 1: ENG9 2 + BIO 2 + PE9 2
        assert_eq!(req.sections_per_year[&1], 6);
        assert_eq!(req.total_classrooms(), 4);
        assert_eq!(
            req.home_semesters["GOVT"].iter().copied().collect::<Vec<_>>(),
            vec![Semester::First]
        );
        assert_eq!(
            req.home_semesters["ECON"].iter().copied().collect::<Vec<_>>(),
            vec![Semester::Second]
        );
        assert_eq!(req.home_semesters["ENG9"].len(), 2);
        assert!(req.duration_mismatches.is_empty());
    }

    #[test]
    fn test_duration_mismatches() {
        let catalog = sample_catalog();
        let paths = vec![GraduationPathPlan::new(GraduationPath::Minimum)
            // ENG9 is year-long but listed once; GOVT is one-semester but listed twice
            .with_year(YearPlan::new(1, ["ENG9", "GOVT", "BIO"], ["GOVT", "BIO", "REL1"]))];
        let cfg = config(25, 0);
        let calc = CapacityCalculator::new(&catalog, &paths, &cfg).unwrap();

        assert_eq!(calc.duration_mismatches(), vec!["ENG9".to_string(), "GOVT".to_string()]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let catalog = sample_catalog();
        let paths = sample_paths();
        let cfg = config(30, 20).with_periods_per_day(1);
        let err = CapacityCalculator::new(&catalog, &paths, &cfg).unwrap_err();
        assert_eq!(err, Error::InvalidPeriodsPerDay(1));
    }

    proptest! {
        #[test]
        fn prop_sections_are_ceiling(students in 1u32..2000, class_size in 1u32..60) {
            let catalog = Catalog::from_courses(vec![Course::new("ENG9", SubjectArea::English)]).unwrap();
            let paths = vec![GraduationPathPlan::new(GraduationPath::Minimum)
                .with_year(YearPlan::year_long(1, ["ENG9"]))];
            let cfg = SchoolConfig::new()
                .with_max_class_size(class_size)
                .with_enrollment(GraduationPath::Minimum, students);
            let calc = CapacityCalculator::new(&catalog, &paths, &cfg).unwrap();

            let sections = calc.sections_needed()["ENG9"][&1];
            prop_assert!(sections * class_size >= students);
            prop_assert!((sections - 1) * class_size < students);
        }

        #[test]
        fn prop_teachers_cover_load(ap in 0u32..200, regular in 0u32..200, cap in 1u32..10) {
            let req = teachers_for_sections(ap, regular, cap);
            prop_assert_eq!(req.total, req.ap_qualified + req.regular_only);
            // AP sections only go to AP-qualified staff
            prop_assert!(req.ap_qualified * cap >= ap);
            // Combined staff covers all sections
            prop_assert!(req.total * cap >= ap + regular);
            // Dropping any regular-only teacher would leave sections uncovered
            if req.regular_only > 0 {
                prop_assert!((req.total - 1) * cap < ap + regular);
            }
        }
    }
}
