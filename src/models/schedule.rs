//! Master schedule (solution) model.
//!
//! A master schedule is the list of placed sections together with the
//! classrooms and teachers they were placed on. Sections the engine could
//! not place are recorded as faults rather than dropped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Classroom, Semester, Teacher};

/// One concrete placement of a course section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSection {
    /// Course code.
    pub course_code: String,
    /// Sequential section id. A year-long section and its mirrored
    /// semester-2 twin share an id.
    pub section_id: u32,
    /// Daily period (1-based).
    pub period: u32,
    /// Semester.
    pub semester: Semester,
    /// Assigned classroom id.
    pub classroom_id: String,
    /// Assigned teacher id.
    pub teacher_id: String,
}

/// A recorded failure to place a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    /// Type of fault.
    pub kind: FaultKind,
    /// Course code.
    pub course_code: String,
    /// Semester that could not be filled.
    pub semester: Semester,
    /// Zero-based index of the section unit within the course.
    pub unit: u32,
    /// Human-readable description.
    pub message: String,
}

/// Classification of placement faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultKind {
    /// No period offered both a free matching classroom and a free
    /// qualified teacher.
    UnplacedSection,
    /// A year-long section was placed in semester 1 but its twin could not
    /// take the same period, room and teacher in semester 2.
    MirrorGap,
}

impl ScheduledSection {
    /// Creates a placed section.
    pub fn new(
        course_code: impl Into<String>,
        section_id: u32,
        period: u32,
        semester: Semester,
        classroom_id: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            section_id,
            period,
            semester,
            classroom_id: classroom_id.into(),
            teacher_id: teacher_id.into(),
        }
    }
}

impl Fault {
    /// Creates an unplaced-section fault.
    pub fn unplaced(course_code: impl Into<String>, semester: Semester, unit: u32) -> Self {
        let course_code = course_code.into();
        Self {
            message: format!(
                "Could not place section {} of {course_code} in {semester}",
                unit + 1
            ),
            kind: FaultKind::UnplacedSection,
            course_code,
            semester,
            unit,
        }
    }

    /// Creates a semester-2 mirroring gap.
    pub fn mirror_gap(
        course_code: impl Into<String>,
        unit: u32,
        period: u32,
        classroom_id: &str,
        teacher_id: &str,
    ) -> Self {
        let course_code = course_code.into();
        Self {
            message: format!(
                "Section {} of {course_code} could not be mirrored into semester 2 \
                 (period {period}, {classroom_id}, {teacher_id})",
                unit + 1
            ),
            kind: FaultKind::MirrorGap,
            course_code,
            semester: Semester::Second,
            unit,
        }
    }
}

/// The complete master schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterSchedule {
    /// Placed sections, in placement order.
    pub sections: Vec<ScheduledSection>,
    /// Classrooms in the pool.
    pub classrooms: Vec<Classroom>,
    /// Teachers in the pool.
    pub teachers: Vec<Teacher>,
    /// Placement faults, in the order they occurred.
    pub faults: Vec<Fault>,
}

impl MasterSchedule {
    /// Creates an empty schedule over a resource pool.
    pub fn new(classrooms: Vec<Classroom>, teachers: Vec<Teacher>) -> Self {
        Self {
            sections: Vec::new(),
            classrooms,
            teachers,
            faults: Vec::new(),
        }
    }

    /// Adds a placed section.
    pub fn add_section(&mut self, section: ScheduledSection) {
        self.sections.push(section);
    }

    /// Adds a fault.
    pub fn add_fault(&mut self, fault: Fault) {
        self.faults.push(fault);
    }

    /// Whether every required section was placed and mirrored.
    pub fn is_complete(&self) -> bool {
        self.faults.is_empty()
    }

    /// Number of placed sections (each semester counted separately).
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of unplaced-section faults.
    pub fn unplaced_count(&self) -> usize {
        self.count_faults(FaultKind::UnplacedSection)
    }

    /// Number of mirroring gaps.
    pub fn mirror_gap_count(&self) -> usize {
        self.count_faults(FaultKind::MirrorGap)
    }

    fn count_faults(&self, kind: FaultKind) -> usize {
        self.faults.iter().filter(|f| f.kind == kind).count()
    }

    /// Sections meeting in a given period and semester.
    pub fn sections_in_slot(&self, period: u32, semester: Semester) -> Vec<&ScheduledSection> {
        self.sections
            .iter()
            .filter(|s| s.period == period && s.semester == semester)
            .collect()
    }

    /// A teacher's timetable for one semester, keyed by period.
    pub fn teacher_timetable(
        &self,
        teacher_id: &str,
        semester: Semester,
    ) -> BTreeMap<u32, &ScheduledSection> {
        self.sections
            .iter()
            .filter(|s| s.teacher_id == teacher_id && s.semester == semester)
            .map(|s| (s.period, s))
            .collect()
    }

    /// A classroom's timetable for one semester, keyed by period.
    pub fn classroom_timetable(
        &self,
        classroom_id: &str,
        semester: Semester,
    ) -> BTreeMap<u32, &ScheduledSection> {
        self.sections
            .iter()
            .filter(|s| s.classroom_id == classroom_id && s.semester == semester)
            .map(|s| (s.period, s))
            .collect()
    }

    /// All placements of a course.
    pub fn sections_for_course(&self, course_code: &str) -> Vec<&ScheduledSection> {
        self.sections
            .iter()
            .filter(|s| s.course_code == course_code)
            .collect()
    }

    /// Total sections a teacher carries across both semesters.
    pub fn teacher_load(&self, teacher_id: &str) -> usize {
        self.sections
            .iter()
            .filter(|s| s.teacher_id == teacher_id)
            .count()
    }

    /// Finds a classroom by id.
    pub fn classroom(&self, id: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.id == id)
    }

    /// Finds a teacher by id.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomCategory, SubjectArea};

    fn sample_schedule() -> MasterSchedule {
        let mut s = MasterSchedule::new(
            vec![Classroom::new("GENERAL_1", RoomCategory::General)],
            vec![
                Teacher::new("ENG_REG_1", SubjectArea::English),
                Teacher::new("MATH_REG_1", SubjectArea::Mathematics),
            ],
        );
        s.add_section(ScheduledSection::new("ENG9", 1, 1, Semester::First, "GENERAL_1", "ENG_REG_1"));
        s.add_section(ScheduledSection::new("ENG9", 1, 1, Semester::Second, "GENERAL_1", "ENG_REG_1"));
        s.add_section(ScheduledSection::new("ALG1", 2, 2, Semester::First, "GENERAL_1", "MATH_REG_1"));
        s
    }

    #[test]
    fn test_slot_queries() {
        let s = sample_schedule();
        assert_eq!(s.sections_in_slot(1, Semester::First).len(), 1);
        assert_eq!(s.sections_in_slot(2, Semester::Second).len(), 0);

        let room = s.classroom_timetable("GENERAL_1", Semester::First);
        assert_eq!(room.len(), 2);
        assert_eq!(room[&2].course_code, "ALG1");

        let eng = s.teacher_timetable("ENG_REG_1", Semester::Second);
        assert_eq!(eng[&1].section_id, 1);
    }

    #[test]
    fn test_loads_and_lookups() {
        let s = sample_schedule();
        assert_eq!(s.teacher_load("ENG_REG_1"), 2);
        assert_eq!(s.teacher_load("MATH_REG_1"), 1);
        assert_eq!(s.sections_for_course("ENG9").len(), 2);
        assert!(s.teacher("MATH_REG_1").is_some());
        assert!(s.classroom("GYM_1").is_none());
    }

    #[test]
    fn test_fault_counts() {
        let mut s = sample_schedule();
        assert!(s.is_complete());

        s.add_fault(Fault::unplaced("ALG1", Semester::First, 1));
        s.add_fault(Fault::mirror_gap("ALG1", 0, 2, "GENERAL_1", "MATH_REG_1"));
        assert!(!s.is_complete());
        assert_eq!(s.unplaced_count(), 1);
        assert_eq!(s.mirror_gap_count(), 1);
        assert_eq!(s.faults[1].semester, Semester::Second);
        assert!(s.faults[0].message.contains("section 2 of ALG1"));
    }
}
