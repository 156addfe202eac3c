//! Post-hoc schedule validation.
//!
//! Re-derives conflicts from the final section list alone, without
//! trusting the placer's bookkeeping. Detects:
//! - Classrooms booked twice in the same period and semester
//! - Teachers booked twice in the same period and semester
//!
//! [`validate_with_catalog`] additionally checks references, room
//! categories, teacher qualification and teacher load.
//!
//! An empty result means the schedule is valid. A non-empty result from
//! a schedule the placer produced indicates a defect in the placer.

use crate::models::{Catalog, MasterSchedule, ScheduledSection, Semester};
use std::collections::BTreeMap;

/// A detected conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Conflict category.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConflictKind {
    /// A classroom hosts more than one section in a slot.
    ClassroomDoubleBooked,
    /// A teacher teaches more than one section in a slot.
    TeacherDoubleBooked,
    /// A section references a course missing from the catalog.
    UnknownCourse,
    /// A section references a classroom missing from the pool.
    UnknownClassroom,
    /// A section references a teacher missing from the pool.
    UnknownTeacher,
    /// A specialized course meets in a room of another category.
    RoomCategoryMismatch,
    /// A teacher lacks the subject area or AP qualification.
    TeacherUnqualified,
    /// A teacher carries more sections in a semester than allowed.
    TeacherOverloaded,
}

impl Conflict {
    fn new(kind: ConflictKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

type SlotIndex<'a> = BTreeMap<(Semester, u32, &'a str), Vec<&'a ScheduledSection>>;

fn describe(sections: &[&ScheduledSection]) -> String {
    sections
        .iter()
        .map(|s| format!("{}#{}", s.course_code, s.section_id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks a schedule for double bookings.
///
/// # Example
/// ```
/// use u_timetable::models::{MasterSchedule, ScheduledSection, Semester};
/// use u_timetable::validation::{validate, ConflictKind};
///
/// let mut schedule = MasterSchedule::default();
/// schedule.add_section(ScheduledSection::new("ENG9", 1, 1, Semester::First, "GENERAL_1", "ENG_REG_1"));
/// schedule.add_section(ScheduledSection::new("ALG1", 2, 1, Semester::First, "GENERAL_1", "MATH_REG_1"));
///
/// let conflicts = validate(&schedule);
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(conflicts[0].kind, ConflictKind::ClassroomDoubleBooked);
/// ```
pub fn validate(schedule: &MasterSchedule) -> Vec<Conflict> {
    let mut by_room: SlotIndex = BTreeMap::new();
    let mut by_teacher: SlotIndex = BTreeMap::new();

    for section in &schedule.sections {
        by_room
            .entry((section.semester, section.period, section.classroom_id.as_str()))
            .or_default()
            .push(section);
        by_teacher
            .entry((section.semester, section.period, section.teacher_id.as_str()))
            .or_default()
            .push(section);
    }

    let mut conflicts = Vec::new();
    for ((semester, period, room), sections) in &by_room {
        if sections.len() > 1 {
            conflicts.push(Conflict::new(
                ConflictKind::ClassroomDoubleBooked,
                format!(
                    "Classroom {room} double-booked in period {period}, {semester}: {}",
                    describe(sections)
                ),
            ));
        }
    }
    for ((semester, period, teacher), sections) in &by_teacher {
        if sections.len() > 1 {
            conflicts.push(Conflict::new(
                ConflictKind::TeacherDoubleBooked,
                format!(
                    "Teacher {teacher} double-booked in period {period}, {semester}: {}",
                    describe(sections)
                ),
            ));
        }
    }

    conflicts
}

/// Checks double bookings plus room, qualification and load rules.
///
/// Checks, per section:
/// 1. Course, classroom and teacher exist
/// 2. The classroom can host the course's room category
/// 3. The teacher covers the subject area (and AP, if required)
///
/// and per teacher, that no semester exceeds their daily period limit.
pub fn validate_with_catalog(schedule: &MasterSchedule, catalog: &Catalog) -> Vec<Conflict> {
    let mut conflicts = validate(schedule);

    for section in &schedule.sections {
        let label = format!("{}#{}", section.course_code, section.section_id);

        let Some(course) = catalog.get(&section.course_code) else {
            conflicts.push(Conflict::new(
                ConflictKind::UnknownCourse,
                format!("Section {label} references unknown course"),
            ));
            continue;
        };

        match schedule.classroom(&section.classroom_id) {
            None => conflicts.push(Conflict::new(
                ConflictKind::UnknownClassroom,
                format!(
                    "Section {label} references unknown classroom '{}'",
                    section.classroom_id
                ),
            )),
            Some(room) if !room.can_host(course) => conflicts.push(Conflict::new(
                ConflictKind::RoomCategoryMismatch,
                format!(
                    "Section {label} needs {} but {} is a {}",
                    course.room_category.display_name(),
                    room.id,
                    room.category.display_name()
                ),
            )),
            Some(_) => {}
        }

        match schedule.teacher(&section.teacher_id) {
            None => conflicts.push(Conflict::new(
                ConflictKind::UnknownTeacher,
                format!(
                    "Section {label} references unknown teacher '{}'",
                    section.teacher_id
                ),
            )),
            Some(teacher) if !teacher.can_teach(course) => conflicts.push(Conflict::new(
                ConflictKind::TeacherUnqualified,
                format!("Teacher {} is not qualified for {label}", teacher.id),
            )),
            Some(_) => {}
        }
    }

    let mut load: BTreeMap<(&str, Semester), u32> = BTreeMap::new();
    for section in &schedule.sections {
        *load
            .entry((section.teacher_id.as_str(), section.semester))
            .or_insert(0) += 1;
    }
    for ((teacher_id, semester), count) in load {
        let Some(teacher) = schedule.teacher(teacher_id) else {
            continue;
        };
        if count > teacher.max_periods_per_day {
            conflicts.push(Conflict::new(
                ConflictKind::TeacherOverloaded,
                format!(
                    "Teacher {teacher_id} teaches {count} sections in {semester} (limit {})",
                    teacher.max_periods_per_day
                ),
            ));
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Course, RoomCategory, SubjectArea, Teacher};

    fn section(code: &str, id: u32, period: u32, sem: Semester, room: &str, teacher: &str) -> ScheduledSection {
        ScheduledSection::new(code, id, period, sem, room, teacher)
    }

    fn pool_schedule() -> MasterSchedule {
        MasterSchedule::new(
            vec![
                Classroom::new("GENERAL_1", RoomCategory::General),
                Classroom::new("CHEM_LAB_1", RoomCategory::ChemistryLab),
            ],
            vec![
                Teacher::new("ENG_REG_1", SubjectArea::English).with_max_periods(2),
                Teacher::new("SCI_REG_1", SubjectArea::LaboratoryScience),
                Teacher::new("MATH_REG_1", SubjectArea::Mathematics),
            ],
        )
    }

    fn catalog() -> Catalog {
        Catalog::from_courses(vec![
            Course::new("ENG9", SubjectArea::English),
            Course::new("CHEM", SubjectArea::LaboratoryScience).with_room(RoomCategory::ChemistryLab),
            Course::new("CALC-AP", SubjectArea::Mathematics).ap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_valid_schedule() {
        let mut s = pool_schedule();
        s.add_section(section("ENG9", 1, 1, Semester::First, "GENERAL_1", "ENG_REG_1"));
        s.add_section(section("ENG9", 1, 1, Semester::Second, "GENERAL_1", "ENG_REG_1"));
        s.add_section(section("CHEM", 2, 1, Semester::First, "CHEM_LAB_1", "SCI_REG_1"));
        assert!(validate(&s).is_empty());
        assert!(validate_with_catalog(&s, &catalog()).is_empty());
    }

    #[test]
    fn test_teacher_double_booking() {
        let mut s = pool_schedule();
        s.add_section(section("ENG9", 1, 3, Semester::Second, "GENERAL_1", "ENG_REG_1"));
        s.add_section(section("ENG9", 2, 3, Semester::Second, "CHEM_LAB_1", "ENG_REG_1"));

        let conflicts = validate(&s);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::TeacherDoubleBooked);
        assert!(conflicts[0].message.contains("ENG9#1, ENG9#2"));
        assert!(conflicts[0].message.contains("semester 2"));
    }

    #[test]
    fn test_same_slot_other_semester_is_fine() {
        let mut s = pool_schedule();
        s.add_section(section("ENG9", 1, 2, Semester::First, "GENERAL_1", "ENG_REG_1"));
        s.add_section(section("ENG9", 2, 2, Semester::Second, "GENERAL_1", "ENG_REG_1"));
        assert!(validate(&s).is_empty());
    }

    #[test]
    fn test_room_and_teacher_both_reported() {
        let mut s = pool_schedule();
        s.add_section(section("ENG9", 1, 1, Semester::First, "GENERAL_1", "ENG_REG_1"));
        s.add_section(section("ENG9", 2, 1, Semester::First, "GENERAL_1", "ENG_REG_1"));
        let kinds: Vec<ConflictKind> = validate(&s).into_iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            [ConflictKind::ClassroomDoubleBooked, ConflictKind::TeacherDoubleBooked]
        );
    }

    #[test]
    fn test_catalog_checks() {
        let mut s = pool_schedule();
        // chemistry in a general room
        s.add_section(section("CHEM", 1, 1, Semester::First, "GENERAL_1", "SCI_REG_1"));
        // AP course with a regular teacher
        s.add_section(section("CALC-AP", 2, 2, Semester::First, "GENERAL_1", "MATH_REG_1"));
        // unknown references
        s.add_section(section("LATIN", 3, 3, Semester::First, "GENERAL_1", "ENG_REG_1"));
        s.add_section(section("ENG9", 4, 4, Semester::First, "ROOM_X", "NOBODY"));

        let kinds: Vec<ConflictKind> = validate_with_catalog(&s, &catalog())
            .into_iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(
            kinds,
            [
                ConflictKind::RoomCategoryMismatch,
                ConflictKind::TeacherUnqualified,
                ConflictKind::UnknownCourse,
                ConflictKind::UnknownClassroom,
                ConflictKind::UnknownTeacher,
            ]
        );
    }

    #[test]
    fn test_teacher_overload() {
        let mut s = pool_schedule();
        for period in 1..=3 {
            s.add_section(section("ENG9", period, period, Semester::First, "GENERAL_1", "ENG_REG_1"));
        }
        let conflicts = validate_with_catalog(&s, &catalog());
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::TeacherOverloaded);
        assert!(conflicts[0].message.contains("limit 2"));
    }
}
