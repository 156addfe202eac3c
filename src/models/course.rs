//! Course model.
//!
//! A course is an immutable catalog entry: what is taught, at which level,
//! for how long, and what kind of room it needs. Courses are built once
//! when the catalog is assembled and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Subject area of a course.
///
/// Teachers are certified per subject area. Declaration order is the
/// canonical ordering used for reports and pool construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubjectArea {
    /// History and social science.
    HistorySocialScience,
    /// English language arts.
    English,
    /// Mathematics.
    Mathematics,
    /// Laboratory science.
    LaboratoryScience,
    /// World languages.
    LanguageOther,
    /// Visual and performing arts.
    VisualPerformingArts,
    /// College-prep electives (computer science, robotics, psychology).
    CollegePrepElective,
    /// Physical education.
    PhysicalEducation,
    /// Religious studies.
    ReligiousStudies,
    /// General electives.
    Elective,
}

impl SubjectArea {
    /// All subject areas in canonical order.
    pub const ALL: [SubjectArea; 10] = [
        SubjectArea::HistorySocialScience,
        SubjectArea::English,
        SubjectArea::Mathematics,
        SubjectArea::LaboratoryScience,
        SubjectArea::LanguageOther,
        SubjectArea::VisualPerformingArts,
        SubjectArea::CollegePrepElective,
        SubjectArea::PhysicalEducation,
        SubjectArea::ReligiousStudies,
        SubjectArea::Elective,
    ];

    /// Short tag used in generated teacher identifiers.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            SubjectArea::HistorySocialScience => "HIST",
            SubjectArea::English => "ENG",
            SubjectArea::Mathematics => "MATH",
            SubjectArea::LaboratoryScience => "SCI",
            SubjectArea::LanguageOther => "LANG",
            SubjectArea::VisualPerformingArts => "ART",
            SubjectArea::CollegePrepElective => "TECH",
            SubjectArea::PhysicalEducation => "PE",
            SubjectArea::ReligiousStudies => "REL",
            SubjectArea::Elective => "ELEC",
        }
    }

    /// Human-readable department name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubjectArea::HistorySocialScience => "History/Social Science",
            SubjectArea::English => "English",
            SubjectArea::Mathematics => "Mathematics",
            SubjectArea::LaboratoryScience => "Laboratory Science",
            SubjectArea::LanguageOther => "World Languages",
            SubjectArea::VisualPerformingArts => "Visual/Performing Arts",
            SubjectArea::CollegePrepElective => "College Prep Electives",
            SubjectArea::PhysicalEducation => "Physical Education",
            SubjectArea::ReligiousStudies => "Religious Studies",
            SubjectArea::Elective => "General Electives",
        }
    }
}

/// Course difficulty level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CourseLevel {
    /// Standard course.
    #[default]
    Regular,
    /// Advanced Placement. Only AP-qualified teachers may teach it.
    Ap,
}

/// Kind of room a course requires.
///
/// `General` is satisfied by any room; every other category needs a room
/// of exactly that category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    /// Standard classroom.
    #[default]
    General,
    /// Chemistry laboratory.
    ChemistryLab,
    /// Biology / general science laboratory.
    BiologyLab,
    /// Computer lab.
    ComputerLab,
    /// Robotics lab.
    RoboticsLab,
    /// Gymnasium.
    Gymnasium,
    /// Visual arts room.
    ArtRoom,
    /// Music room.
    MusicRoom,
}

impl RoomCategory {
    /// All room categories in canonical order.
    pub const ALL: [RoomCategory; 8] = [
        RoomCategory::General,
        RoomCategory::ChemistryLab,
        RoomCategory::BiologyLab,
        RoomCategory::ComputerLab,
        RoomCategory::RoboticsLab,
        RoomCategory::Gymnasium,
        RoomCategory::ArtRoom,
        RoomCategory::MusicRoom,
    ];

    /// Prefix used in generated classroom identifiers.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            RoomCategory::General => "GENERAL",
            RoomCategory::ChemistryLab => "CHEM_LAB",
            RoomCategory::BiologyLab => "BIO_LAB",
            RoomCategory::ComputerLab => "COMP_LAB",
            RoomCategory::RoboticsLab => "ROBOTICS_LAB",
            RoomCategory::Gymnasium => "GYM",
            RoomCategory::ArtRoom => "ART_ROOM",
            RoomCategory::MusicRoom => "MUSIC_ROOM",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomCategory::General => "Room",
            RoomCategory::ChemistryLab => "Chem Lab",
            RoomCategory::BiologyLab => "Bio Lab",
            RoomCategory::ComputerLab => "Computer Lab",
            RoomCategory::RoboticsLab => "Robotics Lab",
            RoomCategory::Gymnasium => "Gymnasium",
            RoomCategory::ArtRoom => "Art Room",
            RoomCategory::MusicRoom => "Music Room",
        }
    }

    /// Whether this is the any-room category.
    #[inline]
    pub fn is_general(&self) -> bool {
        matches!(self, RoomCategory::General)
    }
}

/// A course offering in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (catalog key).
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Subject area (determines which teachers qualify).
    pub subject_area: SubjectArea,
    /// Difficulty level.
    pub level: CourseLevel,
    /// Duration in semesters: 1 (half year) or 2 (year-long).
    pub semesters: u8,
    /// Required room category.
    pub room_category: RoomCategory,
    /// Grade levels the course is intended for (9-12).
    pub grade_levels: Vec<u8>,
    /// Prerequisite course codes.
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Creates a regular, year-long, general-room course open to all grades.
    pub fn new(code: impl Into<String>, subject_area: SubjectArea) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            subject_area,
            level: CourseLevel::Regular,
            semesters: 2,
            room_category: RoomCategory::General,
            grade_levels: vec![9, 10, 11, 12],
            prerequisites: Vec::new(),
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the level.
    pub fn with_level(mut self, level: CourseLevel) -> Self {
        self.level = level;
        self
    }

    /// Marks the course as Advanced Placement.
    pub fn ap(self) -> Self {
        self.with_level(CourseLevel::Ap)
    }

    /// Sets the duration in semesters (clamped to 1..=2).
    pub fn with_semesters(mut self, semesters: u8) -> Self {
        self.semesters = semesters.clamp(1, 2);
        self
    }

    /// Makes this a one-semester course.
    pub fn one_semester(self) -> Self {
        self.with_semesters(1)
    }

    /// Sets the required room category.
    pub fn with_room(mut self, room_category: RoomCategory) -> Self {
        self.room_category = room_category;
        self
    }

    /// Sets the grade levels.
    pub fn with_grade_levels(mut self, grades: Vec<u8>) -> Self {
        self.grade_levels = grades;
        self
    }

    /// Adds a prerequisite.
    pub fn with_prerequisite(mut self, code: impl Into<String>) -> Self {
        self.prerequisites.push(code.into());
        self
    }

    /// Whether the course runs in both semesters.
    #[inline]
    pub fn is_year_long(&self) -> bool {
        self.semesters >= 2
    }

    /// Whether the course is Advanced Placement.
    #[inline]
    pub fn is_ap(&self) -> bool {
        self.level == CourseLevel::Ap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("CHEM-AP", SubjectArea::LaboratoryScience)
            .with_name("AP Chemistry")
            .ap()
            .with_room(RoomCategory::ChemistryLab)
            .with_grade_levels(vec![11, 12])
            .with_prerequisite("CHEM");

        assert_eq!(c.code, "CHEM-AP");
        assert!(c.is_ap());
        assert!(c.is_year_long());
        assert_eq!(c.room_category, RoomCategory::ChemistryLab);
        assert_eq!(c.prerequisites, vec!["CHEM".to_string()]);
    }

    #[test]
    fn test_semester_clamping() {
        let c = Course::new("GOVT", SubjectArea::HistorySocialScience).with_semesters(0);
        assert_eq!(c.semesters, 1);
        assert!(!c.is_year_long());

        let c = Course::new("ENG9", SubjectArea::English).with_semesters(4);
        assert_eq!(c.semesters, 2);
    }

    #[test]
    fn test_canonical_orders() {
        assert!(RoomCategory::General < RoomCategory::ChemistryLab);
        assert!(SubjectArea::HistorySocialScience < SubjectArea::Elective);
        assert_eq!(RoomCategory::ALL[0], RoomCategory::General);
        assert!(RoomCategory::General.is_general());
        assert!(!RoomCategory::Gymnasium.is_general());
    }
}
