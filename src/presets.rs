//! Standard school data set.
//!
//! The course catalog, the three graduation-path plans and the building
//! inventory of the reference high school. Useful as a realistic input
//! for capacity planning and as a fixture for end-to-end tests.

use crate::capacity::Facilities;
use crate::error::Result;
use crate::models::{
    Catalog, Course, GraduationPath, GraduationPathPlan, RoomCategory, SubjectArea, YearPlan,
};

use RoomCategory::{BiologyLab, ChemistryLab, ComputerLab, Gymnasium, RoboticsLab};
use SubjectArea::{
    CollegePrepElective, English, HistorySocialScience, LaboratoryScience, LanguageOther,
    Mathematics, PhysicalEducation, ReligiousStudies, VisualPerformingArts,
};

fn course(code: &str, name: &str, subject: SubjectArea, grades: &[u8]) -> Course {
    Course::new(code, subject)
        .with_name(name)
        .with_grade_levels(grades.to_vec())
}

fn sequence(prefix: &str, name: &str, subject: SubjectArea) -> Vec<Course> {
    (1..=4u8)
        .map(|i| {
            let c = course(&format!("{prefix}{i}"), &format!("{name} {i}"), subject, &[8 + i]);
            if i > 1 {
                c.with_prerequisite(format!("{prefix}{}", i - 1))
            } else {
                c
            }
        })
        .collect()
}

/// All courses offered by the school.
pub fn standard_courses() -> Vec<Course> {
    let mut courses = vec![
        // history / social science
        course("WHIST", "World History", HistorySocialScience, &[10]),
        course("WHIST-AP", "AP World History", HistorySocialScience, &[10]).ap(),
        course("USHIST", "US History", HistorySocialScience, &[11]),
        course("USHIST-AP", "AP US History", HistorySocialScience, &[11]).ap(),
        course("GOVT", "US Government", HistorySocialScience, &[12]).one_semester(),
        course("GOVT-AP", "AP US Government", HistorySocialScience, &[12])
            .ap()
            .one_semester(),
        course("ECON", "Economics", HistorySocialScience, &[12]).one_semester(),
        // english
        course("ENG9", "English 9", English, &[9]),
        course("ENG10", "English 10", English, &[10]).with_prerequisite("ENG9"),
        course("ENG11", "English 11", English, &[11]).with_prerequisite("ENG10"),
        course("ENG11-AP", "AP English Language", English, &[11])
            .ap()
            .with_prerequisite("ENG10"),
        course("ENG12", "English 12", English, &[12]).with_prerequisite("ENG11"),
        course("ENG12-AP", "AP English Literature", English, &[12])
            .ap()
            .with_prerequisite("ENG11"),
        // mathematics
        course("ALG1", "Algebra 1", Mathematics, &[9]),
        course("GEOM", "Geometry", Mathematics, &[9, 10]).with_prerequisite("ALG1"),
        course("ALG2", "Algebra 2", Mathematics, &[10, 11]).with_prerequisite("GEOM"),
        course("PRECALC", "Pre-Calculus", Mathematics, &[11, 12]).with_prerequisite("ALG2"),
        course("CALC-AP-AB", "AP Calculus AB", Mathematics, &[11, 12])
            .ap()
            .with_prerequisite("PRECALC"),
        course("CALC-AP-BC", "AP Calculus BC", Mathematics, &[12])
            .ap()
            .with_prerequisite("CALC-AP-AB"),
        course("STATS-AP", "AP Statistics", Mathematics, &[11, 12])
            .ap()
            .with_prerequisite("ALG2"),
        // laboratory science
        course("BIO", "Biology", LaboratoryScience, &[9, 10]).with_room(BiologyLab),
        course("BIO-AP", "AP Biology", LaboratoryScience, &[11, 12])
            .ap()
            .with_room(BiologyLab)
            .with_prerequisite("BIO")
            .with_prerequisite("CHEM"),
        course("CHEM", "Chemistry", LaboratoryScience, &[10, 11])
            .with_room(ChemistryLab)
            .with_prerequisite("ALG1"),
        course("CHEM-AP", "AP Chemistry", LaboratoryScience, &[11, 12])
            .ap()
            .with_room(ChemistryLab)
            .with_prerequisite("CHEM")
            .with_prerequisite("ALG2"),
        course("PHYS", "Physics", LaboratoryScience, &[11, 12])
            .with_room(BiologyLab)
            .with_prerequisite("ALG2"),
        course("PHYS-AP-1", "AP Physics 1", LaboratoryScience, &[11, 12])
            .ap()
            .with_room(BiologyLab)
            .with_prerequisite("GEOM"),
        course("PHYS-AP-C", "AP Physics C", LaboratoryScience, &[12])
            .ap()
            .with_room(BiologyLab)
            .with_prerequisite("PHYS")
            .with_prerequisite("CALC-AP-AB"),
        course("ENVSCI-AP", "AP Environmental Science", LaboratoryScience, &[11, 12])
            .ap()
            .with_room(BiologyLab)
            .with_prerequisite("BIO"),
        // world languages
        course("ARAB1", "Arabic 1", LanguageOther, &[9, 10, 11, 12]),
        course("ARAB2", "Arabic 2", LanguageOther, &[9, 10, 11, 12]).with_prerequisite("ARAB1"),
        course("ARAB3", "Arabic 3", LanguageOther, &[10, 11, 12]).with_prerequisite("ARAB2"),
        course("ARAB4", "Arabic 4", LanguageOther, &[11, 12]).with_prerequisite("ARAB3"),
        // arts use general classrooms
        course("ART1", "Art 1", VisualPerformingArts, &[9, 10, 11, 12]),
        course("ART2", "Art 2", VisualPerformingArts, &[10, 11, 12]).with_prerequisite("ART1"),
        course("MUSIC1", "Music", VisualPerformingArts, &[9, 10, 11, 12]),
        // college-prep electives
        course("CSP-AP", "AP Computer Science Principles", CollegePrepElective, &[9, 10, 11, 12])
            .ap()
            .with_room(ComputerLab),
        course("CSA-AP", "AP Computer Science A", CollegePrepElective, &[10, 11, 12])
            .ap()
            .with_room(ComputerLab)
            .with_prerequisite("CSP-AP"),
        course("ROBOTICS", "Robotics", CollegePrepElective, &[10, 11, 12]).with_room(RoboticsLab),
        course("ROBOTICS-ADV", "Advanced Robotics", CollegePrepElective, &[11, 12])
            .with_room(RoboticsLab)
            .with_prerequisite("ROBOTICS"),
        course("PSYCH-AP", "AP Psychology", CollegePrepElective, &[11, 12]).ap(),
        // physical education
        course("PE9", "Physical Education 9", PhysicalEducation, &[9]).with_room(Gymnasium),
        course("PE10", "Physical Education 10", PhysicalEducation, &[10])
            .with_room(Gymnasium)
            .with_prerequisite("PE9"),
    ];
    courses.extend(sequence("ISLAM", "Islamic Studies", ReligiousStudies));
    courses.extend(sequence("QURAN", "Quran Studies", ReligiousStudies));
    courses
}

/// The standard course catalog.
pub fn standard_catalog() -> Result<Catalog> {
    Catalog::from_courses(standard_courses())
}

fn year(n: u8, semester1: [&str; 6], semester2: [&str; 6]) -> YearPlan {
    YearPlan::new(n, semester1, semester2)
}

/// Minimum requirements path (no AP courses).
pub fn minimum_path() -> GraduationPathPlan {
    GraduationPathPlan::new(GraduationPath::Minimum)
        .with_description(
            "Minimum graduation requirements meeting UC/CSU A-G eligibility. No AP courses.",
        )
        .with_year(YearPlan::year_long(1, ["ENG9", "ALG1", "BIO", "ARAB1", "PE9", "ISLAM1"]))
        .with_year(YearPlan::year_long(2, ["ENG10", "GEOM", "CHEM", "ARAB2", "PE10", "ISLAM2"]))
        .with_year(YearPlan::year_long(3, ["ENG11", "ALG2", "WHIST", "ART1", "ARAB3", "ISLAM3"]))
        .with_year(year(
            4,
            ["ENG12", "PRECALC", "USHIST", "GOVT", "ARAB4", "ISLAM4"],
            ["ENG12", "PRECALC", "USHIST", "ECON", "ARAB4", "ISLAM4"],
        ))
}

/// Pre-medical track.
pub fn premed_path() -> GraduationPathPlan {
    GraduationPathPlan::new(GraduationPath::PreMed)
        .with_description(
            "Pre-Medical Track with AP Biology, AP Chemistry, AP Calculus and AP Psychology.",
        )
        .with_year(YearPlan::year_long(1, ["ENG9", "ALG1", "BIO", "ARAB1", "PE9", "ISLAM1"]))
        .with_year(year(
            2,
            ["ENG10", "GEOM", "CHEM", "WHIST", "ARAB2", "ISLAM2"],
            ["ENG10", "GEOM", "CHEM", "WHIST", "PE10", "ISLAM2"],
        ))
        .with_year(YearPlan::year_long(
            3,
            ["ENG11-AP", "ALG2", "BIO-AP", "USHIST", "ART1", "ISLAM3"],
        ))
        .with_year(year(
            4,
            ["ENG12-AP", "CALC-AP-AB", "CHEM-AP", "PSYCH-AP", "GOVT", "ISLAM4"],
            ["ENG12-AP", "CALC-AP-AB", "CHEM-AP", "PSYCH-AP", "ECON", "ISLAM4"],
        ))
}

/// Engineering and computer science track.
pub fn engineering_path() -> GraduationPathPlan {
    GraduationPathPlan::new(GraduationPath::Engineering)
        .with_description(
            "Engineering Track with AP CS Principles, AP CS A, AP Physics 1, AP Chemistry, \
             AP Calculus and Robotics.",
        )
        .with_year(YearPlan::year_long(1, ["ENG9", "ALG1", "BIO", "CSP-AP", "PE9", "ISLAM1"]))
        .with_year(year(
            2,
            ["ENG10", "GEOM", "CHEM", "CSA-AP", "ARAB1", "ISLAM2"],
            ["ENG10", "GEOM", "CHEM", "CSA-AP", "PE10", "ISLAM2"],
        ))
        .with_year(year(
            3,
            ["ENG11", "ALG2", "PHYS-AP-1", "ROBOTICS", "ARAB2", "ISLAM3"],
            ["ENG11", "ALG2", "PHYS-AP-1", "ROBOTICS", "WHIST", "ISLAM3"],
        ))
        .with_year(year(
            4,
            ["ENG12", "CALC-AP-AB", "CHEM-AP", "ROBOTICS-ADV", "GOVT", "ISLAM4"],
            ["ENG12", "CALC-AP-AB", "CHEM-AP", "USHIST", "ECON", "ISLAM4"],
        ))
}

/// All three graduation paths in canonical order.
pub fn standard_paths() -> Vec<GraduationPathPlan> {
    vec![minimum_path(), premed_path(), engineering_path()]
}

/// Rooms the school building actually has.
pub fn standard_facilities() -> Facilities {
    Facilities::new()
        .with_rooms(RoomCategory::General, 10)
        .with_rooms(ChemistryLab, 1)
        .with_rooms(BiologyLab, 1)
        .with_rooms(ComputerLab, 1)
        .with_rooms(RoboticsLab, 1)
        .with_rooms(Gymnasium, 1)
}
