//! Timetabling domain models.
//!
//! Provides the data types for the inputs (catalog, graduation paths),
//! the derived resources (classrooms, teachers) and the solution
//! (master schedule with faults).
//!
//! # Domain Mappings
//!
//! | u-timetable | Generic scheduling |
//! |-------------|--------------------|
//! | Course | Task category |
//! | Section | Activity |
//! | Classroom / Teacher | Resource |
//! | Period × Semester | Time slot |
//! | MasterSchedule | Schedule |

mod catalog;
mod course;
mod plan;
mod resource;
mod schedule;

pub use catalog::Catalog;
pub use course::{Course, CourseLevel, RoomCategory, SubjectArea};
pub use plan::{GraduationPath, GraduationPathPlan, Semester, YearPlan};
pub use resource::{Classroom, Teacher};
pub use schedule::{Fault, FaultKind, MasterSchedule, ScheduledSection};
