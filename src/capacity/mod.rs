//! Demand and capacity calculation.
//!
//! Turns catalog, graduation-path plans and enrollment into section
//! counts and the minimum room and teacher pools that can host them.
//!
//! # Sizing rules
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | Sections (course, year) | ceil(students / max class size) |
//! | Rooms (category) | ceil(sections / periods per day) |
//! | AP teachers (subject) | ceil(AP sections / cap) |
//! | Regular-only teachers | ceil(max(0, regular − AP spare) / cap) |
//!
//! where `cap = periods per day − 1`.

mod calculator;
mod feasibility;

pub use calculator::{
    ceil_div, rooms_for_sections, teachers_for_sections, CapacityCalculator, Requirements,
    SectionDemand, TeacherRequirement,
};
pub use feasibility::{
    check_feasibility, max_feasible_enrollment, CategoryLoad, Facilities, FeasibilityReport,
};
