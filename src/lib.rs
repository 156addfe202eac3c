//! School master-schedule sizing and placement.
//!
//! Translates per-path student demand into course sections, derives the
//! minimum classrooms and teachers needed to host them, and greedily
//! places every section on a (period, semester, classroom, teacher)
//! slot. A post-hoc validator re-derives conflicts from the result.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Catalog`, `GraduationPathPlan`,
//!   `Classroom`, `Teacher`, `ScheduledSection`, `MasterSchedule`, `Fault`
//! - **`config`**: `SchoolConfig` (class size, periods, enrollment)
//! - **`capacity`**: Section demand, minimum pools, facility feasibility
//! - **`dispatching`**: Course priority rules and `RuleEngine`
//! - **`scheduler`**: Pool construction, `MasterScheduler`, `ScheduleKpi`
//! - **`validation`**: Double-booking and qualification checks
//! - **`presets`**: The standard school catalog, paths and building
//!
//! # Example
//!
//! ```
//! use u_timetable::config::SchoolConfig;
//! use u_timetable::presets;
//! use u_timetable::scheduler::{MasterScheduler, ScheduleRequest};
//! use u_timetable::validation::validate;
//!
//! let request = ScheduleRequest::new(
//!     presets::standard_catalog().unwrap(),
//!     presets::standard_paths(),
//!     SchoolConfig::new().with_uniform_enrollment(25),
//! );
//! let schedule = MasterScheduler::new().schedule_request(&request).unwrap();
//! assert!(validate(&schedule).is_empty());
//! ```
//!
//! # Determinism
//!
//! Every choice point has a fixed tie-break (course code, then pool
//! order), so identical inputs produce identical schedules.

pub mod capacity;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod presets;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
