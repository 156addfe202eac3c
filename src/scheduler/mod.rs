//! Pool construction, greedy placement and KPI evaluation.
//!
//! # Algorithm
//!
//! `MasterScheduler` uses a greedy, priority-driven, first-free-resource
//! heuristic over (period, classroom, teacher). It does not backtrack and
//! is not optimal; sections it cannot place are reported as faults.
//!
//! # KPI
//!
//! `ScheduleKpi` computes placement counts and room/teacher utilization.

mod greedy;
mod kpi;
mod pools;

pub use greedy::{MasterScheduler, ScheduleRequest};
pub use kpi::ScheduleKpi;
pub use pools::ResourcePool;
