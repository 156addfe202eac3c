//! Course priority rules and rule engine.
//!
//! Decides the order in which courses are placed. The greedy placer
//! never revisits a decision, so the most resource-constrained courses
//! (AP sections, specialized rooms) go first.
//!
//! # Usage
//!
//! ```
//! use u_timetable::dispatching::{PriorityContext, RuleEngine};
//! use u_timetable::dispatching::rules;
//! use u_timetable::models::{Course, SubjectArea};
//!
//! let engine = RuleEngine::new()
//!     .with_weighted_rule(rules::AdvancedPlacement, 1.0)
//!     .with_weighted_rule(rules::MostSections, 1.0);
//!
//! let courses = vec![
//!     Course::new("ENG9", SubjectArea::English),
//!     Course::new("ALG1", SubjectArea::Mathematics),
//! ];
//! let context = PriorityContext::new().with_sections("ENG9", 6).with_sections("ALG1", 3);
//! assert_eq!(engine.sort_indices(&courses, &context), vec![0, 1]);
//! ```
//!
//! # Determinism
//!
//! Whatever rules are configured, courses with equal scores are always
//! ordered by course code, so the resulting order is total.

mod context;
mod engine;
pub mod rules;

pub use context::PriorityContext;
pub use engine::{EvaluationMode, RuleEngine};

use crate::models::Course;
use std::fmt::Debug;

/// Score returned by a priority rule.
///
/// Lower scores = higher priority (placed first).
pub type RuleScore = f64;

/// A rule that scores how early a course should be placed.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait PriorityRule: Send + Sync + Debug {
    /// Rule name (e.g., "AP", "ROOM").
    fn name(&self) -> &'static str;

    /// Scores a course. Lower = placed earlier.
    fn evaluate(&self, course: &Course, context: &PriorityContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
