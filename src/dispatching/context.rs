//! Context for priority rule evaluation.

use std::collections::BTreeMap;

/// Run state passed to priority rules.
///
/// Carries per-course section totals for demand-aware rules.
#[derive(Debug, Clone, Default)]
pub struct PriorityContext {
    /// Sections to place per course code.
    pub section_totals: BTreeMap<String, u32>,
}

impl PriorityContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context from per-course section totals.
    pub fn from_sections(section_totals: BTreeMap<String, u32>) -> Self {
        Self { section_totals }
    }

    /// Sets the section total for a course.
    pub fn with_sections(mut self, course_code: impl Into<String>, sections: u32) -> Self {
        self.section_totals.insert(course_code.into(), sections);
        self
    }

    /// Section total for a course (0 when unknown).
    pub fn sections_of(&self, course_code: &str) -> u32 {
        self.section_totals.get(course_code).copied().unwrap_or(0)
    }
}
