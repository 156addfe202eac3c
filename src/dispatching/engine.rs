//! Rule engine for course ordering.
//!
//! Composes priority rules with a configurable evaluation mode. Ties
//! left after every rule are broken by course code.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, PriorityContext, PriorityRule, RuleScore};
use crate::models::Course;

/// How multiple rules are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Apply rules in sequence; use next rule only on ties.
    Sequential,
    /// Compute weighted sum of all rule scores.
    #[default]
    Weighted,
}

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn PriorityRule>,
    weight: f64,
}

/// A composable rule engine for course prioritization.
///
/// # Example
/// ```
/// use u_timetable::dispatching::{PriorityContext, RuleEngine};
/// use u_timetable::models::{Course, RoomCategory, SubjectArea};
///
/// let courses = vec![
///     Course::new("ENG9", SubjectArea::English),
///     Course::new("BIO", SubjectArea::LaboratoryScience).with_room(RoomCategory::BiologyLab),
///     Course::new("CALC-AP-AB", SubjectArea::Mathematics).ap(),
/// ];
///
/// let order = RuleEngine::standard().sort_courses(&courses, &PriorityContext::new());
/// let codes: Vec<&str> = order.iter().map(|c| c.code.as_str()).collect();
/// assert_eq!(codes, ["CALC-AP-AB", "BIO", "ENG9"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<WeightedRule>,
    mode: EvaluationMode,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine (weighted mode, code order only).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            mode: EvaluationMode::Weighted,
            epsilon: 1e-9,
        }
    }

    /// AP first, then specialized rooms, then course code.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::AdvancedPlacement)
            .with_rule(rules::SpecializedRoom)
    }

    /// Adds a rule (weight 1.0).
    pub fn with_rule<R: PriorityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight: 1.0,
        });
        self
    }

    /// Adds a weighted rule.
    pub fn with_weighted_rule<R: PriorityRule + 'static>(mut self, rule: R, weight: f64) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Sets the evaluation mode.
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Number of configured rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Sorts courses by priority (highest priority first).
    ///
    /// Returns indices into the original slice.
    pub fn sort_indices(&self, courses: &[Course], context: &PriorityContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..courses.len()).collect();

        match self.mode {
            EvaluationMode::Sequential => {
                indices.sort_by(|&a, &b| self.compare_sequential(&courses[a], &courses[b], context));
            }
            EvaluationMode::Weighted => {
                let scores: Vec<f64> = courses
                    .iter()
                    .map(|c| self.weighted_score(c, context))
                    .collect();
                indices.sort_by(|&a, &b| {
                    self.compare_scores(scores[a], scores[b])
                        .then_with(|| courses[a].code.cmp(&courses[b].code))
                });
            }
        }

        indices
    }

    /// Sorts courses by priority, returning references.
    pub fn sort_courses<'a>(
        &self,
        courses: &'a [Course],
        context: &PriorityContext,
    ) -> Vec<&'a Course> {
        self.sort_indices(courses, context)
            .into_iter()
            .map(|i| &courses[i])
            .collect()
    }

    /// Evaluates a single course and returns weighted scores from each rule.
    pub fn evaluate(&self, course: &Course, context: &PriorityContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(course, context) * wr.weight)
            .collect()
    }

    fn compare_scores(&self, a: f64, b: f64) -> Ordering {
        if (a - b).abs() > self.epsilon {
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        } else {
            Ordering::Equal
        }
    }

    fn compare_sequential(&self, a: &Course, b: &Course, context: &PriorityContext) -> Ordering {
        for wr in &self.rules {
            let ord = self.compare_scores(wr.rule.evaluate(a, context), wr.rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.code.cmp(&b.code)
    }

    fn weighted_score(&self, course: &Course, context: &PriorityContext) -> f64 {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(course, context) * wr.weight)
            .sum()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomCategory, SubjectArea};

    fn codes(engine: &RuleEngine, courses: &[Course], ctx: &PriorityContext) -> Vec<String> {
        engine
            .sort_courses(courses, ctx)
            .into_iter()
            .map(|c| c.code.clone())
            .collect()
    }

    fn sample() -> Vec<Course> {
        vec![
            Course::new("ENG9", SubjectArea::English),
            Course::new("PE", SubjectArea::PhysicalEducation).with_room(RoomCategory::Gymnasium),
            Course::new("BIO-AP", SubjectArea::LaboratoryScience)
                .ap()
                .with_room(RoomCategory::BiologyLab),
            Course::new("CALC-AP-AB", SubjectArea::Mathematics).ap(),
            Course::new("ALG1", SubjectArea::Mathematics),
        ]
    }

    #[test]
    fn test_standard_ordering() {
        let ctx = PriorityContext::new();
        let order = codes(&RuleEngine::standard(), &sample(), &ctx);
        // AP+lab (−150), AP (−100), lab (−50), then code order for the rest
        assert_eq!(order, ["BIO-AP", "CALC-AP-AB", "PE", "ALG1", "ENG9"]);
    }

    #[test]
    fn test_no_rules_is_code_order() {
        let ctx = PriorityContext::new();
        let order = codes(&RuleEngine::new(), &sample(), &ctx);
        assert_eq!(order, ["ALG1", "BIO-AP", "CALC-AP-AB", "ENG9", "PE"]);
    }

    #[test]
    fn test_sequential_mode() {
        let ctx = PriorityContext::new();
        let engine = RuleEngine::new()
            .with_mode(EvaluationMode::Sequential)
            .with_rule(rules::SpecializedRoom)
            .with_rule(rules::AdvancedPlacement);
        let order = codes(&engine, &sample(), &ctx);
        // Specialized rooms dominate; AP only breaks ties
        assert_eq!(order, ["BIO-AP", "PE", "CALC-AP-AB", "ALG1", "ENG9"]);
    }

    #[test]
    fn test_weighted_with_demand() {
        let ctx = PriorityContext::new()
            .with_sections("ENG9", 500)
            .with_sections("ALG1", 2);
        let engine = RuleEngine::standard().with_weighted_rule(rules::MostSections, 1.0);
        let order = codes(&engine, &sample(), &ctx);
        // ENG9: −500 outweighs every other score
        assert_eq!(order[0], "ENG9");
    }

    #[test]
    fn test_evaluate_scores() {
        let ctx = PriorityContext::new();
        let engine = RuleEngine::new()
            .with_weighted_rule(rules::AdvancedPlacement, 0.5)
            .with_rule(rules::SpecializedRoom);
        let course = Course::new("BIO-AP", SubjectArea::LaboratoryScience)
            .ap()
            .with_room(RoomCategory::BiologyLab);

        let scores = engine.evaluate(&course, &ctx);
        assert_eq!(scores.len(), 2);
        assert!((scores[0] + 50.0).abs() < 1e-10);
        assert!((scores[1] + 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty() {
        let ctx = PriorityContext::new();
        assert!(RuleEngine::standard().sort_indices(&[], &ctx).is_empty());
    }

    #[test]
    fn test_debug_lists_rules() {
        let s = format!("{:?}", RuleEngine::standard());
        assert!(s.contains("AP(w=1)"));
        assert!(s.contains("ROOM(w=1)"));
    }
}
