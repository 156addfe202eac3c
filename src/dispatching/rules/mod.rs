//! Built-in priority rules.
//!
//! | Rule | Score |
//! |------|-------|
//! | `AdvancedPlacement` | −100 for AP courses, 0 otherwise |
//! | `SpecializedRoom` | −50 for non-general rooms, 0 otherwise |
//! | `MostSections` | −(sections to place) |
//!
//! # Score Convention
//! All rules return lower scores for courses that should be placed first.

use super::{PriorityContext, PriorityRule, RuleScore};
use crate::models::Course;

/// AP courses first.
///
/// Fewer teachers are AP-qualified, so AP sections are the scarcest.
#[derive(Debug, Clone, Copy)]
pub struct AdvancedPlacement;

impl PriorityRule for AdvancedPlacement {
    fn name(&self) -> &'static str {
        "AP"
    }

    fn evaluate(&self, course: &Course, _context: &PriorityContext) -> RuleScore {
        if course.is_ap() {
            -100.0
        } else {
            0.0
        }
    }

    fn description(&self) -> &'static str {
        "Advanced Placement first"
    }
}

/// Specialized-room courses first.
///
/// Lab and gym courses can only use their own category, while general
/// courses can fall back to any room.
#[derive(Debug, Clone, Copy)]
pub struct SpecializedRoom;

impl PriorityRule for SpecializedRoom {
    fn name(&self) -> &'static str {
        "ROOM"
    }

    fn evaluate(&self, course: &Course, _context: &PriorityContext) -> RuleScore {
        if course.room_category.is_general() {
            0.0
        } else {
            -50.0
        }
    }

    fn description(&self) -> &'static str {
        "Specialized room first"
    }
}

/// Courses with more sections first.
#[derive(Debug, Clone, Copy)]
pub struct MostSections;

impl PriorityRule for MostSections {
    fn name(&self) -> &'static str {
        "MOST"
    }

    fn evaluate(&self, course: &Course, context: &PriorityContext) -> RuleScore {
        -(context.sections_of(&course.code) as f64)
    }

    fn description(&self) -> &'static str {
        "Most sections first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomCategory, SubjectArea};

    #[test]
    fn test_advanced_placement() {
        let ctx = PriorityContext::new();
        let ap = Course::new("CALC-AP-AB", SubjectArea::Mathematics).ap();
        let reg = Course::new("ALG1", SubjectArea::Mathematics);
        assert!(AdvancedPlacement.evaluate(&ap, &ctx) < AdvancedPlacement.evaluate(&reg, &ctx));
    }

    #[test]
    fn test_specialized_room() {
        let ctx = PriorityContext::new();
        let lab = Course::new("CHEM", SubjectArea::LaboratoryScience)
            .with_room(RoomCategory::ChemistryLab);
        let general = Course::new("ENG9", SubjectArea::English);
        assert!((SpecializedRoom.evaluate(&lab, &ctx) + 50.0).abs() < 1e-10);
        assert!(SpecializedRoom.evaluate(&general, &ctx).abs() < 1e-10);
    }

    #[test]
    fn test_most_sections() {
        let ctx = PriorityContext::new().with_sections("ENG9", 4).with_sections("ALG1", 2);
        let eng = Course::new("ENG9", SubjectArea::English);
        let alg = Course::new("ALG1", SubjectArea::Mathematics);
        let other = Course::new("GEOM", SubjectArea::Mathematics);
        assert!(MostSections.evaluate(&eng, &ctx) < MostSections.evaluate(&alg, &ctx));
        assert!(MostSections.evaluate(&other, &ctx).abs() < 1e-10);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(AdvancedPlacement.name(), "AP");
        assert_eq!(SpecializedRoom.description(), "Specialized room first");
        assert_eq!(MostSections.name(), "MOST");
    }
}
