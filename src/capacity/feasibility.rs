//! Facility feasibility analysis.
//!
//! Compares calculated section demand against an existing building:
//! each room hosts at most one section per period, so a category can
//! absorb `rooms × periods` sections per semester.

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CapacityCalculator, Requirements};
use crate::config::SchoolConfig;
use crate::error::Result;
use crate::models::{Catalog, GraduationPathPlan, RoomCategory};

/// Rooms a school actually has, per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facilities {
    /// Room count per category.
    pub rooms: BTreeMap<RoomCategory, u32>,
}

impl Facilities {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the room count for a category.
    pub fn with_rooms(mut self, category: RoomCategory, count: u32) -> Self {
        self.rooms.insert(category, count);
        self
    }

    /// Rooms of a category (0 when absent).
    pub fn rooms_of(&self, category: RoomCategory) -> u32 {
        self.rooms.get(&category).copied().unwrap_or(0)
    }

    /// Total rooms.
    pub fn total(&self) -> u32 {
        self.rooms.values().sum()
    }
}

/// Load on one room category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLoad {
    /// Room category.
    pub category: RoomCategory,
    /// Concurrent sections requiring this category.
    pub sections_needed: u32,
    /// Room-periods available (`rooms × periods per day`).
    pub room_periods: u32,
    /// Whether demand fits.
    pub feasible: bool,
}

impl CategoryLoad {
    /// Demand-to-supply ratio. Infinite when there is demand but no supply.
    pub fn load_ratio(&self) -> f64 {
        if self.room_periods == 0 {
            if self.sections_needed == 0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            self.sections_needed as f64 / self.room_periods as f64
        }
    }
}

/// Result of checking demand against facilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    /// Per-category loads for every demanded category.
    pub categories: Vec<CategoryLoad>,
    /// Whether every category fits.
    pub feasible: bool,
    /// Overflowing category with the highest load ratio.
    pub bottleneck: Option<RoomCategory>,
}

/// Checks whether calculated demand fits into existing rooms.
pub fn check_feasibility(
    requirements: &Requirements,
    catalog: &Catalog,
    facilities: &Facilities,
    periods_per_day: u32,
) -> FeasibilityReport {
    let mut demand: BTreeMap<RoomCategory, u32> = BTreeMap::new();
    for (code, &sections) in &requirements.course_sections {
        if let Some(course) = catalog.get(code) {
            *demand.entry(course.room_category).or_insert(0) += sections;
        }
    }

    let categories: Vec<CategoryLoad> = demand
        .into_iter()
        .map(|(category, sections_needed)| {
            let room_periods = facilities.rooms_of(category) * periods_per_day;
            CategoryLoad {
                category,
                sections_needed,
                room_periods,
                feasible: sections_needed <= room_periods,
            }
        })
        .collect();

    let mut bottleneck: Option<(RoomCategory, f64)> = None;
    for load in categories.iter().filter(|l| !l.feasible) {
        let ratio = load.load_ratio();
        if bottleneck.map_or(true, |(_, best)| ratio > best) {
            bottleneck = Some((load.category, ratio));
        }
    }

    FeasibilityReport {
        feasible: categories.iter().all(|l| l.feasible),
        bottleneck: bottleneck.map(|(category, _)| category),
        categories,
    }
}

/// Largest uniform per-path enrollment among `candidates` that fits.
///
/// Every path gets the same enrollment; the rest of `config` is kept.
/// Returns `None` when no candidate fits.
pub fn max_feasible_enrollment(
    catalog: &Catalog,
    paths: &[GraduationPathPlan],
    config: &SchoolConfig,
    facilities: &Facilities,
    candidates: &[u32],
) -> Result<Option<u32>> {
    config.validate()?;

    let mut best = None;
    for &students in candidates {
        let trial = config.clone().with_uniform_enrollment(students);
        let requirements = CapacityCalculator::new(catalog, paths, &trial)?.requirements();
        let report = check_feasibility(&requirements, catalog, facilities, trial.periods_per_day);

        info!(
            "Enrollment {students} per path: {}",
            if report.feasible { "feasible" } else { "exceeds capacity" }
        );
        if report.feasible && best.map_or(true, |b| students > b) {
            best = Some(students);
        }
    }
    Ok(best)
}
