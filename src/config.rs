//! Scheduling run configuration.
//!
//! Holds the three caller inputs that parameterize a run: how large a
//! class may be, how many periods a day has, and how many students
//! follow each graduation path.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::models::GraduationPath;

/// Configuration for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    /// Maximum students per section.
    pub max_class_size: u32,
    /// Daily periods (identical Monday-Friday).
    pub periods_per_day: u32,
    /// Students enrolled per graduation path.
    pub enrollment: BTreeMap<GraduationPath, u32>,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            max_class_size: 25,
            periods_per_day: 6,
            enrollment: BTreeMap::new(),
        }
    }
}

impl SchoolConfig {
    /// Creates a configuration with default class size (25) and periods (6).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum class size.
    pub fn with_max_class_size(mut self, size: u32) -> Self {
        self.max_class_size = size;
        self
    }

    /// Sets the number of daily periods.
    pub fn with_periods_per_day(mut self, periods: u32) -> Self {
        self.periods_per_day = periods;
        self
    }

    /// Sets the enrollment of one path.
    pub fn with_enrollment(mut self, path: GraduationPath, students: u32) -> Self {
        self.enrollment.insert(path, students);
        self
    }

    /// Sets the same enrollment for every path.
    pub fn with_uniform_enrollment(mut self, students: u32) -> Self {
        for path in GraduationPath::ALL {
            self.enrollment.insert(path, students);
        }
        self
    }

    /// Enrollment of a path (0 when unset).
    pub fn enrollment_for(&self, path: GraduationPath) -> u32 {
        self.enrollment.get(&path).copied().unwrap_or(0)
    }

    /// Total students across all paths.
    pub fn total_students(&self) -> u32 {
        self.enrollment.values().sum()
    }

    /// Sections a teacher may carry per semester (one period is for planning).
    pub fn teaching_cap(&self) -> u32 {
        self.periods_per_day.saturating_sub(1)
    }

    /// Rejects configurations no calculation can run on.
    pub fn validate(&self) -> Result<()> {
        if self.periods_per_day < 2 {
            return Err(Error::InvalidPeriodsPerDay(self.periods_per_day));
        }
        if self.max_class_size == 0 {
            return Err(Error::InvalidClassSize);
        }
        Ok(())
    }
}
