//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Sections placed | Placed sections, each semester counted |
//! | Unplaced | Unplaced-section faults |
//! | Mirror gaps | Year-long sections missing their semester-2 twin |
//! | Classroom utilization | Occupied slots ÷ (periods × 2) |
//! | Teacher utilization | Sections taught ÷ yearly capacity |

use std::collections::BTreeMap;

use crate::models::MasterSchedule;

/// Master schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Placed sections across both semesters.
    pub sections_placed: usize,
    /// Unplaced-section faults.
    pub unplaced: usize,
    /// Mirroring gaps.
    pub mirror_gaps: usize,
    /// Per-classroom utilization (0.0..1.0).
    pub classroom_utilization: BTreeMap<String, f64>,
    /// Per-teacher sections across both semesters.
    pub teacher_load: BTreeMap<String, usize>,
    /// Mean classroom utilization.
    pub avg_room_utilization: f64,
    /// Mean teacher utilization against yearly capacity.
    pub avg_teacher_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a master schedule.
    pub fn calculate(schedule: &MasterSchedule, periods_per_day: u32) -> Self {
        let slots = (periods_per_day * 2) as f64;

        let mut room_use: BTreeMap<String, usize> = schedule
            .classrooms
            .iter()
            .map(|c| (c.id.clone(), 0))
            .collect();
        let mut teacher_load: BTreeMap<String, usize> = schedule
            .teachers
            .iter()
            .map(|t| (t.id.clone(), 0))
            .collect();
        for section in &schedule.sections {
            *room_use.entry(section.classroom_id.clone()).or_insert(0) += 1;
            *teacher_load.entry(section.teacher_id.clone()).or_insert(0) += 1;
        }

        let classroom_utilization: BTreeMap<String, f64> = room_use
            .into_iter()
            .map(|(id, used)| {
                let ratio = if slots > 0.0 { used as f64 / slots } else { 0.0 };
                (id, ratio)
            })
            .collect();

        let avg_room_utilization = mean(classroom_utilization.values().copied());
        let avg_teacher_utilization = mean(schedule.teachers.iter().map(|t| {
            let capacity = t.yearly_capacity();
            let load = teacher_load.get(&t.id).copied().unwrap_or(0);
            if capacity == 0 {
                0.0
            } else {
                load as f64 / capacity as f64
            }
        }));

        Self {
            sections_placed: schedule.section_count(),
            unplaced: schedule.unplaced_count(),
            mirror_gaps: schedule.mirror_gap_count(),
            classroom_utilization,
            teacher_load,
            avg_room_utilization,
            avg_teacher_utilization,
        }
    }

    /// Whether every required section was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced == 0 && self.mirror_gaps == 0
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Fault, RoomCategory, ScheduledSection, Semester, SubjectArea, Teacher};

    fn schedule() -> MasterSchedule {
        let mut s = MasterSchedule::new(
            vec![
                Classroom::new("GENERAL_1", RoomCategory::General),
                Classroom::new("GENERAL_2", RoomCategory::General),
            ],
            vec![Teacher::new("ENG_REG_1", SubjectArea::English)],
        );
        for sem in Semester::BOTH {
            for period in 1..=3 {
                s.add_section(ScheduledSection::new("ENG9", period, period, sem, "GENERAL_1", "ENG_REG_1"));
            }
        }
        s
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = ScheduleKpi::calculate(&schedule(), 6);
        assert_eq!(kpi.sections_placed, 6);
        assert_eq!(kpi.unplaced, 0);
        assert!(kpi.is_complete());
        // 6 of 12 slots
        assert!((kpi.classroom_utilization["GENERAL_1"] - 0.5).abs() < 1e-10);
        assert!(kpi.classroom_utilization["GENERAL_2"].abs() < 1e-10);
        assert!((kpi.avg_room_utilization - 0.25).abs() < 1e-10);
        // 6 of 10 sections
        assert_eq!(kpi.teacher_load["ENG_REG_1"], 6);
        assert!((kpi.avg_teacher_utilization - 0.6).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_faults() {
        let mut s = schedule();
        s.add_fault(Fault::unplaced("ENG9", Semester::First, 3));
        s.add_fault(Fault::mirror_gap("ENG9", 4, 1, "GENERAL_1", "ENG_REG_1"));
        let kpi = ScheduleKpi::calculate(&s, 6);
        assert_eq!(kpi.unplaced, 1);
        assert_eq!(kpi.mirror_gaps, 1);
        assert!(!kpi.is_complete());
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&MasterSchedule::default(), 6);
        assert_eq!(kpi.sections_placed, 0);
        assert!(kpi.avg_room_utilization.abs() < 1e-10);
        assert!(kpi.avg_teacher_utilization.abs() < 1e-10);
    }
}
