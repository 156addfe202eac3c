//! Greedy master-schedule placer.
//!
//! # Algorithm
//!
//! 1. Order courses with the rule engine (most constrained first).
//! 2. For each section unit of a course, scan periods in increasing order
//!    in the course's placement semester.
//! 3. At the first period with a free hosting classroom and a free,
//!    qualified teacher under their per-semester cap, take the first of
//!    each in pool order.
//! 4. Year-long sections are then mirrored into semester 2 at the same
//!    period, classroom and teacher. When semester 1 has no period, the
//!    semester-2 half is scanned for independently.
//!
//! Placement never backtracks. A unit that finds no period is recorded
//! as a fault and the run continues.
//!
//! # Complexity
//! O(s · p · (r + t)) where s = section units, p = periods, r = rooms,
//! t = teachers.

use log::{debug, info, warn};

use crate::capacity::{CapacityCalculator, Requirements};
use crate::config::SchoolConfig;
use crate::dispatching::{PriorityContext, RuleEngine};
use crate::error::Result;
use crate::models::{
    Catalog, Classroom, Course, Fault, GraduationPathPlan, MasterSchedule, ScheduledSection,
    Semester, Teacher,
};

use super::ResourcePool;

/// Input container for an end-to-end run.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Course catalog.
    pub catalog: Catalog,
    /// Graduation-path plans.
    pub paths: Vec<GraduationPathPlan>,
    /// Enrollment and school parameters that drive demand.
    pub config: SchoolConfig,
    /// Configuration used to size the pools, when different from `config`.
    pub sizing_config: Option<SchoolConfig>,
}

impl ScheduleRequest {
    /// Creates a request where pools are sized for the scheduled demand.
    pub fn new(catalog: Catalog, paths: Vec<GraduationPathPlan>, config: SchoolConfig) -> Self {
        Self {
            catalog,
            paths,
            config,
            sizing_config: None,
        }
    }

    /// Sizes the pools from a different configuration.
    ///
    /// Used to test a building planned for one enrollment against another.
    pub fn with_sizing_config(mut self, sizing_config: SchoolConfig) -> Self {
        self.sizing_config = Some(sizing_config);
        self
    }
}

/// Chosen (period, classroom, teacher) triple, as indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    period: usize,
    room: usize,
    teacher: usize,
}

/// Per-run availability tables, indexed `[semester][period][resource]`.
#[derive(Debug)]
struct Availability {
    room_busy: [Vec<Vec<bool>>; 2],
    teacher_busy: [Vec<Vec<bool>>; 2],
    load: [Vec<u32>; 2],
}

impl Availability {
    fn new(periods: usize, rooms: usize, teachers: usize) -> Self {
        let rooms_table = || vec![vec![false; rooms]; periods];
        let teachers_table = || vec![vec![false; teachers]; periods];
        Self {
            room_busy: [rooms_table(), rooms_table()],
            teacher_busy: [teachers_table(), teachers_table()],
            load: [vec![0; teachers], vec![0; teachers]],
        }
    }

    fn room_free(&self, semester: Semester, period: usize, room: usize) -> bool {
        !self.room_busy[semester.index()][period][room]
    }

    fn teacher_free(&self, semester: Semester, period: usize, teacher: &Teacher, idx: usize) -> bool {
        let s = semester.index();
        !self.teacher_busy[s][period][idx] && self.load[s][idx] < teacher.max_periods_per_day
    }

    /// First period offering both a hosting room and a qualified teacher.
    fn find_slot(
        &self,
        course: &Course,
        semester: Semester,
        classrooms: &[Classroom],
        teachers: &[Teacher],
    ) -> Option<Slot> {
        let periods = self.room_busy[semester.index()].len();
        (0..periods).find_map(|period| {
            let room = (0..classrooms.len()).find(|&i| {
                classrooms[i].can_host(course) && self.room_free(semester, period, i)
            })?;
            let teacher = (0..teachers.len()).find(|&i| {
                teachers[i].can_teach(course) && self.teacher_free(semester, period, &teachers[i], i)
            })?;
            Some(Slot {
                period,
                room,
                teacher,
            })
        })
    }

    fn is_open(&self, semester: Semester, slot: Slot, teachers: &[Teacher]) -> bool {
        self.room_free(semester, slot.period, slot.room)
            && self.teacher_free(semester, slot.period, &teachers[slot.teacher], slot.teacher)
    }

    fn commit(&mut self, semester: Semester, slot: Slot) {
        let s = semester.index();
        self.room_busy[s][slot.period][slot.room] = true;
        self.teacher_busy[s][slot.period][slot.teacher] = true;
        self.load[s][slot.teacher] += 1;
    }
}

/// Greedy, non-backtracking master-schedule placer.
///
/// # Example
///
/// ```
/// use u_timetable::config::SchoolConfig;
/// use u_timetable::models::{Catalog, Course, GraduationPath, GraduationPathPlan, SubjectArea, YearPlan};
/// use u_timetable::scheduler::{MasterScheduler, ScheduleRequest};
/// use u_timetable::validation::validate;
///
/// let catalog = Catalog::from_courses(vec![
///     Course::new("ENG9", SubjectArea::English),
///     Course::new("ALG1", SubjectArea::Mathematics),
/// ]).unwrap();
/// let paths = vec![
///     GraduationPathPlan::new(GraduationPath::Minimum)
///         .with_year(YearPlan::year_long(1, ["ENG9", "ALG1"])),
/// ];
/// let config = SchoolConfig::new().with_enrollment(GraduationPath::Minimum, 50);
///
/// let schedule = MasterScheduler::new()
///     .schedule_request(&ScheduleRequest::new(catalog, paths, config))
///     .unwrap();
/// // 2 courses × 2 sections × 2 semesters
/// assert_eq!(schedule.section_count(), 8);
/// assert!(schedule.is_complete());
/// assert!(validate(&schedule).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MasterScheduler {
    rule_engine: RuleEngine,
}

impl MasterScheduler {
    /// Creates a scheduler with the standard course priority.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::standard(),
        }
    }

    /// Sets the rule engine used to order courses.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Courses in placement order.
    pub fn course_order(&self, catalog: &Catalog, requirements: &Requirements) -> Vec<Course> {
        let courses: Vec<Course> = requirements
            .course_sections
            .keys()
            .filter_map(|code| catalog.get(code).cloned())
            .collect();
        let context = PriorityContext::from_sections(requirements.course_sections.clone());
        self.rule_engine
            .sort_indices(&courses, &context)
            .into_iter()
            .map(|i| courses[i].clone())
            .collect()
    }

    /// Places every required section on the pool.
    ///
    /// Faults are recorded in the returned schedule, never raised.
    pub fn place_sections(
        &self,
        catalog: &Catalog,
        requirements: &Requirements,
        pool: ResourcePool,
        periods_per_day: u32,
    ) -> MasterSchedule {
        let ResourcePool {
            classrooms,
            teachers,
        } = pool;
        let mut availability =
            Availability::new(periods_per_day as usize, classrooms.len(), teachers.len());
        let mut schedule = MasterSchedule::new(Vec::new(), Vec::new());
        let mut next_id: u32 = 1;

        for course in self.course_order(catalog, requirements) {
            let units = requirements
                .course_sections
                .get(&course.code)
                .copied()
                .unwrap_or(0);
            let semester = placement_semester(&course, requirements);

            for unit in 0..units {
                let Some(slot) = availability.find_slot(&course, semester, &classrooms, &teachers)
                else {
                    warn!(
                        "No period for section {} of {} in {semester}",
                        unit + 1,
                        course.code
                    );
                    schedule.add_fault(Fault::unplaced(&course.code, semester, unit));
                    if course.is_year_long() {
                        // semester 2 still gets its own scan
                        let second = Semester::Second;
                        match availability.find_slot(&course, second, &classrooms, &teachers) {
                            Some(slot) => {
                                availability.commit(second, slot);
                                schedule.add_section(new_section(
                                    &course,
                                    next_id,
                                    slot,
                                    second,
                                    &classrooms,
                                    &teachers,
                                ));
                                next_id += 1;
                            }
                            None => {
                                warn!(
                                    "No period for section {} of {} in {second}",
                                    unit + 1,
                                    course.code
                                );
                                schedule.add_fault(Fault::unplaced(&course.code, second, unit));
                            }
                        }
                    }
                    continue;
                };

                availability.commit(semester, slot);
                let section = new_section(&course, next_id, slot, semester, &classrooms, &teachers);
                next_id += 1;

                if course.is_year_long() {
                    if availability.is_open(Semester::Second, slot, &teachers) {
                        availability.commit(Semester::Second, slot);
                        let mirror = ScheduledSection {
                            semester: Semester::Second,
                            ..section.clone()
                        };
                        schedule.add_section(section);
                        schedule.add_section(mirror);
                    } else {
                        let fault = Fault::mirror_gap(
                            &course.code,
                            unit,
                            section.period,
                            &section.classroom_id,
                            &section.teacher_id,
                        );
                        warn!("{}", fault.message);
                        schedule.add_section(section);
                        schedule.add_fault(fault);
                    }
                } else {
                    schedule.add_section(section);
                }
            }
        }

        info!(
            "Placed {} sections; {} unplaced, {} mirror gaps",
            schedule.section_count(),
            schedule.unplaced_count(),
            schedule.mirror_gap_count()
        );

        schedule.classrooms = classrooms;
        schedule.teachers = teachers;
        schedule
    }

    /// Calculates requirements, builds pools and places sections.
    ///
    /// # Errors
    /// Returns a configuration error before any calculation.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<MasterSchedule> {
        let requirements =
            CapacityCalculator::new(&request.catalog, &request.paths, &request.config)?
                .requirements();

        let pool = match &request.sizing_config {
            Some(sizing) => {
                let sized = CapacityCalculator::new(&request.catalog, &request.paths, sizing)?
                    .requirements();
                ResourcePool::from_requirements(&sized, sizing)
            }
            None => ResourcePool::from_requirements(&requirements, &request.config),
        };

        Ok(self.place_sections(
            &request.catalog,
            &requirements,
            pool,
            request.config.periods_per_day,
        ))
    }
}

fn new_section(
    course: &Course,
    section_id: u32,
    slot: Slot,
    semester: Semester,
    classrooms: &[Classroom],
    teachers: &[Teacher],
) -> ScheduledSection {
    let section = ScheduledSection::new(
        &course.code,
        section_id,
        slot.period as u32 + 1,
        semester,
        &classrooms[slot.room].id,
        &teachers[slot.teacher].id,
    );
    debug!(
        "Placed {} #{section_id} at period {} in {semester} ({}, {})",
        course.code, section.period, section.classroom_id, section.teacher_id
    );
    section
}

/// Semester a course's sections are first placed in.
///
/// Year-long courses start in semester 1. One-semester courses use the
/// lowest semester any plan lists them in.
fn placement_semester(course: &Course, requirements: &Requirements) -> Semester {
    if course.is_year_long() {
        return Semester::First;
    }
    requirements
        .home_semesters
        .get(&course.code)
        .and_then(|semesters| semesters.first().copied())
        .unwrap_or(Semester::First)
}
