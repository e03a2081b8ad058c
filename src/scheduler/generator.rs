//! Greedy, sequential schedule generator.
//!
//! # Algorithm
//!
//! 1. Clear every assignment of the input grid.
//! 2. Order shifts by (slot priority, weekday, slot string), stable.
//! 3. Fold over that order, threading the schedule being built:
//!    filter eligible workers against the schedule so far, score them,
//!    take the strictly highest score (first in input order on ties).
//! 4. Label the shift with the chosen worker's first relevant skill.
//!
//! Shifts nobody may take stay empty; that is not an error.
//!
//! # Complexity
//! O(s * w * s) where s=shifts, w=workers (rules scan the schedule).

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::config::SchedulerConfig;
use crate::eligibility::{EligibilityEvaluator, PlacementContext};
use crate::error::SchedulerError;
use crate::models::{Schedule, Shift, SkillCatalog, Worker};
use crate::scoring::score;
use crate::validation::validate_input;

use super::FillSummary;

/// Greedy schedule generator.
///
/// # Example
///
/// ```
/// use farm_roster::models::{Schedule, SkillCatalog, Worker};
/// use farm_roster::scheduler::ScheduleGenerator;
/// use farm_roster::SchedulerConfig;
///
/// let catalog = SkillCatalog::farm_default();
/// let config = SchedulerConfig::default();
/// let grid = Schedule::weekly(&["04:30-12:30"]);
/// let workers = vec![Worker::new("1").with_skill("Milking")];
///
/// let schedule = ScheduleGenerator::new(&catalog, &config)
///     .generate(&grid, &workers)
///     .unwrap();
/// assert_eq!(schedule.filled_count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleGenerator<'a> {
    catalog: &'a SkillCatalog,
    config: &'a SchedulerConfig,
    evaluator: EligibilityEvaluator,
}

impl<'a> ScheduleGenerator<'a> {
    /// Creates a generator enforcing the configuration's enabled rules.
    pub fn new(catalog: &'a SkillCatalog, config: &'a SchedulerConfig) -> Self {
        Self {
            catalog,
            config,
            evaluator: EligibilityEvaluator::from_config(config),
        }
    }

    /// Replaces the rule evaluator (e.g. to add site-specific rules).
    pub fn with_evaluator(mut self, evaluator: EligibilityEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Produces a complete proposed schedule over the grid of `base`.
    ///
    /// Assignments already present in `base` are ignored; generation always
    /// starts from a clean slate.
    ///
    /// # Errors
    /// `EmptyWorkforce` if `workers` is empty, `Structural` if the grid or
    /// the worker list is malformed. Both are reported before any
    /// assignment is attempted.
    pub fn generate(&self, base: &Schedule, workers: &[Worker]) -> Result<Schedule, SchedulerError> {
        if workers.is_empty() {
            return Err(SchedulerError::EmptyWorkforce);
        }
        let blank = base.cleared();
        validate_input(&blank, workers)?;

        let order = self.fill_order(&blank);
        let schedule = order
            .into_iter()
            .fold(blank, |acc, idx| self.fill_shift(acc, idx, workers));

        let summary = FillSummary::calculate(&schedule);
        info!(
            filled = summary.filled_shifts,
            total = summary.total_shifts,
            "schedule generated: {}",
            summary.describe()
        );
        Ok(schedule)
    }

    /// Shift indices in the order generation fills them.
    pub fn fill_order(&self, schedule: &Schedule) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..schedule.shifts.len()).collect();
        indices.sort_by(|&a, &b| self.compare_shifts(&schedule.shifts[a], &schedule.shifts[b]));
        indices
    }

    fn compare_shifts(&self, a: &Shift, b: &Shift) -> Ordering {
        // Uncatalogued slots (None) sort after every ranked slot.
        let rank = |s: &Shift| match self.catalog.priority_rank(&s.time_slot) {
            Some(r) => (0, r),
            None => (1, 0),
        };
        rank(a)
            .cmp(&rank(b))
            .then_with(|| a.day.cmp(&b.day))
            .then_with(|| a.time_slot.cmp(&b.time_slot))
    }

    fn fill_shift(&self, mut schedule: Schedule, idx: usize, workers: &[Worker]) -> Schedule {
        let pick = {
            let shift = &schedule.shifts[idx];
            let ctx = PlacementContext::new(shift.day, &shift.time_slot, &schedule, self.catalog);
            let eligible = self.evaluator.eligible_workers(workers, &ctx);
            self.select_best(&eligible, &ctx).map(|(worker, best)| {
                let role = self
                    .catalog
                    .first_matching_skill(worker, &shift.time_slot)
                    .map(str::to_string);
                (worker.id.clone(), role, best, eligible.len())
            })
        };

        let shift = &mut schedule.shifts[idx];
        match pick {
            Some((worker_id, role, best, candidates)) => {
                debug!(
                    shift = %shift.id,
                    worker = %worker_id,
                    score = best,
                    candidates,
                    "shift filled"
                );
                shift.add_worker(worker_id);
                shift.role = role;
            }
            None => debug!(shift = %shift.id, "no eligible worker; shift left open"),
        }
        schedule
    }

    /// Highest-scoring candidate; earlier candidates win ties.
    fn select_best<'w>(
        &self,
        candidates: &[&'w Worker],
        ctx: &PlacementContext<'_>,
    ) -> Option<(&'w Worker, i32)> {
        candidates.iter().fold(None, |best, &worker| {
            let s = score(worker, ctx.day, ctx.time_slot, self.config, self.catalog);
            match best {
                Some((_, top)) if top >= s => best,
                _ => Some((worker, s)),
            }
        })
    }
}
