//! Rule audit of an existing schedule.
//!
//! Manual edits bypass eligibility, so a live schedule can drift out of
//! policy. The audit re-checks every placement against the enabled rules,
//! judging each one against the schedule with that single placement
//! removed. It never mutates the schedule.

use crate::config::SchedulerConfig;
use crate::eligibility::{EligibilityEvaluator, PlacementContext};
use crate::models::{RuleKind, Schedule, SkillCatalog, Violation, ViolationType, Worker};

impl From<RuleKind> for ViolationType {
    fn from(kind: RuleKind) -> Self {
        match kind {
            RuleKind::SkillMatch => ViolationType::SkillMismatch,
            RuleKind::NoConsecutiveShifts => ViolationType::SameDayShift,
            RuleKind::MaxShiftsPerWeek => ViolationType::WeeklyCapExceeded,
            RuleKind::RespectDaysOff => ViolationType::DayOff,
            RuleKind::MaxConsecutiveDays => ViolationType::ConsecutiveDays,
        }
    }
}

/// Lists every placement that breaks an enabled rule.
///
/// Violations are reported in grid order, then roster order, then rule
/// order. Placements of workers missing from `workers` are reported as
/// [`ViolationType::UnknownWorker`].
pub fn audit(
    schedule: &Schedule,
    workers: &[Worker],
    config: &SchedulerConfig,
    catalog: &SkillCatalog,
) -> Vec<Violation> {
    let evaluator = EligibilityEvaluator::from_config(config);
    let mut violations = Vec::new();

    for (idx, shift) in schedule.shifts.iter().enumerate() {
        for worker_id in &shift.worker_ids {
            let Some(worker) = workers.iter().find(|w| &w.id == worker_id) else {
                violations.push(Violation::new(
                    ViolationType::UnknownWorker,
                    &shift.id,
                    worker_id,
                    format!("Worker '{worker_id}' on shift '{}' is not on the roster", shift.id),
                ));
                continue;
            };

            let mut without = schedule.clone();
            without.shifts[idx].remove_worker(worker_id);
            let ctx = PlacementContext::new(shift.day, &shift.time_slot, &without, catalog);

            for rule in evaluator.rejections(worker, &ctx) {
                let violation_type = RuleKind::from_name(rule)
                    .map(ViolationType::from)
                    .unwrap_or_else(|| ViolationType::Custom(rule.to_string()));
                violations.push(Violation::new(
                    violation_type,
                    &shift.id,
                    worker_id,
                    format!("Worker '{worker_id}' on shift '{}' breaks rule '{rule}'", shift.id),
                ));
            }
        }
    }

    violations
}
