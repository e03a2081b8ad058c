//! Eligibility rules and evaluator.
//!
//! Decides whether a worker may legally occupy a shift, given the schedule
//! built so far and the active rule set. Eligibility is the logical AND of
//! every active rule; disabled or absent rules impose nothing.
//!
//! # Usage
//!
//! ```
//! use farm_roster::eligibility::{EligibilityEvaluator, PlacementContext};
//! use farm_roster::models::{Schedule, SkillCatalog, Weekday, Worker};
//! use farm_roster::SchedulerConfig;
//!
//! let catalog = SkillCatalog::farm_default();
//! let schedule = Schedule::weekly(&["04:30-12:30"]);
//! let evaluator = EligibilityEvaluator::from_config(&SchedulerConfig::default());
//!
//! let worker = Worker::new("1").with_skill("Milking");
//! let ctx = PlacementContext::new(Weekday::Monday, "04:30-12:30", &schedule, &catalog);
//! assert!(evaluator.is_eligible(&worker, &ctx));
//! ```

mod context;
mod evaluator;
pub mod rules;

pub use context::PlacementContext;
pub use evaluator::EligibilityEvaluator;

use crate::models::{Schedule, SkillCatalog, ValidationRule, Weekday, Worker};
use std::fmt::Debug;

/// A constraint on placing a worker in a shift.
///
/// Rules are pure: the same worker and context always give the same answer.
pub trait EligibilityRule: Send + Sync + Debug {
    /// Rule key (e.g. "skillMatch").
    fn name(&self) -> &'static str;

    /// Whether the rule allows `worker` in the shift described by `context`.
    fn permits(&self, worker: &Worker, context: &PlacementContext<'_>) -> bool;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// One-shot eligibility check against a rule list.
pub fn is_eligible(
    worker: &Worker,
    day: Weekday,
    time_slot: &str,
    schedule: &Schedule,
    rules: &[ValidationRule],
    catalog: &SkillCatalog,
) -> bool {
    let context = PlacementContext::new(day, time_slot, schedule, catalog);
    EligibilityEvaluator::from_rules(rules).is_eligible(worker, &context)
}
