//! Rule evaluator.
//!
//! Holds the active rules and evaluates them for a worker/shift pair.
//! Eligibility is the conjunction of all held rules; the result does not
//! depend on rule order.

use std::sync::Arc;

use tracing::trace;

use super::{rules, EligibilityRule, PlacementContext};
use crate::config::SchedulerConfig;
use crate::models::{RuleKind, ValidationRule, Worker};

/// A set of active eligibility rules.
///
/// # Example
/// ```
/// use farm_roster::eligibility::{rules, EligibilityEvaluator};
///
/// let evaluator = EligibilityEvaluator::new()
///     .with_rule(rules::SkillMatch)
///     .with_rule(rules::RespectDaysOff);
/// assert_eq!(evaluator.rule_names(), vec!["skillMatch", "respectDaysOff"]);
/// ```
#[derive(Clone, Default)]
pub struct EligibilityEvaluator {
    rules: Vec<Arc<dyn EligibilityRule>>,
}

impl EligibilityEvaluator {
    /// Creates an evaluator with no rules (everyone is eligible).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builds the evaluator for a rule list.
    ///
    /// A built-in rule is active when its entry is present and enabled.
    /// Unknown names are ignored.
    pub fn from_rules(rules: &[ValidationRule]) -> Self {
        let active = RuleKind::ALL
            .into_iter()
            .filter(|kind| {
                rules
                    .iter()
                    .find(|r| r.name == kind.name())
                    .is_some_and(|r| r.enabled)
            })
            .map(rules::builtin)
            .collect();
        Self { rules: active }
    }

    /// Builds the evaluator for a configuration's rule set.
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self::from_rules(&config.rules)
    }

    /// Adds a rule.
    pub fn with_rule<R: EligibilityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the active rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Whether `worker` may take the shift.
    pub fn is_eligible(&self, worker: &Worker, context: &PlacementContext<'_>) -> bool {
        self.rules.iter().all(|r| r.permits(worker, context))
    }

    /// Names of every active rule that rejects the placement.
    ///
    /// Empty when the worker is eligible.
    pub fn rejections(&self, worker: &Worker, context: &PlacementContext<'_>) -> Vec<&'static str> {
        let rejected: Vec<&'static str> = self
            .rules
            .iter()
            .filter(|r| !r.permits(worker, context))
            .map(|r| r.name())
            .collect();
        if !rejected.is_empty() {
            trace!(
                worker = %worker.id,
                day = %context.day,
                slot = context.time_slot,
                ?rejected,
                "placement rejected"
            );
        }
        rejected
    }

    /// Eligible workers in input order.
    pub fn eligible_workers<'w>(
        &self,
        workers: &'w [Worker],
        context: &PlacementContext<'_>,
    ) -> Vec<&'w Worker> {
        workers
            .iter()
            .filter(|w| self.is_eligible(w, context))
            .collect()
    }
}

impl std::fmt::Debug for EligibilityEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EligibilityEvaluator")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Schedule, SkillCatalog, SlotRequirement, Weekday};

    fn catalog() -> SkillCatalog {
        SkillCatalog::new().with_slot(
            SlotRequirement::new("Morning").with_skills(["Milking", "Feeding", "Cleaning"]),
        )
    }

    #[derive(Debug)]
    struct NoInterns;

    impl EligibilityRule for NoInterns {
        fn name(&self) -> &'static str {
            "noInterns"
        }

        fn permits(&self, worker: &Worker, _context: &PlacementContext<'_>) -> bool {
            worker.employment != crate::models::EmploymentCategory::Intern
        }
    }

    #[test]
    fn test_from_rules_respects_enabled_flags() {
        let rules = vec![
            ValidationRule::builtin(RuleKind::RespectDaysOff),
            ValidationRule::builtin(RuleKind::SkillMatch).with_enabled(false),
            ValidationRule::new("noNightShifts", "custom"),
        ];
        let e = EligibilityEvaluator::from_rules(&rules);
        assert_eq!(e.rule_names(), vec!["respectDaysOff"]);
    }

    #[test]
    fn test_default_config_activates_all() {
        let e = EligibilityEvaluator::from_config(&SchedulerConfig::default());
        assert_eq!(e.rule_names().len(), 5);
    }

    #[test]
    fn test_no_rules_everyone_eligible() {
        let c = catalog();
        let s = Schedule::weekly(&["Morning"]);
        let ctx = PlacementContext::new(Weekday::Sunday, "Morning", &s, &c);
        let w = Worker::new("1").with_day_off(Weekday::Sunday);
        assert!(EligibilityEvaluator::new().is_eligible(&w, &ctx));
    }

    #[test]
    fn test_conjunction_and_rejections() {
        let c = catalog();
        let s = Schedule::weekly(&["Morning"]);
        let ctx = PlacementContext::new(Weekday::Sunday, "Morning", &s, &c);
        let e = EligibilityEvaluator::from_config(&SchedulerConfig::default());

        let ok = Worker::new("1").with_skill("Milking");
        assert!(e.is_eligible(&ok, &ctx));
        assert!(e.rejections(&ok, &ctx).is_empty());

        let bad = Worker::new("2")
            .with_skill("Maintenance")
            .with_day_off(Weekday::Sunday);
        assert!(!e.is_eligible(&bad, &ctx));
        assert_eq!(e.rejections(&bad, &ctx), vec!["skillMatch", "respectDaysOff"]);
    }

    #[test]
    fn test_custom_rule() {
        let c = catalog();
        let s = Schedule::weekly(&["Morning"]);
        let ctx = PlacementContext::new(Weekday::Monday, "Morning", &s, &c);
        let e = EligibilityEvaluator::new().with_rule(NoInterns);

        let intern = Worker::new("1").with_employment(crate::models::EmploymentCategory::Intern);
        assert!(!e.is_eligible(&intern, &ctx));
        assert!(e.is_eligible(&Worker::new("2"), &ctx));
    }

    #[test]
    fn test_eligible_workers_keep_input_order() {
        let c = catalog();
        let s = Schedule::weekly(&["Morning"]);
        let ctx = PlacementContext::new(Weekday::Monday, "Morning", &s, &c);
        let e = EligibilityEvaluator::from_config(&SchedulerConfig::default());
        let workers = vec![
            Worker::new("b").with_skill("Feeding"),
            Worker::new("x").with_skill("Welding"),
            Worker::new("a").with_skill("Milking"),
        ];
        let ids: Vec<&str> = e
            .eligible_workers(&workers, &ctx)
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_free_function_matches_evaluator() {
        let c = catalog();
        let s = Schedule::weekly(&["Morning"]);
        let w = Worker::new("1").with_skill("Milking").with_day_off(Weekday::Monday);
        let rules = crate::models::default_rules();
        assert!(!super::super::is_eligible(&w, Weekday::Monday, "Morning", &s, &rules, &c));
        assert!(super::super::is_eligible(&w, Weekday::Tuesday, "Morning", &s, &rules, &c));
    }
}
