//! Placement desirability scoring.
//!
//! Pure function of the worker, the cell and the configuration; the
//! schedule state plays no part. Higher scores are better.
//!
//! | Component | Condition | Points |
//! |-----------|-----------|--------|
//! | Base | always | +10 |
//! | Skill match | `prioritize_skill_match` and any relevant skill | +30 |
//! | Preferred slot | `respect_preferences` and slot preferred | +20 |
//! | Day off | `respect_preferences` and day is a preferred day off | −15 |
//! | Full-time | employment is full-time | +5 |
//! | Matching skills | per relevant skill | +3 each |

use serde::Serialize;

use crate::config::SchedulerConfig;
use crate::models::{SkillCatalog, Weekday, Worker};

pub const BASE_SCORE: i32 = 10;
pub const SKILL_MATCH_BONUS: i32 = 30;
pub const PREFERRED_SLOT_BONUS: i32 = 20;
pub const DAY_OFF_PENALTY: i32 = 15;
pub const FULL_TIME_BONUS: i32 = 5;
pub const PER_MATCHING_SKILL: i32 = 3;

/// Additive parts of a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: i32,
    pub skill_match: i32,
    pub preferred_slot: i32,
    /// Zero or negative.
    pub day_off: i32,
    pub full_time: i32,
    pub matching_skills: i32,
}

impl ScoreBreakdown {
    /// Sum of all components.
    pub fn total(&self) -> i32 {
        self.base
            + self.skill_match
            + self.preferred_slot
            + self.day_off
            + self.full_time
            + self.matching_skills
    }
}

/// Scores placing `worker` on (`day`, `time_slot`).
pub fn score(
    worker: &Worker,
    day: Weekday,
    time_slot: &str,
    config: &SchedulerConfig,
    catalog: &SkillCatalog,
) -> i32 {
    score_breakdown(worker, day, time_slot, config, catalog).total()
}

/// Scores a placement, component by component.
pub fn score_breakdown(
    worker: &Worker,
    day: Weekday,
    time_slot: &str,
    config: &SchedulerConfig,
    catalog: &SkillCatalog,
) -> ScoreBreakdown {
    let matching = catalog.matching_skills(worker, time_slot) as i32;

    let mut parts = ScoreBreakdown {
        base: BASE_SCORE,
        ..Default::default()
    };
    if config.prioritize_skill_match && matching > 0 {
        parts.skill_match = SKILL_MATCH_BONUS;
    }
    if config.respect_preferences && worker.prefers_slot(time_slot) {
        parts.preferred_slot = PREFERRED_SLOT_BONUS;
    }
    if config.respect_preferences && worker.prefers_off(day) {
        parts.day_off = -DAY_OFF_PENALTY;
    }
    if worker.is_full_time() {
        parts.full_time = FULL_TIME_BONUS;
    }
    parts.matching_skills = PER_MATCHING_SKILL * matching;
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmploymentCategory, Schedule, SlotRequirement};
    use crate::scheduler::ScheduleGenerator;

    fn catalog() -> SkillCatalog {
        SkillCatalog::new().with_slot(
            SlotRequirement::new("Morning").with_skills(["Milking", "Feeding", "Cleaning"]),
        )
    }

    fn worker_w() -> Worker {
        Worker::new("W")
            .with_skills(["Milking", "Feeding"])
            .with_preferred_slot("Morning")
            .with_day_off(Weekday::Sunday)
            .with_employment(EmploymentCategory::FullTime)
            .with_max_shifts(5)
    }

    #[test]
    fn test_weekday_preferred_slot_score() {
        let s = score(&worker_w(), Weekday::Monday, "Morning", &SchedulerConfig::default(), &catalog());
        assert_eq!(s, 71);
    }

    #[test]
    fn test_day_off_penalty_score() {
        let s = score(&worker_w(), Weekday::Sunday, "Morning", &SchedulerConfig::default(), &catalog());
        assert_eq!(s, 56);
    }

    #[test]
    fn test_breakdown_components() {
        let b = score_breakdown(
            &worker_w(),
            Weekday::Sunday,
            "Morning",
            &SchedulerConfig::default(),
            &catalog(),
        );
        assert_eq!(b.base, 10);
        assert_eq!(b.skill_match, 30);
        assert_eq!(b.preferred_slot, 20);
        assert_eq!(b.day_off, -15);
        assert_eq!(b.full_time, 5);
        assert_eq!(b.matching_skills, 6);
        assert_eq!(b.total(), 56);
    }

    #[test]
    fn test_weights_off() {
        let s = score(&worker_w(), Weekday::Sunday, "Morning", &SchedulerConfig::permissive(), &catalog());
        // base + full-time + 2 matching skills
        assert_eq!(s, 10 + 5 + 6);
    }

    #[test]
    fn test_unknown_slot_and_intern() {
        let w = Worker::new("I")
            .with_skill("Milking")
            .with_employment(EmploymentCategory::Intern);
        let s = score(&w, Weekday::Monday, "Night", &SchedulerConfig::default(), &catalog());
        assert_eq!(s, BASE_SCORE);
    }

    #[test]
    fn test_score_is_pure() {
        let c = catalog();
        let cfg = SchedulerConfig::default();
        let w = worker_w();
        let first = score(&w, Weekday::Wednesday, "Morning", &cfg, &c);

        let generated = ScheduleGenerator::new(&c, &cfg)
            .generate(&Schedule::weekly(&["Morning"]), std::slice::from_ref(&w))
            .unwrap();
        assert_eq!(generated.assignment_count("W"), 5);

        let second = score(&w, Weekday::Wednesday, "Morning", &cfg, &c);
        assert_eq!(first, second);
        assert_eq!(second, 71);
    }
}
