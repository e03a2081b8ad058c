//! Built-in eligibility rules.
//!
//! # Rules
//!
//! - **skillMatch**: shares at least one skill with the slot requirements
//! - **noConsecutiveShifts**: no other shift on the same day
//! - **maxShiftsPerWeek**: below the worker's weekly cap
//! - **respectDaysOff**: not a preferred day off
//! - **maxConsecutiveDays**: run of consecutive working days stays ≤ 6
//!
//! Slots with no catalogued requirements fail `skillMatch` for everyone:
//! the rule asks for a non-empty intersection.

use std::sync::Arc;

use super::{EligibilityRule, PlacementContext};
use crate::models::{RuleKind, Worker};

/// Longest allowed run of consecutive working days.
pub const MAX_CONSECUTIVE_DAYS: usize = 6;

/// Worker must share a skill with the slot requirements.
#[derive(Debug, Clone, Copy)]
pub struct SkillMatch;

impl EligibilityRule for SkillMatch {
    fn name(&self) -> &'static str {
        RuleKind::SkillMatch.name()
    }

    fn permits(&self, worker: &Worker, context: &PlacementContext<'_>) -> bool {
        context.catalog.has_required_skill(worker, context.time_slot)
    }

    fn description(&self) -> &'static str {
        RuleKind::SkillMatch.description()
    }
}

/// At most one shift per worker per day, whatever the slot.
#[derive(Debug, Clone, Copy)]
pub struct NoConsecutiveShifts;

impl EligibilityRule for NoConsecutiveShifts {
    fn name(&self) -> &'static str {
        RuleKind::NoConsecutiveShifts.name()
    }

    fn permits(&self, worker: &Worker, context: &PlacementContext<'_>) -> bool {
        !context.schedule.works_on(&worker.id, context.day)
    }

    fn description(&self) -> &'static str {
        RuleKind::NoConsecutiveShifts.description()
    }
}

/// Worker's existing assignment count must stay below their cap.
#[derive(Debug, Clone, Copy)]
pub struct MaxShiftsPerWeek;

impl EligibilityRule for MaxShiftsPerWeek {
    fn name(&self) -> &'static str {
        RuleKind::MaxShiftsPerWeek.name()
    }

    fn permits(&self, worker: &Worker, context: &PlacementContext<'_>) -> bool {
        context.schedule.assignment_count(&worker.id) < worker.max_shifts_per_week as usize
    }

    fn description(&self) -> &'static str {
        RuleKind::MaxShiftsPerWeek.description()
    }
}

/// Never place a worker on one of their preferred days off.
#[derive(Debug, Clone, Copy)]
pub struct RespectDaysOff;

impl EligibilityRule for RespectDaysOff {
    fn name(&self) -> &'static str {
        RuleKind::RespectDaysOff.name()
    }

    fn permits(&self, worker: &Worker, context: &PlacementContext<'_>) -> bool {
        !worker.prefers_off(context.day)
    }

    fn description(&self) -> &'static str {
        RuleKind::RespectDaysOff.description()
    }
}

/// Caps the run of consecutive working days.
///
/// Walks backward from the candidate day through the circular week,
/// counting days on which the worker already has a shift. The walk stops
/// at the first free day. The candidate day itself counts as one.
#[derive(Debug, Clone, Copy)]
pub struct MaxConsecutiveDays;

impl MaxConsecutiveDays {
    /// Length of the run the placement would create.
    pub fn run_length(worker: &Worker, context: &PlacementContext<'_>) -> usize {
        let mut run = 1;
        let mut day = context.day;
        for _ in 0..MAX_CONSECUTIVE_DAYS {
            day = day.previous();
            if !context.schedule.works_on(&worker.id, day) {
                break;
            }
            run += 1;
        }
        run
    }
}

impl EligibilityRule for MaxConsecutiveDays {
    fn name(&self) -> &'static str {
        RuleKind::MaxConsecutiveDays.name()
    }

    fn permits(&self, worker: &Worker, context: &PlacementContext<'_>) -> bool {
        Self::run_length(worker, context) <= MAX_CONSECUTIVE_DAYS
    }

    fn description(&self) -> &'static str {
        RuleKind::MaxConsecutiveDays.description()
    }
}

/// Rule implementation for a built-in kind.
pub fn builtin(kind: RuleKind) -> Arc<dyn EligibilityRule> {
    match kind {
        RuleKind::SkillMatch => Arc::new(SkillMatch),
        RuleKind::NoConsecutiveShifts => Arc::new(NoConsecutiveShifts),
        RuleKind::MaxShiftsPerWeek => Arc::new(MaxShiftsPerWeek),
        RuleKind::RespectDaysOff => Arc::new(RespectDaysOff),
        RuleKind::MaxConsecutiveDays => Arc::new(MaxConsecutiveDays),
    }
}
