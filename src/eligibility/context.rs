//! Placement context for eligibility rule evaluation.

use crate::models::{Schedule, SkillCatalog, Weekday};

/// The shift under consideration plus the state it is judged against.
///
/// `schedule` is the schedule as built so far; rules that count existing
/// assignments read it, they never modify it.
#[derive(Debug, Clone, Copy)]
pub struct PlacementContext<'a> {
    /// Day of the candidate shift.
    pub day: Weekday,
    /// Time-slot of the candidate shift.
    pub time_slot: &'a str,
    /// Schedule the candidate would join.
    pub schedule: &'a Schedule,
    /// Slot requirements.
    pub catalog: &'a SkillCatalog,
}

impl<'a> PlacementContext<'a> {
    /// Creates a context.
    pub fn new(
        day: Weekday,
        time_slot: &'a str,
        schedule: &'a Schedule,
        catalog: &'a SkillCatalog,
    ) -> Self {
        Self {
            day,
            time_slot,
            schedule,
            catalog,
        }
    }

    /// Same shift cell, judged against another schedule.
    pub fn with_schedule(self, schedule: &'a Schedule) -> Self {
        Self { schedule, ..self }
    }
}
