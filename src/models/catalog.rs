//! Time-slot requirement catalog.
//!
//! Maps each time-slot to the skills relevant to it and to its fill
//! priority. Slots missing from the catalog require nothing and are
//! filled after every catalogued slot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Worker;

static NO_SKILLS: BTreeSet<String> = BTreeSet::new();

/// Requirements of one time-slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRequirement {
    /// Time-slot identifier.
    pub slot: String,
    /// Skills relevant to the slot.
    pub required_skills: BTreeSet<String>,
    /// Fill priority (lower = filled first).
    pub priority: u32,
}

/// Static catalog of slot requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCatalog {
    slots: Vec<SlotRequirement>,
}

impl SlotRequirement {
    /// Creates a requirement with no skills and priority 0.
    pub fn new(slot: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            required_skills: BTreeSet::new(),
            priority: 0,
        }
    }

    /// Adds required skills.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills
            .extend(skills.into_iter().map(Into::into));
        self
    }

    /// Sets the fill priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }
}

impl SkillCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The farm's standard three-slot day.
    ///
    /// The early slot is filled first, then the night slot, then the
    /// afternoon slot.
    pub fn farm_default() -> Self {
        Self::new()
            .with_slot(
                SlotRequirement::new("04:30-12:30")
                    .with_skills(["Milking", "Feeding", "Cleaning"])
                    .with_priority(0),
            )
            .with_slot(
                SlotRequirement::new("12:30-20:30")
                    .with_skills(["Maintenance", "General Care", "Feeding"])
                    .with_priority(2),
            )
            .with_slot(
                SlotRequirement::new("20:30-04:30")
                    .with_skills(["Cleaning", "Feeding", "Maintenance"])
                    .with_priority(1),
            )
    }

    /// Adds or replaces a slot entry.
    pub fn with_slot(mut self, requirement: SlotRequirement) -> Self {
        self.insert(requirement);
        self
    }

    /// Adds or replaces a slot entry.
    pub fn insert(&mut self, requirement: SlotRequirement) {
        match self.slots.iter_mut().find(|r| r.slot == requirement.slot) {
            Some(existing) => *existing = requirement,
            None => self.slots.push(requirement),
        }
    }

    /// Catalogued slots in insertion order.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|r| r.slot.as_str())
    }

    /// Full entry for a slot.
    pub fn get(&self, slot: &str) -> Option<&SlotRequirement> {
        self.slots.iter().find(|r| r.slot == slot)
    }

    /// Skills relevant to a slot; empty for unknown slots.
    pub fn required_skills(&self, slot: &str) -> &BTreeSet<String> {
        self.get(slot)
            .map(|r| &r.required_skills)
            .unwrap_or(&NO_SKILLS)
    }

    /// Fill priority of a slot; `None` for unknown slots.
    pub fn priority_rank(&self, slot: &str) -> Option<u32> {
        self.get(slot).map(|r| r.priority)
    }

    /// Number of the worker's skills relevant to `slot`.
    pub fn matching_skills(&self, worker: &Worker, slot: &str) -> usize {
        let required = self.required_skills(slot);
        worker.skills.iter().filter(|s| required.contains(*s)).count()
    }

    /// Whether the worker has any skill relevant to `slot`.
    pub fn has_required_skill(&self, worker: &Worker, slot: &str) -> bool {
        self.first_matching_skill(worker, slot).is_some()
    }

    /// First of the worker's skills (in their own order) relevant to `slot`.
    pub fn first_matching_skill<'w>(&self, worker: &'w Worker, slot: &str) -> Option<&'w str> {
        let required = self.required_skills(slot);
        worker
            .skills
            .iter()
            .find(|s| required.contains(*s))
            .map(String::as_str)
    }
}
