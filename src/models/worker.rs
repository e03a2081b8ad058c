//! Worker model.
//!
//! Workers are the people placed on shifts. Each worker carries an
//! employment category, an ordered skill list, scheduling preferences
//! and a weekly shift cap.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Weekday;

/// A worker that can be placed on shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Primary role label (e.g. "Manager", "Veterinarian").
    pub role: String,
    /// Employment category.
    #[serde(rename = "employmentType")]
    pub employment: EmploymentCategory,
    /// Skills, in the worker's own order. Must be duplicate-free.
    pub skills: Vec<String>,
    /// Slot and day preferences.
    pub preferences: Preferences,
    /// Maximum number of shifts per 7-day week.
    pub max_shifts_per_week: u32,
}

/// Employment category.
///
/// The category set is open-ended; only [`EmploymentCategory::FullTime`]
/// has a special meaning to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentCategory {
    FullTime,
    PartTime,
    Seasonal,
    Intern,
    /// Site-specific category.
    Custom(String),
}

/// Scheduling preferences of a worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Time-slots the worker would rather work.
    #[serde(rename = "preferredShifts")]
    pub preferred_slots: BTreeSet<String>,
    /// Days the worker would rather have off.
    #[serde(rename = "preferredDaysOff")]
    pub days_off: BTreeSet<Weekday>,
}

impl Worker {
    /// Creates a full-time worker with no skills and a cap of 5 shifts.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role: String::new(),
            employment: EmploymentCategory::FullTime,
            skills: Vec::new(),
            preferences: Preferences::default(),
            max_shifts_per_week: 5,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the primary role label.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the employment category.
    pub fn with_employment(mut self, employment: EmploymentCategory) -> Self {
        self.employment = employment;
        self
    }

    /// Appends a skill. Already-present skills are ignored.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        let skill = skill.into();
        if !self.has_skill(&skill) {
            self.skills.push(skill);
        }
        self
    }

    /// Appends several skills in order.
    pub fn with_skills<I, S>(self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        skills.into_iter().fold(self, |w, s| w.with_skill(s))
    }

    /// Adds a preferred time-slot.
    pub fn with_preferred_slot(mut self, slot: impl Into<String>) -> Self {
        self.preferences.preferred_slots.insert(slot.into());
        self
    }

    /// Adds a preferred day off.
    pub fn with_day_off(mut self, day: Weekday) -> Self {
        self.preferences.days_off.insert(day);
        self
    }

    /// Sets the weekly shift cap.
    pub fn with_max_shifts(mut self, max: u32) -> Self {
        self.max_shifts_per_week = max;
        self
    }

    /// Whether this worker has a given skill.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Whether this worker is employed full-time.
    pub fn is_full_time(&self) -> bool {
        self.employment == EmploymentCategory::FullTime
    }

    /// Whether `slot` is one of the worker's preferred slots.
    pub fn prefers_slot(&self, slot: &str) -> bool {
        self.preferences.preferred_slots.contains(slot)
    }

    /// Whether `day` is one of the worker's preferred days off.
    pub fn prefers_off(&self, day: Weekday) -> bool {
        self.preferences.days_off.contains(&day)
    }
}
