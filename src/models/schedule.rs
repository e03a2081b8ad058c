//! Schedule model.
//!
//! A schedule is the weekly grid of shifts: seven days times N distinct
//! time-slots. Both the live roster and a generated suggestion are
//! `Schedule` values; they never share state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Shift, Weekday};

/// A weekly roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Shifts in grid order.
    pub shifts: Vec<Shift>,
}

/// A rule breach found in an existing schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Shift where the breach was found.
    pub shift_id: String,
    /// Worker placed in breach.
    pub worker_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of violations; one per eligibility rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Worker shares no skill with the slot requirements.
    SkillMismatch,
    /// Worker holds another shift on the same day.
    SameDayShift,
    /// Worker is above their weekly cap.
    WeeklyCapExceeded,
    /// Worker placed on a preferred day off.
    DayOff,
    /// Worker's run of consecutive days is too long.
    ConsecutiveDays,
    /// Placed worker is not on the roster.
    UnknownWorker,
    /// Rule outside the built-in set.
    Custom(String),
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        shift_id: impl Into<String>,
        worker_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            shift_id: shift_id.into(),
            worker_id: worker_id.into(),
            message: message.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule (no shifts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the empty 7×N grid for the given slots.
    ///
    /// Shifts are laid out day-major: every slot of Monday, then Tuesday, …
    pub fn weekly<S: AsRef<str>>(time_slots: &[S]) -> Self {
        let shifts = Weekday::ALL
            .iter()
            .flat_map(|&day| {
                time_slots
                    .iter()
                    .map(move |slot| Shift::new(day, slot.as_ref()))
            })
            .collect();
        Self { shifts }
    }

    /// Builds a schedule from existing shifts.
    pub fn from_shifts(shifts: Vec<Shift>) -> Self {
        Self { shifts }
    }

    /// Number of shifts in the grid.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Whether the grid has no shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Finds a shift by id.
    pub fn shift(&self, shift_id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == shift_id)
    }

    /// Finds a shift by id, mutably.
    pub fn shift_mut(&mut self, shift_id: &str) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|s| s.id == shift_id)
    }

    /// Index of a shift by id.
    pub fn position(&self, shift_id: &str) -> Option<usize> {
        self.shifts.iter().position(|s| s.id == shift_id)
    }

    /// Finds the shift for a (day, slot) cell.
    pub fn cell(&self, day: Weekday, time_slot: &str) -> Option<&Shift> {
        self.shifts
            .iter()
            .find(|s| s.day == day && s.time_slot == time_slot)
    }

    /// Distinct time-slots in first-seen order.
    pub fn time_slots(&self) -> Vec<&str> {
        let mut slots: Vec<&str> = Vec::new();
        for s in &self.shifts {
            if !slots.contains(&s.time_slot.as_str()) {
                slots.push(&s.time_slot);
            }
        }
        slots
    }

    /// All shifts a worker is assigned to.
    pub fn shifts_for_worker(&self, worker_id: &str) -> Vec<&Shift> {
        self.shifts.iter().filter(|s| s.has_worker(worker_id)).collect()
    }

    /// Number of shifts a worker is assigned to.
    pub fn assignment_count(&self, worker_id: &str) -> usize {
        self.shifts.iter().filter(|s| s.has_worker(worker_id)).count()
    }

    /// Whether a worker holds any shift on `day`.
    pub fn works_on(&self, worker_id: &str, day: Weekday) -> bool {
        self.shifts
            .iter()
            .any(|s| s.day == day && s.has_worker(worker_id))
    }

    /// Number of shifts with at least one worker.
    pub fn filled_count(&self) -> usize {
        self.shifts.iter().filter(|s| !s.is_empty()).count()
    }

    /// Assignment counts per worker.
    pub fn workload(&self) -> HashMap<String, usize> {
        let mut load: HashMap<String, usize> = HashMap::new();
        for s in &self.shifts {
            for w in &s.worker_ids {
                *load.entry(w.clone()).or_insert(0) += 1;
            }
        }
        load
    }

    /// Copy of this grid with every assignment and label removed.
    pub fn cleared(&self) -> Self {
        let mut out = self.clone();
        out.shifts.iter_mut().for_each(Shift::clear);
        out
    }

    /// Strips a worker from every shift.
    ///
    /// Returns the number of shifts the worker was removed from.
    pub fn remove_worker(&mut self, worker_id: &str) -> usize {
        self.shifts
            .iter_mut()
            .map(|s| s.remove_worker(worker_id))
            .filter(|&removed| removed)
            .count()
    }
}
