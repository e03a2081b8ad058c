//! Shift model.
//!
//! A shift is one (day, time-slot) cell of the weekly grid. It holds a
//! duplicate-free roster of worker ids and an optional task label.
//! An empty roster always carries no label.
//!
//! The roster is a set: its order is kept for display only and two shifts
//! with the same workers in a different order are equal.

use serde::{Deserialize, Serialize};

use super::Weekday;

/// One cell of the weekly roster.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Unique shift identifier.
    pub id: String,
    /// Day of the week.
    pub day: Weekday,
    /// Free-form time-slot identifier (e.g. "04:30-12:30").
    pub time_slot: String,
    /// Assigned workers, in assignment order.
    pub worker_ids: Vec<String>,
    /// Task label for the assigned workers.
    pub role: Option<String>,
}

impl PartialEq for Shift {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.day == other.day
            && self.time_slot == other.time_slot
            && self.role == other.role
            && self.worker_ids.len() == other.worker_ids.len()
            && self.worker_ids.iter().all(|w| other.has_worker(w))
    }
}

impl Shift {
    /// Creates an empty shift with the conventional `"{Day}-{slot}"` id.
    pub fn new(day: Weekday, time_slot: impl Into<String>) -> Self {
        let time_slot = time_slot.into();
        Self {
            id: Self::cell_id(day, &time_slot),
            day,
            time_slot,
            worker_ids: Vec::new(),
            role: None,
        }
    }

    /// Overrides the shift id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Adds a worker (no-op when already assigned).
    pub fn with_worker(mut self, worker_id: impl Into<String>) -> Self {
        self.add_worker(worker_id);
        self
    }

    /// Sets the task label.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Conventional id for a grid cell.
    pub fn cell_id(day: Weekday, time_slot: &str) -> String {
        format!("{day}-{time_slot}")
    }

    /// Whether nobody is assigned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.worker_ids.is_empty()
    }

    /// Whether `worker_id` is assigned.
    pub fn has_worker(&self, worker_id: &str) -> bool {
        self.worker_ids.iter().any(|w| w == worker_id)
    }

    /// Adds a worker. Returns `false` if they were already assigned.
    pub fn add_worker(&mut self, worker_id: impl Into<String>) -> bool {
        let worker_id = worker_id.into();
        if self.has_worker(&worker_id) {
            return false;
        }
        self.worker_ids.push(worker_id);
        true
    }

    /// Removes a worker, dropping the label once the roster is empty.
    ///
    /// Returns `false` if the worker was not assigned.
    pub fn remove_worker(&mut self, worker_id: &str) -> bool {
        let before = self.worker_ids.len();
        self.worker_ids.retain(|w| w != worker_id);
        if self.worker_ids.is_empty() {
            self.role = None;
        }
        self.worker_ids.len() != before
    }

    /// Empties the roster and the label.
    pub fn clear(&mut self) {
        self.worker_ids.clear();
        self.role = None;
    }
}
