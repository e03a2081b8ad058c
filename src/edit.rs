//! Manual edit operations on a schedule.
//!
//! Shift lifecycle: **Empty** → assign → **Assigned** → clear → **Empty**;
//! an assigned shift may also lose or gain workers through a move.
//!
//! Shifts hold several workers, so a drag onto an occupied shift moves the
//! dragged worker into that shift's roster; the workers already there
//! stay. [`MoveKind`] tells the caller which case occurred so it can word
//! the action as a move or a swap.
//!
//! Every edit resolves all ids before touching anything: a failed edit
//! leaves the schedule as it was.

use tracing::debug;

use crate::error::SchedulerError;
use crate::models::{Schedule, Shift};

/// What a [`Schedule::move_or_swap`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Source and target were the same shift; nothing changed.
    Unchanged,
    /// Worker moved into an empty shift.
    Moved,
    /// Worker joined a shift that already had workers.
    JoinedOccupied,
}

impl Schedule {
    fn index_of(&self, shift_id: &str) -> Result<usize, SchedulerError> {
        self.position(shift_id)
            .ok_or_else(|| SchedulerError::UnknownShift(shift_id.to_string()))
    }

    /// Adds a worker to a shift and sets its task label.
    ///
    /// Adding a worker already on the shift only updates the label.
    /// Returns the updated shift.
    pub fn assign(
        &mut self,
        shift_id: &str,
        worker_id: &str,
        role: Option<String>,
    ) -> Result<&Shift, SchedulerError> {
        let idx = self.index_of(shift_id)?;
        let shift = &mut self.shifts[idx];
        shift.add_worker(worker_id);
        shift.role = role;
        debug!(shift = %shift.id, worker = worker_id, role = ?shift.role, "worker assigned");
        Ok(&self.shifts[idx])
    }

    /// Empties a shift's roster and label. Clearing an empty shift is a no-op.
    pub fn clear_shift(&mut self, shift_id: &str) -> Result<&Shift, SchedulerError> {
        let idx = self.index_of(shift_id)?;
        self.shifts[idx].clear();
        debug!(shift = shift_id, "shift cleared");
        Ok(&self.shifts[idx])
    }

    /// Moves `worker_id` from one shift to another.
    ///
    /// The source drops its label once empty. The target adopts the
    /// source's label if it had none.
    ///
    /// # Errors
    /// `UnknownShift` for either id, `WorkerNotInShift` when the worker is
    /// not on the source shift.
    pub fn move_or_swap(
        &mut self,
        source_id: &str,
        target_id: &str,
        worker_id: &str,
    ) -> Result<MoveKind, SchedulerError> {
        let source = self.index_of(source_id)?;
        let target = self.index_of(target_id)?;
        if !self.shifts[source].has_worker(worker_id) {
            return Err(SchedulerError::WorkerNotInShift {
                worker_id: worker_id.to_string(),
                shift_id: source_id.to_string(),
            });
        }
        if source == target {
            return Ok(MoveKind::Unchanged);
        }

        let kind = if self.shifts[target].is_empty() {
            MoveKind::Moved
        } else {
            MoveKind::JoinedOccupied
        };

        let source_role = self.shifts[source].role.clone();
        self.shifts[source].remove_worker(worker_id);

        let dest = &mut self.shifts[target];
        dest.add_worker(worker_id);
        if dest.role.is_none() {
            dest.role = source_role;
        }

        debug!(from = source_id, to = target_id, worker = worker_id, ?kind, "worker moved");
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::weekly(&["Morning", "Evening"]);
        s.assign("Monday-Morning", "1", Some("Milking".into())).unwrap();
        s.assign("Monday-Evening", "2", Some("Feeding".into())).unwrap();
        s
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut s = Schedule::weekly(&["Morning"]);
        s.assign("Monday-Morning", "1", Some("Milking".into())).unwrap();
        let shift = s.assign("Monday-Morning", "1", Some("Cleaning".into())).unwrap();
        assert_eq!(shift.worker_ids, vec!["1"]);
        assert_eq!(shift.role.as_deref(), Some("Cleaning"));
    }

    #[test]
    fn test_assign_adds_to_roster() {
        let mut s = sample_schedule();
        let shift = s.assign("Monday-Morning", "3", None).unwrap();
        assert_eq!(shift.worker_ids, vec!["1", "3"]);
        assert!(shift.role.is_none());
    }

    #[test]
    fn test_assign_unknown_shift() {
        let mut s = sample_schedule();
        let before = s.clone();
        let err = s.assign("Funday-Morning", "1", None).unwrap_err();
        assert!(matches!(err, SchedulerError::UnknownShift(ref id) if id == "Funday-Morning"));
        assert_eq!(s, before);
    }

    #[test]
    fn test_clear_twice_same_as_once() {
        let mut s = sample_schedule();
        let once = s.clear_shift("Monday-Morning").unwrap().clone();
        let twice = s.clear_shift("Monday-Morning").unwrap().clone();
        assert_eq!(once, twice);
        assert!(twice.is_empty());
        assert!(twice.role.is_none());
    }

    #[test]
    fn test_move_into_empty_and_back() {
        let mut s = sample_schedule();
        let original = s.clone();

        let kind = s.move_or_swap("Monday-Morning", "Tuesday-Morning", "1").unwrap();
        assert_eq!(kind, MoveKind::Moved);
        let source = s.shift("Monday-Morning").unwrap();
        assert!(source.is_empty());
        assert!(source.role.is_none());
        let target = s.shift("Tuesday-Morning").unwrap();
        assert_eq!(target.worker_ids, vec!["1"]);
        assert_eq!(target.role.as_deref(), Some("Milking"));

        s.move_or_swap("Tuesday-Morning", "Monday-Morning", "1").unwrap();
        assert_eq!(s, original);
    }

    #[test]
    fn test_move_into_occupied_keeps_occupants() {
        let mut s = sample_schedule();
        let kind = s.move_or_swap("Monday-Morning", "Monday-Evening", "1").unwrap();
        assert_eq!(kind, MoveKind::JoinedOccupied);

        let target = s.shift("Monday-Evening").unwrap();
        assert_eq!(target.worker_ids, vec!["2", "1"]);
        assert_eq!(target.role.as_deref(), Some("Feeding"));
        assert!(s.shift("Monday-Morning").unwrap().is_empty());
    }

    #[test]
    fn test_move_from_shared_shift_keeps_source_role() {
        let mut s = sample_schedule();
        s.assign("Monday-Morning", "3", Some("Milking".into())).unwrap();
        s.move_or_swap("Monday-Morning", "Friday-Evening", "3").unwrap();

        let source = s.shift("Monday-Morning").unwrap();
        assert_eq!(source.worker_ids, vec!["1"]);
        assert_eq!(source.role.as_deref(), Some("Milking"));
    }

    #[test]
    fn test_move_off_shared_shift_and_back() {
        let mut s = sample_schedule();
        s.assign("Monday-Morning", "2", Some("Milking".into())).unwrap();
        let original = s.clone();

        s.move_or_swap("Monday-Morning", "Wednesday-Evening", "1").unwrap();
        assert_eq!(s.shift("Monday-Morning").unwrap().worker_ids, vec!["2"]);
        s.move_or_swap("Wednesday-Evening", "Monday-Morning", "1").unwrap();

        assert_eq!(s.shift("Monday-Morning").unwrap().worker_ids, vec!["2", "1"]);
        assert_eq!(s, original);
    }

    #[test]
    fn test_move_same_shift_is_noop() {
        let mut s = sample_schedule();
        let before = s.clone();
        let kind = s.move_or_swap("Monday-Morning", "Monday-Morning", "1").unwrap();
        assert_eq!(kind, MoveKind::Unchanged);
        assert_eq!(s, before);
    }

    #[test]
    fn test_move_requires_worker_on_source() {
        let mut s = sample_schedule();
        let before = s.clone();
        let err = s.move_or_swap("Monday-Morning", "Tuesday-Morning", "2").unwrap_err();
        assert!(matches!(err, SchedulerError::WorkerNotInShift { .. }));
        assert_eq!(s, before);
    }

    #[test]
    fn test_move_unknown_target_is_atomic() {
        let mut s = sample_schedule();
        let before = s.clone();
        let err = s.move_or_swap("Monday-Morning", "nowhere", "1").unwrap_err();
        assert!(err.is_invalid_edit());
        assert_eq!(s, before);
    }
}
