//! Structural validation of roster input.
//!
//! Checks the integrity of the shift grid and the worker list before any
//! assignment logic runs. Detects:
//! - Duplicate shift or worker IDs
//! - Duplicate or missing (day, time-slot) cells
//! - Workers listed twice on one shift
//! - Labels on empty shifts
//! - Duplicate skills and non-positive weekly caps
//!
//! All problems are collected; nothing stops at the first one.

use std::collections::HashSet;

use crate::models::{Schedule, Weekday, Worker};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// Two shifts occupy the same (day, time-slot) cell.
    DuplicateCell,
    /// A (day, time-slot) cell has no shift.
    MissingCell,
    /// A worker appears twice on the same shift.
    DuplicateAssignment,
    /// An empty shift carries a task label.
    DanglingRole,
    /// A worker lists the same skill twice.
    DuplicateSkill,
    /// A worker's weekly cap is zero.
    InvalidShiftLimit,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates both the grid and the worker list.
pub fn validate_input(schedule: &Schedule, workers: &[Worker]) -> ValidationResult {
    let mut errors = Vec::new();
    collect_schedule_errors(schedule, &mut errors);
    collect_worker_errors(workers, &mut errors);
    finish(errors)
}

/// Validates the shift grid.
///
/// Every (day, time-slot) pair built from the seven weekdays and the
/// grid's distinct slots must appear exactly once.
pub fn validate_schedule(schedule: &Schedule) -> ValidationResult {
    let mut errors = Vec::new();
    collect_schedule_errors(schedule, &mut errors);
    finish(errors)
}

/// Validates the worker list.
pub fn validate_workers(workers: &[Worker]) -> ValidationResult {
    let mut errors = Vec::new();
    collect_worker_errors(workers, &mut errors);
    finish(errors)
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_schedule_errors(schedule: &Schedule, errors: &mut Vec<ValidationError>) {
    let mut shift_ids = HashSet::new();
    let mut cells: HashSet<(Weekday, &str)> = HashSet::new();

    for shift in &schedule.shifts {
        if !shift_ids.insert(shift.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate shift ID: {}", shift.id),
            ));
        }

        if !cells.insert((shift.day, shift.time_slot.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCell,
                format!("Duplicate cell: {} {}", shift.day, shift.time_slot),
            ));
        }

        let mut seen = HashSet::new();
        for w in &shift.worker_ids {
            if !seen.insert(w.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateAssignment,
                    format!("Worker '{}' listed twice on shift '{}'", w, shift.id),
                ));
            }
        }

        if shift.is_empty() && shift.role.is_some() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DanglingRole,
                format!("Shift '{}' has a role but no workers", shift.id),
            ));
        }
    }

    for slot in schedule.time_slots() {
        for day in Weekday::ALL {
            if !cells.contains(&(day, slot)) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingCell,
                    format!("Missing cell: {day} {slot}"),
                ));
            }
        }
    }
}

fn collect_worker_errors(workers: &[Worker], errors: &mut Vec<ValidationError>) {
    let mut worker_ids = HashSet::new();

    for worker in workers {
        if !worker_ids.insert(worker.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", worker.id),
            ));
        }

        let mut skills = HashSet::new();
        for skill in &worker.skills {
            if !skills.insert(skill.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSkill,
                    format!("Worker '{}' lists skill '{}' twice", worker.id, skill),
                ));
            }
        }

        if worker.max_shifts_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidShiftLimit,
                format!("Worker '{}' has a weekly cap of zero", worker.id),
            ));
        }
    }
}
