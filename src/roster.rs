//! Live roster and suggestion workflow.
//!
//! A [`Roster`] owns everything one scheduling session needs: the worker
//! list, the slot catalog, the configuration, the committed (live)
//! schedule and at most one generated suggestion. Manual edits act on the
//! live schedule; generation only ever produces a suggestion, which the
//! caller applies or discards.
//!
//! The roster performs no locking. Callers serialise access to it.

use tracing::{info, warn};

use crate::config::{ConfigUpdate, SchedulerConfig};
use crate::edit::MoveKind;
use crate::error::SchedulerError;
use crate::models::{Schedule, Shift, SkillCatalog, Violation, Worker};
use crate::scheduler::{audit, FillSummary, ScheduleGenerator};
use crate::validation::validate_input;

/// A scheduling session.
#[derive(Debug, Clone)]
pub struct Roster {
    workers: Vec<Worker>,
    catalog: SkillCatalog,
    config: SchedulerConfig,
    live: Schedule,
    suggestion: Option<Schedule>,
}

impl Roster {
    /// Creates a roster after validating the grid and the workers.
    pub fn new(
        live: Schedule,
        workers: Vec<Worker>,
        catalog: SkillCatalog,
        config: SchedulerConfig,
    ) -> Result<Self, SchedulerError> {
        validate_input(&live, &workers)?;
        Ok(Self {
            workers,
            catalog,
            config,
            live,
            suggestion: None,
        })
    }

    /// The farm's standard week: default catalog slots, default config.
    pub fn farm_default(workers: Vec<Worker>) -> Result<Self, SchedulerError> {
        let catalog = SkillCatalog::farm_default();
        let slots: Vec<&str> = catalog.slots().collect();
        let live = Schedule::weekly(&slots);
        Self::new(live, workers, catalog, SchedulerConfig::default())
    }

    pub fn live(&self) -> &Schedule {
        &self.live
    }

    /// The pending suggestion, if one was generated and not yet resolved.
    pub fn suggestion(&self) -> Option<&Schedule> {
        self.suggestion.as_ref()
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn worker(&self, worker_id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == worker_id)
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates a fresh suggestion over the live grid.
    ///
    /// Replaces any earlier suggestion. The live schedule is not touched.
    pub fn generate(&mut self) -> Result<FillSummary, SchedulerError> {
        let proposal =
            ScheduleGenerator::new(&self.catalog, &self.config).generate(&self.live, &self.workers)?;
        let summary = FillSummary::calculate(&proposal);
        self.suggestion = Some(proposal);
        Ok(summary)
    }

    /// Replaces the live schedule with the pending suggestion.
    pub fn apply_suggestion(&mut self) -> Result<FillSummary, SchedulerError> {
        let proposal = self
            .suggestion
            .take()
            .ok_or(SchedulerError::NoPendingSuggestion)?;
        self.live = proposal;
        let summary = FillSummary::calculate(&self.live);
        info!("suggestion applied: {}", summary.describe());
        Ok(summary)
    }

    /// Drops the pending suggestion. Returns `false` if there was none.
    pub fn discard_suggestion(&mut self) -> bool {
        let had = self.suggestion.take().is_some();
        if had {
            info!("suggestion discarded");
        }
        had
    }

    /// Merges a partial configuration change.
    pub fn update_config(&mut self, update: ConfigUpdate) {
        self.config.merge(update);
    }

    /// Flips a rule by name. Returns `false` for unknown names.
    pub fn toggle_rule(&mut self, name: &str) -> bool {
        self.config.toggle_rule(name)
    }

    /// Places a worker on a live shift. See [`Schedule::assign`].
    pub fn assign(
        &mut self,
        shift_id: &str,
        worker_id: &str,
        role: Option<String>,
    ) -> Result<&Shift, SchedulerError> {
        self.require_worker(worker_id)?;
        self.live
            .assign(shift_id, worker_id, role)
            .inspect_err(|e| warn!(error = %e, "assign rejected"))
    }

    /// Empties a live shift. See [`Schedule::clear_shift`].
    pub fn clear(&mut self, shift_id: &str) -> Result<&Shift, SchedulerError> {
        self.live
            .clear_shift(shift_id)
            .inspect_err(|e| warn!(error = %e, "clear rejected"))
    }

    /// Moves a worker between live shifts. See [`Schedule::move_or_swap`].
    pub fn move_or_swap(
        &mut self,
        source_id: &str,
        target_id: &str,
        worker_id: &str,
    ) -> Result<MoveKind, SchedulerError> {
        self.require_worker(worker_id)?;
        self.live
            .move_or_swap(source_id, target_id, worker_id)
            .inspect_err(|e| warn!(error = %e, "move rejected"))
    }

    /// Adds a worker or replaces the one with the same id.
    ///
    /// The worker must pass structural validation on its own.
    pub fn upsert_worker(&mut self, worker: Worker) -> Result<(), SchedulerError> {
        crate::validation::validate_workers(std::slice::from_ref(&worker))?;
        match self.workers.iter_mut().find(|w| w.id == worker.id) {
            Some(existing) => *existing = worker,
            None => self.workers.push(worker),
        }
        Ok(())
    }

    /// Deletes a worker and strips them from every live shift and from the
    /// pending suggestion.
    ///
    /// Returns the removed worker.
    pub fn remove_worker(&mut self, worker_id: &str) -> Result<Worker, SchedulerError> {
        let idx = self
            .workers
            .iter()
            .position(|w| w.id == worker_id)
            .ok_or_else(|| SchedulerError::UnknownWorker(worker_id.to_string()))?;
        let removed_from = self.live.remove_worker(worker_id);
        if let Some(proposal) = self.suggestion.as_mut() {
            proposal.remove_worker(worker_id);
        }
        info!(worker = worker_id, shifts = removed_from, "worker removed");
        Ok(self.workers.remove(idx))
    }

    /// Rule violations in the live schedule.
    pub fn audit(&self) -> Vec<Violation> {
        audit(&self.live, &self.workers, &self.config, &self.catalog)
    }

    /// Fill statistics of the live schedule.
    pub fn summary(&self) -> FillSummary {
        FillSummary::calculate(&self.live)
    }

    fn require_worker(&self, worker_id: &str) -> Result<(), SchedulerError> {
        if self.worker(worker_id).is_none() {
            warn!(worker = worker_id, "edit references unknown worker");
            return Err(SchedulerError::UnknownWorker(worker_id.to_string()));
        }
        Ok(())
    }
}
