//! Schedule generation, fill metrics and rule audits.
//!
//! # Algorithm
//!
//! `ScheduleGenerator` uses a greedy, sequential, highest-score-first
//! heuristic over a fixed shift order. It is not optimal, but it is fast
//! and fully deterministic for a given input.
//!
//! # Metrics
//!
//! `FillSummary` reports how many shifts a schedule fills. `audit` lists
//! placements that break the enabled rules.

mod audit;
mod generator;
mod summary;

pub use audit::audit;
pub use generator::ScheduleGenerator;
pub use summary::FillSummary;
