//! Schedule fill metrics.
//!
//! Partial fill is data, not failure: callers report "N of M shifts
//! filled" and may list the open shifts.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Filled shifts | Shifts with at least one worker |
//! | Coverage rate | filled / total |
//! | Workload | Shifts per assigned worker |

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::Schedule;

/// Fill statistics of one schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillSummary {
    /// Number of shifts in the grid.
    pub total_shifts: usize,
    /// Shifts with at least one worker.
    pub filled_shifts: usize,
    /// Ids of shifts left empty, in grid order.
    pub unfilled_shift_ids: Vec<String>,
    /// Shifts per worker, keyed by worker id.
    pub assignments_by_worker: BTreeMap<String, usize>,
    /// Fraction of shifts filled (1.0 for an empty grid).
    pub coverage_rate: f64,
}

impl FillSummary {
    /// Computes the summary of a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let total_shifts = schedule.len();
        let unfilled_shift_ids: Vec<String> = schedule
            .shifts
            .iter()
            .filter(|s| s.is_empty())
            .map(|s| s.id.clone())
            .collect();
        let filled_shifts = total_shifts - unfilled_shift_ids.len();
        let assignments_by_worker = schedule.workload().into_iter().collect();

        let coverage_rate = if total_shifts == 0 {
            1.0
        } else {
            filled_shifts as f64 / total_shifts as f64
        };

        Self {
            total_shifts,
            filled_shifts,
            unfilled_shift_ids,
            assignments_by_worker,
            coverage_rate,
        }
    }

    /// Number of open shifts.
    pub fn unfilled_count(&self) -> usize {
        self.unfilled_shift_ids.len()
    }

    /// Whether every shift has a worker.
    pub fn is_complete(&self) -> bool {
        self.unfilled_shift_ids.is_empty()
    }

    /// Whether coverage reaches `min_coverage` (0.0..1.0).
    pub fn meets_coverage(&self, min_coverage: f64) -> bool {
        self.coverage_rate >= min_coverage
    }

    /// "N of M shifts filled".
    pub fn describe(&self) -> String {
        format!("{} of {} shifts filled", self.filled_shifts, self.total_shifts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::weekly(&["Morning", "Evening"]);
        s.shift_mut("Monday-Morning").unwrap().add_worker("1");
        s.shift_mut("Monday-Evening").unwrap().add_worker("2");
        s.shift_mut("Tuesday-Morning").unwrap().add_worker("1");
        s.shift_mut("Tuesday-Morning").unwrap().add_worker("2");
        s
    }

    #[test]
    fn test_summary_counts() {
        let summary = FillSummary::calculate(&sample_schedule());
        assert_eq!(summary.total_shifts, 14);
        assert_eq!(summary.filled_shifts, 3);
        assert_eq!(summary.unfilled_count(), 11);
        assert_eq!(summary.unfilled_shift_ids[0], "Tuesday-Evening");
        assert_eq!(summary.assignments_by_worker["1"], 2);
        assert_eq!(summary.assignments_by_worker["2"], 2);
        assert!((summary.coverage_rate - 3.0 / 14.0).abs() < 1e-10);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_describe() {
        let summary = FillSummary::calculate(&sample_schedule());
        assert_eq!(summary.describe(), "3 of 14 shifts filled");
    }

    #[test]
    fn test_empty_grid() {
        let summary = FillSummary::calculate(&Schedule::new());
        assert_eq!(summary.total_shifts, 0);
        assert!(summary.is_complete());
        assert!(summary.meets_coverage(1.0));
    }

    #[test]
    fn test_coverage_threshold() {
        let summary = FillSummary::calculate(&sample_schedule());
        assert!(summary.meets_coverage(0.2));
        assert!(!summary.meets_coverage(0.5));
    }
}
