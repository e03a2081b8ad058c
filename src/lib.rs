//! Weekly shift rostering for a dairy farm.
//!
//! Assigns workers to a 7-day grid of time slots under eligibility rules
//! (skills, one shift per day, weekly caps, days off, consecutive days)
//! and preference weights, then lets a supervisor adjust the result by
//! hand.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Worker`, `Shift`, `Schedule`, `SkillCatalog`,
//!   `ValidationRule`, `Weekday`
//! - **`validation`**: Structural input checks (duplicate ids, missing cells)
//! - **`eligibility`**: Rule trait, built-in rules and the evaluator
//! - **`scoring`**: Preference score of a worker for a shift
//! - **`scheduler`**: Greedy generator, fill summary and rule audit
//! - **`edit`**: Manual assign, clear and move on a schedule
//! - **`roster`**: Live schedule plus pending suggestion workflow
//! - **`config`**: Weights and rule toggles, JSON round-trip
//!
//! # Example
//!
//! ```
//! use farm_roster::models::{Weekday, Worker};
//! use farm_roster::Roster;
//!
//! let workers = vec![
//!     Worker::new("1").with_skills(["Milking", "Feeding"]).with_day_off(Weekday::Sunday),
//!     Worker::new("2").with_skills(["Cleaning", "Maintenance"]),
//! ];
//! let mut roster = Roster::farm_default(workers).unwrap();
//!
//! let summary = roster.generate().unwrap();
//! assert!(summary.filled_shifts > 0);
//! assert_eq!(roster.live().filled_count(), 0);
//!
//! roster.apply_suggestion().unwrap();
//! assert!(roster.audit().is_empty());
//! ```

pub mod config;
pub mod edit;
pub mod eligibility;
pub mod error;
pub mod models;
pub mod roster;
pub mod scheduler;
pub mod scoring;
pub mod validation;

pub use config::{ConfigUpdate, SchedulerConfig};
pub use edit::MoveKind;
pub use error::SchedulerError;
pub use roster::Roster;
pub use scheduler::{audit, FillSummary, ScheduleGenerator};
pub use scoring::score;
pub use validation::{ValidationError, ValidationErrorKind};
