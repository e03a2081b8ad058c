//! Roster domain models.
//!
//! Provides the data types the engine reads and mutates: workers, shifts,
//! the weekly schedule grid, the slot requirement catalog and the
//! labor-policy rules.
//!
//! # Domain Mappings
//!
//! | farm-roster | Farm | Generic scheduling |
//! |-------------|------|--------------------|
//! | Worker | Farmhand | Resource |
//! | Shift | Milking/feeding shift | Slot |
//! | Schedule | Weekly roster | Solution |
//! | SkillCatalog | Slot task list | Requirements |

mod catalog;
mod rule;
mod schedule;
mod shift;
mod weekday;
mod worker;

pub use catalog::{SkillCatalog, SlotRequirement};
pub use rule::{default_rules, RuleKind, ValidationRule};
pub use schedule::{Schedule, Violation, ViolationType};
pub use shift::Shift;
pub use weekday::{ParseWeekdayError, Weekday};
pub use worker::{EmploymentCategory, Preferences, Worker};
