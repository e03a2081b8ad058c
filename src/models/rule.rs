//! Labor-policy rules.
//!
//! A [`ValidationRule`] is a named, independently toggleable constraint.
//! Five rule names are understood by the eligibility evaluator; any other
//! name is carried as data and constrains nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A toggleable scheduling rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Unique rule key (e.g. "skillMatch").
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Whether the rule is currently enforced.
    pub enabled: bool,
}

/// The built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Worker must share a skill with the slot requirements.
    SkillMatch,
    /// At most one shift per worker per day.
    NoConsecutiveShifts,
    /// Respect each worker's weekly cap.
    MaxShiftsPerWeek,
    /// Never place a worker on a preferred day off.
    RespectDaysOff,
    /// At most six consecutive working days.
    MaxConsecutiveDays,
}

impl RuleKind {
    /// Built-in rules in evaluation order.
    pub const ALL: [RuleKind; 5] = [
        RuleKind::SkillMatch,
        RuleKind::NoConsecutiveShifts,
        RuleKind::MaxShiftsPerWeek,
        RuleKind::RespectDaysOff,
        RuleKind::MaxConsecutiveDays,
    ];

    /// Rule key as stored in configuration.
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::SkillMatch => "skillMatch",
            RuleKind::NoConsecutiveShifts => "noConsecutiveShifts",
            RuleKind::MaxShiftsPerWeek => "maxShiftsPerWeek",
            RuleKind::RespectDaysOff => "respectDaysOff",
            RuleKind::MaxConsecutiveDays => "maxConsecutiveDays",
        }
    }

    /// Default description.
    pub fn description(self) -> &'static str {
        match self {
            RuleKind::SkillMatch => "Employees should have the skills required for the shift",
            RuleKind::NoConsecutiveShifts => "No employee should work consecutive shifts in a day",
            RuleKind::MaxShiftsPerWeek => {
                "Respect maximum shifts per week based on employment type"
            }
            RuleKind::RespectDaysOff => "Respect employee preferred days off when possible",
            RuleKind::MaxConsecutiveDays => "No employee should work more than 6 consecutive days",
        }
    }

    /// Looks up a built-in rule by key.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ValidationRule {
    /// Creates an enabled rule.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            enabled: true,
        }
    }

    /// Creates an enabled built-in rule with its default description.
    pub fn builtin(kind: RuleKind) -> Self {
        Self::new(kind.name(), kind.description())
    }

    /// Sets the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The built-in rule this entry names, if any.
    pub fn kind(&self) -> Option<RuleKind> {
        RuleKind::from_name(&self.name)
    }
}

/// The standard rule set, every rule enabled.
///
/// Listed in the order the settings screen shows them.
pub fn default_rules() -> Vec<ValidationRule> {
    [
        RuleKind::NoConsecutiveShifts,
        RuleKind::MaxShiftsPerWeek,
        RuleKind::SkillMatch,
        RuleKind::RespectDaysOff,
        RuleKind::MaxConsecutiveDays,
    ]
    .into_iter()
    .map(ValidationRule::builtin)
    .collect()
}
