//! Scheduler configuration.
//!
//! Process-scoped preference weights plus the rule set. Built once by the
//! caller and passed into the engine; changed only through [`SchedulerConfig::merge`]
//! and the rule toggles.

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::{default_rules, RuleKind, ValidationRule};

/// Preference weights and rules used by generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Reward workers whose skills match the slot.
    pub prioritize_skill_match: bool,
    /// Reward preferred slots and penalise preferred days off.
    pub respect_preferences: bool,
    /// All rules, enabled or not.
    #[serde(rename = "enabledRules", alias = "rules", default = "default_rules")]
    pub rules: Vec<ValidationRule>,
}

/// Partial configuration change; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    pub prioritize_skill_match: Option<bool>,
    pub respect_preferences: Option<bool>,
    #[serde(rename = "enabledRules", alias = "rules")]
    pub rules: Option<Vec<ValidationRule>>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            prioritize_skill_match: true,
            respect_preferences: true,
            rules: default_rules(),
        }
    }
}

impl SchedulerConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, SchedulerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialises the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String, SchedulerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Applies a partial update.
    pub fn merge(&mut self, update: ConfigUpdate) {
        let ConfigUpdate {
            prioritize_skill_match,
            respect_preferences,
            rules,
        } = update;
        self.prioritize_skill_match = prioritize_skill_match.unwrap_or(self.prioritize_skill_match);
        self.respect_preferences = respect_preferences.unwrap_or(self.respect_preferences);
        if let Some(rules) = rules {
            self.rules = rules;
        }
    }

    /// Looks up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&ValidationRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Rules currently enforced.
    pub fn enabled_rules(&self) -> impl Iterator<Item = &ValidationRule> {
        self.rules.iter().filter(|r| r.enabled)
    }

    /// Whether a built-in rule is present and enabled.
    pub fn is_enabled(&self, kind: RuleKind) -> bool {
        self.rule(kind.name()).is_some_and(|r| r.enabled)
    }

    /// Flips a rule's enabled flag. Returns `false` for unknown names.
    pub fn toggle_rule(&mut self, name: &str) -> bool {
        match self.rules.iter_mut().find(|r| r.name == name) {
            Some(rule) => {
                rule.enabled = !rule.enabled;
                true
            }
            None => false,
        }
    }

    /// Enables or disables a built-in rule, adding it if absent.
    pub fn set_rule_enabled(&mut self, kind: RuleKind, enabled: bool) {
        match self.rules.iter_mut().find(|r| r.name == kind.name()) {
            Some(rule) => rule.enabled = enabled,
            None => self
                .rules
                .push(ValidationRule::builtin(kind).with_enabled(enabled)),
        }
    }

    /// Builder form of [`Self::set_rule_enabled`].
    pub fn with_rule(mut self, kind: RuleKind, enabled: bool) -> Self {
        self.set_rule_enabled(kind, enabled);
        self
    }

    /// Configuration with both weights off and no rules enabled.
    pub fn permissive() -> Self {
        let mut config = Self {
            prioritize_skill_match: false,
            respect_preferences: false,
            rules: default_rules(),
        };
        config.rules.iter_mut().for_each(|r| r.enabled = false);
        config
    }
}
