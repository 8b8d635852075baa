//! Security scanner options.

use serde::{Deserialize, Serialize};

use crate::severity::SeverityLevel;

/// Enable/disable filtering by rule id.
///
/// `disable_rules` is a hard veto; when `enabled_rules` is non-empty, only
/// those ids run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleFilter {
    pub enabled_rules: Vec<String>,
    pub disable_rules: Vec<String>,
}

impl RuleFilter {
    /// Whether a rule id survives both the allowlist and the denylist.
    pub fn allows(&self, rule_id: &str) -> bool {
        if self.disable_rules.iter().any(|r| r == rule_id) {
            return false;
        }
        if !self.enabled_rules.is_empty() && !self.enabled_rules.iter().any(|r| r == rule_id) {
            return false;
        }
        true
    }
}

/// A caller-supplied pattern rule. The pattern is a regex source string,
/// compiled (case-insensitive, multi-line) at scanner construction; a
/// malformed pattern is a configuration error, not a skipped rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRule {
    pub pattern: String,
    pub severity: SeverityLevel,
    pub message: String,
}

/// Configuration for the security scanner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SecurityScanOptions {
    /// Minimum severity to report. Default: `Warning`.
    pub min_severity: Option<SeverityLevel>,
    pub rules: RuleFilter,
    pub custom_rules: Vec<CustomRule>,
}

impl SecurityScanOptions {
    /// Returns the effective severity floor, defaulting to `Warning`.
    pub fn effective_min_severity(&self) -> SeverityLevel {
        self.min_severity.unwrap_or(SeverityLevel::Warning)
    }
}
