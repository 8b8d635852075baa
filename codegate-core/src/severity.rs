//! Issue severity — an explicit totally-ordered type, not a lookup table.

use serde::{Deserialize, Serialize};

/// Severity of a detected issue, ordered weakest to strongest.
///
/// The derived `Ord` drives both the `min_severity` floor (weaker issues
/// are suppressed) and report sorting (strongest first, stable on ties).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Info,
    #[default]
    Warning,
    Error,
    Critical,
}

impl SeverityLevel {
    /// A result fails only on `Error` or `Critical` issues.
    pub fn is_blocking(self) -> bool {
        matches!(self, SeverityLevel::Error | SeverityLevel::Critical)
    }

    /// Display name used in rendered reports.
    pub fn name(self) -> &'static str {
        match self {
            SeverityLevel::Info => "info",
            SeverityLevel::Warning => "warning",
            SeverityLevel::Error => "error",
            SeverityLevel::Critical => "critical",
        }
    }

    /// Glyph used by the report renderer.
    pub fn glyph(self) -> &'static str {
        match self {
            SeverityLevel::Info => "ℹ",
            SeverityLevel::Warning => "⚠",
            SeverityLevel::Error => "✗",
            SeverityLevel::Critical => "⛔",
        }
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_total_order() {
        assert!(SeverityLevel::Info < SeverityLevel::Warning);
        assert!(SeverityLevel::Warning < SeverityLevel::Error);
        assert!(SeverityLevel::Error < SeverityLevel::Critical);
    }

    #[test]
    fn only_error_and_critical_block() {
        assert!(!SeverityLevel::Info.is_blocking());
        assert!(!SeverityLevel::Warning.is_blocking());
        assert!(SeverityLevel::Error.is_blocking());
        assert!(SeverityLevel::Critical.is_blocking());
    }
}
