//! Security scanner — pattern rules over raw source text.
//!
//! Works whether or not the source parses: regex matching degrades
//! gracefully on any text, so this stage never fails on malformed input.

pub mod rules;

use std::path::Path;

use chrono::Utc;
use codegate_core::{
    CodeIssue, ConfigError, FileType, IssueCategory, SecurityScanOptions, SeverityLevel,
    ValidationResult,
};
use regex::RegexBuilder;
use serde_json::Value;
use smallvec::SmallVec;

use rules::{match_filter, suggestions_for, MatchFilter, BUILTIN_RULES};

/// One compiled pattern rule.
struct SecurityRule {
    id: String,
    regex: regex::Regex,
    severity: SeverityLevel,
    message: String,
    suggestions: SmallVec<[String; 4]>,
    filter: Option<MatchFilter>,
}

/// Stateless pattern rule engine over source text.
///
/// The rule list is immutable after construction: built-ins in registration
/// order, then caller-supplied custom rules. Malformed custom patterns fail
/// construction; they are never silently skipped.
pub struct SecurityScanner {
    rules: Vec<SecurityRule>,
    min_severity: SeverityLevel,
    filter: codegate_core::RuleFilter,
}

impl SecurityScanner {
    pub fn new(options: SecurityScanOptions) -> Result<Self, ConfigError> {
        let mut compiled = Vec::with_capacity(BUILTIN_RULES.len() + options.custom_rules.len());

        for rule in BUILTIN_RULES {
            // Built-in patterns are covered by a compile-all test; a pattern
            // the regex engine rejects outright is skipped rather than
            // poisoning construction.
            let Ok(regex) = RegexBuilder::new(rule.pattern)
                .case_insensitive(rule.case_insensitive)
                .build()
            else {
                tracing::warn!(rule = rule.id, "built-in pattern failed to compile");
                continue;
            };
            compiled.push(SecurityRule {
                id: rule.id.to_string(),
                regex,
                severity: rule.severity,
                message: rule.message.to_string(),
                suggestions: suggestions_for(rule.id)
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                filter: match_filter(rule.id),
            });
        }

        for (index, custom) in options.custom_rules.iter().enumerate() {
            let regex = RegexBuilder::new(&custom.pattern)
                .case_insensitive(true)
                .multi_line(true)
                .build()
                .map_err(|e| ConfigError::InvalidCustomRule {
                    pattern: custom.pattern.clone(),
                    reason: e.to_string(),
                })?;
            compiled.push(SecurityRule {
                id: format!("custom-rule-{index}"),
                regex,
                severity: custom.severity,
                message: custom.message.clone(),
                suggestions: SmallVec::new(),
                filter: None,
            });
        }

        Ok(Self {
            rules: compiled,
            min_severity: options.effective_min_severity(),
            filter: options.rules,
        })
    }

    /// Scanner with default configuration.
    pub fn with_defaults() -> Self {
        // Default options carry no custom rules, so construction can only
        // fail on a custom pattern; with none present this is infallible.
        match Self::new(SecurityScanOptions::default()) {
            Ok(scanner) => scanner,
            Err(_) => unreachable!("default options contain no custom rules"),
        }
    }

    /// Scan in-memory source text.
    pub fn scan(
        &self,
        code: &str,
        file_type: FileType,
        file_path: Option<&str>,
    ) -> ValidationResult {
        let mut issues = Vec::new();

        for rule in &self.rules {
            if !self.filter.allows(&rule.id) {
                continue;
            }
            if rule.severity < self.min_severity {
                continue;
            }
            for caps in rule.regex.captures_iter(code) {
                if let Some(filter) = rule.filter {
                    if !filter(&caps) {
                        continue;
                    }
                }
                let Some(m) = caps.get(0) else {
                    continue;
                };
                let (line, column) = position_from_offset(code, m.start());
                issues.push(
                    CodeIssue::new(rule.severity, IssueCategory::Security, &rule.id, &rule.message)
                        .at(line, column)
                        .with_snippet(m.as_str())
                        .with_suggestions(rule.suggestions.iter().cloned()),
                );
            }
        }

        tracing::debug!(
            issues = issues.len(),
            file_type = %file_type,
            "security scan complete"
        );

        ValidationResult::from_issues(issues, file_type, file_path.map(str::to_string))
            .with_metadata("scanned_at", Utc::now().to_rfc3339())
            .with_metadata(
                "rules_applied",
                Value::Array(
                    self.rules
                        .iter()
                        .map(|r| Value::String(r.id.clone()))
                        .collect(),
                ),
            )
    }

    /// Scan a file on disk. I/O failure becomes a synthetic issue; callers
    /// never see a raw error from this entry point.
    pub fn scan_path(&self, path: &Path) -> ValidationResult {
        match std::fs::read_to_string(path) {
            Ok(content) => self.scan(
                &content,
                FileType::from_path(path),
                path.to_str(),
            ),
            Err(e) => file_access_error(path, &e),
        }
    }
}

/// Synthetic result for an unreadable input file.
pub(crate) fn file_access_error(path: &Path, error: &std::io::Error) -> ValidationResult {
    let issue = CodeIssue::new(
        SeverityLevel::Error,
        IssueCategory::General,
        "file-access-error",
        format!("Failed to read file: {error}"),
    );
    ValidationResult::from_issues(
        vec![issue],
        FileType::Unknown,
        path.to_str().map(str::to_string),
    )
}

/// 1-based line/column for a byte offset.
pub(crate) fn position_from_offset(code: &str, offset: usize) -> (u32, u32) {
    let prefix = &code[..offset];
    let line = prefix.matches('\n').count() as u32 + 1;
    let line_start = prefix.rfind('\n').map(|p| p + 1).unwrap_or(0);
    let column = code[line_start..offset].chars().count() as u32 + 1;
    (line, column)
}
