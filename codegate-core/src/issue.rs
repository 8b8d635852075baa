//! Issue types — one detected problem with a stable rule id.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::severity::SeverityLevel;

/// Which validator produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Security,
    Compliance,
    Semantic,
    /// Synthetic issues (e.g. file access failures) that belong to no stage.
    General,
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            IssueCategory::Security => "security",
            IssueCategory::Compliance => "compliance",
            IssueCategory::Semantic => "semantic",
            IssueCategory::General => "general",
        })
    }
}

/// 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// One detected problem.
///
/// `rule` is unique per logical check and stable across versions so
/// downstream tooling can allow/deny-list by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeIssue {
    pub severity: SeverityLevel,
    pub message: String,
    pub category: IssueCategory,
    pub rule: String,
    /// Source position, when the check can attribute one.
    pub position: Option<Position>,
    /// Offending code snippet.
    pub snippet: Option<String>,
    /// Canned remediation suggestions.
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub suggestions: SmallVec<[String; 4]>,
}

impl CodeIssue {
    pub fn new(
        severity: SeverityLevel,
        category: IssueCategory,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            category,
            rule: rule.into(),
            position: None,
            snippet: None,
            suggestions: SmallVec::new(),
        }
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.position = Some(Position { line, column });
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }
}
