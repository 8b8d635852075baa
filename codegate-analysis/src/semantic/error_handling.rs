//! Error-handling heuristics: try without catch, unguarded await.

use codegate_core::{CodeIssue, IssueCategory, SeverityLevel};
use regex::Regex;

use crate::parsers::{has_ancestor, walk, ParsedUnit};

pub fn check(unit: &ParsedUnit, safe_calls: &[Regex]) -> Vec<CodeIssue> {
    let mut issues = Vec::new();

    walk(unit.root(), &mut |node| match node.kind() {
        "try_statement" => {
            if node.child_by_field_name("handler").is_none() {
                let (line, column) = unit.position_of(node);
                issues.push(
                    CodeIssue::new(
                        SeverityLevel::Warning,
                        IssueCategory::Semantic,
                        "missing-error-handling",
                        "try block without a catch clause",
                    )
                    .at(line, column)
                    .with_snippet("try { ... } // no catch")
                    .with_suggestions([
                        "Add a catch clause, or remove the try if errors should propagate"
                            .to_string(),
                    ]),
                );
            }
        }
        "await_expression" => {
            if has_ancestor(node, "try_statement") {
                return;
            }
            let awaited = unit.text(node);
            if safe_calls.iter().any(|re| re.is_match(awaited)) {
                return;
            }
            let (line, column) = unit.position_of(node);
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Info,
                    IssueCategory::Semantic,
                    "unhandled-promise",
                    "await outside a try block may reject unhandled",
                )
                .at(line, column)
                .with_snippet(awaited)
                .with_suggestions([
                    "Wrap the await in try/catch".to_string(),
                    "Or chain a .catch() on the promise".to_string(),
                ]),
            );
        }
        _ => {}
    });

    issues
}
