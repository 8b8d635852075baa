//! Unused named-import detection.
//!
//! Occurrence counting over identifier-like nodes: the specifier itself is
//! one occurrence, so a count of one means nothing else references it.

use codegate_core::{CodeIssue, IssueCategory, SeverityLevel};

use crate::parsers::{walk, ParsedUnit};

pub fn check(unit: &ParsedUnit) -> Vec<CodeIssue> {
    let mut specifiers = Vec::new();
    walk(unit.root(), &mut |node| {
        if node.kind() != "import_specifier" {
            return;
        }
        // With an alias only the local name is visible to the rest of the
        // file; without one the imported name is the local name.
        let local = node
            .child_by_field_name("alias")
            .or_else(|| node.child_by_field_name("name"));
        if let Some(local) = local {
            specifiers.push((unit.text(local).to_string(), node));
        }
    });

    if specifiers.is_empty() {
        return Vec::new();
    }

    let mut issues = Vec::new();
    for (name, specifier) in specifiers {
        let mut occurrences = 0usize;
        walk(unit.root(), &mut |node| {
            if node.kind().contains("identifier") && unit.text(node) == name {
                occurrences += 1;
            }
        });
        if occurrences <= 1 {
            let (line, column) = unit.position_of(specifier);
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Info,
                    IssueCategory::Semantic,
                    "unused-import",
                    format!("Imported name '{name}' is never used"),
                )
                .at(line, column)
                .with_snippet(unit.text(specifier)),
            );
        }
    }
    issues
}
