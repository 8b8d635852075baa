//! Report renderer — human-readable output for the detailed evaluation.

use std::cmp::Reverse;

use codegate_core::{CodeIssue, ValidationResult};

use super::DetailedValidation;

/// Render a detailed evaluation into terminal-friendly text.
///
/// Issues are sorted strongest severity first; the sort is stable, so
/// within one severity the stage order (security, compliance, semantic)
/// and each stage's detection order are preserved.
pub fn render(detailed: &DetailedValidation, code_hash: &str, timestamp: &str) -> String {
    let mut output = String::new();

    output.push_str("╔══════════════════════════════════════════╗\n");
    output.push_str("║       Codegate Validation Report         ║\n");
    output.push_str("╚══════════════════════════════════════════╝\n\n");

    let verdict = if detailed.success { "PASSED" } else { "FAILED" };
    output.push_str(&format!("Timestamp: {timestamp}\n"));
    output.push_str(&format!("Code hash: {code_hash}\n"));
    output.push_str(&format!("Verdict:   {verdict}\n\n"));

    stage_line(&mut output, "security", &detailed.security);
    stage_line(&mut output, "compliance", &detailed.compliance);
    stage_line(&mut output, "semantic", &detailed.semantic);

    let mut issues: Vec<&CodeIssue> = detailed.all_issues().collect();
    if !issues.is_empty() {
        issues.sort_by_key(|i| Reverse(i.severity));
        output.push_str("\nIssues:\n");
        for issue in issues {
            output.push_str(&format!(
                "  {} {:<8} [{}/{}] {}",
                issue.severity.glyph(),
                issue.severity.name(),
                issue.category,
                issue.rule,
                issue.message,
            ));
            if let Some(position) = &issue.position {
                output.push_str(&format!(" (line {}, col {})", position.line, position.column));
            }
            output.push('\n');
            for suggestion in &issue.suggestions {
                output.push_str(&format!("      💡 {suggestion}\n"));
            }
        }
    }

    output.push_str(&format!(
        "\nResult: {}\n",
        if detailed.success {
            "PASSED ✓"
        } else {
            "FAILED ✗"
        }
    ));

    output
}

fn stage_line(output: &mut String, stage: &str, result: &ValidationResult) {
    let symbol = if result.success { "✓" } else { "✗" };
    output.push_str(&format!(
        "{} {:<10} — {} issue(s)\n",
        symbol,
        stage,
        result.issues.len()
    ));
}
