//! Parser diagnostics translated into semantic issues.

use codegate_core::{CodeIssue, IssueCategory, SeverityLevel};

use crate::parsers::{DiagnosticSeverity, ParsedUnit};

pub fn check(unit: &ParsedUnit) -> Vec<CodeIssue> {
    unit.diagnostics()
        .into_iter()
        .map(|d| {
            let severity = match d.severity {
                DiagnosticSeverity::Error => SeverityLevel::Error,
                DiagnosticSeverity::Warning => SeverityLevel::Warning,
                DiagnosticSeverity::Info => SeverityLevel::Info,
            };
            CodeIssue::new(
                severity,
                IssueCategory::Semantic,
                "typescript-type-check",
                d.message,
            )
            .at(d.line, d.column)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse;
    use codegate_core::FileType;

    #[test]
    fn clean_source_produces_no_issues() {
        let unit = parse("const x: number = 1;", FileType::Ts, "ok.ts").unwrap();
        assert!(check(&unit).is_empty());
    }

    #[test]
    fn syntax_errors_become_blocking_issues() {
        let unit = parse("const = ;", FileType::Ts, "bad.ts").unwrap();
        let issues = check(&unit);
        assert!(!issues.is_empty());
        assert!(issues.iter().all(|i| i.rule == "typescript-type-check"));
        assert!(issues.iter().any(|i| i.severity == SeverityLevel::Error));
    }
}
