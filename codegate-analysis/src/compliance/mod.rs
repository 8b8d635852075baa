//! Compliance verifier — AST-structural convention checks.
//!
//! Rules are pure functions of a parsed unit (or raw text for non-source
//! formats), registered in packs: a baseline pack that always runs plus
//! optional packs selected by the `standards` option.

pub mod baseline;
pub mod nestjs;
pub mod prisma;
pub mod registry;

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use codegate_core::{
    CodeIssue, ComplianceOptions, FileType, IssueCategory, SeverityLevel, ValidationResult,
};
use serde_json::Value;

use crate::parsers::{ParsedUnit, SourceProject};
use crate::security::file_access_error;

/// Context handed to each rule. `unit` is present for source file types.
pub struct RuleContext<'a> {
    pub code: &'a str,
    pub file_type: FileType,
    pub path: &'a str,
    pub unit: Option<&'a ParsedUnit>,
}

/// One structural rule. Implementations must be side-effect-free functions
/// of the context.
pub trait ComplianceRule: Send + Sync {
    /// Stable rule id.
    fn id(&self) -> &'static str;
    /// File types this rule applies to.
    fn applies_to(&self) -> &'static [FileType];
    fn check(&self, ctx: &RuleContext<'_>) -> Vec<CodeIssue>;
}

/// Stateless AST-structural rule engine.
pub struct ComplianceVerifier {
    rules: Vec<Box<dyn ComplianceRule>>,
    options: ComplianceOptions,
    project: Arc<SourceProject>,
}

impl ComplianceVerifier {
    pub fn new(options: ComplianceOptions) -> Self {
        Self::with_project(options, Arc::new(SourceProject::new()))
    }

    /// Share a source project with other validators (one critical section
    /// per add/analyze/remove cycle is handled by the project itself).
    pub fn with_project(options: ComplianceOptions, project: Arc<SourceProject>) -> Self {
        Self {
            rules: registry::rules_for(&options),
            options,
            project,
        }
    }

    /// Check in-memory source text.
    pub fn check(
        &self,
        code: &str,
        file_type: FileType,
        file_path: Option<&str>,
    ) -> ValidationResult {
        let resolved = if file_type == FileType::Unknown {
            detect_file_type(code)
        } else {
            file_type
        };

        let result = match resolved {
            FileType::Ts | FileType::Js => self.check_source(code, resolved, file_path),
            FileType::Prisma => {
                let ctx = RuleContext {
                    code,
                    file_type: resolved,
                    path: file_path.unwrap_or(""),
                    unit: None,
                };
                let issues = self.run_rules(&ctx);
                ValidationResult::from_issues(issues, resolved, file_path.map(str::to_string))
            }
            FileType::Json => {
                let issues = check_json(code);
                ValidationResult::from_issues(issues, resolved, file_path.map(str::to_string))
            }
            FileType::Yaml => {
                let issues = check_yaml(code);
                ValidationResult::from_issues(issues, resolved, file_path.map(str::to_string))
            }
            // No applicable rules: "not checked" is distinct from "nothing wrong".
            FileType::Wasm | FileType::Graphql | FileType::Unknown => {
                ValidationResult::from_issues(Vec::new(), resolved, file_path.map(str::to_string))
                    .with_metadata(
                        "note",
                        format!("No compliance rules apply to file type '{resolved}'; content was not checked"),
                    )
            }
        };

        let mut result = result
            .with_metadata("checked_at", Utc::now().to_rfc3339())
            .with_metadata(
                "standards",
                Value::Array(
                    self.options
                        .standards
                        .iter()
                        .map(|s| Value::String(format!("{s:?}").to_lowercase()))
                        .collect(),
                ),
            );
        if let Some(arch) = &self.options.architecture {
            result = result.with_metadata("architecture", arch.clone());
        }
        result
    }

    /// Check a file on disk. I/O failure becomes a synthetic issue.
    pub fn check_path(&self, path: &Path) -> ValidationResult {
        match std::fs::read_to_string(path) {
            Ok(content) => self.check(&content, FileType::from_path(path), path.to_str()),
            Err(e) => file_access_error(path, &e),
        }
    }

    fn check_source(
        &self,
        code: &str,
        file_type: FileType,
        file_path: Option<&str>,
    ) -> ValidationResult {
        let issues = self
            .project
            .with_unit(code, file_type, file_path, |unit| match unit {
                Some(unit) => {
                    let ctx = RuleContext {
                        code,
                        file_type,
                        path: &unit.path,
                        unit: Some(unit),
                    };
                    self.run_rules(&ctx)
                }
                None => vec![CodeIssue::new(
                    SeverityLevel::Error,
                    IssueCategory::Compliance,
                    "parse-failure",
                    "Source could not be parsed; structural rules were not evaluated",
                )],
            });
        ValidationResult::from_issues(issues, file_type, file_path.map(str::to_string))
    }

    fn run_rules(&self, ctx: &RuleContext<'_>) -> Vec<CodeIssue> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            if !rule.applies_to().contains(&ctx.file_type) {
                continue;
            }
            issues.extend(rule.check(ctx));
        }
        tracing::debug!(
            issues = issues.len(),
            file_type = %ctx.file_type,
            "compliance check complete"
        );
        issues
    }
}

fn check_json(code: &str) -> Vec<CodeIssue> {
    match serde_json::from_str::<Value>(code) {
        Ok(_) => Vec::new(),
        Err(e) => vec![CodeIssue::new(
            SeverityLevel::Error,
            IssueCategory::Compliance,
            "json-syntax-validation",
            format!("Invalid JSON: {e}"),
        )
        .at(e.line() as u32, e.column() as u32)],
    }
}

fn check_yaml(code: &str) -> Vec<CodeIssue> {
    match serde_yaml::from_str::<serde_yaml::Value>(code) {
        Ok(_) => Vec::new(),
        Err(e) => {
            let mut issue = CodeIssue::new(
                SeverityLevel::Error,
                IssueCategory::Compliance,
                "yaml-syntax-validation",
                format!("Invalid YAML: {e}"),
            );
            if let Some(loc) = e.location() {
                issue = issue.at(loc.line() as u32, loc.column() as u32);
            }
            vec![issue]
        }
    }
}

/// Infer a file type from content shape when the caller supplies none.
pub fn detect_file_type(content: &str) -> FileType {
    if content.contains("@Controller") || content.contains("@Injectable") || content.contains("@Module")
    {
        return FileType::Ts;
    }
    if content.contains("datasource db {") && content.contains("model ") {
        return FileType::Prisma;
    }
    let trimmed = content.trim();
    if trimmed.starts_with('{')
        && trimmed.ends_with('}')
        && serde_json::from_str::<Value>(trimmed).is_ok()
    {
        return FileType::Json;
    }
    if content.contains("import ") || content.contains("export ") || content.contains("interface ")
    {
        return FileType::Ts;
    }
    if content.contains("function ") || content.contains("const ") || content.contains("require(")
    {
        return FileType::Js;
    }
    FileType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_nest_source_from_decorators() {
        assert_eq!(
            detect_file_type("@Injectable()\nexport class A {}"),
            FileType::Ts
        );
    }

    #[test]
    fn detects_prisma_from_blocks() {
        assert_eq!(
            detect_file_type("datasource db {\n}\nmodel User {\n}"),
            FileType::Prisma
        );
    }

    #[test]
    fn detects_json_objects() {
        assert_eq!(detect_file_type(r#"{ "a": 1 }"#), FileType::Json);
    }

    #[test]
    fn detects_plain_javascript() {
        assert_eq!(detect_file_type("function f() { return 1; }"), FileType::Js);
    }

    #[test]
    fn unresolved_content_is_unknown() {
        assert_eq!(detect_file_type("plain text"), FileType::Unknown);
    }
}
