//! Prisma pack — text-shape checks over `schema.prisma` content.
//!
//! Prisma schemas have no grammar in the parser layer; the checks here run
//! on raw text, the same way the security patterns do.

use std::sync::OnceLock;

use codegate_core::{CodeIssue, FileType, IssueCategory, SeverityLevel};
use regex::{Regex, RegexBuilder};

use crate::security::position_from_offset;

use super::{ComplianceRule, RuleContext};

const VALID_FIELD_TYPES: &[&str] = &[
    "String",
    "Boolean",
    "Int",
    "BigInt",
    "Float",
    "Decimal",
    "DateTime",
    "Json",
    "Bytes",
    "Unsupported",
];

/// Matches `  name Type` field lines where the type is followed by an
/// attribute or the end of the line. Block headers (`model X {`) and
/// `key = value` assignments do not match.
fn field_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        match RegexBuilder::new(r"\s+\w+\s+(\w+)(?:\(.*\))?\s+(?:@|$)")
            .multi_line(true)
            .build()
        {
            Ok(re) => re,
            Err(_) => unreachable!("static pattern is valid"),
        }
    })
}

/// Structural requirements on a Prisma schema: a client generator, a
/// datasource, at least one model, and known scalar field types.
pub struct SchemaValidation;

impl ComplianceRule for SchemaValidation {
    fn id(&self) -> &'static str {
        "prisma-schema-validation"
    }

    fn applies_to(&self) -> &'static [FileType] {
        &[FileType::Prisma]
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<CodeIssue> {
        let mut issues = Vec::new();

        if !ctx.code.contains("generator client {") {
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Error,
                    IssueCategory::Compliance,
                    self.id(),
                    "Prisma schema must define a client generator",
                )
                .at(1, 1)
                .with_suggestions([
                    "Add: generator client { provider = \"prisma-client-js\" }".to_string(),
                ]),
            );
        }

        if !ctx.code.contains("datasource db {") {
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Error,
                    IssueCategory::Compliance,
                    self.id(),
                    "Prisma schema must define a datasource",
                )
                .at(1, 1)
                .with_suggestions([
                    "Add: datasource db { provider = \"postgresql\", url = env(\"DATABASE_URL\") }"
                        .to_string(),
                ]),
            );
        }

        if !ctx.code.contains("model ") {
            issues.push(CodeIssue::new(
                SeverityLevel::Warning,
                IssueCategory::Compliance,
                self.id(),
                "Prisma schema contains no model",
            ));
        }

        for captures in field_line_regex().captures_iter(ctx.code) {
            let Some(field_type) = captures.get(1) else {
                continue;
            };
            if VALID_FIELD_TYPES.contains(&field_type.as_str()) {
                continue;
            }
            let Some(whole) = captures.get(0) else {
                continue;
            };
            let (line, column) = position_from_offset(ctx.code, whole.start());
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Error,
                    IssueCategory::Compliance,
                    self.id(),
                    format!("Unknown Prisma field type '{}'", field_type.as_str()),
                )
                .at(line, column)
                .with_snippet(whole.as_str().trim()),
            );
        }

        issues
    }
}
