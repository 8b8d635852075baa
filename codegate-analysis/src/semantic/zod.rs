//! Zod schema-rigor heuristic.
//!
//! Only runs when the unit imports 'zod'. Flags schema declarations that
//! never refine (bare `z.object({...})` accepts any shape of its keys) and
//! nullable fields without a default.

use std::sync::OnceLock;

use codegate_core::{CodeIssue, IssueCategory, SeverityLevel};
use regex::Regex;
use tree_sitter::Node;

use crate::parsers::{walk, ParsedUnit};

fn refinement_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        match Regex::new(r"\.(min|max|email|url|uuid|regex|refine|superRefine|transform|pipe)\(") {
            Ok(re) => re,
            Err(_) => unreachable!("static pattern is valid"),
        }
    })
}

pub fn check(unit: &ParsedUnit) -> Vec<CodeIssue> {
    if !imports_module(unit, "zod") {
        return Vec::new();
    }

    let mut issues = Vec::new();
    walk(unit.root(), &mut |node| {
        if node.kind() != "variable_declarator" {
            return;
        }
        let Some(value) = node.child_by_field_name("value") else {
            return;
        };
        let initializer = unit.text(value);
        if !initializer.contains("z.object(") && !initializer.contains("z.schema(") {
            return;
        }
        let name = node
            .child_by_field_name("name")
            .map(|n| unit.text(n))
            .unwrap_or("<anonymous>");
        let (line, column) = unit.position_of(node);

        if !refinement_regex().is_match(initializer) {
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Warning,
                    IssueCategory::Semantic,
                    "zod-schema-validation",
                    format!("Zod schema '{name}' has no refinement or constraint"),
                )
                .at(line, column)
                .with_snippet(name)
                .with_suggestions([
                    "Constrain fields: z.string().min(1), z.number().max(100)".to_string(),
                    "Add a .refine() or .superRefine() for cross-field rules".to_string(),
                ]),
            );
        }

        if initializer.contains(".nullable()") && !initializer.contains(".default(") {
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Info,
                    IssueCategory::Semantic,
                    "zod-nullable-default",
                    format!("Nullable field in schema '{name}' has no default value"),
                )
                .at(line, column)
                .with_snippet(name),
            );
        }
    });
    issues
}

/// Whether the unit has an `import ... from '<module>'` statement.
fn imports_module(unit: &ParsedUnit, module: &str) -> bool {
    let mut found = false;
    walk(unit.root(), &mut |node: Node<'_>| {
        if found || node.kind() != "import_statement" {
            return;
        }
        if let Some(source) = node.child_by_field_name("source") {
            let text = unit.text(source).trim_matches(|c| c == '\'' || c == '"');
            if text == module {
                found = true;
            }
        }
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse;
    use codegate_core::FileType;

    #[test]
    fn unrefined_schema_is_a_warning() {
        let code = "import { z } from 'zod';\nconst UserSchema = z.object({ name: z.string() });";
        let unit = parse(code, FileType::Ts, "user.ts").unwrap();
        let issues = check(&unit);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, "zod-schema-validation");
        assert_eq!(issues[0].severity, SeverityLevel::Warning);
    }

    #[test]
    fn refined_schema_passes() {
        let code =
            "import { z } from 'zod';\nconst UserSchema = z.object({ name: z.string().min(1) });";
        let unit = parse(code, FileType::Ts, "user.ts").unwrap();
        assert!(check(&unit).is_empty());
    }

    #[test]
    fn nullable_without_default_is_informational() {
        let code = "import { z } from 'zod';\nconst S = z.object({ age: z.number().max(9).nullable() });";
        let unit = parse(code, FileType::Ts, "s.ts").unwrap();
        let issues = check(&unit);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, "zod-nullable-default");
        assert_eq!(issues[0].severity, SeverityLevel::Info);
    }

    #[test]
    fn skipped_entirely_without_a_zod_import() {
        let code = "const fake = z.object({ name: z.string() });";
        let unit = parse(code, FileType::Ts, "fake.ts").unwrap();
        assert!(check(&unit).is_empty());
    }
}
