//! Baseline pack — rules that run regardless of selected standards.

use codegate_core::{CodeIssue, FileType, IssueCategory, SeverityLevel};
use tree_sitter::Node;

use crate::parsers::{has_ancestor, walk};

use super::{ComplianceRule, RuleContext};

/// Flags `{}` blocks with no statements. Abstract method bodies are the
/// one sanctioned empty block, so methods inside an abstract class are
/// exempt.
pub struct NoEmptyBlocks;

impl ComplianceRule for NoEmptyBlocks {
    fn id(&self) -> &'static str {
        "no-empty-blocks"
    }

    fn applies_to(&self) -> &'static [FileType] {
        &[FileType::Ts, FileType::Js]
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<CodeIssue> {
        let Some(unit) = ctx.unit else {
            return Vec::new();
        };
        let mut issues = Vec::new();
        walk(unit.root(), &mut |node| {
            if node.kind() != "statement_block" || !is_empty_block(node) {
                return;
            }
            if is_abstract_method_body(node) {
                return;
            }
            let (line, column) = unit.position_of(node);
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Warning,
                    IssueCategory::Compliance,
                    self.id(),
                    "Empty block, potentially incomplete or useless code",
                )
                .at(line, column)
                .with_snippet(unit.text(node)),
            );
        });
        issues
    }
}

fn is_empty_block(node: Node<'_>) -> bool {
    for i in 0..node.named_child_count() {
        if let Some(child) = node.named_child(i) {
            if child.kind() != "comment" {
                return false;
            }
        }
    }
    true
}

fn is_abstract_method_body(block: Node<'_>) -> bool {
    let Some(parent) = block.parent() else {
        return false;
    };
    matches!(parent.kind(), "method_definition")
        && has_ancestor(parent, "abstract_class_declaration")
}

/// Suggests explicit return types on TypeScript functions and methods.
/// Async functions are exempt (the promise type is usually inferred).
pub struct ExplicitReturnTypes;

impl ComplianceRule for ExplicitReturnTypes {
    fn id(&self) -> &'static str {
        "explicit-return-types"
    }

    fn applies_to(&self) -> &'static [FileType] {
        &[FileType::Ts]
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<CodeIssue> {
        let Some(unit) = ctx.unit else {
            return Vec::new();
        };
        let mut issues = Vec::new();
        walk(unit.root(), &mut |node| {
            if !matches!(node.kind(), "function_declaration" | "method_definition") {
                return;
            }
            if node.child_by_field_name("return_type").is_some() || is_async(node) {
                return;
            }
            let name = node
                .child_by_field_name("name")
                .map(|n| unit.text(n))
                .unwrap_or("<anonymous>");
            let params = node
                .child_by_field_name("parameters")
                .map(|n| unit.text(n))
                .unwrap_or("()");
            let (line, column) = unit.position_of(node);
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Info,
                    IssueCategory::Compliance,
                    self.id(),
                    format!("Function '{name}' has no explicit return type"),
                )
                .at(line, column)
                .with_snippet(format!("{name}{params}"))
                .with_suggestions([format!("Add a return type: {name}{params}: <type>")]),
            );
        });
        issues
    }
}

fn is_async(node: Node<'_>) -> bool {
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if child.kind() == "async" {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse;

    fn ctx<'a>(unit: &'a crate::parsers::ParsedUnit) -> RuleContext<'a> {
        RuleContext {
            code: &unit.source,
            file_type: unit.file_type,
            path: &unit.path,
            unit: Some(unit),
        }
    }

    #[test]
    fn flags_empty_function_body() {
        let unit = parse("function f(): void {}", FileType::Ts, "a.ts").unwrap();
        let issues = NoEmptyBlocks.check(&ctx(&unit));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, SeverityLevel::Warning);
    }

    #[test]
    fn comment_only_block_still_counts_as_empty() {
        let unit = parse(
            "function f(): void { /* later */ }",
            FileType::Ts,
            "a.ts",
        )
        .unwrap();
        assert_eq!(NoEmptyBlocks.check(&ctx(&unit)).len(), 1);
    }

    #[test]
    fn abstract_class_methods_are_exempt() {
        let unit = parse(
            "abstract class Base { protected hook(): void {} }",
            FileType::Ts,
            "base.ts",
        )
        .unwrap();
        assert!(NoEmptyBlocks.check(&ctx(&unit)).is_empty());
    }

    #[test]
    fn concrete_class_methods_are_flagged() {
        let unit = parse(
            "class Impl { hook(): void {} }",
            FileType::Ts,
            "impl.ts",
        )
        .unwrap();
        assert_eq!(NoEmptyBlocks.check(&ctx(&unit)).len(), 1);
    }

    #[test]
    fn missing_return_type_is_informational() {
        let unit = parse("function add(a: number, b: number) { return a + b; }", FileType::Ts, "m.ts")
            .unwrap();
        let issues = ExplicitReturnTypes.check(&ctx(&unit));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, SeverityLevel::Info);
        assert!(issues[0].message.contains("add"));
    }

    #[test]
    fn async_and_typed_functions_pass() {
        let unit = parse(
            "async function load(id: string) { return id; }\nfunction typed(): number { return 1; }",
            FileType::Ts,
            "ok.ts",
        )
        .unwrap();
        assert!(ExplicitReturnTypes.check(&ctx(&unit)).is_empty());
    }
}
