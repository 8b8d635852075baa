//! NestJS pack — decorator conventions keyed by file role.
//!
//! The file's path names its role (`*.service.ts`, `*.controller.ts`,
//! `*.module.ts`); the rules verify the decorator the role demands.

use codegate_core::{CodeIssue, FileType, IssueCategory, SeverityLevel};
use tree_sitter::Node;

use crate::parsers::{walk, ParsedUnit};

use super::{ComplianceRule, RuleContext};

const SOURCE_TYPES: &[FileType] = &[FileType::Ts];

/// Decorator names attached to a class node, in source order.
///
/// A decorator written before `export` belongs to the surrounding
/// export_statement in the grammar, so that node is scanned too.
fn decorator_names(unit: &ParsedUnit, class_node: Node<'_>) -> Vec<String> {
    let mut names = Vec::new();
    collect_decorators(unit, class_node, &mut names);
    if let Some(parent) = class_node.parent() {
        if parent.kind() == "export_statement" {
            collect_decorators(unit, parent, &mut names);
        }
    }
    names
}

fn collect_decorators(unit: &ParsedUnit, node: Node<'_>, names: &mut Vec<String>) {
    for i in 0..node.child_count() {
        let Some(child) = node.child(i) else {
            continue;
        };
        if child.kind() != "decorator" {
            continue;
        }
        // `@Name(...)` wraps a call_expression; `@Name` a bare identifier.
        if let Some(inner) = child.named_child(0) {
            let name = match inner.kind() {
                "call_expression" => inner
                    .child_by_field_name("function")
                    .map(|f| unit.text(f))
                    .unwrap_or(""),
                _ => unit.text(inner),
            };
            names.push(name.to_string());
        }
    }
}

fn classes<'tree>(unit: &'tree ParsedUnit) -> Vec<Node<'tree>> {
    let mut found = Vec::new();
    walk(unit.root(), &mut |node| {
        if matches!(node.kind(), "class_declaration" | "abstract_class_declaration") {
            found.push(node);
        }
    });
    found
}

fn class_name(unit: &ParsedUnit, class_node: Node<'_>) -> String {
    class_node
        .child_by_field_name("name")
        .map(|n| unit.text(n).to_string())
        .unwrap_or_else(|| "<anonymous>".to_string())
}

/// Services must carry `@Injectable()`.
pub struct InjectableDecorator;

impl ComplianceRule for InjectableDecorator {
    fn id(&self) -> &'static str {
        "nestjs-injectable-decorator"
    }

    fn applies_to(&self) -> &'static [FileType] {
        SOURCE_TYPES
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<CodeIssue> {
        if !(ctx.path.contains(".service.") || ctx.path.contains("/services/")) {
            return Vec::new();
        }
        let Some(unit) = ctx.unit else {
            return Vec::new();
        };
        let mut issues = Vec::new();
        for class in classes(unit) {
            if decorator_names(unit, class).iter().any(|d| d == "Injectable") {
                continue;
            }
            let name = class_name(unit, class);
            let (line, column) = unit.position_of(class);
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Error,
                    IssueCategory::Compliance,
                    self.id(),
                    format!("Service class '{name}' is missing the @Injectable() decorator"),
                )
                .at(line, column)
                .with_snippet(format!("class {name} {{"))
                .with_suggestions([format!("Add @Injectable() above 'class {name}'")]),
            );
        }
        issues
    }
}

/// Controllers must carry `@Controller()`.
pub struct ControllerDecorator;

impl ComplianceRule for ControllerDecorator {
    fn id(&self) -> &'static str {
        "nestjs-controller-decorator"
    }

    fn applies_to(&self) -> &'static [FileType] {
        SOURCE_TYPES
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<CodeIssue> {
        if !(ctx.path.contains(".controller.") || ctx.path.contains("/controllers/")) {
            return Vec::new();
        }
        let Some(unit) = ctx.unit else {
            return Vec::new();
        };
        let mut issues = Vec::new();
        for class in classes(unit) {
            if decorator_names(unit, class).iter().any(|d| d == "Controller") {
                continue;
            }
            let name = class_name(unit, class);
            let (line, column) = unit.position_of(class);
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Error,
                    IssueCategory::Compliance,
                    self.id(),
                    format!("Controller class '{name}' is missing the @Controller() decorator"),
                )
                .at(line, column)
                .with_snippet(format!("class {name} {{"))
                .with_suggestions([format!("Add @Controller('route') above 'class {name}'")]),
            );
        }
        issues
    }
}

/// Module files must declare `@Module({...})` with a configuration object.
pub struct ModuleStructure;

impl ComplianceRule for ModuleStructure {
    fn id(&self) -> &'static str {
        "nestjs-module-structure"
    }

    fn applies_to(&self) -> &'static [FileType] {
        SOURCE_TYPES
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<CodeIssue> {
        if !ctx.path.contains(".module.") {
            return Vec::new();
        }
        let Some(unit) = ctx.unit else {
            return Vec::new();
        };
        let mut issues = Vec::new();
        for class in classes(unit) {
            let name = class_name(unit, class);
            let (line, column) = unit.position_of(class);
            let Some(module_call) = module_decorator_call(unit, class) else {
                issues.push(
                    CodeIssue::new(
                        SeverityLevel::Error,
                        IssueCategory::Compliance,
                        self.id(),
                        format!("Module class '{name}' is missing the @Module() decorator"),
                    )
                    .at(line, column)
                    .with_snippet(format!("class {name} {{")),
                );
                continue;
            };
            let has_config = module_call
                .and_then(|call| call.child_by_field_name("arguments"))
                .map(|args| args.named_child_count() > 0)
                .unwrap_or(false);
            if !has_config {
                issues.push(
                    CodeIssue::new(
                        SeverityLevel::Error,
                        IssueCategory::Compliance,
                        self.id(),
                        "The @Module() decorator must receive a configuration object",
                    )
                    .at(line, column)
                    .with_snippet(format!("@Module() class {name}"))
                    .with_suggestions([
                        "Pass a configuration object: @Module({ imports: [], providers: [] })"
                            .to_string(),
                    ]),
                );
            }
        }
        issues
    }
}

/// The `@Module` decorator's call node, if the class carries one.
/// Outer `Option`: no `@Module` decorator at all. Inner `Option`: the
/// decorator exists but is not a call (`@Module` without parentheses).
fn module_decorator_call<'tree>(
    unit: &'tree ParsedUnit,
    class_node: Node<'tree>,
) -> Option<Option<Node<'tree>>> {
    if let Some(found) = module_decorator_on(unit, class_node) {
        return Some(found);
    }
    let parent = class_node.parent()?;
    if parent.kind() == "export_statement" {
        module_decorator_on(unit, parent)
    } else {
        None
    }
}

fn module_decorator_on<'tree>(
    unit: &'tree ParsedUnit,
    node: Node<'tree>,
) -> Option<Option<Node<'tree>>> {
    for i in 0..node.child_count() {
        let Some(child) = node.child(i) else {
            continue;
        };
        if child.kind() != "decorator" {
            continue;
        }
        let Some(inner) = child.named_child(0) else {
            continue;
        };
        match inner.kind() {
            "call_expression" => {
                let callee = inner
                    .child_by_field_name("function")
                    .map(|f| unit.text(f))
                    .unwrap_or("");
                if callee == "Module" {
                    return Some(Some(inner));
                }
            }
            _ if unit.text(inner) == "Module" => return Some(None),
            _ => {}
        }
    }
    None
}
