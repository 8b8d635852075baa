//! DTO contract checks for files whose path marks them as DTO modules.

use codegate_core::{CodeIssue, DtoOptions, IssueCategory, SeverityLevel};
use tree_sitter::Node;

use crate::parsers::{walk, ParsedUnit};

const VALIDATION_DECORATORS: &[&str] = &["ValidateNested", "Length", "Min", "Max", "IsOptional"];

fn is_dto_path(path: &str) -> bool {
    path.contains(".dto.")
        || path.ends_with("dto.ts")
        || path.contains("/dto/")
        || path.contains("/dtos/")
}

fn is_dto_class_name(name: &str) -> bool {
    name.contains("DTO") || name.contains("Dto")
}

pub fn check(unit: &ParsedUnit, options: &DtoOptions) -> Vec<CodeIssue> {
    if !is_dto_path(&unit.path) {
        return Vec::new();
    }

    let mut issues = Vec::new();
    walk(unit.root(), &mut |node| {
        if node.kind() != "class_declaration" {
            return;
        }
        let Some(name_node) = node.child_by_field_name("name") else {
            return;
        };
        let name = unit.text(name_node);
        if !is_dto_class_name(name) {
            return;
        }
        check_class(unit, node, name, options, &mut issues);
    });
    issues
}

fn check_class(
    unit: &ParsedUnit,
    class_node: Node<'_>,
    class_name: &str,
    options: &DtoOptions,
    issues: &mut Vec<CodeIssue>,
) {
    let Some(body) = class_node.child_by_field_name("body") else {
        return;
    };

    let mut properties = Vec::new();
    for i in 0..body.named_child_count() {
        if let Some(member) = body.named_child(i) {
            if member.kind() == "public_field_definition" {
                properties.push(member);
            }
        }
    }
    if properties.is_empty() {
        return;
    }

    if options.require_validation {
        let any_validated = properties
            .iter()
            .any(|p| field_decorators(unit, *p).iter().any(|d| is_validation_decorator(d)));
        if !any_validated {
            let (line, column) = unit.position_of(class_node);
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Warning,
                    IssueCategory::Semantic,
                    "dto-missing-validation",
                    format!("DTO class '{class_name}' has no validation decorator on any property"),
                )
                .at(line, column)
                .with_snippet(class_name)
                .with_suggestions([
                    "Decorate properties with class-validator: @IsString(), @IsNumber()".to_string(),
                    "Mark optional fields with @IsOptional()".to_string(),
                ]),
            );
        }
    }

    if options.require_types {
        for property in &properties {
            if property.child_by_field_name("type").is_some() {
                continue;
            }
            let property_name = property
                .child_by_field_name("name")
                .map(|n| unit.text(n))
                .unwrap_or("<unnamed>");
            let (line, column) = unit.position_of(*property);
            issues.push(
                CodeIssue::new(
                    SeverityLevel::Warning,
                    IssueCategory::Semantic,
                    "dto-missing-type",
                    format!("DTO property '{property_name}' has no type annotation"),
                )
                .at(line, column)
                .with_snippet(unit.text(*property))
                .with_suggestions([format!("Annotate the property: {property_name}: string;")]),
            );
        }
    }
}

fn field_decorators(unit: &ParsedUnit, field: Node<'_>) -> Vec<String> {
    let mut names = Vec::new();
    for i in 0..field.child_count() {
        let Some(child) = field.child(i) else {
            continue;
        };
        if child.kind() != "decorator" {
            continue;
        }
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
    names
}

fn is_validation_decorator(name: &str) -> bool {
    name.starts_with("Is") || VALIDATION_DECORATORS.contains(&name)
}
