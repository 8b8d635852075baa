//! Integration tests for the compliance verifier.

use codegate_analysis::ComplianceVerifier;
use codegate_core::{ComplianceOptions, FileType, SeverityLevel, Standard};

fn baseline_verifier() -> ComplianceVerifier {
    ComplianceVerifier::new(ComplianceOptions::default())
}

fn nest_verifier() -> ComplianceVerifier {
    ComplianceVerifier::new(ComplianceOptions {
        standards: vec![Standard::NestJs],
        ..Default::default()
    })
}

fn prisma_verifier() -> ComplianceVerifier {
    ComplianceVerifier::new(ComplianceOptions {
        standards: vec![Standard::Prisma],
        ..Default::default()
    })
}

#[test]
fn empty_block_is_a_warning_not_a_failure() {
    let verifier = baseline_verifier();
    let result = verifier.check("function f(): void {}", FileType::Ts, Some("f.ts"));
    assert!(result.success);
    assert_eq!(result.count_at(SeverityLevel::Warning), 1);
    assert_eq!(result.issues[0].rule, "no-empty-blocks");
}

#[test]
fn empty_method_in_a_concrete_class_is_one_warning() {
    let verifier = baseline_verifier();
    let result = verifier.check(
        "export class Thing { doWork() {} }",
        FileType::Ts,
        Some("thing.ts"),
    );
    assert!(result.success);
    let empty_blocks: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.rule == "no-empty-blocks")
        .collect();
    assert_eq!(empty_blocks.len(), 1);
    assert_eq!(empty_blocks[0].severity, SeverityLevel::Warning);
}

#[test]
fn abstract_method_bodies_are_not_empty_blocks() {
    let verifier = baseline_verifier();
    let code = "abstract class Handler {\n  protected before(): void {}\n  abstract run(): void;\n}";
    let result = verifier.check(code, FileType::Ts, Some("handler.ts"));
    assert!(result
        .issues
        .iter()
        .all(|i| i.rule != "no-empty-blocks"));
}

#[test]
fn missing_return_type_is_informational_and_typescript_only() {
    let verifier = baseline_verifier();
    let code = "function add(a, b) { return a + b; }";

    let ts = verifier.check(code, FileType::Ts, Some("add.ts"));
    assert!(ts.issues.iter().any(|i| i.rule == "explicit-return-types"));
    assert!(ts.success);

    let js = verifier.check(code, FileType::Js, Some("add.js"));
    assert!(js.issues.iter().all(|i| i.rule != "explicit-return-types"));
}

#[test]
fn nest_service_without_injectable_fails() {
    let verifier = nest_verifier();
    let code = "export class UserService {\n  find(): string {\n    return 'u';\n  }\n}";
    let result = verifier.check(code, FileType::Ts, Some("src/user.service.ts"));
    assert!(!result.success);
    assert!(result
        .issues
        .iter()
        .any(|i| i.rule == "nestjs-injectable-decorator"));
}

#[test]
fn decorated_nest_service_passes() {
    let verifier = nest_verifier();
    let code = "@Injectable()\nexport class UserService {\n  find(): string {\n    return 'u';\n  }\n}";
    let result = verifier.check(code, FileType::Ts, Some("src/user.service.ts"));
    assert!(result.success);
}

#[test]
fn nest_rules_stay_out_without_the_standard() {
    let verifier = baseline_verifier();
    let code = "export class UserService {\n  find(): string {\n    return 'u';\n  }\n}";
    let result = verifier.check(code, FileType::Ts, Some("src/user.service.ts"));
    assert!(result.success);
}

#[test]
fn module_decorator_requires_a_configuration_object() {
    let verifier = nest_verifier();
    let code = "@Module()\nexport class AppModule {}";
    let result = verifier.check(code, FileType::Ts, Some("src/app.module.ts"));
    assert!(!result.success);
    assert!(result
        .issues
        .iter()
        .any(|i| i.rule == "nestjs-module-structure" && i.message.contains("configuration")));
}

#[test]
fn prisma_schema_missing_generator_and_datasource_is_two_errors() {
    let verifier = prisma_verifier();
    let schema = "model User {\n  id Int @id\n}\n";
    let result = verifier.check(schema, FileType::Prisma, Some("schema.prisma"));
    assert!(!result.success);
    assert_eq!(result.count_at(SeverityLevel::Error), 2);
}

#[test]
fn complete_prisma_schema_passes() {
    let verifier = prisma_verifier();
    let schema = "\
generator client {
  provider = \"prisma-client-js\"
}

datasource db {
  provider = \"postgresql\"
  url      = env(\"DATABASE_URL\")
}

model User {
  id    Int    @id
  email String @unique
}
";
    let result = verifier.check(schema, FileType::Prisma, Some("schema.prisma"));
    assert!(result.success, "issues: {:?}", result.issues);
    assert!(result.issues.is_empty());
}

#[test]
fn invalid_json_is_a_syntax_error() {
    let verifier = baseline_verifier();
    let result = verifier.check("{ \"a\": 1, }", FileType::Json, Some("config.json"));
    assert!(!result.success);
    assert_eq!(result.issues[0].rule, "json-syntax-validation");
}

#[test]
fn valid_json_passes() {
    let verifier = baseline_verifier();
    let result = verifier.check("{ \"a\": 1 }", FileType::Json, Some("config.json"));
    assert!(result.success);
}

#[test]
fn invalid_yaml_is_a_syntax_error() {
    let verifier = baseline_verifier();
    let result = verifier.check("key: [unclosed", FileType::Yaml, Some("config.yaml"));
    assert!(!result.success);
    assert_eq!(result.issues[0].rule, "yaml-syntax-validation");
}

#[test]
fn unknown_content_is_not_checked_and_says_so() {
    let verifier = baseline_verifier();
    let result = verifier.check("just some prose", FileType::Unknown, None);
    assert!(result.success);
    assert!(result.issues.is_empty());
    assert!(result.metadata.contains_key("note"));
}

#[test]
fn content_shape_detection_kicks_in_for_unknown_type() {
    let verifier = nest_verifier();
    // No file type given, but the decorator gives it away as TS source.
    let code = "@Injectable()\nexport class A {}";
    let result = verifier.check(code, FileType::Unknown, None);
    assert_eq!(result.file_type, FileType::Ts);
}

#[test]
fn check_path_reads_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let verifier = baseline_verifier();
    let result = verifier.check_path(&path);
    assert!(!result.success);
    assert_eq!(result.issues[0].rule, "json-syntax-validation");
}

#[test]
fn metadata_records_standards_and_timestamp() {
    let verifier = nest_verifier();
    let result = verifier.check("export const x = 1;", FileType::Ts, None);
    assert!(result.metadata.contains_key("checked_at"));
    let standards = result.metadata.get("standards").unwrap();
    assert_eq!(standards.as_array().unwrap().len(), 1);
}
