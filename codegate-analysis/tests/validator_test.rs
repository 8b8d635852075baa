//! Integration tests for the orchestrating gate.

use codegate_analysis::validator::content_hash;
use codegate_analysis::SafeMigrationValidator;
use codegate_core::{FileType, SeverityLevel, ValidatorOptions};
use proptest::prelude::*;

const CLEAN_CODE: &str =
    "export function add(a: number, b: number): number {\n  return a + b;\n}";

#[test]
fn clean_code_passes_the_gate() {
    let validator = SafeMigrationValidator::with_defaults();
    assert!(validator.validate(CLEAN_CODE, FileType::Ts, None));
}

#[test]
fn eval_fails_the_gate() {
    let validator = SafeMigrationValidator::with_defaults();
    assert!(!validator.validate("eval(userInput);", FileType::Ts, None));
}

#[test]
fn detailed_validation_runs_every_stage_even_after_a_failure() {
    let validator = SafeMigrationValidator::with_defaults();
    // Fails security (eval) and also carries a semantic-stage info issue
    // (unguarded await); both must show up.
    let code = "async function run(input: string): Promise<void> {\n  eval(input);\n  await dangerous(input);\n}";
    let detailed = validator.detailed_validation(code, FileType::Ts, None);

    assert!(!detailed.success);
    assert!(!detailed.security.success);
    assert!(detailed
        .security
        .issues
        .iter()
        .any(|i| i.rule == "no-eval"));
    assert!(detailed
        .semantic
        .issues
        .iter()
        .any(|i| i.rule == "unhandled-promise"));
}

#[test]
fn report_orders_issues_strongest_first() {
    let validator = SafeMigrationValidator::with_defaults();
    // critical (eval), error (document.write), warning (process.env),
    // info (unguarded await) in reverse source order.
    let code = "\
async function f(): Promise<void> {
  await thing.push(1);
  const k = process.env.KEY;
  document.write(k);
  eval(k);
}
";
    let report = validator.validation_report(code, FileType::Ts, None);
    assert!(!report.success);

    let pos = |needle: &str| report.report.find(needle).unwrap();
    assert!(pos("no-eval") < pos("no-document-write"));
    assert!(pos("no-document-write") < pos("no-process-env"));
    assert!(pos("no-process-env") < pos("unhandled-promise"));
}

#[test]
fn report_hash_is_computed_pass_or_fail() {
    let validator = SafeMigrationValidator::with_defaults();

    let passing = validator.validation_report(CLEAN_CODE, FileType::Ts, None);
    assert!(passing.success);
    assert_eq!(passing.code_hash, content_hash(CLEAN_CODE));

    let failing = validator.validation_report("eval(x);", FileType::Ts, None);
    assert!(!failing.success);
    assert_eq!(failing.code_hash, content_hash("eval(x);"));
    assert_eq!(failing.code_hash.len(), 64);
}

#[test]
fn report_timestamp_is_rfc3339() {
    let validator = SafeMigrationValidator::with_defaults();
    let report = validator.validation_report(CLEAN_CODE, FileType::Ts, None);
    assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
}

#[test]
fn warnings_alone_never_fail_the_gate() {
    let validator = SafeMigrationValidator::with_defaults();
    // process.env is a warning-severity rule.
    let code = "export const key: string = process.env.API_KEY ?? '';";
    let detailed = validator.detailed_validation(code, FileType::Ts, None);
    assert!(detailed.success);
    assert!(detailed
        .all_issues()
        .all(|i| i.severity < SeverityLevel::Error));
    assert!(detailed.all_issues().count() >= 1);
}

#[test]
fn gate_options_flow_through_to_stages() {
    let options = ValidatorOptions::from_toml_str(
        r#"
[security]
min_severity = "critical"

[security.rules]
disable_rules = ["no-eval"]
"#,
    )
    .unwrap();
    let validator = SafeMigrationValidator::new(options).unwrap();
    // no-eval disabled and everything below critical suppressed.
    assert!(validator.validate("eval(x);", FileType::Ts, None));
}

#[test]
fn one_shot_helper_uses_defaults() {
    assert!(SafeMigrationValidator::validate_code(CLEAN_CODE));
    assert!(!SafeMigrationValidator::validate_code("eval(x);"));
}

#[test]
fn unreadable_path_fails_the_gate() {
    let validator = SafeMigrationValidator::with_defaults();
    assert!(!validator.validate_path(std::path::Path::new("/nonexistent/change.ts")));
}

#[test]
fn validate_path_accepts_a_clean_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("change.ts");
    std::fs::write(&path, CLEAN_CODE).unwrap();

    let validator = SafeMigrationValidator::with_defaults();
    assert!(validator.validate_path(&path));
}

proptest! {
    /// The fast gate and the detailed evaluation agree on the verdict for
    /// any input; short-circuiting changes cost, never the answer.
    #[test]
    fn fast_gate_agrees_with_detailed_evaluation(code in "[ -~\\n]{0,160}") {
        let validator = SafeMigrationValidator::with_defaults();
        let fast = validator.validate(&code, FileType::Ts, None);
        let detailed = validator.detailed_validation(&code, FileType::Ts, None);
        prop_assert_eq!(fast, detailed.success);
    }

    /// The audit hash is a pure function of the input text.
    #[test]
    fn code_hash_is_deterministic(code in "[ -~\\n]{0,160}") {
        prop_assert_eq!(content_hash(&code), content_hash(&code));
    }
}
