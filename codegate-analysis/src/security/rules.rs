//! Built-in security rule table.
//!
//! Rule ids are stable across versions: downstream tooling allow/deny-lists
//! by id, so renaming one is a breaking change.

use codegate_core::SeverityLevel;
use regex::Captures;

/// One built-in pattern rule.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRule {
    pub id: &'static str,
    pub pattern: &'static str,
    pub case_insensitive: bool,
    pub severity: SeverityLevel,
    pub message: &'static str,
}

/// Per-match refinement a pattern alone cannot express, keyed by rule id.
/// Returns whether the match should be reported.
pub type MatchFilter = fn(&Captures<'_>) -> bool;

/// Conventional development ports exempt from the socket-binding rule.
const ALLOWED_PORTS: &[u32] = &[8080, 3000, 4000, 5000];

pub fn match_filter(rule_id: &str) -> Option<MatchFilter> {
    match rule_id {
        "no-socket-binding" => Some(|caps| {
            caps.get(1)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .map(|port| !ALLOWED_PORTS.contains(&port))
                .unwrap_or(true)
        }),
        _ => None,
    }
}

/// Built-in rules, in registration order. Matching is deterministic:
/// rules run in this order, matches in source-text order within a rule.
pub static BUILTIN_RULES: &[BuiltinRule] = &[
    // Arbitrary code execution
    BuiltinRule {
        id: "no-eval",
        pattern: r"eval\s*\(",
        case_insensitive: false,
        severity: SeverityLevel::Critical,
        message: "Use of eval() allows arbitrary code execution and is a severe security flaw",
    },
    BuiltinRule {
        id: "no-function-constructor",
        pattern: r"new\s+Function\s*\(",
        case_insensitive: false,
        severity: SeverityLevel::Critical,
        message: "The Function() constructor allows arbitrary code execution",
    },
    BuiltinRule {
        id: "no-setTimeout-string",
        pattern: r#"setTimeout\s*\(\s*['"`]"#,
        case_insensitive: false,
        severity: SeverityLevel::Error,
        message: "setTimeout() with a string argument allows arbitrary code execution",
    },
    // Unrestricted OS / filesystem / process access
    BuiltinRule {
        id: "no-fs-module",
        pattern: r#"require\s*\(\s*['"`]fs['"`]\s*\)"#,
        case_insensitive: false,
        severity: SeverityLevel::Error,
        message: "Importing the fs module directly grants filesystem access",
    },
    BuiltinRule {
        id: "no-child-process",
        pattern: r#"require\s*\(\s*['"`]child_process['"`]\s*\)"#,
        case_insensitive: false,
        severity: SeverityLevel::Critical,
        message: "child_process allows executing commands on the host system",
    },
    BuiltinRule {
        id: "no-process-env",
        pattern: r"process\.env",
        case_insensitive: false,
        severity: SeverityLevel::Warning,
        message: "Direct process.env access can expose sensitive environment variables",
    },
    // Injection surfaces
    BuiltinRule {
        id: "no-sql-injection",
        pattern: r"`.*\$\{.*\}.*(?:SELECT|INSERT|UPDATE|DELETE|DROP|ALTER)",
        case_insensitive: true,
        severity: SeverityLevel::Critical,
        message: "Possible SQL injection via template string concatenation",
    },
    BuiltinRule {
        id: "no-nosql-injection",
        pattern: r#"\$where\s*:\s*(?:['"`]function|\{)"#,
        case_insensitive: false,
        severity: SeverityLevel::Critical,
        message: "Possible NoSQL injection via a $where function",
    },
    // XSS vectors
    BuiltinRule {
        id: "no-dangerouslySetInnerHTML",
        pattern: r"dangerouslySetInnerHTML",
        case_insensitive: false,
        severity: SeverityLevel::Warning,
        message: "dangerouslySetInnerHTML can enable XSS when content is not sanitized",
    },
    BuiltinRule {
        id: "no-document-write",
        pattern: r"document\.write\s*\(",
        case_insensitive: false,
        severity: SeverityLevel::Error,
        message: "document.write() can enable XSS attacks",
    },
    // Unsafe auth
    BuiltinRule {
        id: "no-unsafe-jwt-verify",
        pattern: r"jwt\.verify.*\{algorithms:\s*\[.*none.*\]",
        case_insensitive: false,
        severity: SeverityLevel::Critical,
        message: "JWT verification accepting the 'none' algorithm bypasses signature checks",
    },
    // Exfiltration surfaces
    BuiltinRule {
        id: "no-socket-binding",
        pattern: r"\.listen\s*\(\s*(\d{1,5})\s*[,)]",
        case_insensitive: false,
        severity: SeverityLevel::Warning,
        message: "Socket bound to a non-standard port, check whether this is intentional",
    },
    BuiltinRule {
        id: "no-hidden-network-requests",
        pattern: r#"(?:fetch|axios|http\.request|https\.request)\s*\(\s*['"`]"#,
        case_insensitive: false,
        severity: SeverityLevel::Warning,
        message: "Network request that could send data to an external server",
    },
    // Framework-specific escapes
    BuiltinRule {
        id: "no-public-decorator-on-props",
        pattern: r"@Public\s*\(\s*\)",
        case_insensitive: false,
        severity: SeverityLevel::Warning,
        message: "The @Public() decorator bypasses the global authentication guard",
    },
    BuiltinRule {
        id: "no-disable-csrf",
        pattern: r"csrf\s*:\s*false",
        case_insensitive: false,
        severity: SeverityLevel::Error,
        message: "CSRF protection disabled, exposing the application to CSRF attacks",
    },
];

/// Canned remediation suggestions, keyed by rule id.
pub fn suggestions_for(rule_id: &str) -> &'static [&'static str] {
    match rule_id {
        "no-eval" => &[
            "Use JSON.parse() for JSON strings",
            "Use dedicated functions instead of evaluating dynamic code",
            "Look for safer alternatives such as Function.prototype.bind()",
        ],
        "no-function-constructor" => &[
            "Declare functions explicitly",
            "Use arrow functions or function expressions",
        ],
        "no-setTimeout-string" => {
            &["Pass a function instead of a string: setTimeout(() => { ... }, delay)"]
        }
        "no-fs-module" => &[
            "Use application-specific file access methods",
            "Use an abstraction service for file access",
        ],
        "no-child-process" => &[
            "Avoid executing system commands",
            "Use dedicated libraries for the intended operation",
        ],
        "no-sql-injection" => &[
            "Use parameterized queries",
            "Use an ORM such as Prisma or TypeORM",
            "Validate and escape user input",
        ],
        _ => &[],
    }
}
