//! codegate-analysis: the validation engine for machine-generated code.
//!
//! Three cooperating validators and their orchestrator:
//! - Security: pattern-based scanning of raw source text
//! - Compliance: AST-structural convention checks, rule packs by standard
//! - Semantic: AST-diagnostic checks (diagnostics, schema rigor, DTO
//!   contracts, unused imports, error-handling discipline)
//! - Validator: the orchestrating gate composing all three, with a fast
//!   short-circuit path, a detailed-evaluation path, and report rendering
//!
//! Parsing sits behind a small capability layer so rule logic never touches
//! grammar selection.

pub mod compliance;
pub mod parsers;
pub mod security;
pub mod semantic;
pub mod validator;

// Re-exports for convenience
pub use compliance::ComplianceVerifier;
pub use parsers::{Diagnostic, DiagnosticSeverity, ParsedUnit, SourceProject};
pub use security::SecurityScanner;
pub use semantic::SemanticValidator;
pub use validator::{
    signing::{ResultSigner, SignatureReceipt, SigningOutcome},
    DetailedValidation, SafeMigrationValidator, ValidationReport,
};
