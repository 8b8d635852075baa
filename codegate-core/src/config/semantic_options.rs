//! Semantic validator options.

use serde::{Deserialize, Serialize};

/// DTO contract checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DtoOptions {
    /// Require at least one validation decorator per DTO class.
    pub require_validation: bool,
    /// Require explicit type annotations on DTO properties.
    pub require_types: bool,
}

impl Default for DtoOptions {
    fn default() -> Self {
        Self {
            require_validation: true,
            require_types: true,
        }
    }
}

/// Configuration for the semantic validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticOptions {
    /// Translate parser diagnostics into issues. Default: true.
    pub type_check: bool,
    /// Run the Zod schema-rigor heuristic. Default: true.
    pub validate_zod_schemas: bool,
    pub validate_dtos: DtoOptions,
    /// Call-name patterns treated as conventionally safe read-only
    /// operations by the unguarded-await heuristic. A heuristic, not a
    /// safety proof: accessors named outside these patterns are reported.
    pub safe_call_patterns: Vec<String>,
}

impl SemanticOptions {
    /// Default safe-call allowlist.
    pub fn default_safe_call_patterns() -> Vec<String> {
        vec![
            r"findOne(?:By)?".to_string(),
            r"findAll".to_string(),
            r"getOne".to_string(),
            r"getAll".to_string(),
            r"find(?:By)?Id".to_string(),
        ]
    }
}

impl Default for SemanticOptions {
    fn default() -> Self {
        Self {
            type_check: true,
            validate_zod_schemas: true,
            validate_dtos: DtoOptions::default(),
            safe_call_patterns: Self::default_safe_call_patterns(),
        }
    }
}
