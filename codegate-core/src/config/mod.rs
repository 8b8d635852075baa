//! Configuration for the codegate validators.
//! TOML-based option structs, one per validator, all serde(default).

pub mod compliance_options;
pub mod security_options;
pub mod semantic_options;

pub use compliance_options::{ComplianceOptions, Standard};
pub use security_options::{CustomRule, RuleFilter, SecurityScanOptions};
pub use semantic_options::{DtoOptions, SemanticOptions};

use serde::{Deserialize, Serialize};

/// Aggregated options for the orchestrating validator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidatorOptions {
    pub security: SecurityScanOptions,
    pub compliance: ComplianceOptions,
    pub semantic: SemanticOptions,
}

impl ValidatorOptions {
    /// Parse options from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}
