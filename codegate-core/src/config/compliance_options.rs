//! Compliance verifier options.

use serde::{Deserialize, Serialize};

/// Named rule packs selectable by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standard {
    /// Decorator/role conventions for NestJS-style source files.
    NestJs,
    /// Schema-definition conventions for Prisma schema files.
    Prisma,
}

/// Configuration for the compliance verifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComplianceOptions {
    /// Rule packs to activate on top of the baseline rules.
    pub standards: Vec<Standard>,
    /// Architecture hint. Informational only; recorded in result metadata.
    pub architecture: Option<String>,
}

impl ComplianceOptions {
    pub fn has_standard(&self, standard: Standard) -> bool {
        self.standards.contains(&standard)
    }
}
