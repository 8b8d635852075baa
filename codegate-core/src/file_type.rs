//! File type detection from file extension.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Recognized input formats. Closed set; anything else is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Ts,
    Js,
    Json,
    Prisma,
    Wasm,
    Graphql,
    Yaml,
    #[default]
    Unknown,
}

impl FileType {
    /// Detect file type from an extension string.
    pub fn from_extension(ext: Option<&str>) -> FileType {
        match ext {
            Some("ts") | Some("tsx") | Some("mts") | Some("cts") => FileType::Ts,
            Some("js") | Some("jsx") | Some("mjs") | Some("cjs") => FileType::Js,
            Some("json") => FileType::Json,
            Some("prisma") => FileType::Prisma,
            Some("wasm") => FileType::Wasm,
            Some("graphql") | Some("gql") => FileType::Graphql,
            Some("yaml") | Some("yml") => FileType::Yaml,
            _ => FileType::Unknown,
        }
    }

    /// Detect file type from a path's extension.
    pub fn from_path(path: &Path) -> FileType {
        Self::from_extension(path.extension().and_then(|e| e.to_str()))
    }

    /// Source-language types that have a parseable AST.
    pub fn is_source(self) -> bool {
        matches!(self, FileType::Ts | FileType::Js)
    }

    /// Returns the display name of the file type.
    pub fn name(self) -> &'static str {
        match self {
            FileType::Ts => "ts",
            FileType::Js => "js",
            FileType::Json => "json",
            FileType::Prisma => "prisma",
            FileType::Wasm => "wasm",
            FileType::Graphql => "graphql",
            FileType::Yaml => "yaml",
            FileType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
