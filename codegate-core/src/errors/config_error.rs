//! Configuration errors.
//!
//! These are mistakes made by the embedding application and fail fast at
//! validator construction. Malformed *source content* is never an error —
//! it surfaces as issues in a `ValidationResult`.

/// Errors raised while building a validator from options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid custom rule pattern '{pattern}': {reason}")]
    InvalidCustomRule { pattern: String, reason: String },

    #[error("Invalid safe-call pattern '{pattern}': {reason}")]
    InvalidSafeCallPattern { pattern: String, reason: String },

    #[error("Failed to parse options: {0}")]
    InvalidOptions(String),
}
