//! Signer boundary errors.

/// Errors surfaced by an external signing collaborator.
///
/// `Unavailable` degrades the validate-and-sign contract to "validated but
/// unsigned" — a distinct outcome, never conflated with validation failure.
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("Signer unavailable: {0}")]
    Unavailable(String),

    #[error("Signing failed for agent {agent_id}, run {run_id}: {reason}")]
    SigningFailed {
        agent_id: String,
        run_id: String,
        reason: String,
    },
}
