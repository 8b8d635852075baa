//! Signer boundary — validated results handed to an external signer.
//!
//! The engine never signs anything itself: it produces a report and, when
//! validation passed, offers the serialized report to a caller-supplied
//! [`ResultSigner`]. A failed validation is rejected before the signer is
//! ever invoked.

use codegate_core::{FileType, SignerError};
use serde::{Deserialize, Serialize};

use super::{SafeMigrationValidator, ValidationReport};

/// Receipt returned by a signer for one accepted result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureReceipt {
    /// Where the signer stored the signature artifact.
    pub signature_path: String,
    /// Hash of the signed payload, as computed by the signer.
    pub result_hash: String,
    /// RFC 3339 signing timestamp.
    pub timestamp: String,
    pub agent_id: String,
    pub run_id: String,
}

/// External signing capability. Implementations typically wrap a key
/// store or an attestation service.
pub trait ResultSigner {
    fn sign_result(
        &self,
        agent_id: &str,
        run_id: &str,
        payload: &str,
    ) -> Result<SignatureReceipt, SignerError>;
}

/// Outcome of a validate-then-sign cycle.
#[derive(Debug)]
pub enum SigningOutcome {
    /// Validation failed; the signer was never invoked.
    Rejected(ValidationReport),
    /// Validation passed and the signer accepted the result.
    Signed {
        report: ValidationReport,
        receipt: SignatureReceipt,
    },
    /// Validation passed but no signature was produced. The validation
    /// verdict stands; only the attestation is missing.
    ValidatedUnsigned {
        report: ValidationReport,
        reason: String,
    },
}

impl SigningOutcome {
    /// Whether validation passed, signed or not.
    pub fn validated(&self) -> bool {
        !matches!(self, SigningOutcome::Rejected(_))
    }
}

impl SafeMigrationValidator {
    /// Run the detailed evaluation and hand a passing result to `signer`.
    ///
    /// The payload offered for signing is the JSON serialization of the
    /// report; signer failure downgrades the outcome to
    /// [`SigningOutcome::ValidatedUnsigned`] rather than failing validation.
    pub fn validate_and_sign(
        &self,
        code: &str,
        file_type: FileType,
        file_path: Option<&str>,
        signer: &dyn ResultSigner,
        agent_id: &str,
        run_id: &str,
    ) -> SigningOutcome {
        let report = self.validation_report(code, file_type, file_path);
        if !report.success {
            return SigningOutcome::Rejected(report);
        }

        let payload = match serde_json::to_string(&report) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "report serialization failed; result left unsigned");
                return SigningOutcome::ValidatedUnsigned {
                    report,
                    reason: format!("report serialization failed: {e}"),
                };
            }
        };

        match signer.sign_result(agent_id, run_id, &payload) {
            Ok(receipt) => SigningOutcome::Signed { report, receipt },
            Err(e) => {
                tracing::warn!(error = %e, "signer declined; result left unsigned");
                SigningOutcome::ValidatedUnsigned {
                    report,
                    reason: e.to_string(),
                }
            }
        }
    }
}
