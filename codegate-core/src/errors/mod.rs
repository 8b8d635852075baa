//! Error handling for codegate.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod signer_error;

pub use config_error::ConfigError;
pub use signer_error::SignerError;
