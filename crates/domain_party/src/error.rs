//! Party domain errors

use core_kernel::StoreError;
use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Error)]
pub enum PartyError {
    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A record could not be serialized
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
