use core_kernel::StoreError;
use thiserror::Error;

/// Ledger domain errors
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Payment amounts must be strictly positive
    #[error("payment amount must be positive")]
    NonPositiveAmount,

    /// A required payment field was empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
