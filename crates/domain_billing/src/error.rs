use core_kernel::StoreError;
use thiserror::Error;

/// Billing domain errors
#[derive(Debug, Error)]
pub enum BillingError {
    /// A required draft field was empty at save time
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The invoice number collides with an already saved bill
    #[error("invoice number already in use: {0}")]
    DuplicateInvoiceNo(String),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
