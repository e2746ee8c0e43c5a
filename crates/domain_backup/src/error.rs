use core_kernel::StoreError;
use thiserror::Error;

/// Backup domain errors
#[derive(Debug, Error)]
pub enum BackupError {
    /// The file is not a JSON object at the top level
    #[error("backup file is not a JSON object")]
    NotAnObject,

    /// A required top-level section is absent
    #[error("backup file is missing the '{0}' section")]
    MissingSection(&'static str),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
