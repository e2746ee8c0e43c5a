//! Backup Domain - export and duplicate-guarded restore
//!
//! Export serializes every collection into one self-describing JSON
//! document. Restore walks that document record by record and inserts
//! only what is not already present, using a per-entity notion of
//! "already present": bills compare structurally, customers by GSTIN,
//! payments by customer key, date, amount, and method, items by
//! description and HSN, ledger entries by invoice number. Restoring the
//! same file twice therefore adds nothing the second time.

pub mod backup;
pub mod error;
pub mod guard;
pub mod service;

pub use backup::{BackupFile, BACKUP_VERSION};
pub use error::BackupError;
pub use service::{BackupService, RestoreReport};
