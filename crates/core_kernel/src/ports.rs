//! Record-store port
//!
//! The persistence engine is an external collaborator: a generic key-value
//! record store with named collections, auto-increment keys, and secondary
//! indexes over record fields. This module defines the port trait that all
//! domain services consume; `infra_store` provides the in-memory adapter.
//!
//! # Usage
//!
//! ```rust,ignore
//! use core_kernel::{Collection, RecordStore};
//! use std::sync::Arc;
//!
//! pub struct BillingService {
//!     store: Arc<dyn RecordStore>,
//! }
//!
//! impl BillingService {
//!     pub async fn bill_count(&self) -> usize {
//!         self.store.get_all(Collection::Bills).await.map_or(0, |b| b.len())
//!     }
//! }
//! ```
//!
//! # Failure policy
//!
//! Store operations return `Result`; the degradation policy lives with the
//! callers. Reads generally degrade to empty results with a logged warning,
//! while user-initiated writes and the duplicate-invoice check on bill save
//! surface the error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The named collections of the billing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    /// Saved bills with their line items
    Bills,
    /// Customer master records, unique by GSTIN
    Customers,
    /// Item catalog records
    Items,
    /// Recorded customer payments
    CustomerPayments,
    /// Company information singleton
    CompanyInfo,
    /// The in-progress bill draft
    CurrentSession,
    /// Historical ledger entries written on bill save
    Ledger,
}

impl Collection {
    /// The collection name as stored
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Bills => "bills",
            Collection::Customers => "customers",
            Collection::Items => "items",
            Collection::CustomerPayments => "customerPayments",
            Collection::CompanyInfo => "companyInfo",
            Collection::CurrentSession => "currentSession",
            Collection::Ledger => "ledger",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An auto-increment record key assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(u64);

impl RecordKey {
    /// Wraps a raw key value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw key value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Errors surfaced by record-store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store is not available at all
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A single operation failed
    #[error("store operation failed on {collection}: {message}")]
    OperationFailed {
        collection: Collection,
        message: String,
    },

    /// A stored document could not be interpreted
    #[error("malformed record in {collection}: {message}")]
    MalformedRecord {
        collection: Collection,
        message: String,
    },
}

/// The generic record store consumed by all domain services
///
/// Records are schemaless JSON documents; each domain (de)serializes its
/// own types at the boundary. `add` assigns a fresh auto-increment key and
/// writes it into the document's `id` field, mirroring the behavior of a
/// keyPath store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a record, assigning and returning a fresh key
    async fn add(&self, collection: Collection, record: Value) -> Result<RecordKey, StoreError>;

    /// Fetches a record by key, `None` if absent
    async fn get(&self, collection: Collection, key: RecordKey)
        -> Result<Option<Value>, StoreError>;

    /// Returns all records of a collection in key (insertion) order
    async fn get_all(&self, collection: Collection) -> Result<Vec<Value>, StoreError>;

    /// Upserts a record under an explicit key
    async fn put(
        &self,
        collection: Collection,
        key: RecordKey,
        record: Value,
    ) -> Result<(), StoreError>;

    /// Deletes a record by key; deleting an absent key is not an error
    async fn delete(&self, collection: Collection, key: RecordKey) -> Result<(), StoreError>;

    /// Returns records whose indexed field exactly equals `value`
    async fn get_by_index(
        &self,
        collection: Collection,
        index: &str,
        value: &str,
    ) -> Result<Vec<Value>, StoreError>;
}
