//! Payment recording and the ledger query service
//!
//! Ledger queries run against full collection reads and the user can
//! retype the filter faster than a query completes, so each query takes
//! a sequence token; a result whose token has been superseded is dropped
//! rather than shown over a newer one.

use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

use core_kernel::{epoch_millis, Collection, RecordKey, RecordStore};
use domain_billing::Bill;

use crate::engine::{build_summary, LedgerOutcome};
use crate::error::LedgerError;
use crate::payment::Payment;

/// Monotonic tokens for dropping superseded query results
#[derive(Debug, Default)]
pub struct QuerySequence {
    current: AtomicU64,
}

impl QuerySequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new token, superseding all earlier ones
    pub fn issue(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True while no newer token has been issued
    pub fn is_current(&self, token: u64) -> bool {
        self.current.load(Ordering::SeqCst) == token
    }
}

/// Records and lists customer payments
pub struct PaymentService {
    store: Arc<dyn RecordStore>,
}

impl PaymentService {
    /// Creates a service over the shared store handle
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validates and persists a payment
    ///
    /// The amount must be strictly positive and the customer name
    /// non-blank; the timestamp is stamped here.
    pub async fn record_payment(&self, payment: &Payment) -> Result<RecordKey, LedgerError> {
        if payment.customer_name.trim().is_empty() {
            return Err(LedgerError::MissingField("customerName"));
        }
        if !payment.amount.is_sign_positive() || payment.amount.is_zero() {
            return Err(LedgerError::NonPositiveAmount);
        }

        let mut stamped = payment.clone();
        stamped.id = None;
        stamped.timestamp = epoch_millis();

        let key = self
            .store
            .add(
                Collection::CustomerPayments,
                serde_json::to_value(&stamped)?,
            )
            .await?;
        debug!(customer = %payment.customer_name, %key, "payment recorded");
        Ok(key)
    }

    /// Payment listing, filtered by customer name or GSTIN substring
    ///
    /// An empty filter lists every payment. Reads degrade to empty on
    /// store failure.
    pub async fn list_payments(&self, filter: &str) -> Vec<Payment> {
        let needle = filter.trim().to_lowercase();
        let payments = fetch_payments(self.store.as_ref()).await;
        if needle.is_empty() {
            return payments;
        }
        payments
            .into_iter()
            .filter(|p| p.matches_customer(&needle))
            .collect()
    }

    /// Deletes a payment by key
    pub async fn delete_payment(&self, key: RecordKey) -> Result<(), LedgerError> {
        self.store.delete(Collection::CustomerPayments, key).await?;
        debug!(%key, "payment deleted");
        Ok(())
    }
}

/// Runs ledger queries with stale-result suppression
pub struct LedgerService {
    store: Arc<dyn RecordStore>,
    sequence: QuerySequence,
}

impl LedgerService {
    /// Creates a service over the shared store handle
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            sequence: QuerySequence::new(),
        }
    }

    /// Computes a customer's ledger summary
    ///
    /// Returns `None` when a newer query was issued while this one ran;
    /// the caller discards the result without rendering it.
    pub async fn customer_ledger(&self, filter: &str) -> Option<LedgerOutcome> {
        let token = self.sequence.issue();

        let bills = fetch_bills(self.store.as_ref()).await;
        let payments = fetch_payments(self.store.as_ref()).await;

        if !self.sequence.is_current(token) {
            debug!(filter, "ledger query superseded, result dropped");
            return None;
        }
        Some(build_summary(filter, &bills, &payments))
    }
}

async fn fetch_bills(store: &dyn RecordStore) -> Vec<Bill> {
    match store.get_all(Collection::Bills).await {
        Ok(values) => values
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value(value)
                    .map_err(|err| warn!(%err, "malformed bill record skipped"))
                    .ok()
            })
            .collect(),
        Err(err) => {
            warn!(%err, "bill read degraded to empty");
            Vec::new()
        }
    }
}

async fn fetch_payments(store: &dyn RecordStore) -> Vec<Payment> {
    match store.get_all(Collection::CustomerPayments).await {
        Ok(values) => values.into_iter().filter_map(deserialize_payment).collect(),
        Err(err) => {
            warn!(%err, "payment read degraded to empty");
            Vec::new()
        }
    }
}

fn deserialize_payment(value: Value) -> Option<Payment> {
    serde_json::from_value(value)
        .map_err(|err| warn!(%err, "malformed payment record skipped"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sequence_supersedes_earlier_tokens() {
        let seq = QuerySequence::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[tokio::test]
    async fn test_record_payment_rejects_invalid_input() {
        use infra_store::MemoryStore;

        let svc = PaymentService::new(Arc::new(MemoryStore::new()));
        let mut p = Payment {
            id: None,
            customer_id: None,
            customer_name: "Acme Traders".to_string(),
            customer_gstin: String::new(),
            date: "2024-04-01".to_string(),
            method: "cash".to_string(),
            amount: dec!(0),
            notes: String::new(),
            timestamp: 0,
        };
        assert!(matches!(
            svc.record_payment(&p).await,
            Err(LedgerError::NonPositiveAmount)
        ));

        p.amount = dec!(-10);
        assert!(matches!(
            svc.record_payment(&p).await,
            Err(LedgerError::NonPositiveAmount)
        ));

        p.amount = dec!(100);
        p.customer_name = "  ".to_string();
        assert!(matches!(
            svc.record_payment(&p).await,
            Err(LedgerError::MissingField("customerName"))
        ));

        assert!(svc.list_payments("").await.is_empty());
    }
}
