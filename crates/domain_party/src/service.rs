//! Party services over the record store
//!
//! Reads degrade to empty results on store failure; only user-initiated
//! writes (delete, company save) surface errors.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use core_kernel::{Collection, RecordKey, RecordStore};

use crate::company::{CompanyInfo, COMPANY_RECORD_KEY};
use crate::customer::Customer;
use crate::error::PartyError;

/// Suggestion search ignores terms shorter than this
const MIN_SEARCH_LEN: usize = 2;

/// Customer and company-information operations
pub struct PartyService {
    store: Arc<dyn RecordStore>,
}

impl PartyService {
    /// Creates a service over the shared store handle
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Suggestion search over name, GSTIN, and address
    ///
    /// Terms shorter than two characters return nothing; this search backs
    /// the as-you-type suggestions and would otherwise match everything.
    pub async fn search_customers(&self, term: &str) -> Vec<Customer> {
        let term = term.trim();
        if term.len() < MIN_SEARCH_LEN {
            return Vec::new();
        }
        let needle = term.to_lowercase();
        self.fetch_customers()
            .await
            .into_iter()
            .filter(|c| c.matches_search(&needle))
            .collect()
    }

    /// Management listing, filtered by name/GSTIN substring
    ///
    /// An empty filter lists every customer.
    pub async fn list_customers(&self, filter: &str) -> Vec<Customer> {
        let needle = filter.trim().to_lowercase();
        let customers = self.fetch_customers().await;
        if needle.is_empty() {
            return customers;
        }
        customers
            .into_iter()
            .filter(|c| c.matches_listing(&needle))
            .collect()
    }

    /// Fetches one customer by key, `None` if absent or on store failure
    pub async fn load_customer(&self, key: RecordKey) -> Option<Customer> {
        match self.store.get(Collection::Customers, key).await {
            Ok(Some(value)) => deserialize_customer(value),
            Ok(None) => None,
            Err(err) => {
                warn!(%err, %key, "customer read degraded to none");
                None
            }
        }
    }

    /// Inserts the customer unless one with the same GSTIN already exists
    ///
    /// Returns the new key on insert, `None` when the customer existed or
    /// lacks the identity fields. Used by the bill-save path, so it never
    /// overwrites an existing record.
    pub async fn upsert_if_absent(
        &self,
        customer: &Customer,
    ) -> Result<Option<RecordKey>, PartyError> {
        if customer.name.trim().is_empty() || customer.gstin.trim().is_empty() {
            return Ok(None);
        }

        let existing = self
            .store
            .get_by_index(Collection::Customers, "gstin", &customer.gstin)
            .await?;
        if !existing.is_empty() {
            return Ok(None);
        }

        let key = self
            .store
            .add(Collection::Customers, serde_json::to_value(customer)?)
            .await?;
        debug!(gstin = %customer.gstin, %key, "customer saved");
        Ok(Some(key))
    }

    /// Deletes a customer by key
    ///
    /// Bills and payments keep their denormalized customer snapshot, so
    /// this never cascades.
    pub async fn delete_customer(&self, key: RecordKey) -> Result<(), PartyError> {
        self.store.delete(Collection::Customers, key).await?;
        debug!(%key, "customer deleted");
        Ok(())
    }

    /// Saves the company information singleton
    pub async fn save_company(&self, info: &CompanyInfo) -> Result<(), PartyError> {
        self.store
            .put(
                Collection::CompanyInfo,
                COMPANY_RECORD_KEY,
                serde_json::to_value(info)?,
            )
            .await?;
        debug!("company info saved");
        Ok(())
    }

    /// Loads the company information singleton, `None` when unset
    pub async fn load_company(&self) -> Option<CompanyInfo> {
        match self.store.get(Collection::CompanyInfo, COMPANY_RECORD_KEY).await {
            Ok(Some(value)) => serde_json::from_value(value)
                .map_err(|err| warn!(%err, "malformed company info skipped"))
                .ok(),
            Ok(None) => None,
            Err(err) => {
                warn!(%err, "company info read degraded to none");
                None
            }
        }
    }

    async fn fetch_customers(&self) -> Vec<Customer> {
        match self.store.get_all(Collection::Customers).await {
            Ok(values) => values.into_iter().filter_map(deserialize_customer).collect(),
            Err(err) => {
                warn!(%err, "customer read degraded to empty");
                Vec::new()
            }
        }
    }
}

fn deserialize_customer(value: Value) -> Option<Customer> {
    serde_json::from_value(value)
        .map_err(|err| warn!(%err, "malformed customer record skipped"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_store::MemoryStore;

    fn customer(name: &str, gstin: &str) -> Customer {
        Customer {
            id: None,
            name: name.to_string(),
            address: format!("{} Street", name),
            gstin: gstin.to_string(),
            state: "Maharashtra".to_string(),
            state_code: "27".to_string(),
            contact: String::new(),
            timestamp: 0,
        }
    }

    fn service() -> PartyService {
        PartyService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_upsert_if_absent_inserts_once() {
        let svc = service();
        let c = customer("Acme Traders", "27AAEPM1234C1ZV");

        let first = svc.upsert_if_absent(&c).await.unwrap();
        assert!(first.is_some());

        let second = svc.upsert_if_absent(&c).await.unwrap();
        assert!(second.is_none());

        assert_eq!(svc.list_customers("").await.len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_skips_incomplete_identity() {
        let svc = service();
        let c = customer("", "27AAEPM1234C1ZV");
        assert!(svc.upsert_if_absent(&c).await.unwrap().is_none());
        assert!(svc.list_customers("").await.is_empty());
    }

    #[tokio::test]
    async fn test_search_gates_short_terms() {
        let svc = service();
        svc.upsert_if_absent(&customer("Acme Traders", "27AAEPM1234C1ZV"))
            .await
            .unwrap();

        assert!(svc.search_customers("a").await.is_empty());
        assert_eq!(svc.search_customers("ac").await.len(), 1);
        assert_eq!(svc.search_customers("acme street").await.len(), 0);
        assert_eq!(svc.search_customers("Street").await.len(), 1);
    }

    #[tokio::test]
    async fn test_list_filters_by_name_or_gstin() {
        let svc = service();
        svc.upsert_if_absent(&customer("Acme Traders", "27AAEPM1234C1ZV"))
            .await
            .unwrap();
        svc.upsert_if_absent(&customer("Globex", "07BBFQN5678D2ZW"))
            .await
            .unwrap();

        assert_eq!(svc.list_customers("").await.len(), 2);
        assert_eq!(svc.list_customers("globex").await.len(), 1);
        assert_eq!(svc.list_customers("27aaepm").await.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_customer() {
        let svc = service();
        let key = svc
            .upsert_if_absent(&customer("Acme Traders", "27AAEPM1234C1ZV"))
            .await
            .unwrap()
            .unwrap();

        svc.delete_customer(key).await.unwrap();
        assert!(svc.list_customers("").await.is_empty());
        assert!(svc.load_customer(key).await.is_none());
    }

    #[tokio::test]
    async fn test_company_singleton_roundtrip() {
        let svc = service();
        assert!(svc.load_company().await.is_none());

        let info = CompanyInfo {
            name: "Sharma Industries".to_string(),
            gst: "27AACCS1234A1Z5".to_string(),
            ..Default::default()
        };
        svc.save_company(&info).await.unwrap();

        let loaded = svc.load_company().await.unwrap();
        assert_eq!(loaded, info);
    }
}
