//! The bill save path and its surrounding operations
//!
//! Saving a bill is the one strict write in the system: the duplicate
//! check must see the full bill collection, so a store failure there
//! aborts the save. Everything that follows a successful save (ledger
//! entry, customer capture) is best-effort; the bill is already durable
//! and a failed side write only costs the derived record.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use core_kernel::{epoch_millis, Collection, RecordKey, RecordStore};
use domain_party::{Customer, PartyService};

use crate::aggregate::{aggregate_bill, BillTotals};
use crate::bill::Bill;
use crate::draft::{BillDraft, SESSION_RECORD_KEY};
use crate::entry::LedgerEntry;
use crate::error::BillingError;
use crate::item::Item;
use crate::numbering;

/// The outcome of a successful bill save
#[derive(Debug, Clone)]
pub struct SavedBill {
    pub key: RecordKey,
    pub invoice_no: String,
    pub totals: BillTotals,
}

/// Bill, session, and item operations over the record store
pub struct BillingService {
    store: Arc<dyn RecordStore>,
    parties: PartyService,
}

impl BillingService {
    /// Creates a service over the shared store handle
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let parties = PartyService::new(Arc::clone(&store));
        Self { store, parties }
    }

    /// Validates, de-duplicates, and persists a draft as a bill
    ///
    /// Rejects the save when the canonical invoice number collides with
    /// any existing bill. After the bill is durable, a sale ledger entry
    /// is written and the customer is captured if their GSTIN is new;
    /// both are best-effort.
    pub async fn save_bill(&self, draft: &BillDraft) -> Result<SavedBill, BillingError> {
        let timestamp = epoch_millis();
        let bill = draft.to_bill(timestamp)?;

        let existing = self.fetch_bills_strict().await?;
        if let Some(clash) = existing.iter().find(|b| b.same_invoice_no(&bill)) {
            return Err(BillingError::DuplicateInvoiceNo(clash.invoice_no.clone()));
        }

        let totals = aggregate_bill(&bill);
        let key = self
            .store
            .add(Collection::Bills, serde_json::to_value(&bill)?)
            .await?;
        debug!(invoice_no = %bill.invoice_no, %key, "bill saved");

        let entry = LedgerEntry::sale(&bill, key, totals.grand_total, timestamp);
        if let Err(err) = self.record_sale(&entry).await {
            warn!(%err, invoice_no = %bill.invoice_no, "ledger entry not written");
        }

        let customer = customer_snapshot(&bill, timestamp);
        if let Err(err) = self.parties.upsert_if_absent(&customer).await {
            warn!(%err, customer = %bill.customer_name, "customer capture failed");
        }

        Ok(SavedBill {
            key,
            invoice_no: bill.invoice_no,
            totals,
        })
    }

    /// Saved-bills listing, filtered by invoice number or customer name
    ///
    /// An empty filter lists every bill. Reads degrade to empty on store
    /// failure.
    pub async fn list_bills(&self, filter: &str) -> Vec<Bill> {
        let needle = filter.trim().to_lowercase();
        let bills = self.fetch_bills_soft().await;
        if needle.is_empty() {
            return bills;
        }
        bills
            .into_iter()
            .filter(|b| b.matches_listing(&needle))
            .collect()
    }

    /// Fetches one bill by key, `None` if absent or on store failure
    pub async fn load_bill(&self, key: RecordKey) -> Option<Bill> {
        match self.store.get(Collection::Bills, key).await {
            Ok(Some(value)) => deserialize_bill(value),
            Ok(None) => None,
            Err(err) => {
                warn!(%err, %key, "bill read degraded to none");
                None
            }
        }
    }

    /// Deletes a bill by key; its ledger entry stays as history
    pub async fn delete_bill(&self, key: RecordKey) -> Result<(), BillingError> {
        self.store.delete(Collection::Bills, key).await?;
        debug!(%key, "bill deleted");
        Ok(())
    }

    /// The next free invoice number
    ///
    /// One past the highest number in the bill collection, zero-padded to
    /// three digits. When the collection cannot be read the number shown
    /// on screen is incremented instead, so the operation never fails.
    pub async fn next_invoice_number(&self, displayed: &str) -> String {
        match self.store.get_all(Collection::Bills).await {
            Ok(values) => {
                let bills: Vec<Bill> = values.into_iter().filter_map(deserialize_bill).collect();
                numbering::next_invoice_number(bills.iter().map(|b| b.invoice_no.as_str()))
            }
            Err(err) => {
                warn!(%err, "bill collection unreadable, falling back to displayed number");
                numbering::fallback_invoice_number(displayed)
            }
        }
    }

    /// Persists the in-progress draft into the single session slot
    pub async fn save_session(&self, draft: &BillDraft) -> Result<(), BillingError> {
        self.store
            .put(
                Collection::CurrentSession,
                SESSION_RECORD_KEY,
                serde_json::to_value(draft)?,
            )
            .await?;
        Ok(())
    }

    /// Loads the saved session, `None` when absent or unreadable
    pub async fn load_session(&self) -> Option<BillDraft> {
        match self
            .store
            .get(Collection::CurrentSession, SESSION_RECORD_KEY)
            .await
        {
            Ok(Some(value)) => serde_json::from_value(value)
                .map_err(|err| warn!(%err, "malformed session skipped"))
                .ok(),
            Ok(None) => None,
            Err(err) => {
                warn!(%err, "session read degraded to none");
                None
            }
        }
    }

    /// Discards the saved session; absent is fine
    pub async fn clear_session(&self) -> Result<(), BillingError> {
        self.store
            .delete(Collection::CurrentSession, SESSION_RECORD_KEY)
            .await?;
        Ok(())
    }

    /// Suggestion search over item description and HSN code
    pub async fn search_items(&self, term: &str) -> Vec<Item> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        match self.store.get_all(Collection::Items).await {
            Ok(values) => values
                .into_iter()
                .filter_map(deserialize_item)
                .filter(|i| i.matches_search(&needle))
                .collect(),
            Err(err) => {
                warn!(%err, "item read degraded to empty");
                Vec::new()
            }
        }
    }

    /// Saves an item master record unless one with the same description
    /// and HSN code exists
    pub async fn save_item_if_absent(&self, item: &Item) -> Result<Option<RecordKey>, BillingError> {
        if item.desc.trim().is_empty() {
            return Ok(None);
        }
        let existing = self.store.get_all(Collection::Items).await?;
        let duplicate = existing
            .into_iter()
            .filter_map(deserialize_item)
            .any(|i| i.is_same_record(item));
        if duplicate {
            return Ok(None);
        }
        let key = self
            .store
            .add(Collection::Items, serde_json::to_value(item)?)
            .await?;
        debug!(desc = %item.desc, %key, "item saved");
        Ok(Some(key))
    }

    async fn record_sale(&self, entry: &LedgerEntry) -> Result<(), BillingError> {
        self.store
            .add(Collection::Ledger, serde_json::to_value(entry)?)
            .await?;
        Ok(())
    }

    async fn fetch_bills_strict(&self) -> Result<Vec<Bill>, BillingError> {
        let values = self.store.get_all(Collection::Bills).await?;
        Ok(values.into_iter().filter_map(deserialize_bill).collect())
    }

    async fn fetch_bills_soft(&self) -> Vec<Bill> {
        match self.store.get_all(Collection::Bills).await {
            Ok(values) => values.into_iter().filter_map(deserialize_bill).collect(),
            Err(err) => {
                warn!(%err, "bill read degraded to empty");
                Vec::new()
            }
        }
    }
}

fn customer_snapshot(bill: &Bill, timestamp: i64) -> Customer {
    Customer {
        id: None,
        name: bill.customer_name.clone(),
        address: bill.customer_address.clone(),
        gstin: bill.customer_gst.clone(),
        state: bill.customer_state.clone(),
        state_code: bill.customer_code.clone(),
        contact: bill.customer_contact.clone(),
        timestamp,
    }
}

fn deserialize_bill(value: Value) -> Option<Bill> {
    serde_json::from_value(value)
        .map_err(|err| warn!(%err, "malformed bill record skipped"))
        .ok()
}

fn deserialize_item(value: Value) -> Option<Item> {
    serde_json::from_value(value)
        .map_err(|err| warn!(%err, "malformed item record skipped"))
        .ok()
}
