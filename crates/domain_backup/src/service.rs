//! Export and restore over the record store
//!
//! Restore is additive only: it never overwrites or deletes a local
//! record, and every insert goes through the per-entity duplicate guard.
//! Candidates that survive the guard are appended to the in-memory
//! "existing" set as they land, so duplicates inside the backup file
//! itself also collapse to one record.

use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use core_kernel::{Collection, RecordStore};
use domain_billing::{Bill, Item, LedgerEntry};
use domain_ledger::Payment;
use domain_party::{CompanyInfo, Customer, PartyService, COMPANY_RECORD_KEY};

use crate::backup::{BackupFile, BACKUP_VERSION};
use crate::error::BackupError;
use crate::guard;

/// Counts of what a restore did, per section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub bills_added: usize,
    pub bills_skipped: usize,
    pub customers_added: usize,
    pub customers_skipped: usize,
    pub items_added: usize,
    pub items_skipped: usize,
    pub payments_added: usize,
    pub payments_skipped: usize,
    pub ledger_added: usize,
    pub ledger_skipped: usize,
    /// True when the file's company info was written; it never overwrites
    /// existing company info
    pub company_info_restored: bool,
}

impl RestoreReport {
    /// Total records written across all sections
    pub fn total_added(&self) -> usize {
        self.bills_added
            + self.customers_added
            + self.items_added
            + self.payments_added
            + self.ledger_added
    }
}

/// Full-store export and duplicate-guarded restore
pub struct BackupService {
    store: Arc<dyn RecordStore>,
    parties: PartyService,
}

impl BackupService {
    /// Creates a service over the shared store handle
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let parties = PartyService::new(Arc::clone(&store));
        Self { store, parties }
    }

    /// Serializes every collection into one backup document
    ///
    /// Reads are strict: a backup that silently omitted an unreadable
    /// collection would look complete and restore as data loss.
    pub async fn export(&self) -> Result<Value, BackupError> {
        let file = BackupFile {
            bills: self.read_section::<Bill>(Collection::Bills).await?,
            customers: self.read_section::<Customer>(Collection::Customers).await?,
            items: self.read_section::<Item>(Collection::Items).await?,
            customer_payments: self
                .read_section::<Payment>(Collection::CustomerPayments)
                .await?,
            ledger: self.read_section::<LedgerEntry>(Collection::Ledger).await?,
            company_info: self.parties.load_company().await.into_iter().collect(),
            timestamp: Utc::now().to_rfc3339(),
            version: BACKUP_VERSION.to_string(),
        };
        info!(
            bills = file.bills.len(),
            customers = file.customers.len(),
            "backup exported"
        );
        Ok(serde_json::to_value(&file)?)
    }

    /// Restores a backup document, inserting only absent records
    pub async fn restore(&self, value: &Value) -> Result<RestoreReport, BackupError> {
        let file = BackupFile::from_value(value)?;
        let mut report = RestoreReport::default();

        let mut existing: Vec<Bill> = self.read_section(Collection::Bills).await?;
        for mut bill in file.bills {
            if guard::bill_exists(&existing, &bill) {
                report.bills_skipped += 1;
                continue;
            }
            bill.id = None;
            self.store
                .add(Collection::Bills, serde_json::to_value(&bill)?)
                .await?;
            existing.push(bill);
            report.bills_added += 1;
        }

        let mut existing: Vec<Customer> = self.read_section(Collection::Customers).await?;
        for mut customer in file.customers {
            if guard::customer_exists(&existing, &customer) {
                report.customers_skipped += 1;
                continue;
            }
            customer.id = None;
            self.store
                .add(Collection::Customers, serde_json::to_value(&customer)?)
                .await?;
            existing.push(customer);
            report.customers_added += 1;
        }

        let mut existing: Vec<Item> = self.read_section(Collection::Items).await?;
        for mut item in file.items {
            if guard::item_exists(&existing, &item) {
                report.items_skipped += 1;
                continue;
            }
            item.id = None;
            self.store
                .add(Collection::Items, serde_json::to_value(&item)?)
                .await?;
            existing.push(item);
            report.items_added += 1;
        }

        let mut existing: Vec<Payment> = self.read_section(Collection::CustomerPayments).await?;
        for mut payment in file.customer_payments {
            if guard::payment_exists(&existing, &payment) {
                report.payments_skipped += 1;
                continue;
            }
            payment.id = None;
            self.store
                .add(Collection::CustomerPayments, serde_json::to_value(&payment)?)
                .await?;
            existing.push(payment);
            report.payments_added += 1;
        }

        let mut existing: Vec<LedgerEntry> = self.read_section(Collection::Ledger).await?;
        for mut entry in file.ledger {
            if guard::ledger_entry_exists(&existing, &entry) {
                report.ledger_skipped += 1;
                continue;
            }
            entry.id = None;
            self.store
                .add(Collection::Ledger, serde_json::to_value(&entry)?)
                .await?;
            existing.push(entry);
            report.ledger_added += 1;
        }

        if let Some(info) = file.company_info.first() {
            report.company_info_restored = self.restore_company(info).await?;
        }

        info!(
            added = report.total_added(),
            company_info = report.company_info_restored,
            "backup restored"
        );
        Ok(report)
    }

    async fn restore_company(&self, info: &CompanyInfo) -> Result<bool, BackupError> {
        let present = self
            .store
            .get(Collection::CompanyInfo, COMPANY_RECORD_KEY)
            .await?
            .is_some();
        if present {
            debug!("company info already set, backup copy ignored");
            return Ok(false);
        }
        self.store
            .put(
                Collection::CompanyInfo,
                COMPANY_RECORD_KEY,
                serde_json::to_value(info)?,
            )
            .await?;
        Ok(true)
    }

    async fn read_section<T: serde::de::DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, BackupError> {
        let values = self.store.get_all(collection).await?;
        Ok(values
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value(value)
                    .map_err(|err| warn!(%err, %collection, "malformed record skipped"))
                    .ok()
            })
            .collect())
    }
}
