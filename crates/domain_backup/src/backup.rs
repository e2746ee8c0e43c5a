//! The backup file format
//!
//! A backup is a single JSON object with one array per collection, the
//! company-information singleton, an export timestamp, and a format
//! version. Section presence is validated strictly; individual records
//! inside a section are deserialized fail-soft, so one corrupt record
//! does not void the rest of the file.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use domain_billing::{Bill, Item, LedgerEntry};
use domain_ledger::Payment;
use domain_party::{CompanyInfo, Customer};

use crate::error::BackupError;

/// The current backup format version
pub const BACKUP_VERSION: &str = "1.0";

/// A parsed backup file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    pub bills: Vec<Bill>,
    pub customers: Vec<Customer>,
    pub items: Vec<Item>,
    pub customer_payments: Vec<Payment>,
    pub ledger: Vec<LedgerEntry>,
    /// The singleton as a section: empty or one element
    pub company_info: Vec<CompanyInfo>,
    /// Export time, RFC 3339
    pub timestamp: String,
    pub version: String,
}

impl BackupFile {
    /// Parses a backup document
    ///
    /// Every collection section must be present, even when empty; a file
    /// without one is some other JSON document and is rejected whole.
    pub fn from_value(value: &Value) -> Result<Self, BackupError> {
        let root = value.as_object().ok_or(BackupError::NotAnObject)?;

        for section in [
            "bills",
            "customers",
            "items",
            "customerPayments",
            "ledger",
            "companyInfo",
        ] {
            if !root.contains_key(section) {
                return Err(BackupError::MissingSection(section));
            }
        }

        Ok(Self {
            bills: section_records(value, "bills"),
            customers: section_records(value, "customers"),
            items: section_records(value, "items"),
            customer_payments: section_records(value, "customerPayments"),
            ledger: section_records(value, "ledger"),
            company_info: section_records(value, "companyInfo"),
            timestamp: root
                .get("timestamp")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            version: root
                .get("version")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
    }
}

fn section_records<T: serde::de::DeserializeOwned>(value: &Value, section: &str) -> Vec<T> {
    let Some(array) = value.get(section).and_then(Value::as_array) else {
        warn!(section, "backup section is not an array, treated as empty");
        return Vec::new();
    };
    array
        .iter()
        .filter_map(|record| {
            serde_json::from_value(record.clone())
                .map_err(|err| warn!(%err, section, "malformed backup record skipped"))
                .ok()
        })
        .collect()
}
