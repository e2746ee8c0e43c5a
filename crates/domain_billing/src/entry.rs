//! Derived ledger entries
//!
//! Every saved bill writes one sale entry into the ledger collection.
//! The entry is a write-time snapshot: later edits to the bill do not
//! touch it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::RecordKey;

use crate::bill::Bill;

/// A sale entry derived from a saved bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    /// Key of the bill this entry was derived from
    pub bill_id: RecordKey,
    pub customer_name: String,
    #[serde(default)]
    pub customer_gst: String,
    pub invoice_no: String,
    pub date: String,
    /// The bill's rounded grand total
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Carried on the record but never read back; settlement is computed
    /// from bills against payments, not from this flag
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub timestamp: i64,
}

impl LedgerEntry {
    /// Builds the sale entry for a freshly saved bill
    pub fn sale(bill: &Bill, bill_id: RecordKey, grand_total: Decimal, timestamp: i64) -> Self {
        Self {
            id: None,
            bill_id,
            customer_name: bill.customer_name.clone(),
            customer_gst: bill.customer_gst.clone(),
            invoice_no: bill.invoice_no.clone(),
            date: bill.date.clone(),
            amount: grand_total,
            entry_type: "sale".to_string(),
            status: "unpaid".to_string(),
            timestamp,
        }
    }

    /// Duplicate rule: exact invoice number, prefix and all
    ///
    /// Unlike the live-save bill rule, no `INV-` stripping: entries
    /// stored under `"007"` and `"INV-007"` are distinct audit rows.
    pub fn is_same_record(&self, other: &LedgerEntry) -> bool {
        self.invoice_no == other.invoice_no
    }
}
