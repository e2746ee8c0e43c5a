//! Customer payment records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{parse_iso_date, RecordKey};

/// A payment received from a customer
///
/// Like bills, payments carry a denormalized customer snapshot; deleting
/// the customer master record leaves payment history intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    /// Key of the customer master record, when one existed at entry time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<RecordKey>,
    pub customer_name: String,
    #[serde(default)]
    pub customer_gstin: String,
    /// Payment date as an ISO `YYYY-MM-DD` string
    pub date: String,
    /// Free-form method label, e.g. "cash", "upi", "cheque"
    #[serde(default)]
    pub method: String,
    pub amount: Decimal,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub timestamp: i64,
}

impl Payment {
    /// The payment date, `None` when malformed
    pub fn payment_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }

    /// True when customer name or GSTIN contains the lowercased needle
    pub fn matches_customer(&self, needle_lower: &str) -> bool {
        self.customer_name.to_lowercase().contains(needle_lower)
            || self.customer_gstin.to_lowercase().contains(needle_lower)
    }

    /// Duplicate rule: same customer key, date, amount, and method
    ///
    /// Notes and the denormalized name are excluded; two otherwise
    /// identical payments with different notes are still the same payment.
    pub fn is_same_record(&self, other: &Payment) -> bool {
        self.customer_id == other.customer_id
            && self.date == other.date
            && self.amount == other.amount
            && self.method == other.method
    }
}
