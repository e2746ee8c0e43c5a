//! The in-progress bill draft
//!
//! A draft mirrors the bill record field-for-field but tolerates any
//! amount of missing data; it only has to hold together long enough to
//! be resumed. Validation happens once, at the moment the draft is
//! promoted to a bill.

use serde::{Deserialize, Serialize};

use core_kernel::{RecordKey, TransactionType};

use crate::bill::{Bill, CustomerType, LineItem};
use crate::error::BillingError;

/// The single current-session slot
pub const SESSION_RECORD_KEY: RecordKey = RecordKey::new(1);

/// An in-progress bill, persisted as the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillDraft {
    pub invoice_no: String,
    pub date: String,
    pub customer_name: String,
    pub customer_gst: String,
    pub customer_address: String,
    pub customer_state: String,
    pub customer_code: String,
    pub customer_contact: String,
    pub customer_type: CustomerType,
    pub buyer_name: String,
    pub buyer_address: String,
    pub buyer_gst: String,
    pub buyer_state: String,
    pub buyer_code: String,
    pub buyer_contact: String,
    pub place_of_supply: String,
    pub transaction_type: TransactionType,
    pub gst_percent: String,
    pub items: Vec<LineItem>,
}

impl Default for BillDraft {
    fn default() -> Self {
        Self {
            invoice_no: String::new(),
            date: String::new(),
            customer_name: String::new(),
            customer_gst: String::new(),
            customer_address: String::new(),
            customer_state: String::new(),
            customer_code: String::new(),
            customer_contact: String::new(),
            customer_type: CustomerType::BillTo,
            buyer_name: String::new(),
            buyer_address: String::new(),
            buyer_gst: String::new(),
            buyer_state: String::new(),
            buyer_code: String::new(),
            buyer_contact: String::new(),
            place_of_supply: String::new(),
            transaction_type: TransactionType::Intrastate,
            gst_percent: "18".to_string(),
            items: Vec::new(),
        }
    }
}

impl BillDraft {
    /// Promotes the draft to a bill ready to persist
    ///
    /// Invoice number, date, and customer name must be non-blank; every
    /// other field may stay empty.
    pub fn to_bill(&self, timestamp: i64) -> Result<Bill, BillingError> {
        if self.invoice_no.trim().is_empty() {
            return Err(BillingError::MissingField("invoiceNo"));
        }
        if self.date.trim().is_empty() {
            return Err(BillingError::MissingField("date"));
        }
        if self.customer_name.trim().is_empty() {
            return Err(BillingError::MissingField("customerName"));
        }

        Ok(Bill {
            id: None,
            invoice_no: self.invoice_no.clone(),
            date: self.date.clone(),
            customer_name: self.customer_name.clone(),
            customer_gst: self.customer_gst.clone(),
            customer_address: self.customer_address.clone(),
            customer_state: self.customer_state.clone(),
            customer_code: self.customer_code.clone(),
            customer_contact: self.customer_contact.clone(),
            customer_type: self.customer_type,
            buyer_name: self.buyer_name.clone(),
            buyer_address: self.buyer_address.clone(),
            buyer_gst: self.buyer_gst.clone(),
            buyer_state: self.buyer_state.clone(),
            buyer_code: self.buyer_code.clone(),
            buyer_contact: self.buyer_contact.clone(),
            place_of_supply: self.place_of_supply.clone(),
            transaction_type: self.transaction_type,
            gst_percent: self.gst_percent.clone(),
            items: self.items.clone(),
            timestamp,
        })
    }
}
