//! Bill and line-item records
//!
//! Field names serialize exactly as stored (`invoiceNo`, `customerGst`,
//! `gstPercent`, ...) so that saved bills and backup files interoperate
//! with existing data. Quantities, rates, and the GST percentage are kept
//! as the strings the user entered; parsing is fail-soft throughout.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{parse_amount, parse_iso_date, RecordKey, TransactionType};

use crate::numbering::canonical_invoice_no;

/// Whether the bill carries a separate buyer (ship-to) party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerType {
    /// Single bill-to party
    BillTo,
    /// Bill-to plus a distinct buyer
    Both,
}

impl Default for CustomerType {
    fn default() -> Self {
        CustomerType::BillTo
    }
}

/// One line of a bill
///
/// `qty` and `rate` stay as entered; [`LineItem::amount`] parses them
/// fail-soft, so a malformed value contributes zero instead of failing
/// the whole bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub desc: String,
    pub hsn: String,
    pub qty: String,
    pub per: String,
    pub rate: String,
}

impl LineItem {
    /// Creates a line item
    pub fn new(
        desc: impl Into<String>,
        hsn: impl Into<String>,
        qty: impl Into<String>,
        per: impl Into<String>,
        rate: impl Into<String>,
    ) -> Self {
        Self {
            desc: desc.into(),
            hsn: hsn.into(),
            qty: qty.into(),
            per: per.into(),
            rate: rate.into(),
        }
    }

    /// The line amount: qty times rate
    ///
    /// Fail-soft both ways: a value that does not parse, and a product
    /// that does not fit a `Decimal`, contribute zero.
    pub fn amount(&self) -> Decimal {
        parse_amount(&self.qty)
            .checked_mul(parse_amount(&self.rate))
            .unwrap_or(Decimal::ZERO)
    }

    /// Element-wise duplicate comparison on desc, hsn, qty, and rate
    ///
    /// `per` is a display unit and not part of the identity.
    pub fn matches(&self, other: &LineItem) -> bool {
        self.desc == other.desc
            && self.hsn == other.hsn
            && self.qty == other.qty
            && self.rate == other.rate
    }
}

/// A saved bill with its denormalized customer snapshot
///
/// The customer fields are captured at creation time and owned by the
/// bill; the customer master record is only a loose reference. Item order
/// is display order and carries no meaning for totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Store key, absent until first persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordKey>,
    pub invoice_no: String,
    /// Invoice date as an ISO `YYYY-MM-DD` string
    pub date: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_gst: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub customer_state: String,
    #[serde(default)]
    pub customer_code: String,
    #[serde(default)]
    pub customer_contact: String,
    #[serde(default)]
    pub customer_type: CustomerType,
    #[serde(default)]
    pub buyer_name: String,
    #[serde(default)]
    pub buyer_address: String,
    #[serde(default)]
    pub buyer_gst: String,
    #[serde(default)]
    pub buyer_state: String,
    #[serde(default)]
    pub buyer_code: String,
    #[serde(default)]
    pub buyer_contact: String,
    #[serde(default)]
    pub place_of_supply: String,
    #[serde(default)]
    pub transaction_type: TransactionType,
    /// GST percentage as entered, e.g. "18"
    #[serde(default)]
    pub gst_percent: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Creation time, epoch milliseconds
    #[serde(default)]
    pub timestamp: i64,
}

impl Bill {
    /// The invoice date, `None` when malformed
    pub fn invoice_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }

    /// True when customer name or GST number contains the lowercased needle
    pub fn matches_customer(&self, needle_lower: &str) -> bool {
        self.customer_name.to_lowercase().contains(needle_lower)
            || self.customer_gst.to_lowercase().contains(needle_lower)
    }

    /// True when invoice number or customer name contains the lowercased
    /// needle; the saved-bills listing filter
    pub fn matches_listing(&self, needle_lower: &str) -> bool {
        self.invoice_no.to_lowercase().contains(needle_lower)
            || self.customer_name.to_lowercase().contains(needle_lower)
    }

    /// Invoice-number collision: exact match after stripping the optional
    /// `INV-` prefix from both sides
    ///
    /// This is the live-save duplicate rule; a save colliding with any
    /// existing bill is rejected outright.
    pub fn same_invoice_no(&self, other: &Bill) -> bool {
        canonical_invoice_no(&self.invoice_no) == canonical_invoice_no(&other.invoice_no)
    }

    /// Structural duplicate: header fields plus element-wise item equality
    ///
    /// The restore rule. Deliberately wider than [`Bill::same_invoice_no`]
    /// so re-importing a backup skips the same logical bill instead of
    /// colliding on number alone.
    pub fn is_same_record(&self, other: &Bill) -> bool {
        self.invoice_no == other.invoice_no
            && self.date == other.date
            && self.customer_name == other.customer_name
            && self.customer_gst == other.customer_gst
            && self.transaction_type == other.transaction_type
            && self.gst_percent == other.gst_percent
            && self.items.len() == other.items.len()
            && self.items.iter().zip(&other.items).all(|(a, b)| a.matches(b))
    }
}
