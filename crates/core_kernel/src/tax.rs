//! GST tax-split types
//!
//! The split is purely arithmetic: an intrastate transaction divides the
//! GST percentage evenly between CGST and SGST, an interstate transaction
//! charges the full percentage as IGST. No tax-law logic lives here.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Whether a transaction crosses state lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Within one state: GST splits 50/50 into CGST and SGST
    Intrastate,
    /// Across states: the full GST percentage is IGST
    Interstate,
}

impl Default for TransactionType {
    fn default() -> Self {
        TransactionType::Intrastate
    }
}

/// The CGST/SGST/IGST rate split for a transaction
///
/// A pure function of the GST percentage and the transaction type. Exactly
/// one side of the split is non-zero: CGST+SGST for intrastate, IGST for
/// interstate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSplit {
    /// Central GST rate as a percentage
    pub cgst_rate: Decimal,
    /// State GST rate as a percentage
    pub sgst_rate: Decimal,
    /// Integrated GST rate as a percentage
    pub igst_rate: Decimal,
}

impl TaxSplit {
    /// Splits a GST percentage according to the transaction type
    pub fn for_transaction(gst_percent: Decimal, transaction_type: TransactionType) -> Self {
        match transaction_type {
            TransactionType::Intrastate => Self {
                cgst_rate: gst_percent / dec!(2),
                sgst_rate: gst_percent / dec!(2),
                igst_rate: Decimal::ZERO,
            },
            TransactionType::Interstate => Self {
                cgst_rate: Decimal::ZERO,
                sgst_rate: Decimal::ZERO,
                igst_rate: gst_percent,
            },
        }
    }

    /// Applies the split to a taxable value, producing tax amounts
    ///
    /// Saturates instead of panicking when the product does not fit a
    /// `Decimal`; totals stay computable for any stored input.
    pub fn amounts_on(&self, taxable: Decimal) -> TaxAmounts {
        TaxAmounts {
            cgst: taxable.saturating_mul(self.cgst_rate) / dec!(100),
            sgst: taxable.saturating_mul(self.sgst_rate) / dec!(100),
            igst: taxable.saturating_mul(self.igst_rate) / dec!(100),
        }
    }
}

/// Tax amounts computed from a taxable value and a [`TaxSplit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAmounts {
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl TaxAmounts {
    /// Sum of all three components, saturating
    pub fn total(&self) -> Decimal {
        self.cgst.saturating_add(self.sgst).saturating_add(self.igst)
    }
}
