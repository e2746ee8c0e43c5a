//! The bill aggregator
//!
//! A pure function from line items and tax configuration to the figures
//! printed on an invoice: taxable subtotal, CGST/SGST/IGST amounts, the
//! rounded grand total, and the per-HSN tax breakdown. No side effects,
//! deterministic for identical inputs.

use rust_decimal::Decimal;
use std::collections::HashMap;

use core_kernel::{parse_amount, round_whole, TaxSplit, TransactionType};

use crate::bill::{Bill, LineItem};

/// One row of the per-HSN tax breakdown table
///
/// Each component is summed over the group's line amounts independently,
/// never derived by dividing the rounded grand total, so rounding error
/// does not compound across groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsnGroup {
    /// The HSN/SAC code; the empty string is its own group
    pub hsn: String,
    pub taxable_value: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub igst_amount: Decimal,
}

impl HsnGroup {
    fn empty(hsn: String) -> Self {
        Self {
            hsn,
            taxable_value: Decimal::ZERO,
            cgst_amount: Decimal::ZERO,
            sgst_amount: Decimal::ZERO,
            igst_amount: Decimal::ZERO,
        }
    }

    /// Total tax for the group across all three components
    pub fn total_tax(&self) -> Decimal {
        self.cgst_amount + self.sgst_amount + self.igst_amount
    }
}

/// The computed totals of one bill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillTotals {
    /// Sum of all line amounts before tax
    pub sub_total: Decimal,
    /// The rate split applied
    pub split: TaxSplit,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub igst_amount: Decimal,
    /// Subtotal plus tax, rounded half-away-from-zero to a whole amount
    pub grand_total: Decimal,
    /// Per-HSN breakdown in first-seen order
    pub hsn_groups: Vec<HsnGroup>,
}

impl BillTotals {
    /// Total tax across all components, before rounding
    pub fn tax_total(&self) -> Decimal {
        self.cgst_amount + self.sgst_amount + self.igst_amount
    }
}

/// Aggregates line items under a GST percentage and transaction type
pub fn aggregate(
    items: &[LineItem],
    gst_percent: &str,
    transaction_type: TransactionType,
) -> BillTotals {
    let split = TaxSplit::for_transaction(parse_amount(gst_percent), transaction_type);

    let mut sub_total = Decimal::ZERO;
    let mut groups: Vec<HsnGroup> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let amount = item.amount();
        sub_total = sub_total.saturating_add(amount);

        let taxes = split.amounts_on(amount);
        let slot = *group_index.entry(item.hsn.clone()).or_insert_with(|| {
            groups.push(HsnGroup::empty(item.hsn.clone()));
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.taxable_value = group.taxable_value.saturating_add(amount);
        group.cgst_amount = group.cgst_amount.saturating_add(taxes.cgst);
        group.sgst_amount = group.sgst_amount.saturating_add(taxes.sgst);
        group.igst_amount = group.igst_amount.saturating_add(taxes.igst);
    }

    let taxes = split.amounts_on(sub_total);
    let grand_total = round_whole(sub_total.saturating_add(taxes.total()));

    BillTotals {
        sub_total,
        split,
        cgst_amount: taxes.cgst,
        sgst_amount: taxes.sgst,
        igst_amount: taxes.igst,
        grand_total,
        hsn_groups: groups,
    }
}

/// Aggregates a bill using its own tax configuration
pub fn aggregate_bill(bill: &Bill) -> BillTotals {
    aggregate(&bill.items, &bill.gst_percent, bill.transaction_type)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn arb_item() -> impl Strategy<Value = LineItem> {
        (
            prop_oneof![Just("8471"), Just("7318"), Just("")],
            0u32..10_000,
            0u32..100_000,
        )
            .prop_map(|(hsn, qty, rate_cents)| {
                LineItem::new(
                    "part",
                    hsn,
                    qty.to_string(),
                    "NOS",
                    (Decimal::new(rate_cents as i64, 2)).to_string(),
                )
            })
    }

    proptest! {
        #[test]
        fn sub_total_is_sum_of_line_amounts(items in prop::collection::vec(arb_item(), 0..12)) {
            let totals = aggregate(&items, "18", TransactionType::Intrastate);
            let expected: Decimal = items.iter().map(|i| i.amount()).sum();
            prop_assert_eq!(totals.sub_total, expected);
        }

        #[test]
        fn grand_total_equals_rounded_taxed_subtotal(
            items in prop::collection::vec(arb_item(), 0..12),
            interstate in any::<bool>()
        ) {
            let transaction_type = if interstate {
                TransactionType::Interstate
            } else {
                TransactionType::Intrastate
            };
            let totals = aggregate(&items, "18", transaction_type);
            let expected = core_kernel::round_whole(totals.sub_total * dec!(1.18));
            prop_assert_eq!(totals.grand_total, expected);
        }
    }
}
