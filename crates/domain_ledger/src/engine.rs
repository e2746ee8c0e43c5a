//! The ledger engine
//!
//! A pure function from a customer filter plus the full bill and payment
//! collections to the customer's ledger summary. Each bill's grand total
//! is recomputed from its line items at query time, so the summary always
//! agrees with what the bills themselves would print.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cmp::Reverse;

use domain_billing::{aggregate_bill, Bill};

use crate::payment::Payment;

/// The covered date span of a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// A customer's computed ledger position
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    /// Identity taken from the first matching bill, else the first
    /// matching payment
    pub customer_name: String,
    pub customer_gstin: String,
    pub total_sub_total: Decimal,
    /// Sum of the bills' rounded grand totals
    pub total_grand_total: Decimal,
    pub total_payment_amount: Decimal,
    /// Amount still owed; zero when the customer has paid ahead
    pub balance: Decimal,
    /// Amount paid beyond what was billed; zero when anything is owed
    pub advance: Decimal,
    /// Span of parseable bill and payment dates, `None` when there are none
    pub date_range: Option<DateRange>,
    /// Matching bills, newest first; undated bills sort last
    pub bills: Vec<Bill>,
    /// Matching payments, newest first; undated payments sort last
    pub payments: Vec<Payment>,
}

impl LedgerSummary {
    /// Number of bills included in the summary
    pub fn total_bills(&self) -> usize {
        self.bills.len()
    }

    /// Number of payments included in the summary
    pub fn total_payments(&self) -> usize {
        self.payments.len()
    }
}

/// The three-way outcome of a ledger query
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerOutcome {
    /// The filter was blank; nothing was searched
    EmptyFilter,
    /// No bill or payment matched the filter
    NoMatch,
    Summary(LedgerSummary),
}

/// Computes a customer's ledger summary
///
/// The filter is a case-insensitive substring over customer name and
/// GSTIN, applied to bills and payments alike. Exactly one of balance and
/// advance is nonzero (or both are zero when fully settled).
pub fn build_summary(filter: &str, bills: &[Bill], payments: &[Payment]) -> LedgerOutcome {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return LedgerOutcome::EmptyFilter;
    }

    let mut matched_bills: Vec<Bill> = bills
        .iter()
        .filter(|b| b.matches_customer(&needle))
        .cloned()
        .collect();
    let mut matched_payments: Vec<Payment> = payments
        .iter()
        .filter(|p| p.matches_customer(&needle))
        .cloned()
        .collect();

    if matched_bills.is_empty() && matched_payments.is_empty() {
        return LedgerOutcome::NoMatch;
    }

    let (customer_name, customer_gstin) = match matched_bills.first() {
        Some(bill) => (bill.customer_name.clone(), bill.customer_gst.clone()),
        None => {
            let p = &matched_payments[0];
            (p.customer_name.clone(), p.customer_gstin.clone())
        }
    };

    let mut total_sub_total = Decimal::ZERO;
    let mut total_grand_total = Decimal::ZERO;
    for bill in &matched_bills {
        let totals = aggregate_bill(bill);
        total_sub_total += totals.sub_total;
        total_grand_total += totals.grand_total;
    }
    let total_payment_amount: Decimal = matched_payments.iter().map(|p| p.amount).sum();

    let net = total_grand_total - total_payment_amount;
    let (balance, advance) = if net.is_sign_negative() {
        (Decimal::ZERO, -net)
    } else {
        (net, Decimal::ZERO)
    };

    let date_range = span_of(
        matched_bills
            .iter()
            .filter_map(|b| b.invoice_date())
            .chain(matched_payments.iter().filter_map(|p| p.payment_date())),
    );

    // stable sorts: same-date records keep insertion order
    matched_bills.sort_by_key(|b| Reverse(b.invoice_date()));
    matched_payments.sort_by_key(|p| Reverse(p.payment_date()));

    LedgerOutcome::Summary(LedgerSummary {
        customer_name,
        customer_gstin,
        total_sub_total,
        total_grand_total,
        total_payment_amount,
        balance,
        advance,
        date_range,
        bills: matched_bills,
        payments: matched_payments,
    })
}

fn span_of(dates: impl Iterator<Item = NaiveDate>) -> Option<DateRange> {
    let mut range: Option<DateRange> = None;
    for date in dates {
        range = Some(match range {
            None => DateRange { from: date, to: date },
            Some(r) => DateRange {
                from: r.from.min(date),
                to: r.to.max(date),
            },
        });
    }
    range
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::TransactionType;
    use domain_billing::{CustomerType, LineItem};
    use rust_decimal_macros::dec;

    fn bill(invoice_no: &str, date: &str, name: &str, qty: &str, rate: &str) -> Bill {
        Bill {
            id: None,
            invoice_no: invoice_no.to_string(),
            date: date.to_string(),
            customer_name: name.to_string(),
            customer_gst: "27AAEPM1234C1ZV".to_string(),
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
            items: vec![LineItem::new("Bolt", "7318", qty, "NOS", rate)],
            timestamp: 0,
        }
    }

    fn payment(name: &str, date: &str, amount: Decimal) -> Payment {
        Payment {
            id: None,
            customer_id: None,
            customer_name: name.to_string(),
            customer_gstin: "27AAEPM1234C1ZV".to_string(),
            date: date.to_string(),
            method: "cash".to_string(),
            amount,
            notes: String::new(),
            timestamp: 0,
        }
    }

    fn summary(outcome: LedgerOutcome) -> LedgerSummary {
        match outcome {
            LedgerOutcome::Summary(s) => s,
            other => panic!("expected a summary, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_filter_is_empty_filter() {
        assert_eq!(build_summary("  ", &[], &[]), LedgerOutcome::EmptyFilter);
    }

    #[test]
    fn test_no_match() {
        let bills = [bill("001", "2024-04-01", "Acme Traders", "1", "100")];
        assert_eq!(build_summary("globex", &bills, &[]), LedgerOutcome::NoMatch);
    }

    #[test]
    fn test_balance_owed() {
        // two bills of 118 each, one payment of 100
        let bills = [
            bill("001", "2024-04-01", "Acme Traders", "1", "100"),
            bill("002", "2024-04-10", "Acme Traders", "1", "100"),
        ];
        let payments = [payment("Acme Traders", "2024-04-15", dec!(100))];

        let s = summary(build_summary("acme", &bills, &payments));
        assert_eq!(s.total_sub_total, dec!(200));
        assert_eq!(s.total_grand_total, dec!(236));
        assert_eq!(s.total_payment_amount, dec!(100));
        assert_eq!(s.balance, dec!(136));
        assert_eq!(s.advance, dec!(0));
    }

    #[test]
    fn test_overpayment_shows_as_advance() {
        let bills = [bill("001", "2024-04-01", "Acme Traders", "1", "100")];
        let payments = [payment("Acme Traders", "2024-04-15", dec!(150))];

        let s = summary(build_summary("acme", &bills, &payments));
        assert_eq!(s.total_grand_total, dec!(118));
        assert_eq!(s.balance, dec!(0));
        assert_eq!(s.advance, dec!(32));
        // balance - advance always equals billed minus paid
        assert_eq!(
            s.balance - s.advance,
            s.total_grand_total - s.total_payment_amount
        );
    }

    #[test]
    fn test_thousand_billed_twelve_hundred_paid() {
        let mut b = bill("001", "2024-04-01", "Acme Traders", "1", "1000");
        b.gst_percent = "0".to_string();
        let payments = [payment("Acme Traders", "2024-04-15", dec!(1200))];

        let s = summary(build_summary("acme", &[b], &payments));
        assert_eq!(s.total_grand_total, dec!(1000));
        assert_eq!(s.balance, dec!(0));
        assert_eq!(s.advance, dec!(200));
        assert_eq!(s.total_bills(), 1);
        assert_eq!(s.total_payments(), 1);
    }

    #[test]
    fn test_payments_only_customer() {
        let payments = [payment("Acme Traders", "2024-04-15", dec!(500))];

        let s = summary(build_summary("acme", &[], &payments));
        assert_eq!(s.customer_name, "Acme Traders");
        assert_eq!(s.customer_gstin, "27AAEPM1234C1ZV");
        assert_eq!(s.total_grand_total, dec!(0));
        assert_eq!(s.advance, dec!(500));
    }

    #[test]
    fn test_identity_from_first_bill_in_insertion_order() {
        // the later-dated bill comes first in the collection; identity
        // follows insertion order, not date order
        let bills = [
            bill("002", "2024-04-10", "Acme Traders", "1", "100"),
            bill("001", "2024-04-01", "ACME TRADERS LLP", "1", "100"),
        ];
        let s = summary(build_summary("acme", &bills, &[]));
        assert_eq!(s.customer_name, "Acme Traders");
    }

    #[test]
    fn test_listings_sorted_newest_first_undated_last() {
        let bills = [
            bill("001", "2024-04-01", "Acme Traders", "1", "100"),
            bill("002", "not-a-date", "Acme Traders", "1", "100"),
            bill("003", "2024-04-10", "Acme Traders", "1", "100"),
        ];
        let s = summary(build_summary("acme", &bills, &[]));
        let order: Vec<_> = s.bills.iter().map(|b| b.invoice_no.as_str()).collect();
        assert_eq!(order, vec!["003", "001", "002"]);
    }

    #[test]
    fn test_date_range_spans_bills_and_payments() {
        let bills = [bill("001", "2024-04-05", "Acme Traders", "1", "100")];
        let payments = [
            payment("Acme Traders", "2024-03-20", dec!(50)),
            payment("Acme Traders", "2024-05-01", dec!(50)),
        ];
        let s = summary(build_summary("acme", &bills, &payments));
        let range = s.date_range.unwrap();
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        assert_eq!(range.to, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn test_date_range_none_when_nothing_parses() {
        let bills = [bill("001", "sometime", "Acme Traders", "1", "100")];
        let s = summary(build_summary("acme", &bills, &[]));
        assert!(s.date_range.is_none());
    }

    #[test]
    fn test_filter_matches_gstin_substring() {
        let bills = [bill("001", "2024-04-01", "Acme Traders", "1", "100")];
        let s = summary(build_summary("27aaepm", &bills, &[]));
        assert_eq!(s.bills.len(), 1);
    }
}
