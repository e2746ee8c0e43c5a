//! Ledger flow tests: bills and payments in, balance summary out

use rust_decimal_macros::dec;
use std::sync::Arc;

use domain_billing::{BillDraft, BillingService, LineItem};
use domain_ledger::{LedgerOutcome, LedgerService, Payment, PaymentService};
use infra_store::MemoryStore;

fn draft(invoice_no: &str, name: &str, gst: &str, qty: &str, rate: &str) -> BillDraft {
    BillDraft {
        invoice_no: invoice_no.to_string(),
        date: "2024-04-01".to_string(),
        customer_name: name.to_string(),
        customer_gst: gst.to_string(),
        gst_percent: "18".to_string(),
        items: vec![LineItem::new("Bolt", "7318", qty, "NOS", rate)],
        ..BillDraft::default()
    }
}

fn payment(name: &str, gstin: &str, date: &str, amount: rust_decimal::Decimal) -> Payment {
    Payment {
        id: None,
        customer_id: None,
        customer_name: name.to_string(),
        customer_gstin: gstin.to_string(),
        date: date.to_string(),
        method: "cash".to_string(),
        amount,
        notes: String::new(),
        timestamp: 0,
    }
}

struct Fixture {
    billing: BillingService,
    payments: PaymentService,
    ledger: LedgerService,
}

fn fixture() -> Fixture {
    let store = Arc::new(MemoryStore::new());
    Fixture {
        billing: BillingService::new(store.clone()),
        payments: PaymentService::new(store.clone()),
        ledger: LedgerService::new(store),
    }
}

fn summary(outcome: LedgerOutcome) -> domain_ledger::LedgerSummary {
    match outcome {
        LedgerOutcome::Summary(s) => s,
        other => panic!("expected a summary, got {:?}", other),
    }
}

#[tokio::test]
async fn test_end_to_end_balance() {
    let f = fixture();

    f.billing
        .save_bill(&draft("001", "Acme Traders", "27AAEPM1234C1ZV", "2", "100"))
        .await
        .unwrap();
    f.billing
        .save_bill(&draft("002", "Acme Traders", "27AAEPM1234C1ZV", "1", "50"))
        .await
        .unwrap();
    f.payments
        .record_payment(&payment(
            "Acme Traders",
            "27AAEPM1234C1ZV",
            "2024-04-15",
            dec!(200),
        ))
        .await
        .unwrap();

    // 236 + 59 billed, 200 received
    let s = summary(f.ledger.customer_ledger("acme").await.unwrap());
    assert_eq!(s.total_grand_total, dec!(295));
    assert_eq!(s.total_payment_amount, dec!(200));
    assert_eq!(s.balance, dec!(95));
    assert_eq!(s.advance, dec!(0));
    assert_eq!(s.bills.len(), 2);
    assert_eq!(s.payments.len(), 1);
}

#[tokio::test]
async fn test_other_customers_excluded() {
    let f = fixture();

    f.billing
        .save_bill(&draft("001", "Acme Traders", "27AAEPM1234C1ZV", "1", "100"))
        .await
        .unwrap();
    f.billing
        .save_bill(&draft("002", "Globex", "07BBFQN5678D2ZW", "1", "1000"))
        .await
        .unwrap();

    let s = summary(f.ledger.customer_ledger("acme").await.unwrap());
    assert_eq!(s.bills.len(), 1);
    assert_eq!(s.total_grand_total, dec!(118));
}

#[tokio::test]
async fn test_empty_filter_and_no_match_outcomes() {
    let f = fixture();
    assert_eq!(
        f.ledger.customer_ledger("").await.unwrap(),
        LedgerOutcome::EmptyFilter
    );
    assert_eq!(
        f.ledger.customer_ledger("acme").await.unwrap(),
        LedgerOutcome::NoMatch
    );
}

#[tokio::test]
async fn test_payment_listing_filter() {
    let f = fixture();
    f.payments
        .record_payment(&payment(
            "Acme Traders",
            "27AAEPM1234C1ZV",
            "2024-04-15",
            dec!(100),
        ))
        .await
        .unwrap();
    f.payments
        .record_payment(&payment("Globex", "07BBFQN5678D2ZW", "2024-04-16", dec!(50)))
        .await
        .unwrap();

    assert_eq!(f.payments.list_payments("").await.len(), 2);
    assert_eq!(f.payments.list_payments("globex").await.len(), 1);
    assert_eq!(f.payments.list_payments("27aaepm").await.len(), 1);
}

#[tokio::test]
async fn test_deleting_payment_restores_balance() {
    let f = fixture();
    f.billing
        .save_bill(&draft("001", "Acme Traders", "27AAEPM1234C1ZV", "1", "100"))
        .await
        .unwrap();
    let key = f
        .payments
        .record_payment(&payment(
            "Acme Traders",
            "27AAEPM1234C1ZV",
            "2024-04-15",
            dec!(118),
        ))
        .await
        .unwrap();

    let s = summary(f.ledger.customer_ledger("acme").await.unwrap());
    assert_eq!(s.balance, dec!(0));

    f.payments.delete_payment(key).await.unwrap();
    let s = summary(f.ledger.customer_ledger("acme").await.unwrap());
    assert_eq!(s.balance, dec!(118));
}
