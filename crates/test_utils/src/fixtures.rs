//! Ready-made fixtures: a seeded store and a well-formed backup document

use serde_json::{json, Value};
use std::sync::Arc;

use core_kernel::{Collection, RecordStore};
use domain_billing::Bill;
use domain_ledger::Payment;
use domain_party::Customer;
use infra_store::MemoryStore;

use crate::builders::{BillBuilder, CustomerBuilder, PaymentBuilder};

/// A store pre-populated with one customer, two of their bills, and one
/// payment, all mutually consistent
pub async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());

    let customer = CustomerBuilder::new().build();
    store
        .add(
            Collection::Customers,
            serde_json::to_value(&customer).unwrap(),
        )
        .await
        .unwrap();

    for bill in [
        BillBuilder::new().invoice_no("001").build(),
        BillBuilder::new()
            .invoice_no("002")
            .date("2024-04-10")
            .build(),
    ] {
        store
            .add(Collection::Bills, serde_json::to_value(&bill).unwrap())
            .await
            .unwrap();
    }

    let payment = PaymentBuilder::new().build();
    store
        .add(
            Collection::CustomerPayments,
            serde_json::to_value(&payment).unwrap(),
        )
        .await
        .unwrap();

    store
}

/// A well-formed backup document with the given records and empty
/// remaining sections
pub fn backup_document(bills: &[Bill], customers: &[Customer], payments: &[Payment]) -> Value {
    json!({
        "bills": bills,
        "customers": customers,
        "items": [],
        "customerPayments": payments,
        "ledger": [],
        "companyInfo": [],
        "timestamp": "2024-04-01T10:00:00Z",
        "version": "1.0",
    })
}
