//! Per-entity duplicate guards for restore
//!
//! Each entity defines its own notion of "the same record"; restore only
//! needs them composed over the existing collection. Note the asymmetry
//! for bills: a live save rejects on invoice-number collision alone,
//! while restore compares the whole structure, so a backup containing a
//! different bill under a reused number is still imported.

use domain_billing::{Bill, Item, LedgerEntry};
use domain_ledger::Payment;
use domain_party::Customer;

pub fn bill_exists(existing: &[Bill], candidate: &Bill) -> bool {
    existing.iter().any(|b| b.is_same_record(candidate))
}

pub fn customer_exists(existing: &[Customer], candidate: &Customer) -> bool {
    existing.iter().any(|c| c.is_same_record(candidate))
}

pub fn item_exists(existing: &[Item], candidate: &Item) -> bool {
    existing.iter().any(|i| i.is_same_record(candidate))
}

pub fn payment_exists(existing: &[Payment], candidate: &Payment) -> bool {
    existing.iter().any(|p| p.is_same_record(candidate))
}

pub fn ledger_entry_exists(existing: &[LedgerEntry], candidate: &LedgerEntry) -> bool {
    existing.iter().any(|e| e.is_same_record(candidate))
}
