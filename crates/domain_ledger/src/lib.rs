//! Ledger Domain - customer payments and the balance summary
//!
//! This crate answers "where does this customer stand": it records
//! payments against customers and derives, on demand, a per-customer
//! summary of billed totals, received payments, and the outstanding
//! balance or advance. The summary is computed fresh from the bill and
//! payment collections on every query; nothing here is incrementally
//! maintained, so it cannot drift from the underlying records.

pub mod engine;
pub mod error;
pub mod payment;
pub mod service;

pub use engine::{build_summary, DateRange, LedgerOutcome, LedgerSummary};
pub use error::LedgerError;
pub use payment::Payment;
pub use service::{LedgerService, PaymentService, QuerySequence};
