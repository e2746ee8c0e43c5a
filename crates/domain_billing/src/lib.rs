//! Billing Domain - GST invoice aggregation and the bill save path
//!
//! This crate owns the computational heart of the billing tool:
//!
//! - The **bill aggregator**: taxable subtotal, CGST/SGST/IGST split,
//!   rounded grand total, and the per-HSN tax breakdown, as a pure
//!   function of a bill's line items and tax configuration.
//! - **Invoice numbering**: zero-padded sequential numbers derived from
//!   the existing bill collection, with a never-failing fallback.
//! - The **bill draft**: an explicit in-memory structure standing in for
//!   form state, persisted as the current session.
//! - The **save path**: duplicate-invoice rejection, the derived ledger
//!   entry, and automatic customer capture.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{aggregate, LineItem};
//! use core_kernel::TransactionType;
//!
//! let items = vec![LineItem::new("Bolt", "7318", "2", "NOS", "100")];
//! let totals = aggregate(&items, "18", TransactionType::Intrastate);
//! assert_eq!(totals.grand_total, rust_decimal_macros::dec!(236));
//! ```

pub mod aggregate;
pub mod bill;
pub mod draft;
pub mod entry;
pub mod error;
pub mod item;
pub mod numbering;
pub mod service;
pub mod words;

pub use aggregate::{aggregate, aggregate_bill, BillTotals, HsnGroup};
pub use bill::{Bill, CustomerType, LineItem};
pub use draft::{BillDraft, SESSION_RECORD_KEY};
pub use entry::LedgerEntry;
pub use error::BillingError;
pub use item::Item;
pub use numbering::{fallback_invoice_number, next_invoice_number};
pub use service::{BillingService, SavedBill};
pub use words::amount_in_words;
