//! Core Kernel - Foundational types for the billing ledger system
//!
//! This crate provides the building blocks used across all domain modules:
//! - Fail-soft numeric parsing with precise decimal arithmetic
//! - GST tax-split types for intrastate/interstate transactions
//! - The record-store port consumed by every domain service

pub mod numeric;
pub mod ports;
pub mod tax;

pub use numeric::{epoch_millis, parse_amount, parse_iso_date, round_whole};
pub use ports::{Collection, RecordKey, RecordStore, StoreError};
pub use tax::{TaxAmounts, TaxSplit, TransactionType};
