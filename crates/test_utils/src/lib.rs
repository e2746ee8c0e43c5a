//! Shared builders and fixtures for tests across the workspace

pub mod builders;
pub mod fixtures;

pub use builders::{BillBuilder, CustomerBuilder, PaymentBuilder};
pub use fixtures::{backup_document, seeded_store};
