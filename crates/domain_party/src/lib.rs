//! Party Domain - customers and company information
//!
//! Customers are a loosely-coupled reference used for autofill and the
//! management view: bills and payments carry their own denormalized
//! customer snapshot, so deleting a customer never corrupts history.
//! Company information is a singleton record.

pub mod company;
pub mod customer;
pub mod error;
pub mod service;

pub use company::{CompanyInfo, COMPANY_RECORD_KEY};
pub use customer::Customer;
pub use error::PartyError;
pub use service::PartyService;
