//! Store infrastructure - the in-memory record-store adapter
//!
//! Implements the `RecordStore` port from `core_kernel` over plain memory:
//! named collections of JSON documents with auto-increment keys and
//! index lookups evaluated against document fields. This is the store the
//! domain services run against in a single-user deployment, and it
//! doubles as the test adapter for every service suite.

pub mod memory;

pub use memory::MemoryStore;
