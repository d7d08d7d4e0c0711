//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for parcel storage.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - The store is a pure mirror of storage: writes are unconditional and
//!   lifecycle policy lives in the service layer above.
//! - Repository APIs return a semantic `NotFound` in addition to DB
//!   transport errors.

pub mod parcel_repo;
