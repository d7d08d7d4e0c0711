//! Domain model for the parcel delivery lifecycle.
//!
//! # Responsibility
//! - Define the canonical `Parcel` record and its status enumeration.
//!
//! # Invariants
//! - `number` is assigned by storage exactly once and never reused.
//! - Status strings on the wire are `registered`, `sent`, `delivered`.

pub mod parcel;
