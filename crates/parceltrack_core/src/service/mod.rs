//! Use-case services layered above the repository.
//!
//! # Responsibility
//! - Orchestrate repository calls into lifecycle-aware operations.
//! - Enforce the business rules the store deliberately does not.

pub mod tracking_service;
