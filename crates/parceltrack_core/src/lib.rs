//! Core persistence layer for parcel tracking.
//! This crate is the single source of truth for parcel lifecycle rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::parcel::{Parcel, ParcelNumber, ParcelStatus};
pub use repo::parcel_repo::{ParcelRepository, RepoError, RepoResult, SqliteParcelStore};
pub use service::tracking_service::{ServiceError, ServiceResult, TrackingService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
