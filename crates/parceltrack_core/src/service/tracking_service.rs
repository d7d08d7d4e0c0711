//! Parcel tracking use-case service.
//!
//! # Responsibility
//! - Provide lifecycle entry points: register, send, deliver, re-address,
//!   delete, and client-scoped listing.
//! - Enforce the workflow rules the repository leaves to its callers.
//!
//! # Invariants
//! - Status only advances `registered -> sent -> delivered`.
//! - Address changes and deletion are allowed only while `registered`.
//! - The service never bypasses the repository contract.

use crate::model::parcel::{Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_repo::{ParcelRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Lifecycle policy violations and pass-through repository failures.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    AddressFrozen {
        number: ParcelNumber,
        status: ParcelStatus,
    },
    InvalidTransition {
        number: ParcelNumber,
        from: ParcelStatus,
        to: ParcelStatus,
    },
    DeleteForbidden {
        number: ParcelNumber,
        status: ParcelStatus,
    },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::AddressFrozen { number, status } => write!(
                f,
                "parcel {number} address is frozen in status `{status}`"
            ),
            Self::InvalidTransition { number, from, to } => write!(
                f,
                "parcel {number} cannot move from `{from}` to `{to}`"
            ),
            Self::DeleteForbidden { number, status } => write!(
                f,
                "parcel {number} cannot be deleted in status `{status}`"
            ),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Lifecycle service wrapper over a parcel repository.
pub struct TrackingService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> TrackingService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel for a client and returns it with the
    /// storage-assigned number.
    pub fn register(&self, client: i64, address: impl Into<String>) -> ServiceResult<Parcel> {
        let mut parcel = Parcel::new(client, address);
        parcel.number = self.repo.add(&parcel)?;
        info!(
            "event=parcel_register module=service status=ok number={} client={}",
            parcel.number, parcel.client
        );
        Ok(parcel)
    }

    /// Fetches one parcel by number.
    pub fn get(&self, number: ParcelNumber) -> ServiceResult<Parcel> {
        Ok(self.repo.get(number)?)
    }

    /// Lists all parcels of one client, unordered.
    pub fn parcels_for_client(&self, client: i64) -> ServiceResult<Vec<Parcel>> {
        Ok(self.repo.get_by_client(client)?)
    }

    /// Changes the delivery address of a still-registered parcel.
    ///
    /// # Errors
    /// - `AddressFrozen` once the parcel has been sent or delivered.
    pub fn update_address(&self, number: ParcelNumber, address: &str) -> ServiceResult<()> {
        let parcel = self.repo.get(number)?;
        if !parcel.is_mutable() {
            return Err(ServiceError::AddressFrozen {
                number,
                status: parcel.status,
            });
        }
        self.repo.set_address(number, address)?;
        Ok(())
    }

    /// Marks a registered parcel as sent.
    pub fn send(&self, number: ParcelNumber) -> ServiceResult<()> {
        self.advance(number, ParcelStatus::Sent)
    }

    /// Marks a sent parcel as delivered.
    pub fn deliver(&self, number: ParcelNumber) -> ServiceResult<()> {
        self.advance(number, ParcelStatus::Delivered)
    }

    /// Deletes a parcel that has not yet left the `registered` state.
    ///
    /// # Errors
    /// - `DeleteForbidden` for in-flight or delivered parcels.
    pub fn delete(&self, number: ParcelNumber) -> ServiceResult<()> {
        let parcel = self.repo.get(number)?;
        if !parcel.is_mutable() {
            return Err(ServiceError::DeleteForbidden {
                number,
                status: parcel.status,
            });
        }
        self.repo.delete(number)?;
        Ok(())
    }

    fn advance(&self, number: ParcelNumber, to: ParcelStatus) -> ServiceResult<()> {
        let parcel = self.repo.get(number)?;
        if parcel.status.next() != Some(to) {
            return Err(ServiceError::InvalidTransition {
                number,
                from: parcel.status,
                to,
            });
        }
        self.repo.set_status(number, to)?;
        info!(
            "event=parcel_status module=service status=ok number={number} to={to}"
        );
        Ok(())
    }
}
