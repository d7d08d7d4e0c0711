//! Parcel domain model.
//!
//! # Responsibility
//! - Define the parcel record persisted by the repository layer.
//! - Provide lifecycle helpers for the status state machine.
//!
//! # Invariants
//! - `number` is storage-assigned; `0` marks a parcel not yet persisted.
//! - `created_at` is an RFC3339 UTC timestamp, set once at construction.
//! - The intended status order is `registered -> sent -> delivered`.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Stable storage-assigned identifier for a parcel.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ParcelNumber = i64;

/// Delivery lifecycle state of a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Accepted into the system; address and deletion still allowed.
    Registered,
    /// Handed to the carrier; address is frozen.
    Sent,
    /// Arrived at the recipient; terminal state.
    Delivered,
}

impl ParcelStatus {
    /// Storage representation, also the external wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Parses the storage representation. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "registered" => Some(Self::Registered),
            "sent" => Some(Self::Sent),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }

    /// The single legal successor in the delivery workflow, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }
}

impl std::fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trackable shipment with a lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Storage-assigned number; `0` until the parcel has been added.
    pub number: ParcelNumber,
    /// Owning client id; never mutated by this layer.
    pub client: i64,
    /// Current lifecycle state.
    pub status: ParcelStatus,
    /// Free-text delivery address.
    pub address: String,
    /// RFC3339 UTC creation timestamp, immutable after construction.
    pub created_at: String,
}

impl Parcel {
    /// Creates an unsaved parcel in the `registered` state, stamped now.
    pub fn new(client: i64, address: impl Into<String>) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Returns whether the address may still be changed.
    pub fn is_mutable(&self) -> bool {
        self.status == ParcelStatus::Registered
    }
}
