//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the CEP lookup domain.
//! They have no external dependencies and contain only business logic.

use crate::domain::value_objects::Provenance;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// A resolved address, projected down to the four fields the service serves.
///
/// ViaCEP returns a much larger payload (complement, IBGE/SIAFI codes, area
/// code, ...); only these fields survive the projection. Every field is
/// always present, possibly as an empty string. The serde renames pin the
/// wire names used both by the upstream directory and by our own responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Street name (logradouro)
    #[serde(rename = "logradouro", default)]
    pub street: String,
    /// Neighborhood (bairro)
    #[serde(rename = "bairro", default)]
    pub neighborhood: String,
    /// City (localidade)
    #[serde(rename = "localidade", default)]
    pub city: String,
    /// Two-letter state code (uf)
    #[serde(rename = "uf", default)]
    pub state: String,
}

/// A cached address with its creation timestamp.
///
/// Entries are overwritten, never merged, and never actively evicted:
/// an expired entry is simply ignored on read until a fresh resolution
/// replaces it.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub record: AddressRecord,
    pub created_at: Instant,
}

impl CacheEntry {
    pub fn new(record: AddressRecord, now: Instant) -> Self {
        Self {
            record,
            created_at: now,
        }
    }

    /// Whether this entry is still within its TTL at `now`.
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) < ttl
    }
}

/// One synthesized parking facility near a resolved address.
///
/// Ephemeral: recomputed on every request, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityListing {
    /// Name drawn from the fixed fictitious pool
    pub name: String,
    /// Distance in meters, always a multiple of 100
    pub distance_m: u32,
    /// Currently available spaces
    pub available_spaces: u32,
    /// Hourly price in whole currency units
    pub hourly_price: u32,
}

/// The response envelope for one lookup.
#[derive(Debug, Clone)]
pub struct LookupResult {
    pub record: AddressRecord,
    pub facilities: Vec<FacilityListing>,
    pub source: Provenance,
}
