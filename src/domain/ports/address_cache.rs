//! Address Cache Port
//!
//! Defines the interface for the time-bounded postal-code cache.

use crate::domain::entities::AddressRecord;
use crate::domain::value_objects::PostalCode;
use async_trait::async_trait;
use std::time::Instant;

/// Time-bounded mapping from normalized postal code to its last resolution.
///
/// `now` is passed in rather than read inside the implementation so expiry
/// behavior stays testable without sleeping. An expired entry behaves
/// exactly like an absent one; implementations are free to leave it in
/// place until the next `put` overwrites it.
#[async_trait]
pub trait AddressCache: Send + Sync {
    /// Get the record for a code, if a fresh entry exists at `now`.
    async fn get(&self, code: &PostalCode, now: Instant) -> Option<AddressRecord>;

    /// Store a record for a code, unconditionally overwriting any previous
    /// entry and stamping it with `now`.
    async fn put(&self, code: PostalCode, record: AddressRecord, now: Instant);
}
