//! DashMap Address Cache
//!
//! Implements AddressCache using DashMap for lock-free concurrent access.

use crate::domain::entities::{AddressRecord, CacheEntry};
use crate::domain::ports::AddressCache;
use crate::domain::value_objects::PostalCode;
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// DashMap-backed, time-bounded address cache.
///
/// DashMap shards give per-key atomicity between `get` and `put`, so a
/// reader never observes a torn entry. There is no capacity bound and no
/// eviction: stale entries are ignored on read and replaced on the next
/// successful resolution of the same code.
pub struct DashMapAddressCache {
    entries: DashMap<PostalCode, CacheEntry>,
    ttl: Duration,
}

impl DashMapAddressCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored entries, fresh or stale.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl AddressCache for DashMapAddressCache {
    async fn get(&self, code: &PostalCode, now: Instant) -> Option<AddressRecord> {
        self.entries.get(code).and_then(|entry| {
            if entry.is_fresh(now, self.ttl) {
                Some(entry.record.clone())
            } else {
                None
            }
        })
    }

    async fn put(&self, code: PostalCode, record: AddressRecord, now: Instant) {
        self.entries.insert(code, CacheEntry::new(record, now));
    }
}
