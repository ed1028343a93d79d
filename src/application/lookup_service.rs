//! Lookup Service - Main application use case
//!
//! Orchestrates the lookup pipeline: normalize the raw code, consult the
//! cache, fall back to the upstream resolver, and enrich the resolved
//! address with nearby parking facilities. This is the primary interface
//! for the inbound adapter.

use crate::domain::entities::LookupResult;
use crate::domain::ports::{AddressCache, AddressResolver, ResolveError};
use crate::domain::services::FacilityFinder;
use crate::domain::value_objects::{InvalidPostalCode, PostalCode, Provenance};
use std::sync::Arc;
use std::time::Instant;

/// Terminal failures of one lookup request.
///
/// All variants end the request; no partial result is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Input did not normalize to 8 digits. Reported to the caller,
    /// never retried, not an anomaly.
    #[error(transparent)]
    InvalidFormat(#[from] InvalidPostalCode),
    /// Upstream confirmed the code does not exist. Never cached.
    #[error("CEP não encontrado")]
    NotFound,
    /// Network-level failure talking to upstream. Never cached.
    #[error("falha ao consultar o serviço de CEP: {0}")]
    Transport(String),
}

impl From<ResolveError> for LookupError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound => Self::NotFound,
            ResolveError::Transport(msg) => Self::Transport(msg),
        }
    }
}

/// Lookup service - main application use case.
///
/// The pipeline per request:
/// 1. Normalize and validate the raw code
/// 2. Check the cache at `now`
/// 3. On miss, resolve upstream and store the result
/// 4. Enrich with facilities regardless of provenance
pub struct LookupService {
    cache: Arc<dyn AddressCache>,
    resolver: Arc<dyn AddressResolver>,
    facilities: FacilityFinder,
}

impl LookupService {
    pub fn new(
        cache: Arc<dyn AddressCache>,
        resolver: Arc<dyn AddressResolver>,
        facilities: FacilityFinder,
    ) -> Self {
        Self {
            cache,
            resolver,
            facilities,
        }
    }

    /// Resolve a raw postal code into a full lookup result.
    ///
    /// `now` is injected so cache expiry stays deterministic in tests.
    /// Concurrent misses for the same code may both reach upstream; the
    /// last writer to the cache wins (overwrite, not merge).
    pub async fn lookup(&self, raw: &str, now: Instant) -> Result<LookupResult, LookupError> {
        let code = PostalCode::parse(raw)?;

        let (record, source) = match self.cache.get(&code, now).await {
            Some(record) => {
                tracing::debug!("cache hit for {}", code);
                (record, Provenance::Cache)
            }
            None => {
                tracing::debug!("cache miss for {}, resolving upstream", code);
                let record = self.resolver.resolve(&code).await?;
                self.cache.put(code, record.clone(), now).await;
                (record, Provenance::Upstream)
            }
        };

        let facilities = self.facilities.find_nearby(&record);

        Ok(LookupResult {
            record,
            facilities,
            source,
        })
    }
}
