//! Address Resolver Port
//!
//! Defines the interface to the external postal-code directory.

use crate::domain::entities::AddressRecord;
use crate::domain::value_objects::PostalCode;
use async_trait::async_trait;

/// Resolution failures, classified at the resolver boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The upstream directory confirmed the code does not exist.
    #[error("CEP não encontrado")]
    NotFound,
    /// A network-level failure (timeout, DNS, refused connection, bad body).
    #[error("falha ao consultar o serviço de CEP: {0}")]
    Transport(String),
}

/// Lookup against the external postal-code directory.
///
/// Implementations issue a single attempt per call; retry policy is the
/// caller's concern. Substituting a different directory service only
/// requires reimplementing this trait.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(&self, code: &PostalCode) -> Result<AddressRecord, ResolveError>;
}
