//! cep-lookup Library
//!
//! This module exposes the CEP lookup components for use in integration
//! tests and as a library.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::inbound::ApiServer;
pub use adapters::outbound::{DashMapAddressCache, ViaCepResolver};
pub use application::{LookupError, LookupService};
pub use config::load_config;
pub use domain::entities::{AddressRecord, FacilityListing, LookupResult};
pub use domain::ports::{AddressCache, AddressResolver, ResolveError};
pub use domain::services::FacilityFinder;
pub use domain::value_objects::{PostalCode, Provenance};
