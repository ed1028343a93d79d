mod dashmap_address_cache;
mod viacep_resolver;

pub use dashmap_address_cache::DashMapAddressCache;
pub use viacep_resolver::ViaCepResolver;
