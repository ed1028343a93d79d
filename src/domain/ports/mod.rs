mod address_cache;
mod address_resolver;

pub use address_cache::AddressCache;
pub use address_resolver::{AddressResolver, ResolveError};
