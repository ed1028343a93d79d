//! cep-lookup - CEP lookup service with hexagonal architecture
//!
//! This is the composition root that wires together all the components.

use cep_lookup::adapters::inbound::ApiServer;
use cep_lookup::adapters::outbound::{DashMapAddressCache, ViaCepResolver};
use cep_lookup::application::LookupService;
use cep_lookup::config::load_config;
use cep_lookup::domain::services::FacilityFinder;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting cep-lookup listen={} upstream={} cache_ttl={}s",
        cfg.listen_addr,
        cfg.upstream_url,
        cfg.cache_ttl_secs
    );

    // ===== COMPOSITION ROOT =====
    // Wire up all adapters and services

    // 1. Create outbound adapters

    // Lookup cache (DashMap)
    let cache = Arc::new(DashMapAddressCache::new(Duration::from_secs(
        cfg.cache_ttl_secs,
    )));

    // Postal-code directory resolver (ViaCEP over reqwest)
    let resolver = Arc::new(ViaCepResolver::new(
        cfg.upstream_url.clone(),
        Duration::from_secs(cfg.upstream_timeout_secs),
    )?);

    // 2. Create application service
    let lookups = Arc::new(LookupService::new(
        cache,
        resolver,
        FacilityFinder::default(),
    ));

    // 3. Create inbound adapter and run
    let server = ApiServer::new(cfg.listen_addr, lookups);

    server.run().await
}
