use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // HTTP surface
    pub listen_addr: String,
    pub debug: bool,

    // Lookup cache
    pub cache_ttl_secs: u64,

    // Upstream postal-code directory
    pub upstream_url: String,
    pub upstream_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            debug: false,
            cache_ttl_secs: 3600,
            upstream_url: "https://viacep.com.br".to_string(),
            upstream_timeout_secs: 10,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let listen_addr = std::env::var("CEPLOOKUP_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let debug = std::env::var("DEBUG").is_ok();

    let cache_ttl_secs = std::env::var("CEPLOOKUP_CACHE_TTL_SECS")
        .unwrap_or_else(|_| "3600".to_string())
        .parse()
        .unwrap_or(3600);

    let upstream_url = std::env::var("CEPLOOKUP_UPSTREAM_URL")
        .unwrap_or_else(|_| "https://viacep.com.br".to_string());

    let upstream_timeout_secs = std::env::var("CEPLOOKUP_UPSTREAM_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .unwrap_or(10);

    Ok(Config {
        listen_addr,
        debug,
        cache_ttl_secs,
        upstream_url,
        upstream_timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.cache_ttl_secs, 3600);
        assert_eq!(cfg.upstream_url, "https://viacep.com.br");
        assert_eq!(cfg.upstream_timeout_secs, 10);
        assert!(!cfg.debug);
    }

    #[test]
    fn test_load_config_defaults() {
        // Only touches CEPLOOKUP_LISTEN_ADDR; the other vars are exercised
        // by their own tests and may race when asserted here.
        std::env::remove_var("CEPLOOKUP_LISTEN_ADDR");

        let cfg = load_config().unwrap();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_load_config_with_custom_ttl() {
        std::env::set_var("CEPLOOKUP_CACHE_TTL_SECS", "600");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.cache_ttl_secs, 600);
        std::env::remove_var("CEPLOOKUP_CACHE_TTL_SECS");
    }

    #[test]
    fn test_load_config_with_custom_upstream() {
        std::env::set_var("CEPLOOKUP_UPSTREAM_URL", "http://localhost:9090");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.upstream_url, "http://localhost:9090");
        std::env::remove_var("CEPLOOKUP_UPSTREAM_URL");
    }

    #[test]
    fn test_load_config_parse_error_uses_default() {
        std::env::set_var("CEPLOOKUP_UPSTREAM_TIMEOUT_SECS", "not_a_number");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.upstream_timeout_secs, 10); // default
        std::env::remove_var("CEPLOOKUP_UPSTREAM_TIMEOUT_SECS");
    }

    #[test]
    fn test_config_clone_and_debug() {
        let cfg = Config::default();
        let cloned = cfg.clone();
        assert_eq!(cfg.listen_addr, cloned.listen_addr);

        let debug_str = format!("{:?}", cfg);
        assert!(debug_str.contains("listen_addr"));
        assert!(debug_str.contains("0.0.0.0:8080"));
    }
}
