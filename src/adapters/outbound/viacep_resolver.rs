//! ViaCEP Resolver
//!
//! Implements AddressResolver against the public ViaCEP directory
//! (https://viacep.com.br). One GET per resolution, no retries.
//!
//! ViaCEP quirk: an unknown code is signaled with HTTP 200 plus a sentinel
//! `erro` field in the body, so the payload has to be inspected even on a
//! successful status.

use crate::domain::entities::AddressRecord;
use crate::domain::ports::{AddressResolver, ResolveError};
use crate::domain::value_objects::PostalCode;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// The slice of the ViaCEP payload this service cares about.
///
/// Every other upstream field (complemento, ibge, gia, ddd, siafi, ...) is
/// dropped by deserialization. Missing fields default to empty strings;
/// a thin payload is not an error.
#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    /// Sentinel set by ViaCEP when the code does not exist. The value has
    /// been observed both as `true` and as `"true"`, so only presence counts.
    #[serde(default)]
    erro: Option<serde_json::Value>,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

/// reqwest-backed ViaCEP adapter.
pub struct ViaCepResolver {
    base_url: String,
    client: reqwest::Client,
}

impl ViaCepResolver {
    /// Create a resolver for the given base URL with a fixed request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn lookup_url(&self, code: &PostalCode) -> String {
        format!("{}/ws/{}/json/", self.base_url, code)
    }
}

#[async_trait]
impl AddressResolver for ViaCepResolver {
    async fn resolve(&self, code: &PostalCode) -> Result<AddressRecord, ResolveError> {
        let url = self.lookup_url(code);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            tracing::debug!("viacep returned status {} for {}", response.status(), code);
            return Err(ResolveError::NotFound);
        }

        let payload: ViaCepPayload = response
            .json()
            .await
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        if payload.erro.is_some() {
            tracing::debug!("viacep reported unknown code {}", code);
            return Err(ResolveError::NotFound);
        }

        Ok(AddressRecord {
            street: payload.logradouro,
            neighborhood: payload.bairro,
            city: payload.localidade,
            state: payload.uf,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(2);

    fn code(raw: &str) -> PostalCode {
        PostalCode::parse(raw).unwrap()
    }

    async fn mock_viacep(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/01001000/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    // ===== URL Building Tests =====

    #[test]
    fn test_lookup_url() {
        let resolver = ViaCepResolver::new("https://viacep.com.br", TIMEOUT).unwrap();
        assert_eq!(
            resolver.lookup_url(&code("01001000")),
            "https://viacep.com.br/ws/01001000/json/"
        );
    }

    #[test]
    fn test_lookup_url_trims_trailing_slash() {
        let resolver = ViaCepResolver::new("https://viacep.com.br/", TIMEOUT).unwrap();
        assert_eq!(
            resolver.lookup_url(&code("01001000")),
            "https://viacep.com.br/ws/01001000/json/"
        );
    }

    // ===== Projection Tests =====

    #[tokio::test]
    async fn test_resolve_projects_four_fields_and_drops_extras() {
        let server = mock_viacep(serde_json::json!({
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        }))
        .await;

        let resolver = ViaCepResolver::new(server.uri(), TIMEOUT).unwrap();
        let record = resolver.resolve(&code("01001000")).await.unwrap();

        assert_eq!(record.street, "Praça da Sé");
        assert_eq!(record.neighborhood, "Sé");
        assert_eq!(record.city, "São Paulo");
        assert_eq!(record.state, "SP");
        // The projection carries nothing else
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_resolve_defaults_missing_fields_to_empty() {
        let server = mock_viacep(serde_json::json!({
            "localidade": "Brasília",
            "uf": "DF"
        }))
        .await;

        let resolver = ViaCepResolver::new(server.uri(), TIMEOUT).unwrap();
        let record = resolver.resolve(&code("01001000")).await.unwrap();

        assert_eq!(record.street, "");
        assert_eq!(record.neighborhood, "");
        assert_eq!(record.city, "Brasília");
        assert_eq!(record.state, "DF");
    }

    // ===== Not-found Tests =====

    #[tokio::test]
    async fn test_resolve_erro_sentinel_bool() {
        let server = mock_viacep(serde_json::json!({ "erro": true })).await;

        let resolver = ViaCepResolver::new(server.uri(), TIMEOUT).unwrap();
        let err = resolver.resolve(&code("01001000")).await.unwrap_err();

        assert_eq!(err, ResolveError::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_erro_sentinel_string() {
        let server = mock_viacep(serde_json::json!({ "erro": "true" })).await;

        let resolver = ViaCepResolver::new(server.uri(), TIMEOUT).unwrap();
        let err = resolver.resolve(&code("01001000")).await.unwrap_err();

        assert_eq!(err, ResolveError::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/01001000/json/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let resolver = ViaCepResolver::new(server.uri(), TIMEOUT).unwrap();
        let err = resolver.resolve(&code("01001000")).await.unwrap_err();

        assert_eq!(err, ResolveError::NotFound);
    }

    // ===== Transport Failure Tests =====

    #[tokio::test]
    async fn test_resolve_connection_refused_is_transport() {
        // Nothing listens on the discard port
        let resolver = ViaCepResolver::new("http://127.0.0.1:9", TIMEOUT).unwrap();
        let err = resolver.resolve(&code("01001000")).await.unwrap_err();

        assert!(matches!(err, ResolveError::Transport(_)));
    }

    #[tokio::test]
    async fn test_resolve_non_json_body_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/01001000/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let resolver = ViaCepResolver::new(server.uri(), TIMEOUT).unwrap();
        let err = resolver.resolve(&code("01001000")).await.unwrap_err();

        assert!(matches!(err, ResolveError::Transport(_)));
    }

    #[tokio::test]
    async fn test_resolve_timeout_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/01001000/json/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"uf": "SP"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let resolver = ViaCepResolver::new(server.uri(), Duration::from_millis(50)).unwrap();
        let err = resolver.resolve(&code("01001000")).await.unwrap_err();

        assert!(matches!(err, ResolveError::Transport(_)));
    }
}
