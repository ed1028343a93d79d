//! CEP Lookup API Server
//!
//! HTTP surface of the service. Thin presentation layer: handlers translate
//! between the wire contract and the application service, nothing more.

use crate::application::{LookupError, LookupService};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Successful lookup response.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub dados: crate::domain::entities::AddressRecord,
    pub estacionamentos: Vec<FacilityDto>,
    pub fonte: crate::domain::value_objects::Provenance,
}

/// One parking facility as presented on the wire.
///
/// Distance and price keep the original presentation strings
/// ("400 metros", "R$ 8,00"); the numeric values live in the domain type.
#[derive(Debug, Serialize)]
pub struct FacilityDto {
    pub nome: String,
    pub distancia: String,
    pub vagas_disponiveis: u32,
    pub preco_hora: String,
}

impl From<crate::domain::entities::FacilityListing> for FacilityDto {
    fn from(listing: crate::domain::entities::FacilityListing) -> Self {
        Self {
            nome: listing.name,
            distancia: format!("{} metros", listing.distance_m),
            vagas_disponiveis: listing.available_spaces,
            preco_hora: format!("R$ {},00", listing.hourly_price),
        }
    }
}

impl From<crate::domain::entities::LookupResult> for LookupResponse {
    fn from(result: crate::domain::entities::LookupResult) -> Self {
        Self {
            dados: result.record,
            estacionamentos: result
                .facilities
                .into_iter()
                .map(FacilityDto::from)
                .collect(),
            fonte: result.source,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub erro: String,
}

/// Payload-size comparison response.
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub resposta_original: serde_json::Value,
    pub resposta_filtrada: serde_json::Value,
    pub tamanho_original: usize,
    pub tamanho_filtrado: usize,
    pub economia_percentual: f64,
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// API server state shared across handlers.
#[derive(Clone)]
pub struct ApiState {
    pub lookups: Arc<LookupService>,
}

/// The HTTP server for the lookup API.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
}

impl ApiServer {
    pub fn new(listen_addr: String, lookups: Arc<LookupService>) -> Self {
        Self {
            listen_addr,
            state: ApiState { lookups },
        }
    }

    /// Build the router. Exposed so tests can drive it without a socket.
    pub fn router(state: ApiState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/api/consulta-cep/:cep", get(consulta_cep_handler))
            .route("/api/comparacao", get(comparacao_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the API server until the process exits.
    pub async fn run(&self) -> anyhow::Result<()> {
        let app = Self::router(self.state.clone());

        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("CEP lookup API listening on {}", self.listen_addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

// Handler functions

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn consulta_cep_handler(
    State(state): State<ApiState>,
    Path(cep): Path<String>,
) -> Response {
    match state.lookups.lookup(&cep, Instant::now()).await {
        Ok(result) => (StatusCode::OK, Json(LookupResponse::from(result))).into_response(),
        Err(err) => {
            let status = match &err {
                LookupError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
                LookupError::NotFound => StatusCode::NOT_FOUND,
                LookupError::Transport(_) => StatusCode::BAD_GATEWAY,
            };
            if let LookupError::Transport(msg) = &err {
                tracing::warn!("upstream failure for {}: {}", cep, msg);
            }
            (
                status,
                Json(ErrorResponse {
                    erro: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn comparacao_handler() -> impl IntoResponse {
    Json(payload_comparison())
}

/// Compare the full ViaCEP example payload against the filtered projection.
///
/// Pure computation on hardcoded literals; demonstrates how much smaller the
/// projected response is.
pub fn payload_comparison() -> ComparisonResponse {
    let resposta_original = serde_json::json!({
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
    });

    let resposta_filtrada = serde_json::json!({
        "logradouro": "Praça da Sé",
        "bairro": "Sé",
        "localidade": "São Paulo",
        "uf": "SP"
    });

    let tamanho_original = resposta_original.to_string().len();
    let tamanho_filtrado = resposta_filtrada.to_string().len();
    let economia = 1.0 - tamanho_filtrado as f64 / tamanho_original as f64;

    ComparisonResponse {
        resposta_original,
        resposta_filtrada,
        tamanho_original,
        tamanho_filtrado,
        economia_percentual: (economia * 100.0 * 100.0).round() / 100.0,
    }
}
