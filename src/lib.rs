pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use reqwest::Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::database::solicitud_store::PgSolicitudStore;
use crate::services::documento_client::HttpDocumentoClient;
use crate::services::solicitud_service::SolicitudService;
use crate::services::usuario_client::{HttpUsuarioClient, UsuarioClient};

/// Every peer call is bounded by this timeout; one attempt, no retries.
const PEER_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub solicitud_service: SolicitudService,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(PEER_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client for peer services");

        let store = Arc::new(PgSolicitudStore::new(pool));
        let documentos = Arc::new(HttpDocumentoClient::new(
            http_client.clone(),
            config.documentos_service_url.clone(),
        ));
        let usuarios = config.usuarios_service_url.clone().map(|url| {
            Arc::new(HttpUsuarioClient::new(http_client.clone(), url)) as Arc<dyn UsuarioClient>
        });

        let solicitud_service = SolicitudService::new(store, documentos, usuarios);

        Self { solicitud_service }
    }
}
