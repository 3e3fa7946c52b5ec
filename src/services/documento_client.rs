use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::PeerError;
use crate::models::documento::Documento;

/// Wire shape returned by the documentos service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentoDto {
    pub id: i64,
    pub extension: String,
    pub nombre_archivo: String,
    pub solicitud_id: i64,
}

impl From<DocumentoDto> for Documento {
    fn from(dto: DocumentoDto) -> Self {
        Self {
            id: dto.id,
            nombre_archivo: dto.nombre_archivo,
            extension: dto.extension,
        }
    }
}

/// Client contract against the documentos service. Both operations are
/// single-attempt; callers decide whether a failure is recoverable.
#[async_trait]
pub trait DocumentoClient: Send + Sync {
    async fn get_by_solicitud_id(&self, solicitud_id: i64) -> Result<Vec<Documento>, PeerError>;
    async fn delete_by_solicitud_id(&self, solicitud_id: i64) -> Result<(), PeerError>;
}

#[derive(Clone)]
pub struct HttpDocumentoClient {
    client: Client,
    base_url: String,
}

impl HttpDocumentoClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl DocumentoClient for HttpDocumentoClient {
    async fn get_by_solicitud_id(&self, solicitud_id: i64) -> Result<Vec<Documento>, PeerError> {
        let url = format!("{}/documentos?solicitud_id={}", self.base_url, solicitud_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| PeerError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PeerError::Status(status.as_u16()));
        }

        // No partial results: either the full list decodes or the call failed.
        let documentos = response
            .json::<Vec<DocumentoDto>>()
            .await
            .map_err(|err| PeerError::Decode(err.to_string()))?;

        Ok(documentos.into_iter().map(Into::into).collect())
    }

    async fn delete_by_solicitud_id(&self, solicitud_id: i64) -> Result<(), PeerError> {
        let url = format!("{}/documentos/solicitud/{}", self.base_url, solicitud_id);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|err| PeerError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PeerError::Status(status.as_u16()));
        }

        Ok(())
    }
}
