use async_trait::async_trait;
use reqwest::Client;

use crate::error::PeerError;

/// Existence probe against the usuarios service. Only wired when
/// `USUARIOS_SERVICE_URL` is configured; unlike the documentos peer this sits
/// on the mandatory path of Create, so its failures propagate.
#[async_trait]
pub trait UsuarioClient: Send + Sync {
    async fn exists(&self, usuario_id: i64) -> Result<bool, PeerError>;
}

#[derive(Clone)]
pub struct HttpUsuarioClient {
    client: Client,
    base_url: String,
}

impl HttpUsuarioClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl UsuarioClient for HttpUsuarioClient {
    async fn exists(&self, usuario_id: i64) -> Result<bool, PeerError> {
        let url = format!("{}/usuarios/{}", self.base_url, usuario_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| PeerError::Transport(err.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            return Err(PeerError::Status(status.as_u16()));
        }

        Ok(true)
    }
}
