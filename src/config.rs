use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

/// Runtime configuration, loaded once in `main` and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub documentos_service_url: String,
    /// When unset, the usuario existence check on Create is skipped.
    pub usuarios_service_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            documentos_service_url: get_env("DOCUMENTOS_SERVICE_URL")?,
            usuarios_service_url: env::var("USUARIOS_SERVICE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}
