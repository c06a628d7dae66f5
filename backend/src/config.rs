//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::storage::sheets_client::{ServiceAccountCredentials, DEFAULT_API_BASE, DEFAULT_TOKEN_URI};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid BIND_ADDR {0:?}")]
    InvalidBindAddr(String),

    #[error("unknown STORAGE {0:?} (expected \"sheets\" or \"memory\")")]
    UnknownStorage(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    /// Google Sheets through a service account
    Sheets(ServiceAccountCredentials),
    /// Process-local rows, lost on exit
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetsSettings {
    pub api_base: String,
    pub token_uri: String,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token_uri: DEFAULT_TOKEN_URI.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub storage: StorageConfig,
    pub sheets: SheetsSettings,
    pub bind_addr: SocketAddr,
    pub frontend_origin: String,
    pub frontend_dist: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let storage = match var("STORAGE").as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("sheets") => StorageConfig::Sheets(ServiceAccountCredentials {
                client_email: required("CLIENT_EMAIL")?,
                // Keys pasted into env files usually carry escaped newlines
                private_key: required("PRIVATE_KEY")?.replace("\\n", "\n"),
                project_id: required("PROJECT_ID")?,
            }),
            Some("memory") => StorageConfig::Memory,
            Some(other) => return Err(ConfigError::UnknownStorage(other.to_string())),
        };

        let raw_bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_bind_addr.clone()))?;

        let defaults = SheetsSettings::default();

        Ok(Self {
            storage,
            sheets: SheetsSettings {
                api_base: var("SHEETS_API_BASE").unwrap_or(defaults.api_base),
                token_uri: var("TOKEN_URI").unwrap_or(defaults.token_uri),
            },
            bind_addr,
            frontend_origin: var("FRONTEND_ORIGIN")
                .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string()),
            frontend_dist: var("FRONTEND_DIST")
                .unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string())
                .into(),
        })
    }
}
