//! # Google Sheets Client
//!
//! Thin adapter over the Sheets v4 REST API: read a range, append rows.
//! Nothing is retried; every failure is handed back to the caller as a
//! [`SheetsError`].

use std::fmt;
use std::sync::Arc;

use reqwest::{Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::ValueRange;
use thiserror::Error;
use tracing::{debug, info};

use super::access_token::{ServiceAccountTokenProvider, TokenProvider};

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// How appended cells are interpreted by the sheet
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("invalid service account private key: {0}")]
    InvalidPrivateKey(#[source] jsonwebtoken::errors::Error),

    #[error("failed to sign token assertion: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),

    #[error("token request rejected ({status}): {message}")]
    TokenExchange { status: u16, message: String },

    #[error("invalid Sheets API URL: {0}")]
    InvalidUrl(String),

    #[error("Sheets API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request to Sheets API failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Static service-account credentials
#[derive(Clone, PartialEq)]
pub struct ServiceAccountCredentials {
    pub client_email: String,
    pub private_key: String,
    pub project_id: String,
}

impl fmt::Debug for ServiceAccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountCredentials")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateValuesResponse {
    pub updated_range: Option<String>,
    pub updated_rows: Option<u32>,
    pub updated_columns: Option<u32>,
    pub updated_cells: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppendValuesResponse {
    pub spreadsheet_id: Option<String>,
    pub table_range: Option<String>,
    pub updates: Option<UpdateValuesResponse>,
}

#[derive(Serialize)]
struct AppendValuesBody<'a> {
    values: &'a [Vec<Value>],
}

pub struct SheetsClient {
    http: reqwest::Client,
    api_base: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl SheetsClient {
    pub fn new(
        http: reqwest::Client,
        api_base: &str,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, SheetsError> {
        let api_base =
            Url::parse(api_base).map_err(|e| SheetsError::InvalidUrl(format!("{}: {}", api_base, e)))?;
        if api_base.cannot_be_a_base() {
            return Err(SheetsError::InvalidUrl(api_base.to_string()));
        }

        Ok(Self {
            http,
            api_base,
            tokens,
        })
    }

    /// Client authenticated as a service account with the spreadsheets scope
    pub fn from_service_account(
        credentials: &ServiceAccountCredentials,
        api_base: &str,
        token_uri: &str,
    ) -> Result<Self, SheetsError> {
        let http = reqwest::Client::new();
        let tokens = ServiceAccountTokenProvider::new(http.clone(), credentials, token_uri)?;
        Self::new(http, api_base, Arc::new(tokens))
    }

    /// Read a range
    pub async fn get_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<ValueRange, SheetsError> {
        let url = self.values_url(spreadsheet_id, range)?;
        let token = self.tokens.access_token().await?;

        debug!("GET {}", url);
        let response = self.http.get(url).bearer_auth(token).send().await?;
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }

    /// Append rows after the last row of data in the range
    pub async fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: &[Vec<Value>],
    ) -> Result<AppendValuesResponse, SheetsError> {
        let mut url = self.values_url(spreadsheet_id, &format!("{}:append", range))?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", VALUE_INPUT_OPTION);
        let token = self.tokens.access_token().await?;

        debug!("POST {} ({} rows)", url, rows.len());
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&AppendValuesBody { values: rows })
            .send()
            .await?;
        let response = Self::check(response).await?;
        let appended: AppendValuesResponse = response.json().await?;

        if let Some(updates) = &appended.updates {
            info!(
                "Appended {} row(s) to {}",
                updates.updated_rows.unwrap_or_default(),
                updates.updated_range.as_deref().unwrap_or(range)
            );
        }
        Ok(appended)
    }

    /// Drop the cached access token
    pub async fn clear_token_cache(&self) {
        self.tokens.clear().await;
    }

    fn values_url(&self, spreadsheet_id: &str, range_segment: &str) -> Result<Url, SheetsError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| SheetsError::InvalidUrl(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(["spreadsheets", spreadsheet_id, "values", range_segment]);
        Ok(url)
    }

    async fn check(response: Response) -> Result<Response, SheetsError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(SheetsError::Api {
            status: status.as_u16(),
            message: api_error_message(&body),
        })
    }
}

/// Google wraps failures as `{"error": {"code", "message", "status"}}`
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
