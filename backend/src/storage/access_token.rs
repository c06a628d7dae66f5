//! OAuth access tokens for the Sheets API.
//!
//! Service accounts authenticate with a self-signed RS256 JWT exchanged at
//! Google's token endpoint. The resulting token is cached until shortly
//! before it expires.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::sheets_client::{ServiceAccountCredentials, SheetsError};

/// Read/write access to spreadsheets
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const EXPIRY_MARGIN_SECS: i64 = 60;

#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// A bearer token valid for at least the next request
    async fn access_token(&self) -> Result<String, SheetsError>;

    /// Forget any cached token
    async fn clear(&self) {}
}

/// Fixed token, for emulators and tests
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, SheetsError> {
        Ok(self.token.clone())
    }
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME_SECS
}

struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

pub struct ServiceAccountTokenProvider {
    http: reqwest::Client,
    client_email: String,
    token_uri: String,
    key: EncodingKey,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenProvider {
    /// Parse the private key up front so bad credentials fail at startup
    pub fn new(
        http: reqwest::Client,
        credentials: &ServiceAccountCredentials,
        token_uri: impl Into<String>,
    ) -> Result<Self, SheetsError> {
        let key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())
            .map_err(SheetsError::InvalidPrivateKey)?;

        Ok(Self {
            http,
            client_email: credentials.client_email.clone(),
            token_uri: token_uri.into(),
            key,
            cached: Mutex::new(None),
        })
    }

    fn signed_assertion(&self, now: DateTime<Utc>) -> Result<String, SheetsError> {
        let claims = Claims {
            iss: &self.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.token_uri,
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .map_err(SheetsError::TokenSigning)
    }

    async fn exchange(&self, now: DateTime<Utc>) -> Result<CachedToken, SheetsError> {
        let assertion = self.signed_assertion(now)?;

        info!("Requesting access token for {}", self.client_email);
        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::TokenExchange {
                status: status.as_u16(),
                message: token_error_message(&body),
            });
        }

        let token: TokenResponse = response.json().await?;
        Ok(CachedToken {
            token: token.access_token,
            expires_at: token_expiry(now, token.expires_in),
        })
    }
}

#[async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn access_token(&self) -> Result<String, SheetsError> {
        // Held across the exchange so concurrent callers wait for one request
        let mut cached = self.cached.lock().await;
        let now = Utc::now();

        if let Some(token) = cached.as_ref() {
            if token.expires_at - Duration::seconds(EXPIRY_MARGIN_SECS) > now {
                return Ok(token.token.clone());
            }
            debug!("Cached access token expired");
        }

        let fresh = self.exchange(now).await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }

    async fn clear(&self) {
        *self.cached.lock().await = None;
    }
}

/// Expiry instant for a token issued at `now`. A lifetime that does not fit
/// a `DateTime` falls back to the assertion lifetime.
fn token_expiry(now: DateTime<Utc>, expires_in: i64) -> DateTime<Utc> {
    Duration::try_seconds(expires_in)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .unwrap_or_else(|| now + Duration::seconds(ASSERTION_LIFETIME_SECS))
}

/// Pull `error_description` (or `error`) out of an OAuth error body
fn token_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct OAuthError {
        error: Option<String>,
        error_description: Option<String>,
    }

    match serde_json::from_str::<OAuthError>(body) {
        Ok(OAuthError {
            error_description: Some(description),
            ..
        }) => description,
        Ok(OAuthError {
            error: Some(error), ..
        }) => error,
        _ => body.to_string(),
    }
}
