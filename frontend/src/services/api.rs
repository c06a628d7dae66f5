use gloo::net::http::Request;
use shared::{CreateEntryResponse, ErrorResponse, HealthResponse, NewEntry, ValueRange};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Test connection to the backend
    pub async fn test_connection(&self) -> Result<(), String> {
        let url = format!("{}/api/health", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<HealthResponse>().await {
                Ok(health) if health.status == "ok" => Ok(()),
                Ok(health) => Err(format!("Backend reported status {}", health.status)),
                Err(e) => Err(format!("Failed to parse health response: {}", e)),
            },
            Err(e) => Err(format!("Connection failed: {}", e)),
        }
    }

    /// Fetch the raw spreadsheet range holding every entry
    pub async fn list_entries(&self) -> Result<ValueRange, String> {
        let url = format!("{}/api/entries", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<ValueRange>()
                        .await
                        .map_err(|e| format!("Failed to parse entries: {}", e))
                } else {
                    match response.json::<ErrorResponse>().await {
                        Ok(body) => Err(body.error),
                        Err(_) => Err(format!("Server error: {}", response.status())),
                    }
                }
            }
            Err(e) => Err(format!("Failed to fetch entries: {}", e)),
        }
    }

    /// Create an entry.
    ///
    /// The backend answers 200 even when the write fails, so the body's
    /// `err` field decides the outcome.
    pub async fn create_entry(&self, entry: NewEntry) -> Result<(), String> {
        let url = format!("{}/api/entries", self.base_url);

        match Request::post(&url)
            .json(&entry)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if !response.ok() {
                    return Err(format!("Server error: {}", response.status()));
                }
                match response.json::<CreateEntryResponse>().await {
                    Ok(CreateEntryResponse { err: Some(err) }) => Err(err),
                    Ok(CreateEntryResponse { err: None }) => Ok(()),
                    Err(e) => Err(format!("Failed to parse response: {}", e)),
                }
            }
            Err(e) => Err(format!("Failed to create entry: {}", e)),
        }
    }
}
