//! Test helpers: a local stand-in for the Google token endpoint and the
//! Sheets values API, served by axum on an ephemeral port.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::{json, Value};

use super::sheets_client::ServiceAccountCredentials;

pub const TEST_PRIVATE_KEY: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/test_service_account_key.pem"
));

pub fn test_credentials() -> ServiceAccountCredentials {
    ServiceAccountCredentials {
        client_email: "tracker@test-project.iam.gserviceaccount.com".to_string(),
        private_key: TEST_PRIVATE_KEY.to_string(),
        project_id: "test-project".to_string(),
    }
}

struct FakeState {
    rows: Mutex<Vec<Vec<Value>>>,
    token_requests: AtomicUsize,
    token_lifetime_secs: AtomicI64,
    reject_tokens: AtomicBool,
    deny_access: AtomicBool,
    last_value_input_option: Mutex<Option<String>>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            rows: Mutex::default(),
            token_requests: AtomicUsize::default(),
            token_lifetime_secs: AtomicI64::new(3599),
            reject_tokens: AtomicBool::default(),
            deny_access: AtomicBool::default(),
            last_value_input_option: Mutex::default(),
        }
    }
}

/// Handle to a running fake Google endpoint
pub struct FakeSheets {
    base_url: String,
    state: Arc<FakeState>,
}

impl FakeSheets {
    pub const ACCESS_TOKEN: &'static str = "fake-access-token";

    pub async fn start() -> Self {
        let state = Arc::new(FakeState::default());
        let app = Router::new()
            .route("/token", post(issue_token))
            .route(
                "/v4/spreadsheets/:spreadsheet_id/values/:range",
                get(read_values).post(append_values),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn api_base(&self) -> String {
        format!("{}/v4", self.base_url)
    }

    pub fn token_uri(&self) -> String {
        format!("{}/token", self.base_url)
    }

    pub fn token_requests(&self) -> usize {
        self.state.token_requests.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<Vec<Value>> {
        self.state.rows.lock().unwrap().clone()
    }

    pub fn last_value_input_option(&self) -> Option<String> {
        self.state.last_value_input_option.lock().unwrap().clone()
    }

    /// `expires_in` reported with every issued token
    pub fn set_token_lifetime(&self, secs: i64) {
        self.state.token_lifetime_secs.store(secs, Ordering::SeqCst);
    }

    /// Make the token endpoint refuse every assertion
    pub fn reject_tokens(&self) {
        self.state.reject_tokens.store(true, Ordering::SeqCst);
    }

    /// Make the values API answer 403 to every call
    pub fn deny_access(&self) {
        self.state.deny_access.store(true, Ordering::SeqCst);
    }
}

fn google_error(status: StatusCode, message: &str) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": message,
                "status": status.canonical_reason().unwrap_or_default(),
            }
        })),
    )
        .into_response()
}

async fn issue_token(
    State(state): State<Arc<FakeState>>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    state.token_requests.fetch_add(1, Ordering::SeqCst);

    let grant_ok = form.get("grant_type").map(String::as_str)
        == Some("urn:ietf:params:oauth:grant-type:jwt-bearer");
    let assertion_ok = form
        .get("assertion")
        .map(|jwt| jwt.split('.').count() == 3)
        .unwrap_or(false);

    if state.reject_tokens.load(Ordering::SeqCst) || !grant_ok || !assertion_ok {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid JWT Signature."
            })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": FakeSheets::ACCESS_TOKEN,
        "expires_in": state.token_lifetime_secs.load(Ordering::SeqCst),
        "token_type": "Bearer"
    }))
    .into_response()
}

fn authorize(state: &FakeState, headers: &HeaderMap) -> Result<(), axum::response::Response> {
    let expected = format!("Bearer {}", FakeSheets::ACCESS_TOKEN);
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some(expected.as_str());

    if !authorized {
        return Err(google_error(
            StatusCode::UNAUTHORIZED,
            "Request had invalid authentication credentials.",
        ));
    }
    if state.deny_access.load(Ordering::SeqCst) {
        return Err(google_error(
            StatusCode::FORBIDDEN,
            "The caller does not have permission",
        ));
    }
    Ok(())
}

async fn read_values(
    State(state): State<Arc<FakeState>>,
    Path((_spreadsheet_id, range)): Path<(String, String)>,
    headers: HeaderMap,
) -> axum::response::Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    let rows = state.rows.lock().unwrap().clone();
    let mut body = json!({
        "range": format!("Sheet1!{}", range.replace(':', "1:")),
        "majorDimension": "ROWS",
    });
    // The real API leaves `values` out entirely for an empty range
    if !rows.is_empty() {
        body["values"] = json!(rows);
    }
    Json(body).into_response()
}

async fn append_values(
    State(state): State<Arc<FakeState>>,
    Path((spreadsheet_id, range)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> axum::response::Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    if !range.ends_with(":append") {
        return google_error(StatusCode::NOT_FOUND, "Requested entity was not found.");
    }

    *state.last_value_input_option.lock().unwrap() = query.get("valueInputOption").cloned();

    let new_rows: Vec<Vec<Value>> =
        serde_json::from_value(body["values"].clone()).unwrap_or_default();
    let mut rows = state.rows.lock().unwrap();
    let first_row = rows.len() + 1;
    rows.extend(new_rows.iter().cloned());

    Json(json!({
        "spreadsheetId": spreadsheet_id,
        "updates": {
            "spreadsheetId": spreadsheet_id,
            "updatedRange": format!("Sheet1!A{}:G{}", first_row, rows.len()),
            "updatedRows": new_rows.len(),
            "updatedColumns": new_rows.iter().map(Vec::len).max().unwrap_or(0),
            "updatedCells": new_rows.iter().map(Vec::len).sum::<usize>(),
        }
    }))
    .into_response()
}
