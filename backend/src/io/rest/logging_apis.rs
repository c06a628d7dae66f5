use axum::response::Json;
use shared::{HealthResponse, LogRequest, LogResponse};
use tracing::{debug, error, info, warn};

/// Re-emit a frontend log line through the backend's subscriber
pub async fn log_message(Json(request): Json<LogRequest>) -> Json<LogResponse> {
    let component = request.component.as_deref().unwrap_or("frontend");

    match request.level.to_lowercase().as_str() {
        "debug" => debug!(target: "frontend", "[{}] {}", component, request.message),
        "warn" => warn!(target: "frontend", "[{}] {}", component, request.message),
        "error" => error!(target: "frontend", "[{}] {}", component, request.message),
        _ => info!(target: "frontend", "[{}] {}", component, request.message),
    }

    Json(LogResponse { success: true })
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_message_accepts_any_level() {
        for level in ["debug", "INFO", "warn", "error", "trace", "loud"] {
            let Json(response) = log_message(Json(LogRequest {
                level: level.to_string(),
                message: "Login attempt with: alice".to_string(),
                component: Some("login".to_string()),
            }))
            .await;
            assert!(response.success);
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let Json(response) = health_check().await;
        assert_eq!(response.status, "ok");
    }
}
