use gloo::net::http::Request;
use shared::LogRequest;
use wasm_bindgen_futures::spawn_local;

const LOGS_URL: &str = "http://localhost:3000/api/logs";

/// Forwards log lines to the backend so they land in the server log
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let tag = component.as_deref().unwrap_or("frontend");
        let line = format!("[{}] {}", tag, message);
        match level {
            "error" => gloo::console::error!(line),
            "warn" => gloo::console::warn!(line),
            _ => gloo::console::log!(line),
        }

        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        // Fire and forget; a lost log line never blocks the UI
        spawn_local(async move {
            match Request::post(LOGS_URL).json(&request) {
                Ok(request) => {
                    let _ = request.send().await;
                }
                Err(e) => gloo::console::error!("Failed to serialize log request:", e.to_string()),
            }
        });
    }
}
