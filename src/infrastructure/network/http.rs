// HTTP client utilities
use crate::domain::error::{ConfigError, GenerateError};
use crate::infrastructure::config::Config;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Create the shared HTTP client from the config (timeout, proxy)
pub fn create_client(config: &Config) -> Result<Client, ConfigError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(config.timeout())
        .user_agent(concat!("lingo/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}

/// Map a non-success HTTP status and its body to a provider error.
///
/// `message` is the provider's own error text when the body could be decoded.
pub fn classify_status(status: StatusCode, message: String) -> GenerateError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerateError::Unauthenticated(message),
        // Gemini answers a bad key with 400 API_KEY_INVALID
        StatusCode::BAD_REQUEST if mentions_invalid_key(&message) => {
            GenerateError::Unauthenticated(message)
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            GenerateError::Unavailable(message)
        }
        _ => GenerateError::Remote {
            status: status.as_u16(),
            message,
        },
    }
}

fn mentions_invalid_key(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("api_key_invalid") || lower.contains("api key not valid")
}

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(serde::Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    status: Option<String>,
}

/// Pull the human-readable message out of an `{"error": {...}}` body.
/// Both Gemini and chat-completions endpoints use this envelope.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => match (error.status, error.message) {
            (Some(status), Some(message)) => format!("{} ({})", message, status),
            (None, Some(message)) => message,
            (Some(status), None) => status,
            (None, None) => "no error message".to_string(),
        },
        Err(_) => {
            let body = body.trim();
            if body.is_empty() {
                "empty error body".to_string()
            } else {
                body.chars().take(200).collect()
            }
        }
    }
}
