// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the generation endpoint.
//!
//! The service expects a multipart POST with a `file` part carrying the
//! sketch and a `prompt` text part, and answers with the generated image
//! bytes on success. Error bodies are JSON when the service produced them
//! itself, arbitrary text otherwise; both are reduced to a short detail
//! string for the log.

use crate::generation::{GenerationError, GenerationRequest};
use std::time::Duration;

/// Performs one generation call and returns the raw image bytes.
pub async fn generate(
    endpoint: String,
    timeout: Duration,
    request: GenerationRequest,
) -> Result<Vec<u8>, GenerationError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GenerationError::Network(e.to_string()))?;

    let part = reqwest::multipart::Part::bytes(request.bytes)
        .file_name(request.file_name)
        .mime_str(request.mime)
        .map_err(|e| GenerationError::Network(e.to_string()))?;
    let form = reqwest::multipart::Form::new()
        .part("file", part)
        .text("prompt", request.prompt);

    log::info!("POST {} (sketch upload)", endpoint);

    let response = client
        .post(&endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| GenerationError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = extract_error_detail(&body, &status.to_string());
        log::warn!("generation endpoint answered {}: {}", status, detail);
        return Err(GenerationError::Server {
            status: status.as_u16(),
            detail,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| GenerationError::Network(e.to_string()))?;
    log::info!("generation succeeded ({} bytes)", bytes.len());
    Ok(bytes.to_vec())
}

/// Pulls a human-readable detail out of an error body.
///
/// Tries the JSON `detail` and `message` fields first, then the raw body,
/// and finally `fallback` when the body is empty.
fn extract_error_detail(body: &str, fallback: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["detail", "message"] {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        // Cap untrusted bodies so the log stays readable.
        trimmed.chars().take(200).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_is_preferred() {
        let body = r#"{"detail": "model not loaded", "message": "other"}"#;
        assert_eq!(extract_error_detail(body, "503"), "model not loaded");
    }

    #[test]
    fn message_field_is_the_second_choice() {
        let body = r#"{"message": "bad prompt"}"#;
        assert_eq!(extract_error_detail(body, "422"), "bad prompt");
    }

    #[test]
    fn plain_text_bodies_pass_through_trimmed() {
        assert_eq!(
            extract_error_detail("  internal server error \n", "500"),
            "internal server error"
        );
    }

    #[test]
    fn empty_body_falls_back_to_the_status_line() {
        assert_eq!(
            extract_error_detail("", "502 Bad Gateway"),
            "502 Bad Gateway"
        );
        assert_eq!(
            extract_error_detail("   ", "503 Service Unavailable"),
            "503 Service Unavailable"
        );
    }

    #[test]
    fn long_bodies_are_capped() {
        let body = "x".repeat(5000);
        assert_eq!(extract_error_detail(&body, "500").len(), 200);
    }
}
