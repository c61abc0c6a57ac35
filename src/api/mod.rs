//! Backend API Wrappers
//!
//! Frontend bindings to the REST backend, organized by domain. Every call is
//! a single attempt; callers report the outcome through the notice board.

mod appeal;
mod auth;
mod challan;
mod files;
mod officer;
mod rule;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config;
use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use appeal::*;
pub use auth::*;
pub use challan::*;
pub use files::*;
pub use officer::*;
pub use rule::*;

thread_local! {
    static CLIENT: Client = Client::new();
}

/// Plain acknowledgement body: `{"message": "..."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    /// Backend wording when present, else `fallback`
    pub fn message_or(self, fallback: impl Into<String>) -> String {
        self.message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| fallback.into())
    }
}

/// `{"message": "...", "data": {...}}`
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

pub(crate) fn url(path: &str) -> String {
    format!("{}{}", config::api_base(), path)
}

/// Unauthenticated request
pub(crate) fn request(method: Method, path: &str) -> RequestBuilder {
    let target = url(path);
    log::debug!("[API] {} {}", method, target);
    CLIENT.with(|c| c.request(method, target))
}

/// Request carrying the bearer token
pub(crate) fn authed(method: Method, path: &str, token: &str) -> RequestBuilder {
    request(method, path).bearer_auth(token)
}

/// Send and decode a JSON body
pub(crate) async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> ApiResult<T> {
    let resp = send(req).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send, keeping only the status outcome
pub(crate) async fn send(req: RequestBuilder) -> ApiResult<Response> {
    let resp = req.send().await.map_err(|e| {
        log::error!("[API] transport failure: {}", e);
        ApiError::from(e)
    })?;
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let target = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("[API] {} -> {}", target, status);
    Err(error_for_status(status, &body))
}

/// Map a non-success status and its body to an error
pub(crate) fn error_for_status(status: StatusCode, body: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        _ => ApiError::Rejected(extract_message(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })),
    }
}

/// Human message from an error body: `error`, `message` or `detail`, else the
/// first field error of a validation map
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;
    for key in ["error", "message", "detail"] {
        if let Some(text) = obj.get(key).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }
    obj.iter().find_map(|(field, errors)| {
        let first = match errors {
            serde_json::Value::Array(list) => list.first()?.as_str()?,
            serde_json::Value::String(text) => text.as_str(),
            _ => return None,
        };
        Some(if field == "non_field_errors" {
            first.to_string()
        } else {
            format!("{}: {}", field, first)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_prefers_backend_message() {
        let ack: Ack = serde_json::from_str(r#"{"message":"Rule deleted successfully"}"#).unwrap();
        assert_eq!(ack.message_or("Rule deleted."), "Rule deleted successfully");
        let ack: Ack = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.message_or("Rule deleted."), "Rule deleted.");
        let blank = Ack { message: Some(" ".to_string()) };
        assert_eq!(blank.message_or("Saved."), "Saved.");
    }

    #[test]
    fn test_url_joins_base() {
        assert_eq!(
            url("/api/challan/public/rules/"),
            format!("{}/api/challan/public/rules/", config::api_base())
        );
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            error_for_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            error_for_status(StatusCode::NOT_FOUND, r#"{"error":"Officer not found"}"#),
            ApiError::NotFound
        ));
        match error_for_status(StatusCode::BAD_REQUEST, r#"{"error":"Invalid email/password"}"#) {
            ApiError::Rejected(msg) => assert_eq!(msg, "Invalid email/password"),
            other => panic!("unexpected {:?}", other),
        }
        match error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>") {
            ApiError::Rejected(msg) => assert_eq!(msg, "Internal Server Error"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_extract_message_variants() {
        assert_eq!(
            extract_message(r#"{"detail":"Given token not valid"}"#).as_deref(),
            Some("Given token not valid")
        );
        assert_eq!(
            extract_message(r#"{"email":["officer with this email already exists."]}"#).as_deref(),
            Some("email: officer with this email already exists.")
        );
        assert_eq!(
            extract_message(r#"{"non_field_errors":["Passwords do not match."]}"#).as_deref(),
            Some("Passwords do not match.")
        );
        assert_eq!(extract_message("not json"), None);
        assert_eq!(extract_message("[]"), None);
    }
}
