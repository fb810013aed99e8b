/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Base HTTP transport
//!
//! [`HttpClient`] builds requests against a base URL, keeps the backend session
//! cookie in its jar and turns every non-2xx response into an
//! [`AppError::Http`] carrying a deterministic, user facing message.

use crate::constants::{
    MSG_CONFLICT, MSG_FORBIDDEN, MSG_NOT_FOUND, MSG_SERVER_ERROR, MSG_UNAUTHORIZED,
    REQUEST_ID_HEADER, USER_AGENT,
};
use crate::error::AppError;
use crate::utils::id::get_id;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::{debug, error, warn};

/// JSON body fields inspected, in order, for a server supplied error message
const ERROR_MESSAGE_FIELDS: [&str; 3] = ["message", "error", "mensaje"];

/// Per call request options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Extra headers, overriding defaults with the same name
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Creates empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Transport seam used by services
///
/// Implemented by [`HttpClient`] and [`crate::application::client::ApiClient`].
/// Returns the decoded body on 2xx and an [`AppError`] otherwise.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Sends a request and returns the decoded response body
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base URL, or an absolute `http(s)` URL
    /// * `body` - JSON body, only sent for POST, PUT and PATCH
    /// * `options` - Extra headers
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value, AppError>;
}

/// Base HTTP client
///
/// Credentials are always included: the underlying `reqwest` client keeps a
/// cookie store so the session cookie set by the login endpoint is sent back
/// on every following request.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a client for `base_url` with its own cookie jar
    ///
    /// # Errors
    /// Returns [`AppError::Network`] if the TLS backend cannot be initialised.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Creates a client reusing an existing `reqwest` client
    #[must_use]
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path`
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str) -> Result<Value, AppError> {
        self.send(Method::GET, path, None, RequestOptions::default())
            .await
    }

    /// Makes a POST request
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.send(Method::POST, path, Some(body), RequestOptions::default())
            .await
    }

    /// Makes a PUT request
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.send(Method::PUT, path, Some(body), RequestOptions::default())
            .await
    }

    /// Makes a PATCH request
    pub async fn patch(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.send(Method::PATCH, path, Some(body), RequestOptions::default())
            .await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Value, AppError> {
        self.send(Method::DELETE, path, None, RequestOptions::default())
            .await
    }

    /// Sends a request and decodes the response
    ///
    /// # Returns
    /// * `Ok(Value)` - JSON for JSON responses, `Value::String` for other
    ///   content types, `Value::Null` for empty bodies
    /// * `Err(AppError::Http)` - Non-2xx response with its mapped message
    /// * `Err(AppError::Network)` - The request could not be completed
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value, AppError> {
        let url = self.url_for(path);
        let request_id = get_id();
        let mut headers = merge_headers(&options.headers)?;
        headers.insert(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_str(&request_id)
                .map_err(|e| AppError::Validation(format!("{REQUEST_ID_HEADER}: {e}")))?,
        );

        debug!("[{}] {} {}", request_id, method, url);

        let mut request = self.client.request(method.clone(), &url).headers(headers);
        if method_has_body(&method) {
            if let Some(b) = body.as_ref() {
                request = request.body(serde_json::to_vec(b)?);
            }
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("[{}] {} {} failed: {}", request_id, method, url, e);
                return Err(AppError::Network(e.to_string()));
            }
        };

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        debug!("[{}] Response status: {}", request_id, status);

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if status.is_success() {
            return decode_success_body(&content_type, &text);
        }

        let err = build_http_error(status, &text);
        if status.is_server_error() {
            error!("[{}] Request failed with status {}: {}", request_id, status, text);
        } else {
            warn!("[{}] Request failed with status {}: {}", request_id, status, text);
        }
        Err(err)
    }
}

#[async_trait]
impl ApiTransport for HttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value, AppError> {
        self.send(method, path, body, options).await
    }
}

/// Joins a base URL and a path with exactly one slash
///
/// Absolute `http(s)` paths are returned unchanged.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

/// Whether a body is serialized for `method`
#[must_use]
pub fn method_has_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

/// Builds the header map for a request
///
/// Starts from `Content-Type: application/json` and `Accept: application/json`;
/// entries in `extra` replace defaults with the same (case insensitive) name.
///
/// # Errors
/// Returns [`AppError::Validation`] for malformed header names or values.
pub fn merge_headers(extra: &[(String, String)]) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::Validation(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            AppError::Validation(format!("invalid header value for {}: {e}", name.as_str()))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Whether a `content-type` value denotes JSON
#[must_use]
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

/// Decodes a 2xx body
///
/// # Errors
/// Returns [`AppError::Json`] when a JSON content type carries invalid JSON.
pub fn decode_success_body(content_type: &str, text: &str) -> Result<Value, AppError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    if is_json_content_type(content_type) {
        Ok(serde_json::from_str(text)?)
    } else {
        Ok(Value::String(text.to_string()))
    }
}

/// Extracts a server supplied error message from a response body
///
/// Looks at the JSON fields `message`, `error` and `mensaje` in that order; a
/// `message` array (as produced by request validation pipes) is joined with
/// `", "`. Bodies that are not JSON are used verbatim unless empty or HTML.
#[must_use]
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => ERROR_MESSAGE_FIELDS
            .iter()
            .filter_map(|field| map.get(*field))
            .find_map(message_from_value),
        Ok(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Ok(_) => None,
        Err(_) if trimmed.starts_with('<') => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

/// `message` or `mensaje` of a decoded success body
#[must_use]
pub fn extract_message_field(body: &Value) -> Option<String> {
    ["message", "mensaje"]
        .iter()
        .filter_map(|field| body.get(*field))
        .find_map(message_from_value)
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    }
}

/// Maps a failed status to the message shown to the user
///
/// Pure: the same `(status, server_message)` always yields the same text.
#[must_use]
pub fn map_status_message(status: StatusCode, server_message: Option<&str>) -> String {
    match status {
        StatusCode::UNAUTHORIZED => MSG_UNAUTHORIZED.to_string(),
        StatusCode::FORBIDDEN => MSG_FORBIDDEN.to_string(),
        StatusCode::NOT_FOUND => MSG_NOT_FOUND.to_string(),
        StatusCode::CONFLICT => server_message.unwrap_or(MSG_CONFLICT).to_string(),
        StatusCode::INTERNAL_SERVER_ERROR => MSG_SERVER_ERROR.to_string(),
        s if s.is_server_error() => server_message.unwrap_or(MSG_SERVER_ERROR).to_string(),
        s => server_message
            .map(str::to_string)
            .unwrap_or_else(|| format!("Error en la solicitud (código {})", s.as_u16())),
    }
}

/// Builds the error for a non-2xx response
#[must_use]
pub fn build_http_error(status: StatusCode, body: &str) -> AppError {
    let extracted = extract_error_message(body);
    AppError::Http {
        status,
        message: map_status_message(status, extracted.as_deref()),
        raw_body: if body.is_empty() {
            None
        } else {
            Some(body.to_string())
        },
    }
}
