/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! API client bound to the configured backend
//!
//! [`ApiClient`] is an [`HttpClient`] built from [`Config`] with the cookie jar
//! always on. Cross-cutting concerns hook in through [`ResponseProcessor`]s,
//! which see every successful response without the transport being modified.

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::{ApiTransport, HttpClient, RequestOptions};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Hook applied to every successful response body
pub trait ResponseProcessor: Send + Sync {
    /// Receives the decoded body and returns the body handed to the caller
    fn process(&self, method: &Method, path: &str, response: Value) -> Value;
}

/// Processor that logs the shape of each response and passes it through
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProcessor;

impl ResponseProcessor for TracingProcessor {
    fn process(&self, method: &Method, path: &str, response: Value) -> Value {
        debug!("{} {} -> {}", method, path, describe_shape(&response));
        response
    }
}

/// Short description of a JSON value, for logs
#[must_use]
pub fn describe_shape(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(s) => format!("text({} bytes)", s.len()),
        Value::Array(items) => format!("array({})", items.len()),
        Value::Object(map) => format!("object({} keys)", map.len()),
    }
}

/// Client for the sponsorship platform API
pub struct ApiClient {
    http: HttpClient,
    config: Arc<Config>,
    processors: Vec<Arc<dyn ResponseProcessor>>,
}

impl ApiClient {
    /// Creates a client for the backend configured in `config`
    ///
    /// # Errors
    /// Returns [`AppError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Self::from_config(Arc::new(config.clone()))
    }

    /// Creates a client sharing an existing configuration
    ///
    /// # Errors
    /// Returns [`AppError::Network`] if the HTTP client cannot be built.
    pub fn from_config(config: Arc<Config>) -> Result<Self, AppError> {
        let http = HttpClient::new(&config.rest_api.base_url)?;
        info!("API client ready for {}", http.base_url());
        Ok(Self {
            http,
            config,
            processors: Vec::new(),
        })
    }

    /// Appends a response processor; processors run in registration order
    #[must_use]
    pub fn with_processor<P: ResponseProcessor + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Arc::new(processor));
        self
    }

    /// Current configuration
    #[must_use]
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Backend base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Runs the response through every registered processor
    fn process_response(&self, method: &Method, path: &str, response: Value) -> Value {
        self.processors
            .iter()
            .fold(response, |acc, p| p.process(method, path, acc))
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str) -> Result<Value, AppError> {
        self.request(Method::GET, path, None, RequestOptions::default())
            .await
    }

    /// Makes a POST request
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.request(Method::POST, path, Some(body), RequestOptions::default())
            .await
    }

    /// Makes a PUT request
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.request(Method::PUT, path, Some(body), RequestOptions::default())
            .await
    }

    /// Makes a PATCH request
    pub async fn patch(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.request(Method::PATCH, path, Some(body), RequestOptions::default())
            .await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Value, AppError> {
        self.request(Method::DELETE, path, None, RequestOptions::default())
            .await
    }
}

#[async_trait]
impl ApiTransport for ApiClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value, AppError> {
        let response = self.http.send(method.clone(), path, body, options).await?;
        Ok(self.process_response(&method, path, response))
    }
}
