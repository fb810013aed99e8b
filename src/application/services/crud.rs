/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Generic CRUD service
//!
//! [`CrudService`] runs the request skeleton for one REST collection and
//! delegates everything resource specific to a [`ResourceAdapter`]. Every
//! operation returns a [`ServiceResult`]: transport errors are converted at
//! this boundary and callers only branch on `Ok`/`Err`.

use crate::application::interfaces::resource::ResourceAdapter;
use crate::constants::MSG_UNEXPECTED_RESPONSE;
use crate::error::{AppError, ErrorKind};
use crate::model::http::{ApiTransport, RequestOptions};
use crate::model::requests::{MaybeId, ResourceId};
use crate::model::validation::ValidationErrors;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Successful outcome of a service operation
#[derive(Debug, Clone, PartialEq)]
pub struct Success<T> {
    /// Operation result
    pub data: T,
    /// Message to show the user, for operations that report one
    pub message: Option<String>,
}

impl<T> Success<T> {
    /// Outcome without message
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    /// Outcome with message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

/// Failed outcome of a service operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceError {
    /// Message to show the user
    pub message: String,
    /// HTTP status, `0` when no response was received
    pub status_code: u16,
    /// Failure classification
    pub kind: ErrorKind,
}

impl ServiceError {
    /// Whether the user has to log in again
    #[must_use]
    pub fn requires_login(&self) -> bool {
        self.status_code == 401
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, status {})", self.message, self.kind, self.status_code)
    }
}

impl std::error::Error for ServiceError {}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::from(AppError::from(errors))
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        Self {
            message: e.user_message(),
            status_code: e.status_code(),
            kind: e.kind(),
        }
    }
}

/// Result of every service operation
pub type ServiceResult<T> = Result<Success<T>, ServiceError>;

/// Serializable `{success, data, message, error}` shape for UI layers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Operation result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Success message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// HTTP status of a failure
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Converts a service result into its envelope
pub fn into_envelope<T>(result: ServiceResult<T>) -> Envelope<T> {
    match result {
        Ok(success) => Envelope {
            success: true,
            data: Some(success.data),
            message: success.message,
            error: None,
            status_code: None,
        },
        Err(e) => Envelope {
            success: false,
            data: None,
            message: None,
            error: Some(e.message),
            status_code: Some(e.status_code),
        },
    }
}

/// Internal failures keep their detail in the logs and show a generic message
pub(crate) fn internal_failure(endpoint: &str, e: AppError) -> ServiceError {
    error!("{}: {}", endpoint, e);
    ServiceError {
        message: MSG_UNEXPECTED_RESPONSE.to_string(),
        status_code: 0,
        kind: ErrorKind::Internal,
    }
}

/// Request failures are logged and converted
pub(crate) fn request_failure(operation: &str, endpoint: &str, e: AppError) -> ServiceError {
    warn!("{} {} failed: {}", operation, endpoint, e);
    ServiceError::from(e)
}

/// Generic create/read/update/delete over one REST collection
pub struct CrudService<A: ResourceAdapter, T: ApiTransport> {
    adapter: A,
    client: Arc<T>,
}

impl<A: ResourceAdapter, T: ApiTransport> CrudService<A, T> {
    /// Creates a service for `adapter`'s collection
    pub fn new(adapter: A, client: Arc<T>) -> Self {
        Self { adapter, client }
    }

    /// Resource adapter
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Underlying transport
    pub fn client(&self) -> Arc<T> {
        self.client.clone()
    }

    /// Collection path
    pub fn endpoint(&self) -> &str {
        self.adapter.endpoint()
    }

    /// Path of the record `id`, with the id escaped as one path segment
    pub fn item_path(&self, id: &ResourceId) -> String {
        format!(
            "{}/{}",
            self.endpoint().trim_end_matches('/'),
            id.path_segment()
        )
    }

    /// Gets every record of the collection
    pub async fn get_all(&self) -> ServiceResult<Vec<A::Item>> {
        info!("Getting all records from {}", self.endpoint());
        let path = self.endpoint().to_string();
        self.fetch_list(&path).await
    }

    /// Gets one record
    ///
    /// Absent, empty, `"undefined"` and `"null"` ids are rejected without a request.
    pub async fn get_by_id(&self, id: impl Into<MaybeId>) -> ServiceResult<A::Item> {
        let id = id.into().validate()?;
        debug!("Getting {} from {}", id, self.endpoint());
        let path = self.item_path(&id);
        self.send_for_item(Method::GET, &path, None, None).await
    }

    /// Creates a record
    pub async fn create(&self, data: &A::Create) -> ServiceResult<A::Item> {
        info!("Creating record in {}", self.endpoint());
        let payload = self
            .adapter
            .prepare_create_payload(data)
            .map_err(|e| internal_failure(self.endpoint(), e))?;
        let path = self.endpoint().to_string();
        let message = self.adapter.messages().created;
        self.send_for_item(Method::POST, &path, Some(payload), Some(message))
            .await
    }

    /// Updates a record with PATCH
    ///
    /// The id is validated as in [`CrudService::get_by_id`].
    pub async fn update(
        &self,
        id: impl Into<MaybeId>,
        data: &A::Update,
    ) -> ServiceResult<A::Item> {
        let id = id.into().validate()?;
        info!("Updating {} in {}", id, self.endpoint());
        let payload = self
            .adapter
            .prepare_update_payload(data)
            .map_err(|e| internal_failure(self.endpoint(), e))?;
        let path = self.item_path(&id);
        let message = self.adapter.messages().updated;
        self.send_for_item(Method::PATCH, &path, Some(payload), Some(message))
            .await
    }

    /// Deletes a record
    ///
    /// The id is validated as in [`CrudService::get_by_id`].
    pub async fn delete(&self, id: impl Into<MaybeId>) -> ServiceResult<()> {
        let id = id.into().validate()?;
        info!("Deleting {} from {}", id, self.endpoint());
        let path = self.item_path(&id);
        self.client
            .request(Method::DELETE, &path, None, RequestOptions::default())
            .await
            .map_err(|e| request_failure("DELETE", &path, e))?;
        Ok(Success::with_message((), self.adapter.messages().deleted))
    }

    /// GETs `path` and decodes the body as a list of records
    pub async fn fetch_list(&self, path: &str) -> ServiceResult<Vec<A::Item>> {
        let raw = self
            .client
            .request(Method::GET, path, None, RequestOptions::default())
            .await
            .map_err(|e| request_failure("GET", path, e))?;
        let items = self
            .adapter
            .transform_list(raw)
            .map_err(|e| internal_failure(path, e))?;
        debug!("{} records obtained from {}", items.len(), path);
        Ok(Success::new(items))
    }

    /// Sends a request and decodes the body as one record
    pub async fn send_for_item(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        message: Option<String>,
    ) -> ServiceResult<A::Item> {
        let raw = self
            .client
            .request(method.clone(), path, body, RequestOptions::default())
            .await
            .map_err(|e| request_failure(method.as_str(), path, e))?;
        let item = self
            .adapter
            .transform_item(raw)
            .map_err(|e| internal_failure(path, e))?;
        Ok(Success { data: item, message })
    }
}
