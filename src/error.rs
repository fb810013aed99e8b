/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Error types for the padrino client
//!
//! [`AppError`] is produced by the transport layer and by local operations
//! (storage, validation, decoding). Services never hand it to their callers:
//! they convert it into a [`crate::application::services::crud::ServiceError`].

use crate::constants::{MSG_NETWORK_ERROR, MSG_STORAGE_ERROR, MSG_UNEXPECTED_RESPONSE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Transport failure, no HTTP status was received
    Network,
    /// 4xx response
    Client,
    /// 5xx response
    Server,
    /// Rejected locally before any request was sent
    Validation,
    /// Decoding, storage or I/O failure on this side
    Internal,
}

impl ErrorKind {
    /// Classifies an HTTP status code
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_server_error() {
            ErrorKind::Server
        } else {
            ErrorKind::Client
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Network => "network",
            ErrorKind::Client => "client",
            ErrorKind::Server => "server",
            ErrorKind::Validation => "validation",
            ErrorKind::Internal => "internal",
        };
        write!(f, "{name}")
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The request never produced a response
    Network(String),
    /// The backend answered with a non-2xx status
    Http {
        /// Response status
        status: StatusCode,
        /// Mapped, human readable message
        message: String,
        /// Response body as received, if any
        raw_body: Option<String>,
    },
    /// Input rejected before any network call
    Validation(String),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
    /// Key-value storage failure
    Storage(String),
    /// A 2xx body did not have the expected shape
    UnexpectedResponse(String),
}

impl AppError {
    /// Returns the HTTP status code, `0` when no response was involved
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Http { status, .. } => status.as_u16(),
            _ => 0,
        }
    }

    /// Returns the failure classification
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network(_) => ErrorKind::Network,
            AppError::Http { status, .. } => ErrorKind::from_status(*status),
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Json(_)
            | AppError::Io(_)
            | AppError::Storage(_)
            | AppError::UnexpectedResponse(_) => ErrorKind::Internal,
        }
    }

    /// Message suitable for direct display to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => MSG_NETWORK_ERROR.to_string(),
            AppError::Http { message, .. } => message.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Json(_) | AppError::UnexpectedResponse(_) => {
                MSG_UNEXPECTED_RESPONSE.to_string()
            }
            AppError::Io(_) | AppError::Storage(_) => MSG_STORAGE_ERROR.to_string(),
        }
    }

    /// Whether the backend rejected the session (401)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Http { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Http {
                status, message, ..
            } => write!(f, "http error {}: {message}", status.as_u16()),
            AppError::Validation(e) => write!(f, "validation error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Storage(e) => write!(f, "storage error: {e}"),
            AppError::UnexpectedResponse(e) => write!(f, "unexpected response: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}
