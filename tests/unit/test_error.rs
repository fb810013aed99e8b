use padrino_client::constants::{MSG_NETWORK_ERROR, MSG_STORAGE_ERROR, MSG_UNEXPECTED_RESPONSE};
use padrino_client::error::{AppError, ErrorKind};
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_network() {
    let error = AppError::Network("connection refused".to_string());
    assert_eq!(error.to_string(), "network error: connection refused");
}

#[test]
fn test_app_error_display_http() {
    let error = AppError::Http {
        status: StatusCode::NOT_FOUND,
        message: "Recurso no encontrado".to_string(),
        raw_body: None,
    };
    assert_eq!(error.to_string(), "http error 404: Recurso no encontrado");
}

#[test]
fn test_app_error_display_validation() {
    let error = AppError::Validation("ID inválido".to_string());
    assert_eq!(error.to_string(), "validation error: ID inválido");
}

#[test]
fn test_app_error_display_storage() {
    let error = AppError::Storage("disk full".to_string());
    assert_eq!(error.to_string(), "storage error: disk full");
}

#[test]
fn test_app_error_from_serde() {
    let serde_error =
        serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(matches!(app_error, AppError::Json(_)));
    assert!(app_error.source().is_some());
    assert_eq!(app_error.user_message(), MSG_UNEXPECTED_RESPONSE);
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::Io(_)));
    assert_eq!(app_error.kind(), ErrorKind::Internal);
    assert_eq!(app_error.user_message(), MSG_STORAGE_ERROR);
}

#[test]
fn test_status_code_zero_without_response() {
    assert_eq!(AppError::Network("x".to_string()).status_code(), 0);
    assert_eq!(AppError::Validation("x".to_string()).status_code(), 0);
    assert_eq!(
        AppError::Network("x".to_string()).user_message(),
        MSG_NETWORK_ERROR
    );
}

#[test]
fn test_kind_by_status_band() {
    let client = AppError::Http {
        status: StatusCode::BAD_REQUEST,
        message: String::new(),
        raw_body: None,
    };
    let server = AppError::Http {
        status: StatusCode::BAD_GATEWAY,
        message: String::new(),
        raw_body: None,
    };
    assert_eq!(client.kind(), ErrorKind::Client);
    assert_eq!(server.kind(), ErrorKind::Server);
    assert_eq!(AppError::Network(String::new()).kind(), ErrorKind::Network);
    assert_eq!(AppError::Validation(String::new()).kind(), ErrorKind::Validation);
}

#[test]
fn test_is_unauthorized() {
    let error = AppError::Http {
        status: StatusCode::UNAUTHORIZED,
        message: String::new(),
        raw_body: None,
    };
    assert!(error.is_unauthorized());
    assert!(!AppError::Network(String::new()).is_unauthorized());
}

#[test]
fn test_error_kind_serde() {
    assert_eq!(serde_json::to_string(&ErrorKind::Validation).unwrap(), "\"validation\"");
    assert_eq!(ErrorKind::Server.to_string(), "server");
}
