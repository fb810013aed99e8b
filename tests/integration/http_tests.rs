use crate::common;
use mockito::Matcher;
use padrino_client::error::AppError;
use padrino_client::model::http::HttpClient;
use serde_json::{Value, json};

#[tokio::test]
async fn test_conflict_message_passes_through() {
    let (mut server, client) = common::client_for_mock_server().await;
    let mock = server
        .mock("POST", "/apadrinamientos")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Este niño ya tiene padrino"}"#)
        .create_async()
        .await;

    let err = client.post("/apadrinamientos", json!({})).await.unwrap_err();
    mock.assert_async().await;
    assert_eq!(err.status_code(), 409);
    assert_eq!(err.user_message(), "Este niño ya tiene padrino");
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let (mut server, client) = common::client_for_mock_server().await;
    server
        .mock("GET", "/eventos")
        .with_status(400)
        .with_header("content-type", "text/plain")
        .with_body("Parámetro inválido")
        .create_async()
        .await;

    let err = client.get("/eventos").await.unwrap_err();
    match err {
        AppError::Http {
            message, raw_body, ..
        } => {
            assert_eq!(message, "Parámetro inválido");
            assert_eq!(raw_body.as_deref(), Some("Parámetro inválido"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_success_bodies() {
    let (mut server, client) = common::client_for_mock_server().await;
    server
        .mock("DELETE", "/eventos/3")
        .with_status(204)
        .create_async()
        .await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("OK")
        .create_async()
        .await;

    assert_eq!(client.delete("/eventos/3").await.unwrap(), Value::Null);
    assert_eq!(client.get("/health").await.unwrap(), json!("OK"));
}

#[tokio::test]
async fn test_json_headers_and_body_are_sent() {
    let (mut server, client) = common::client_for_mock_server().await;
    let mock = server
        .mock("PATCH", "/ninos/5")
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_header("x-request-id", Matcher::Regex("^[A-Z0-9]{12}$".to_string()))
        .match_body(Matcher::Json(json!({"estado": "apadrinado"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 5, "estado": "apadrinado"}"#)
        .create_async()
        .await;

    let body = client
        .patch("/ninos/5", json!({"estado": "apadrinado"}))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(body["estado"], "apadrinado");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let client = HttpClient::new("http://127.0.0.1:9").unwrap();
    let err = client.get("/ninos").await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
    assert_eq!(err.status_code(), 0);
}
