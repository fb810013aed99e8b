use super::mock_transport::MockTransport;
use assert_json_diff::assert_json_eq;
use padrino_client::application::interfaces::{CrudMessages, RecordAdapter};
use padrino_client::application::services::children::{ChildService, child_adapter};
use padrino_client::application::services::crud::{CrudService, into_envelope};
use padrino_client::constants::{
    MSG_CREATED, MSG_INVALID_ID, MSG_SERVER_ERROR, MSG_UNEXPECTED_RESPONSE,
};
use padrino_client::error::{AppError, ErrorKind};
use padrino_client::model::requests::{ChildInput, MaybeId, ResourceId};
use padrino_client::presentation::Child;
use reqwest::{Method, StatusCode};
use serde_json::json;
use std::sync::Arc;

type PlainService = CrudService<RecordAdapter<Child, ChildInput, ChildInput>, MockTransport>;

fn plain_service(transport: Arc<MockTransport>) -> PlainService {
    CrudService::new(RecordAdapter::new("/ninos"), transport)
}

#[tokio::test]
async fn test_invalid_ids_never_reach_the_transport() {
    let transport = Arc::new(MockTransport::returning(json!({"id": 1})));
    let service = ChildService::from_client(transport.clone());

    let invalid = || {
        vec![
            MaybeId::none(),
            MaybeId::from("undefined"),
            MaybeId::from("null"),
            MaybeId::from(""),
        ]
    };
    for id in invalid() {
        let err = service.get_by_id(id).await.unwrap_err();
        assert_eq!(err.message, MSG_INVALID_ID);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.status_code, 0);
    }
    for id in invalid() {
        assert!(service.update(id, &ChildInput::default()).await.is_err());
    }
    for id in invalid() {
        assert!(service.delete(id).await.is_err());
    }
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_get_all_server_error_becomes_envelope() {
    let transport = Arc::new(MockTransport::failing(
        StatusCode::INTERNAL_SERVER_ERROR,
        MSG_SERVER_ERROR,
    ));
    let service = ChildService::from_client(transport);
    let result = service.get_all().await;
    let err = result.clone().unwrap_err();
    assert_eq!(err.message, "Error en el servidor. Intenta más tarde.");
    assert_eq!(err.status_code, 500);
    assert_eq!(err.kind, ErrorKind::Server);

    let envelope = serde_json::to_value(into_envelope(result)).unwrap();
    assert_json_eq!(
        envelope,
        json!({"success": false, "error": MSG_SERVER_ERROR, "statusCode": 500})
    );
}

#[tokio::test]
async fn test_get_by_id_requests_item_path() {
    let transport = Arc::new(MockTransport::returning(json!({"id": 12, "nombre": "Sofía"})));
    let service = ChildService::from_client(transport.clone());
    let success = service.get_by_id(12).await.unwrap();
    assert_eq!(success.data.nombre, "Sofía");
    assert_eq!(success.message, None);

    let last = transport.last().unwrap();
    assert_eq!(last.method, Method::GET);
    assert_eq!(last.path, "/ninos/12");
}

#[tokio::test]
async fn test_text_ids_stay_in_one_path_segment() {
    let transport = Arc::new(MockTransport::returning(json!({"id": 1})));
    let service = ChildService::from_client(transport.clone());

    service.delete("1/../../usuarios/perfil").await.unwrap();
    let last = transport.last().unwrap();
    assert_eq!(last.method, Method::DELETE);
    assert_eq!(last.path, "/ninos/1%2F..%2F..%2Fusuarios%2Fperfil");

    service.get_by_id("a/b").await.unwrap();
    assert_eq!(transport.last().unwrap().path, "/ninos/a%2Fb");

    service.get_by_id("..").await.unwrap();
    assert_eq!(transport.last().unwrap().path, "/ninos/%2E%2E");
}

#[tokio::test]
async fn test_create_default_and_custom_message() {
    let transport = Arc::new(MockTransport::returning(json!({"id": 1, "nombre": "Leo"})));
    let input = ChildInput {
        nombre: Some("Leo".to_string()),
        ..ChildInput::default()
    };

    let plain = plain_service(transport.clone()).create(&input).await.unwrap();
    assert_eq!(plain.message.as_deref(), Some(MSG_CREATED));
    assert_eq!(plain.data.id, ResourceId::Number(1));

    let custom = ChildService::from_client(transport.clone())
        .create(&input)
        .await
        .unwrap();
    assert_eq!(custom.message.as_deref(), Some("Niño registrado exitosamente"));

    let last = transport.last().unwrap();
    assert_eq!(last.method, Method::POST);
    assert_eq!(last.path, "/ninos");
    assert_eq!(last.body, Some(json!({"nombre": "Leo"})));
}

#[tokio::test]
async fn test_update_patches_and_delete_reports_message() {
    let transport = Arc::new(MockTransport::new(|method, _| {
        if *method == Method::DELETE {
            Ok(serde_json::Value::Null)
        } else {
            Ok(json!({"id": "a1", "estado": "disponible"}))
        }
    }));
    let service = CrudService::new(
        child_adapter().with_messages(CrudMessages::new("c", "u", "d")),
        transport.clone(),
    );

    let updated = service
        .update("a1", &ChildInput {
            estado: Some("disponible".to_string()),
            ..ChildInput::default()
        })
        .await
        .unwrap();
    assert!(updated.data.disponible);
    assert_eq!(updated.message.as_deref(), Some("u"));
    assert_eq!(transport.last().unwrap().method, Method::PATCH);

    let deleted = service.delete("a1").await.unwrap();
    assert_eq!(deleted.message.as_deref(), Some("d"));
    assert_eq!(transport.last().unwrap().path, "/ninos/a1");
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_undecodable_body_is_internal_error() {
    let transport = Arc::new(MockTransport::returning(json!("OK")));
    let err = plain_service(transport).get_by_id(1).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Internal);
    assert_eq!(err.message, MSG_UNEXPECTED_RESPONSE);
}

#[tokio::test]
async fn test_network_failure_has_status_zero() {
    let transport = Arc::new(MockTransport::new(|_, _| {
        Err(AppError::Network("connection refused".to_string()))
    }));
    let err = plain_service(transport).get_all().await.unwrap_err();
    assert_eq!(err.status_code, 0);
    assert_eq!(err.kind, ErrorKind::Network);
    assert!(!err.requires_login());
}

#[tokio::test]
async fn test_success_envelope_shape() {
    let transport = Arc::new(MockTransport::returning(json!([])));
    let result = plain_service(transport).get_all().await;
    let envelope = serde_json::to_value(into_envelope(result)).unwrap();
    assert_json_eq!(envelope, json!({"success": true, "data": []}));
}
