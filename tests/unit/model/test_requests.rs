use padrino_client::constants::MSG_INVALID_ID;
use padrino_client::error::AppError;
use padrino_client::model::requests::{
    ChildInput, MaybeId, RegisterRequest, ResetPasswordRequest, ResourceId, SponsorRequest,
};
use serde_json::json;

#[test]
fn test_maybe_id_rejects_unusable_ids() {
    for id in [
        MaybeId::none(),
        MaybeId::from(""),
        MaybeId::from("  "),
        MaybeId::from("undefined"),
        MaybeId::from("null"),
        MaybeId::from(None::<i64>),
    ] {
        match id.validate() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, MSG_INVALID_ID),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}

#[test]
fn test_maybe_id_accepts_numbers_and_text() {
    assert_eq!(MaybeId::from(7).validate().unwrap(), ResourceId::Number(7));
    assert_eq!(MaybeId::from(Some(0_i64)).validate().unwrap(), ResourceId::Number(0));
    assert_eq!(
        MaybeId::from(" abc-1 ").validate().unwrap(),
        ResourceId::Text("abc-1".to_string())
    );
}

#[test]
fn test_resource_id_untagged_serde() {
    let ids: Vec<ResourceId> = serde_json::from_value(json!([3, "x-9"])).unwrap();
    assert_eq!(ids, vec![ResourceId::Number(3), ResourceId::Text("x-9".to_string())]);
    assert_eq!(ResourceId::Number(3).to_string(), "3");
    assert_eq!(ResourceId::from_value(&json!("")), None);
    assert_eq!(ResourceId::from_value(&json!(true)), None);
}

#[test]
fn test_resource_id_path_segment() {
    assert_eq!(ResourceId::Number(42).path_segment(), "42");
    assert_eq!(ResourceId::from("abc-1").path_segment(), "abc-1");
    assert_eq!(ResourceId::from("a/b").path_segment(), "a%2Fb");
    assert_eq!(ResourceId::from("a b").path_segment(), "a%20b");
    assert_eq!(ResourceId::from("x?y#z").path_segment(), "x%3Fy%23z");
    assert_eq!(ResourceId::from("..").path_segment(), "%2E%2E");
    assert_eq!(ResourceId::from(".").path_segment(), "%2E");
}

#[test]
fn test_confirmation_fields_are_not_sent() {
    let register = RegisterRequest {
        nombre: "Ana".to_string(),
        email: "ana@example.org".to_string(),
        password: "secreto".to_string(),
        confirm_password: "secreto".to_string(),
        telefono: None,
    };
    assert_eq!(
        serde_json::to_value(&register).unwrap(),
        json!({"nombre": "Ana", "email": "ana@example.org", "password": "secreto"})
    );

    let reset = ResetPasswordRequest {
        token: "t".to_string(),
        password: "nueva1".to_string(),
        confirm_password: "nueva1".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&reset).unwrap(),
        json!({"token": "t", "password": "nueva1"})
    );
}

#[test]
fn test_partial_inputs_skip_absent_fields() {
    let input = ChildInput {
        nombre: Some("Luis".to_string()),
        estado: Some("disponible".to_string()),
        ..ChildInput::default()
    };
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({"nombre": "Luis", "estado": "disponible"})
    );
}

#[test]
fn test_sponsor_request_payload() {
    let request = SponsorRequest {
        nino_id: ResourceId::Number(4),
        monto_mensual: 25.5,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"nino_id": 4, "monto_mensual": 25.5})
    );
}
