use padrino_client::error::AppError;
use padrino_client::model::validation::{
    FormValidator, Rule, register_form, reset_password_form, sponsorship_form,
};
use regex::Regex;
use std::collections::HashMap;

#[test]
fn test_register_form_valid() {
    let form = HashMap::from([
        ("nombre", "Ana Pérez"),
        ("email", "ana@example.org"),
        ("password", "secreto"),
        ("confirm_password", "secreto"),
    ]);
    assert!(register_form().validate(&form).is_ok());
}

#[test]
fn test_register_form_reports_each_field() {
    let form = HashMap::from([
        ("nombre", "A"),
        ("email", "ana@example.org"),
        ("password", "123"),
        ("confirm_password", "321"),
        ("telefono", "abc"),
    ]);
    let errors = register_form().validate(&form).unwrap_err();
    assert_eq!(errors.get("nombre"), Some("Debe tener al menos 2 caracteres"));
    assert_eq!(errors.get("password"), Some("Debe tener al menos 6 caracteres"));
    assert_eq!(errors.get("confirm_password"), Some("Las contraseñas no coinciden"));
    assert_eq!(errors.get("telefono"), Some("Ingresa un teléfono válido"));
    assert_eq!(errors.get("email"), None);
    assert_eq!(errors.fields().len(), 4);
}

#[test]
fn test_reset_password_form() {
    let form = HashMap::from([
        ("token", ""),
        ("password", "nueva12"),
        ("confirm_password", "nueva12"),
    ]);
    let errors = reset_password_form().validate(&form).unwrap_err();
    assert_eq!(errors.get("token"), Some("Este campo es obligatorio"));
    assert_eq!(errors.fields().len(), 1);
}

#[test]
fn test_sponsorship_form_amount() {
    let validator = sponsorship_form();
    assert!(validator.validate(&HashMap::from([("monto_mensual", "30")])).is_ok());
    for bad in ["0", "-5", "treinta", "", "inf", "NaN", "-inf"] {
        assert!(
            validator
                .validate(&HashMap::from([("monto_mensual", bad)]))
                .is_err(),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_custom_rules_compose() {
    let validator = FormValidator::new()
        .field("codigo", vec![Rule::Required])
        .merge(FormValidator::new().field(
            "codigo",
            vec![Rule::Matches(
                Regex::new(r"^[A-Z]{3}$").unwrap(),
                "Código inválido".to_string(),
            )],
        ))
        .field("edad", vec![Rule::Numeric, Rule::MaxLength(3)]);
    let errors = validator
        .validate(&HashMap::from([("codigo", "ab"), ("edad", "x")]))
        .unwrap_err();
    assert_eq!(errors.get("codigo"), Some("Código inválido"));
    assert_eq!(errors.get("edad"), Some("Debe ser un número"));
}

#[test]
fn test_validation_errors_into_app_error() {
    let errors = FormValidator::new()
        .field("email", vec![Rule::Required])
        .validate(&HashMap::new())
        .unwrap_err();
    assert_eq!(errors.to_string(), "email: Este campo es obligatorio");
    match AppError::from(errors) {
        AppError::Validation(msg) => assert_eq!(msg, "Este campo es obligatorio"),
        other => panic!("unexpected error: {other:?}"),
    }
}
