/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/

//! Composable form validation
//!
//! A [`FormValidator`] holds an ordered list of [`Rule`]s per field. Validation
//! reports the first failing rule of every field, so a form can be checked
//! before anything is sent to the backend.

use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ]{7,15}$").expect("valid phone regex"));

/// Minimum password length accepted by the backend
pub const MIN_PASSWORD_LEN: usize = 6;

/// A single check applied to a field value
#[derive(Debug, Clone)]
pub enum Rule {
    /// Non blank
    Required,
    /// Looks like an e-mail address
    Email,
    /// At least `n` characters
    MinLength(usize),
    /// At most `n` characters
    MaxLength(usize),
    /// Parses as a number
    Numeric,
    /// Parses as a number greater than zero
    Positive,
    /// Matches the regex, otherwise fails with the message
    Matches(Regex, String),
    /// Equal to another field of the same form, otherwise fails with the message
    SameAs(String, String),
}

impl Rule {
    /// Checks `value`, returning the failure message
    ///
    /// Every rule except [`Rule::Required`] accepts an empty value so optional
    /// fields can carry format rules.
    fn check(&self, value: &str, form: &HashMap<&str, &str>) -> Option<String> {
        let value = value.trim();
        if value.is_empty() && !matches!(self, Rule::Required | Rule::SameAs(..)) {
            return None;
        }
        match self {
            Rule::Required if value.is_empty() => Some("Este campo es obligatorio".to_string()),
            Rule::Email if !EMAIL_RE.is_match(value) => {
                Some("Ingresa un correo electrónico válido".to_string())
            }
            Rule::MinLength(n) if value.chars().count() < *n => {
                Some(format!("Debe tener al menos {n} caracteres"))
            }
            Rule::MaxLength(n) if value.chars().count() > *n => {
                Some(format!("Debe tener como máximo {n} caracteres"))
            }
            Rule::Numeric if value.parse::<f64>().is_err() => {
                Some("Debe ser un número".to_string())
            }
            Rule::Positive => match value.parse::<f64>() {
                Ok(n) if n.is_finite() && n > 0.0 => None,
                _ => Some("Debe ser un número mayor que cero".to_string()),
            },
            Rule::Matches(re, message) if !re.is_match(value) => Some(message.clone()),
            Rule::SameAs(other, message) => {
                let other_value = form.get(other.as_str()).map(|v| v.trim()).unwrap_or_default();
                (other_value != value).then(|| message.clone())
            }
            _ => None,
        }
    }
}

/// Field name to first failure message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Whether no field failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failure message for `field`
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// All failures ordered by field name
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// First message, in field order
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.errors.values().next().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(
            errors
                .first_message()
                .unwrap_or("Formulario inválido")
                .to_string(),
        )
    }
}

/// Ordered rules per field
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    fields: Vec<(String, Vec<Rule>)>,
}

impl FormValidator {
    /// Creates a validator without rules
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds rules for `field`, appending to existing ones
    #[must_use]
    pub fn field(mut self, field: &str, rules: Vec<Rule>) -> Self {
        match self.fields.iter().position(|(name, _)| name == field) {
            Some(pos) => self.fields[pos].1.extend(rules),
            None => self.fields.push((field.to_string(), rules)),
        }
        self
    }

    /// Combines two validators, keeping the rules of both
    #[must_use]
    pub fn merge(self, other: FormValidator) -> Self {
        other
            .fields
            .into_iter()
            .fold(self, |acc, (field, rules)| acc.field(&field, rules))
    }

    /// Validates a form given as field name to value
    ///
    /// Missing fields are treated as empty.
    ///
    /// # Errors
    /// Returns the first failing message of each failing field.
    pub fn validate(&self, form: &HashMap<&str, &str>) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for (field, rules) in &self.fields {
            let value = form.get(field.as_str()).copied().unwrap_or_default();
            if let Some(msg) = rules.iter().find_map(|rule| rule.check(value, form)) {
                errors.errors.insert(field.clone(), msg);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Rules for the login form (`email`, `password`)
#[must_use]
pub fn login_form() -> FormValidator {
    FormValidator::new()
        .field("email", vec![Rule::Required, Rule::Email])
        .field("password", vec![Rule::Required])
}

/// Rules for the sign up form
#[must_use]
pub fn register_form() -> FormValidator {
    FormValidator::new()
        .field("nombre", vec![Rule::Required, Rule::MinLength(2), Rule::MaxLength(100)])
        .merge(login_form())
        .field("password", vec![Rule::MinLength(MIN_PASSWORD_LEN)])
        .field(
            "confirm_password",
            vec![Rule::SameAs(
                "password".to_string(),
                "Las contraseñas no coinciden".to_string(),
            )],
        )
        .field(
            "telefono",
            vec![Rule::Matches(
                Regex::clone(&PHONE_RE),
                "Ingresa un teléfono válido".to_string(),
            )],
        )
}

/// Rules for the password reset form
#[must_use]
pub fn reset_password_form() -> FormValidator {
    FormValidator::new()
        .field("token", vec![Rule::Required])
        .field("password", vec![Rule::Required, Rule::MinLength(MIN_PASSWORD_LEN)])
        .field(
            "confirm_password",
            vec![Rule::SameAs(
                "password".to_string(),
                "Las contraseñas no coinciden".to_string(),
            )],
        )
}

/// Rules for the sponsorship form (`monto_mensual`)
#[must_use]
pub fn sponsorship_form() -> FormValidator {
    FormValidator::new().field("monto_mensual", vec![Rule::Required, Rule::Positive])
}
