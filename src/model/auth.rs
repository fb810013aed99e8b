/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::ResourceId;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Role of an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Sponsor
    #[serde(alias = "sponsor")]
    Padrino,
    /// Platform administrator
    #[serde(alias = "admin", alias = "administrator")]
    Administrador,
    /// Any role this client does not know about
    #[serde(other)]
    Other,
}

impl Role {
    /// Wire name of the role
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Padrino => "padrino",
            Role::Administrador => "administrador",
            Role::Other => "other",
        }
    }

    /// Parses a role name as sent by the backend
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "padrino" | "sponsor" => Role::Padrino,
            "administrador" | "admin" | "administrator" => Role::Administrador,
            _ => Role::Other,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of the logged in user as cached on this side
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// User id
    pub id: ResourceId,
    /// Display name
    #[serde(default)]
    pub nombre: String,
    /// Role
    pub rol: Role,
    /// E-mail, when the backend sends it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserSession {
    /// Builds a session from a login or profile response body
    ///
    /// Fields are looked up at the top level first and then inside a nested
    /// `usuario` or `user` object. The id is read from `usuarioId`, `id` or
    /// `userId`, the name from `nombre` or `name` and the role from `rol` or `role`.
    ///
    /// # Errors
    /// Returns [`AppError::UnexpectedResponse`] when no id or role can be found.
    pub fn from_response(body: &Value) -> Result<Self, AppError> {
        let scopes = search_scopes(body);

        let id = lookup(&scopes, &["usuarioId", "id", "userId", "usuario_id"])
            .and_then(ResourceId::from_value)
            .ok_or_else(|| AppError::UnexpectedResponse("missing user id".to_string()))?;
        let rol = lookup(&scopes, &["rol", "role"])
            .and_then(Value::as_str)
            .map(Role::parse)
            .ok_or_else(|| AppError::UnexpectedResponse("missing user role".to_string()))?;
        let nombre = lookup(&scopes, &["nombre", "name"])
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let email = lookup(&scopes, &["email", "correo"])
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(UserSession {
            id,
            nombre,
            rol,
            email,
        })
    }

    /// Whether the user is a sponsor
    #[must_use]
    pub fn is_padrino(&self) -> bool {
        self.rol == Role::Padrino
    }

    /// Whether the user is an administrator
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.rol == Role::Administrador
    }
}

/// Profile of the logged in user as returned by `/usuarios/perfil`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User id
    pub id: Option<ResourceId>,
    /// Display name
    pub nombre: String,
    /// E-mail
    pub email: Option<String>,
    /// Contact phone
    pub telefono: Option<String>,
    /// Role
    pub rol: Option<Role>,
}

impl UserProfile {
    /// Reads a profile body, flat or nested under `usuario`/`user`
    #[must_use]
    pub fn from_response(body: &Value) -> Self {
        let scopes = search_scopes(body);
        let text = |keys: &[&str]| {
            lookup(&scopes, keys)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        UserProfile {
            id: lookup(&scopes, &["usuarioId", "id", "userId", "usuario_id"])
                .and_then(ResourceId::from_value),
            nombre: text(&["nombre", "name"]).unwrap_or_default(),
            email: text(&["email", "correo"]),
            telefono: text(&["telefono", "phone"]),
            rol: text(&["rol", "role"]).map(|r| Role::parse(&r)),
        }
    }

    /// Session reflecting this profile
    ///
    /// Missing id or role are taken from `current`; without either source
    /// there is no session.
    #[must_use]
    pub fn to_session(&self, current: Option<&UserSession>) -> Option<UserSession> {
        let id = self.id.clone().or_else(|| current.map(|s| s.id.clone()))?;
        let rol = self.rol.or_else(|| current.map(|s| s.rol))?;
        let nombre = if self.nombre.is_empty() {
            current.map(|s| s.nombre.clone()).unwrap_or_default()
        } else {
            self.nombre.clone()
        };
        Some(UserSession {
            id,
            nombre,
            rol,
            email: self
                .email
                .clone()
                .or_else(|| current.and_then(|s| s.email.clone())),
        })
    }
}

fn search_scopes(body: &Value) -> Vec<&Value> {
    [Some(body), body.get("usuario"), body.get("user")]
        .into_iter()
        .flatten()
        .filter(|v| v.is_object())
        .collect()
}

fn lookup<'a>(scopes: &[&'a Value], keys: &[&str]) -> Option<&'a Value> {
    scopes
        .iter()
        .copied()
        .flat_map(|scope| keys.iter().filter_map(move |k| scope.get(*k)))
        .find(|v| !v.is_null())
}
