/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/
use crate::constants::MSG_INVALID_ID;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;

/// Identifier of a backend record, numeric or textual
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Numeric id
    Number(i64),
    /// Textual id (uuid, slug...)
    Text(String),
}

impl ResourceId {
    /// Reads an id out of a JSON value, accepting numbers and non-empty strings
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(ResourceId::Number),
            serde_json::Value::String(s) if !s.trim().is_empty() => {
                Some(ResourceId::Text(s.trim().to_string()))
            }
            _ => None,
        }
    }

    /// The id percent-encoded as a single URL path segment
    ///
    /// `/`, `?` and `#` never leave the segment, and `.` / `..` ids are
    /// escaped so they cannot be resolved against the parent path.
    #[must_use]
    pub fn path_segment(&self) -> String {
        match self {
            ResourceId::Number(n) => n.to_string(),
            ResourceId::Text(s) if s == "." || s == ".." => "%2E".repeat(s.len()),
            ResourceId::Text(s) => form_urlencoded::byte_serialize(s.as_bytes())
                .collect::<String>()
                .replace('+', "%20"),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{n}"),
            ResourceId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(v: i64) -> Self {
        ResourceId::Number(v)
    }
}

impl From<i32> for ResourceId {
    fn from(v: i32) -> Self {
        ResourceId::Number(i64::from(v))
    }
}

impl From<u32> for ResourceId {
    fn from(v: u32) -> Self {
        ResourceId::Number(i64::from(v))
    }
}

impl From<&str> for ResourceId {
    fn from(v: &str) -> Self {
        ResourceId::Text(v.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(v: String) -> Self {
        ResourceId::Text(v)
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(v: &ResourceId) -> Self {
        v.clone()
    }
}

/// Id argument as handed over by a caller, possibly absent or malformed
///
/// Operations addressing a single record take `impl Into<MaybeId>` and call
/// [`MaybeId::validate`] before touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaybeId(Option<ResourceId>);

impl MaybeId {
    /// An absent id
    #[must_use]
    pub fn none() -> Self {
        MaybeId(None)
    }

    /// Checks the id is present and usable
    ///
    /// Rejects absent ids, empty strings and the literals `"undefined"` and `"null"`.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] with the invalid id message.
    pub fn validate(&self) -> Result<ResourceId, AppError> {
        match &self.0 {
            Some(ResourceId::Number(n)) => Ok(ResourceId::Number(*n)),
            Some(ResourceId::Text(s)) => {
                let s = s.trim();
                if s.is_empty() || s == "undefined" || s == "null" {
                    Err(AppError::Validation(MSG_INVALID_ID.to_string()))
                } else {
                    Ok(ResourceId::Text(s.to_string()))
                }
            }
            None => Err(AppError::Validation(MSG_INVALID_ID.to_string())),
        }
    }
}

macro_rules! maybe_id_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for MaybeId {
                fn from(v: $t) -> Self {
                    MaybeId(Some(ResourceId::from(v)))
                }
            }

            impl From<Option<$t>> for MaybeId {
                fn from(v: Option<$t>) -> Self {
                    MaybeId(v.map(ResourceId::from))
                }
            }
        )*
    };
}

maybe_id_from!(i64, i32, u32, &str, String, ResourceId, &ResourceId);

/// Login form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account e-mail
    pub email: String,
    /// Plain password, sent over TLS only
    pub password: String,
}

/// Sign up form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RegisterRequest {
    /// Full name
    pub nombre: String,
    /// Account e-mail
    pub email: String,
    /// Password
    pub password: String,
    /// Password repeated, checked locally and never sent
    #[serde(skip_serializing, default)]
    pub confirm_password: String,
    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub telefono: Option<String>,
}

/// Profile update, only the present fields are sent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProfileUpdateRequest {
    /// Full name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nombre: Option<String>,
    /// Account e-mail
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub telefono: Option<String>,
}

/// Password recovery request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    /// Account e-mail
    pub email: String,
}

/// Password reset with the token received by e-mail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    /// Token from the recovery e-mail
    pub token: String,
    /// New password
    pub password: String,
    /// New password repeated, checked locally and never sent
    #[serde(skip_serializing, default)]
    pub confirm_password: String,
}

/// Request to sponsor a child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SponsorRequest {
    /// Child to sponsor
    pub nino_id: ResourceId,
    /// Monthly contribution
    pub monto_mensual: f64,
}

/// Creation and edition payload for a child record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChildInput {
    /// Name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nombre: Option<String>,
    /// Birth date, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fecha_nacimiento: Option<String>,
    /// Gender
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub genero: Option<String>,
    /// Free text description
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub descripcion: Option<String>,
    /// Photo URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub foto_url: Option<String>,
    /// Status (`disponible`, `apadrinado`...)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub estado: Option<String>,
}

/// Creation and edition payload for a diary entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DiaryEntryInput {
    /// Child the entry belongs to
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nino_id: Option<ResourceId>,
    /// Title
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub titulo: Option<String>,
    /// Body
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contenido: Option<String>,
    /// Entry date, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fecha: Option<String>,
}

/// Edition payload for a sponsorship
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SponsorshipUpdate {
    /// New status
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub estado: Option<String>,
    /// New monthly contribution
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub monto_mensual: Option<f64>,
}

/// Creation and edition payload for an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EventInput {
    /// Title
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub titulo: Option<String>,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub descripcion: Option<String>,
    /// Date, `YYYY-MM-DD` or RFC 3339
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fecha: Option<String>,
    /// Venue
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lugar: Option<String>,
}

/// Creation payload for a donation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DonationInput {
    /// Amount
    pub monto: f64,
    /// Payment method
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metodo: Option<String>,
    /// Optional note from the donor
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mensaje: Option<String>,
}
