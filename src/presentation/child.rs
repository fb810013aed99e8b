use crate::application::interfaces::resource::Record;
use crate::model::requests::ResourceId;
use crate::presentation::serialization::{age_on, number_or_string_u32_opt, parse_date};
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Status value of a child waiting for a sponsor
pub const STATUS_AVAILABLE: &str = "disponible";

/// A child that can be, or already is, sponsored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, DisplaySimple)]
pub struct Child {
    /// Record id
    pub id: ResourceId,
    /// Name
    #[serde(default)]
    pub nombre: String,
    /// Age in years, computed from the birth date when the backend omits it
    #[serde(default, deserialize_with = "number_or_string_u32_opt")]
    pub edad: Option<u32>,
    /// Birth date as sent by the backend
    #[serde(default, alias = "fechaNacimiento")]
    pub fecha_nacimiento: Option<String>,
    /// Gender
    #[serde(default)]
    pub genero: Option<String>,
    /// Free text description
    #[serde(default)]
    pub descripcion: Option<String>,
    /// Photo URL
    #[serde(default, alias = "fotoUrl")]
    pub foto_url: Option<String>,
    /// Status (`disponible`, `apadrinado`...)
    #[serde(default)]
    pub estado: Option<String>,
    /// Whether the child is waiting for a sponsor
    #[serde(default)]
    pub disponible: bool,
}

/// `disponible` follows `estado`. `edad` is computed from `fecha_nacimiento`
/// as of `today` when missing.
impl Record for Child {
    fn fill_derived(&mut self, today: NaiveDate) {
        if let Some(estado) = self.estado.as_deref() {
            self.disponible = estado.trim().eq_ignore_ascii_case(STATUS_AVAILABLE);
        }
        if self.edad.is_none() {
            self.edad = self
                .fecha_nacimiento
                .as_deref()
                .and_then(parse_date)
                .and_then(|birth| age_on(birth, today));
        }
    }
}
