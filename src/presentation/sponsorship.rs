use crate::application::interfaces::resource::Record;
use crate::model::requests::ResourceId;
use crate::presentation::child::Child;
use crate::presentation::serialization::number_or_string_f64_opt;
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Status value of a running sponsorship
pub const STATUS_ACTIVE: &str = "activo";
/// Status value set when a sponsorship is cancelled
pub const STATUS_CANCELLED: &str = "cancelado";

/// Relationship between a sponsor and a child (apadrinamiento)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, DisplaySimple)]
pub struct Sponsorship {
    /// Record id
    pub id: ResourceId,
    /// Sponsor
    #[serde(default, alias = "padrinoId")]
    pub padrino_id: Option<ResourceId>,
    /// Sponsored child
    #[serde(default, alias = "ninoId")]
    pub nino_id: Option<ResourceId>,
    /// Child record, when the backend embeds it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nino: Option<Child>,
    /// Start date as sent by the backend
    #[serde(default, alias = "fechaInicio")]
    pub fecha_inicio: Option<String>,
    /// Status (`activo`, `cancelado`...)
    #[serde(default)]
    pub estado: Option<String>,
    /// Monthly contribution
    #[serde(
        default,
        alias = "montoMensual",
        deserialize_with = "number_or_string_f64_opt"
    )]
    pub monto_mensual: Option<f64>,
    /// Whether the sponsorship is running
    #[serde(default)]
    pub activo: bool,
}

impl Record for Sponsorship {
    fn fill_derived(&mut self, today: NaiveDate) {
        if let Some(estado) = self.estado.as_deref() {
            self.activo = estado.trim().eq_ignore_ascii_case(STATUS_ACTIVE);
        }
        if let Some(nino) = self.nino.as_mut() {
            nino.fill_derived(today);
            if self.nino_id.is_none() {
                self.nino_id = Some(nino.id.clone());
            }
        }
    }
}
