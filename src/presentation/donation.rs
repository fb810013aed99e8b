use crate::application::interfaces::resource::Record;
use crate::model::requests::ResourceId;
use crate::presentation::serialization::number_or_string_f64_opt;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// One-off donation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, DisplaySimple)]
pub struct Donation {
    /// Record id
    pub id: ResourceId,
    /// Amount
    #[serde(default, deserialize_with = "number_or_string_f64_opt")]
    pub monto: Option<f64>,
    /// Date as sent by the backend
    #[serde(default)]
    pub fecha: Option<String>,
    /// Payment method
    #[serde(default, alias = "metodoPago", alias = "metodo_pago")]
    pub metodo: Option<String>,
    /// Donor name
    #[serde(default)]
    pub donante: Option<String>,
}

impl Record for Donation {}
