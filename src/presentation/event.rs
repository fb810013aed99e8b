use crate::application::interfaces::resource::Record;
use crate::model::requests::ResourceId;
use crate::presentation::serialization::format_display_date;
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Fundraising or community event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, DisplaySimple)]
pub struct Event {
    /// Record id
    pub id: ResourceId,
    /// Title
    #[serde(default)]
    pub titulo: String,
    /// Description
    #[serde(default)]
    pub descripcion: Option<String>,
    /// Date as sent by the backend
    #[serde(default)]
    pub fecha: Option<String>,
    /// Venue
    #[serde(default)]
    pub lugar: Option<String>,
    /// `fecha` formatted for display
    #[serde(default)]
    pub fecha_display: String,
}

impl Record for Event {
    fn fill_derived(&mut self, _today: NaiveDate) {
        self.fecha_display = self
            .fecha
            .as_deref()
            .map(format_display_date)
            .unwrap_or_default();
    }
}
