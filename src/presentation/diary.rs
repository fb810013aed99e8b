use crate::application::interfaces::resource::Record;
use crate::model::requests::ResourceId;
use crate::presentation::serialization::{format_display_date, parse_date};
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Progress note about a sponsored child (bitácora)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, DisplaySimple)]
pub struct DiaryEntry {
    /// Record id
    pub id: ResourceId,
    /// Child the entry belongs to
    #[serde(default, alias = "ninoId")]
    pub nino_id: Option<ResourceId>,
    /// Title
    #[serde(default)]
    pub titulo: String,
    /// Body
    #[serde(default)]
    pub contenido: String,
    /// Entry date as sent by the backend
    #[serde(default)]
    pub fecha: Option<String>,
    /// `fecha` formatted for display
    #[serde(default)]
    pub fecha_display: String,
}

impl Record for DiaryEntry {
    fn fill_derived(&mut self, _today: NaiveDate) {
        self.fecha_display = self
            .fecha
            .as_deref()
            .map(format_display_date)
            .unwrap_or_default();
    }
}

impl DiaryEntry {
    /// Orders entries newest first; entries without a parseable date go last
    #[must_use]
    pub fn newest_first(a: &DiaryEntry, b: &DiaryEntry) -> Ordering {
        let da = a.fecha.as_deref().and_then(parse_date);
        let db = b.fecha.as_deref().and_then(parse_date);
        match (da, db) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
