use crate::application::interfaces::resource::{CrudMessages, RecordAdapter};
use crate::application::services::crud::{CrudService, ServiceResult};
use crate::model::http::ApiTransport;
use crate::model::requests::{DiaryEntryInput, MaybeId};
use crate::presentation::diary::DiaryEntry;
use std::sync::Arc;
use tracing::info;

/// Collection path for diary entries
pub const DIARY_ENDPOINT: &str = "/bitacora";

/// Adapter for the diary (bitácora) collection
pub type DiaryAdapter = RecordAdapter<DiaryEntry, DiaryEntryInput, DiaryEntryInput>;

/// Service for the diary (bitácora) collection
pub type DiaryService<T> = CrudService<DiaryAdapter, T>;

/// Adapter configured for `/bitacora`, listing newest entries first
#[must_use]
pub fn diary_adapter() -> DiaryAdapter {
    DiaryAdapter::new(DIARY_ENDPOINT)
        .with_messages(CrudMessages::new(
            "Entrada de bitácora creada exitosamente",
            "Entrada de bitácora actualizada",
            "Entrada de bitácora eliminada",
        ))
        .with_order(DiaryEntry::newest_first)
}

impl<T: ApiTransport> DiaryService<T> {
    /// Creates the diary service over `client`
    pub fn from_client(client: Arc<T>) -> Self {
        CrudService::new(diary_adapter(), client)
    }

    /// Entries about one child, newest first
    ///
    /// The child id is validated like any record id.
    pub async fn get_by_child(
        &self,
        child_id: impl Into<MaybeId>,
    ) -> ServiceResult<Vec<DiaryEntry>> {
        let child_id = child_id.into().validate()?;
        info!("Getting diary entries for child {}", child_id);
        let path = format!("{DIARY_ENDPOINT}/nino/{}", child_id.path_segment());
        self.fetch_list(&path).await
    }
}
