use crate::application::interfaces::resource::{CrudMessages, RecordAdapter};
use crate::application::services::crud::{CrudService, ServiceResult};
use crate::model::http::ApiTransport;
use crate::model::requests::ChildInput;
use crate::presentation::child::Child;
use std::sync::Arc;
use tracing::info;

/// Collection path for children
pub const CHILDREN_ENDPOINT: &str = "/ninos";

/// Adapter for the children collection
pub type ChildAdapter = RecordAdapter<Child, ChildInput, ChildInput>;

/// Service for the children collection
pub type ChildService<T> = CrudService<ChildAdapter, T>;

/// Adapter configured for `/ninos`
#[must_use]
pub fn child_adapter() -> ChildAdapter {
    ChildAdapter::new(CHILDREN_ENDPOINT).with_messages(CrudMessages::new(
        "Niño registrado exitosamente",
        "Información del niño actualizada",
        "Niño eliminado exitosamente",
    ))
}

impl<T: ApiTransport> ChildService<T> {
    /// Creates the children service over `client`
    pub fn from_client(client: Arc<T>) -> Self {
        CrudService::new(child_adapter(), client)
    }

    /// Children waiting for a sponsor
    pub async fn get_available(&self) -> ServiceResult<Vec<Child>> {
        info!("Getting available children");
        self.fetch_list(&format!("{CHILDREN_ENDPOINT}/disponibles"))
            .await
    }

    /// Children sponsored by the logged in user
    pub async fn get_my_children(&self) -> ServiceResult<Vec<Child>> {
        info!("Getting sponsored children of current user");
        self.fetch_list(&format!("{CHILDREN_ENDPOINT}/mis-ninos"))
            .await
    }
}
