use crate::application::interfaces::resource::{CrudMessages, RecordAdapter};
use crate::application::services::crud::CrudService;
use crate::model::http::ApiTransport;
use crate::model::requests::EventInput;
use crate::presentation::event::Event;
use std::sync::Arc;

/// Collection path for events
pub const EVENTS_ENDPOINT: &str = "/eventos";

/// Adapter for the events collection
pub type EventAdapter = RecordAdapter<Event, EventInput, EventInput>;

/// Service for the events collection
pub type EventService<T> = CrudService<EventAdapter, T>;

/// Adapter configured for `/eventos`
#[must_use]
pub fn event_adapter() -> EventAdapter {
    EventAdapter::new(EVENTS_ENDPOINT).with_messages(CrudMessages::new(
        "Evento creado exitosamente",
        "Evento actualizado exitosamente",
        "Evento eliminado exitosamente",
    ))
}

impl<T: ApiTransport> EventService<T> {
    /// Creates the events service over `client`
    pub fn from_client(client: Arc<T>) -> Self {
        CrudService::new(event_adapter(), client)
    }
}
