use crate::application::interfaces::resource::{CrudMessages, RecordAdapter};
use crate::application::services::crud::{CrudService, ServiceResult};
use crate::model::http::ApiTransport;
use crate::model::requests::{MaybeId, SponsorRequest, SponsorshipUpdate};
use crate::model::validation::sponsorship_form;
use crate::presentation::sponsorship::{STATUS_CANCELLED, Sponsorship};
use reqwest::Method;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Collection path for sponsorships
pub const SPONSORSHIPS_ENDPOINT: &str = "/apadrinamientos";
/// Message reported by [`SponsorshipService::sponsor`]
pub const MSG_SPONSORED: &str = "¡Apadrinamiento realizado con éxito!";
/// Message reported by [`SponsorshipService::cancel`]
pub const MSG_CANCELLED: &str = "Apadrinamiento cancelado";

/// Adapter for the sponsorships collection
pub type SponsorshipAdapter = RecordAdapter<Sponsorship, SponsorRequest, SponsorshipUpdate>;

/// Service for the sponsorships collection
pub type SponsorshipService<T> = CrudService<SponsorshipAdapter, T>;

/// Adapter configured for `/apadrinamientos`
#[must_use]
pub fn sponsorship_adapter() -> SponsorshipAdapter {
    SponsorshipAdapter::new(SPONSORSHIPS_ENDPOINT).with_messages(CrudMessages::new(
        MSG_SPONSORED,
        "Apadrinamiento actualizado",
        "Apadrinamiento eliminado",
    ))
}

impl<T: ApiTransport> SponsorshipService<T> {
    /// Creates the sponsorships service over `client`
    pub fn from_client(client: Arc<T>) -> Self {
        CrudService::new(sponsorship_adapter(), client)
    }

    /// Sponsorships of the logged in user
    pub async fn get_mine(&self) -> ServiceResult<Vec<Sponsorship>> {
        info!("Getting sponsorships of current user");
        self.fetch_list(&format!("{SPONSORSHIPS_ENDPOINT}/mis-apadrinamientos"))
            .await
    }

    /// Sponsors `child_id` with a monthly contribution of `monto`
    ///
    /// The child id and the amount are checked before the request is sent.
    pub async fn sponsor(
        &self,
        child_id: impl Into<MaybeId>,
        monto: f64,
    ) -> ServiceResult<Sponsorship> {
        let nino_id = child_id.into().validate()?;
        let monto_text = monto.to_string();
        sponsorship_form().validate(&HashMap::from([("monto_mensual", monto_text.as_str())]))?;
        info!("Sponsoring child {} with {}", nino_id, monto);
        self.create(&SponsorRequest {
            nino_id,
            monto_mensual: monto,
        })
        .await
    }

    /// Cancels a sponsorship by setting its status to `cancelado`
    pub async fn cancel(&self, id: impl Into<MaybeId>) -> ServiceResult<Sponsorship> {
        let id = id.into().validate()?;
        info!("Cancelling sponsorship {}", id);
        let body = serde_json::json!({ "estado": STATUS_CANCELLED });
        let path = self.item_path(&id);
        self.send_for_item(Method::PATCH, &path, Some(body), Some(MSG_CANCELLED.to_string()))
            .await
    }
}
