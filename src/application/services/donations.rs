use crate::application::interfaces::resource::{CrudMessages, RecordAdapter};
use crate::application::services::crud::{CrudService, ServiceResult};
use crate::model::http::ApiTransport;
use crate::model::requests::DonationInput;
use crate::model::validation::{FormValidator, Rule};
use crate::presentation::donation::Donation;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Collection path for donations
pub const DONATIONS_ENDPOINT: &str = "/donaciones";

/// Adapter for the donations collection
pub type DonationAdapter = RecordAdapter<Donation, DonationInput, DonationInput>;

/// Service for the donations collection
pub type DonationService<T> = CrudService<DonationAdapter, T>;

/// Adapter configured for `/donaciones`
#[must_use]
pub fn donation_adapter() -> DonationAdapter {
    DonationAdapter::new(DONATIONS_ENDPOINT).with_messages(CrudMessages::new(
        "¡Gracias por tu donación!",
        "Donación actualizada",
        "Donación eliminada",
    ))
}

impl<T: ApiTransport> DonationService<T> {
    /// Creates the donations service over `client`
    pub fn from_client(client: Arc<T>) -> Self {
        CrudService::new(donation_adapter(), client)
    }

    /// Donations made by the logged in user
    pub async fn get_mine(&self) -> ServiceResult<Vec<Donation>> {
        info!("Getting donations of current user");
        self.fetch_list(&format!("{DONATIONS_ENDPOINT}/mis-donaciones"))
            .await
    }

    /// Registers a donation after checking the amount is positive
    pub async fn donate(&self, donation: &DonationInput) -> ServiceResult<Donation> {
        let monto = donation.monto.to_string();
        FormValidator::new()
            .field("monto", vec![Rule::Required, Rule::Positive])
            .validate(&HashMap::from([("monto", monto.as_str())]))?;
        self.create(donation).await
    }
}
