/// Module containing authentication and profile operations
pub mod auth;
/// Module containing the children service
pub mod children;
/// Module containing the generic CRUD service and result envelope
pub mod crud;
/// Module containing the diary (bitácora) service
pub mod diary;
/// Module containing the donations service
pub mod donations;
/// Module containing the events service
pub mod events;
/// Module containing the sponsorships service
pub mod sponsorship;

pub use auth::AuthService;
pub use children::{ChildAdapter, ChildService};
pub use crud::{CrudService, Envelope, ServiceError, ServiceResult, Success, into_envelope};
pub use diary::{DiaryAdapter, DiaryService};
pub use donations::{DonationAdapter, DonationService};
pub use events::{EventAdapter, EventService};
pub use sponsorship::{SponsorshipAdapter, SponsorshipService};
