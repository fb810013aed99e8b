/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # Padrino Client
//!
//! Client library for the child sponsorship platform REST API.
//!
//! The crate is organised in thin layers:
//!
//! - [`model::http::HttpClient`]: base transport. Builds requests, carries the
//!   session cookie and maps HTTP status codes to user facing messages.
//! - [`application::client::ApiClient`]: transport bound to the configured
//!   backend with a response processing hook.
//! - [`application::services::crud::CrudService`]: generic create/read/update/delete
//!   over a [`application::interfaces::ResourceAdapter`], returning explicit
//!   result envelopes instead of errors.
//! - Domain services for children, diary entries (bitácora), sponsorships,
//!   events, donations and authentication.
//! - [`session::store::SessionStore`]: the locally cached identity of the
//!   logged in user.
//!
//! ## Usage
//!
//! ```ignore
//! use padrino_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Arc::new(ApiClient::new(&config)?);
//! let children = ChildService::from_client(client.clone());
//!
//! match children.get_all().await {
//!     Ok(success) => info!("{} children", success.data.len()),
//!     Err(e) => warn!("{}", e.message),
//! }
//! ```

/// Application layer: configuration, API client and services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Transport, wire models and validation
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Backend records as handed to callers
pub mod presentation;
/// Session storage and the session store
pub mod session;
/// Environment, logging and id helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
