/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # Padrino Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use padrino_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:3001/api");
//! let session = SessionStore::in_memory();
//! assert!(!session.is_active());
//! assert_eq!(config.rest_api.base_url, "http://localhost:3001/api");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, ErrorKind};

// ============================================================================
// TRANSPORT AND API CLIENT
// ============================================================================

/// Base transport
pub use crate::model::http::{ApiTransport, HttpClient, RequestOptions};

/// Configured API client
pub use crate::application::client::{ApiClient, ResponseProcessor, TracingProcessor};

// ============================================================================
// SERVICES
// ============================================================================

/// Generic CRUD and result envelope
pub use crate::application::services::crud::{
    CrudService, Envelope, ServiceError, ServiceResult, Success, into_envelope,
};

/// Resource adapters
pub use crate::application::interfaces::{CrudMessages, Record, RecordAdapter, ResourceAdapter};

/// Domain services
pub use crate::application::services::{
    AuthService, ChildService, DiaryService, DonationService, EventService, SponsorshipService,
};

// ============================================================================
// MODELS
// ============================================================================

/// Session identity
pub use crate::model::auth::{Role, UserProfile, UserSession};

/// Requests and ids
pub use crate::model::requests::{
    ChildInput, DiaryEntryInput, DonationInput, EventInput, LoginRequest, MaybeId,
    ProfileUpdateRequest, RegisterRequest, ResourceId, SponsorshipUpdate,
};

/// Form validation
pub use crate::model::validation::{FormValidator, Rule, ValidationErrors};

/// Backend records
pub use crate::presentation::{Child, DiaryEntry, Donation, Event, Sponsorship};

// ============================================================================
// SESSION
// ============================================================================

/// Session storage
pub use crate::session::{FileStorage, JsonStorage, KeyValueStorage, MemoryStorage, SessionStore};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for HTTP operations
pub use reqwest::Method;
