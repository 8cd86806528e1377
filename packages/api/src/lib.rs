//! # API crate — typed client for the shelter service
//!
//! Everything the frontends need to talk to the remote adoptable-dog service
//! lives here. The service owns the whole contract: authentication is a
//! session cookie it sets on login, and all payload shapes are dictated by
//! its JSON.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ShelterClient`] — reqwest wrapper over the five endpoints (login, breeds, search, dog resolution, match) |
//! | [`error`] | [`ApiError`] — transport, authorization, and status failures |
//! | [`models`] | Wire types: [`User`], [`Dog`], [`SearchPage`], [`MatchResponse`] |

pub mod client;
pub mod error;
pub mod models;

pub use client::{ShelterClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use models::{Dog, MatchResponse, SearchPage, User};
