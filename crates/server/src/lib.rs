//! # Imovia API Server
//!
//! Axum-based HTTP API server for the imovia real-estate back office.
//!
//! ## Modules
//!
//! - [`dto`]: Request/response data transfer objects
//! - [`handlers`]: Request handlers, one module per entity
//! - [`middleware`]: HTTP middleware (API key auth)
//! - [`router`]: API route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod password;
pub mod router;
pub mod utils;

pub use router::create_app_router;

/// Application state shared across request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db:      sea_orm::DbConn,
    /// Static API key requests must present in X-API-KEY
    pub api_key: String,
}
