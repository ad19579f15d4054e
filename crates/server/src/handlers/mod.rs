//! # Request Handlers
//!
//! HTTP request handlers, one module per entity. Handlers take the
//! application state explicitly; the thin axum wrappers live in the router.

pub mod broker_profiles;
pub mod members;
pub mod neighborhoods;
pub mod regions;
pub mod teams;
pub mod user_types;
pub mod users;
