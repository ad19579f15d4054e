//! # HTTP Middleware
//!
//! Request middleware applied by the router.

pub mod api_key;
