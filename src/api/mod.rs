//! HTTP API layer.
//!
//! Translates HTTP requests into [`crate::application::services::LinkOperations`]
//! calls and formats responses. Nothing below this layer knows about HTTP.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
