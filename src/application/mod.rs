//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose transport-agnostic operations
//! to whatever fronts them (HTTP handlers, the admin CLI).
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
