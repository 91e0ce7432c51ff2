//! HTTP middleware for request processing.
//!
//! Provides access logging, CORS and request timeouts.

pub mod cors;
pub mod timeout;
pub mod tracing;
