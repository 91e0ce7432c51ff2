//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use redirect::{missing_id_handler, redirect_handler};
pub use shorten::shorten_handler;
