//! Core domain entities.
//!
//! - [`LinkRecord`] - The persisted mapping from a short id to a target URL

pub mod link;

pub use link::LinkRecord;
