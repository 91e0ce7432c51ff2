//! Link record representing a stored short id → URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored short link.
///
/// `id` is the primary key. `url` is stored as submitted, without any
/// scheme or format validation. `created` is set by the writer at creation
/// time and `updated` on every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: String,
    pub url: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl LinkRecord {
    /// Creates a record for a first write, with `created == updated == at`.
    pub fn new(id: impl Into<String>, url: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            created: at,
            updated: at,
        }
    }
}
