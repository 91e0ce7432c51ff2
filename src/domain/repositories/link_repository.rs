//! Repository trait for link record storage.

use crate::domain::entities::LinkRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for link records, keyed by short id.
///
/// # Consistency
///
/// Implementations must make a single [`upsert`](Self::upsert) atomic with
/// respect to concurrent reads and writes of the same id: a concurrent
/// [`get`](Self::get) observes either the previous record or the new one,
/// never a mix. Conflicting writes are last-write-wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a record by exact id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkRecord))` if found
    /// - `Ok(None)` if no record exists for `id`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get(&self, id: &str) -> Result<Option<LinkRecord>, AppError>;

    /// Writes `record` under `record.id`, creating or replacing it.
    ///
    /// The whole record is replaced, `created` included. No merge with an
    /// existing record is performed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn upsert(&self, record: LinkRecord) -> Result<(), AppError>;

    /// Returns `true` if the backing store is reachable.
    async fn health_check(&self) -> bool;
}
