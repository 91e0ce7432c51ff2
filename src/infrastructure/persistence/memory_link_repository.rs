//! In-memory implementation of link repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local link storage.
///
/// Records are replaced whole under the write lock, so readers never observe
/// a partially applied upsert. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, LinkRecord>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn get(&self, id: &str) -> Result<Option<LinkRecord>, AppError> {
        Ok(self.links.read().await.get(id).cloned())
    }

    async fn upsert(&self, record: LinkRecord) -> Result<(), AppError> {
        self.links.write().await.insert(record.id.clone(), record);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
