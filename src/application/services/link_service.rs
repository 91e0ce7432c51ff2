//! Link shortening and resolution service.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tracing::{debug, error, info};

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Default deadline applied to each storage call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of a successful shorten operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    /// The generated short id.
    pub id: String,
    /// `base_url` joined with `id`.
    pub short_url: String,
}

/// The two operations any transport fronts.
///
/// HTTP handlers and the admin CLI depend on this trait rather than on a
/// concrete service, so the routing layer can be swapped without touching
/// storage or generation logic.
#[async_trait]
pub trait LinkOperations: Send + Sync {
    /// Generates an id for `url`, stores the record and returns the short link.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `url` is empty; storage is not touched
    /// - [`AppError::Internal`] on storage failure or timeout
    async fn shorten(&self, url: &str) -> Result<ShortLink, AppError>;

    /// Returns the target URL stored under `id`.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingParameter`] if `id` is empty; storage is not touched
    /// - [`AppError::NotFound`] if no record exists for `id`
    /// - [`AppError::Internal`] on storage failure or timeout
    async fn resolve(&self, id: &str) -> Result<String, AppError>;

    /// Returns `true` if the backing store is reachable.
    async fn storage_healthy(&self) -> bool;
}

/// Service combining a [`CodeGenerator`] with a [`LinkRepository`].
///
/// Holds no mutable state of its own; all state lives in the repository.
pub struct LinkService<L: LinkRepository + ?Sized = dyn LinkRepository> {
    link_repository: Arc<L>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
    store_timeout: Duration,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public address short links are composed with;
    /// a trailing slash is ignored.
    pub fn new(
        link_repository: Arc<L>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            link_repository,
            generator,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Sets the deadline applied to each storage call.
    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Constructs the full short URL for `id`.
    pub fn get_short_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Runs a storage call under the configured deadline.
    ///
    /// An elapsed deadline becomes [`AppError::Internal`]; the call is not retried.
    async fn with_deadline<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        match tokio::time::timeout(self.store_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(AppError::internal(
                "Storage timeout",
                json!({
                    "operation": operation,
                    "timeout_ms": self.store_timeout.as_millis() as u64,
                }),
            )),
        }
    }
}

#[async_trait]
impl<L: LinkRepository + ?Sized> LinkOperations for LinkService<L> {
    async fn shorten(&self, url: &str) -> Result<ShortLink, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::bad_request(
                "URL must not be empty",
                json!({ "field": "url" }),
            ));
        }

        let id = self.generator.generate(url);
        let record = LinkRecord::new(id.clone(), url, Utc::now());

        if let Err(e) = self
            .with_deadline("upsert", self.link_repository.upsert(record))
            .await
        {
            error!(id = %id, error = %e, "Failed to save link");
            return Err(e);
        }

        info!(id = %id, "Short link stored");

        Ok(ShortLink {
            short_url: self.get_short_url(&id),
            id,
        })
    }

    async fn resolve(&self, id: &str) -> Result<String, AppError> {
        if id.is_empty() {
            return Err(AppError::missing_parameter("id"));
        }

        let found = match self
            .with_deadline("get", self.link_repository.get(id))
            .await
        {
            Ok(found) => found,
            Err(e) => {
                error!(id = %id, error = %e, "Failed to look up link");
                return Err(e);
            }
        };

        match found {
            Some(record) => Ok(record.url),
            None => {
                debug!(id = %id, "Short link not found");
                Err(AppError::not_found(
                    "Short link not found",
                    json!({ "id": id }),
                ))
            }
        }
    }

    async fn storage_healthy(&self) -> bool {
        self.with_deadline("health_check", async {
            Ok(self.link_repository.health_check().await)
        })
        .await
        .unwrap_or(false)
    }
}
