#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use link_shortener::application::services::LinkService;
use link_shortener::domain::entities::LinkRecord;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use link_shortener::routes::build_router;
use link_shortener::state::AppState;
use link_shortener::utils::code_generator::RandomCodeGenerator;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

pub const BASE_URL: &str = "http://localhost:8080";

/// Repository whose every call fails, standing in for an unreachable database.
pub struct FailingLinkRepository;

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn get(&self, _id: &str) -> Result<Option<LinkRecord>, AppError> {
        Err(AppError::internal(
            "Database error",
            json!({ "reason": "connection refused" }),
        ))
    }

    async fn upsert(&self, _record: LinkRecord) -> Result<(), AppError> {
        Err(AppError::internal(
            "Database error",
            json!({ "reason": "connection refused" }),
        ))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Repository that answers only after `delay`.
pub struct SlowLinkRepository {
    pub delay: Duration,
}

#[async_trait]
impl LinkRepository for SlowLinkRepository {
    async fn get(&self, _id: &str) -> Result<Option<LinkRecord>, AppError> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }

    async fn upsert(&self, _record: LinkRecord) -> Result<(), AppError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

pub fn create_test_state(repo: Arc<dyn LinkRepository>) -> AppState {
    let link_service = LinkService::new(repo, Arc::new(RandomCodeGenerator::default()), BASE_URL);
    AppState::new(Arc::new(link_service))
}

pub fn create_test_app(repo: Arc<dyn LinkRepository>) -> Router {
    build_router(create_test_state(repo), Duration::from_secs(10))
}

/// Server backed by a fresh in-memory store; the store is returned for seeding and inspection.
pub fn memory_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let server = TestServer::new(create_test_app(repo.clone())).unwrap();
    (server, repo)
}

pub fn failing_server() -> TestServer {
    TestServer::new(create_test_app(Arc::new(FailingLinkRepository))).unwrap()
}

/// Server whose store answers after `store_delay`, with the given store and request deadlines.
pub fn slow_server(
    store_delay: Duration,
    store_timeout: Duration,
    request_timeout: Duration,
) -> TestServer {
    let repo: Arc<dyn LinkRepository> = Arc::new(SlowLinkRepository { delay: store_delay });
    let link_service = LinkService::new(repo, Arc::new(RandomCodeGenerator::default()), BASE_URL)
        .with_store_timeout(store_timeout);
    let state = AppState::new(Arc::new(link_service));
    TestServer::new(build_router(state, request_timeout)).unwrap()
}

pub async fn seed_link(repo: &InMemoryLinkRepository, id: &str, url: &str) {
    repo.upsert(LinkRecord::new(id, url, chrono::Utc::now()))
        .await
        .unwrap();
}

/// Extracts the short id from a returned short link.
pub fn id_from_short_url(short_url: &str) -> &str {
    short_url
        .strip_prefix(BASE_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap()
}
