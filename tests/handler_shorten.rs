mod common;

use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let (server, repo) = common::memory_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_url = json["url"].as_str().unwrap();
    let id = common::id_from_short_url(short_url);

    assert_eq!(id.len(), 8);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    let stored = link_shortener::domain::repositories::LinkRepository::get(repo.as_ref(), id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.url, "http://example.com");
    assert_eq!(stored.created, stored.updated);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (server, repo) = common::memory_server();

    let response = server.post("/url").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (server, repo) = common::memory_server();

    let response = server.post("/url").json(&json!({})).await;

    response.assert_status_bad_request();
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_shorten_whitespace_url() {
    let (server, repo) = common::memory_server();

    let response = server.post("/url").json(&json!({ "url": "   " })).await;

    response.assert_status_bad_request();
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_shorten_invalid_body() {
    let (server, repo) = common::memory_server();

    let response = server.post("/url").text("url=http://example.com").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["message"].is_string());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_shorten_wrong_field_type() {
    let (server, _repo) = common::memory_server();

    let response = server.post("/url").json(&json!({ "url": 42 })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_storage_failure() {
    let server = common::failing_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status_internal_server_error();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "Internal server error");
    assert!(!response.text().contains("connection refused"));
}

#[tokio::test]
async fn test_shorten_same_url_twice_is_allowed() {
    let (server, _repo) = common::memory_server();

    let first = server
        .post("/url")
        .json(&json!({ "url": "http://example.com" }))
        .await;
    let second = server
        .post("/url")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    first.assert_status_ok();
    second.assert_status_ok();

    // Both links resolve to the same target, whether or not the ids differ.
    for response in [first, second] {
        let json = response.json::<serde_json::Value>();
        let id = common::id_from_short_url(json["url"].as_str().unwrap()).to_string();

        let redirect = server.get(&format!("/{id}")).await;
        assert_eq!(redirect.status_code(), 303);
        assert_eq!(redirect.header("location"), "http://example.com");
    }
}

#[tokio::test]
async fn test_shorten_url_is_not_validated() {
    let (server, _repo) = common::memory_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "not-a-real-url" }))
        .await;

    response.assert_status_ok();
}
