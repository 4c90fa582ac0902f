//! Integration tests for catalogr
//!
//! These tests run the API client, controllers and browse session against a
//! mock catalog server and check what actually goes over the wire.

use catalogr::{
    api::{ApiClient, ApiError},
    browse::{BrowseSession, SessionConfig},
    query::{QueryParams, ResourceController, StrategyRegistry, TagController},
    tags::group_tags,
};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

const MODELS: &str = "/api/v1/models";

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

fn model_page(name: &str, total: u64) -> serde_json::Value {
    json!({
        "data": [{ "id": 1, "name": name, "path": format!("org/{name}"), "likes": 3 }],
        "total": total
    })
}

async fn settle(session: &mut BrowseSession) {
    while session.in_flight() > 0 {
        session.next_event().await;
    }
}

#[tokio::test]
async fn test_model_page_decodes_envelope() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(MODELS)
                .query_param("page", "1")
                .query_param("page_size", "20");
            then.status(200).json_body(model_page("bert", 41));
        })
        .await;

    let registry = StrategyRegistry::with_defaults(&client(&server));
    let page = registry
        .resolve("models")
        .fetch_page(&QueryParams::new(1, 20))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.total, 41);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title(), "bert");
    assert_eq!(page.items[0].path(), "org/bert");
}

#[tokio::test]
async fn test_unknown_scope_queries_models() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(MODELS);
            then.status(200).json_body(model_page("bert", 1));
        })
        .await;

    let registry = StrategyRegistry::with_defaults(&client(&server));
    let resource = registry.resolve("spaces");
    assert_eq!(resource.scope(), "model");
    resource.fetch_page(&QueryParams::new(1, 20)).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_identical_queries_hit_server_once() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(MODELS);
            then.status(200).json_body(model_page("bert", 1));
        })
        .await;

    let registry = StrategyRegistry::with_defaults(&client(&server));
    let resource = registry.resolve("model");
    let mut controller = ResourceController::new("model");
    let params = QueryParams::new(1, 20).with_search("");

    controller.query(resource.as_ref(), &params).await;
    controller.query(resource.as_ref(), &params.clone()).await;
    assert_eq!(mock.hits_async().await, 1);

    controller.query(resource.as_ref(), &params.refreshed()).await;
    assert_eq!(mock.hits_async().await, 2);
    assert_eq!(controller.data().total, 1);
}

#[tokio::test]
async fn test_search_sent_when_present() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(MODELS).query_param("search", "llama");
            then.status(200).json_body(model_page("llama", 1));
        })
        .await;

    let registry = StrategyRegistry::with_defaults(&client(&server));
    let mut controller = ResourceController::new("model");
    let state = controller
        .query(
            registry.resolve("model").as_ref(),
            &QueryParams::new(1, 20).with_search("llama"),
        )
        .await;

    assert!(state.error.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_query_keeps_previous_page() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(MODELS).query_param("page", "1");
            then.status(200).json_body(model_page("bert", 40));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(MODELS).query_param("page", "2");
            then.status(500).json_body(json!({ "msg": "database unavailable" }));
        })
        .await;

    let registry = StrategyRegistry::with_defaults(&client(&server));
    let resource = registry.resolve("model");
    let mut controller = ResourceController::new("model");

    controller.query(resource.as_ref(), &QueryParams::new(1, 20)).await;
    let state = controller
        .query(resource.as_ref(), &QueryParams::new(2, 20))
        .await;

    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Request failed with status 500: database unavailable")
    );
    assert_eq!(state.data.items[0].title(), "bert");
}

#[tokio::test]
async fn test_non_2xx_detail_is_http_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/models/org/missing");
            then.status(404).json_body(json!({ "msg": "model not found" }));
        })
        .await;

    let err = client(&server).model_detail("org/missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.to_string(),
        "Request failed with status 404: model not found"
    );
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/tags");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let err = client(&server).tags().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_model_readme_and_tree() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/models/org/bert/raw/README.md");
            then.status(200).json_body(json!({ "data": "# BERT\n" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/models/org/bert/tree");
            then.status(200).json_body(json!({
                "data": [
                    { "name": "config.json", "type": "file", "size": 512, "path": "config.json" },
                    { "name": "onnx", "type": "dir", "path": "onnx" }
                ]
            }));
        })
        .await;

    let api = client(&server);
    assert_eq!(api.model_readme("org/bert").await.unwrap(), "# BERT\n");

    let tree = api.model_tree("org/bert").await.unwrap();
    assert_eq!(tree.len(), 2);
    assert!(!tree[0].is_dir());
    assert_eq!(tree[0].size, 512);
    assert!(tree[1].is_dir());
}

#[tokio::test]
async fn test_tag_controller_refetches_per_scope() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/tags");
            then.status(200).json_body(json!({
                "data": [
                    { "id": 1, "name": "mit", "category": "license", "scope": "model" },
                    { "id": 2, "name": "qa", "category": "task", "scope": "dataset" },
                    { "id": 3, "name": "apache-2.0", "category": "license", "scope": "model" }
                ]
            }));
        })
        .await;

    let api = client(&server);
    let mut tags = TagController::new("tags");

    let grouped = group_tags(&tags.query(&api, "models").await.data, "model");
    assert_eq!(grouped.categories().collect::<Vec<_>>(), vec!["license"]);
    assert_eq!(grouped.tag_count(), 2);

    tags.query(&api, "model").await;
    assert_eq!(mock.hits_async().await, 1);

    tags.query(&api, "dataset").await;
    assert_eq!(mock.hits_async().await, 2);
}

#[tokio::test]
async fn test_session_loads_items_and_tags() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(MODELS);
            then.status(200).json_body(model_page("bert", 45));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/tags");
            then.status(200).json_body(json!({
                "data": [{ "id": 1, "name": "mit", "category": "license", "scope": "model" }]
            }));
        })
        .await;

    let api = client(&server);
    let registry = StrategyRegistry::with_defaults(&api);
    let mut session = BrowseSession::new(api, registry, SessionConfig::default());
    settle(&mut session).await;

    assert_eq!(session.total(), 45);
    assert_eq!(session.paginator().total_pages(), 3);
    assert_eq!(session.view().tags().selected_category(), Some("license"));
    assert!(session.tags().error.is_none());
}

#[tokio::test]
async fn test_session_shows_latest_page_when_responses_race() {
    let server = MockServer::start_async().await;
    for (page, name, delay) in [("1", "first", 0), ("2", "second", 400), ("3", "third", 0)] {
        server
            .mock_async(|when, then| {
                when.method(GET).path(MODELS).query_param("page", page);
                then.status(200)
                    .delay(Duration::from_millis(delay))
                    .json_body(model_page(name, 100));
            })
            .await;
    }
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/tags");
            then.status(200).json_body(json!({ "data": [] }));
        })
        .await;

    let api = client(&server);
    let registry = StrategyRegistry::with_defaults(&api);
    let mut session = BrowseSession::new(
        api,
        registry,
        SessionConfig {
            page_size: 10,
            ..SessionConfig::default()
        },
    );
    settle(&mut session).await;

    // page 2 is slow, page 3 answers first
    session.next_page();
    session.next_page();
    settle(&mut session).await;

    let items = session.items().unwrap();
    assert_eq!(session.view().page(), 3);
    assert_eq!(items.data.items[0].title(), "third");
    assert!(!items.loading);
}
