mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use qr_tracker::api::handlers::register_handler;
use serde_json::json;

fn app(state: qr_tracker::AppState) -> TestServer {
    let app = Router::new()
        .route("/register", post(register_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_register_success() {
    let ctx = common::create_test_state().await;
    let server = app(ctx.state.clone());

    let response = server
        .post("/register")
        .json(&json!({
            "qr_id": "x1",
            "title": "Home",
            "long_url": "https://example.com",
            "short_url": "https://s.ly/x1"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "status": "ok" }));

    let data = common::read_data_file(&ctx).await;
    assert_eq!(data["links"]["x1"]["title"], "Home");
    assert_eq!(data["links"]["x1"]["long_url"], "https://example.com");
    assert_eq!(data["counters"]["x1"], 0);
}

#[tokio::test]
async fn test_register_update_preserves_clicks() {
    let ctx = common::create_test_state().await;
    common::create_test_link(&ctx.state, "abc", "https://old.example.com").await;
    common::create_test_clicks(&ctx.state, "abc", 5).await;

    let server = app(ctx.state.clone());

    let response = server
        .post("/register")
        .json(&json!({
            "qr_id": "abc",
            "title": "Updated",
            "long_url": "https://new.example.com",
            "short_url": "https://s.ly/abc"
        }))
        .await;

    response.assert_status_ok();

    let stats = ctx.state.stats_service.get_stats("abc").await.unwrap();
    assert_eq!(stats.title, "Updated");
    assert_eq!(stats.clicks, 5);

    let target = ctx.state.resolution_service.resolve("abc").await.unwrap();
    assert_eq!(target, "https://new.example.com");
}

#[tokio::test]
async fn test_register_empty_title() {
    let ctx = common::create_test_state().await;
    let server = app(ctx.state.clone());

    let response = server
        .post("/register")
        .json(&json!({
            "qr_id": "x1",
            "title": "",
            "long_url": "https://example.com",
            "short_url": "https://s.ly/x1"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["field"], "title");

    let summary = ctx.state.stats_service.summary().await.unwrap();
    assert_eq!(summary.links, 0);
    assert!(!ctx.data_file().exists());
}

#[tokio::test]
async fn test_register_whitespace_title() {
    let ctx = common::create_test_state().await;
    let server = app(ctx.state.clone());

    let response = server
        .post("/register")
        .json(&json!({
            "qr_id": "x1",
            "title": "   ",
            "long_url": "https://example.com",
            "short_url": "https://s.ly/x1"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "title");
}

#[tokio::test]
async fn test_register_missing_field() {
    let ctx = common::create_test_state().await;
    let server = app(ctx.state.clone());

    let response = server
        .post("/register")
        .json(&json!({
            "qr_id": "x1",
            "title": "Home",
            "long_url": "https://example.com"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_register_invalid_qr_id() {
    let ctx = common::create_test_state().await;
    let server = app(ctx.state.clone());

    let response = server
        .post("/register")
        .json(&json!({
            "qr_id": "a/b",
            "title": "Home",
            "long_url": "https://example.com",
            "short_url": "https://s.ly/x1"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_register_malformed_json() {
    let ctx = common::create_test_state().await;
    let server = app(ctx.state.clone());

    let response = server
        .post("/register")
        .text("{ not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_register_oversized_short_url() {
    let ctx = common::create_test_state().await;
    let server = app(ctx.state.clone());

    let response = server
        .post("/register")
        .json(&json!({
            "qr_id": "x1",
            "title": "Home",
            "long_url": "https://example.com",
            "short_url": format!("https://s.ly/{}", "a".repeat(3000))
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["field"], "short_url");

    let summary = ctx.state.stats_service.summary().await.unwrap();
    assert_eq!(summary.links, 0);
    assert!(!ctx.data_file().exists());
}

#[tokio::test]
async fn test_register_invalid_long_url_reports_field() {
    let ctx = common::create_test_state().await;
    let server = app(ctx.state.clone());

    let response = server
        .post("/register")
        .json(&json!({
            "qr_id": "x1",
            "title": "Home",
            "long_url": "  not a url ",
            "short_url": "https://s.ly/x1"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "long_url");
}
