mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use axum_test::TestServer;
use link_redirector::api::dto::link::LinkResponse;
use link_redirector::routes::{app_router, build_router};
use link_redirector::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn nested_server() -> TestServer {
    TestServer::new(build_router(common::create_memory_state(), "/links")).unwrap()
}

#[tokio::test]
async fn test_routes_mounted_under_base_path() {
    let server = nested_server();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com/nested" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let link = response.json::<LinkResponse>();

    let response = server.get(&format!("/links/{}", link.link_id)).await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/nested");

    server
        .get(&format!("/links/{}/info", link.link_id))
        .await
        .assert_status_ok();

    server.get("/links/count").await.assert_json(&json!({ "count": 1 }));

    server
        .delete(&format!("/links/{}", link.link_id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_health_stays_at_root() {
    let server = nested_server();

    server.get("/health").await.assert_status_ok();
    server.get("/links/health").await.assert_status_bad_request();
}

#[tokio::test]
async fn test_routes_not_served_outside_base_path() {
    let server = nested_server();

    server.get("/count").await.assert_status_not_found();
}

/// Sends one request through the full production service stack.
async fn call_app(
    state: AppState,
    base_path: &str,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app_router(state, base_path).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

#[tokio::test]
async fn test_app_router_trims_trailing_slash_at_root() {
    let state = common::create_memory_state();
    let link = common::create_test_link(&state, "https://example.com/slash").await;

    let (status, body) = call_app(
        state.clone(),
        "/",
        Method::GET,
        &format!("/{}/info/", link.link_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://example.com/slash");

    let (status, body) = call_app(state, "/", Method::GET, "/count/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "count": 1 }));
}

#[tokio::test]
async fn test_app_router_trims_trailing_slash_under_base_path() {
    let state = common::create_memory_state();

    let (status, body) = call_app(
        state.clone(),
        "/links",
        Method::POST,
        "/links/",
        Some(json!({ "url": "https://example.com/nested" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["url"], "https://example.com/nested");

    let (status, body) = call_app(state, "/links", Method::GET, "/links/count/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "count": 1 }));
}

#[tokio::test]
async fn test_app_router_unsupported_method_uses_error_body() {
    let (status, body) = call_app(
        common::create_memory_state(),
        "/",
        Method::DELETE,
        "/count",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["code"], 405);
    assert_eq!(
        body["errors"][0]["message"],
        "Method DELETE is not supported for /count"
    );
}

#[tokio::test]
async fn test_app_router_unknown_path_uses_error_body() {
    let (status, body) = call_app(
        common::create_memory_state(),
        "/",
        Method::GET,
        "/1/details",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["errors"][0]["message"], "No resource at /1/details");
}

#[tokio::test]
async fn test_app_router_rejects_padded_link_id() {
    let state = common::create_memory_state();
    common::create_test_link(&state, "https://example.com/padded").await;

    let (status, body) = call_app(state, "/", Method::GET, "/%201/info", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["violations"],
        json!([{ "field": "linkId", "message": "must be a positive integer" }])
    );
}
