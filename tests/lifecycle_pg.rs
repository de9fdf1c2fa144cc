mod common;

use axum::http::StatusCode;
use chrono::Utc;
use link_redirector::api::dto::count::CountResponse;
use link_redirector::api::dto::link::LinkResponse;
use link_redirector::error::Violations;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_link_lifecycle(pool: PgPool) {
    let server = common::create_test_server(common::create_pg_state(pool));

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created = response.json::<LinkResponse>();
    assert_eq!(created.link_id, 1);
    assert_eq!(created.url, "https://example.com/a");

    let response = server.get("/1").await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/a");

    let response = server.get("/1/info").await;
    response.assert_status_ok();
    assert_eq!(response.json::<LinkResponse>(), created);

    server.delete("/1").await.assert_status(StatusCode::NO_CONTENT);

    server.get("/1/info").await.assert_status_not_found();
    server.delete("/1").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_add_then_get_returns_same_link(pool: PgPool) {
    let state = common::create_pg_state(pool);
    let before = Utc::now();

    let added = common::create_test_link(&state, "https://example.com/same").await;
    let fetched = state.link_service.get(added.link_id).await.unwrap();

    assert_eq!(fetched.link_id, added.link_id);
    assert_eq!(fetched.url, "https://example.com/same");
    assert!(fetched.date_create >= before - chrono::Duration::seconds(5));
}

#[sqlx::test]
async fn test_invalid_url_not_persisted(pool: PgPool) {
    let server = common::create_test_server(common::create_pg_state(pool));

    let response = server
        .post("/")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Violations>().violations[0].field, "url");

    let count = server.get("/count").await.json::<CountResponse>();
    assert_eq!(count.count, 0);
}

#[sqlx::test]
async fn test_count_tracks_adds_and_deletes(pool: PgPool) {
    let state = common::create_pg_state(pool);

    let mut ids = Vec::new();
    for i in 0..4 {
        let link = common::create_test_link(&state, &format!("https://example.com/{i}")).await;
        ids.push(link.link_id);
    }
    state.link_service.delete(ids[0]).await.unwrap();

    assert_eq!(state.link_service.count().await.unwrap().count, 3);
}
