use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::core::ports::EventStore;
use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn json_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn creates_updates_and_lists_events_on_a_seeded_store() {
    let store = Arc::new(InMemoryEventStore::seeded());
    let app = router(AppState::new(store.clone()));

    let (status, created) = send(
        &app,
        json_request("POST", "/event", r#"{"title":"x","description":"y"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["events"].as_array().unwrap().len(), 3);
    assert_eq!(created["events"][2]["id"], 3);

    let (status, updated) =
        send(&app, json_request("PUT", "/event/1", r#"{"description":"z"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["events"][0]["title"], "an event");
    assert_eq!(updated["events"][0]["description"], "z");

    let (status, listed) = send(
        &app,
        Request::get("/events").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        listed,
        serde_json::json!({"events": [
            {"id": 1, "title": "an event", "description": "z"},
            {"id": 2, "title": "another event", "description": "something even cooler"},
            {"id": 3, "title": "x", "description": "y"}
        ]})
    );

    assert_eq!(store.get_events_count(true).await.unwrap(), 3);
}

#[tokio::test]
async fn serves_health_and_version_next_to_the_event_routes() {
    let app = router(AppState::new(Arc::new(InMemoryEventStore::seeded())));

    let (status, health) = send(&app, Request::get("/").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health, serde_json::json!([]));

    let (status, version) =
        send(&app, Request::get("/version").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(version, serde_json::json!({"version": "1.0.0"}));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn keeps_ids_unique_across_concurrent_creates() {
    let store = Arc::new(InMemoryEventStore::seeded());
    let app = router(AppState::new(store.clone()));

    let requests = (0..16).map(|_| {
        let app = app.clone();
        tokio::spawn(async move {
            send(&app, json_request("POST", "/event", r#"{"title":"burst"}"#)).await
        })
    });
    for handle in requests.collect::<Vec<_>>() {
        let (status, _) = handle.await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
    }

    let ids: Vec<u64> = store
        .live_events()
        .await
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, (1..=18).collect::<Vec<u64>>());
}
