//! Integration tests driving the router end to end, without a socket.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use enroll_backend::{AppState, app};

fn test_app() -> Router {
    app(Arc::new(AppState::new()))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_activities_contains_the_seeded_catalog() {
    let response = test_app()
        .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.is_object());
    assert!(json.get("Chess Club").is_some());
}

#[tokio::test]
async fn signup_and_unregister_round_trip() {
    let app = test_app();
    let email = "testuser@example.com";

    // Sign up, with the activity name percent-encoded in the path
    let response = app
        .clone()
        .oneshot(
            Request::post(format!("/activities/Chess%20Club/signup?email={email}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Verify added
    let response = app
        .clone()
        .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let participants = body_json(response).await["Chess Club"]["participants"].clone();
    assert!(
        participants
            .as_array()
            .unwrap()
            .iter()
            .any(|entry| entry == email)
    );

    // Unregister
    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/activities/Chess%20Club/unregister?email={email}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Verify removed
    let response = app
        .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let participants = body_json(response).await["Chess Club"]["participants"].clone();
    assert!(
        !participants
            .as_array()
            .unwrap()
            .iter()
            .any(|entry| entry == email)
    );
}

#[tokio::test]
async fn signup_to_unknown_activity_returns_404() {
    let response = test_app()
        .oneshot(
            Request::post("/activities/Quantum%20Knitting/signup?email=a@b.c")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["detail"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn duplicate_signup_returns_400() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::post("/activities/Gym%20Class/signup?email=dupe@example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::post("/activities/Gym%20Class/signup?email=dupe@example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["detail"].as_str().unwrap().contains("already"));
}

#[tokio::test]
async fn unregister_of_a_non_participant_returns_400() {
    let response = test_app()
        .oneshot(
            Request::delete("/activities/Chess%20Club/unregister?email=nobody@example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unregister_from_unknown_activity_returns_404() {
    let response = test_app()
        .oneshot(
            Request::delete("/activities/Quantum%20Knitting/unregister?email=a@b.c")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn signup_without_an_email_returns_400() {
    let response = test_app()
        .oneshot(
            Request::post("/activities/Chess%20Club/signup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_to_a_full_activity_returns_400() {
    let app = test_app();

    // Chess Club seeds 2 of 12 spots; take the remaining 10
    for n in 0..10 {
        let response = app
            .clone()
            .oneshot(
                Request::post(format!(
                    "/activities/Chess%20Club/signup?email=student{n}@mergington.edu"
                ))
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::post("/activities/Chess%20Club/signup?email=late@mergington.edu")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["detail"].as_str().unwrap().contains("full"));
}

#[tokio::test]
async fn health_reports_healthy() {
    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["services"]["tracked_activities"], 3);
}

#[tokio::test]
async fn root_redirects_to_the_static_frontend() {
    let response = test_app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        response.headers()["location"].to_str().unwrap(),
        "/static/index.html"
    );
}
