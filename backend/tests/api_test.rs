//! Router-level tests against the in-memory backend.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use residence_finder_backend::handlers::{router, AppState};
use residence_finder_backend::storage::MemoryStorage;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState {
        storage: Arc::new(MemoryStorage::new()),
    })
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_contact() -> Value {
    json!({
        "name": "Jo",
        "email": "jo@example.com",
        "message": "Is the Sky Tower Penthouse still available?"
    })
}

fn valid_partnership(message: &str) -> Value {
    json!({
        "companyName": "Acme Stays",
        "contactName": "Sam Doe",
        "email": "sam@acme.example",
        "phone": "+20123456789",
        "message": message
    })
}

#[tokio::test]
async fn lists_the_seeded_catalog() {
    let response = app().oneshot(get("/api/properties")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let properties = body.as_array().unwrap();
    assert_eq!(properties.len(), 8);
    // camelCase wire shape with all optionals present
    let first = &properties[0];
    assert!(first.get("rentalPrice").is_some());
    assert!(first.get("createdAt").is_some());
}

#[tokio::test]
async fn featured_is_a_subset_of_all() {
    let app = app();
    let all = body_json(app.clone().oneshot(get("/api/properties")).await.unwrap()).await;
    let featured = body_json(
        app.oneshot(get("/api/properties/featured")).await.unwrap(),
    )
    .await;

    let all_ids: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["featured"] == "true")
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    let featured_ids: Vec<&str> = featured
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(featured_ids, all_ids);
    assert!(!featured_ids.is_empty());
}

#[tokio::test]
async fn fetches_a_single_property_by_id() {
    let app = app();
    let all = body_json(app.clone().oneshot(get("/api/properties")).await.unwrap()).await;
    let expected = &all.as_array().unwrap()[0];
    let id = expected["id"].as_str().unwrap();

    let response = app
        .oneshot(get(&format!("/api/properties/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&body_json(response).await, expected);
}

#[tokio::test]
async fn unknown_property_id_is_not_found() {
    let response = app()
        .oneshot(get("/api/properties/prop-424242"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Property not found");
}

#[tokio::test]
async fn creates_a_contact() {
    let response = app()
        .oneshot(post_json("/api/contacts", &valid_contact()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let contact = body_json(response).await;
    assert!(!contact["id"].as_str().unwrap().is_empty());
    assert!(!contact["createdAt"].as_str().unwrap().is_empty());
    // omitted optionals come back as explicit nulls
    assert!(contact["phone"].is_null());
    assert!(contact["propertyInterest"].is_null());
}

#[tokio::test]
async fn bad_email_is_rejected_without_creating_a_record() {
    let app = app();
    let mut payload = valid_contact();
    payload["email"] = json!("not-an-email");

    let response = app
        .clone()
        .oneshot(post_json("/api/contacts", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("email"));
    assert!(error.contains("Invalid email address"));

    // The seed takes ids 1-8 and the counter is shared, so the next
    // successful create is contact-9 only if the rejection wrote nothing.
    let response = app
        .oneshot(post_json("/api/contacts", &valid_contact()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["id"], "contact-9");
}

#[tokio::test]
async fn partnership_message_boundary() {
    let app = app();
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/partnerships",
            &valid_partnership(&"a".repeat(19)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("message"));

    let response = app
        .oneshot(post_json(
            "/api/partnerships",
            &valid_partnership(&"a".repeat(20)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/contacts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn concurrent_submissions_both_succeed() {
    let app = app();
    let (a, b) = tokio::join!(
        app.clone().oneshot(post_json("/api/contacts", &valid_contact())),
        app.clone().oneshot(post_json(
            "/api/contacts",
            &json!({
                "name": "Sam",
                "email": "sam@example.com",
                "message": "Looking for a two-bedroom in Maadi"
            })
        )),
    );
    let a = a.unwrap();
    let b = b.unwrap();
    assert_eq!(a.status(), StatusCode::CREATED);
    assert_eq!(b.status(), StatusCode::CREATED);
    let id_a = body_json(a).await["id"].as_str().unwrap().to_string();
    let id_b = body_json(b).await["id"].as_str().unwrap().to_string();
    assert_ne!(id_a, id_b);
}
