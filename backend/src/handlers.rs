use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::models::{Contact, InsertContact, InsertPartnership, Partnership, Property};
use crate::storage::{Storage, StorageError};

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

/// Storage failures are logged for operators but never leak internals to
/// the caller.
fn storage_failure(message: &str, e: StorageError) -> ErrorResponse {
    log::error!("{message}: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}

fn bad_request(message: String) -> ErrorResponse {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Residence Finder API" }))
        .route("/api/properties", get(get_properties))
        .route("/api/properties/featured", get(get_featured_properties))
        .route("/api/properties/:id", get(get_property))
        .route("/api/contacts", post(create_contact))
        .route("/api/partnerships", post(create_partnership))
        .with_state(state)
}

async fn get_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<Property>>, ErrorResponse> {
    let properties = state
        .storage
        .properties()
        .await
        .map_err(|e| storage_failure("Failed to fetch properties", e))?;
    Ok(Json(properties))
}

async fn get_featured_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<Property>>, ErrorResponse> {
    let properties = state
        .storage
        .featured_properties()
        .await
        .map_err(|e| storage_failure("Failed to fetch featured properties", e))?;
    Ok(Json(properties))
}

async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, ErrorResponse> {
    match state.storage.property(&id).await {
        Ok(Some(property)) => Ok(Json(property)),
        // Absent id is the expected outcome for stale links, not an error.
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Property not found" })),
        )),
        Err(e) => Err(storage_failure("Failed to fetch property", e)),
    }
}

async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<InsertContact>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ErrorResponse> {
    let Json(payload) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;
    payload
        .validate()
        .map_err(|errors| bad_request(errors.to_string()))?;
    let contact = state
        .storage
        .create_contact(payload)
        .await
        .map_err(|e| storage_failure("Failed to create contact", e))?;
    Ok((StatusCode::CREATED, Json(contact)))
}

async fn create_partnership(
    State(state): State<AppState>,
    payload: Result<Json<InsertPartnership>, JsonRejection>,
) -> Result<(StatusCode, Json<Partnership>), ErrorResponse> {
    let Json(payload) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;
    payload
        .validate()
        .map_err(|errors| bad_request(errors.to_string()))?;
    let partnership = state
        .storage
        .create_partnership(payload)
        .await
        .map_err(|e| storage_failure("Failed to create partnership application", e))?;
    Ok((StatusCode::CREATED, Json(partnership)))
}
