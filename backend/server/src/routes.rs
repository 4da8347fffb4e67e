use std::sync::Arc;

use axum::{
    Json,
    extract::{self, Path, Query, rejection::JsonRejection},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use chrono::Utc;
use places::{
    Category,
    payloads::{CategoriesResponse, DeletedResponse, PlaceResponse, PlacesResponse},
};
use serde_json::{Value, json};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    error::AppError,
    search::{PlaceFilter, PlaceQuery},
    state::State,
    utils::{CreatePlaceRequest, get_new_place},
};

const DEBUG_SAMPLE_SIZE: usize = 2;

pub async fn list_places_handler(
    extract::State(state): extract::State<Arc<State>>,
    Query(query): Query<PlaceQuery>,
) -> Result<Json<PlacesResponse>, AppError> {
    let filter = PlaceFilter::from(query);
    debug!("Place filter: {filter:?}");

    let places = state
        .store
        .all()
        .await
        .map_err(AppError::store("Failed to fetch places"))?;
    let places = filter.apply(places);

    debug!("Found {} places", places.len());

    Ok(Json(PlacesResponse { places }))
}

pub async fn create_place_handler(
    extract::State(state): extract::State<Arc<State>>,
    payload: Result<Json<CreatePlaceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let place = get_new_place(payload)?.into_place(Uuid::new_v4().to_string(), Utc::now());

    state
        .store
        .insert(&place)
        .await
        .map_err(AppError::store("Failed to create place"))?;

    info!("Created place {} ({})", place.id, place.name);

    Ok((StatusCode::CREATED, Json(PlaceResponse { place })))
}

pub async fn get_place_handler(
    extract::State(state): extract::State<Arc<State>>,
    Path(id): Path<String>,
) -> Result<Json<PlaceResponse>, AppError> {
    let place = state
        .store
        .get(&id)
        .await
        .map_err(AppError::store("Failed to fetch place"))?
        .ok_or(AppError::NotFound)?;

    Ok(Json(PlaceResponse { place }))
}

pub async fn delete_place_handler(
    extract::State(state): extract::State<Arc<State>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let place = state
        .store
        .remove(&id)
        .await
        .map_err(AppError::store("Failed to delete place"))?
        .ok_or(AppError::NotFound)?;

    info!("Deleted place {} ({})", place.id, place.name);

    Ok(Json(DeletedResponse {
        message: "Place deleted successfully".to_string(),
        place,
    }))
}

pub async fn categories_handler() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: Category::names(),
    })
}

/// Raw documents as stored, for checking what the store really holds.
pub async fn debug_handler(
    extract::State(state): extract::State<Arc<State>>,
) -> Result<Json<Value>, AppError> {
    let documents = state
        .store
        .documents()
        .await
        .map_err(AppError::store("Debug failed"))?;

    let sample: Vec<Value> = documents
        .into_iter()
        .take(DEBUG_SAMPLE_SIZE)
        .map(|raw| serde_json::from_str(&raw).unwrap_or(Value::String(raw)))
        .collect();

    info!("Raw places from store: {sample:?}");

    Ok(Json(json!({
        "message": "Check server console for raw data",
        "count": sample.len(),
        "sample": sample.first(),
    })))
}

pub async fn maps_script_handler(
    extract::State(state): extract::State<Arc<State>>,
) -> Result<impl IntoResponse, AppError> {
    let script = state.maps.load().await?;

    Ok(([(CONTENT_TYPE, "application/javascript")], script))
}

pub async fn maps_status_handler(extract::State(state): extract::State<Arc<State>>) -> Json<Value> {
    Json(json!({ "loaded": state.maps.is_loaded() }))
}
