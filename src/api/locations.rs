//! Location endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::location::{CreateLocation, Location, UpdateLocation},
};

use super::{CreatedResponse, MessageResponse};

/// Location list response
#[derive(Serialize, ToSchema)]
pub struct LocationListResponse {
    pub data: Vec<Location>,
}

/// Create a location
#[utoipa::path(
    post,
    path = "/locations",
    tag = "locations",
    request_body = CreateLocation,
    responses(
        (status = 201, description = "Location created", body = CreatedResponse)
    )
)]
pub async fn create_location(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.settings.create_location(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Location created successfully".to_string(),
        }),
    ))
}

/// List all locations
#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    responses(
        (status = 200, description = "All locations", body = LocationListResponse)
    )
)]
pub async fn list_locations(
    State(state): State<crate::AppState>,
) -> AppResult<Json<LocationListResponse>> {
    let data = state.services.settings.list_locations().await?;
    Ok(Json(LocationListResponse { data }))
}

/// Get a location
#[utoipa::path(
    get,
    path = "/locations/{id}",
    tag = "locations",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location", body = Location),
        (status = 404, description = "Location not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_location(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Location>> {
    let location = state.services.settings.get_location(id).await?;
    Ok(Json(location))
}

/// Update a location; only provided fields are written
#[utoipa::path(
    put,
    path = "/locations/{id}",
    tag = "locations",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    request_body = UpdateLocation,
    responses(
        (status = 200, description = "Location updated", body = MessageResponse),
        (status = 404, description = "Location not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_location(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateLocation>,
) -> AppResult<Json<MessageResponse>> {
    state.services.settings.update_location(id, request).await?;
    Ok(Json(MessageResponse::new("Location updated successfully")))
}

/// Delete a location
#[utoipa::path(
    delete,
    path = "/locations/{id}",
    tag = "locations",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location deleted", body = MessageResponse),
        (status = 404, description = "Location not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_location(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.settings.delete_location(id).await?;
    Ok(Json(MessageResponse::new("Location deleted successfully")))
}
