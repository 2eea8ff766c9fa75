//! Inventory catalog administration endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::inventory::{CreateInventoryItem, InventoryItemDetails, LoadItems, UpdateInventoryItem},
};

use super::{CreatedResponse, MessageResponse};

/// Inventory list response
#[derive(Serialize, ToSchema)]
pub struct InventoryListResponse {
    pub data: Vec<InventoryItemDetails>,
}

/// Create an inventory item
#[utoipa::path(
    post,
    path = "/inventory",
    tag = "inventory",
    request_body = CreateInventoryItem,
    responses(
        (status = 201, description = "Item created", body = CreatedResponse),
        (status = 404, description = "Unknown category or employee", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateInventoryItem>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.catalog.create_item(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Inventory item created successfully".to_string(),
        }),
    ))
}

/// List all inventory items
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    responses(
        (status = 200, description = "All inventory items", body = InventoryListResponse)
    )
)]
pub async fn list_items(
    State(state): State<crate::AppState>,
) -> AppResult<Json<InventoryListResponse>> {
    let data = state.services.catalog.list_items().await?;
    Ok(Json(InventoryListResponse { data }))
}

/// Get an inventory item
#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = "inventory",
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Inventory item", body = InventoryItemDetails),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<InventoryItemDetails>> {
    let item = state.services.catalog.get_item(id).await?;
    Ok(Json(item))
}

/// Update an inventory item; only provided fields are written
#[utoipa::path(
    put,
    path = "/inventory/{id}",
    tag = "inventory",
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    request_body = UpdateInventoryItem,
    responses(
        (status = 200, description = "Item updated", body = MessageResponse),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateInventoryItem>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.update_item(id, request).await?;
    Ok(Json(MessageResponse::new(
        "Inventory item updated successfully",
    )))
}

/// Delete an inventory item
#[utoipa::path(
    delete,
    path = "/inventory/{id}",
    tag = "inventory",
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_item(id).await?;
    Ok(Json(MessageResponse::new(
        "Inventory item deleted successfully",
    )))
}

/// Bulk-create catalog rows, one per item code
#[utoipa::path(
    post,
    path = "/inventory/load",
    tag = "inventory",
    request_body = LoadItems,
    responses(
        (status = 201, description = "Items created", body = MessageResponse),
        (status = 400, description = "No valid item codes", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown category or employee", body = crate::error::ErrorResponse)
    )
)]
pub async fn load_items(
    State(state): State<crate::AppState>,
    Json(request): Json<LoadItems>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let count = state.services.catalog.load_items(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "{} inventory items created successfully",
            count
        ))),
    ))
}
