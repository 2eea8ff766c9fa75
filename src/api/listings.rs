//! Ledger administration endpoints: checkout, unreturned and damaged listings

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        damaged::{CreateDamagedListing, DamagedListing, UpdateDamagedListing},
        listing::{CheckoutListing, CreateListing, UpdateListing},
        unreturned::{CreateUnreturnedListing, UnreturnedListing, UpdateUnreturnedListing},
    },
};

use super::{CreatedResponse, MessageResponse};

/// Checkout ledger list response
#[derive(Serialize, ToSchema)]
pub struct ListingListResponse {
    pub data: Vec<CheckoutListing>,
}

/// Unreturned ledger list response
#[derive(Serialize, ToSchema)]
pub struct UnreturnedListResponse {
    pub data: Vec<UnreturnedListing>,
}

/// Damaged ledger list response
#[derive(Serialize, ToSchema)]
pub struct DamagedListResponse {
    pub data: Vec<DamagedListing>,
}

// ---------------------------------------------------------------------------
// Checkout ledger
// ---------------------------------------------------------------------------

/// List all checkout listings
#[utoipa::path(
    get,
    path = "/listings",
    tag = "listings",
    responses(
        (status = 200, description = "All checkout listings", body = ListingListResponse)
    )
)]
pub async fn list_listings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ListingListResponse>> {
    let data = state.services.ledgers.list_listings().await?;
    Ok(Json(ListingListResponse { data }))
}

/// Get a checkout listing
#[utoipa::path(
    get,
    path = "/listings/{id}",
    tag = "listings",
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Checkout listing", body = CheckoutListing),
        (status = 404, description = "Listing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_listing(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CheckoutListing>> {
    let listing = state.services.ledgers.get_listing(id).await?;
    Ok(Json(listing))
}

/// Create a checkout listing (back-office path)
#[utoipa::path(
    post,
    path = "/listings",
    tag = "listings",
    request_body = CreateListing,
    responses(
        (status = 201, description = "Listing created", body = CreatedResponse),
        (status = 404, description = "Unknown item or employee", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_listing(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateListing>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.ledgers.create_listing(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Inventory listing created successfully".to_string(),
        }),
    ))
}

/// Update a checkout listing; only provided fields are written
#[utoipa::path(
    put,
    path = "/listings/{id}",
    tag = "listings",
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    request_body = UpdateListing,
    responses(
        (status = 200, description = "Listing updated", body = MessageResponse),
        (status = 404, description = "Listing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_listing(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateListing>,
) -> AppResult<Json<MessageResponse>> {
    state.services.ledgers.update_listing(id, request).await?;
    Ok(Json(MessageResponse::new(
        "Inventory listing updated successfully",
    )))
}

/// Delete a checkout listing
#[utoipa::path(
    delete,
    path = "/listings/{id}",
    tag = "listings",
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing deleted", body = MessageResponse),
        (status = 404, description = "Listing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_listing(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.ledgers.delete_listing(id).await?;
    Ok(Json(MessageResponse::new(
        "Inventory listing deleted successfully",
    )))
}

// ---------------------------------------------------------------------------
// Unreturned ledger (loss-escalation interface)
// ---------------------------------------------------------------------------

/// List all unreturned listings
#[utoipa::path(
    get,
    path = "/unreturned-listings",
    tag = "listings",
    responses(
        (status = 200, description = "All unreturned listings", body = UnreturnedListResponse)
    )
)]
pub async fn list_unreturned(
    State(state): State<crate::AppState>,
) -> AppResult<Json<UnreturnedListResponse>> {
    let data = state.services.ledgers.list_unreturned().await?;
    Ok(Json(UnreturnedListResponse { data }))
}

/// Flag a checkout listing as unreturned
#[utoipa::path(
    post,
    path = "/unreturned-listings",
    tag = "listings",
    request_body = CreateUnreturnedListing,
    responses(
        (status = 201, description = "Unreturned listing created", body = CreatedResponse),
        (status = 404, description = "Unknown listing or employee", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_unreturned(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateUnreturnedListing>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.ledgers.create_unreturned(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Inventory unreturned listing created successfully".to_string(),
        }),
    ))
}

/// Update unreturned rows referencing a checkout listing
#[utoipa::path(
    put,
    path = "/unreturned-listings/{listing_id}",
    tag = "listings",
    params(
        ("listing_id" = i32, Path, description = "Referenced checkout listing ID")
    ),
    request_body = UpdateUnreturnedListing,
    responses(
        (status = 200, description = "Unreturned listing updated", body = MessageResponse),
        (status = 404, description = "Listing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_unreturned(
    State(state): State<crate::AppState>,
    Path(listing_id): Path<i32>,
    Json(request): Json<UpdateUnreturnedListing>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .ledgers
        .update_unreturned(listing_id, request)
        .await?;
    Ok(Json(MessageResponse::new(
        "Inventory unreturned listing updated successfully",
    )))
}

/// Delete unreturned rows referencing a checkout listing
#[utoipa::path(
    delete,
    path = "/unreturned-listings/{listing_id}",
    tag = "listings",
    params(
        ("listing_id" = i32, Path, description = "Referenced checkout listing ID")
    ),
    responses(
        (status = 200, description = "Unreturned listing deleted", body = MessageResponse),
        (status = 404, description = "Listing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_unreturned(
    State(state): State<crate::AppState>,
    Path(listing_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.ledgers.delete_unreturned(listing_id).await?;
    Ok(Json(MessageResponse::new(
        "Inventory unreturned listing deleted successfully",
    )))
}

// ---------------------------------------------------------------------------
// Damaged ledger
// ---------------------------------------------------------------------------

/// List all damaged listings
#[utoipa::path(
    get,
    path = "/damaged-listings",
    tag = "listings",
    responses(
        (status = 200, description = "All damaged listings", body = DamagedListResponse)
    )
)]
pub async fn list_damaged(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DamagedListResponse>> {
    let data = state.services.ledgers.list_damaged().await?;
    Ok(Json(DamagedListResponse { data }))
}

/// Get a damaged listing
#[utoipa::path(
    get,
    path = "/damaged-listings/{id}",
    tag = "listings",
    params(
        ("id" = i32, Path, description = "Damaged listing ID")
    ),
    responses(
        (status = 200, description = "Damaged listing", body = DamagedListing),
        (status = 404, description = "Damaged listing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_damaged(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DamagedListing>> {
    let listing = state.services.ledgers.get_damaged(id).await?;
    Ok(Json(listing))
}

/// Record a damaged listing (back-office path)
#[utoipa::path(
    post,
    path = "/damaged-listings",
    tag = "listings",
    request_body = CreateDamagedListing,
    responses(
        (status = 201, description = "Damaged listing created", body = CreatedResponse),
        (status = 404, description = "Referenced listing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_damaged(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateDamagedListing>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.ledgers.create_damaged(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Damaged listing recorded successfully".to_string(),
        }),
    ))
}

/// Update a damaged listing's status
#[utoipa::path(
    put,
    path = "/damaged-listings/{id}",
    tag = "listings",
    params(
        ("id" = i32, Path, description = "Damaged listing ID")
    ),
    request_body = UpdateDamagedListing,
    responses(
        (status = 200, description = "Damaged listing updated", body = MessageResponse),
        (status = 404, description = "Damaged listing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_damaged(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateDamagedListing>,
) -> AppResult<Json<MessageResponse>> {
    state.services.ledgers.update_damaged(id, request).await?;
    Ok(Json(MessageResponse::new(
        "Damaged listing status updated successfully",
    )))
}

/// Delete a damaged listing
#[utoipa::path(
    delete,
    path = "/damaged-listings/{id}",
    tag = "listings",
    params(
        ("id" = i32, Path, description = "Damaged listing ID")
    ),
    responses(
        (status = 200, description = "Damaged listing deleted", body = MessageResponse),
        (status = 404, description = "Damaged listing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_damaged(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.ledgers.delete_damaged(id).await?;
    Ok(Json(MessageResponse::new(
        "Damaged listing deleted successfully",
    )))
}
