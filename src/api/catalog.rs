//! Kiosk browse endpoints: product tiles, categories and category filters

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{
        category::{Category, CategoryView, CreateCategory, UpdateCategory},
        inventory::{CategoryProduct, InventoryItemDetails, UniqueProduct},
    },
};

use super::{CreatedResponse, MessageResponse};

/// Distinct available products for the take screen
#[derive(Serialize, ToSchema)]
pub struct UniqueProductsResponse {
    pub unique_products: Vec<UniqueProduct>,
}

/// Active categories with images
#[derive(Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryView>,
}

/// Products of one category
#[derive(Serialize, ToSchema)]
pub struct CategoryProductsResponse {
    pub category_id: i32,
    pub products: Vec<CategoryProduct>,
}

/// Items of one category with resolved references
#[derive(Serialize, ToSchema)]
pub struct FilteredProductsResponse {
    pub products: Vec<InventoryItemDetails>,
}

/// Category filter query
#[derive(Deserialize, IntoParams)]
pub struct FilterProductsQuery {
    pub category_name: String,
}

/// Distinct products with at least one available unit
#[utoipa::path(
    get,
    path = "/inventory/unique-products",
    tag = "catalog",
    responses(
        (status = 200, description = "Available products", body = UniqueProductsResponse),
        (status = 404, description = "No products found", body = crate::error::ErrorResponse)
    )
)]
pub async fn unique_products(
    State(state): State<crate::AppState>,
) -> AppResult<Json<UniqueProductsResponse>> {
    let unique_products = state.services.catalog.unique_products().await?;
    Ok(Json(UniqueProductsResponse { unique_products }))
}

/// Active categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "catalog",
    responses(
        (status = 200, description = "Active categories", body = CategoriesResponse),
        (status = 404, description = "No categories found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<CategoriesResponse>> {
    let categories = state.services.catalog.active_categories().await?;
    Ok(Json(CategoriesResponse { categories }))
}

/// Active products of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/products",
    tag = "catalog",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Products of the category", body = CategoryProductsResponse),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn products_by_category(
    State(state): State<crate::AppState>,
    Path(category_id): Path<i32>,
) -> AppResult<Json<CategoryProductsResponse>> {
    let products = state
        .services
        .catalog
        .products_by_category(category_id)
        .await?;
    Ok(Json(CategoryProductsResponse {
        category_id,
        products,
    }))
}

/// All items of a category referenced by name, with creator codes resolved
#[utoipa::path(
    get,
    path = "/filter-products",
    tag = "catalog",
    params(FilterProductsQuery),
    responses(
        (status = 200, description = "Items of the category", body = FilteredProductsResponse),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn filter_products(
    State(state): State<crate::AppState>,
    Query(query): Query<FilterProductsQuery>,
) -> AppResult<Json<FilteredProductsResponse>> {
    let products = state
        .services
        .catalog
        .filter_products(&query.category_name)
        .await?;
    Ok(Json(FilteredProductsResponse { products }))
}

// ---------------------------------------------------------------------------
// Category administration
// ---------------------------------------------------------------------------

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "catalog",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = CreatedResponse)
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateCategory>,
) -> AppResult<(axum::http::StatusCode, Json<CreatedResponse>)> {
    let id = state.services.catalog.create_category(request).await?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Category created successfully".to_string(),
        }),
    ))
}

/// Get a category
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "catalog",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Category>> {
    let category = state.services.catalog.get_category(id).await?;
    Ok(Json(category))
}

/// Update a category; only provided fields are written
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "catalog",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated", body = MessageResponse),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCategory>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.update_category(id, request).await?;
    Ok(Json(MessageResponse::new("Category updated successfully")))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "catalog",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_category(id).await?;
    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
