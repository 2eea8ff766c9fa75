//! Kiosk checkout and return endpoints — the core product workflow

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::listing::HeldProduct,
};

use super::MessageResponse;

/// Successful checkout response
#[derive(Serialize, ToSchema)]
pub struct SelectProductResponse {
    /// Status message
    pub message: String,
    /// Code of the unit handed out
    pub item_code: String,
    /// Reason recorded in the ledger ("take" or the lost-replacement label)
    pub reason: String,
}

/// Products an employee currently holds
#[derive(Serialize, ToSchema)]
pub struct HeldProductsResponse {
    pub products: Vec<HeldProduct>,
}

/// Query parameters of the damaged-return endpoint
#[derive(Deserialize, IntoParams)]
pub struct DamagedReturnQuery {
    /// Whether the unit comes back damaged
    #[serde(default)]
    pub is_damaged: bool,
    /// Free-text damage description, stored as the listing reason
    pub damage_reason: Option<String>,
}

/// Check out one unit of a product for an employee
#[utoipa::path(
    post,
    path = "/select-product/{emp_code}/{product_name}",
    tag = "checkout",
    params(
        ("emp_code" = String, Path, description = "Employee badge code"),
        ("product_name" = String, Path, description = "Product name")
    ),
    responses(
        (status = 200, description = "Product checked out", body = SelectProductResponse),
        (status = 400, description = "Employee not eligible", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown employee or product", body = crate::error::ErrorResponse)
    )
)]
pub async fn select_product(
    State(state): State<crate::AppState>,
    Path((emp_code, product_name)): Path<(String, String)>,
) -> AppResult<Json<SelectProductResponse>> {
    let selected = state
        .services
        .workflow
        .select_product(&emp_code, &product_name)
        .await?;

    Ok(Json(SelectProductResponse {
        message: "Product selected successfully.".to_string(),
        item_code: selected.item_code,
        reason: selected.reason.as_code().to_string(),
    }))
}

/// Products the employee can return, with hours held since checkout
#[utoipa::path(
    get,
    path = "/return-products/{emp_code}",
    tag = "checkout",
    params(
        ("emp_code" = String, Path, description = "Employee badge code")
    ),
    responses(
        (status = 200, description = "Held products", body = HeldProductsResponse),
        (status = 404, description = "Unknown employee or nothing to return", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_products(
    State(state): State<crate::AppState>,
    Path(emp_code): Path<String>,
) -> AppResult<Json<HeldProductsResponse>> {
    let products = state.services.workflow.held_products(&emp_code).await?;
    if products.is_empty() {
        return Err(AppError::NotFound(
            "No active products to return.".to_string(),
        ));
    }
    Ok(Json(HeldProductsResponse { products }))
}

/// Return a checked-out unit back into circulation
#[utoipa::path(
    post,
    path = "/return-product/{emp_code}/{item_code}",
    tag = "checkout",
    params(
        ("emp_code" = String, Path, description = "Employee badge code"),
        ("item_code" = String, Path, description = "Unit code")
    ),
    responses(
        (status = 200, description = "Product returned", body = MessageResponse),
        (status = 400, description = "No matching active checkout", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown employee or item code", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_product(
    State(state): State<crate::AppState>,
    Path((emp_code, item_code)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .workflow
        .return_product(&emp_code, &item_code)
        .await?;

    Ok(Json(MessageResponse::new("Product returned successfully.")))
}

/// Products the employee can flag as damaged on return
#[utoipa::path(
    get,
    path = "/return-damaged-products/{emp_code}",
    tag = "checkout",
    params(
        ("emp_code" = String, Path, description = "Employee badge code")
    ),
    responses(
        (status = 200, description = "Held products", body = HeldProductsResponse),
        (status = 404, description = "Unknown employee or nothing to return", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_damaged_products(
    State(state): State<crate::AppState>,
    Path(emp_code): Path<String>,
) -> AppResult<Json<HeldProductsResponse>> {
    let products = state.services.workflow.held_products(&emp_code).await?;
    if products.is_empty() {
        return Err(AppError::NotFound(
            "No active damaged products to return.".to_string(),
        ));
    }
    Ok(Json(HeldProductsResponse { products }))
}

/// Return a unit, optionally flagged as damaged.
/// Damaged units go to the inspection ledger and stay out of circulation.
#[utoipa::path(
    post,
    path = "/return-damaged-product/{emp_code}/{item_code}",
    tag = "checkout",
    params(
        ("emp_code" = String, Path, description = "Employee badge code"),
        ("item_code" = String, Path, description = "Unit code"),
        DamagedReturnQuery
    ),
    responses(
        (status = 200, description = "Product returned", body = MessageResponse),
        (status = 400, description = "No matching active checkout", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown employee or item code", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_damaged_product(
    State(state): State<crate::AppState>,
    Path((emp_code, item_code)): Path<(String, String)>,
    Query(query): Query<DamagedReturnQuery>,
) -> AppResult<Json<MessageResponse>> {
    let damaged = state
        .services
        .workflow
        .return_damaged_product(&emp_code, &item_code, query.is_damaged, query.damage_reason)
        .await?;

    let message = if damaged {
        "Damaged product returned successfully."
    } else {
        "Product returned successfully."
    };
    Ok(Json(MessageResponse::new(message)))
}
