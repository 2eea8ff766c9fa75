//! Machine parameter endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::parameter::{CreateParameter, Parameter, UpdateParameter},
};

use super::{CreatedResponse, MessageResponse};

/// Parameter list response
#[derive(Serialize, ToSchema)]
pub struct ParameterListResponse {
    pub data: Vec<Parameter>,
}

/// Create a parameter
#[utoipa::path(
    post,
    path = "/parameters",
    tag = "parameters",
    request_body = CreateParameter,
    responses(
        (status = 201, description = "Parameter created", body = CreatedResponse)
    )
)]
pub async fn create_parameter(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateParameter>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.settings.create_parameter(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Parameter created successfully".to_string(),
        }),
    ))
}

/// List all parameters
#[utoipa::path(
    get,
    path = "/parameters",
    tag = "parameters",
    responses(
        (status = 200, description = "All parameters", body = ParameterListResponse)
    )
)]
pub async fn list_parameters(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ParameterListResponse>> {
    let data = state.services.settings.list_parameters().await?;
    Ok(Json(ParameterListResponse { data }))
}

/// Get a parameter
#[utoipa::path(
    get,
    path = "/parameters/{id}",
    tag = "parameters",
    params(
        ("id" = i32, Path, description = "Parameter ID")
    ),
    responses(
        (status = 200, description = "Parameter", body = Parameter),
        (status = 404, description = "Parameter not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_parameter(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Parameter>> {
    let parameter = state.services.settings.get_parameter(id).await?;
    Ok(Json(parameter))
}

/// Update a parameter; only provided fields are written
#[utoipa::path(
    put,
    path = "/parameters/{id}",
    tag = "parameters",
    params(
        ("id" = i32, Path, description = "Parameter ID")
    ),
    request_body = UpdateParameter,
    responses(
        (status = 200, description = "Parameter updated", body = MessageResponse),
        (status = 404, description = "Parameter not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_parameter(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateParameter>,
) -> AppResult<Json<MessageResponse>> {
    state.services.settings.update_parameter(id, request).await?;
    Ok(Json(MessageResponse::new("Parameter updated successfully")))
}

/// Delete a parameter
#[utoipa::path(
    delete,
    path = "/parameters/{id}",
    tag = "parameters",
    params(
        ("id" = i32, Path, description = "Parameter ID")
    ),
    responses(
        (status = 200, description = "Parameter deleted", body = MessageResponse),
        (status = 404, description = "Parameter not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_parameter(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.settings.delete_parameter(id).await?;
    Ok(Json(MessageResponse::new("Parameter deleted successfully")))
}
