//! Role endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::role::{CreateRole, Role, UpdateRole},
};

use super::{CreatedResponse, MessageResponse};

/// Role list response
#[derive(Serialize, ToSchema)]
pub struct RoleListResponse {
    pub data: Vec<Role>,
}

/// Create a role
#[utoipa::path(
    post,
    path = "/roles",
    tag = "roles",
    request_body = CreateRole,
    responses(
        (status = 201, description = "Role created", body = CreatedResponse)
    )
)]
pub async fn create_role(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateRole>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.directory.create_role(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Role created successfully".to_string(),
        }),
    ))
}

/// List all roles
#[utoipa::path(
    get,
    path = "/roles",
    tag = "roles",
    responses(
        (status = 200, description = "All roles", body = RoleListResponse),
        (status = 404, description = "No roles defined", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_roles(State(state): State<crate::AppState>) -> AppResult<Json<RoleListResponse>> {
    let data = state.services.directory.list_roles().await?;
    Ok(Json(RoleListResponse { data }))
}

/// Get a role
#[utoipa::path(
    get,
    path = "/roles/{id}",
    tag = "roles",
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role", body = Role),
        (status = 404, description = "Role not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_role(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Role>> {
    let role = state.services.directory.get_role(id).await?;
    Ok(Json(role))
}

/// Update a role; only provided fields are written
#[utoipa::path(
    put,
    path = "/roles/{id}",
    tag = "roles",
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    request_body = UpdateRole,
    responses(
        (status = 200, description = "Role updated", body = MessageResponse),
        (status = 404, description = "Role not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_role(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateRole>,
) -> AppResult<Json<MessageResponse>> {
    state.services.directory.update_role(id, request).await?;
    Ok(Json(MessageResponse::new("Role updated successfully")))
}

/// Delete a role
#[utoipa::path(
    delete,
    path = "/roles/{id}",
    tag = "roles",
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role deleted", body = MessageResponse),
        (status = 404, description = "Role not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_role(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.directory.delete_role(id).await?;
    Ok(Json(MessageResponse::new("Role deleted successfully")))
}
