//! Kiosk machine endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::machine::{CreateMachine, Machine, UpdateMachine},
};

use super::{CreatedResponse, MessageResponse};

/// Machine list response
#[derive(Serialize, ToSchema)]
pub struct MachineListResponse {
    pub data: Vec<Machine>,
}

/// Create a machine
#[utoipa::path(
    post,
    path = "/machines",
    tag = "machines",
    request_body = CreateMachine,
    responses(
        (status = 201, description = "Machine created", body = CreatedResponse),
        (status = 400, description = "Invalid location", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_machine(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateMachine>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.settings.create_machine(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Machine created successfully".to_string(),
        }),
    ))
}

/// List all machines
#[utoipa::path(
    get,
    path = "/machines",
    tag = "machines",
    responses(
        (status = 200, description = "All machines", body = MachineListResponse),
        (status = 404, description = "No machines registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_machines(
    State(state): State<crate::AppState>,
) -> AppResult<Json<MachineListResponse>> {
    let data = state.services.settings.list_machines().await?;
    Ok(Json(MachineListResponse { data }))
}

/// Get a machine
#[utoipa::path(
    get,
    path = "/machines/{id}",
    tag = "machines",
    params(
        ("id" = i32, Path, description = "Machine ID")
    ),
    responses(
        (status = 200, description = "Machine", body = Machine),
        (status = 404, description = "Machine not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_machine(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Machine>> {
    let machine = state.services.settings.get_machine(id).await?;
    Ok(Json(machine))
}

/// Update a machine; only provided fields are written
#[utoipa::path(
    put,
    path = "/machines/{id}",
    tag = "machines",
    params(
        ("id" = i32, Path, description = "Machine ID")
    ),
    request_body = UpdateMachine,
    responses(
        (status = 200, description = "Machine updated", body = MessageResponse),
        (status = 404, description = "Machine not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_machine(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateMachine>,
) -> AppResult<Json<MessageResponse>> {
    state.services.settings.update_machine(id, request).await?;
    Ok(Json(MessageResponse::new("Machine updated successfully")))
}

/// Delete a machine
#[utoipa::path(
    delete,
    path = "/machines/{id}",
    tag = "machines",
    params(
        ("id" = i32, Path, description = "Machine ID")
    ),
    responses(
        (status = 200, description = "Machine deleted", body = MessageResponse),
        (status = 404, description = "Machine not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_machine(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.settings.delete_machine(id).await?;
    Ok(Json(MessageResponse::new("Machine deleted successfully")))
}
