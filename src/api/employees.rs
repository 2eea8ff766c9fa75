//! Employee directory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::employee::{
        CreateEmployee, Employee, EmployeeActions, EmployeeActionsRequest, UpdateEmployee,
    },
};

use super::{CreatedResponse, MessageResponse};

/// Employee list response
#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = CreatedResponse),
        (status = 400, description = "Invalid role", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_employee(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.directory.create_employee(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "User created successfully".to_string(),
        }),
    ))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees", body = EmployeeListResponse)
    )
)]
pub async fn list_employees(
    State(state): State<crate::AppState>,
) -> AppResult<Json<EmployeeListResponse>> {
    let data = state.services.directory.list_employees().await?;
    Ok(Json(EmployeeListResponse { data }))
}

/// Get an employee
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee", body = Employee),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_employee(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Employee>> {
    let employee = state.services.directory.get_employee(id).await?;
    Ok(Json(employee))
}

/// Update an employee; only provided fields are written
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = MessageResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_employee(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateEmployee>,
) -> AppResult<Json<MessageResponse>> {
    state.services.directory.update_employee(id, request).await?;
    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_employee(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.directory.delete_employee(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// Kiosk action menu for a badge code
#[utoipa::path(
    post,
    path = "/employee-actions",
    tag = "employees",
    request_body = EmployeeActionsRequest,
    responses(
        (status = 200, description = "Name, role and permitted actions", body = EmployeeActions),
        (status = 404, description = "Employee not found or role not assigned", body = crate::error::ErrorResponse)
    )
)]
pub async fn employee_actions(
    State(state): State<crate::AppState>,
    Json(request): Json<EmployeeActionsRequest>,
) -> AppResult<Json<EmployeeActions>> {
    let actions = state
        .services
        .directory
        .employee_actions(&request.emp_code)
        .await?;
    Ok(Json(actions))
}
