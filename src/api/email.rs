//! Outgoing SMTP account endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::email_account::{CreateEmailAccount, EmailAccountView, UpdateEmailAccount},
};

use super::{CreatedResponse, MessageResponse};

/// Email account list response
#[derive(Serialize, ToSchema)]
pub struct EmailAccountListResponse {
    pub data: Vec<EmailAccountView>,
}

/// Create an email account
#[utoipa::path(
    post,
    path = "/email-accounts",
    tag = "email",
    request_body = CreateEmailAccount,
    responses(
        (status = 201, description = "Email account created", body = CreatedResponse)
    )
)]
pub async fn create_email_account(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateEmailAccount>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.settings.create_email_account(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Email configuration created successfully".to_string(),
        }),
    ))
}

/// List all email accounts
#[utoipa::path(
    get,
    path = "/email-accounts",
    tag = "email",
    responses(
        (status = 200, description = "All email accounts", body = EmailAccountListResponse)
    )
)]
pub async fn list_email_accounts(
    State(state): State<crate::AppState>,
) -> AppResult<Json<EmailAccountListResponse>> {
    let data = state.services.settings.list_email_accounts().await?;
    Ok(Json(EmailAccountListResponse { data }))
}

/// Get an email account
#[utoipa::path(
    get,
    path = "/email-accounts/{id}",
    tag = "email",
    params(
        ("id" = i32, Path, description = "Email account ID")
    ),
    responses(
        (status = 200, description = "Email account", body = EmailAccountView),
        (status = 404, description = "Email account not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_email_account(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EmailAccountView>> {
    let account = state.services.settings.get_email_account(id).await?;
    Ok(Json(account))
}

/// Update an email account; only provided fields are written
#[utoipa::path(
    put,
    path = "/email-accounts/{id}",
    tag = "email",
    params(
        ("id" = i32, Path, description = "Email account ID")
    ),
    request_body = UpdateEmailAccount,
    responses(
        (status = 200, description = "Email account updated", body = MessageResponse),
        (status = 404, description = "Email account not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_email_account(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateEmailAccount>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .settings
        .update_email_account(id, request)
        .await?;
    Ok(Json(MessageResponse::new(
        "Email configuration updated successfully",
    )))
}

/// Delete an email account
#[utoipa::path(
    delete,
    path = "/email-accounts/{id}",
    tag = "email",
    params(
        ("id" = i32, Path, description = "Email account ID")
    ),
    responses(
        (status = 200, description = "Email account deleted", body = MessageResponse),
        (status = 404, description = "Email account not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_email_account(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.settings.delete_email_account(id).await?;
    Ok(Json(MessageResponse::new(
        "Email configuration deleted successfully",
    )))
}
