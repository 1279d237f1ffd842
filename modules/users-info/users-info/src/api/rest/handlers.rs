use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Extension, Path};
use poc_api::prelude::*;
use users_info_sdk::UsersInfoError;

use crate::domain::service::DirectoryService;

use super::dto::{CreateUserRequest, CreatedUserDto, UserDto, as_text};
use super::error::users_info_error_to_api;

pub async fn list_users(
    Extension(svc): Extension<Arc<DirectoryService>>,
) -> JsonBody<Vec<UserDto>> {
    Json(svc.list_users().into_iter().map(UserDto::from).collect())
}

pub async fn get_user(
    Extension(svc): Extension<Arc<DirectoryService>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<JsonBody<UserDto>> {
    let Path(id) = id.map_err(|e| {
        tracing::error!(error = %e, "failed to decode user id");
        ApiError::internal()
    })?;
    let user = svc
        .get_user(&id)
        .map_err(|e| users_info_error_to_api(&e))?;
    Ok(Json(user.into()))
}

pub async fn create_user(
    Extension(svc): Extension<Arc<DirectoryService>>,
    LenientJson(req): LenientJson<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    let (name, email) = req
        .into_fields()
        .ok_or_else(|| users_info_error_to_api(&UsersInfoError::MissingFields))?;
    let id = svc
        .issue_id(&as_text(&email))
        .map_err(|e| users_info_error_to_api(&e))?;
    Ok(created_json(CreatedUserDto { id, name, email }))
}
