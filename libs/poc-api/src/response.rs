use axum::{Json, http::StatusCode, response::IntoResponse};

/// Short alias for JSON responses
pub type JsonBody<T> = Json<T>;

/// 201 Created + JSON
#[must_use]
pub fn created_json<T: serde::Serialize>(value: T) -> impl IntoResponse {
    (StatusCode::CREATED, Json(value))
}
