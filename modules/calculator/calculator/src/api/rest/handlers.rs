use std::sync::Arc;

use axum::extract::Extension;
use poc_api::prelude::*;

use crate::domain::service::Service;

use super::dto::{CalculateRequest, CalculateResponse};
use super::error::calculator_error_to_api;

pub async fn calculate(
    Extension(svc): Extension<Arc<Service>>,
    LenientJson(req): LenientJson<CalculateRequest>,
) -> ApiResult<JsonBody<CalculateResponse>> {
    let result = svc
        .evaluate(&req.into())
        .map_err(calculator_error_to_api)?;
    Ok(Json(CalculateResponse { result }))
}
