use std::any::Any;

use axum::response::{IntoResponse, Response};
use poc_api::ApiError;

/// Response for a handler that panicked: the panic is logged and the client
/// gets the generic 500 body.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("<non-string panic payload>");

    tracing::error!(panic = detail, "request handler panicked");
    ApiError::internal().into_response()
}
