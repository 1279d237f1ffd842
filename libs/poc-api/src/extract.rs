//! Request body extraction.
//!
//! `LenientJson` reproduces the behavior clients of this service rely on:
//! - a body without a JSON `Content-Type` (or an empty one) reads as `{}`
//! - a top-level JSON array reads as `{}` (no named fields)
//! - an unreadable or malformed JSON body is an internal error (500), not a 400;
//!   so is a number literal outside the `f64` range (`1e400`)
//!
//! Field-level validation is left to the handlers.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// JSON body extractor with the service's lenient parsing rules.
#[derive(Debug, Clone)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::error!(error = %e, "failed to read request body");
            ApiError::internal()
        })?;

        let value = body_value(is_json, &bytes)?;

        serde_json::from_value(value).map(LenientJson).map_err(|e| {
            tracing::error!(error = %e, "request body does not match the expected shape");
            ApiError::internal()
        })
    }
}

fn body_value(is_json: bool, bytes: &[u8]) -> Result<Value, ApiError> {
    if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(empty_object());
    }

    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        tracing::error!(error = %e, "malformed JSON body");
        ApiError::internal()
    })?;

    match value {
        Value::Object(_) => Ok(value),
        Value::Array(_) => Ok(empty_object()),
        other => {
            tracing::error!(body = %other, "JSON body must be an object or an array");
            Err(ApiError::internal())
        }
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// `application/json`, ignoring parameters and case.
fn is_json_content_type(raw: &str) -> bool {
    raw.split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use axum::body::Body;
    use http::StatusCode;

    #[derive(Debug, serde::Deserialize)]
    struct Payload {
        name: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Payload, ApiError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        LenientJson::<Payload>::from_request(req, &())
            .await
            .map(|LenientJson(p)| p)
    }

    #[tokio::test]
    async fn parses_json_object() {
        let payload = extract(Some("application/json"), r#"{"name":"x"}"#)
            .await
            .unwrap();
        assert_eq!(payload.name.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn content_type_parameters_are_ignored() {
        let payload = extract(Some("Application/JSON; charset=utf-8"), r#"{"name":"x"}"#)
            .await
            .unwrap();
        assert_eq!(payload.name.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn non_json_content_type_reads_as_empty_object() {
        let payload = extract(Some("text/plain"), r#"{"name":"x"}"#).await.unwrap();
        assert!(payload.name.is_none());

        let payload = extract(None, r#"{"name":"x"}"#).await.unwrap();
        assert!(payload.name.is_none());
    }

    #[tokio::test]
    async fn empty_body_reads_as_empty_object() {
        let payload = extract(Some("application/json"), "").await.unwrap();
        assert!(payload.name.is_none());
    }

    #[tokio::test]
    async fn array_body_has_no_fields() {
        let payload = extract(Some("application/json"), "[1,2,3]").await.unwrap();
        assert!(payload.name.is_none());
    }

    #[tokio::test]
    async fn malformed_json_is_internal_error() {
        let err = extract(Some("application/json"), "{not json").await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error");
    }

    #[tokio::test]
    async fn scalar_json_is_internal_error() {
        let err = extract(Some("application/json"), "42").await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn out_of_range_number_is_internal_error() {
        let err = extract(Some("application/json"), r#"{"name":1e400}"#)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
