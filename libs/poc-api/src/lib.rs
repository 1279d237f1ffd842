//! REST plumbing shared by every module of the POC server.
//!
//! - [`error`]: `{ "error": "<message>" }` error bodies (`ApiError`)
//! - [`extract`]: request body extraction that mirrors the JSON middleware
//!   the service has always exposed (`LenientJson`)
//! - [`number`]: number serialization for JSON responses
//! - [`rest`]: the `RestApiModule` seam the gateway assembles routes through
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod extract;
pub mod number;
pub mod response;
pub mod rest;
pub mod result;

pub use error::{ApiError, ErrorBody};
pub use extract::LenientJson;
pub use rest::RestApiModule;
pub use result::ApiResult;

/// Prelude module that re-exports common API types for module authors
pub mod prelude {
    pub use crate::error::ApiError;
    pub use crate::extract::LenientJson;
    pub use crate::response::{JsonBody, created_json};
    pub use crate::result::ApiResult;

    pub use axum::{Json, http::StatusCode, response::IntoResponse};
}
