//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator module:
//! - API trait (`CalculatorClientV1`)
//! - Request model (`OperationRequest`, `RawValue`, `Operation`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, OperationRequest, RawValue};
//!
//! let request = OperationRequest::new(
//!     Some(RawValue::from("add")),
//!     Some(RawValue::from(5.0)),
//!     Some(RawValue::from("3")),
//! );
//! let value = client.evaluate(request).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
mod errors;
mod models;

pub use api::CalculatorClientV1;
pub use errors::{CalculatorError, OperationResult};
pub use models::{Operation, OperationRequest, RawValue};
