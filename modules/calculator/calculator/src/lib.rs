//! Calculator Module
//!
//! Validates a tagged binary-operation request (`operation`, `a`, `b`) and
//! computes its result, or reports a precise validation error.
//!
//! ## Architecture
//!
//! - `domain/operand.rs` - Lenient numeric parsing of untyped operands
//! - `domain/service.rs` - Validation order and arithmetic dispatch
//! - `api/rest/` - `POST /api/calculate`
//! - `module.rs` - Module wiring for the gateway
//!
//! The public API is defined in `calculator-sdk` and re-exported here.

pub use calculator_sdk::{
    CalculatorClientV1, CalculatorError, Operation, OperationRequest, OperationResult, RawValue,
};

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

pub mod local_client;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
