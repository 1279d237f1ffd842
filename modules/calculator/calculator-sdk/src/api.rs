//! Calculator API trait
//!
//! Contract trait for the calculator module.

use async_trait::async_trait;

use crate::errors::OperationResult;
use crate::models::OperationRequest;

/// Calculator API trait (Version 1).
///
/// Validates a tagged binary-operation request and computes its result.
/// Implementations are stateless; any number of callers may share one.
#[async_trait]
pub trait CalculatorClientV1: Send + Sync {
    /// Validate `request` and compute the result of its operation.
    async fn evaluate(&self, request: OperationRequest) -> OperationResult;
}
