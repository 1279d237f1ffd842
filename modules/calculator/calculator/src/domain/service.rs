//! Domain service for calculator
//!
//! Validation runs in a fixed order and the first failure wins:
//! 1. all three fields present (`operation` must also be non-empty)
//! 2. both operands numeric
//! 3. known operation, and a non-zero divisor for `divide`
//!
//! Arithmetic is plain IEEE-754 `f64`: no overflow checks, no rounding.

use calculator_sdk::{CalculatorError, Operation, OperationRequest, OperationResult, RawValue};
use tracing::debug;

use super::operand::coerce_operand;

/// Domain service that evaluates calculator requests.
///
/// Stateless; clones share nothing and calls never block.
#[derive(Clone, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate `request` and compute its result.
    ///
    /// # Errors
    /// Returns the first validation failure, see [`evaluate`].
    #[allow(clippy::unused_self)]
    pub fn evaluate(&self, request: &OperationRequest) -> OperationResult {
        let outcome = evaluate(
            request.operation.as_ref(),
            request.a.as_ref(),
            request.b.as_ref(),
        );
        match &outcome {
            Ok(value) => debug!(result = value, "evaluated calculator request"),
            Err(e) => debug!(kind = e.kind(), "rejected calculator request"),
        }
        outcome
    }
}

/// Validate the three raw fields and compute the result.
///
/// `None` means the field was absent. Only absence counts as missing for the
/// operands: `0`, `""` and `null` are present (and the latter two then fail the
/// numeric check). The operation must be present and truthy.
///
/// # Errors
/// - [`CalculatorError::MissingField`] when a field is absent or the operation is empty
/// - [`CalculatorError::InvalidOperand`] when either operand is not numeric
/// - [`CalculatorError::UnknownOperation`] when the operation tag is not recognized
/// - [`CalculatorError::DivisionByZero`] when dividing by exactly zero
pub fn evaluate(
    operation: Option<&RawValue>,
    a: Option<&RawValue>,
    b: Option<&RawValue>,
) -> OperationResult {
    let (Some(operation), Some(a), Some(b)) = (operation.filter(|op| op.is_truthy()), a, b) else {
        return Err(CalculatorError::MissingField);
    };

    let (a, b) = (coerce_operand(a), coerce_operand(b));
    if a.is_nan() || b.is_nan() {
        return Err(CalculatorError::InvalidOperand);
    }

    let RawValue::Text(tag) = operation else {
        return Err(CalculatorError::UnknownOperation);
    };
    apply(tag.parse::<Operation>()?, a, b)
}

/// Apply `op` to two already-validated operands.
///
/// # Errors
/// Returns [`CalculatorError::DivisionByZero`] for `divide` with `b == 0`
/// (either sign of zero).
pub fn apply(op: Operation, a: f64, b: f64) -> OperationResult {
    match op {
        Operation::Add => Ok(a + b),
        Operation::Subtract => Ok(a - b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide if b == 0.0 => Err(CalculatorError::DivisionByZero),
        Operation::Divide => Ok(a / b),
    }
}
