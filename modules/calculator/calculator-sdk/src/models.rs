//! Public models for the calculator module.
//!
//! These are transport-agnostic data structures: the REST layer converts its
//! JSON payload into them, other callers build them directly.

use std::str::FromStr;

use crate::errors::CalculatorError;

/// An untyped field value as delivered by a transport payload.
///
/// Absence of a field is modelled outside this type (`Option<RawValue>`),
/// so `Null` here means "present and null".
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Arrays and objects. Never numeric, always truthy.
    Structured,
}

impl RawValue {
    /// Loose truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Structured => true,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawValue {
    #[allow(clippy::cast_precision_loss)] // transports carry numbers as doubles
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A calculator request as received: every field may be absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperationRequest {
    pub operation: Option<RawValue>,
    pub a: Option<RawValue>,
    pub b: Option<RawValue>,
}

impl OperationRequest {
    #[must_use]
    pub fn new(operation: Option<RawValue>, a: Option<RawValue>, b: Option<RawValue>) -> Self {
        Self { operation, a, b }
    }
}

/// The four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    /// Exact, case-sensitive match on the operation tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            _ => Err(CalculatorError::UnknownOperation),
        }
    }
}
