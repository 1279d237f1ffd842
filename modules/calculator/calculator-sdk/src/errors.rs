/// Outcome of evaluating an operation request.
pub type OperationResult = Result<f64, CalculatorError>;

/// Error type for calculator operations.
///
/// Every variant is a caller-input error. The `Display` text is the message
/// returned to clients.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Operation, a, and b are required")]
    MissingField,

    #[error("a and b must be valid numbers")]
    InvalidOperand,

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Invalid operation. Use: add, subtract, multiply, divide")]
    UnknownOperation,
}

impl CalculatorError {
    /// Stable machine-readable kind.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::MissingField => "MissingField",
            Self::InvalidOperand => "InvalidOperand",
            Self::DivisionByZero => "DivisionByZero",
            Self::UnknownOperation => "UnknownOperation",
        }
    }
}
