use crate::error::ApiError;

/// Result type for REST handlers.
pub type ApiResult<T> = Result<T, ApiError>;
