use serde_json::Value;

use crate::error::UtilsError;

/// Parse a JSON document of any shape.
///
/// # Errors
/// Returns [`UtilsError::InvalidJson`] when `input` is not valid JSON.
pub fn parse_json_data(input: &str) -> Result<Value, UtilsError> {
    Ok(serde_json::from_str(input)?)
}
