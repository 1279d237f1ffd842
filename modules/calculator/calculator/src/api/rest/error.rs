use calculator_sdk::CalculatorError;
use poc_api::ApiError;

/// Map a calculator error to its HTTP response.
///
/// Every calculator error is a caller-input error: 400 with the error's message.
pub fn calculator_error_to_api(e: CalculatorError) -> ApiError {
    tracing::debug!(kind = e.kind(), "calculator request rejected");
    ApiError::bad_request(e.to_string())
}
