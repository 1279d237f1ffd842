use poc_api::ApiError;
use users_info_sdk::UsersInfoError;

/// Map a users-info error to its HTTP response.
pub fn users_info_error_to_api(e: &UsersInfoError) -> ApiError {
    match e {
        UsersInfoError::NotFound => ApiError::not_found(e.to_string()),
        UsersInfoError::InvalidId
        | UsersInfoError::MissingFields
        | UsersInfoError::InvalidEmail => ApiError::bad_request(e.to_string()),
    }
}
