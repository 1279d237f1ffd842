/// Errors returned by the users-info module. The `Display` text is the
/// message returned to clients.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersInfoError {
    #[error("Invalid user ID")]
    InvalidId,

    #[error("User not found")]
    NotFound,

    #[error("Name and email are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,
}
