use async_trait::async_trait;

use crate::errors::UsersInfoError;
use crate::models::{NewUser, User};

/// Client for inter-module consumption of the user directory (Version 1).
#[async_trait]
pub trait UsersInfoClientV1: Send + Sync {
    /// All users in the directory.
    async fn list_users(&self) -> Vec<User>;

    /// Look a user up by its raw (unparsed) identifier.
    async fn get_user(&self, raw_id: &str) -> Result<User, UsersInfoError>;

    /// Validate and build a new user. Nothing is persisted.
    async fn create_user(&self, new_user: NewUser) -> Result<User, UsersInfoError>;
}
