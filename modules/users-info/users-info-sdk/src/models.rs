//! Public models for the users-info module.

use serde::{Deserialize, Serialize};

/// User identifier. Directory entries use small integers; created users get
/// the creation time in epoch milliseconds.
pub type UserId = u64;

/// A user as exposed by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Data for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}
