//! Users-info Module Implementation
//!
//! A fixed, in-memory user directory with lookup by id and a create endpoint
//! that validates and echoes new users without storing them.
//!
//! The public API is defined in `users-info-sdk` and re-exported here.

pub use users_info_sdk::{NewUser, User, UserId, UsersInfoClientV1, UsersInfoError};

pub mod module;
pub use module::UsersInfoModule;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
