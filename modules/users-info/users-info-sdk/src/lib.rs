//! Users-info SDK
//!
//! Public contract of the users-info module:
//! - API trait (`UsersInfoClientV1`)
//! - Models (`User`, `NewUser`)
//! - Error types (`UsersInfoError`)

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod errors;
pub mod models;

pub use client::UsersInfoClientV1;
pub use errors::UsersInfoError;
pub use models::{NewUser, User, UserId};
