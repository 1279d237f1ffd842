use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument};
use users_info_sdk::{NewUser, User, UserId, UsersInfoError};

use super::email::is_valid_email;
use super::repo::{StaticUsersRepository, UsersRepository};
use super::user_id::parse_int_prefix;

/// Domain service for the user directory.
pub struct Service<R: UsersRepository> {
    repo: Arc<R>,
}

impl<R: UsersRepository> Service<R> {
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[must_use]
    pub fn list_users(&self) -> Vec<User> {
        self.repo.all()
    }

    /// Look up a user by the raw id taken from the request path.
    ///
    /// # Errors
    /// `InvalidId` when `raw_id` has no integer prefix or it is not positive,
    /// `NotFound` when no directory entry has that id.
    #[instrument(skip(self), level = "debug")]
    pub fn get_user(&self, raw_id: &str) -> Result<User, UsersInfoError> {
        let id = match parse_int_prefix(raw_id) {
            Some(n) if n > 0 => n,
            _ => return Err(UsersInfoError::InvalidId),
        };
        let id = UserId::try_from(id).map_err(|_| UsersInfoError::InvalidId)?;

        self.repo.find(id).ok_or(UsersInfoError::NotFound)
    }

    /// Validate `new_user` and assign it an id. The user is not stored.
    ///
    /// # Errors
    /// `MissingFields` when name or email is empty, `InvalidEmail` when the
    /// email is not of the form `local@domain.tld`.
    pub fn create_user(&self, new_user: NewUser) -> Result<User, UsersInfoError> {
        let NewUser { name, email } = new_user;
        if name.is_empty() || email.is_empty() {
            return Err(UsersInfoError::MissingFields);
        }
        let id = self.issue_id(&email)?;
        Ok(User { id, name, email })
    }

    /// Check `email` and hand out the id a new user receives: the current
    /// time in epoch milliseconds.
    ///
    /// # Errors
    /// `InvalidEmail` when the email is not of the form `local@domain.tld`.
    #[allow(clippy::unused_self)]
    pub fn issue_id(&self, email: &str) -> Result<UserId, UsersInfoError> {
        if !is_valid_email(email) {
            return Err(UsersInfoError::InvalidEmail);
        }

        let id = UserId::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        debug!(id, "issued user id");
        Ok(id)
    }
}

/// The service over the built-in directory, as wired by the module.
pub type DirectoryService = Service<StaticUsersRepository>;
