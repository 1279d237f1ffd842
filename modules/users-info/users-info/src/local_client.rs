//! Local (in-process) client for the users-info module.

use std::sync::Arc;

use async_trait::async_trait;
use users_info_sdk::{NewUser, User, UsersInfoClientV1, UsersInfoError};

use crate::domain::service::DirectoryService;

pub struct UsersInfoLocalClient {
    service: Arc<DirectoryService>,
}

impl UsersInfoLocalClient {
    #[must_use]
    pub fn new(service: Arc<DirectoryService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersInfoClientV1 for UsersInfoLocalClient {
    async fn list_users(&self) -> Vec<User> {
        self.service.list_users()
    }

    async fn get_user(&self, raw_id: &str) -> Result<User, UsersInfoError> {
        self.service.get_user(raw_id)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UsersInfoError> {
        self.service.create_user(new_user)
    }
}
