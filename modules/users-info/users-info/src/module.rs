use std::sync::Arc;

use axum::Router;
use poc_api::RestApiModule;
use tracing::debug;
use users_info_sdk::UsersInfoClientV1;

use crate::api::rest::routes;
use crate::domain::repo::StaticUsersRepository;
use crate::domain::service::DirectoryService;
use crate::local_client::UsersInfoLocalClient;

/// Users-info module over the built-in directory.
#[derive(Clone)]
pub struct UsersInfoModule {
    service: Arc<DirectoryService>,
}

impl Default for UsersInfoModule {
    fn default() -> Self {
        Self::new()
    }
}

impl UsersInfoModule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: Arc::new(DirectoryService::new(Arc::new(StaticUsersRepository))),
        }
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn UsersInfoClientV1> {
        Arc::new(UsersInfoLocalClient::new(Arc::clone(&self.service)))
    }
}

impl RestApiModule for UsersInfoModule {
    fn name(&self) -> &'static str {
        "users_info"
    }

    fn register_rest(&self, router: Router) -> Router {
        debug!(path = routes::USERS_PATH, "registering users_info routes");
        routes::register_routes(router, Arc::clone(&self.service))
    }
}
