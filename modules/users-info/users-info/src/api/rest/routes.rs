use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::DirectoryService;

pub const USERS_PATH: &str = "/api/users";
pub const USER_PATH: &str = "/api/users/{id}";

#[must_use]
pub fn register_routes(router: Router, service: Arc<DirectoryService>) -> Router {
    let routes = Router::new()
        .route(
            USERS_PATH,
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(USER_PATH, get(handlers::get_user))
        .layer(Extension(service));

    router.merge(routes)
}
