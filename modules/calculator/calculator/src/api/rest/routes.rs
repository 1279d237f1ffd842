use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub const CALCULATE_PATH: &str = "/api/calculate";

#[must_use]
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let routes = Router::new()
        .route(CALCULATE_PATH, post(handlers::calculate))
        .layer(Extension(service));

    router.merge(routes)
}
