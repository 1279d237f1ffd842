//! API Gateway: owns the HTTP server, the service-level endpoints (`/`,
//! `/health`, the JSON 404 fallback) and the middleware stack every module
//! route runs behind.
//!
//! Runtime order of the middleware stack (outermost first):
//! trim trailing slash -> lowercase path -> set request id -> propagate
//! request id -> trace -> timeout -> body limit -> panic catcher -> router

pub mod config;
pub mod middleware;
pub mod module;
pub mod web;

pub use config::ApiGatewayConfig;
pub use module::ApiGateway;
