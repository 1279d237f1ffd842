use std::sync::Arc;

use axum::Router;
use calculator_sdk::CalculatorClientV1;
use poc_api::RestApiModule;
use tracing::debug;

use crate::api::rest::routes;
use crate::domain::service::Service;
use crate::local_client::LocalCalculatorClient;

/// Calculator module: owns the domain service and exposes it over REST and
/// as an in-process client.
#[derive(Clone, Default)]
pub struct CalculatorModule {
    service: Arc<Service>,
}

impl CalculatorModule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: Arc::new(Service::new()),
        }
    }

    /// In-process client for other modules.
    #[must_use]
    pub fn client(&self) -> Arc<dyn CalculatorClientV1> {
        Arc::new(LocalCalculatorClient::new(Arc::clone(&self.service)))
    }
}

impl RestApiModule for CalculatorModule {
    fn name(&self) -> &'static str {
        "calculator"
    }

    fn register_rest(&self, router: Router) -> Router {
        debug!(path = routes::CALCULATE_PATH, "registering calculator routes");
        routes::register_routes(router, Arc::clone(&self.service))
    }
}
