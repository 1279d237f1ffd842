//! Local (in-process) client for the calculator module.

use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{CalculatorClientV1, OperationRequest, OperationResult};

use crate::domain::service::Service;

/// Calls the domain service directly; no transport involved.
pub struct LocalCalculatorClient {
    service: Arc<Service>,
}

impl LocalCalculatorClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CalculatorClientV1 for LocalCalculatorClient {
    async fn evaluate(&self, request: OperationRequest) -> OperationResult {
        self.service.evaluate(&request)
    }
}
