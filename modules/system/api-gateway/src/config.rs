use std::time::Duration;

use poc_bootstrap::AppConfig;

/// Settings the gateway needs from the application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiGatewayConfig {
    pub bind_addr: String,
    pub body_limit_bytes: usize,
    pub request_timeout: Duration,
    /// Reported by `/health`.
    pub app_version: String,
}

impl Default for ApiGatewayConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for ApiGatewayConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            bind_addr: config.server.bind_addr.clone(),
            body_limit_bytes: config.server.body_limit_bytes,
            request_timeout: Duration::from_millis(config.server.request_timeout_ms),
            app_version: config.app.version.clone(),
        }
    }
}
