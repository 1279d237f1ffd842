use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, Response, StatusCode};
use axum::routing::get;
use axum::{Extension, Router};
use poc_api::RestApiModule;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::ApiGatewayConfig;
use crate::middleware::{panic, request_id, route_path};
use crate::web::{self, AppVersion};

/// HTTP host: collects module routes, wraps them in the middleware stack and
/// serves them until cancelled.
pub struct ApiGateway {
    config: ApiGatewayConfig,
    modules: Vec<Arc<dyn RestApiModule>>,
}

impl Default for ApiGateway {
    fn default() -> Self {
        Self::new(ApiGatewayConfig::default())
    }
}

impl ApiGateway {
    #[must_use]
    pub fn new(config: ApiGatewayConfig) -> Self {
        Self {
            config,
            modules: Vec::new(),
        }
    }

    /// Add a module whose routes are served behind the gateway.
    #[must_use]
    pub fn with_module(mut self, module: Arc<dyn RestApiModule>) -> Self {
        self.modules.push(module);
        self
    }

    /// Build the full router: service endpoints, module routes, JSON 404
    /// fallback and the middleware stack.
    #[must_use]
    pub fn build_router(&self) -> Router {
        let service_routes = Router::new()
            .route("/", get(web::root))
            .route("/health", get(web::health_check))
            .layer(Extension(AppVersion(Arc::from(
                self.config.app_version.as_str(),
            ))));

        let mut router = Router::new().merge(service_routes);
        for module in &self.modules {
            tracing::debug!(module = module.name(), "registering module routes");
            router = module.register_rest(router);
        }

        let router = router
            .fallback(web::not_found)
            .method_not_allowed_fallback(web::not_found);

        Self::match_paths_leniently(self.apply_middleware_stack(router))
    }

    /// Paths are rewritten before they reach the routes: trailing slashes
    /// trimmed, ASCII letters lowercased. Middleware attached with
    /// `Router::layer` only runs after routing, so the rewrite wraps the
    /// finished router as the fallback service of an empty one.
    fn match_paths_leniently(router: Router) -> Router {
        let rewritten = ServiceBuilder::new()
            .layer(NormalizePathLayer::trim_trailing_slash())
            .map_request(route_path::lowercase_path)
            .service(router);
        Router::new().fallback_service(rewritten)
    }

    /// Layer registration order is the reverse of execution order: the last
    /// layer added runs first.
    fn apply_middleware_stack(&self, mut router: Router) -> Router {
        // 5) Panic catcher, closest to the handlers
        router = router.layer(CatchPanicLayer::custom(panic::panic_response));

        // 4) Body limit
        router = router.layer(DefaultBodyLimit::max(self.config.body_limit_bytes));

        // 3) Timeout
        router = router.layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            self.config.request_timeout,
        ));

        // 2) Trace
        router = Self::apply_trace_layer(router);

        // 1) Request id: generated when absent, echoed on the response
        let x_request_id = request_id::header();
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
    }

    fn apply_trace_layer(router: Router) -> Router {
        router.layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        version = ?req.version(),
                        request_id = %request_id::request_id(req.headers()),
                        "user_agent.original" = req.headers().get("user-agent")
                            .and_then(|h| h.to_str().ok())
                            .unwrap_or("unknown"),
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(
                    |res: &Response<Body>, latency: Duration, span: &tracing::Span| {
                        span.record("status", res.status().as_u16());
                        span.record("latency_ms", latency.as_millis());
                        tracing::debug!(status = res.status().as_u16(), "request completed");
                    },
                ),
        )
    }

    /// Bind `bind_addr` and serve until `cancel` fires.
    ///
    /// # Errors
    /// Returns an error if the address cannot be bound or the server fails.
    pub async fn serve(&self, cancel: CancellationToken) -> Result<()> {
        let listener = TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", self.config.bind_addr))?;
        self.serve_on(listener, cancel).await
    }

    /// Serve on an already bound listener until `cancel` fires.
    ///
    /// # Errors
    /// Returns an error if the server fails.
    pub async fn serve_on(&self, listener: TcpListener, cancel: CancellationToken) -> Result<()> {
        let router = self.build_router();
        let addr = listener.local_addr().context("listener has no local address")?;
        tracing::info!(%addr, "HTTP server listening");

        let shutdown = async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully (cancellation)");
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server failed")
    }
}
