use axum::Router;

/// A module that contributes REST routes to the gateway router.
///
/// Implementations add their routes (and any `Extension` layers their
/// handlers need) and hand the router back.
///
/// Request paths are lowercased before routing, so route paths must be
/// lowercase to be reachable.
pub trait RestApiModule: Send + Sync {
    /// Stable module name used in logs.
    fn name(&self) -> &'static str;

    /// Register this module's routes on `router`.
    fn register_rest(&self, router: Router) -> Router;
}
