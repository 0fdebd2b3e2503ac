//! REST API exposure
//!
//! Assembles the axum `Router` from the entity registry: health routes,
//! entity routes, custom routes, and a request tracing layer.

use crate::core::hal::LinkBuilder;
use crate::server::entity_registry::EntityRegistry;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Entity routes from the registry
    /// - Custom routes
    pub fn build_router(
        registry: &EntityRegistry,
        links: &LinkBuilder,
        custom_routes: Vec<Router>,
    ) -> Router {
        let mut app = Self::health_routes().merge(registry.build_routes(links));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.layer(TraceLayer::new_for_http())
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        }))
    }
}
