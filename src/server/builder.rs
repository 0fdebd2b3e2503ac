//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::{EntityDescriptor, EntityRegistry};
use super::exposure::RestExposure;
use crate::core::hal::LinkBuilder;
use crate::entities::employee::{EmployeeDescriptor, EmployeeService};
use crate::entities::order::{OrderDescriptor, OrderService};
use crate::storage::Stores;
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Builder for creating HTTP servers with auto-registered routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_public_url("http://localhost:8080")
///     .register_stores(Stores::in_memory())
///     .build()?;
/// ```
pub struct ServerBuilder {
    links: LinkBuilder,
    entity_registry: EntityRegistry,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with root-relative links
    pub fn new() -> Self {
        Self {
            links: LinkBuilder::default(),
            entity_registry: EntityRegistry::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Base URL for hypermedia links. Empty keeps them root-relative.
    pub fn with_public_url(mut self, public_url: impl AsRef<str>) -> Self {
        self.links = LinkBuilder::new(public_url);
        self
    }

    /// Register a single entity descriptor
    pub fn register_entity(mut self, descriptor: impl EntityDescriptor + 'static) -> Self {
        self.entity_registry.register(Box::new(descriptor));
        self
    }

    /// Register the order and employee resources backed by `stores`
    pub fn register_stores(self, stores: Stores) -> Self {
        self.register_entity(OrderDescriptor::new(OrderService::new(stores.orders)))
            .register_entity(EmployeeDescriptor::new(EmployeeService::new(
                stores.employees,
            )))
    }

    /// Add custom routes to the server
    ///
    /// Use this for endpoints that are not tied to a registered entity.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final REST router
    ///
    /// Fails when no entity has been registered.
    pub fn build(self) -> Result<Router> {
        if self.entity_registry.is_empty() {
            anyhow::bail!("No entities registered. Call .register_stores() or .register_entity()");
        }

        tracing::debug!(
            entities = ?self.entity_registry.entity_types(),
            base_url = self.links.base_url(),
            "building router"
        );

        Ok(RestExposure::build_router(
            &self.entity_registry,
            &self.links,
            self.custom_routes,
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
///
/// A handler that fails to install never resolves, so the other one still
/// triggers shutdown.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[test]
    fn test_new_creates_empty_builder() {
        let builder = ServerBuilder::new();
        assert!(builder.entity_registry.is_empty());
        assert!(builder.custom_routes.is_empty());
        assert_eq!(builder.links.base_url(), "");
    }

    #[test]
    fn test_with_public_url_trims_trailing_slash() {
        let builder = ServerBuilder::new().with_public_url("http://localhost:8080/");
        assert_eq!(builder.links.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_register_stores_registers_both_entities() {
        let builder = ServerBuilder::new().register_stores(Stores::in_memory());
        assert_eq!(
            builder.entity_registry.entity_types(),
            vec!["order", "employee"]
        );
    }

    #[test]
    fn test_with_custom_routes_appends_router() {
        let builder = ServerBuilder::new()
            .with_custom_routes(Router::new())
            .with_custom_routes(Router::new());
        assert_eq!(builder.custom_routes.len(), 2);
    }

    #[test]
    fn test_build_without_entities_fails() {
        let result = ServerBuilder::new().build();
        let err_msg = format!("{}", result.err().expect("should be Err"));
        assert!(
            err_msg.contains("No entities registered"),
            "error should explain the cause: {}",
            err_msg
        );
    }

    #[test]
    fn test_build_with_custom_routes() {
        let custom = Router::new().route("/custom", get(|| async { "ok" }));
        let result = ServerBuilder::new()
            .register_stores(Stores::in_memory())
            .with_custom_routes(custom)
            .build();
        assert!(result.is_ok(), "build should succeed with custom routes");
    }
}
