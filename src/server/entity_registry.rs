//! Entity registry for managing entity descriptors and their routes

use crate::core::hal::LinkBuilder;
use axum::Router;
use indexmap::IndexMap;

/// Trait that describes how to build routes for an entity
///
/// Each entity (Order, Employee) implements this trait to provide its
/// routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "order")
    fn entity_type(&self) -> &str;

    /// Build the routes for this entity
    ///
    /// `links` is the link builder the entity's assembler should use, so
    /// every representation shares the configured public base URL.
    fn build_routes(&self, links: &LinkBuilder) -> Router;
}

/// Registry for all entities in the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: IndexMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: IndexMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// The entity type name is the key; registering the same type again
    /// replaces the previous descriptor.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self, links: &LinkBuilder) -> Router {
        let mut router = Router::new();

        for descriptor in self.descriptors.values() {
            router = router.merge(descriptor.build_routes(links));
        }

        router
    }

    /// Get all registered entity types, in registration order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
