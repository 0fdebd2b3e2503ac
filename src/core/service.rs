//! Service trait for entity persistence

use crate::core::Entity;
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for persisting entities
///
/// Implementations provide CRUD operations for a specific entity type.
/// The rest of the crate is agnostic to the underlying storage mechanism.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Persist a new entity
    ///
    /// Assigns a fresh identifier when the entity has none; a preassigned
    /// identifier is kept as is.
    async fn create(&self, entity: T) -> Result<T>;

    /// Get an entity by ID
    async fn get(&self, id: &T::Id) -> Result<Option<T>>;

    /// List all entities in store iteration order
    async fn list(&self) -> Result<Vec<T>>;

    /// Replace an existing entity. Fails when `id` is not stored.
    async fn update(&self, id: &T::Id, entity: T) -> Result<T>;

    /// Delete an entity. Deleting an absent ID is not an error.
    async fn delete(&self, id: &T::Id) -> Result<()>;
}
