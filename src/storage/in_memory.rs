//! In-memory implementation of DataService for testing and development

use crate::core::{DataService, Entity, EntityId};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-memory data service implementation
///
/// Entities are kept in insertion order, so `list()` returns them in the
/// order they were created. Uses RwLock for thread-safe access; each call
/// takes the lock once and releases it before returning.
#[derive(Clone)]
pub struct InMemoryDataService<T: Entity> {
    entities: Arc<RwLock<IndexMap<T::Id, T>>>,
}

impl<T: Entity> InMemoryDataService<T> {
    /// Create a new, empty in-memory data service
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Number of stored entities
    ///
    /// Fails like every other accessor when the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<T: Entity> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, mut entity: T) -> Result<T> {
        let id = match entity.id() {
            Some(id) => id,
            None => {
                let id = T::Id::generate();
                entity.assign_id(id);
                id
            }
        };

        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if entities.contains_key(&id) {
            return Err(anyhow!(
                "{} with id '{}' already exists",
                T::resource_name_singular(),
                id
            ));
        }

        entities.insert(id, entity.clone());

        Ok(entity)
    }

    async fn get(&self, id: &T::Id) -> Result<Option<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.values().cloned().collect())
    }

    async fn update(&self, id: &T::Id, mut entity: T) -> Result<T> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = entities
            .get_mut(id)
            .ok_or_else(|| anyhow!("{} not found: {}", T::resource_name_singular(), id))?;

        // The path id is authoritative
        entity.assign_id(*id);
        *slot = entity.clone();

        Ok(entity)
    }

    async fn delete(&self, id: &T::Id) -> Result<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // shift_remove keeps the remaining insertion order intact
        entities.shift_remove(id);

        Ok(())
    }
}
