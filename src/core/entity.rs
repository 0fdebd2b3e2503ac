//! Entity traits defining the core abstraction for all persisted types

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier type of a persisted entity.
///
/// Identifiers are assigned by the store on first persist, so the trait only
/// needs a way to mint a fresh one and to round-trip through URLs.
pub trait EntityId:
    Copy + Eq + Hash + Debug + Display + FromStr + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Generate a fresh, unique identifier
    fn generate() -> Self;
}

impl EntityId for Uuid {
    fn generate() -> Self {
        Uuid::new_v4()
    }
}

/// Base trait for all entities in the system.
///
/// An entity is a record with a server-assigned identifier. Before the first
/// persist `id()` returns `None`.
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Identifier type used by the store
    type Id: EntityId;

    /// The plural resource name used in URLs (e.g., "orders", "employees")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "order", "employee")
    fn resource_name_singular() -> &'static str;

    /// Name of the relational table backing this entity type
    fn table_name() -> &'static str {
        Self::resource_name_singular()
    }

    /// Get the identifier, if the entity has been persisted
    fn id(&self) -> Option<Self::Id>;

    /// Set the identifier. Only stores call this.
    fn assign_id(&mut self, id: Self::Id);
}

/// Identity-aware equality for entities.
///
/// - the same instance is always equal to itself
/// - two persisted entities are equal iff their identifiers are equal
/// - two transient entities fall back to `same_fields`
/// - a persisted entity never equals a transient one
pub fn entity_eq<T, F>(a: &T, b: &T, same_fields: F) -> bool
where
    T: Entity,
    F: FnOnce(&T, &T) -> bool,
{
    if std::ptr::eq(a, b) {
        return true;
    }

    match (a.id(), b.id()) {
        (Some(left), Some(right)) => left == right,
        (None, None) => same_fields(a, b),
        _ => false,
    }
}
