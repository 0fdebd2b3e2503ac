//! Server module for building HTTP servers with registered entity routes
//!
//! This module provides a `ServerBuilder` that registers:
//! - routes for every entity descriptor
//! - health check routes
//! - request tracing

pub mod builder;
pub mod entity_registry;
pub mod exposure;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
