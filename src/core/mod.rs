//! Core module containing fundamental traits and types for the service

pub mod entity;
pub mod error;
pub mod hal;
pub mod http;
pub mod service;

pub use entity::{Entity, EntityId, entity_eq};
pub use error::{PayrollError, PayrollResult};
pub use hal::{CollectionModel, EntityModel, Link, LinkBuilder, Links, ModelAssembler};
pub use service::DataService;
