//! # Payroll
//!
//! A hypermedia REST service managing orders and employees.
//!
//! ## Features
//!
//! - **Order lifecycle**: orders start `IN_PROGRESS` and can be completed or
//!   cancelled exactly once
//! - **HAL responses**: every representation carries `_links`, and an order
//!   only advertises the transitions its current status permits
//! - **Pluggable storage**: in-memory by default, PostgreSQL behind the
//!   `postgres` feature
//! - **Problem details**: refused transitions answer `405` with an
//!   `application/problem+json` body
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use payroll::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_public_url("http://localhost:8080")
//!     .register_stores(Stores::in_memory())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Entity, EntityId},
        error::{PayrollError, PayrollResult},
        hal::{CollectionModel, EntityModel, Link, LinkBuilder, Links, ModelAssembler},
        service::DataService,
    };

    // === Entities ===
    pub use crate::entities::employee::{Employee, EmployeeInput, EmployeeService};
    pub use crate::entities::order::{NewOrder, Order, OrderAction, OrderService, OrderStatus};

    // === Storage ===
    pub use crate::storage::{InMemoryDataService, Stores};
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresDataService;

    // === Config ===
    pub use crate::config::{AppConfig, ServerConfig, StorageConfig};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
