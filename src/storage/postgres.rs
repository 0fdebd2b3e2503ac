//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresDataService<T>` backed by a PostgreSQL database via
//! `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! payroll-rs = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! One table per entity type, named by [`Entity::table_name`]:
//!
//! ```sql
//! CREATE TABLE customer_order (
//!     id   UUID PRIMARY KEY,
//!     data JSONB NOT NULL,
//!     seq  BIGSERIAL
//! );
//! ```
//!
//! `data` holds every field except the id. Enums such as the order status
//! are stored with their textual representation. `seq` keeps `list()` in
//! creation order.

use crate::core::error::StorageError;
use crate::core::{DataService, Entity, EntityId};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::marker::PhantomData;
use uuid::Uuid;

/// Open a connection pool
///
/// Failures carry a [`StorageError::ConnectionError`].
pub async fn connect(url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
        .map_err(|e| StorageError::ConnectionError {
            backend: "postgres".to_string(),
            message: e.to_string(),
        })?;

    Ok(pool)
}

/// Create the table backing `T` if it does not exist (idempotent).
///
/// Safe to call on every startup.
pub async fn ensure_schema<T: Entity>(pool: &PgPool) -> Result<()> {
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {} (
            id UUID PRIMARY KEY,
            data JSONB NOT NULL,
            seq BIGSERIAL
        )",
        T::table_name()
    );

    sqlx::query(&sql)
        .execute(pool)
        .await
        .map_err(|e| anyhow!("Failed to create {} table: {}", T::table_name(), e))?;

    Ok(())
}

/// Generic data storage service backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// let pool = payroll::storage::postgres::connect("postgres://localhost/payroll", 5).await?;
/// ensure_schema::<Order>(&pool).await?;
/// let service = PostgresDataService::<Order>::new(pool);
/// ```
#[derive(Clone, Debug)]
pub struct PostgresDataService<T> {
    pool: PgPool,
    _marker: PhantomData<T>,
}

impl<T> PostgresDataService<T> {
    /// Create a new `PostgresDataService` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl<T: Entity<Id = Uuid>> PostgresDataService<T> {
    /// Serialize an entity into the `data` column (id removed)
    fn extract_data(entity: &T) -> Result<serde_json::Value> {
        let mut data = serde_json::to_value(entity)
            .map_err(|e| anyhow!("Failed to serialize {}: {}", T::resource_name_singular(), e))?;

        if let Some(obj) = data.as_object_mut() {
            obj.remove("id");
        }

        Ok(data)
    }

    /// Rebuild an entity from its row
    fn reconstruct_entity(id: Uuid, data: serde_json::Value) -> Result<T> {
        let mut entity: T = serde_json::from_value(data).map_err(|e| {
            anyhow!(
                "Failed to deserialize {} from row: {}",
                T::resource_name_singular(),
                e
            )
        })?;
        entity.assign_id(id);
        Ok(entity)
    }
}

#[async_trait]
impl<T: Entity<Id = Uuid>> DataService<T> for PostgresDataService<T> {
    async fn create(&self, mut entity: T) -> Result<T> {
        let id = match entity.id() {
            Some(id) => id,
            None => {
                let id = Uuid::generate();
                entity.assign_id(id);
                id
            }
        };
        let data = Self::extract_data(&entity)?;

        let sql = format!("INSERT INTO {} (id, data) VALUES ($1, $2)", T::table_name());
        sqlx::query(&sql)
            .bind(id)
            .bind(&data)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to create {}: {}", T::resource_name_singular(), e))?;

        Ok(entity)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let sql = format!("SELECT id, data FROM {} WHERE id = $1", T::table_name());
        let row = sqlx::query_as::<_, (Uuid, serde_json::Value)>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to get {}: {}", T::resource_name_singular(), e))?;

        row.map(|(id, data)| Self::reconstruct_entity(id, data))
            .transpose()
    }

    async fn list(&self) -> Result<Vec<T>> {
        let sql = format!("SELECT id, data FROM {} ORDER BY seq", T::table_name());
        let rows = sqlx::query_as::<_, (Uuid, serde_json::Value)>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to list {}: {}", T::resource_name(), e))?;

        rows.into_iter()
            .map(|(id, data)| Self::reconstruct_entity(id, data))
            .collect()
    }

    async fn update(&self, id: &Uuid, mut entity: T) -> Result<T> {
        entity.assign_id(*id);
        let data = Self::extract_data(&entity)?;

        let sql = format!("UPDATE {} SET data = $1 WHERE id = $2", T::table_name());
        let result = sqlx::query(&sql)
            .bind(&data)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to update {}: {}", T::resource_name_singular(), e))?;

        if result.rows_affected() == 0 {
            return Err(anyhow!("{} not found: {}", T::resource_name_singular(), id));
        }

        Ok(entity)
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::table_name());
        sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete {}: {}", T::resource_name_singular(), e))?;

        Ok(())
    }
}
