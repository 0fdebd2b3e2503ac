//! Aggregated stores for all entities
//!
//! Bundles one `DataService` per entity type, built from the storage
//! configuration.

use crate::config::StorageConfig;
use crate::core::DataService;
use crate::entities::employee::Employee;
use crate::entities::order::Order;
use crate::storage::InMemoryDataService;
use anyhow::Result;
use std::sync::Arc;

/// One store per entity type
#[derive(Clone)]
pub struct Stores {
    pub orders: Arc<dyn DataService<Order>>,
    pub employees: Arc<dyn DataService<Employee>>,
}

impl Stores {
    /// Fresh, empty in-memory stores
    pub fn in_memory() -> Self {
        Self {
            orders: Arc::new(InMemoryDataService::<Order>::new()),
            employees: Arc::new(InMemoryDataService::<Employee>::new()),
        }
    }

    /// Build the stores selected by `config`
    ///
    /// For PostgreSQL this opens the pool and creates missing tables.
    pub async fn from_config(config: &StorageConfig) -> Result<Self> {
        match config {
            StorageConfig::Memory => {
                tracing::info!("using in-memory storage");
                Ok(Self::in_memory())
            }
            #[cfg(feature = "postgres")]
            StorageConfig::Postgres {
                url,
                max_connections,
            } => {
                use crate::storage::postgres::{PostgresDataService, connect, ensure_schema};

                let pool = connect(url, *max_connections).await?;
                ensure_schema::<Order>(&pool).await?;
                ensure_schema::<Employee>(&pool).await?;
                tracing::info!(max_connections, "using PostgreSQL storage");

                Ok(Self {
                    orders: Arc::new(PostgresDataService::<Order>::new(pool.clone())),
                    employees: Arc::new(PostgresDataService::<Employee>::new(pool)),
                })
            }
            #[cfg(not(feature = "postgres"))]
            StorageConfig::Postgres { .. } => Err(crate::core::error::StorageError::Unavailable {
                backend: "postgres".to_string(),
            }
            .into()),
        }
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_config_builds_empty_stores() {
        let stores = Stores::from_config(&StorageConfig::Memory).await.unwrap();
        assert!(stores.orders.list().await.unwrap().is_empty());
        assert!(stores.employees.list().await.unwrap().is_empty());
    }

    #[cfg(not(feature = "postgres"))]
    #[tokio::test]
    async fn test_postgres_unavailable_without_feature() {
        let config = StorageConfig::Postgres {
            url: "postgres://localhost/payroll".to_string(),
            max_connections: 1,
        };
        assert!(Stores::from_config(&config).await.is_err());
    }
}
