//! Order lifecycle service
//!
//! All reads and writes of orders go through [`OrderService`], which also
//! enforces the lifecycle guard. The transitions are plain read-modify-write
//! sequences against the store: two concurrent transitions on the same order
//! can both pass the guard, and the last write wins.

use super::model::{Order, OrderAction};
use crate::core::error::{EntityError, PayrollResult, StorageError};
use crate::core::{DataService, Entity};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Client submission for a new order.
///
/// Any other field in the request body, `status` and `id` included, is
/// ignored: the server owns both.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub description: String,
}

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn DataService<Order>>,
}

impl OrderService {
    pub fn new(store: Arc<dyn DataService<Order>>) -> Self {
        Self { store }
    }

    pub async fn list_orders(&self) -> PayrollResult<Vec<Order>> {
        self.store
            .list()
            .await
            .map_err(StorageError::operation("list orders"))
    }

    pub async fn get_order(&self, id: &Uuid) -> PayrollResult<Order> {
        self.store
            .get(id)
            .await
            .map_err(StorageError::operation("get order"))?
            .ok_or_else(|| EntityError::not_found(Order::resource_name_singular(), id).into())
    }

    pub async fn create_order(&self, new_order: NewOrder) -> PayrollResult<Order> {
        let order = self
            .store
            .create(Order::new(new_order.description))
            .await
            .map_err(StorageError::operation("create order"))?;

        tracing::info!(order_id = ?order.id, "order created");
        Ok(order)
    }

    pub async fn cancel_order(&self, id: &Uuid) -> PayrollResult<Order> {
        self.transition(id, OrderAction::Cancel).await
    }

    pub async fn complete_order(&self, id: &Uuid) -> PayrollResult<Order> {
        self.transition(id, OrderAction::Complete).await
    }

    async fn transition(&self, id: &Uuid, action: OrderAction) -> PayrollResult<Order> {
        let mut order = self.get_order(id).await?;

        if let Err(err) = order.apply(action) {
            tracing::warn!(order_id = %id, status = %err.from, %action, "transition rejected");
            return Err(err.into());
        }

        let order = self
            .store
            .update(id, order)
            .await
            .map_err(StorageError::operation("update order"))?;

        tracing::info!(order_id = %id, status = %order.status, %action, "order transitioned");
        Ok(order)
    }
}
