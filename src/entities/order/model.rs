//! Order entity and its lifecycle

use crate::core::entity::{Entity, entity_eq};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle state of an order
///
/// `InProgress` is the only initial state; `Completed` and `Cancelled` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, OrderStatus::InProgress)
    }

    /// Apply `action` to this state
    pub fn transition(self, action: OrderAction) -> Result<OrderStatus, TransitionError> {
        if self.is_terminal() {
            return Err(TransitionError { action, from: self });
        }
        Ok(action.target())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions that move an order out of `IN_PROGRESS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderAction {
    Cancel,
    Complete,
}

impl OrderAction {
    /// Link relation and URL segment of the action
    pub fn rel(&self) -> &'static str {
        match self {
            OrderAction::Cancel => "cancel",
            OrderAction::Complete => "complete",
        }
    }

    /// State the order ends up in
    pub fn target(&self) -> OrderStatus {
        match self {
            OrderAction::Cancel => OrderStatus::Cancelled,
            OrderAction::Complete => OrderStatus::Completed,
        }
    }

    /// Actions currently valid for an order in `status`
    pub fn permitted(status: OrderStatus) -> &'static [OrderAction] {
        if status.is_terminal() {
            &[]
        } else {
            &[OrderAction::Cancel, OrderAction::Complete]
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rel())
    }
}

/// Rejected lifecycle transition
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("You can't {action} an order that is in the {from} status")]
pub struct TransitionError {
    pub action: OrderAction,
    pub from: OrderStatus,
}

/// A customer order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub description: String,
    pub status: OrderStatus,
}

impl Order {
    /// A new, unsaved order. Orders always start `IN_PROGRESS`.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
            status: OrderStatus::InProgress,
        }
    }

    /// An unsaved order in an arbitrary state, for fixtures and imports
    pub fn with_status(description: impl Into<String>, status: OrderStatus) -> Self {
        Self {
            status,
            ..Self::new(description)
        }
    }

    pub fn apply(&mut self, action: OrderAction) -> Result<(), TransitionError> {
        self.status = self.status.transition(action)?;
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        self.apply(OrderAction::Cancel)
    }

    pub fn complete(&mut self) -> Result<(), TransitionError> {
        self.apply(OrderAction::Complete)
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        entity_eq(self, other, |a, b| {
            a.description == b.description && a.status == b.status
        })
    }
}

impl Entity for Order {
    type Id = Uuid;

    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn table_name() -> &'static str {
        "customer_order"
    }

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}
