//! Entity descriptor for Order

use super::assembler::OrderModelAssembler;
use super::handlers::{
    OrderAppState, cancel_order, complete_order, create_order, get_order, list_orders,
};
use super::service::OrderService;
use crate::core::hal::LinkBuilder;
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{delete, get, put},
};

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub service: OrderService,
}

impl OrderDescriptor {
    pub fn new(service: OrderService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn build_routes(&self, links: &LinkBuilder) -> Router {
        let state = OrderAppState {
            service: self.service.clone(),
            assembler: OrderModelAssembler::new(links.clone()),
        };

        Router::new()
            .route("/orders", get(list_orders).post(create_order))
            .route("/orders/{id}", get(get_order))
            .route("/orders/{id}/cancel", delete(cancel_order))
            .route("/orders/{id}/complete", put(complete_order))
            .with_state(state)
    }
}
