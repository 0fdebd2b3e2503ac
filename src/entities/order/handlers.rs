//! Order HTTP handlers

use super::assembler::OrderModelAssembler;
use super::model::Order;
use super::service::{NewOrder, OrderService};
use crate::core::error::PayrollResult;
use crate::core::hal::{CollectionModel, EntityModel, ModelAssembler};
use crate::core::http::{created, decode_body, parse_id};
use axum::{
    extract::{Path, State},
    response::{Json, Response},
};
use serde_json::Value;

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub service: OrderService,
    pub assembler: OrderModelAssembler,
}

/// GET /orders
pub async fn list_orders(
    State(state): State<OrderAppState>,
) -> PayrollResult<Json<CollectionModel<Order>>> {
    let orders = state.service.list_orders().await?;
    Ok(Json(state.assembler.to_collection_model(orders)))
}

/// GET /orders/{id}
pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(id): Path<String>,
) -> PayrollResult<Json<EntityModel<Order>>> {
    let id = parse_id::<Order>(&id)?;
    let order = state.service.get_order(&id).await?;
    Ok(Json(state.assembler.to_model(order)))
}

/// POST /orders
pub async fn create_order(
    State(state): State<OrderAppState>,
    Json(payload): Json<Value>,
) -> PayrollResult<Response> {
    let new_order: NewOrder = decode_body(payload)?;
    let order = state.service.create_order(new_order).await?;
    created(state.assembler.to_model(order))
}

/// DELETE /orders/{id}/cancel
pub async fn cancel_order(
    State(state): State<OrderAppState>,
    Path(id): Path<String>,
) -> PayrollResult<Json<EntityModel<Order>>> {
    let id = parse_id::<Order>(&id)?;
    let order = state.service.cancel_order(&id).await?;
    Ok(Json(state.assembler.to_model(order)))
}

/// PUT /orders/{id}/complete
pub async fn complete_order(
    State(state): State<OrderAppState>,
    Path(id): Path<String>,
) -> PayrollResult<Json<EntityModel<Order>>> {
    let id = parse_id::<Order>(&id)?;
    let order = state.service.complete_order(&id).await?;
    Ok(Json(state.assembler.to_model(order)))
}
