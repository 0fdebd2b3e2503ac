//! Employee HTTP handlers

use super::assembler::EmployeeModelAssembler;
use super::model::Employee;
use super::service::{EmployeeInput, EmployeeService, Replaced};
use crate::core::error::PayrollResult;
use crate::core::hal::{CollectionModel, EntityModel, ModelAssembler};
use crate::core::http::{created, decode_body, parse_id};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;

/// Employee-specific AppState
#[derive(Clone)]
pub struct EmployeeAppState {
    pub service: EmployeeService,
    pub assembler: EmployeeModelAssembler,
}

pub async fn list_employees(
    State(state): State<EmployeeAppState>,
) -> PayrollResult<Json<CollectionModel<Employee>>> {
    let employees = state.service.list_employees().await?;
    Ok(Json(state.assembler.to_collection_model(employees)))
}

pub async fn get_employee(
    State(state): State<EmployeeAppState>,
    Path(id): Path<String>,
) -> PayrollResult<Json<EntityModel<Employee>>> {
    let id = parse_id::<Employee>(&id)?;
    let employee = state.service.get_employee(&id).await?;
    Ok(Json(state.assembler.to_model(employee)))
}

pub async fn create_employee(
    State(state): State<EmployeeAppState>,
    Json(payload): Json<Value>,
) -> PayrollResult<Response> {
    let input: EmployeeInput = decode_body(payload)?;
    let employee = state.service.create_employee(input).await?;
    created(state.assembler.to_model(employee))
}

/// PUT /employees/{id}: 200 when replacing, 201 when the id was new
pub async fn replace_employee(
    State(state): State<EmployeeAppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> PayrollResult<Response> {
    let id = parse_id::<Employee>(&id)?;
    let input: EmployeeInput = decode_body(payload)?;

    let (employee, outcome) = state.service.replace_employee(&id, input).await?;
    let model = state.assembler.to_model(employee);

    match outcome {
        Replaced::Updated => Ok(Json(model).into_response()),
        Replaced::Created => created(model),
    }
}

pub async fn delete_employee(
    State(state): State<EmployeeAppState>,
    Path(id): Path<String>,
) -> PayrollResult<StatusCode> {
    let id = parse_id::<Employee>(&id)?;
    state.service.delete_employee(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
