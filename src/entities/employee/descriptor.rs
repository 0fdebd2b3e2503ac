//! Entity descriptor for Employee

use super::assembler::EmployeeModelAssembler;
use super::handlers::{
    EmployeeAppState, create_employee, delete_employee, get_employee, list_employees,
    replace_employee,
};
use super::service::EmployeeService;
use crate::core::hal::LinkBuilder;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Employee entity
pub struct EmployeeDescriptor {
    pub service: EmployeeService,
}

impl EmployeeDescriptor {
    pub fn new(service: EmployeeService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for EmployeeDescriptor {
    fn entity_type(&self) -> &str {
        "employee"
    }

    fn build_routes(&self, links: &LinkBuilder) -> Router {
        let state = EmployeeAppState {
            service: self.service.clone(),
            assembler: EmployeeModelAssembler::new(links.clone()),
        };

        Router::new()
            .route("/employees", get(list_employees).post(create_employee))
            .route(
                "/employees/{id}",
                get(get_employee)
                    .put(replace_employee)
                    .delete(delete_employee),
            )
            .with_state(state)
    }
}
