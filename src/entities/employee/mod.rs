//! Employee entity module

pub mod assembler;
pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;

pub use assembler::EmployeeModelAssembler;
pub use descriptor::EmployeeDescriptor;
pub use model::Employee;
pub use service::{EmployeeInput, EmployeeService, Replaced};
