//! Employee representation assembler

use super::model::Employee;
use crate::core::Entity;
use crate::core::hal::{CollectionModel, EntityModel, LinkBuilder, Links, ModelAssembler, SELF_REL};

#[derive(Debug, Clone)]
pub struct EmployeeModelAssembler {
    links: LinkBuilder,
}

impl EmployeeModelAssembler {
    pub fn new(links: LinkBuilder) -> Self {
        Self { links }
    }
}

impl ModelAssembler<Employee> for EmployeeModelAssembler {
    fn to_model(&self, employee: Employee) -> EntityModel<Employee> {
        let mut links = Links::new();

        if let Some(id) = employee.id {
            links = links
                .with(
                    SELF_REL,
                    self.links
                        .link([Employee::resource_name().to_string(), id.to_string()]),
                )
                .with(
                    Employee::resource_name(),
                    self.links.link([Employee::resource_name()]),
                );
        }

        EntityModel::new(employee, links)
    }

    fn to_collection_model(&self, employees: Vec<Employee>) -> CollectionModel<Employee> {
        let models = employees.into_iter().map(|e| self.to_model(e)).collect();
        CollectionModel::new(
            Employee::resource_name_singular(),
            models,
            Links::new().with(SELF_REL, self.links.link([Employee::resource_name()])),
        )
    }
}
